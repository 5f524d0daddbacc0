use crate::parser::ast::{Node, Section};
use crate::renderer::call_stack::CallStack;
use crate::renderer::Diagnostics;
use crate::template::Template;
use crate::utils::escape_html_into;
use crate::value::Value;

/// Given a `Template` and the contexts of a call, renders text
pub struct Renderer<'a> {
    /// Template to render
    template: &'a Template,
    /// Where lookup failures go
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> Renderer<'a> {
    /// Create a new `Renderer`
    pub fn new(template: &'a Template, diagnostics: &'a dyn Diagnostics) -> Renderer<'a> {
        Renderer { template, diagnostics }
    }

    /// Renders the template against `frames`, the first one being the innermost scope
    pub fn render(&self, frames: Vec<&Value>) -> String {
        let mut output = String::new();
        let call_stack = CallStack::new(frames);
        self.render_nodes(self.template.nodes(), &call_stack, &mut output);
        output
    }

    fn render_nodes(&self, nodes: &[Node], call_stack: &CallStack<'_>, output: &mut String) {
        for node in nodes {
            self.render_node(node, call_stack, output);
        }
    }

    fn render_node(&self, node: &Node, call_stack: &CallStack<'_>, output: &mut String) {
        match *node {
            Node::Text(ref text) => output.push_str(text),
            Node::Variable { ref name, escape } => {
                if let Some(value) = call_stack.lookup(name, self.diagnostics) {
                    let text = value.as_text();
                    if escape {
                        escape_html_into(&text, output);
                    } else {
                        output.push_str(&text);
                    }
                }
            }
            Node::Section(ref section) => self.render_section(section, call_stack, output),
            // partials see the same scopes as the template including them
            Node::Partial(ref partial) => self.render_nodes(partial.nodes(), call_stack, output),
        }
    }

    fn render_section(&self, section: &Section, call_stack: &CallStack<'_>, output: &mut String) {
        let value = call_stack.lookup(&section.name, self.diagnostics);
        let is_empty = value.as_ref().map_or(true, |v| v.is_empty());
        if is_empty != section.inverted {
            return;
        }

        let value = match value {
            Some(value) if !section.inverted => value,
            _ => return self.render_nodes(&section.nodes, call_stack, output),
        };

        match *value {
            Value::Array(ref items) => {
                if let Some((first, rest)) = items.split_first() {
                    let mut scope = call_stack.push(first);
                    self.render_nodes(&section.nodes, &scope, output);
                    for item in rest {
                        scope.replace_top(item);
                        self.render_nodes(&section.nodes, &scope, output);
                    }
                }
            }
            Value::Map(_) | Value::Record(_) => {
                let scope = call_stack.push(&value);
                self.render_nodes(&section.nodes, &scope, output);
            }
            _ => self.render_nodes(&section.nodes, call_stack, output),
        }
    }
}
