//! One-call helpers parsing then rendering a template.
//!
//! They have no error channel: a template that fails to parse renders as the error
//! message. Use `Template` directly to handle errors.

use std::path::Path;

use crate::template::Template;
use crate::value::Value;

/// Parses `input` and renders it against `contexts`
pub fn render(input: &str, contexts: &[Value]) -> String {
    match Template::parse_str(input) {
        Ok(tpl) => tpl.render(contexts),
        Err(e) => e.to_string(),
    }
}

/// Parses both templates and renders `input` inside `layout`
pub fn render_in_layout(input: &str, layout: &str, contexts: &[Value]) -> String {
    let layout = match Template::parse_str(layout) {
        Ok(tpl) => tpl,
        Err(e) => return e.to_string(),
    };
    match Template::parse_str(input) {
        Ok(tpl) => tpl.render_in_layout(&layout, contexts),
        Err(e) => e.to_string(),
    }
}

/// Parses the file at `path` and renders it against `contexts`
pub fn render_file<P: AsRef<Path>>(path: P, contexts: &[Value]) -> String {
    match Template::from_file(path) {
        Ok(tpl) => tpl.render(contexts),
        Err(e) => e.to_string(),
    }
}

/// Parses both files and renders the one at `path` inside the one at `layout`
pub fn render_file_in_layout<P: AsRef<Path>, L: AsRef<Path>>(
    path: P,
    layout: L,
    contexts: &[Value],
) -> String {
    let layout = match Template::from_file(layout) {
        Ok(tpl) => tpl,
        Err(e) => return e.to_string(),
    };
    match Template::from_file(path) {
        Ok(tpl) => tpl.render_in_layout(&layout, contexts),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_one_off() {
        let data = Value::from(json!({"a": [1, 2, 3]}));
        assert_eq!(render("{{#a}}{{.}}{{/a}}", &[data]), "123");
    }

    #[test]
    fn parse_errors_become_the_output() {
        assert_eq!(render("{{#a}}{{/b}}", &[]), "line 1: interleaved closing tag: b");
    }

    #[test]
    fn layout_errors_win() {
        assert_eq!(render_in_layout("{{#a}}", "{{/b}}", &[]), "line 1: unmatched close tag: b");
        assert_eq!(
            render_in_layout("{{#a}}", "{{{content}}}", &[]),
            "line 1: section a opened on line 1 has no closing tag"
        );
        assert_eq!(render_in_layout("<{{x}}>", "[{{{content}}}]", &[Value::from(json!({"x": 1}))]), "[<1>]");
    }

    #[test]
    fn missing_files_become_the_output() {
        assert_eq!(render_file("nope.mustache", &[]), "Failed to read template `nope.mustache`");
        assert_eq!(
            render_file_in_layout("a.mustache", "nope.mustache", &[]),
            "Failed to read template `nope.mustache`"
        );
    }
}
