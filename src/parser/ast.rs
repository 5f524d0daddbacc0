use std::fmt;

use crate::template::Template;

/// The open/close markers bounding a tag
#[derive(Clone, Debug, PartialEq)]
pub struct Delimiters {
    /// `{{` by default
    pub open: String,
    /// `}}` by default
    pub close: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters { open: "{{".to_string(), close: "}}".to_string() }
    }
}

impl fmt::Display for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.open, self.close)
    }
}

/// A `{{#name}}...{{/name}}` or `{{^name}}...{{/name}}` block
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Name looked up in the context chain
    pub name: String,
    /// `true` for `{{^name}}`
    pub inverted: bool,
    /// Line of the opening tag
    pub line: usize,
    /// Content of the section
    pub nodes: Vec<Node>,
}

/// All Mustache nodes that can be encountered
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Text between tags, outputted as-is
    Text(String),
    /// `{{name}}`, or `{{{name}}}` when `escape` is false
    Variable {
        /// Name looked up in the context chain
        name: String,
        /// Whether the value is HTML-escaped when rendered
        escape: bool,
    },
    /// A section, iterated or rendered conditionally
    Section(Section),
    /// `{{>name}}`, already parsed
    Partial(Template),
}
