
use std::path::Path;

use crate::errors::Result;
use crate::parser::ast::Node;
use crate::parser::Parser;

pub fn parse(input: &str) -> Result<Vec<Node>> {
    Parser::new(input, Path::new(""), &[]).parse().map(|(nodes, _)| nodes)
}
