use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{Error, ErrorKind, Result};
use crate::template::Template;

/// The AST of a Mustache template
pub mod ast;
mod scanner;

#[cfg(test)]
mod tests;

use self::ast::*;
use self::scanner::{Scanned, Scanner};

lazy_static! {
    static ref DELIMITERS_TAG: Regex = Regex::new(r"^=\s*(\S+)\s+(\S+)\s*=$").unwrap();
}

/// Extensions tried, in order, after the bare partial name
const PARTIAL_EXTENSIONS: [&str; 2] = ["mustache", "stache"];

/// Turns template source into nodes, loading partials along the way
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    delimiters: Delimiters,
    /// Directory searched first for partials
    dir: &'a Path,
    /// Canonical paths of the template files currently being parsed, outermost first
    ancestors: &'a [PathBuf],
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, dir: &'a Path, ancestors: &'a [PathBuf]) -> Parser<'a> {
        Parser { scanner: Scanner::new(input), delimiters: Delimiters::default(), dir, ancestors }
    }

    /// Parses the whole input, returning the nodes and the delimiters in effect at the end
    pub fn parse(mut self) -> Result<(Vec<Node>, Delimiters)> {
        let nodes = self.parse_nodes(None)?;
        Ok((nodes, self.delimiters))
    }

    /// Parses nodes until the end of the input, or until the closing tag of `section`
    /// (its name and opening line) when there is one.
    fn parse_nodes(&mut self, section: Option<(&str, usize)>) -> Result<Vec<Node>> {
        let mut nodes = vec![];

        loop {
            match self.scanner.read_until(&self.delimiters.open) {
                Scanned::Found(text) => push_text(&mut nodes, text),
                Scanned::Eof(text) => {
                    if let Some((name, line)) = section {
                        return Err(Error::parse(
                            ErrorKind::UnclosedSection { name: name.to_string(), line },
                            line,
                        ));
                    }
                    push_text(&mut nodes, text);
                    return Ok(nodes);
                }
            }

            let tag_line = self.scanner.line();
            let raw = self.scanner.peek() == Some('{');
            let body = {
                let marker = if raw {
                    format!("}}{}", self.delimiters.close)
                } else {
                    self.delimiters.close.clone()
                };
                match self.scanner.read_until(&marker) {
                    Scanned::Found(body) => body,
                    Scanned::Eof(_) => {
                        return Err(Error::parse(ErrorKind::UnmatchedOpenTag, tag_line));
                    }
                }
            };
            let line = self.scanner.line();

            let tag = body.trim();
            if raw {
                // The closing brace was consumed with the close delimiter
                nodes.push(Node::Variable { name: tag_name(&tag[1..], line)?, escape: false });
                continue;
            }

            let lead = match tag.chars().next() {
                Some(c) => c,
                None => return Err(Error::parse(ErrorKind::EmptyTag, line)),
            };
            let rest = &tag[lead.len_utf8()..];

            match lead {
                '!' => (),
                '#' | '^' => {
                    let name = tag_name(rest, line)?;
                    self.scanner.skip_newline();
                    let children = self.parse_nodes(Some((&name, line)))?;
                    nodes.push(Node::Section(Section {
                        name,
                        inverted: lead == '^',
                        line,
                        nodes: children,
                    }));
                }
                '/' => {
                    let name = tag_name(rest, line)?;
                    return match section {
                        Some((open, _)) if open == name => Ok(nodes),
                        Some(_) => Err(Error::parse(
                            ErrorKind::InterleavedClosingTag(name),
                            line,
                        )),
                        None => {
                            Err(Error::parse(ErrorKind::UnmatchedCloseTag(name), line))
                        }
                    };
                }
                '>' => {
                    let name = tag_name(rest, line)?;
                    nodes.push(Node::Partial(self.parse_partial(&name, line)?));
                }
                '=' => self.change_delimiters(tag, line)?,
                '{' => match rest.strip_suffix('}') {
                    Some(inner) => {
                        nodes.push(Node::Variable { name: tag_name(inner, line)?, escape: false })
                    }
                    None => {
                        return Err(Error::parse(
                            ErrorKind::UnterminatedRawTag(tag.to_string()),
                            line,
                        ))
                    }
                },
                _ => nodes.push(Node::Variable { name: tag.to_string(), escape: true }),
            }
        }
    }

    /// Handles `=<open> <close>=`
    fn change_delimiters(&mut self, tag: &str, line: usize) -> Result<()> {
        let invalid = || Error::parse(ErrorKind::InvalidDelimiters(tag.to_string()), line);
        let caps = DELIMITERS_TAG.captures(tag).ok_or_else(invalid)?;
        if caps[1] == caps[2] {
            return Err(invalid());
        }

        self.delimiters = Delimiters { open: caps[1].to_string(), close: caps[2].to_string() };
        Ok(())
    }

    fn parse_partial(&self, name: &str, line: usize) -> Result<Template> {
        let path = find_partial(self.dir, name)
            .ok_or_else(|| Error::parse(ErrorKind::PartialNotFound(name.to_string()), line))?;
        let canonical = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if self.ancestors.contains(&canonical) {
            return Err(Error::parse(ErrorKind::RecursivePartial(name.to_string()), line));
        }
        debug!("Partial `{}` resolved to {}", name, path.display());

        let mut ancestors = self.ancestors.to_vec();
        ancestors.push(canonical);
        Template::load(&path, &ancestors).map_err(|e| e.at_line(line))
    }
}

/// Looks for the partial `name` next to the template first, then from the working directory,
/// trying the bare name before the known extensions.
pub fn find_partial(dir: &Path, name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::with_capacity(2 * (PARTIAL_EXTENSIONS.len() + 1));
    for base in &[dir.join(name), PathBuf::from(name)] {
        candidates.push(base.clone());
        for ext in &PARTIAL_EXTENSIONS {
            let mut path = base.clone().into_os_string();
            path.push(".");
            path.push(ext);
            candidates.push(PathBuf::from(path));
        }
    }

    candidates.into_iter().find(|p| p.is_file())
}

fn tag_name(name: &str, line: usize) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::parse(ErrorKind::EmptyTag, line));
    }
    Ok(name.to_string())
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_string()));
    }
}
