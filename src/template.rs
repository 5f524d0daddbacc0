use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};
use crate::parser::ast::{Delimiters, Node};
use crate::parser::Parser;
use crate::renderer::{Diagnostics, LogDiagnostics, Renderer};
use crate::value::{Map, Value};

/// This is the parsed equivalent of a template file or string.
///
/// Partials are parsed along with the template that references them so rendering
/// never touches the filesystem and never fails. A `Template` is immutable and can be
/// rendered from several threads at the same time.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    nodes: Vec<Node>,
    delimiters: Delimiters,
    /// Directory searched first when resolving partials
    dir: PathBuf,
}

impl Template {
    /// Parses a template string.
    ///
    /// Partials are looked up relative to the directory in the `CWD` environment variable
    /// if it is set, relative to the working directory otherwise.
    pub fn parse_str(input: &str) -> Result<Template> {
        let dir = env::var_os("CWD").map(PathBuf::from).unwrap_or_default();
        Template::parse_str_in(input, dir)
    }

    /// Parses a template string, looking up partials relative to `dir` first
    pub fn parse_str_in<P: AsRef<Path>>(input: &str, dir: P) -> Result<Template> {
        Template::parse(input, dir.as_ref().to_path_buf(), &[])
    }

    /// Reads and parses a template file, the directory of the file being where
    /// partials are looked up first
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Template> {
        let path = path.as_ref();
        let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        Template::load(path, &[canonical])
    }

    /// `ancestors` holds the canonical paths of the files being parsed, `path` included
    pub(crate) fn load(path: &Path, ancestors: &[PathBuf]) -> Result<Template> {
        let input = fs::read_to_string(path).map_err(|e| {
            Error::chain(format!("Failed to read template `{}`", path.display()), e)
        })?;
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Template::parse(&input, dir, ancestors)
    }

    fn parse(input: &str, dir: PathBuf, ancestors: &[PathBuf]) -> Result<Template> {
        let (nodes, delimiters) = Parser::new(input, &dir, ancestors).parse()?;
        Ok(Template { nodes, delimiters, dir })
    }

    /// Renders the template against `contexts`, the first one being searched first.
    /// Lookup failures are logged.
    pub fn render(&self, contexts: &[Value]) -> String {
        self.render_with(contexts, &LogDiagnostics)
    }

    /// Renders the template, reporting lookup failures to `diagnostics`
    pub fn render_with(&self, contexts: &[Value], diagnostics: &dyn Diagnostics) -> String {
        Renderer::new(self, diagnostics).render(contexts.iter().collect())
    }

    /// Renders the template then renders `layout` with the result available as `content`,
    /// ahead of `contexts`
    pub fn render_in_layout(&self, layout: &Template, contexts: &[Value]) -> String {
        self.render_in_layout_with(layout, contexts, &LogDiagnostics)
    }

    /// Same as `render_in_layout` but reports lookup failures to `diagnostics`
    pub fn render_in_layout_with(
        &self,
        layout: &Template,
        contexts: &[Value],
        diagnostics: &dyn Diagnostics,
    ) -> String {
        let content = self.render_with(contexts, diagnostics);
        let mut data = Map::new();
        data.insert("content".to_string(), Value::String(content));
        let data = Value::Map(data);

        let mut frames = Vec::with_capacity(contexts.len() + 1);
        frames.push(&data);
        frames.extend(contexts);
        Renderer::new(layout, diagnostics).render(frames)
    }

    /// The nodes of the template
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The delimiters active at the end of the template
    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// The directory partials were looked up in first
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
