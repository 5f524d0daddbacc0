#![doc(html_root_url = "https://docs.rs/stache")]
//! # Stache
//!
//! Logic-less [Mustache] templates for Rust.
//!
//! Templates are parsed once into an immutable [`Template`], partials included, and can
//! then be rendered any number of times, from any number of threads, against data
//! coming from serde or built by hand.
//!
//! ## Features
//!
//! - Variables, escaped by default (`{{name}}`) or raw (`{{{name}}}`)
//! - Sections iterating over arrays or acting as conditionals (`{{#items}}...{{/items}}`)
//! - Inverted sections (`{{^items}}...{{/items}}`)
//! - Partials loaded from disk at parse time (`{{>header}}`)
//! - Custom delimiters (`{{=<% %>=}}`)
//! - Layouts receiving the rendered page as `content`
//! - Lambdas and records for data serde can't express
//!
//! ## Example
//!
//! ```rust
//! use stache::{Context, Template};
//!
//! let tpl = Template::parse_str("Hello {{#names}}{{.}} {{/names}}!").unwrap();
//!
//! let mut context = Context::new();
//! context.insert("names", &vec!["Ann", "Bob"]);
//!
//! let rendered = tpl.render(&[context.into_value()]);
//! assert_eq!(rendered, "Hello Ann Bob !");
//! ```
//!
//! [Mustache]: https://mustache.github.io/mustache.5.html

#![deny(missing_docs)]

#[macro_use]
mod macros;
mod context;
mod errors;
mod one_off;
mod parser;
mod renderer;
mod template;
mod utils;
mod value;

// Library exports.

pub use crate::context::Context;
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::one_off::{render, render_file, render_file_in_layout, render_in_layout};
pub use crate::renderer::{CollectDiagnostics, Diagnostics, IgnoreDiagnostics, LogDiagnostics};
pub use crate::template::Template;
pub use crate::utils::escape_html;
pub use crate::value::{to_value, Lambda, Map, Record, Value};
// Re-export Number from serde so apps can build numbers by hand
pub use serde_json::Number;

// Exposes the AST if one needs it but changing the AST is not considered
// a breaking change so it isn't public
#[doc(hidden)]
pub use crate::parser::ast;
