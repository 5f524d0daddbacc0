//! Responsible for rendering mustache templates

pub use self::diagnostics::{CollectDiagnostics, Diagnostics, IgnoreDiagnostics, LogDiagnostics};
pub use self::renderer::Renderer;

mod call_stack;
mod diagnostics;
mod renderer;

#[cfg(test)]
mod tests;
