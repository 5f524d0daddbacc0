use std::cell::RefCell;

use log::warn;

use crate::errors::Error;

/// Receives the failures that happen while looking up names during a render.
///
/// A failure never stops a render: the name is treated as undefined and the
/// sink decides what to do with the error.
pub trait Diagnostics {
    /// Called when looking up `name` failed, for example because a lambda returned an error
    fn lookup_failed(&self, name: &str, error: &Error);
}

/// Forwards failures to the `log` crate, the default
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn lookup_failed(&self, name: &str, error: &Error) {
        warn!("Failed to look up `{}`: {}", name, error);
    }
}

/// Drops failures
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreDiagnostics;

impl Diagnostics for IgnoreDiagnostics {
    fn lookup_failed(&self, _name: &str, _error: &Error) {}
}

/// Keeps failures as `name: error` strings, handy in tests
#[derive(Debug, Default)]
pub struct CollectDiagnostics {
    failures: RefCell<Vec<String>>,
}

impl CollectDiagnostics {
    /// Creates an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// The failures collected so far
    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }
}

impl Diagnostics for CollectDiagnostics {
    fn lookup_failed(&self, name: &str, error: &Error) {
        self.failures.borrow_mut().push(format!("{}: {}", name, error));
    }
}
