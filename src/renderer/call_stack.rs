use std::any::Any;
use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};

use crate::errors::{Error, Result};
use crate::renderer::Diagnostics;
use crate::value::Value;

pub type Val<'a> = Cow<'a, Value>;

/// The context chain of a render: the scopes a name is looked up in, innermost first
#[derive(Debug)]
pub struct CallStack<'a> {
    frames: Vec<&'a Value>,
}

impl<'a> CallStack<'a> {
    /// Create the initial call stack from the caller contexts
    pub fn new(frames: Vec<&'a Value>) -> CallStack<'a> {
        CallStack { frames }
    }

    /// Returns a new call stack with `value` as the innermost scope
    pub fn push<'b>(&self, value: &'b Value) -> CallStack<'b>
    where
        'a: 'b,
    {
        let mut frames = Vec::with_capacity(self.frames.len() + 1);
        frames.push(value);
        frames.extend(self.frames.iter().copied());
        CallStack { frames }
    }

    /// Swaps the innermost scope, used when iterating over an array
    pub fn replace_top(&mut self, value: &'a Value) {
        if let Some(top) = self.frames.first_mut() {
            *top = value;
        }
    }

    /// Finds `name` in the chain. `None` means undefined; failures are reported to
    /// `diagnostics` and end up undefined as well.
    pub fn lookup(&self, name: &str, diagnostics: &dyn Diagnostics) -> Option<Val<'a>> {
        match lookup_in(&self.frames, name) {
            Ok(found) => found,
            Err(e) => {
                diagnostics.lookup_failed(name, &e);
                None
            }
        }
    }
}

fn lookup_in<'a>(frames: &[&'a Value], name: &str) -> Result<Option<Val<'a>>> {
    if name == "." {
        return Ok(frames.first().map(|v| Cow::Borrowed(*v)));
    }

    // a dotted name only looks for the rest of its path inside the value of its head
    if let Some(dot) = name.find('.') {
        let (head, rest) = (&name[..dot], &name[dot + 1..]);
        return match lookup_in(frames, head)? {
            None => Ok(None),
            Some(Cow::Borrowed(v)) => lookup_in(&[v], rest),
            Some(Cow::Owned(v)) => {
                let found = lookup_in(&[&v], rest)?;
                Ok(found.map(|found| Cow::Owned(found.into_owned())))
            }
        };
    }

    for &frame in frames {
        if let Some(found) = find_in_frame(frame, name)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// Looks for `name` in a single scope: methods first, then fields or keys
fn find_in_frame<'a>(frame: &'a Value, name: &str) -> Result<Option<Val<'a>>> {
    let found = match *frame {
        Value::Record(ref record) => {
            if let Some(value) = guarded(|| record.call(name).transpose())? {
                return Ok(Some(Cow::Owned(value)));
            }
            guarded(|| Ok(record.field(name)))?.map(Cow::Owned)
        }
        Value::Map(ref map) => map.get(name).map(Cow::Borrowed),
        _ => None,
    };

    match found {
        Some(found) => {
            if let Value::Lambda(ref lambda) = *found {
                return Ok(Some(Cow::Owned(guarded(|| lambda.call())?)));
            }
            Ok(Some(found))
        }
        None => Ok(None),
    }
}

/// Runs caller code, turning a panic into an error
fn guarded<T, F: FnOnce() -> Result<T>>(f: F) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(Error::msg(format!("panicked: {}", panic_message(&*payload)))))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}
