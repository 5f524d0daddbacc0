//! The data a template is rendered against

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::ser::Serialize;
use serde_json::{Number, Value as Json};

use crate::errors::Result;

/// A mapping of names to values, what serialized structs and maps turn into
pub type Map = BTreeMap<String, Value>;

/// A caller-defined type that templates can read fields from and call methods on.
///
/// Both lookups return `None` when the type has no member with that name, which lets
/// the lookup continue in the enclosing scopes.
pub trait Record: fmt::Debug + Send + Sync {
    /// Returns the value of the field `name`
    fn field(&self, _name: &str) -> Option<Value> {
        None
    }

    /// Calls the zero-argument method `name`.
    /// A returned error is reported and the name is treated as undefined.
    fn call(&self, _name: &str) -> Option<Result<Value>> {
        None
    }

    /// How the record is printed when used directly in a variable tag
    fn render(&self) -> String {
        String::new()
    }
}

/// A zero-argument function evaluated each time its name is looked up
#[derive(Clone)]
pub struct Lambda(Arc<dyn Fn() -> Result<Value> + Send + Sync>);

impl Lambda {
    /// Wraps a closure
    pub fn new<F>(f: F) -> Lambda
    where
        F: Fn() -> Result<Value> + Send + Sync + 'static,
    {
        Lambda(Arc::new(f))
    }

    /// Invokes the function
    pub fn call(&self) -> Result<Value> {
        (self.0)()
    }
}

impl fmt::Debug for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lambda")
    }
}

/// Any value that can be found in a context chain.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absent optional value
    Null,
    /// `true` or `false`
    Bool(bool),
    /// Integer or float
    Number(Number),
    /// Text
    String(String),
    /// An ordered collection, iterated by sections
    Array(Vec<Value>),
    /// A mapping from names to values
    Map(Map),
    /// A callable evaluated on lookup
    Lambda(Lambda),
    /// A caller-defined type with fields and methods
    Record(Arc<dyn Record>),
}

impl Value {
    /// Builds a `Value::Lambda` out of a closure
    pub fn lambda<F>(f: F) -> Value
    where
        F: Fn() -> Result<Value> + Send + Sync + 'static,
    {
        Value::Lambda(Lambda::new(f))
    }

    /// Builds a `Value::Record`
    pub fn record<R: Record + 'static>(record: R) -> Value {
        Value::Record(Arc::new(record))
    }

    /// Whether a section on that value is skipped (or an inverted one rendered).
    /// Only `null`, `false` and empty arrays are empty: `0`, `""` and `{}` are not.
    pub fn is_empty(&self) -> bool {
        match *self {
            Value::Null | Value::Bool(false) => true,
            Value::Array(ref items) => items.is_empty(),
            _ => false,
        }
    }

    /// The text emitted when the value is used in a variable tag
    pub fn as_text(&self) -> Cow<'_, str> {
        match *self {
            Value::Null => Cow::Borrowed(""),
            Value::Bool(b) => Cow::Borrowed(if b { "true" } else { "false" }),
            Value::Number(ref n) => Cow::Owned(n.to_string()),
            Value::String(ref s) => Cow::Borrowed(s),
            Value::Array(ref items) => {
                let items: Vec<_> = items.iter().map(|v| v.as_text()).collect();
                Cow::Owned(format!("[{}]", items.join(", ")))
            }
            Value::Map(ref map) => {
                let entries: Vec<_> =
                    map.iter().map(|(k, v)| format!("{}: {}", k, v.as_text())).collect();
                Cow::Owned(format!("{{{}}}", entries.join(", ")))
            }
            Value::Lambda(_) => Cow::Borrowed("<lambda>"),
            Value::Record(ref r) => Cow::Owned(r.render()),
        }
    }

    /// Returns the string if the value is one
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Value::String(ref s) => Some(s),
            _ => None,
        }
    }

    /// Returns the map if the value is one
    pub fn as_map(&self) -> Option<&Map> {
        match *self {
            Value::Map(ref m) => Some(m),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Lambda(a), Value::Lambda(b)) => Arc::ptr_eq(&a.0, &b.0),
            (Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Default for Value {
    fn default() -> Value {
        Value::Null
    }
}

/// Converts any serializable data into a `Value`
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?.into())
}

impl From<Json> for Value {
    fn from(json: Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Value {
                    Value::Number(n.into())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Value {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Value {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Value {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(map: HashMap<String, T>) -> Value {
        Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<Lambda> for Value {
    fn from(lambda: Lambda) -> Value {
        Value::Lambda(lambda)
    }
}
