use serde::ser::Serialize;

use crate::errors::{Error, Result};
use crate::value::{to_value, Map, Value};

/// The struct that holds the data for one scope of a render.
///
/// Light wrapper around a `BTreeMap` for easier insertions of Serializable values.
/// A `Context` turns into a `Value::Map` so several of them can be layered in one
/// render call, the first one taking precedence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Context {
    data: Map,
}

impl Context {
    /// Initializes an empty context
    pub fn new() -> Self {
        Context { data: Map::new() }
    }

    /// Converts the `val` parameter to a `Value` and insert it into the context.
    ///
    /// Panics if the serialization fails.
    ///
    /// ```rust
    /// # use stache::Context;
    /// let mut context = Context::new();
    /// context.insert("number_users", &42);
    /// ```
    pub fn insert<T: Serialize + ?Sized, S: Into<String>>(&mut self, key: S, val: &T) {
        self.data.insert(key.into(), to_value(val).unwrap());
    }

    /// Converts the `val` parameter to a `Value` and insert it into the context.
    ///
    /// Returns an error if the serialization fails.
    pub fn try_insert<T: Serialize + ?Sized, S: Into<String>>(
        &mut self,
        key: S,
        val: &T,
    ) -> Result<()> {
        self.data.insert(key.into(), to_value(val)?);
        Ok(())
    }

    /// Inserts a value that can't go through serde, such as a lambda or a record.
    ///
    /// ```rust
    /// # use stache::{Context, Value};
    /// let mut context = Context::new();
    /// context.insert_value("now", Value::lambda(|| Ok(Value::from("noon"))));
    /// ```
    pub fn insert_value<V: Into<Value>, S: Into<String>>(&mut self, key: S, val: V) {
        self.data.insert(key.into(), val.into());
    }

    /// Appends the data of the `source` parameter to `self`, overwriting existing keys.
    pub fn extend(&mut self, mut source: Context) {
        self.data.append(&mut source.data);
    }

    /// Converts the context to a `Value`
    pub fn into_value(self) -> Value {
        Value::Map(self.data)
    }

    /// Takes a serde-json `Value` and convert it into a `Context` with no overhead/cloning.
    pub fn from_value(obj: serde_json::Value) -> Result<Self> {
        match Value::from(obj) {
            Value::Map(data) => Ok(Context { data }),
            _ => Err(Error::msg(
                "Creating a Context from a Value/Serialize requires it being a JSON object",
            )),
        }
    }

    /// Takes something that impl Serialize and create a context with it.
    /// Meant to be used if you have a hashmap or a struct and don't want to insert values
    /// one by one in the context.
    pub fn from_serialize(value: impl Serialize) -> Result<Self> {
        let obj = serde_json::to_value(value)?;
        Context::from_value(obj)
    }

    /// Returns the value at a given key index.
    pub fn get(&self, index: &str) -> Option<&Value> {
        self.data.get(index)
    }

    /// Remove a key from the context, returning the value at the key if the key was previously inserted into the context.
    pub fn remove(&mut self, index: &str) -> Option<Value> {
        self.data.remove(index)
    }

    /// Checks if a value exists at a specific index.
    pub fn contains_key(&self, index: &str) -> bool {
        self.data.contains_key(index)
    }
}

impl From<Context> for Value {
    fn from(context: Context) -> Value {
        context.into_value()
    }
}
