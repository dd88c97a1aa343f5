//! Render context.
//!
//! A [`RenderContext`] is a tree of JSON values built fresh for every render
//! call: configuration first, then request-local values on top. Nothing
//! mutates a context after it was handed to the renderer; presentation
//! values are added by [`derive_context`], which returns a new context.

use serde::Serialize;
use serde_json::{Map, Value};

use super::Configuration;

/// Values substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    values: Map<String, Value>,
}

impl RenderContext {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context seeded with the whole configuration.
    pub fn from_configuration(configuration: &Configuration) -> Self {
        Self {
            values: configuration.to_mapping(),
        }
    }

    /// Set `value` at a dotted path, creating intermediate mappings.
    ///
    /// `set("package.version", "0.2")` keeps every other key of `package`.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let mut segments = path.split('.').peekable();
        let mut current = &mut self.values;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.insert(segment.to_string(), value.into());
                return;
            }
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            let Value::Object(next) = entry else {
                return;
            };
            current = next;
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }

    /// Look up a dotted path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        segments.try_fold(self.values.get(first)?, |value, segment| value.get(segment))
    }

    /// `package.name`, when present and a string.
    pub fn package_name(&self) -> Option<&str> {
        self.get("package.name").and_then(Value::as_str)
    }

    /// The context as a single JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

/// Add derived presentation values to a copy of `base`.
///
/// When a package name is present, `rst_markup` holds heading underlines of
/// exactly its length (`header_hash`, `header_equal`, `header_minus`,
/// `header_tilde`). Anything else passes through untouched.
pub fn derive_context(base: &RenderContext) -> RenderContext {
    let mut derived = base.clone();
    if let Some(name) = base.package_name() {
        let length = name.chars().count();
        let mut markup = Map::new();
        for (key, ch) in [
            ("header_hash", "#"),
            ("header_equal", "="),
            ("header_minus", "-"),
            ("header_tilde", "~"),
        ] {
            markup.insert(key.into(), Value::String(ch.repeat(length)));
        }
        derived.values.insert("rst_markup".into(), Value::Object(markup));
    }
    derived
}
