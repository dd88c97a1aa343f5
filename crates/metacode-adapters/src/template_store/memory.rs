use std::collections::HashMap;

use metacode_core::error::MetacodeResult;

use super::TemplateSource;

/// Templates held in memory, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    label: String,
    templates: HashMap<String, String>,
}

impl MemorySource {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            templates: HashMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(name.into(), content.into());
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateSource for MemorySource {
    fn describe(&self) -> String {
        format!("memory:{}", self.label)
    }

    fn fetch(&self, name: &str) -> MetacodeResult<Option<String>> {
        Ok(self.templates.get(name).cloned())
    }
}
