use std::fmt;

use tracing::{debug, instrument, trace};

use metacode_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::MetacodeResult,
};

use super::{BundledTemplates, DirectorySource, TemplateLocations};

/// One place templates can come from.
pub trait TemplateSource: Send + Sync + fmt::Debug {
    /// Short description for logs, e.g. the directory path.
    fn describe(&self) -> String;

    /// Source text of `name`, or `None` if this source does not have it.
    ///
    /// Errors are reserved for a template that exists but cannot be read.
    fn fetch(&self, name: &str) -> MetacodeResult<Option<String>>;
}

/// First source that has `name` wins.
///
/// Fails with `TemplateNotFound` when none does; an empty result is never
/// produced for a missing template.
pub fn resolve(name: &str, sources: &[Box<dyn TemplateSource>]) -> MetacodeResult<String> {
    for source in sources {
        if let Some(content) = source.fetch(name)? {
            debug!(template = name, source = %source.describe(), "template resolved");
            return Ok(content);
        }
        trace!(template = name, source = %source.describe(), "not in source");
    }
    Err(ApplicationError::TemplateNotFound { name: name.to_string() }.into())
}

/// [`TemplateStore`] over an ordered list of sources.
#[derive(Debug)]
pub struct LayeredTemplateStore {
    sources: Vec<Box<dyn TemplateSource>>,
}

impl LayeredTemplateStore {
    pub fn new(sources: Vec<Box<dyn TemplateSource>>) -> Self {
        Self { sources }
    }

    /// Only the templates compiled into the binary.
    pub fn bundled() -> Self {
        Self::new(vec![Box::new(BundledTemplates)])
    }

    /// Override directories in priority order, then the bundled templates.
    pub fn from_locations(locations: &TemplateLocations) -> Self {
        let mut sources: Vec<Box<dyn TemplateSource>> = locations
            .directories()
            .into_iter()
            .map(|dir| Box::new(DirectorySource::new(dir)) as Box<dyn TemplateSource>)
            .collect();
        sources.push(Box::new(BundledTemplates));
        Self::new(sources)
    }

    pub fn sources(&self) -> &[Box<dyn TemplateSource>] {
        &self.sources
    }
}

impl TemplateStore for LayeredTemplateStore {
    #[instrument(skip(self))]
    fn load(&self, name: &str) -> MetacodeResult<String> {
        resolve(name, &self.sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template_store::MemorySource;
    use metacode_core::error::MetacodeError;

    fn sources(layers: Vec<MemorySource>) -> Vec<Box<dyn TemplateSource>> {
        layers
            .into_iter()
            .map(|s| Box::new(s) as Box<dyn TemplateSource>)
            .collect()
    }

    #[test]
    fn first_match_wins() {
        let sources = sources(vec![
            MemorySource::new("user").with("code/module.py", "user"),
            MemorySource::new("site").with("code/module.py", "site"),
        ]);
        assert_eq!(resolve("code/module.py", &sources).unwrap(), "user");
    }

    #[test]
    fn falls_through_to_later_sources() {
        let sources = sources(vec![
            MemorySource::new("user").with("code/class.py", "user"),
            MemorySource::new("bundled").with("code/module.py", "bundled"),
        ]);
        assert_eq!(resolve("code/module.py", &sources).unwrap(), "bundled");
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let sources = sources(vec![MemorySource::new("user")]);
        let err = resolve("code/nope.py", &sources).unwrap_err();
        assert!(matches!(
            err,
            MetacodeError::Application(ApplicationError::TemplateNotFound { ref name }) if name == "code/nope.py"
        ));
    }

    #[test]
    fn empty_template_is_still_a_match() {
        let sources = sources(vec![
            MemorySource::new("user").with("gitignore", ""),
            MemorySource::new("bundled").with("gitignore", "*.pyc"),
        ]);
        assert_eq!(resolve("gitignore", &sources).unwrap(), "");
    }

    #[test]
    fn directory_overrides_bundled() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("code")).unwrap();
        std::fs::write(dir.path().join("code/module.py"), "# mine\n").unwrap();

        let locations = TemplateLocations::from_directories(vec![dir.path().to_path_buf()]);
        let store = LayeredTemplateStore::from_locations(&locations);
        assert_eq!(store.load("code/module.py").unwrap(), "# mine\n");
        assert!(store.load("code/class.py").unwrap().contains("class {{ cls.name }}"));
    }
}
