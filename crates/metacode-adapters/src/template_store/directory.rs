use std::path::{Path, PathBuf};

use metacode_core::{application::ApplicationError, error::MetacodeResult};

use super::TemplateSource;

/// Templates stored as files below a directory.
///
/// `code/module.py` is looked up as `<root>/code/module.py`. A missing
/// directory simply has no templates.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, name: &str) -> PathBuf {
        name.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl TemplateSource for DirectorySource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn fetch(&self, name: &str) -> MetacodeResult<Option<String>> {
        let path = self.path_of(name);
        if !path.is_file() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| {
                ApplicationError::FilesystemError {
                    path,
                    reason: format!("Failed to read template: {e}"),
                }
                .into()
            })
    }
}
