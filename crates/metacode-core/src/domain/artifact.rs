//! Artifact descriptors: what to render, and where it goes.

use std::fmt;
use std::path::{Path, PathBuf};

/// Reference to a template by search-path directory and file name.
///
/// The directory is relative to each template search location, so
/// `TemplateRef::new("code", "module.py")` resolves to `code/module.py`
/// in the user directory, the site directory, or the bundled set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateRef {
    directory: String,
    name: String,
}

impl TemplateRef {
    pub fn new(directory: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            name: name.into(),
        }
    }

    /// A template living at the top of the search path.
    pub fn root(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slash-separated name used by template stores.
    pub fn qualified_name(&self) -> String {
        if self.directory.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.directory.trim_end_matches('/'), self.name)
        }
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// How rendered text reaches its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the destination, creating it if needed.
    Create,
    /// Add to the end of an existing destination. Never creates.
    Append,
}

/// One render-and-write step.
///
/// The existence check for the destination is the caller's job and must
/// happen before the descriptor is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub template: TemplateRef,
    pub destination: PathBuf,
    pub mode: WriteMode,
}

impl ArtifactDescriptor {
    pub fn create(template: TemplateRef, destination: impl AsRef<Path>) -> Self {
        Self {
            template,
            destination: destination.as_ref().to_path_buf(),
            mode: WriteMode::Create,
        }
    }

    pub fn append(template: TemplateRef, destination: impl AsRef<Path>) -> Self {
        Self {
            template,
            destination: destination.as_ref().to_path_buf(),
            mode: WriteMode::Append,
        }
    }
}

/// What kind of thing a generator produced or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Package,
    Directory,
    /// A package-level file such as `setup.py` or `README.rst`.
    File,
    Module,
    TestModule,
    Documentation,
    Class,
    Function,
    Subpackage,
    Gui,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Package => "package",
            Self::Directory => "directory",
            Self::File => "file",
            Self::Module => "module",
            Self::TestModule => "test module",
            Self::Documentation => "documentation",
            Self::Class => "class",
            Self::Function => "function",
            Self::Subpackage => "subpackage",
            Self::Gui => "GUI",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_joins_directory() {
        assert_eq!(TemplateRef::new("code", "module.py").qualified_name(), "code/module.py");
        assert_eq!(TemplateRef::root("setup.py").qualified_name(), "setup.py");
        assert_eq!(TemplateRef::new("docs/", "conf.py").to_string(), "docs/conf.py");
    }

    #[test]
    fn descriptor_constructors_set_mode() {
        let t = TemplateRef::new("code", "class.py");
        assert_eq!(ArtifactDescriptor::create(t.clone(), "a.py").mode, WriteMode::Create);
        assert_eq!(ArtifactDescriptor::append(t, "a.py").mode, WriteMode::Append);
    }
}
