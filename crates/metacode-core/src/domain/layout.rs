//! Where every generated artifact lives.
//!
//! ```text
//! <root>/
//! ├── .package_config.toml
//! ├── VERSION, setup.py, MANIFEST.in, README.rst, LICENSE
//! ├── <pkg>/[<sub>/]<module>.py
//! ├── tests/[<sub>/]test_<module>.py
//! └── docs/api/[<sub>/]<pkg>.[<sub>.]<module>.rst   (+ index.rst per level)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::DomainError;

/// File name of the persisted package configuration.
pub const CONFIG_FILE_NAME: &str = ".package_config.toml";

/// Directory layout of one package rooted at `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    root: PathBuf,
    name: String,
}

impl PackageLayout {
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<root>/<pkg>`, holding the importable sources.
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.name)
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.root.join("tests")
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }

    pub fn api_docs_dir(&self) -> PathBuf {
        self.docs_dir().join("api")
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn version_file(&self) -> PathBuf {
        self.root.join("VERSION")
    }

    pub fn setup_file(&self) -> PathBuf {
        self.root.join("setup.py")
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.root.join("MANIFEST.in")
    }

    pub fn gui_dir(&self) -> PathBuf {
        self.source_dir().join("gui")
    }

    /// Source directory of a (possibly nested) subpackage.
    pub fn package_dir(&self, subpackages: &[String]) -> PathBuf {
        join_all(self.source_dir(), subpackages)
    }

    pub fn tests_package_dir(&self, subpackages: &[String]) -> PathBuf {
        join_all(self.tests_dir(), subpackages)
    }

    pub fn api_docs_package_dir(&self, subpackages: &[String]) -> PathBuf {
        join_all(self.api_docs_dir(), subpackages)
    }

    pub fn module_file(&self, module: &ModulePath) -> PathBuf {
        self.package_dir(module.subpackages())
            .join(format!("{}.py", module.name()))
    }

    pub fn test_file(&self, module: &ModulePath) -> PathBuf {
        self.tests_package_dir(module.subpackages())
            .join(format!("test_{}.py", module.name()))
    }

    pub fn api_doc_file(&self, module: &ModulePath) -> PathBuf {
        self.api_docs_package_dir(module.subpackages())
            .join(format!("{}.rst", module.qualified(&self.name)))
    }

    /// The API index a module's documentation is registered in.
    pub fn api_index(&self, module: &ModulePath) -> PathBuf {
        self.api_docs_package_dir(module.subpackages()).join("index.rst")
    }
}

fn join_all(base: PathBuf, segments: &[String]) -> PathBuf {
    segments.iter().fold(base, |path, segment| path.join(segment))
}

/// Dotted module name such as `bar` or `sub.bar`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModulePath {
    subpackages: Vec<String>,
    name: String,
}

impl ModulePath {
    /// A module inside the given subpackage chain.
    pub fn nested(subpackages: Vec<String>, name: impl Into<String>) -> Self {
        Self {
            subpackages,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subpackages(&self) -> &[String] {
        &self.subpackages
    }

    pub fn is_nested(&self) -> bool {
        !self.subpackages.is_empty()
    }

    /// `sub.bar`
    pub fn dotted(&self) -> String {
        self.subpackages
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// `pkg.sub.bar`
    pub fn qualified(&self, package: &str) -> String {
        format!("{package}.{}", self.dotted())
    }

    /// Package the module is imported from: `pkg` or `pkg.sub`.
    pub fn parent_package(&self, package: &str) -> String {
        std::iter::once(package)
            .chain(self.subpackages.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl FromStr for ModulePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingArgument {
                argument: "module name",
            });
        }
        let mut segments: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if let Some(bad) = segments.iter().find(|s| !is_identifier(s)) {
            return Err(DomainError::InvalidName {
                name: trimmed.to_string(),
                reason: format!("'{bad}' is not a valid Python identifier"),
            });
        }
        let name = segments.pop().unwrap_or_default();
        Ok(Self::nested(segments, name))
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

/// Letters, digits and underscores, not starting with a digit.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PackageLayout {
        PackageLayout::new("foo", "foo")
    }

    #[test]
    fn flat_module_paths() {
        let module: ModulePath = "bar".parse().unwrap();
        let layout = layout();
        assert_eq!(layout.module_file(&module), PathBuf::from("foo/foo/bar.py"));
        assert_eq!(layout.test_file(&module), PathBuf::from("foo/tests/test_bar.py"));
        assert_eq!(layout.api_doc_file(&module), PathBuf::from("foo/docs/api/foo.bar.rst"));
        assert_eq!(layout.api_index(&module), PathBuf::from("foo/docs/api/index.rst"));
    }

    #[test]
    fn nested_module_paths() {
        let module: ModulePath = "sub.mod".parse().unwrap();
        let layout = layout();
        assert_eq!(layout.module_file(&module), PathBuf::from("foo/foo/sub/mod.py"));
        assert_eq!(layout.test_file(&module), PathBuf::from("foo/tests/sub/test_mod.py"));
        assert_eq!(
            layout.api_doc_file(&module),
            PathBuf::from("foo/docs/api/sub/foo.sub.mod.rst")
        );
        assert_eq!(module.parent_package("foo"), "foo.sub");
        assert_eq!(module.qualified("foo"), "foo.sub.mod");
    }

    #[test]
    fn module_path_rejects_bad_names() {
        assert!(matches!(
            "".parse::<ModulePath>(),
            Err(DomainError::MissingArgument { .. })
        ));
        assert!(matches!(
            "sub..mod".parse::<ModulePath>(),
            Err(DomainError::InvalidName { .. })
        ));
        assert!(matches!(
            "1mod".parse::<ModulePath>(),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn identifier_rules() {
        assert!(is_identifier("_private"));
        assert!(is_identifier("mod2"));
        assert!(!is_identifier("my-mod"));
        assert!(!is_identifier(""));
    }
}
