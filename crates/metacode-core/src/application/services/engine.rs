//! Scaffold engine - the idempotent, non-destructive file generator.
//!
//! The engine owns the ports and offers three capabilities the generators
//! compose:
//! 1. **Existence guard**: is a file, directory, or symbol already there?
//! 2. **Template rendering**: resolve, derive context, render, write.
//! 3. **Structural insertion**: add entries to a marked block of a file.
//!
//! The engine never decides policy. Whether an existing artifact means
//! "warn and skip" is up to the generator that asked.

use std::fmt;
use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{ArtifactDescriptor, BlockInsertion, RenderContext, TemplateRef, WriteMode, derive_context},
    error::MetacodeResult,
};

/// Kinds of named symbol the guard can look for inside a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Class,
    Function,
}

impl SymbolKind {
    /// Keyword introducing the definition.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "def",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => f.write_str("class"),
            Self::Function => f.write_str("function"),
        }
    }
}

/// Rendering, guarding and insertion on top of the ports.
pub struct ScaffoldEngine {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldEngine {
    /// Create a new engine with the given adapters.
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    // -------------------------------------------------------------------------
    // Template rendering
    // -------------------------------------------------------------------------

    /// Resolve and render a template.
    ///
    /// The context is passed through [`derive_context`] first, so templates
    /// can rely on `rst_markup` whenever `package.name` is set.
    pub fn render(&self, template: &TemplateRef, context: &RenderContext) -> MetacodeResult<String> {
        let name = template.qualified_name();
        let source = self.store.load(&name)?;
        let context = derive_context(context);
        trace!(template = %name, "rendering template");
        self.renderer.render(&name, &source, &context)
    }

    /// Render a descriptor's template and write it in its mode.
    ///
    /// `Create` replaces the destination, `Append` adds to its end and fails
    /// when it does not exist. No existence check happens here.
    #[instrument(skip_all, fields(template = %artifact.template, destination = %artifact.destination.display()))]
    pub fn execute(&self, artifact: &ArtifactDescriptor, context: &RenderContext) -> MetacodeResult<()> {
        let text = self.render(&artifact.template, context)?;
        match artifact.mode {
            WriteMode::Create => self.filesystem.write_file(&artifact.destination, &text)?,
            WriteMode::Append => self.filesystem.append_file(&artifact.destination, &text)?,
        }
        debug!(mode = ?artifact.mode, "artifact written");
        Ok(())
    }

    /// Copy a template to `destination` without rendering it.
    ///
    /// For files carrying someone else's template syntax (Sphinx HTML
    /// templates, shell scripts) or no syntax at all.
    pub fn copy_verbatim(&self, template: &TemplateRef, destination: &Path) -> MetacodeResult<()> {
        let source = self.store.load(&template.qualified_name())?;
        self.filesystem.write_file(destination, &source)
    }

    // -------------------------------------------------------------------------
    // Existence guard
    // -------------------------------------------------------------------------

    pub fn file_exists(&self, path: &Path) -> bool {
        self.filesystem.is_file(path)
    }

    pub fn directory_exists(&self, path: &Path) -> bool {
        self.filesystem.is_dir(path)
    }

    /// Shallow check for a class or function definition.
    ///
    /// Looks for the literal text `"<kw> <Name>:"` or `"<kw> <Name>("`.
    /// Matches inside comments or strings count, and signatures split over
    /// several lines before the name are missed.
    pub fn symbol_defined_in_file(&self, path: &Path, kind: SymbolKind, name: &str) -> MetacodeResult<bool> {
        let content = self.filesystem.read_to_string(path)?;
        let keyword = kind.keyword();
        let with_colon = format!("{keyword} {name}:");
        let with_paren = format!("{keyword} {name}(");
        Ok(content.contains(&with_colon) || content.contains(&with_paren))
    }

    // -------------------------------------------------------------------------
    // Structural insertion
    // -------------------------------------------------------------------------

    /// Insert `entries` into the marked block of the file at `path`.
    ///
    /// A missing file is an I/O error; callers that treat a missing index as
    /// normal check [`file_exists`](Self::file_exists) first.
    pub fn insert_into_marked_block(
        &self,
        path: &Path,
        insertion: &BlockInsertion,
        entries: &[String],
    ) -> MetacodeResult<()> {
        let content = self.filesystem.read_to_string(path)?;
        let updated = insertion.apply(&content, entries)?;
        self.filesystem.write_file(path, &updated)?;
        debug!(path = %path.display(), marker = insertion.marker(), count = entries.len(), "entries inserted");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Create an empty marker file unless something is already there.
    pub fn ensure_file(&self, path: &Path) -> MetacodeResult<bool> {
        if self.filesystem.exists(path) {
            return Ok(false);
        }
        self.filesystem.write_file(path, "")?;
        Ok(true)
    }

    /// Rewrite a file through `edit`, writing only when the text changed.
    pub fn edit_file<F>(&self, path: &Path, edit: F) -> MetacodeResult<bool>
    where
        F: FnOnce(&str) -> MetacodeResult<String>,
    {
        let content = self.filesystem.read_to_string(path)?;
        let updated = edit(&content)?;
        if updated == content {
            return Ok(false);
        }
        self.filesystem.write_file(path, &updated)?;
        Ok(true)
    }

    /// Fail with a precondition error unless `path` is a file.
    pub fn require_file(&self, path: &Path, requirement: impl Into<String>) -> MetacodeResult<()> {
        if self.file_exists(path) {
            Ok(())
        } else {
            Err(ApplicationError::precondition(requirement, path).into())
        }
    }

    /// Fail with a precondition error unless `path` is a directory.
    pub fn require_directory(&self, path: &Path, requirement: impl Into<String>) -> MetacodeResult<()> {
        if self.directory_exists(path) {
            Ok(())
        } else {
            Err(ApplicationError::precondition(requirement, path).into())
        }
    }
}
