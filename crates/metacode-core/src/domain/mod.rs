//! Core domain layer for metacode.
//!
//! Pure logic only: names, configuration, render contexts, artifact
//! descriptors, structural insertion and packaging edits. All I/O and
//! templating happens behind the ports of the application layer.
//!
//! - **No I/O**: functions take and return strings and paths
//! - **Immutable inputs**: derived values come back as new values
//! - **Clone + PartialEq** everywhere, so tests can compare whole values

pub mod artifact;
pub mod configuration;
pub mod context;
pub mod error;
pub mod layout;
pub mod naming;
pub mod packaging;
pub mod toctree;

pub use artifact::{ArtifactDescriptor, ArtifactKind, TemplateRef, WriteMode};
pub use configuration::{
    Configuration, DocumentationSection, GuiSection, License, OptionsSection, Overlay,
    PackageSection, Urls,
};
pub use context::{RenderContext, derive_context};
pub use error::DomainError;
pub use layout::{CONFIG_FILE_NAME, ModulePath, PackageLayout, is_identifier};
pub use naming::{GuiComponent, GuiNames, camel_case_to_underscore, underscore_to_camel_case};
pub use toctree::{BlockInsertion, TOCTREE_MARKER};
