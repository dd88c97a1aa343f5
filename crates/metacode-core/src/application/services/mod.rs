//! Application services - orchestrate use cases.
//!
//! The [`ScaffoldEngine`] guards, renders and inserts; the
//! [`CodeGenerator`] composes those steps into one use case per artifact
//! kind ("add a module", "add a GUI window", ...).

pub mod engine;
pub mod generator;

pub use engine::{ScaffoldEngine, SymbolKind};
pub use generator::{CodeGenerator, GenerationReport, SkipReason, SkippedArtifact};
