//! Command handlers.
//!
//! Each handler translates a parsed command into generator calls and prints
//! the outcome. No generation logic lives here.

pub mod add;
pub mod completions;
pub mod create;
pub mod help;
pub mod write;

use std::path::{Path, PathBuf};

use metacode_adapters::{GitCli, LayeredTemplateStore, LocalFilesystem, TeraRenderer, TemplateLocations};
use metacode_core::{
    domain::CONFIG_FILE_NAME,
    prelude::{CodeGenerator, Configuration, ScaffoldEngine},
};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Where a command runs and which adapters it uses.
#[derive(Debug)]
pub struct Workspace {
    directory: PathBuf,
    templates: TemplateLocations,
    git_program: String,
}

impl Workspace {
    pub fn new(global: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            directory: global.directory.clone(),
            templates: TemplateLocations::discover(config.templates.directory.clone()),
            git_program: config.git.program.clone(),
        }
    }

    /// The working directory; for `add` commands the package root.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// `path` relative to the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.directory.join(path)
    }

    /// The package configuration read by every `add` command.
    pub fn package_configuration(&self) -> PathBuf {
        self.directory.join(CONFIG_FILE_NAME)
    }

    /// A generator for the package rooted at `root`, writing to disk.
    pub fn generator(&self, configuration: Configuration, root: PathBuf) -> CodeGenerator {
        let engine = ScaffoldEngine::new(
            Box::new(LayeredTemplateStore::from_locations(&self.templates)),
            Box::new(TeraRenderer::new()),
            Box::new(LocalFilesystem::new()),
        );
        CodeGenerator::new(engine, configuration, root)
            .with_version_control(Box::new(GitCli::with_program(self.git_program.as_str())))
    }
}
