//! CLI argument definitions using the clap derive API.
//!
//! clap only handles the global flags. The command itself is a sequence of
//! words (`add class Foo to bar`) parsed by [`grammar`].

use clap::{Parser, ValueEnum};

pub mod global;
pub mod grammar;

pub use global::{GlobalArgs, OutputFormat};
pub use grammar::{AddCommand, Command, HelpTopic, Parsed};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pymeta",
    bin_name = "pymeta",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Write Python package code that never overwrites yours",
    long_about = "pymeta creates Python packages and adds modules, classes, \
                  functions, subpackages and a Qt GUI to them, together with \
                  tests and API documentation. Existing files are never \
                  overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 pymeta write config to mypackage_config.toml\n\
        \x20 pymeta create package from mypackage_config.toml\n\
        \x20 pymeta add module mymodule\n\
        \x20 pymeta add class MyClass to mymodule\n\
        \x20 pymeta completions bash > ~/.local/share/bash-completion/completions/pymeta",
)]
pub struct Cli {
    /// Flags available on every command.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command words, e.g. `add class MyClass to mymodule`.
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub words: Vec<String>,
}

impl Cli {
    /// Parse the command words.
    pub fn parsed(&self) -> Parsed {
        grammar::parse(&self.words)
    }
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
