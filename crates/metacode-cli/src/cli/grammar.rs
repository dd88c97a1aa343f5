//! The word grammar of `pymeta`.
//!
//! ```text
//! write config [to <file>]
//! create package from <file>
//! add module <name>
//! add class <name> to <module>
//! add function <name> to <module>
//! add subpackage <name>
//! add gui
//! add window|widget|dialog <name>
//! help [<command>]
//! completions <shell>
//! ```
//!
//! Anything else resolves to the help text of the closest command.

use std::path::PathBuf;

use clap::ValueEnum;
use metacode_core::domain::GuiComponent;

use super::Shell;

/// Default destination of `write config`.
pub const DEFAULT_CONFIG_FILE: &str = "package_config.toml";

/// A well-formed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    WriteConfig { destination: PathBuf },
    CreatePackage { configuration: PathBuf },
    Add(AddCommand),
    Completions { shell: Shell },
}

/// Things `add` puts into an existing package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCommand {
    Module { name: String },
    Class { name: String, module: String },
    Function { name: String, module: String },
    Subpackage { name: String },
    Gui,
    GuiComponent { component: GuiComponent, name: String },
}

/// Which help text to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    General,
    Write,
    Create,
    Add,
    Completions,
}

/// Result of parsing the command words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Command),
    Help(HelpTopic),
}

pub fn parse<S: AsRef<str>>(words: &[S]) -> Parsed {
    let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    match words.as_slice() {
        [] => Parsed::Help(HelpTopic::General),
        ["write", rest @ ..] => parse_write(rest),
        ["create", rest @ ..] => parse_create(rest),
        ["add", rest @ ..] => parse_add(rest),
        ["help", rest @ ..] => Parsed::Help(parse_help(rest)),
        ["completions", shell] => match Shell::from_str(shell, true) {
            Ok(shell) => Parsed::Run(Command::Completions { shell }),
            Err(_) => Parsed::Help(HelpTopic::Completions),
        },
        ["completions", ..] => Parsed::Help(HelpTopic::Completions),
        _ => Parsed::Help(HelpTopic::General),
    }
}

fn parse_write(words: &[&str]) -> Parsed {
    let destination = match words {
        ["config"] => DEFAULT_CONFIG_FILE,
        ["config", "to", file] => *file,
        _ => return Parsed::Help(HelpTopic::Write),
    };
    Parsed::Run(Command::WriteConfig {
        destination: PathBuf::from(destination),
    })
}

fn parse_create(words: &[&str]) -> Parsed {
    match words {
        ["package", "from", file] => Parsed::Run(Command::CreatePackage {
            configuration: PathBuf::from(file),
        }),
        _ => Parsed::Help(HelpTopic::Create),
    }
}

fn parse_add(words: &[&str]) -> Parsed {
    let command = match words {
        ["module", name] => AddCommand::Module { name: name.to_string() },
        ["class", name, "to", module] => AddCommand::Class {
            name: name.to_string(),
            module: module.to_string(),
        },
        ["function", name, "to", module] => AddCommand::Function {
            name: name.to_string(),
            module: module.to_string(),
        },
        ["subpackage", name] => AddCommand::Subpackage { name: name.to_string() },
        ["gui"] => AddCommand::Gui,
        [kind, name] => match gui_component(kind) {
            Some(component) => AddCommand::GuiComponent {
                component,
                name: name.to_string(),
            },
            None => return Parsed::Help(HelpTopic::Add),
        },
        _ => return Parsed::Help(HelpTopic::Add),
    };
    Parsed::Run(Command::Add(command))
}

fn gui_component(word: &str) -> Option<GuiComponent> {
    match word {
        "window" => Some(GuiComponent::Window),
        "widget" => Some(GuiComponent::Widget),
        "dialog" => Some(GuiComponent::Dialog),
        _ => None,
    }
}

fn parse_help(words: &[&str]) -> HelpTopic {
    match words {
        ["write", ..] => HelpTopic::Write,
        ["create", ..] => HelpTopic::Create,
        ["add", ..] => HelpTopic::Add,
        ["completions", ..] => HelpTopic::Completions,
        _ => HelpTopic::General,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str]) -> Command {
        match parse(words) {
            Parsed::Run(command) => command,
            Parsed::Help(topic) => panic!("expected a command, got help for {topic:?}"),
        }
    }

    // ========================================================================
    // Well-formed commands
    // ========================================================================

    #[test]
    fn write_config_defaults_destination() {
        assert_eq!(
            run(&["write", "config"]),
            Command::WriteConfig {
                destination: PathBuf::from(DEFAULT_CONFIG_FILE)
            }
        );
        assert_eq!(
            run(&["write", "config", "to", "mine.toml"]),
            Command::WriteConfig {
                destination: PathBuf::from("mine.toml")
            }
        );
    }

    #[test]
    fn add_commands() {
        assert_eq!(
            run(&["add", "module", "bar"]),
            Command::Add(AddCommand::Module { name: "bar".into() })
        );
        assert_eq!(
            run(&["add", "class", "Baz", "to", "sub.bar"]),
            Command::Add(AddCommand::Class {
                name: "Baz".into(),
                module: "sub.bar".into()
            })
        );
        assert_eq!(
            run(&["add", "function", "run", "to", "bar"]),
            Command::Add(AddCommand::Function {
                name: "run".into(),
                module: "bar".into()
            })
        );
        assert_eq!(
            run(&["add", "subpackage", "sub"]),
            Command::Add(AddCommand::Subpackage { name: "sub".into() })
        );
        assert_eq!(run(&["add", "gui"]), Command::Add(AddCommand::Gui));
        assert_eq!(
            run(&["add", "dialog", "settings"]),
            Command::Add(AddCommand::GuiComponent {
                component: GuiComponent::Dialog,
                name: "settings".into()
            })
        );
    }

    #[test]
    fn completions_take_a_shell() {
        assert_eq!(
            run(&["completions", "zsh"]),
            Command::Completions { shell: Shell::Zsh }
        );
    }

    // ========================================================================
    // Malformed commands resolve to help
    // ========================================================================

    #[test]
    fn malformed_commands_resolve_to_their_help() {
        let cases: &[(&[&str], HelpTopic)] = &[
            (&[], HelpTopic::General),
            (&["frobnicate"], HelpTopic::General),
            (&["write"], HelpTopic::Write),
            (&["write", "config", "into", "x"], HelpTopic::Write),
            (&["create", "package"], HelpTopic::Create),
            (&["create", "package", "with", "x.toml"], HelpTopic::Create),
            (&["add"], HelpTopic::Add),
            (&["add", "module"], HelpTopic::Add),
            (&["add", "class", "Baz"], HelpTopic::Add),
            (&["add", "class", "Baz", "into", "bar"], HelpTopic::Add),
            (&["add", "table", "x"], HelpTopic::Add),
            (&["completions", "tcsh"], HelpTopic::Completions),
        ];
        for (words, topic) in cases {
            assert_eq!(parse(words), Parsed::Help(*topic), "{words:?}");
        }
    }

    #[test]
    fn help_topics() {
        assert_eq!(parse(&["help"]), Parsed::Help(HelpTopic::General));
        assert_eq!(parse(&["help", "add"]), Parsed::Help(HelpTopic::Add));
        assert_eq!(parse(&["help", "unknown"]), Parsed::Help(HelpTopic::General));
    }
}
