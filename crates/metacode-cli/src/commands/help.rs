//! Help texts for the word grammar.

use crate::{cli::HelpTopic, error::CliResult, output::OutputManager};

const GENERAL: &str = "
General usage:
    pymeta <command> <option1> ...

Possible commands are:
    write
    create
    add
    completions
    help

To get more details for a command, type:
    pymeta help <command>

Global flags (-v, -q, -C <dir>, ...) are listed by: pymeta --help
";

const WRITE: &str = "
Usage for write command:
    pymeta write <item> to <destination>
    pymeta write <item>

Possible items are:
    config

Examples:
    pymeta write config to package_config.toml

    Writes a configuration file with empty values to
    \"package_config.toml\"

Note: The default filename for the configuration file if not
provided is \"package_config.toml\".
";

const CREATE: &str = "
Usage for create command:
    pymeta create package from <config>

Prerequisite for this command is an existing configuration stored in
the file given as <config> (a TOML file). Use

    pymeta write config to <filename>

to create a config file in TOML format and populate the values
according to your needs.
";

const ADD: &str = "
Usage for add command:
    pymeta add <item> <name>
    pymeta add <item> <name> to <module>
    pymeta add gui

Possible items are:
    module
    class
    function
    subpackage
    window
    widget
    dialog

For class and function, you need to provide the name of an existing
module these items should be added to. Modules inside a subpackage are
named with a dot, e.g. subpackage.module. Window, widget and dialog
require an existing GUI (pymeta add gui).

All add commands need to be issued from the root directory of the
package, where the file .package_config.toml resides.
";

const COMPLETIONS: &str = "
Usage for completions command:
    pymeta completions <shell>

Possible shells are:
    bash
    zsh
    fish
    powershell
    elvish
";

pub fn text(topic: HelpTopic) -> &'static str {
    match topic {
        HelpTopic::General => GENERAL,
        HelpTopic::Write => WRITE,
        HelpTopic::Create => CREATE,
        HelpTopic::Add => ADD,
        HelpTopic::Completions => COMPLETIONS,
    }
}

pub fn execute(topic: HelpTopic, output: &OutputManager) -> CliResult<()> {
    output.print(text(topic))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_starts_with_its_usage_line() {
        assert!(text(HelpTopic::General).contains("General usage:"));
        assert!(text(HelpTopic::Write).contains("Usage for write command:"));
        assert!(text(HelpTopic::Create).contains("Usage for create command:"));
        assert!(text(HelpTopic::Add).contains("Usage for add command:"));
        assert!(text(HelpTopic::Completions).contains("Usage for completions command:"));
    }
}
