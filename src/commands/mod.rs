//! REPL commands
//!
//! The command table and the session state the commands run against.
//!
//! # Commands
//! - `help` - List the commands
//! - `exit` - Leave the REPL
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List the Pokemon found in an area
//! - `catch <pokemon>` - Throw a Pokeball
//! - `inspect <pokemon>` - Show a caught Pokemon
//! - `pokedex` - List caught Pokemon

pub mod handlers;
pub mod session;

pub use handlers::{catch_chance, CATCH_FLOOR};
pub use session::{PageCursor, Session};

use std::fmt;
use std::str::FromStr;

/// A REPL command, without its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    Mapb,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::Mapb,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::Mapb => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the next page of location areas",
            Command::Mapb => "Displays the previous page of location areas",
            Command::Explore => "Lists the Pokemon that inhabit an area: explore <area>",
            Command::Catch => "Tries to catch a Pokemon: catch <pokemon>",
            Command::Inspect => "Shows stats of a caught Pokemon: inspect <pokemon>",
            Command::Pokedex => "Lists all caught Pokemon",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned for input that names no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// What the REPL should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_command() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "fly".parse::<Command>(),
            Err(UnknownCommand("fly".to_string()))
        );
        assert!("MAP".parse::<Command>().is_err(), "input is lowered before parsing");
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Command::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Command::ALL.len());
    }
}
