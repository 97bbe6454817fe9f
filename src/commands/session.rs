//! Session state
//!
//! Everything a REPL run accumulates between commands.

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::client::PokeApiClient;
use crate::commands::{Command, Outcome};
use crate::error::{PokedexError, Result};
use crate::models::Pokedex;

/// Where `map` and `mapb` go next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursor {
    /// URL of the page after the last one shown
    pub next: Option<String>,
    /// URL of the page before the last one shown
    pub previous: Option<String>,
    /// Whether any page has been shown yet
    pub started: bool,
}

impl PageCursor {
    /// Moves the cursor onto a page with the given neighbours.
    pub fn land(&mut self, next: Option<String>, previous: Option<String>) {
        self.next = next;
        self.previous = previous;
        self.started = true;
    }
}

/// One interactive run: the API client plus pagination, catches and dice.
#[derive(Debug)]
pub struct Session {
    pub(super) client: PokeApiClient,
    pub(super) cursor: PageCursor,
    pub(super) pokedex: Pokedex,
    pub(super) rng: StdRng,
}

impl Session {
    /// Creates a session with an entropy-seeded RNG.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a caller-supplied RNG, for reproducible catches.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            cursor: PageCursor::default(),
            pokedex: Pokedex::new(),
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    // == Execute ==
    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        argument: Option<&str>,
        out: &mut W,
    ) -> Result<Outcome> {
        debug!("Executing {} {:?}", command, argument);

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Outcome::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::Mapb => self.mapb(out).await?,
            Command::Explore => self.explore(required(argument, "area name")?, out).await?,
            Command::Catch => self.catch(required(argument, "pokemon name")?, out).await?,
            Command::Inspect => self.inspect(required(argument, "pokemon name")?, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
        }

        Ok(Outcome::Continue)
    }
}

fn required<'a>(argument: Option<&'a str>, what: &'static str) -> Result<&'a str> {
    argument
        .filter(|arg| !arg.is_empty())
        .ok_or(PokedexError::MissingArgument(what))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_lands_on_page() {
        let mut cursor = PageCursor::default();
        assert!(!cursor.started);

        cursor.land(Some("next".to_string()), None);

        assert!(cursor.started);
        assert_eq!(cursor.next.as_deref(), Some("next"));
        assert_eq!(cursor.previous, None);
    }

    #[test]
    fn test_required_argument() {
        assert_eq!(required(Some("pikachu"), "pokemon name").unwrap(), "pikachu");
        assert!(matches!(
            required(None, "pokemon name"),
            Err(PokedexError::MissingArgument("pokemon name"))
        ));
        assert!(required(Some(""), "area name").is_err());
    }
}
