//! The local record of caught Pokemon.
//!
//! Kept apart from the response cache so that catches never expire.

use chrono::{DateTime, Utc};

use crate::models::PokemonDetail;

/// A Pokemon the user caught, with the details fetched at catch time.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub detail: PokemonDetail,
    pub caught_at: DateTime<Utc>,
    /// Other names the user has typed for this Pokemon, e.g. its id
    pub aliases: Vec<String>,
}

impl CaughtPokemon {
    /// Whether `name` refers to this Pokemon: its API name, its id or an alias.
    pub fn answers_to(&self, name: &str) -> bool {
        self.detail.name == name
            || self.detail.id.to_string() == name
            || self.aliases.iter().any(|alias| alias == name)
    }

    fn remember(&mut self, alias: &str) {
        if !self.answers_to(alias) {
            self.aliases.push(alias.to_string());
        }
    }
}

/// Caught Pokemon in the order they were caught, at most one per API name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: Vec<CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Looks up a caught Pokemon by API name, id or a previously used alias.
    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.iter().find(|caught| caught.answers_to(name))
    }

    /// Records a catch made under the name `typed_as`.
    ///
    /// Returns false if a Pokemon with the same API name was already caught;
    /// the first record is kept and only learns `typed_as` as an alias.
    pub fn record(&mut self, detail: PokemonDetail, typed_as: &str) -> bool {
        if let Some(existing) = self
            .caught
            .iter_mut()
            .find(|caught| caught.detail.name == detail.name)
        {
            existing.remember(typed_as);
            return false;
        }

        let mut caught = CaughtPokemon {
            detail,
            caught_at: Utc::now(),
            aliases: Vec::new(),
        };
        caught.remember(typed_as);
        self.caught.push(caught);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaughtPokemon> {
        self.caught.iter()
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
