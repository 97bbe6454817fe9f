//! Location area models
//!
//! `GET /location-area` returns a paginated list; `GET /location-area/{name}`
//! returns one area with its encounters.

use serde::Deserialize;

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of location areas.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of areas across all pages
    #[serde(default)]
    pub count: u32,
    /// URL of the next page, None on the last page
    pub next: Option<String>,
    /// URL of the previous page, None on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location area.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of the Pokemon that can be encountered here, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
