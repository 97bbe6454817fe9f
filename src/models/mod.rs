//! PokeAPI models
//!
//! Serde shapes for the JSON documents the client decodes, plus the local
//! record of caught Pokemon.

pub mod location;
pub mod pokedex;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokedex::{CaughtPokemon, Pokedex};
pub use pokemon::{PokemonDetail, PokemonStat, PokemonType};
