//! Pokedex - an interactive PokeAPI client
//!
//! Explores location areas, catches Pokemon and keeps a local Pokedex. API
//! responses are kept in an expiring in-memory cache.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::ExpiringCache;
pub use client::PokeApiClient;
pub use commands::Session;
pub use config::Config;
pub use error::{PokedexError, Result};
