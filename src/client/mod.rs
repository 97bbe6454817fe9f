//! PokeAPI client
//!
//! HTTP access to the PokeAPI, read through the response cache.

mod fetch;

pub use fetch::PokeApiClient;
