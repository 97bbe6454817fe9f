//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; everything here comes from the network, the payloads or the user.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level failure talking to the API
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 404 for the requested resource
    #[error("{0} does not exist")]
    NotFound(String),

    /// The API answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body was not the JSON we expected
    #[error("malformed response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A command was invoked without its required argument
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// Reading input or writing output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PokedexError::NotFound("missingno".to_string()).to_string(),
            "missingno does not exist"
        );
        assert_eq!(
            PokedexError::MissingArgument("pokemon name").to_string(),
            "missing argument: pokemon name"
        );

        let err = PokedexError::Status {
            status: 503,
            url: "https://pokeapi.co/api/v2/pokemon/ditto".to_string(),
        };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        let err = PokedexError::Decode {
            url: "http://x".to_string(),
            source,
        };

        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "malformed response from http://x");
    }
}
