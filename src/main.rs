//! Pokedex - an interactive PokeAPI client

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, ExpiringCache, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber on stderr
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its sweep task
/// 4. Build the API client and session
/// 5. Run the REPL on stdin/stdout until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with REPL output.
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, sweep_interval={}s, base_url={}, http_timeout={}s",
        config.cache_ttl,
        config.sweep_interval().as_secs(),
        config.base_url,
        config.http_timeout
    );

    let cache = ExpiringCache::with_sweep_interval(config.cache_ttl(), config.sweep_interval());
    let client =
        PokeApiClient::new(&config, cache.clone()).context("failed to build HTTP client")?;
    let mut session = Session::new(client);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut session, stdin, &mut stdout)
        .await
        .context("terminal I/O failed")?;

    let stats = cache.stats();
    info!(
        "Session ended: {} cache hits, {} misses ({:.0}% hit rate), {} entries swept",
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0,
        stats.expired
    );
    Ok(())
}
