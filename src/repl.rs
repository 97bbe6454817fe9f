//! Read-eval-print loop
//!
//! Reads lines from any async reader, runs them as commands against a
//! [`Session`] and writes everything the user sees to a plain writer.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::commands::{Command, Outcome, Session};
use crate::error::Result;

/// Shown before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Lower-cases `text` and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs the loop until `exit` or end of input.
///
/// Command failures are reported to the user and the loop carries on; only
/// I/O errors on `input` or `out` end it early.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input, leaving REPL");
            writeln!(out)?;
            return Ok(());
        };

        let words = clean_input(&line);
        let Some(first) = words.first() else {
            continue;
        };
        let argument = words.get(1).map(String::as_str);

        let command = match first.parse::<Command>() {
            Ok(command) => command,
            Err(unknown) => {
                debug!("Unknown command: {}", unknown.0);
                writeln!(out, "Unknown command")?;
                continue;
            }
        };

        match session.execute(command, argument, out).await {
            Ok(Outcome::Exit) => return Ok(()),
            Ok(Outcome::Continue) => {}
            Err(err) => {
                warn!("{} failed: {}", command, err);
                writeln!(out, "Error: {}", err)?;
            }
        }
    }
}
