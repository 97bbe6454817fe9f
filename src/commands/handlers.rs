//! Command handlers
//!
//! One method per command. Each writes user-facing text to `out` and leaves
//! logging to tracing.

use std::io::Write;

use rand::Rng;
use tracing::info;

use crate::commands::{Command, Session};
use crate::error::Result;
use crate::models::LocationAreaPage;

/// Lowest catch chance, in percent
pub const CATCH_FLOOR: f64 = 5.0;

/// Base experience at which the chance bottoms out near the floor
const CATCH_EXPERIENCE_SCALE: f64 = 200.0;

/// Percent chance of catching a Pokemon with the given base experience.
///
/// Falls linearly from 100 at zero experience and never drops below
/// [`CATCH_FLOOR`].
pub fn catch_chance(base_experience: u32) -> f64 {
    (100.0 - (base_experience as f64 / CATCH_EXPERIENCE_SCALE) * 95.0).max(CATCH_FLOOR)
}

fn already_caught<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "You already caught this pokemon.")?;
    writeln!(out, "Try to catch another one!")?;
    Ok(())
}

impl Session {
    pub(super) fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    pub(super) async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let url = match (&self.cursor.next, self.cursor.started) {
            (_, false) => None,
            (Some(next), true) => Some(next.clone()),
            (None, true) => {
                writeln!(out, "you're on the last page")?;
                return Ok(());
            }
        };

        let page = self.client.location_area_page(url.as_deref()).await?;
        self.show_page(page, out)
    }

    pub(super) async fn mapb<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.cursor.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };

        let page = self.client.location_area_page(Some(&url)).await?;
        self.show_page(page, out)
    }

    fn show_page<W: Write>(&mut self, page: LocationAreaPage, out: &mut W) -> Result<()> {
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        self.cursor.land(page.next, page.previous);
        Ok(())
    }

    pub(super) async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        let location = self.client.location_area(area).await?;

        writeln!(out, "Exploring {}...", area)?;
        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    pub(super) async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        if self.pokedex.contains(name) {
            return already_caught(out);
        }

        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let pokemon = self.client.pokemon(name).await?;

        // `name` may be an id or alias of a Pokemon caught under its API name
        if self.pokedex.contains(&pokemon.name) {
            self.pokedex.record(pokemon, name);
            return already_caught(out);
        }

        let chance = catch_chance(pokemon.base_experience.unwrap_or(0));
        let roll = self.rng.gen::<f64>() * 100.0;
        if roll > chance {
            writeln!(out, "{} escaped!", pokemon.name)?;
            return Ok(());
        }

        info!("Caught {} (roll {:.1} <= {:.1})", pokemon.name, roll, chance);
        let caught_as = pokemon.name.clone();
        if self.pokedex.record(pokemon, name) {
            writeln!(out, "{} was caught!", caught_as)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
        } else {
            already_caught(out)?;
        }
        Ok(())
    }

    pub(super) fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(caught) = self.pokedex.get(name) else {
            writeln!(out, "It appears you haven't caught this pokemon yet, go for it!")?;
            return Ok(());
        };
        let pokemon = &caught.detail;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        writeln!(
            out,
            "Caught at: {}",
            caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        Ok(())
    }

    pub(super) fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "No pokemons caught, go ahead and catch 'em all!")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for caught in self.pokedex.iter() {
            writeln!(out, " - {}", caught.detail.name)?;
        }
        Ok(())
    }
}
