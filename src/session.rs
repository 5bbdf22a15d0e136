// src/session.rs

use crate::{
    config::Config,
    console::Console,
    filters::collect_selection,
    preview::preview,
    stats::report_all,
    table::{filter::apply_filters, load::load_city},
};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

/// Drives collect → load → filter → report → preview, until the user stops.
pub struct Session<R, W> {
    config: Config,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: Config, console: Console<R, W>) -> Self {
        Self { config, console }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run iterations while the restart answer is `yes`. Returns how many ran.
    pub fn run(&mut self) -> Result<usize> {
        let mut iterations = 0;
        loop {
            self.run_once()?;
            iterations += 1;
            let again = self
                .console
                .ask("\nWould you like to restart? Enter yes or no.\n")?;
            if again != "yes" {
                info!(iterations, "session finished");
                return Ok(iterations);
            }
        }
    }

    /// One pass. The loaded table is dropped when this returns.
    pub fn run_once(&mut self) -> Result<()> {
        let selection = collect_selection(&mut self.console)?;

        let table = load_city(&self.config, selection.city)
            .with_context(|| format!("loading {} trip data", selection.city.as_str()))?;
        let filtered = apply_filters(&table, selection.month, selection.day)
            .context("filtering trip data")?;
        info!(
            loaded = table.num_rows(),
            matched = filtered.num_rows(),
            "filtered trips"
        );

        report_all(self.console.out(), &filtered)?;
        preview(&mut self.console, &filtered)?;
        Ok(())
    }
}
