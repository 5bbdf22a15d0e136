use crate::stats::{join, mode, Reporter};
use crate::table::{timestamp, TripTable};
use chrono::Timelike;
use std::fmt;

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub months: Vec<u32>,
    pub days: Vec<String>,
    pub hours: Vec<u32>,
}

impl Reporter for TimeStats {
    const TITLE: &'static str = "Calculating The Most Frequent Times of Travel";

    fn compute(table: &TripTable) -> Self {
        let hours = table
            .start_times()
            .iter()
            .flatten()
            .filter_map(timestamp::from_millis)
            .map(|ts| ts.hour());
        Self {
            months: mode(table.months().iter().flatten()),
            days: mode(table.days().iter().flatten().map(str::to_string)),
            hours: mode(hours),
        }
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let months: Vec<String> = self
            .months
            .iter()
            .map(|m| match timestamp::month_name(*m) {
                Some(name) => format!("{name} ({m})"),
                None => m.to_string(),
            })
            .collect();
        writeln!(f, "Most popular month: {}", join(&months))?;
        writeln!(f, "Most popular day: {}", join(&self.days))?;
        writeln!(f, "Most popular hour: {}", join(&self.hours))
    }
}
