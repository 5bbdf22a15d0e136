use crate::stats::{join, mode, Reporter};
use crate::table::TripTable;
use std::fmt;

/// `"<start> to <end>"`, the label a trip is counted under.
pub fn trip_label(start: &str, end: &str) -> String {
    format!("{start} to {end}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start_stations: Vec<String>,
    pub end_stations: Vec<String>,
    pub trips: Vec<String>,
}

impl Reporter for StationStats {
    const TITLE: &'static str = "Calculating The Most Popular Stations and Trip";

    fn compute(table: &TripTable) -> Self {
        let starts = table.start_stations();
        let ends = table.end_stations();
        let trips = starts
            .iter()
            .zip(ends.iter())
            .filter_map(|(s, e)| Some(trip_label(s?, e?)));
        Self {
            start_stations: mode(starts.iter().flatten().map(str::to_string)),
            end_stations: mode(ends.iter().flatten().map(str::to_string)),
            trips: mode(trips),
        }
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most popular start station: {}", join(&self.start_stations))?;
        writeln!(f, "Most popular end station: {}", join(&self.end_stations))?;
        writeln!(f, "Most popular trip: {}", join(&self.trips))
    }
}
