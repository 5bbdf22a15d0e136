use crate::stats::Reporter;
use crate::table::TripTable;
use std::fmt;

/// Total and mean trip duration, in seconds, over trips that have one.
/// `mean` is `None` when there are none.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub trips: usize,
    pub total: f64,
    pub mean: Option<f64>,
}

impl Reporter for DurationStats {
    const TITLE: &'static str = "Calculating Trip Duration";

    fn compute(table: &TripTable) -> Self {
        let (trips, total) = table
            .trip_durations()
            .iter()
            .flatten()
            .fold((0usize, 0.0f64), |(n, sum), d| (n + 1, sum + d));
        let mean = (trips > 0).then(|| total / trips as f64);
        Self { trips, total, mean }
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total travel time: {} seconds", self.total)?;
        match self.mean {
            Some(mean) => writeln!(f, "Average travel time: {mean} seconds"),
            None => writeln!(f, "Average travel time: undefined (NaN, no trips)"),
        }
    }
}
