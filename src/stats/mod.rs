// src/stats/mod.rs
pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use crate::console::SEPARATOR;
use crate::table::TripTable;
use anyhow::Result;
use std::{collections::HashMap, fmt, hash::Hash, io::Write, time::Instant};
use tracing::debug;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::UserStats;

/// Occurrences per distinct value, most frequent first; ties in value order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut out: Vec<(T, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Every value that reaches the highest count, in value order.
/// Empty input gives an empty set.
pub fn mode<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Ord,
    I: IntoIterator<Item = T>,
{
    let counts = value_counts(values);
    let Some(&(_, top)) = counts.first() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .take_while(|(_, n)| *n == top)
        .map(|(v, _)| v)
        .collect()
}

/// `"a, b"`, or a placeholder when there is nothing to show.
pub(crate) fn join<T: fmt::Display>(values: &[T]) -> String {
    if values.is_empty() {
        return "n/a (no trips)".to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One block of the printed summary.
pub trait Reporter: fmt::Display + Sized {
    /// Headline printed before the figures.
    const TITLE: &'static str;

    fn compute(table: &TripTable) -> Self;
}

/// Compute `R` over `table` and print it with its timing footer.
pub fn report<R: Reporter, W: Write>(out: &mut W, table: &TripTable) -> Result<R> {
    writeln!(out, "\n{}...\n", R::TITLE)?;
    let start = Instant::now();
    let stats = R::compute(table);
    let elapsed = start.elapsed();
    write!(out, "{stats}")?;
    debug!(report = R::TITLE, rows = table.num_rows(), ?elapsed, "report done");
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(stats)
}

/// The four reports, in display order.
pub fn report_all<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    report::<TimeStats, _>(out, table)?;
    report::<StationStats, _>(out, table)?;
    report::<DurationStats, _>(out, table)?;
    report::<UserStats, _>(out, table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::fixtures;

    #[test]
    fn value_counts_descending() {
        let counts = value_counts(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn mode_keeps_every_tie() {
        assert_eq!(mode([3, 1, 3, 1, 2]), vec![1, 3]);
        assert_eq!(mode([7]), vec![7]);
        assert!(mode(Vec::<u32>::new()).is_empty());
    }

    #[test]
    fn join_placeholder() {
        assert_eq!(join(&[1, 2]), "1, 2");
        assert_eq!(join::<u32>(&[]), "n/a (no trips)");
    }

    #[test]
    fn report_all_prints_every_section() {
        let mut out = Vec::new();
        report_all(&mut out, &fixtures::chicago()).unwrap();
        let text = String::from_utf8(out).unwrap();
        for title in [
            TimeStats::TITLE,
            StationStats::TITLE,
            DurationStats::TITLE,
            UserStats::TITLE,
        ] {
            assert!(text.contains(title), "missing {title}");
        }
        assert_eq!(text.matches("This took").count(), 4);
    }

    #[test]
    fn report_all_survives_empty_washington() {
        let empty = fixtures::washington().slice(0, 0);
        let mut out = Vec::new();
        report_all(&mut out, &empty).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("no gender data"));
        assert!(text.contains("no birth year data"));
    }
}
