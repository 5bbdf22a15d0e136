use crate::stats::{join, mode, value_counts, Reporter};
use crate::table::TripTable;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct BirthYears {
    /// Oldest rider.
    pub earliest: Option<i32>,
    /// Youngest rider.
    pub latest: Option<i32>,
    pub common: Vec<i32>,
}

/// User-type counts, plus gender and birth-year figures when the data has them.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYears>,
}

impl Reporter for UserStats {
    const TITLE: &'static str = "Calculating User Stats";

    fn compute(table: &TripTable) -> Self {
        let counts = |values: &arrow::array::StringArray| -> Vec<(String, usize)> {
            value_counts(values.iter().flatten().map(str::to_string))
        };
        let birth_years = table.birth_years().map(|years| {
            let present: Vec<i32> = years.iter().flatten().collect();
            BirthYears {
                earliest: present.iter().min().copied(),
                latest: present.iter().max().copied(),
                common: mode(present.iter().copied()),
            }
        });
        Self {
            user_types: counts(table.user_types()),
            genders: table.genders().map(counts),
            birth_years,
        }
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "  n/a (no trips)");
    }
    for (value, n) in counts {
        writeln!(f, "  {value}: {n}")?;
    }
    Ok(())
}

fn year(y: Option<i32>) -> String {
    y.map(|y| y.to_string())
        .unwrap_or_else(|| "n/a (no trips)".to_string())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User types:")?;
        write_counts(f, &self.user_types)?;

        match &self.genders {
            Some(genders) => {
                writeln!(f, "Genders:")?;
                write_counts(f, genders)?;
            }
            None => writeln!(f, "Sorry, no gender data for this city")?,
        }

        match &self.birth_years {
            Some(by) => {
                writeln!(f, "Earliest birth year: {}", year(by.earliest))?;
                writeln!(f, "Most recent birth year: {}", year(by.latest))?;
                writeln!(f, "Most common birth year: {}", join(&by.common))
            }
            None => writeln!(f, "Sorry, no birth year data for this city"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::fixtures;

    #[test]
    fn chicago_users() {
        let stats = UserStats::compute(&fixtures::chicago());
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 6), ("Customer".to_string(), 2)]
        );
        // one blank Gender cell is not counted
        assert_eq!(
            stats.genders,
            Some(vec![("Male".to_string(), 4), ("Female".to_string(), 3)])
        );
        assert_eq!(
            stats.birth_years,
            Some(BirthYears {
                earliest: Some(1975),
                latest: Some(2001),
                common: vec![1990],
            })
        );
        let text = stats.to_string();
        assert!(text.contains("  Subscriber: 6"));
        assert!(text.contains("Most common birth year: 1990"));
    }

    #[test]
    fn washington_has_no_gender_or_birth_year() {
        let stats = UserStats::compute(&fixtures::washington());
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);
        let text = stats.to_string();
        assert!(text.contains("Sorry, no gender data for this city"));
        assert!(text.contains("Sorry, no birth year data for this city"));
    }

    #[test]
    fn empty_chicago_keeps_columns_but_no_values() {
        let stats = UserStats::compute(&fixtures::chicago().slice(0, 0));
        assert!(stats.user_types.is_empty());
        assert_eq!(stats.genders, Some(vec![]));
        let by = stats.birth_years.unwrap();
        assert_eq!(by.earliest, None);
        assert!(by.common.is_empty());
    }
}
