use crate::filters::{DayFilter, MonthFilter};
use crate::table::TripTable;
use arrow::{array::BooleanArray, error::ArrowError};
use tracing::debug;

/// Month filter, then day filter. Either one may be `All`.
#[tracing::instrument(level = "debug", skip(table), fields(rows = table.num_rows()))]
pub fn apply_filters(
    table: &TripTable,
    month: MonthFilter,
    day: DayFilter,
) -> Result<TripTable, ArrowError> {
    let by_month = filter_month(table, month)?;
    let filtered = filter_day(&by_month, day)?;
    debug!(
        after_month = by_month.num_rows(),
        after_day = filtered.num_rows(),
        "applied filters"
    );
    Ok(filtered)
}

pub fn filter_month(table: &TripTable, month: MonthFilter) -> Result<TripTable, ArrowError> {
    let MonthFilter::Only(m) = month else {
        return Ok(table.clone());
    };
    let target = m.number();
    let mask: BooleanArray = table
        .months()
        .iter()
        .map(|v| Some(v == Some(target)))
        .collect();
    table.filter(&mask)
}

pub fn filter_day(table: &TripTable, day: DayFilter) -> Result<TripTable, ArrowError> {
    let Some(name) = day.title() else {
        return Ok(table.clone());
    };
    let mask: BooleanArray = table
        .days()
        .iter()
        .map(|v| Some(v == Some(name)))
        .collect();
    table.filter(&mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Month;
    use crate::table::fixtures;
    use crate::table::timestamp::from_millis;
    use chrono::{Datelike, Weekday};

    fn durations(t: &TripTable) -> Vec<f64> {
        t.trip_durations().values().to_vec()
    }

    #[test]
    fn all_all_is_identity() {
        let chi = fixtures::chicago();
        let out = apply_filters(&chi, MonthFilter::All, DayFilter::All).unwrap();
        assert_eq!(out.num_rows(), chi.num_rows());
        assert_eq!(out.batch(), chi.batch());
    }

    #[test]
    fn month_filter_is_sound_and_exhaustive() {
        let chi = fixtures::chicago();
        for m in Month::ALL {
            let out = apply_filters(&chi, MonthFilter::Only(m), DayFilter::All).unwrap();
            assert!(out.months().values().iter().all(|v| *v == m.number()));
            let expected = chi
                .months()
                .values()
                .iter()
                .filter(|v| **v == m.number())
                .count();
            assert_eq!(out.num_rows(), expected, "month {}", m.as_str());
        }
    }

    #[test]
    fn march_rows_start_in_march() {
        let chi = fixtures::chicago();
        let out = apply_filters(&chi, MonthFilter::Only(Month::March), DayFilter::All).unwrap();
        assert_eq!(out.num_rows(), 4);
        for ms in out.start_times().values().iter() {
            assert_eq!(from_millis(*ms).unwrap().month(), 3);
        }
    }

    #[test]
    fn day_filter_matches_title_case() {
        let chi = fixtures::chicago();
        let monday = DayFilter::Only(Weekday::Mon);
        let out = apply_filters(&chi, MonthFilter::All, monday).unwrap();
        assert!(out.days().iter().all(|d| d == Some("Monday")));
        let expected = chi.days().iter().filter(|d| *d == Some("Monday")).count();
        assert_eq!(out.num_rows(), expected);
        assert_eq!(out.num_rows(), 5);
    }

    #[test]
    fn filters_commute() {
        let chi = fixtures::chicago();
        let months = [
            MonthFilter::All,
            MonthFilter::Only(Month::March),
            MonthFilter::Only(Month::June),
        ];
        let days = [
            DayFilter::All,
            DayFilter::Only(Weekday::Mon),
            DayFilter::Only(Weekday::Sat),
        ];
        for m in months {
            for d in days {
                let month_first = filter_day(&filter_month(&chi, m).unwrap(), d).unwrap();
                let day_first = filter_month(&filter_day(&chi, d).unwrap(), m).unwrap();
                assert_eq!(month_first.batch(), day_first.batch(), "{m} / {d}");
            }
        }
    }

    #[test]
    fn march_mondays() {
        let chi = fixtures::chicago();
        let out = apply_filters(
            &chi,
            MonthFilter::Only(Month::March),
            DayFilter::Only(Weekday::Mon),
        )
        .unwrap();
        assert_eq!(durations(&out), vec![600.0, 120.0]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let chi = fixtures::chicago();
        let out = apply_filters(
            &chi,
            MonthFilter::Only(Month::January),
            DayFilter::Only(Weekday::Fri),
        )
        .unwrap();
        assert!(out.is_empty());
        assert!(out.has_gender());
        assert_eq!(chi.num_rows(), 8);
    }
}
