// src/filters.rs

use crate::config::City;
use crate::console::{Console, SEPARATOR};
use crate::table::timestamp::weekday_name;
use anyhow::Result;
use chrono::Weekday;
use std::{
    fmt,
    io::{BufRead, Write},
};
use tracing::info;

/// The six months covered by the trip data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    /// 1-based calendar month.
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let token = s.trim().to_lowercase();
        Month::ALL.into_iter().find(|m| m.as_str() == token)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn parse(s: &str) -> Option<Self> {
        let token = s.trim().to_lowercase();
        if token == "all" {
            return Some(MonthFilter::All);
        }
        Month::from_str(&token).map(MonthFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MonthFilter::All => "all",
            MonthFilter::Only(m) => m.as_str(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    const DAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Accepts full English weekday names only (`"mon"` is rejected).
    pub fn parse(s: &str) -> Option<Self> {
        let token = s.trim().to_lowercase();
        if token == "all" {
            return Some(DayFilter::All);
        }
        Self::DAYS
            .into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == token)
            .map(DayFilter::Only)
    }

    /// Title-cased name the derived `day` column is compared against.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            DayFilter::All => None,
            DayFilter::Only(d) => Some(weekday_name(*d)),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.title() {
            None => f.write_str("all"),
            Some(name) => f.write_str(&name.to_lowercase()),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated city/month/day choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

/// Prompt for city, month and day, re-asking each until it is valid.
pub fn collect_selection<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Selection> {
    writeln!(console.out(), "Hello! Let's explore some US bikeshare data!")?;

    let city = console.ask_until(
        "Would you like to analyze data for chicago, new york city, or washington?: ",
        "That's not a valid entry. Please select chicago, new york city, or washington: ",
        City::from_str,
    )?;
    let month = console.ask_until(
        "Please choose a month from january to june or all if you don't want to filter by month: ",
        "That's not a valid entry. Please select january, february, march, april, may, june, or all: ",
        MonthFilter::parse,
    )?;
    let day = console.ask_until(
        "Please enter a day of the week (e.g. monday) or all: ",
        "That's not a valid entry. Please select monday, tuesday, wednesday, thursday, friday, saturday, sunday, or all: ",
        DayFilter::parse,
    )?;

    writeln!(console.out(), "{SEPARATOR}")?;
    info!(city = city.as_str(), %month, %day, "selection");
    Ok(Selection { city, month, day })
}
