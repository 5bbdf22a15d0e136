// src/config.rs

use std::path::PathBuf;

/// The three cities we ship trip data for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case token the user types to pick this city.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Source CSV for this city, relative to the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let token = s.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.as_str() == token)
    }
}

/// Where the city CSVs live.
#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Full path of a city's source file.
    pub fn city_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}
