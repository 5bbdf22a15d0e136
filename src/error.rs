use arrow::error::ArrowError;
use std::path::PathBuf;
use thiserror::Error;

pub type LoadResult<T> = core::result::Result<T, LoadError>;

/// Everything that can go wrong turning a city CSV into a `TripTable`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open trip data {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed trip data")]
    Csv(#[from] csv::Error),
    #[error("trip data has no {0:?} column")]
    MissingColumn(&'static str),
    #[error("unparseable Start Time {value:?} at record {row}")]
    BadTimestamp { row: usize, value: String },
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
