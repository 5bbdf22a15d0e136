// src/table/mod.rs
pub mod filter;
pub mod load;
pub mod timestamp;

use crate::error::{LoadError, LoadResult};
use arrow::{
    array::{
        AsArray, BooleanArray, Float64Array, Int32Array, StringArray, TimestampMillisecondArray,
        UInt32Array,
    },
    compute::filter_record_batch,
    datatypes::{DataType, Float64Type, Int32Type, TimeUnit, TimestampMillisecondType, UInt32Type},
    error::ArrowError,
    record_batch::RecordBatch,
};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";
/// Derived at load time from `Start Time`.
pub const MONTH: &str = "month";
pub const DAY: &str = "day";

pub fn start_time_type() -> DataType {
    DataType::Timestamp(TimeUnit::Millisecond, None)
}

/// Positions of the known columns inside the batch.
#[derive(Clone, Copy, Debug)]
struct Columns {
    start_time: usize,
    start_station: usize,
    end_station: usize,
    trip_duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
    month: usize,
    day: usize,
}

/// Trip records for one city, plus the derived `month`/`day` columns.
///
/// Gender and birth year are capabilities of the data, not of the city:
/// ask `has_gender()` / `has_birth_year()` before reading them.
#[derive(Clone, Debug)]
pub struct TripTable {
    batch: RecordBatch,
    cols: Columns,
}

impl TripTable {
    /// Wrap a batch, checking every known column has the type the
    /// accessors below expect.
    pub fn try_new(batch: RecordBatch) -> LoadResult<Self> {
        let schema = batch.schema();
        let lookup = |name: &'static str, ty: &DataType| -> LoadResult<Option<usize>> {
            match schema.column_with_name(name) {
                None => Ok(None),
                Some((idx, field)) if field.data_type() == ty => Ok(Some(idx)),
                Some((_, field)) => Err(LoadError::Arrow(ArrowError::SchemaError(format!(
                    "column {:?} is {}, expected {}",
                    name,
                    field.data_type(),
                    ty
                )))),
            }
        };
        let required = |name: &'static str, ty: &DataType| -> LoadResult<usize> {
            lookup(name, ty)?.ok_or(LoadError::MissingColumn(name))
        };

        let cols = Columns {
            start_time: required(START_TIME, &start_time_type())?,
            start_station: required(START_STATION, &DataType::Utf8)?,
            end_station: required(END_STATION, &DataType::Utf8)?,
            trip_duration: required(TRIP_DURATION, &DataType::Float64)?,
            user_type: required(USER_TYPE, &DataType::Utf8)?,
            gender: lookup(GENDER, &DataType::Utf8)?,
            birth_year: lookup(BIRTH_YEAR, &DataType::Int32)?,
            month: required(MONTH, &DataType::UInt32)?,
            day: required(DAY, &DataType::Utf8)?,
        };
        Ok(Self { batch, cols })
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    pub fn has_gender(&self) -> bool {
        self.cols.gender.is_some()
    }

    pub fn has_birth_year(&self) -> bool {
        self.cols.birth_year.is_some()
    }

    pub fn start_times(&self) -> &TimestampMillisecondArray {
        self.batch
            .column(self.cols.start_time)
            .as_primitive::<TimestampMillisecondType>()
    }

    pub fn start_stations(&self) -> &StringArray {
        self.batch.column(self.cols.start_station).as_string::<i32>()
    }

    pub fn end_stations(&self) -> &StringArray {
        self.batch.column(self.cols.end_station).as_string::<i32>()
    }

    pub fn trip_durations(&self) -> &Float64Array {
        self.batch
            .column(self.cols.trip_duration)
            .as_primitive::<Float64Type>()
    }

    pub fn user_types(&self) -> &StringArray {
        self.batch.column(self.cols.user_type).as_string::<i32>()
    }

    pub fn genders(&self) -> Option<&StringArray> {
        self.cols
            .gender
            .map(|i| self.batch.column(i).as_string::<i32>())
    }

    pub fn birth_years(&self) -> Option<&Int32Array> {
        self.cols
            .birth_year
            .map(|i| self.batch.column(i).as_primitive::<Int32Type>())
    }

    pub fn months(&self) -> &UInt32Array {
        self.batch.column(self.cols.month).as_primitive::<UInt32Type>()
    }

    pub fn days(&self) -> &StringArray {
        self.batch.column(self.cols.day).as_string::<i32>()
    }

    /// Keep the rows where `mask` is true. The source table is untouched.
    pub fn filter(&self, mask: &BooleanArray) -> Result<Self, ArrowError> {
        Ok(Self {
            batch: filter_record_batch(&self.batch, mask)?,
            cols: self.cols,
        })
    }

    /// Zero-copy window of up to `len` rows; clamps at the end of the table.
    pub fn slice(&self, offset: usize, len: usize) -> Self {
        let offset = offset.min(self.num_rows());
        let len = len.min(self.num_rows() - offset);
        Self {
            batch: self.batch.slice(offset, len),
            cols: self.cols,
        }
    }
}
