use crate::{
    config::{City, Config},
    error::{LoadError, LoadResult},
    table::{
        start_time_type, timestamp, TripTable, BIRTH_YEAR, DAY, END_STATION, END_TIME, GENDER,
        MONTH, START_STATION, START_TIME, TRIP_DURATION, USER_TYPE,
    },
};
use arrow::{
    array::{
        ArrayRef, Float64Builder, Int32Builder, StringBuilder, TimestampMillisecondBuilder,
        UInt32Builder,
    },
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use chrono::Datelike;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, sync::Arc};
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 5] = [
    START_TIME,
    START_STATION,
    END_STATION,
    TRIP_DURATION,
    USER_TYPE,
];

/// One CSV record. Unknown columns (the unnamed index) are ignored. Blank
/// cells, trailing fields cut off a short record, and columns the file does
/// not have all deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    trip_duration: Option<f64>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Open the city's CSV, read it fully and close it again.
#[tracing::instrument(level = "info", skip_all, fields(city = city.as_str()))]
pub fn load_city(config: &Config, city: City) -> LoadResult<TripTable> {
    let path = config.city_path(city);
    let file = File::open(&path).map_err(|source| LoadError::Open {
        path: path.clone(),
        source,
    })?;
    let table = read_trips(BufReader::new(file))?;
    info!(rows = table.num_rows(), path = %path.display(), "loaded trip data");
    Ok(table)
}

/// Parse trip CSV from any reader and derive the `month` and `day` columns.
pub fn read_trips<R: Read>(reader: R) -> LoadResult<TripTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);
    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !has_column(c)) {
        return Err(LoadError::MissingColumn(missing));
    }
    let has_gender = has_column(GENDER);
    let has_birth_year = has_column(BIRTH_YEAR);
    let has_end_time = has_column(END_TIME);
    debug!(has_gender, has_birth_year, has_end_time, "detected optional columns");

    let mut start_time = TimestampMillisecondBuilder::new();
    let mut end_time = StringBuilder::new();
    let mut start_station = StringBuilder::new();
    let mut end_station = StringBuilder::new();
    let mut trip_duration = Float64Builder::new();
    let mut user_type = StringBuilder::new();
    let mut gender = StringBuilder::new();
    let mut birth_year = Int32Builder::new();
    let mut month = UInt32Builder::new();
    let mut day = StringBuilder::new();

    for (idx, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let trip = result?;
        let ts = timestamp::parse_start_time(&trip.start_time).ok_or_else(|| {
            LoadError::BadTimestamp {
                row: idx + 1,
                value: trip.start_time.clone(),
            }
        })?;

        start_time.append_value(timestamp::to_millis(&ts));
        end_time.append_option(trip.end_time.as_deref());
        start_station.append_option(trip.start_station.as_deref());
        end_station.append_option(trip.end_station.as_deref());
        trip_duration.append_option(trip.trip_duration);
        user_type.append_option(trip.user_type.as_deref());
        gender.append_option(trip.gender.as_deref());
        birth_year.append_option(trip.birth_year.map(|y| y.round() as i32));
        month.append_value(ts.month());
        day.append_value(timestamp::weekday_name(ts.weekday()));
    }

    let mut fields = vec![Field::new(START_TIME, start_time_type(), false)];
    let mut columns: Vec<ArrayRef> = vec![Arc::new(start_time.finish())];
    // raw pass-through, only shown in the preview
    if has_end_time {
        fields.push(Field::new(END_TIME, DataType::Utf8, true));
        columns.push(Arc::new(end_time.finish()));
    }
    fields.extend([
        Field::new(START_STATION, DataType::Utf8, true),
        Field::new(END_STATION, DataType::Utf8, true),
        Field::new(TRIP_DURATION, DataType::Float64, true),
        Field::new(USER_TYPE, DataType::Utf8, true),
    ]);
    columns.extend([
        Arc::new(start_station.finish()) as ArrayRef,
        Arc::new(end_station.finish()) as ArrayRef,
        Arc::new(trip_duration.finish()) as ArrayRef,
        Arc::new(user_type.finish()) as ArrayRef,
    ]);
    if has_gender {
        fields.push(Field::new(GENDER, DataType::Utf8, true));
        columns.push(Arc::new(gender.finish()));
    }
    if has_birth_year {
        fields.push(Field::new(BIRTH_YEAR, DataType::Int32, true));
        columns.push(Arc::new(birth_year.finish()));
    }
    fields.push(Field::new(MONTH, DataType::UInt32, false));
    columns.push(Arc::new(month.finish()));
    fields.push(Field::new(DAY, DataType::Utf8, false));
    columns.push(Arc::new(day.finish()));

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?;
    TripTable::try_new(batch)
}
