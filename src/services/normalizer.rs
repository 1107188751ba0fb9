//! Candle normalizer: turns either response shape of the historical-candles
//! endpoint into one ascending `Vec<DailyRecord>`.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::DataError;
use crate::models::candle::{DailyRecord, Field, FieldSet};

type Row = Map<String, Value>;

#[derive(Deserialize)]
#[serde(untagged)]
enum CandleResponse {
    Wrapped { data: Vec<Row> },
    Bare(Vec<Row>),
}

/// Normalize a raw response into records sorted ascending by date.
///
/// Only fields listed in `fields` are read; absent values stay `None`.
/// An empty `data` array is not an error.
pub fn normalize(raw: &Value, fields: &FieldSet) -> Result<Vec<DailyRecord>, DataError> {
    let rows = match CandleResponse::deserialize(raw) {
        Ok(CandleResponse::Wrapped { data }) => data,
        Ok(CandleResponse::Bare(rows)) => rows,
        Err(_) => return Err(DataError::UnrecognizedShape(describe(raw))),
    };

    let mut records = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(row, index, fields))
        .collect::<Result<Vec<_>, _>>()?;

    records.sort_by_key(|r| r.date);
    if let Some(pair) = records.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(DataError::DuplicateDate(pair[1].date));
    }

    debug!(records = records.len(), fields = %fields.to_query(), "Normalized candle response");
    Ok(records)
}

fn describe(raw: &Value) -> String {
    match raw {
        Value::Object(map) if !map.contains_key("data") => {
            "object without a 'data' array".to_string()
        }
        Value::Object(_) => "object whose 'data' is not an array of records".to_string(),
        Value::Array(_) => "array containing non-object rows".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
    }
}

fn parse_row(row: &Row, index: usize, fields: &FieldSet) -> Result<DailyRecord, DataError> {
    let date_value = row
        .get("date")
        .or_else(|| {
            row.iter()
                .find(|(key, _)| key.to_ascii_lowercase().contains("date"))
                .map(|(_, v)| v)
        })
        .ok_or_else(|| DataError::MissingField {
            field: "date".to_string(),
            index,
        })?;

    let mut record = DailyRecord::new(parse_date(date_value)?);
    for field in fields.iter() {
        let Some(value) = row.get(field.as_str()) else {
            continue;
        };
        match field {
            Field::Open => record.open = parse_number(value, field)?,
            Field::High => record.high = parse_number(value, field)?,
            Field::Low => record.low = parse_number(value, field)?,
            Field::Close => record.close = parse_number(value, field)?,
            Field::Turnover => record.turnover = parse_number(value, field)?,
            Field::Volume => record.volume = parse_volume(value)?,
        }
    }
    Ok(record)
}

fn parse_date(value: &Value) -> Result<NaiveDate, DataError> {
    let invalid = || DataError::InvalidValue {
        field: "date".to_string(),
        value: value.to_string(),
    };
    let text = value.as_str().ok_or_else(invalid)?.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(text).map(|dt| dt.date_naive()))
        .map_err(|_| invalid())
}

fn parse_number(value: &Value, field: Field) -> Result<Option<f64>, DataError> {
    let invalid = || DataError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64().map(Some).ok_or_else(invalid),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

fn parse_volume(value: &Value) -> Result<Option<u64>, DataError> {
    if let Some(v) = value.as_u64() {
        return Ok(Some(v));
    }
    match parse_number(value, Field::Volume)? {
        None => Ok(None),
        Some(v) if v >= 0.0 && v.fract() == 0.0 && v.is_finite() => Ok(Some(v as u64)),
        Some(_) => Err(DataError::InvalidValue {
            field: Field::Volume.to_string(),
            value: value.to_string(),
        }),
    }
}
