//! Conversions from free-text answers to typed case values.
//!
//! Absent and blank answers become `None`; anything else must convert or fail.

use chrono::NaiveDate;

use super::error::FieldMappingError;
use super::payload::MonetaryValue;

const COUNTRY_OF_EXPORT_CODES: &[(&str, i32)] = &[
    ("england", 167_440_000),
    ("scotland", 167_440_001),
    ("wales", 167_440_002),
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

fn present(answer: Option<&str>) -> Option<&str> {
    answer.map(str::trim).filter(|value| !value.is_empty())
}

pub fn text(answer: Option<&str>) -> Option<String> {
    present(answer).map(str::to_string)
}

pub fn country_of_export(answer: Option<&str>) -> Result<Option<i32>, FieldMappingError> {
    let Some(value) = present(answer) else {
        return Ok(None);
    };

    COUNTRY_OF_EXPORT_CODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, code)| Some(*code))
        .ok_or_else(|| FieldMappingError::FailedToMapCountryOfExport {
            answer: value.to_string(),
        })
}

/// Whole numbers may be negative; fractional amounts must be non-negative with one or two
/// decimal places.
pub fn value_in_pounds(answer: Option<&str>) -> Result<Option<MonetaryValue>, FieldMappingError> {
    let Some(value) = present(answer) else {
        return Ok(None);
    };

    let malformed = || FieldMappingError::MalformedNumber {
        field: "valueInPounds",
        answer: value.to_string(),
    };

    if let Ok(whole) = value.parse::<i64>() {
        return Ok(Some(MonetaryValue::Whole(whole)));
    }

    let (units, fraction) = value.split_once('.').ok_or_else(malformed)?;
    let digits_only = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits_only(units) || !digits_only(fraction) || fraction.len() > 2 {
        return Err(malformed());
    }

    value
        .parse::<f64>()
        .map(|amount| Some(MonetaryValue::Decimal(amount)))
        .map_err(|_| malformed())
}

pub fn whole_number(
    field: &'static str,
    answer: Option<&str>,
) -> Result<Option<i64>, FieldMappingError> {
    let Some(value) = present(answer) else {
        return Ok(None);
    };

    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| FieldMappingError::MalformedNumber {
            field,
            answer: value.to_string(),
        })
}

pub fn decimal(
    field: &'static str,
    answer: Option<&str>,
) -> Result<Option<f64>, FieldMappingError> {
    let Some(value) = present(answer) else {
        return Ok(None);
    };

    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(FieldMappingError::MalformedNumber {
            field,
            answer: value.to_string(),
        }),
    }
}

pub fn date(
    field: &'static str,
    answer: Option<&str>,
) -> Result<Option<NaiveDate>, FieldMappingError> {
    let Some(value) = present(answer) else {
        return Ok(None);
    };

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .map(Some)
        .ok_or_else(|| FieldMappingError::MalformedDate {
            field,
            answer: value.to_string(),
        })
}
