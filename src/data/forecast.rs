use std::{collections::BTreeMap, fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::weather::{
    ForecastBundle, RawDailySeries, RawHourlySeries, SeriesError, parse_date, parse_datetime,
};

/// Units the core assumes for raw series, keyed by Open-Meteo field name.
const EXPECTED_HOURLY_UNITS: &[(&str, &str)] = &[
    ("temperature_2m", "°C"),
    ("dew_point_2m", "°C"),
    ("precipitation", "mm"),
    ("wind_speed_10m", "km/h"),
    ("wind_gusts_10m", "km/h"),
    ("surface_pressure", "hPa"),
];

const EXPECTED_DAILY_UNITS: &[(&str, &str)] = &[
    ("temperature_2m_max", "°C"),
    ("temperature_2m_min", "°C"),
    ("precipitation_sum", "mm"),
];

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("failed to parse forecast payload")]
    Json(#[from] serde_json::Error),
    #[error("invalid {series} timestamp `{value}` at index {index}")]
    InvalidTimestamp {
        series: &'static str,
        index: usize,
        value: String,
    },
    #[error("{series} field `{field}` is in `{unit}`, expected `{expected}`")]
    UnexpectedUnit {
        series: &'static str,
        field: String,
        unit: String,
        expected: &'static str,
    },
    #[error(transparent)]
    Misaligned(#[from] SeriesError),
}

pub fn load_forecast(path: &Path) -> anyhow::Result<ForecastBundle> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading forecast file {} failed", path.display()))?;
    parse_forecast(&content).with_context(|| format!("loading {} failed", path.display()))
}

/// Parses and validates a forecast document. Arrays of unequal length are
/// reported, never truncated.
pub fn parse_forecast(content: &str) -> Result<ForecastBundle, ForecastError> {
    let payload: ForecastResponse = serde_json::from_str(content)?;
    check_units("hourly", &payload.hourly_units, EXPECTED_HOURLY_UNITS)?;
    check_units("daily", &payload.daily_units, EXPECTED_DAILY_UNITS)?;

    let bundle = ForecastBundle {
        timezone: payload.timezone,
        hourly: parse_hourly(payload.hourly)?,
        daily: parse_daily(payload.daily)?,
    };
    bundle.validate()?;
    tracing::debug!(
        hours = bundle.hourly.len(),
        days = bundle.daily.len(),
        "forecast parsed"
    );
    Ok(bundle)
}

fn check_units(
    series: &'static str,
    units: &BTreeMap<String, String>,
    expected_units: &[(&str, &'static str)],
) -> Result<(), ForecastError> {
    for &(field, expected) in expected_units {
        if let Some(unit) = units.get(field)
            && unit != expected
        {
            return Err(ForecastError::UnexpectedUnit {
                series,
                field: field.to_string(),
                unit: unit.clone(),
                expected,
            });
        }
    }
    Ok(())
}

fn parse_hourly(hourly: HourlyBlock) -> Result<RawHourlySeries, ForecastError> {
    let time = hourly
        .time
        .iter()
        .enumerate()
        .map(|(index, value)| {
            parse_datetime(value).ok_or_else(|| ForecastError::InvalidTimestamp {
                series: "hourly",
                index,
                value: value.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawHourlySeries {
        time,
        temperature: hourly.temperature_2m,
        precipitation_amount: hourly.precipitation,
        precipitation_probability: hourly.precipitation_probability,
        wind_speed: hourly.wind_speed_10m,
        wind_gusts: hourly.wind_gusts_10m,
        uv_index: hourly.uv_index,
        visibility: hourly.visibility,
        cloud_cover: hourly.cloud_cover,
        dew_point: hourly.dew_point_2m,
        surface_pressure: hourly.surface_pressure,
        weather_code: hourly.weather_code,
    })
}

fn parse_daily(daily: DailyBlock) -> Result<RawDailySeries, ForecastError> {
    let time = daily
        .time
        .iter()
        .enumerate()
        .map(|(index, value)| {
            parse_date(value).ok_or_else(|| ForecastError::InvalidTimestamp {
                series: "daily",
                index,
                value: value.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawDailySeries {
        time,
        weather_code: daily.weather_code,
        temperature_max: daily.temperature_2m_max,
        temperature_min: daily.temperature_2m_min,
        precipitation_probability_max: daily.precipitation_probability_max,
        precipitation_sum: daily.precipitation_sum,
        uv_index_max: daily.uv_index_max,
        sunrise: parse_optional_times(&daily.sunrise),
        sunset: parse_optional_times(&daily.sunset),
    })
}

fn parse_optional_times(values: &[Option<String>]) -> Vec<Option<chrono::NaiveDateTime>> {
    values
        .iter()
        .map(|v| v.as_deref().and_then(parse_datetime))
        .collect()
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    hourly_units: BTreeMap<String, String>,
    #[serde(default)]
    hourly: HourlyBlock,
    #[serde(default)]
    daily_units: BTreeMap<String, String>,
    #[serde(default)]
    daily: DailyBlock,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<Option<f32>>,
    precipitation: Vec<Option<f32>>,
    precipitation_probability: Vec<Option<f32>>,
    wind_speed_10m: Vec<Option<f32>>,
    wind_gusts_10m: Vec<Option<f32>>,
    uv_index: Vec<Option<f32>>,
    visibility: Vec<Option<f32>>,
    cloud_cover: Vec<Option<f32>>,
    dew_point_2m: Vec<Option<f32>>,
    surface_pressure: Vec<Option<f32>>,
    weather_code: Vec<Option<u8>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<Option<u8>>,
    temperature_2m_max: Vec<Option<f32>>,
    temperature_2m_min: Vec<Option<f32>>,
    precipitation_probability_max: Vec<Option<f32>>,
    precipitation_sum: Vec<Option<f32>>,
    uv_index_max: Vec<Option<f32>>,
    sunrise: Vec<Option<String>>,
    sunset: Vec<Option<String>>,
}
