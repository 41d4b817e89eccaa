use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod conversions;
mod metrics;

pub use conversions::{
    HPA_TO_INHG, KMH_TO_MPH, MM_PER_INCH, UnitOfMeasure, convert, convert_delta, convert_temp,
    format_canonical, format_value, round_temp, round_to,
};
pub use metrics::HourlyMetric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WindSpeedUnit {
    #[default]
    KilometresPerHour,
    MilesPerHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PrecipitationUnit {
    #[default]
    Millimetres,
    Inches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PressureUnit {
    #[default]
    Hectopascal,
    InchesOfMercury,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeFormat {
    Hour12,
    #[default]
    Hour24,
}

/// Display units per physical quantity. Raw series are always metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct UnitPreferences {
    pub temperature: TemperatureUnit,
    pub wind_speed: WindSpeedUnit,
    pub precipitation: PrecipitationUnit,
    pub pressure: PressureUnit,
}

impl UnitPreferences {
    #[must_use]
    pub fn metric() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn imperial() -> Self {
        Self {
            temperature: TemperatureUnit::Fahrenheit,
            wind_speed: WindSpeedUnit::MilesPerHour,
            precipitation: PrecipitationUnit::Inches,
            pressure: PressureUnit::InchesOfMercury,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("{series} field `{field}` has {actual} entries, expected {expected}")]
    Misaligned {
        series: &'static str,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Hourly parallel arrays co-indexed by `time`.
///
/// `time` holds local wall-clock hours. Metric arrays are either empty (the
/// metric was not requested upstream) or exactly as long as `time`; anything
/// else is rejected by [`RawHourlySeries::validate`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawHourlySeries {
    pub time: Vec<NaiveDateTime>,
    pub temperature: Vec<Option<f32>>,
    pub precipitation_amount: Vec<Option<f32>>,
    pub precipitation_probability: Vec<Option<f32>>,
    pub wind_speed: Vec<Option<f32>>,
    pub wind_gusts: Vec<Option<f32>>,
    pub uv_index: Vec<Option<f32>>,
    pub visibility: Vec<Option<f32>>,
    pub cloud_cover: Vec<Option<f32>>,
    pub dew_point: Vec<Option<f32>>,
    pub surface_pressure: Vec<Option<f32>>,
    pub weather_code: Vec<Option<u8>>,
}

impl RawHourlySeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn validate(&self) -> Result<(), SeriesError> {
        let expected = self.time.len();
        let fields = [
            ("temperature_2m", self.temperature.len()),
            ("precipitation", self.precipitation_amount.len()),
            (
                "precipitation_probability",
                self.precipitation_probability.len(),
            ),
            ("wind_speed_10m", self.wind_speed.len()),
            ("wind_gusts_10m", self.wind_gusts.len()),
            ("uv_index", self.uv_index.len()),
            ("visibility", self.visibility.len()),
            ("cloud_cover", self.cloud_cover.len()),
            ("dew_point_2m", self.dew_point.len()),
            ("surface_pressure", self.surface_pressure.len()),
            ("weather_code", self.weather_code.len()),
        ];
        check_alignment("hourly", expected, &fields)
    }

    #[must_use]
    pub fn weather_code_at(&self, idx: usize) -> Option<u8> {
        self.weather_code.get(idx).copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDailySeries {
    pub time: Vec<NaiveDate>,
    pub weather_code: Vec<Option<u8>>,
    pub temperature_max: Vec<Option<f32>>,
    pub temperature_min: Vec<Option<f32>>,
    pub precipitation_probability_max: Vec<Option<f32>>,
    pub precipitation_sum: Vec<Option<f32>>,
    pub uv_index_max: Vec<Option<f32>>,
    pub sunrise: Vec<Option<NaiveDateTime>>,
    pub sunset: Vec<Option<NaiveDateTime>>,
}

impl RawDailySeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn validate(&self) -> Result<(), SeriesError> {
        let expected = self.time.len();
        let fields = [
            ("weather_code", self.weather_code.len()),
            ("temperature_2m_max", self.temperature_max.len()),
            ("temperature_2m_min", self.temperature_min.len()),
            (
                "precipitation_probability_max",
                self.precipitation_probability_max.len(),
            ),
            ("precipitation_sum", self.precipitation_sum.len()),
            ("uv_index_max", self.uv_index_max.len()),
            ("sunrise", self.sunrise.len()),
            ("sunset", self.sunset.len()),
        ];
        check_alignment("daily", expected, &fields)
    }
}

/// One ingested forecast document: hourly and daily series for a location.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastBundle {
    pub timezone: Option<String>,
    pub hourly: RawHourlySeries,
    pub daily: RawDailySeries,
}

impl ForecastBundle {
    pub fn validate(&self) -> Result<(), SeriesError> {
        self.hourly.validate()?;
        self.daily.validate()
    }
}

fn check_alignment(
    series: &'static str,
    expected: usize,
    fields: &[(&'static str, usize)],
) -> Result<(), SeriesError> {
    for &(field, actual) in fields {
        if actual != 0 && actual != expected {
            return Err(SeriesError::Misaligned {
                series,
                field,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Sample at `idx`, treating a missing array or a `null` entry alike.
#[must_use]
pub fn sample(values: &[Option<f32>], idx: usize) -> Option<f32> {
    values.get(idx).copied().flatten().filter(|v| v.is_finite())
}

/// Parses an hourly timestamp into local wall-clock time.
///
/// Offset-qualified timestamps keep the wall time at their own offset rather
/// than being shifted to UTC.
#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
