#![allow(clippy::cast_possible_truncation)]

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    hourly::format_hour,
    weather::{
        PrecipitationUnit, RawDailySeries, TimeFormat, UnitOfMeasure, UnitPreferences, convert,
        convert_temp, round_temp, round_to, sample,
    },
    window::{select_daily_record, select_daily_record_strict},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub label: String,
    pub weather_code: Option<u8>,
    pub temperature_max: Option<i32>,
    pub temperature_min: Option<i32>,
    pub precipitation_probability_max: Option<i32>,
    pub precipitation_sum: Option<f32>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    /// Set when the requested day was out of range and today's record was
    /// substituted.
    pub is_fallback: bool,
}

/// Daily aggregates for `day_index`. With `strict` set an out-of-range day
/// yields `None` instead of today's record.
#[must_use]
pub fn summarize_day(
    daily: &RawDailySeries,
    day_index: usize,
    leading_historical_days: usize,
    units: &UnitPreferences,
    time_format: TimeFormat,
    strict: bool,
) -> Option<DaySummary> {
    let exact = select_daily_record_strict(daily, day_index, leading_historical_days);
    let idx = if strict {
        exact?
    } else {
        select_daily_record(daily, day_index, leading_historical_days)?
    };
    let date = *daily.time.get(idx)?;

    Some(DaySummary {
        date,
        label: day_label(idx.checked_sub(leading_historical_days), date),
        weather_code: daily.weather_code.get(idx).copied().flatten(),
        temperature_max: sample(&daily.temperature_max, idx)
            .map(|t| round_temp(convert_temp(t, units.temperature))),
        temperature_min: sample(&daily.temperature_min, idx)
            .map(|t| round_temp(convert_temp(t, units.temperature))),
        precipitation_probability_max: sample(&daily.precipitation_probability_max, idx)
            .map(|p| p.clamp(0.0, 100.0).round() as i32),
        precipitation_sum: sample(&daily.precipitation_sum, idx).map(|mm| {
            let value = convert(
                mm.max(0.0),
                PrecipitationUnit::Millimetres,
                units.precipitation,
            );
            round_to(value, units.precipitation.canonical_precision())
        }),
        sunrise: daily
            .sunrise
            .get(idx)
            .copied()
            .flatten()
            .map(|t| format_hour_minute(t, time_format)),
        sunset: daily
            .sunset
            .get(idx)
            .copied()
            .flatten()
            .map(|t| format_hour_minute(t, time_format)),
        is_fallback: exact != Some(idx),
    })
}

/// "Today", "Tomorrow", or a short date for anything else.
#[must_use]
pub fn day_label(days_from_today: Option<usize>, date: NaiveDate) -> String {
    match days_from_today {
        Some(0) => "Today".to_string(),
        Some(1) => "Tomorrow".to_string(),
        _ => date.format("%a %d %b").to_string(),
    }
}

fn format_hour_minute(time: chrono::NaiveDateTime, time_format: TimeFormat) -> String {
    match time_format {
        TimeFormat::Hour24 => format_hour(time, time_format),
        TimeFormat::Hour12 => time.format("%-I:%M %p").to_string(),
    }
}
