use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::{
    cli::{Cli, OutputArg},
    domain::weather::{ForecastBundle, RawDailySeries, RawHourlySeries},
};

pub(crate) fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid time fixture")
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid date fixture")
}

/// `len` hours from 2026-02-12T00:00 with `temperature(idx)` in °C and
/// fixed values for every other metric.
pub(crate) fn hourly_series(len: usize, temperature: impl Fn(usize) -> f32) -> RawHourlySeries {
    let start = parse_time("2026-02-12T00:00");
    RawHourlySeries {
        time: (0..len)
            .map(|idx| start + Duration::hours(idx as i64))
            .collect(),
        temperature: (0..len).map(|idx| Some(temperature(idx))).collect(),
        precipitation_amount: vec![Some(0.0); len],
        precipitation_probability: vec![Some(10.0); len],
        wind_speed: vec![Some(12.0); len],
        wind_gusts: vec![Some(20.0); len],
        uv_index: vec![Some(1.0); len],
        visibility: vec![Some(10_000.0); len],
        cloud_cover: vec![Some(40.0); len],
        dew_point: vec![Some(2.0); len],
        surface_pressure: vec![Some(1013.0); len],
        weather_code: vec![Some(3); len],
    }
}

pub(crate) fn daily_series(len: usize) -> RawDailySeries {
    let dates = (0..len)
        .map(|idx| base_date() + Duration::days(idx as i64))
        .collect::<Vec<_>>();
    RawDailySeries {
        weather_code: vec![Some(3); len],
        temperature_max: vec![Some(8.0); len],
        temperature_min: vec![Some(1.0); len],
        precipitation_probability_max: vec![Some(35.0); len],
        precipitation_sum: vec![Some(0.4); len],
        uv_index_max: vec![Some(2.0); len],
        sunrise: dates
            .iter()
            .map(|d| d.and_hms_opt(7, 45, 0))
            .collect(),
        sunset: dates
            .iter()
            .map(|d| d.and_hms_opt(16, 30, 0))
            .collect(),
        time: dates,
    }
}

pub(crate) fn forecast_bundle(
    hours: usize,
    days: usize,
    temperature: impl Fn(usize) -> f32,
) -> ForecastBundle {
    ForecastBundle {
        timezone: Some("Europe/Stockholm".to_string()),
        hourly: hourly_series(hours, temperature),
        daily: daily_series(days),
    }
}

pub(crate) fn test_cli() -> Cli {
    Cli {
        input: "forecast.json".into(),
        day: 0,
        units: None,
        temperature_unit: None,
        wind_unit: None,
        precipitation_unit: None,
        pressure_unit: None,
        time_format: None,
        leading_hours: None,
        leading_days: None,
        strict_day: false,
        output: OutputArg::Text,
        no_save: true,
    }
}
