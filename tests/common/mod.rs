#![allow(clippy::cast_precision_loss)]
#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use weather_dayview::{data::forecast::parse_forecast, domain::weather::ForecastBundle};

pub fn base_time() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2026-02-12T00:00", "%Y-%m-%dT%H:%M").expect("valid fixed time")
}

pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid fixed date")
}

/// Open-Meteo style document with `hours` hourly entries and `days` daily
/// entries, both starting at 2026-02-12 00:00 local time.
pub fn forecast_payload(
    hours: usize,
    days: usize,
    temperature: impl Fn(usize) -> f32,
    pressure: impl Fn(usize) -> f32,
) -> serde_json::Value {
    let times = (0..hours)
        .map(|idx| {
            (base_time() + Duration::hours(idx as i64))
                .format("%Y-%m-%dT%H:%M")
                .to_string()
        })
        .collect::<Vec<_>>();
    let dates = (0..days)
        .map(|idx| {
            (base_date() + Duration::days(idx as i64))
                .format("%Y-%m-%d")
                .to_string()
        })
        .collect::<Vec<_>>();

    serde_json::json!({
        "latitude": 59.33,
        "longitude": 18.07,
        "timezone": "Europe/Stockholm",
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "precipitation": "mm",
            "surface_pressure": "hPa"
        },
        "daily_units": {
            "time": "iso8601",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C",
            "precipitation_sum": "mm"
        },
        "hourly": {
            "time": times,
            "temperature_2m": (0..hours).map(&temperature).collect::<Vec<_>>(),
            "precipitation": vec![0.2; hours],
            "precipitation_probability": vec![30; hours],
            "wind_speed_10m": vec![14.0; hours],
            "surface_pressure": (0..hours).map(&pressure).collect::<Vec<_>>(),
            "weather_code": vec![3; hours]
        },
        "daily": {
            "time": dates,
            "weather_code": vec![61; days],
            "temperature_2m_max": vec![12.0; days],
            "temperature_2m_min": vec![4.0; days],
            "precipitation_probability_max": vec![60; days],
            "precipitation_sum": vec![2.4; days],
            "sunrise": dates.iter().map(|d| format!("{d}T07:40")).collect::<Vec<_>>(),
            "sunset": dates.iter().map(|d| format!("{d}T16:35")).collect::<Vec<_>>()
        }
    })
}

pub fn fixture_bundle(
    hours: usize,
    days: usize,
    temperature: impl Fn(usize) -> f32,
) -> ForecastBundle {
    let payload = forecast_payload(hours, days, temperature, |_| 1013.0);
    parse_forecast(&payload.to_string()).expect("fixture payload parses")
}
