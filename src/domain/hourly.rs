#![allow(clippy::cast_possible_truncation)]

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::domain::{
    comfort::{ComfortLevel, classify_sample},
    weather::{
        HourlyMetric, PrecipitationUnit, RawHourlySeries, TimeFormat, UnitOfMeasure,
        UnitPreferences, convert, convert_temp, round_temp, round_to,
    },
    window::{HourWindow, WindowConfig, select_hourly_window},
};

/// Local hours in `[DAYTIME_START_HOUR, DAYTIME_END_HOUR)` count as daytime.
/// A fixed approximation; true sunrise/sunset is not consulted.
pub const DAYTIME_START_HOUR: u32 = 6;
pub const DAYTIME_END_HOUR: u32 = 18;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyDataPoint {
    pub time: NaiveDateTime,
    pub display_time: String,
    /// Display units, rounded to whole degrees.
    pub temperature: Option<i32>,
    /// Display units, rounded to the unit's canonical precision.
    pub precipitation: Option<f32>,
    pub precipitation_probability: Option<i32>,
    pub weather_code: Option<u8>,
    pub is_daytime: bool,
    /// Always derived from the Celsius sample, whatever the display units.
    pub comfort_level: ComfortLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HourlyViewModelBuilder {
    pub window: WindowConfig,
}

impl HourlyViewModelBuilder {
    #[must_use]
    pub fn new(window: WindowConfig) -> Self {
        Self { window }
    }

    #[must_use]
    pub fn window_for(&self, series: &RawHourlySeries, day_index: usize) -> HourWindow {
        select_hourly_window(series, day_index, self.window.leading_historical_hours)
    }

    /// Presentation records for `day_index` (0 = today).
    ///
    /// An empty result means the series has no hours for that day; callers
    /// should show a "no data" state instead of assuming 24 entries.
    #[must_use]
    pub fn build(
        &self,
        series: &RawHourlySeries,
        day_index: usize,
        units: &UnitPreferences,
        time_format: TimeFormat,
    ) -> Vec<HourlyDataPoint> {
        let window = self.window_for(series, day_index);
        tracing::debug!(
            day_index,
            start = window.start_index,
            end = window.end_index,
            "building hourly view"
        );
        build_window(series, window, units, time_format)
    }
}

#[must_use]
pub fn build_hourly_view(
    series: &RawHourlySeries,
    day_index: usize,
    units: &UnitPreferences,
    time_format: TimeFormat,
    window: WindowConfig,
) -> Vec<HourlyDataPoint> {
    HourlyViewModelBuilder::new(window).build(series, day_index, units, time_format)
}

#[must_use]
pub fn build_window(
    series: &RawHourlySeries,
    window: HourWindow,
    units: &UnitPreferences,
    time_format: TimeFormat,
) -> Vec<HourlyDataPoint> {
    window
        .range()
        .filter_map(|idx| build_point(series, idx, units, time_format))
        .collect()
}

fn build_point(
    series: &RawHourlySeries,
    idx: usize,
    units: &UnitPreferences,
    time_format: TimeFormat,
) -> Option<HourlyDataPoint> {
    let time = *series.time.get(idx)?;
    let temperature_c = HourlyMetric::Temperature.sample(series, idx);

    Some(HourlyDataPoint {
        time,
        display_time: format_hour(time, time_format),
        temperature: temperature_c.map(|t| round_temp(convert_temp(t, units.temperature))),
        precipitation: HourlyMetric::PrecipitationAmount
            .sample(series, idx)
            .map(|mm| display_precipitation(mm, units.precipitation)),
        precipitation_probability: HourlyMetric::PrecipitationProbability
            .sample(series, idx)
            .map(|p| p.clamp(0.0, 100.0).round() as i32),
        weather_code: series.weather_code_at(idx),
        is_daytime: is_daytime_hour(time.hour()),
        comfort_level: classify_sample(temperature_c),
    })
}

fn display_precipitation(mm: f32, unit: PrecipitationUnit) -> f32 {
    let value = convert(mm.max(0.0), PrecipitationUnit::Millimetres, unit);
    round_to(value, unit.canonical_precision())
}

#[must_use]
pub fn format_hour(time: NaiveDateTime, time_format: TimeFormat) -> String {
    match time_format {
        TimeFormat::Hour24 => time.format("%H:%M").to_string(),
        TimeFormat::Hour12 => time.format("%-I %p").to_string(),
    }
}

#[must_use]
pub fn is_daytime_hour(hour: u32) -> bool {
    (DAYTIME_START_HOUR..DAYTIME_END_HOUR).contains(&hour)
}

#[must_use]
pub fn comfort_levels(points: &[HourlyDataPoint]) -> Vec<ComfortLevel> {
    points.iter().map(|point| point.comfort_level).collect()
}
