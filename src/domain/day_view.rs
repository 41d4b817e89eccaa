use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::domain::{
    bands::{ComfortBands, segment_bands},
    hourly::{HourlyDataPoint, HourlyViewModelBuilder, comfort_levels},
    summary::{DaySummary, summarize_day},
    trend::{TrendPolicy, TrendResult, series_trend},
    weather::{ForecastBundle, HourlyMetric, TimeFormat, UnitPreferences},
    window::{HourWindow, WindowConfig},
};

/// Everything that determines a [`DayView`]. Equal requests over the same
/// bundle always build equal views, so a request is a valid memo key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DayRequest {
    pub day_index: usize,
    pub units: UnitPreferences,
    pub time_format: TimeFormat,
    pub window: WindowConfig,
    pub strict_day: bool,
    /// Hour the pressure trend is measured at. Outside the selected day (or
    /// unset) the trend is taken at the day's first hour.
    pub anchor: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    pub day_index: usize,
    pub window: HourWindow,
    pub summary: Option<DaySummary>,
    pub points: Vec<HourlyDataPoint>,
    pub bands: ComfortBands,
    /// Surface pressure at the trend hour, in display units.
    pub pressure: Option<String>,
    pub pressure_trend: TrendResult,
}

impl DayView {
    #[must_use]
    pub fn has_hourly_data(&self) -> bool {
        !self.points.is_empty()
    }
}

#[must_use]
pub fn build_day_view(bundle: &ForecastBundle, request: &DayRequest) -> DayView {
    let builder = HourlyViewModelBuilder::new(request.window);
    let window = builder.window_for(&bundle.hourly, request.day_index);
    let points = builder.build(
        &bundle.hourly,
        request.day_index,
        &request.units,
        request.time_format,
    );
    let bands = segment_bands(&comfort_levels(&points));
    let summary = summarize_day(
        &bundle.daily,
        request.day_index,
        request.window.leading_historical_days,
        &request.units,
        request.time_format,
        request.strict_day,
    );
    let anchor = trend_anchor(bundle, window, request.anchor);
    let pressure = anchor
        .and_then(|idx| HourlyMetric::SurfacePressure.sample(&bundle.hourly, idx))
        .map(|hpa| HourlyMetric::SurfacePressure.format(hpa, &request.units));
    let pressure_trend = anchor.map_or_else(TrendResult::insufficient, |idx| {
        series_trend(
            HourlyMetric::SurfacePressure.values(&bundle.hourly),
            idx,
            TrendPolicy::pressure(),
            request.units.pressure,
        )
    });

    DayView {
        day_index: request.day_index,
        window,
        summary,
        points,
        bands,
        pressure,
        pressure_trend,
    }
}

fn trend_anchor(
    bundle: &ForecastBundle,
    window: HourWindow,
    anchor: Option<NaiveDateTime>,
) -> Option<usize> {
    if window.is_empty() {
        return None;
    }
    let times = bundle.hourly.time.get(window.range())?;
    let (first, last) = (*times.first()?, *times.last()?);
    let span = first..last + Duration::hours(1);
    anchor
        .filter(|at| span.contains(at))
        .and_then(|at| {
            times
                .iter()
                .rposition(|t| *t <= at)
                .map(|offset| window.start_index + offset)
        })
        .or(Some(window.start_index))
}
