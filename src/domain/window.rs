use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::domain::weather::{RawDailySeries, RawHourlySeries};

pub const HOURS_PER_DAY: usize = 24;

/// How many entries precede "today" in series that also carry past data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WindowConfig {
    pub leading_historical_hours: usize,
    pub leading_historical_days: usize,
}

/// Half-open range of hourly-array indices for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HourWindow {
    pub start_index: usize,
    pub end_index: usize,
}

impl HourWindow {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == HOURS_PER_DAY
    }
}

/// Resolves `day_index` (0 = today) to its hourly slice.
///
/// A window past the end of the series comes back truncated or empty; an
/// empty window means "no data for this day", not a fault.
#[must_use]
pub fn select_hourly_window(
    series: &RawHourlySeries,
    day_index: usize,
    leading_historical_hours: usize,
) -> HourWindow {
    window_for_len(series.len(), day_index, leading_historical_hours)
}

#[must_use]
pub fn window_for_len(len: usize, day_index: usize, leading_historical_hours: usize) -> HourWindow {
    let start = day_index
        .saturating_mul(HOURS_PER_DAY)
        .saturating_add(leading_historical_hours);
    let end = start.saturating_add(HOURS_PER_DAY);
    let window = HourWindow {
        start_index: start.min(len),
        end_index: end.min(len),
    };
    if !window.is_complete() {
        tracing::debug!(
            day_index,
            requested_start = start,
            len,
            hours = window.len(),
            "hourly window truncated"
        );
    }
    window
}

/// Resolves `day_index` to a daily-array index, falling back to today's
/// record when the day is past the end of the series.
///
/// The fallback favours always rendering something for the selected tab and
/// hides genuinely out-of-range selections; use
/// [`select_daily_record_strict`] to see them. Returns `None` only for an
/// empty series.
#[must_use]
pub fn select_daily_record(
    series: &RawDailySeries,
    day_index: usize,
    leading_historical_days: usize,
) -> Option<usize> {
    if let Some(idx) = select_daily_record_strict(series, day_index, leading_historical_days) {
        return Some(idx);
    }
    let last = series.len().checked_sub(1)?;
    let fallback = leading_historical_days.min(last);
    tracing::warn!(
        day_index,
        leading_historical_days,
        len = series.len(),
        fallback,
        "daily record out of range, falling back to today"
    );
    Some(fallback)
}

#[must_use]
pub fn select_daily_record_strict(
    series: &RawDailySeries,
    day_index: usize,
    leading_historical_days: usize,
) -> Option<usize> {
    let idx = leading_historical_days.checked_add(day_index)?;
    (idx < series.len()).then_some(idx)
}

/// Number of selectable days (today included) with at least one hour of data.
#[must_use]
pub fn available_days(hourly_len: usize, leading_historical_hours: usize) -> usize {
    hourly_len
        .saturating_sub(leading_historical_hours)
        .div_ceil(HOURS_PER_DAY)
}
