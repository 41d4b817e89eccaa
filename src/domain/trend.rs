#![allow(clippy::cast_precision_loss)]

use serde::Serialize;

use crate::domain::weather::{UnitOfMeasure, convert_delta, format_canonical, sample};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    Steady,
}

impl TrendDirection {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Rising => "↑",
            Self::Falling => "↓",
            Self::Steady => "→",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// `None` when there was not enough history to judge.
    pub formatted_delta: Option<String>,
}

impl TrendResult {
    #[must_use]
    pub fn insufficient() -> Self {
        Self {
            direction: TrendDirection::Steady,
            formatted_delta: None,
        }
    }
}

/// Look-back window and noise floor. `dead_band` is in the signal's base
/// (metric) unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPolicy {
    pub min_history: usize,
    pub look_back: usize,
    pub dead_band: f32,
}

impl Default for TrendPolicy {
    fn default() -> Self {
        Self {
            min_history: 3,
            look_back: 3,
            dead_band: 0.5,
        }
    }
}

impl TrendPolicy {
    #[must_use]
    pub fn pressure() -> Self {
        Self {
            dead_band: 1.0,
            ..Self::default()
        }
    }
}

/// Trend of `current` against the mean of the most recent `history`
/// samples. `current` and `history` are in `U`'s base unit; the delta is
/// reported in `display`.
#[must_use]
pub fn compute_trend<U: UnitOfMeasure>(
    current: f32,
    history: &[f32],
    display: U,
) -> TrendResult {
    compute_trend_with(TrendPolicy::default(), current, history, display)
}

#[must_use]
pub fn compute_trend_with<U: UnitOfMeasure>(
    policy: TrendPolicy,
    current: f32,
    history: &[f32],
    display: U,
) -> TrendResult {
    if !current.is_finite() {
        return TrendResult::insufficient();
    }
    let recent = history
        .iter()
        .rev()
        .copied()
        .filter(|v| v.is_finite())
        .take(policy.look_back.max(1))
        .collect::<Vec<_>>();
    if recent.is_empty() || recent.len() < policy.min_history {
        return TrendResult::insufficient();
    }

    let average = recent.iter().sum::<f32>() / recent.len() as f32;
    let delta = current - average;
    let direction = if delta.abs() < policy.dead_band {
        TrendDirection::Steady
    } else if delta > 0.0 {
        TrendDirection::Rising
    } else {
        TrendDirection::Falling
    };

    let magnitude = convert_delta(delta.abs(), U::BASE, display);
    TrendResult {
        direction,
        formatted_delta: Some(format!(
            "{} {}",
            direction.glyph(),
            format_canonical(magnitude, display)
        )),
    }
}

/// Trend at `idx` of a raw hourly series, using the `policy.look_back`
/// hours immediately before it as history.
#[must_use]
pub fn series_trend<U: UnitOfMeasure>(
    values: &[Option<f32>],
    idx: usize,
    policy: TrendPolicy,
    display: U,
) -> TrendResult {
    let Some(current) = sample(values, idx) else {
        return TrendResult::insufficient();
    };
    let start = idx.saturating_sub(policy.look_back);
    let history = (start..idx)
        .filter_map(|i| sample(values, i))
        .collect::<Vec<_>>();
    compute_trend_with(policy, current, &history, display)
}
