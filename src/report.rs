#![allow(clippy::cast_precision_loss)]

use crate::domain::{
    bands::BandRange,
    day_view::DayView,
    hourly::HourlyDataPoint,
    summary::DaySummary,
    weather::{HourlyMetric, UnitPreferences, format_canonical},
};

/// Plain-text rendering of one day view, for terminals and pipes.
#[must_use]
pub fn render_text(view: &DayView, tabs: &[String], units: &UnitPreferences) -> String {
    let mut lines = Vec::new();
    if !tabs.is_empty() {
        lines.push(tab_strip(tabs, view.day_index));
    }
    if let Some(summary) = &view.summary {
        lines.push(summary_line(summary, units));
    }
    lines.push(format!(
        "{} {} {}",
        HourlyMetric::SurfacePressure.label(),
        view.pressure.as_deref().unwrap_or("--"),
        view.pressure_trend
            .formatted_delta
            .as_deref()
            .unwrap_or("--")
    ));

    if view.has_hourly_data() {
        lines.push(String::new());
        lines.push(format!(
            "{:<6} {:>6} {:>8} {:>6}  {}",
            "Time",
            HourlyMetric::Temperature.label(),
            HourlyMetric::PrecipitationAmount.label(),
            HourlyMetric::PrecipitationProbability.label(),
            "Comfort"
        ));
        lines.extend(view.points.iter().map(|point| point_row(point, units)));
        lines.push(String::new());
        lines.push(band_line("Cold", &view.bands.cold_bands, &view.points));
        lines.push(band_line("Hot", &view.bands.hot_bands, &view.points));
    } else {
        lines.push("No hourly data for this day".to_string());
    }
    lines.join("\n")
}

fn tab_strip(tabs: &[String], selected: usize) -> String {
    tabs.iter()
        .enumerate()
        .map(|(idx, label)| {
            if idx == selected {
                format!("[{label}]")
            } else {
                label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn summary_line(summary: &DaySummary, units: &UnitPreferences) -> String {
    let range = match (summary.temperature_min, summary.temperature_max) {
        (Some(min), Some(max)) => format!(
            "{}..{}",
            format_canonical(min as f32, units.temperature),
            format_canonical(max as f32, units.temperature)
        ),
        _ => "--".to_string(),
    };
    let chance = summary
        .precipitation_probability_max
        .map_or_else(|| "--".to_string(), |p| format!("{p}%"));
    let sun = match (&summary.sunrise, &summary.sunset) {
        (Some(rise), Some(set)) => format!("  sun {rise}-{set}"),
        _ => String::new(),
    };
    let fallback = if summary.is_fallback {
        "  (requested day unavailable)"
    } else {
        ""
    };
    format!(
        "{} {}  {range}  precip {chance}{sun}{fallback}",
        summary.label,
        summary.date.format("%Y-%m-%d")
    )
}

fn point_row(point: &HourlyDataPoint, units: &UnitPreferences) -> String {
    let temp = point.temperature.map_or_else(
        || "--".to_string(),
        |t| format_canonical(t as f32, units.temperature),
    );
    let precip = point.precipitation.map_or_else(
        || "--".to_string(),
        |p| format_canonical(p, units.precipitation),
    );
    let chance = point
        .precipitation_probability
        .map_or_else(|| "--".to_string(), |p| format!("{p}%"));
    format!(
        "{:<6} {temp:>6} {precip:>8} {chance:>6}  {}",
        point.display_time,
        point.comfort_level.label()
    )
}

fn band_line(label: &str, bands: &[BandRange], points: &[HourlyDataPoint]) -> String {
    if bands.is_empty() {
        return format!("{label}: none");
    }
    let spans = bands
        .iter()
        .filter_map(|band| {
            let start = points.get(band.start_index)?;
            let end = points.get(band.end_index)?;
            Some(if band.len() == 1 {
                start.display_time.clone()
            } else {
                format!("{}-{}", start.display_time, end.display_time)
            })
        })
        .collect::<Vec<_>>();
    format!("{label}: {}", spans.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::day_view::{DayRequest, build_day_view};
    use crate::test_support::forecast_bundle;

    #[test]
    fn renders_bands_as_time_spans() {
        let bundle = forecast_bundle(48, 2, |idx| match idx {
            6..=10 => 4.0,
            15 => 30.0,
            _ => 18.0,
        });
        let view = build_day_view(&bundle, &DayRequest::default());
        let text = render_text(&view, &[], &UnitPreferences::metric());

        assert!(text.contains("Cold: 06:00-10:00"));
        assert!(text.contains("Hot: 15:00"));
        assert!(text.contains("Press 1013hPa --"));
        assert!(text.starts_with("Today 2026-02-12  1°C..8°C  precip 35%"));
    }

    #[test]
    fn empty_day_says_so() {
        let bundle = forecast_bundle(24, 2, |_| 18.0);
        let view = build_day_view(
            &bundle,
            &DayRequest {
                day_index: 1,
                ..DayRequest::default()
            },
        );
        let text = render_text(&view, &[], &UnitPreferences::metric());
        assert!(text.contains("No hourly data for this day"));
        assert!(!text.contains("Cold:"));
    }

    #[test]
    fn selected_tab_is_bracketed() {
        let tabs = vec!["Today".to_string(), "Tomorrow".to_string()];
        assert_eq!(tab_strip(&tabs, 1), "Today  [Tomorrow]");
    }
}
