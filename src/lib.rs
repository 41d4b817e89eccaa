pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod report;
#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use anyhow::Result;
use app::{
    cache::DayViewCache,
    settings::{ViewSettings, load_view_settings, save_view_settings},
};
use chrono::{Local, NaiveDateTime, Timelike};
use cli::{Cli, OutputArg};
use data::forecast::load_forecast;
use domain::{day_view::DayRequest, window::available_days};

pub fn run(cli: &Cli) -> Result<()> {
    let (settings, settings_path) = load_view_settings(cli, true);
    let bundle = Arc::new(load_forecast(&cli.input)?);
    tracing::info!(
        path = %cli.input.display(),
        hours = bundle.hourly.len(),
        days = bundle.daily.len(),
        "forecast loaded"
    );

    let mut cache = DayViewCache::new(bundle);
    let request = day_request(cli, &settings, current_hour());
    let tabs = day_tabs(&mut cache, &request);
    let view = cache.view(&request);

    if cli.strict_day && view.summary.is_none() && !view.has_hourly_data() {
        anyhow::bail!("day {} is outside the forecast", cli.day);
    }

    let rendered = match cli.output {
        OutputArg::Text => report::render_text(&view, &tabs, &settings.units),
        OutputArg::Json => serde_json::to_string_pretty(&*view)?,
    };
    println!("{rendered}");

    if !cli.no_save
        && let Some(path) = settings_path
        && let Err(err) = save_view_settings(&path, &settings)
    {
        tracing::warn!(path = %path.display(), "saving settings failed: {err:#}");
    }
    Ok(())
}

#[must_use]
pub fn day_request(cli: &Cli, settings: &ViewSettings, now: Option<NaiveDateTime>) -> DayRequest {
    DayRequest {
        day_index: cli.day,
        units: settings.units,
        time_format: settings.time_format,
        window: settings.window,
        strict_day: cli.strict_day,
        anchor: now,
    }
}

/// Labels for every selectable day, built through the same cache the
/// selected view comes from.
fn day_tabs(cache: &mut DayViewCache, selected: &DayRequest) -> Vec<String> {
    let days = available_days(
        cache.bundle().hourly.len(),
        selected.window.leading_historical_hours,
    );
    (0..days)
        .map(|day_index| {
            let view = cache.view(&DayRequest {
                day_index,
                ..*selected
            });
            view.summary
                .as_ref()
                .filter(|summary| !summary.is_fallback)
                .map_or_else(|| format!("+{day_index}d"), |s| s.label.clone())
        })
        .collect()
}

fn current_hour() -> Option<NaiveDateTime> {
    Local::now()
        .naive_local()
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
}
