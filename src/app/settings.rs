use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    cli::Cli,
    domain::{
        weather::{TimeFormat, UnitPreferences},
        window::WindowConfig,
    },
};

/// Display preferences for a run.
///
/// Only `units` and `time_format` are persisted. `window` describes the
/// layout of one input file, so it comes from the CLI on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewSettings {
    pub units: UnitPreferences,
    pub time_format: TimeFormat,
    #[serde(skip)]
    pub window: WindowConfig,
}

impl ViewSettings {
    /// Layers CLI flags over `self`; flags that were not given keep the
    /// saved value.
    #[must_use]
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        self.units = cli.apply_units(self.units);
        if let Some(time_format) = cli.time_format_override() {
            self.time_format = time_format;
        }
        if let Some(hours) = cli.leading_hours {
            self.window.leading_historical_hours = hours;
        }
        if let Some(days) = cli.leading_days {
            self.window.leading_historical_days = days;
        }
        self
    }
}

pub fn load_view_settings(cli: &Cli, enable_disk: bool) -> (ViewSettings, Option<PathBuf>) {
    let path = if enable_disk { settings_path() } else { None };
    let settings = load_view_settings_from(cli, path.as_deref());
    (settings, path)
}

/// Reads saved settings from `path` when present and readable, then applies
/// CLI overrides. A corrupt file is ignored rather than fatal.
#[must_use]
pub fn load_view_settings_from(cli: &Cli, path: Option<&Path>) -> ViewSettings {
    let mut settings = ViewSettings::default();
    if let Some(path) = path
        && let Ok(content) = fs::read_to_string(path)
    {
        match serde_json::from_str::<ViewSettings>(&content) {
            Ok(saved) => settings = saved,
            Err(err) => tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings"),
        }
    }
    settings.with_cli_overrides(cli)
}

pub fn save_view_settings(path: &Path, settings: &ViewSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("WEATHER_DAYVIEW_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("weather-dayview")
            .join("settings.json"),
    )
}
