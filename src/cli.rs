#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::weather::{
    PrecipitationUnit, PressureUnit, TemperatureUnit, TimeFormat, UnitPreferences, WindSpeedUnit,
};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TemperatureArg {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum WindArg {
    Kmh,
    Mph,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PrecipitationArg {
    Mm,
    Inch,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PressureArg {
    Hpa,
    Inhg,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TimeFormatArg {
    #[value(name = "12h")]
    Hour12,
    #[value(name = "24h")]
    Hour24,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputArg {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-dayview",
    version,
    about = "Hourly view model for one forecast day"
)]
pub struct Cli {
    /// Open-Meteo style forecast JSON
    pub input: PathBuf,

    /// Day to show (0 = today)
    #[arg(long, default_value_t = 0)]
    pub day: usize,

    /// Unit system preset
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Temperature unit override
    #[arg(long, value_enum)]
    pub temperature_unit: Option<TemperatureArg>,

    /// Wind speed unit override
    #[arg(long, value_enum)]
    pub wind_unit: Option<WindArg>,

    /// Precipitation unit override
    #[arg(long, value_enum)]
    pub precipitation_unit: Option<PrecipitationArg>,

    /// Pressure unit override
    #[arg(long, value_enum)]
    pub pressure_unit: Option<PressureArg>,

    /// Clock style for hour labels
    #[arg(long, value_enum)]
    pub time_format: Option<TimeFormatArg>,

    /// Hours of past data before today in the hourly arrays
    #[arg(long)]
    pub leading_hours: Option<usize>,

    /// Days of past data before today in the daily arrays
    #[arg(long)]
    pub leading_days: Option<usize>,

    /// Report an out-of-range day instead of falling back to today
    #[arg(long)]
    pub strict_day: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputArg::Text)]
    pub output: OutputArg,

    /// Do not persist the effective settings
    #[arg(long)]
    pub no_save: bool,
}

impl Cli {
    /// Applies unit flags on top of `base`: the preset first, then the
    /// per-quantity overrides.
    #[must_use]
    pub fn apply_units(&self, base: UnitPreferences) -> UnitPreferences {
        let mut units = match self.units {
            Some(UnitsArg::Metric) => UnitPreferences::metric(),
            Some(UnitsArg::Imperial) => UnitPreferences::imperial(),
            None => base,
        };
        if let Some(arg) = self.temperature_unit {
            units.temperature = match arg {
                TemperatureArg::Celsius => TemperatureUnit::Celsius,
                TemperatureArg::Fahrenheit => TemperatureUnit::Fahrenheit,
            };
        }
        if let Some(arg) = self.wind_unit {
            units.wind_speed = match arg {
                WindArg::Kmh => WindSpeedUnit::KilometresPerHour,
                WindArg::Mph => WindSpeedUnit::MilesPerHour,
            };
        }
        if let Some(arg) = self.precipitation_unit {
            units.precipitation = match arg {
                PrecipitationArg::Mm => PrecipitationUnit::Millimetres,
                PrecipitationArg::Inch => PrecipitationUnit::Inches,
            };
        }
        if let Some(arg) = self.pressure_unit {
            units.pressure = match arg {
                PressureArg::Hpa => PressureUnit::Hectopascal,
                PressureArg::Inhg => PressureUnit::InchesOfMercury,
            };
        }
        units
    }

    #[must_use]
    pub fn time_format_override(&self) -> Option<TimeFormat> {
        self.time_format.map(|arg| match arg {
            TimeFormatArg::Hour12 => TimeFormat::Hour12,
            TimeFormatArg::Hour24 => TimeFormat::Hour24,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, OutputArg, TimeFormatArg, UnitsArg};
    use crate::domain::weather::{
        PressureUnit, TemperatureUnit, TimeFormat, UnitPreferences, WindSpeedUnit,
    };

    #[test]
    fn parses_defaults() {
        let cli = Cli::parse_from(["weather-dayview", "forecast.json"]);
        assert_eq!(cli.day, 0);
        assert_eq!(cli.units, None);
        assert_eq!(cli.output, OutputArg::Text);
        assert!(!cli.strict_day);
        assert_eq!(cli.time_format_override(), None);
    }

    #[test]
    fn parses_time_format_names() {
        let cli = Cli::parse_from(["weather-dayview", "f.json", "--time-format", "12h"]);
        assert_eq!(cli.time_format, Some(TimeFormatArg::Hour12));
        assert_eq!(cli.time_format_override(), Some(TimeFormat::Hour12));
    }

    #[test]
    fn preset_then_overrides() {
        let cli = Cli::parse_from([
            "weather-dayview",
            "f.json",
            "--units",
            "imperial",
            "--pressure-unit",
            "hpa",
        ]);
        assert_eq!(cli.units, Some(UnitsArg::Imperial));
        let units = cli.apply_units(UnitPreferences::metric());
        assert_eq!(units.temperature, TemperatureUnit::Fahrenheit);
        assert_eq!(units.wind_speed, WindSpeedUnit::MilesPerHour);
        assert_eq!(units.pressure, PressureUnit::Hectopascal);
    }

    #[test]
    fn no_unit_flags_keep_base() {
        let cli = Cli::parse_from(["weather-dayview", "f.json"]);
        let base = UnitPreferences::imperial();
        assert_eq!(cli.apply_units(base), base);
    }

    #[test]
    fn rejects_unknown_unit_preset() {
        let err = Cli::try_parse_from(["weather-dayview", "f.json", "--units", "kelvin"])
            .expect_err("expected invalid value");
        assert!(err.to_string().contains("--units"));
    }
}
