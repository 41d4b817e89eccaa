#![allow(clippy::cast_possible_truncation)]

use super::{
    PrecipitationUnit, PressureUnit, RawHourlySeries, TemperatureUnit, UnitPreferences,
    WindSpeedUnit, convert, format_canonical, sample,
};

/// Every hourly signal the view layer can plot or annotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourlyMetric {
    Temperature,
    DewPoint,
    PrecipitationAmount,
    PrecipitationProbability,
    WindSpeed,
    WindGusts,
    UvIndex,
    Visibility,
    CloudCover,
    SurfacePressure,
}

impl HourlyMetric {
    pub const ALL: [Self; 10] = [
        Self::Temperature,
        Self::DewPoint,
        Self::PrecipitationAmount,
        Self::PrecipitationProbability,
        Self::WindSpeed,
        Self::WindGusts,
        Self::UvIndex,
        Self::Visibility,
        Self::CloudCover,
        Self::SurfacePressure,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temp",
            Self::DewPoint => "Dew",
            Self::PrecipitationAmount => "Precip",
            Self::PrecipitationProbability => "Chance",
            Self::WindSpeed => "Wind",
            Self::WindGusts => "Gust",
            Self::UvIndex => "UV",
            Self::Visibility => "Vis",
            Self::CloudCover => "Cloud",
            Self::SurfacePressure => "Press",
        }
    }

    #[must_use]
    pub fn values(self, series: &RawHourlySeries) -> &[Option<f32>] {
        match self {
            Self::Temperature => &series.temperature,
            Self::DewPoint => &series.dew_point,
            Self::PrecipitationAmount => &series.precipitation_amount,
            Self::PrecipitationProbability => &series.precipitation_probability,
            Self::WindSpeed => &series.wind_speed,
            Self::WindGusts => &series.wind_gusts,
            Self::UvIndex => &series.uv_index,
            Self::Visibility => &series.visibility,
            Self::CloudCover => &series.cloud_cover,
            Self::SurfacePressure => &series.surface_pressure,
        }
    }

    #[must_use]
    pub fn sample(self, series: &RawHourlySeries, idx: usize) -> Option<f32> {
        sample(self.values(series), idx)
    }

    /// Formats a raw (metric) sample in the caller's display units.
    #[must_use]
    pub fn format(self, value: f32, units: &UnitPreferences) -> String {
        match self {
            Self::Temperature | Self::DewPoint => format_canonical(
                convert(value, TemperatureUnit::Celsius, units.temperature),
                units.temperature,
            ),
            Self::PrecipitationAmount => format_canonical(
                convert(
                    value.max(0.0),
                    PrecipitationUnit::Millimetres,
                    units.precipitation,
                ),
                units.precipitation,
            ),
            Self::WindSpeed | Self::WindGusts => format_canonical(
                convert(value, WindSpeedUnit::KilometresPerHour, units.wind_speed),
                units.wind_speed,
            ),
            Self::SurfacePressure => format_canonical(
                convert(value, PressureUnit::Hectopascal, units.pressure),
                units.pressure,
            ),
            Self::PrecipitationProbability | Self::CloudCover => {
                format!("{}%", value.clamp(0.0, 100.0).round() as i32)
            }
            Self::UvIndex => format!("{value:.0}"),
            Self::Visibility => format!("{:.0}km", (value / 1000.0).max(0.0)),
        }
    }
}
