#![allow(clippy::cast_possible_truncation)]

use super::{PrecipitationUnit, PressureUnit, TemperatureUnit, WindSpeedUnit};

pub const HPA_TO_INHG: f32 = 0.02953;
pub const KMH_TO_MPH: f32 = 0.621_371;
pub const MM_PER_INCH: f32 = 25.4;

/// A display unit for one physical quantity.
///
/// The metric unit of each quantity is the base: raw series arrive in it and
/// every conversion goes through it. Mixing quantities is a type error.
pub trait UnitOfMeasure: Copy + PartialEq {
    const BASE: Self;

    fn symbol(self) -> &'static str;
    fn canonical_precision(self) -> u8;
    fn to_base(self, value: f32) -> f32;
    fn from_base(self, value: f32) -> f32;
}

impl UnitOfMeasure for TemperatureUnit {
    const BASE: Self = Self::Celsius;

    fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    fn canonical_precision(self) -> u8 {
        0
    }

    fn to_base(self, value: f32) -> f32 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) / 1.8,
        }
    }

    fn from_base(self, value: f32) -> f32 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => value * 1.8 + 32.0,
        }
    }
}

impl UnitOfMeasure for WindSpeedUnit {
    const BASE: Self = Self::KilometresPerHour;

    fn symbol(self) -> &'static str {
        match self {
            Self::KilometresPerHour => "km/h",
            Self::MilesPerHour => "mph",
        }
    }

    fn canonical_precision(self) -> u8 {
        0
    }

    fn to_base(self, value: f32) -> f32 {
        match self {
            Self::KilometresPerHour => value,
            Self::MilesPerHour => value / KMH_TO_MPH,
        }
    }

    fn from_base(self, value: f32) -> f32 {
        match self {
            Self::KilometresPerHour => value,
            Self::MilesPerHour => value * KMH_TO_MPH,
        }
    }
}

impl UnitOfMeasure for PrecipitationUnit {
    const BASE: Self = Self::Millimetres;

    fn symbol(self) -> &'static str {
        match self {
            Self::Millimetres => "mm",
            Self::Inches => "in",
        }
    }

    fn canonical_precision(self) -> u8 {
        match self {
            Self::Millimetres => 1,
            Self::Inches => 2,
        }
    }

    fn to_base(self, value: f32) -> f32 {
        match self {
            Self::Millimetres => value,
            Self::Inches => value * MM_PER_INCH,
        }
    }

    fn from_base(self, value: f32) -> f32 {
        match self {
            Self::Millimetres => value,
            Self::Inches => value / MM_PER_INCH,
        }
    }
}

impl UnitOfMeasure for PressureUnit {
    const BASE: Self = Self::Hectopascal;

    fn symbol(self) -> &'static str {
        match self {
            Self::Hectopascal => "hPa",
            Self::InchesOfMercury => "inHg",
        }
    }

    fn canonical_precision(self) -> u8 {
        match self {
            Self::Hectopascal => 0,
            Self::InchesOfMercury => 2,
        }
    }

    fn to_base(self, value: f32) -> f32 {
        match self {
            Self::Hectopascal => value,
            Self::InchesOfMercury => value / HPA_TO_INHG,
        }
    }

    fn from_base(self, value: f32) -> f32 {
        match self {
            Self::Hectopascal => value,
            Self::InchesOfMercury => value * HPA_TO_INHG,
        }
    }
}

#[must_use]
pub fn convert<U: UnitOfMeasure>(value: f32, from: U, to: U) -> f32 {
    if from == to {
        return value;
    }
    to.from_base(from.to_base(value))
}

/// Converts a difference between two readings, dropping any offset term
/// (a 1 °C rise is a 1.8 °F rise, not 33.8 °F).
#[must_use]
pub fn convert_delta<U: UnitOfMeasure>(delta: f32, from: U, to: U) -> f32 {
    convert(delta, from, to) - convert(0.0, from, to)
}

#[must_use]
pub fn round_to(value: f32, precision: u8) -> f32 {
    let factor = 10f32.powi(i32::from(precision));
    let rounded = (value * factor).round() / factor;
    // keeps -0.4 from printing as "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[must_use]
pub fn format_value<U: UnitOfMeasure>(value: f32, unit: U, precision: u8) -> String {
    let rounded = round_to(value, precision);
    format!(
        "{rounded:.prec$}{}",
        unit.symbol(),
        prec = usize::from(precision)
    )
}

#[must_use]
pub fn format_canonical<U: UnitOfMeasure>(value: f32, unit: U) -> String {
    format_value(value, unit, unit.canonical_precision())
}

#[must_use]
pub fn convert_temp(celsius: f32, unit: TemperatureUnit) -> f32 {
    convert(celsius, TemperatureUnit::Celsius, unit)
}

#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}
