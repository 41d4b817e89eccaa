use proptest::prelude::*;
use weather_dayview::domain::{
    trend::{TrendDirection, compute_trend},
    weather::{
        PrecipitationUnit, PressureUnit, TemperatureUnit, WindSpeedUnit, convert, convert_delta,
        round_to,
    },
};

proptest! {
    #[test]
    fn pressure_roundtrip_stays_within_half_hpa(hpa in 900.0f32..1100.0) {
        let inhg = round_to(
            convert(hpa, PressureUnit::Hectopascal, PressureUnit::InchesOfMercury),
            2,
        );
        let back = convert(inhg, PressureUnit::InchesOfMercury, PressureUnit::Hectopascal);
        prop_assert!((back - hpa).abs() <= 0.5, "{hpa} -> {inhg} -> {back}");
    }

    #[test]
    fn identity_conversion_is_exact(value in -1000.0f32..1000.0) {
        prop_assert_eq!(convert(value, TemperatureUnit::Celsius, TemperatureUnit::Celsius), value);
        prop_assert_eq!(convert(value, WindSpeedUnit::MilesPerHour, WindSpeedUnit::MilesPerHour), value);
        prop_assert_eq!(convert(value, PrecipitationUnit::Inches, PrecipitationUnit::Inches), value);
    }

    #[test]
    fn temperature_delta_scales_without_offset(delta in -30.0f32..30.0) {
        let converted = convert_delta(delta, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        prop_assert!((converted - delta * 1.8).abs() < 1e-3);
    }

    #[test]
    fn flat_history_is_steady(level in 950.0f32..1050.0, wobble in -0.4f32..0.4) {
        let result = compute_trend(level + wobble, &[level, level, level], PressureUnit::Hectopascal);
        prop_assert_eq!(result.direction, TrendDirection::Steady);
    }

    #[test]
    fn trend_direction_follows_sign(level in 950.0f32..1050.0, change in 1.0f32..20.0) {
        let history = [level, level, level];
        let up = compute_trend(level + change, &history, PressureUnit::Hectopascal);
        let down = compute_trend(level - change, &history, PressureUnit::Hectopascal);
        prop_assert_eq!(up.direction, TrendDirection::Rising);
        prop_assert_eq!(down.direction, TrendDirection::Falling);
    }
}
