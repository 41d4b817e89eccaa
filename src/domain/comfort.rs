use serde::{Deserialize, Serialize};

pub const COLD_BELOW_C: f32 = 10.0;
pub const HOT_ABOVE_C: f32 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComfortLevel {
    Cold,
    Pleasant,
    Hot,
}

impl ComfortLevel {
    /// `Pleasant` is the neutral level; only the others form bands.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        matches!(self, Self::Pleasant)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Pleasant => "pleasant",
            Self::Hot => "hot",
        }
    }
}

/// Thresholds are Celsius regardless of display units; both boundaries
/// belong to `Pleasant`.
#[must_use]
pub fn classify(temperature_c: f32) -> ComfortLevel {
    if temperature_c < COLD_BELOW_C {
        ComfortLevel::Cold
    } else if temperature_c > HOT_ABOVE_C {
        ComfortLevel::Hot
    } else {
        ComfortLevel::Pleasant
    }
}

/// Missing samples are neutral so a data gap never opens a band.
#[must_use]
pub fn classify_sample(temperature_c: Option<f32>) -> ComfortLevel {
    temperature_c
        .filter(|t| t.is_finite())
        .map_or(ComfortLevel::Pleasant, classify)
}
