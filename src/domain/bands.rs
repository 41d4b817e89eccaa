use serde::Serialize;

use crate::domain::comfort::ComfortLevel;

/// Inclusive index range over an hourly view sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BandRange {
    pub start_index: usize,
    pub end_index: usize,
}

#[allow(clippy::len_without_is_empty)]
impl BandRange {
    /// Hours covered; never zero since bounds are inclusive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    #[must_use]
    pub fn contains(&self, idx: usize) -> bool {
        (self.start_index..=self.end_index).contains(&idx)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComfortBand {
    pub start_index: usize,
    pub end_index: usize,
    pub level: ComfortLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ComfortBands {
    pub cold_bands: Vec<BandRange>,
    pub hot_bands: Vec<BandRange>,
}

impl ComfortBands {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cold_bands.is_empty() && self.hot_bands.is_empty()
    }

    /// All bands, cold and hot interleaved, ordered by start index.
    #[must_use]
    pub fn ordered(&self) -> Vec<ComfortBand> {
        let tag = |level: ComfortLevel| {
            move |range: &BandRange| ComfortBand {
                start_index: range.start_index,
                end_index: range.end_index,
                level,
            }
        };
        let mut bands = self
            .cold_bands
            .iter()
            .map(tag(ComfortLevel::Cold))
            .chain(self.hot_bands.iter().map(tag(ComfortLevel::Hot)))
            .collect::<Vec<_>>();
        bands.sort_by_key(|band| band.start_index);
        bands
    }

    fn close(&mut self, level: ComfortLevel, start_index: usize, end_index: usize) {
        let range = BandRange {
            start_index,
            end_index,
        };
        match level {
            ComfortLevel::Cold => self.cold_bands.push(range),
            ComfortLevel::Hot => self.hot_bands.push(range),
            ComfortLevel::Pleasant => {}
        }
    }
}

/// Run-length encodes the non-neutral stretches of `levels`.
///
/// Each maximal run of `Cold` or `Hot` becomes one inclusive range; `Pleasant`
/// hours are gaps. Empty, all-neutral and single-run inputs go through the same
/// scan as everything else.
#[must_use]
pub fn segment_bands(levels: &[ComfortLevel]) -> ComfortBands {
    let mut bands = ComfortBands::default();
    let mut open: Option<(ComfortLevel, usize)> = None;

    for (idx, &level) in levels.iter().enumerate() {
        if let Some((open_level, _)) = open
            && open_level == level
        {
            continue;
        }
        if let Some((open_level, start)) = open.take() {
            bands.close(open_level, start, idx - 1);
        }
        if !level.is_neutral() {
            open = Some((level, idx));
        }
    }

    if let Some((open_level, start)) = open {
        bands.close(open_level, start, levels.len() - 1);
    }
    bands
}
