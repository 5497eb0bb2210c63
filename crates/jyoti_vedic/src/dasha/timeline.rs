//! Whole-year Vimshottari timeline.

use super::data::{VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS, vimshottari_start_index};
use super::types::DashaSegment;

/// Segments emitted when the caller does not choose a limit.
pub const DEFAULT_DASHA_SEGMENTS: usize = 6;

/// Segments in one full 120-year cycle.
pub const FULL_CYCLE_SEGMENTS: usize = 9;

/// Build a Vimshottari timeline from the Moon's nakshatra index.
///
/// The sequence is rotated to start at the nakshatra's lord and walked
/// cyclically from `birth_year`, emitting `limit` contiguous segments with
/// full period lengths. Indices past Revati (26) yield an empty timeline.
pub fn vimshottari_timeline(nakshatra_index: u8, birth_year: i32, limit: usize) -> Vec<DashaSegment> {
    let Some(start) = vimshottari_start_index(nakshatra_index) else {
        return Vec::new();
    };
    let n = VIMSHOTTARI_GRAHAS.len();
    let mut year = birth_year;
    (0..limit)
        .map(|i| {
            let idx = (start + i) % n;
            let end = year + VIMSHOTTARI_YEARS[idx] as i32;
            let segment = DashaSegment {
                graha: VIMSHOTTARI_GRAHAS[idx],
                start_year: year,
                end_year: end,
            };
            year = end;
            segment
        })
        .collect()
}
