//! Julian-day Vimshottari periods with birth balance and sub-periods.

use jyoti_core::normalize_360;

use super::data::{
    DAYS_PER_YEAR, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS,
};
use super::types::{DashaLevel, DashaPeriod, DashaSnapshot};
use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN, nakshatra_index};

fn period_days(seq_idx: usize) -> f64 {
    VIMSHOTTARI_YEARS[seq_idx] as f64 * DAYS_PER_YEAR
}

fn total_days() -> f64 {
    VIMSHOTTARI_TOTAL_YEARS as f64 * DAYS_PER_YEAR
}

/// Compute the birth balance from the Moon's sidereal longitude.
///
/// Returns `(nakshatra_index, balance_days, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based index of the Moon's nakshatra
/// - `balance_days`: days left in the first mahadasha
/// - `elapsed_fraction`: fraction of the nakshatra already traversed [0, 1)
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = nakshatra_index(lon);
    let position_in_nak = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let elapsed_fraction = (position_in_nak / NAKSHATRA_SPAN).clamp(0.0, 1.0);
    let entry_days = period_days((nak_idx % 9) as usize);
    let balance_days = entry_days * (1.0 - elapsed_fraction);
    (nak_idx, balance_days, elapsed_fraction)
}

/// Generate the nine mahadashas of one cycle from birth.
///
/// The first period only runs for the birth balance; the rest have their
/// full length.
pub fn vimshottari_mahadashas(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let (nak_idx, balance_days, _frac) = nakshatra_birth_balance(moon_sidereal_lon);
    let start = (nak_idx % 9) as usize;
    let n = VIMSHOTTARI_GRAHAS.len();

    let mut periods = Vec::with_capacity(n);
    let mut cursor = birth_jd;
    for offset in 0..n {
        let seq_idx = (start + offset) % n;
        let duration = if offset == 0 {
            balance_days
        } else {
            period_days(seq_idx)
        };
        let end = cursor + duration;
        periods.push(DashaPeriod {
            graha: VIMSHOTTARI_GRAHAS[seq_idx],
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: (offset as u16) + 1,
            parent_idx: 0,
        });
        cursor = end;
    }
    periods
}

/// Sub-periods of a parent period.
///
/// The child sequence starts at the parent's own graha; each child gets
/// `full_period / 120 years` of the parent's actual duration. The last
/// child's end is snapped to the parent's end.
pub fn vimshottari_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let n = VIMSHOTTARI_GRAHAS.len();
    let start = VIMSHOTTARI_GRAHAS
        .iter()
        .position(|g| *g == parent.graha)
        .unwrap_or(0);
    let parent_duration = parent.duration_days();
    let total = total_days();

    let mut children = Vec::with_capacity(n);
    let mut cursor = parent.start_jd;
    for offset in 0..n {
        let seq_idx = (start + offset) % n;
        let end = cursor + period_days(seq_idx) / total * parent_duration;
        children.push(DashaPeriod {
            graha: VIMSHOTTARI_GRAHAS[seq_idx],
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: (offset as u16) + 1,
            parent_idx,
        });
        cursor = end;
    }
    if let Some(last) = children.last_mut() {
        last.end_jd = parent.end_jd;
    }
    children
}

/// The period containing `jd`, if any.
pub fn active_period(periods: &[DashaPeriod], jd: f64) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(jd))
}

/// Running mahadasha, antardasha, ... down to `max_level` at `query_jd`.
///
/// Empty when `query_jd` is before birth or after the cycle ends.
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
    max_level: DashaLevel,
) -> DashaSnapshot {
    let mut chain = Vec::new();
    let mahadashas = vimshottari_mahadashas(birth_jd, moon_sidereal_lon);
    let mut current = active_period(&mahadashas, query_jd).copied();
    let mut idx = mahadashas
        .iter()
        .position(|p| p.contains(query_jd))
        .unwrap_or(0) as u32;
    while let Some(period) = current {
        chain.push(period);
        if period.level >= max_level {
            break;
        }
        let children = vimshottari_children(&period, idx);
        idx = children
            .iter()
            .position(|p| p.contains(query_jd))
            .unwrap_or(0) as u32;
        current = active_period(&children, query_jd).copied();
    }
    DashaSnapshot {
        query_jd,
        periods: chain,
    }
}

/// Graha ruling the mahadasha at `query_jd`.
pub fn mahadasha_lord_at(birth_jd: f64, moon_sidereal_lon: f64, query_jd: f64) -> Option<Graha> {
    active_period(&vimshottari_mahadashas(birth_jd, moon_sidereal_lon), query_jd).map(|p| p.graha)
}
