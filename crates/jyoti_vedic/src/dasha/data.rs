//! Fixed Vimshottari sequence and period table.

use crate::graha::Graha;
use crate::nakshatra::NAKSHATRA_COUNT;

/// Year length used to turn dasha years into days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Vimshottari graha sequence, starting from Ketu (lord of Ashwini).
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari periods in years, aligned with [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [u32; 9] = [7, 20, 6, 10, 7, 18, 16, 19, 17];

/// Length of the full cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: u32 = 120;

/// Position in the sequence of the lord of a nakshatra.
///
/// Every 9th nakshatra shares a lord, so this is `nakshatra_index mod 9`.
/// Returns `None` for an index outside 0..=26.
pub const fn vimshottari_start_index(nakshatra_index: u8) -> Option<usize> {
    if nakshatra_index < NAKSHATRA_COUNT {
        Some((nakshatra_index % 9) as usize)
    } else {
        None
    }
}

/// Dasha lord of a nakshatra.
pub const fn vimshottari_lord(nakshatra_index: u8) -> Option<Graha> {
    match vimshottari_start_index(nakshatra_index) {
        Some(i) => Some(VIMSHOTTARI_GRAHAS[i]),
        None => None,
    }
}

/// Mahadasha length of a graha in years.
pub fn vimshottari_years(graha: Graha) -> u32 {
    VIMSHOTTARI_GRAHAS
        .iter()
        .position(|g| *g == graha)
        .map_or(0, |i| VIMSHOTTARI_YEARS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_is_120_years() {
        assert_eq!(VIMSHOTTARI_YEARS.iter().sum::<u32>(), VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn each_graha_appears_once() {
        for g in crate::graha::ALL_GRAHAS {
            assert_eq!(VIMSHOTTARI_GRAHAS.iter().filter(|x| **x == g).count(), 1);
        }
    }

    #[test]
    fn lords_of_known_nakshatras() {
        assert_eq!(vimshottari_lord(0), Some(Graha::Ketu)); // Ashwini
        assert_eq!(vimshottari_lord(3), Some(Graha::Chandra)); // Rohini
        assert_eq!(vimshottari_lord(9), Some(Graha::Ketu)); // Magha
        assert_eq!(vimshottari_lord(26), Some(Graha::Buddh)); // Revati
        assert_eq!(vimshottari_lord(27), None);
    }

    #[test]
    fn years_lookup() {
        assert_eq!(vimshottari_years(Graha::Shukra), 20);
        assert_eq!(vimshottari_years(Graha::Buddh), 17);
    }
}
