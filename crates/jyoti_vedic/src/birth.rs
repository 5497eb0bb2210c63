//! Birth context and natal chart.
//!
//! [`BirthContext`] is computed once from the birth details and then passed
//! explicitly to every downstream derivation (dasha, chart, milan).

use jyoti_core::{Engine, Ephemeris, GeoLocation, normalize_360};
use jyoti_time::Instant;
use tracing::debug;

use crate::dasha::{DashaPeriod, DashaSegment, vimshottari_mahadashas, vimshottari_timeline};
use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha, GrahaPosition, graha_position};
use crate::lagna::{LagnaInfo, lagna};
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{RashiInfo, rashi_from_longitude};
use crate::transit::house_from_signs;

/// Values derived once from birth date, time and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthContext {
    pub instant: Instant,
    /// UT Julian Date of birth.
    pub jd: f64,
    pub location: GeoLocation,
    /// Local calendar year of birth.
    pub birth_year: i32,
    pub moon: GrahaPosition,
    pub moon_nakshatra: NakshatraInfo,
    pub lagna: LagnaInfo,
}

impl BirthContext {
    /// Convert the instant, then resolve the Moon and the ascendant.
    #[tracing::instrument(skip(engine))]
    pub fn derive<E: Ephemeris>(
        engine: &Engine<E>,
        instant: Instant,
        location: GeoLocation,
    ) -> Result<Self, VedicError> {
        let jd = engine.julian_day(&instant)?;
        let moon = graha_position(engine, jd, Graha::Chandra)?;
        let moon_nakshatra = nakshatra_from_longitude(moon.longitude_deg);
        let lagna = lagna(engine, jd, &location)?;
        debug!(
            jd,
            moon = moon.longitude_deg,
            nakshatra = %moon_nakshatra.nakshatra,
            lagna = %lagna.rashi.rashi,
            "birth context"
        );
        Ok(Self {
            instant,
            jd,
            location,
            birth_year: instant.date().year(),
            moon,
            moon_nakshatra,
            lagna,
        })
    }

    /// Whole-year Vimshottari timeline from the birth year.
    pub fn dasha_timeline(&self, limit: usize) -> Vec<DashaSegment> {
        vimshottari_timeline(self.moon_nakshatra.nakshatra_index, self.birth_year, limit)
    }

    /// Mahadashas on the Julian-day axis, first one shortened by the balance.
    pub fn mahadashas(&self) -> Vec<DashaPeriod> {
        vimshottari_mahadashas(self.jd, self.moon.longitude_deg)
    }
}

/// One graha's place in the natal chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPlacement {
    pub graha: Graha,
    /// Sidereal longitude, [0, 360).
    pub longitude_deg: f64,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
    /// House counted sign-by-sign from the lagna sign, 1..=12.
    pub house: u8,
    /// House from the configured cusps (bhava), 1..=12.
    pub bhava: u8,
    pub retrograde: bool,
}

/// All nine grahas placed at birth.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalChart {
    pub lagna: LagnaInfo,
    /// Sidereal cusps of the configured house system; index 0 is house 1.
    pub cusps: [f64; 12],
    pub placements: Vec<GrahaPlacement>,
}

impl NatalChart {
    pub fn placement(&self, graha: Graha) -> Option<&GrahaPlacement> {
        self.placements.iter().find(|p| p.graha == graha)
    }
}

/// House (1..=12) containing `lon` given twelve cusps in zodiacal order.
///
/// House `i` runs from cusp `i` up to cusp `i + 1`, wrapping at 360.
pub fn bhava_of_longitude(cusps: &[f64; 12], lon: f64) -> u8 {
    let lon = normalize_360(lon);
    for i in 0..12 {
        let start = cusps[i];
        let width = normalize_360(cusps[(i + 1) % 12] - start);
        if normalize_360(lon - start) < width {
            return i as u8 + 1;
        }
    }
    1
}

/// Place every graha at the birth instant.
#[tracing::instrument(skip(engine, ctx))]
pub fn natal_chart<E: Ephemeris>(
    engine: &Engine<E>,
    ctx: &BirthContext,
) -> Result<NatalChart, VedicError> {
    let cusps = engine.house_cusps_sidereal(ctx.jd, &ctx.location)?;
    let asc_index = ctx.lagna.rashi_index();
    let placements = ALL_GRAHAS
        .iter()
        .map(|&graha| {
            let pos = graha_position(engine, ctx.jd, graha)?;
            let rashi = rashi_from_longitude(pos.longitude_deg);
            Ok(GrahaPlacement {
                graha,
                longitude_deg: pos.longitude_deg,
                rashi,
                nakshatra: nakshatra_from_longitude(pos.longitude_deg),
                house: house_from_signs(rashi.rashi_index, asc_index),
                bhava: bhava_of_longitude(&cusps, pos.longitude_deg),
                retrograde: pos.retrograde,
            })
        })
        .collect::<Result<Vec<_>, VedicError>>()?;
    Ok(NatalChart {
        lagna: ctx.lagna,
        cusps,
        placements,
    })
}
