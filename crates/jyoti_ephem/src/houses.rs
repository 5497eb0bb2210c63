//! Ascendant, MC and house cusps.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), ch. 13 for the
//! ecliptic/horizon intersections; standard semi-arc Placidus.
//! All cusps are tropical, mean equinox of date.

use std::f64::consts::{FRAC_PI_2, PI};

use jyoti_core::{EngineError, GeoLocation, HouseSystem, normalize_360};
use jyoti_time::{gmst_rad, jd_to_centuries, local_sidereal_time_rad};

use crate::precession::mean_obliquity_deg;

/// Placidus is undefined once circumpolar ecliptic degrees appear.
pub const PLACIDUS_MAX_LATITUDE_DEG: f64 = 66.5;

/// Ecliptic longitude (degrees) of the rising point.
///
/// `λ = atan2(cos θ, -(sin θ cos ε + tan φ sin ε))` with θ the local
/// sidereal time, φ the latitude and ε the obliquity, all radians.
pub fn ascendant_deg(lst_rad: f64, latitude_rad: f64, obliquity_rad: f64) -> f64 {
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * obliquity_rad.cos() + latitude_rad.tan() * obliquity_rad.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Ecliptic longitude (degrees) of the upper meridian.
pub fn midheaven_deg(lst_rad: f64, obliquity_rad: f64) -> f64 {
    normalize_360(ecliptic_longitude_of_ra(lst_rad, obliquity_rad))
}

/// Ecliptic longitude of the ecliptic point with right ascension `ra`.
fn ecliptic_longitude_of_ra(ra: f64, eps: f64) -> f64 {
    normalize_360(f64::atan2(ra.sin(), ra.cos() * eps.cos()).to_degrees())
}

/// cusp[i] = start + 30 i.
pub fn equal_cusps(start_deg: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_360(start_deg + 30.0 * i as f64))
}

/// Houses on whole signs, starting at 0° of the sign holding `asc_deg`.
pub fn whole_sign_cusps(asc_deg: f64) -> [f64; 12] {
    equal_cusps((normalize_360(asc_deg) / 30.0).floor() * 30.0)
}

/// Sripati (Porphyry): each quadrant Asc→IC→Desc→MC→Asc trisected.
pub fn sripati_cusps(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let desc = normalize_360(asc_deg + 180.0);
    let ic = normalize_360(mc_deg + 180.0);
    let mut cusps = [0.0; 12];
    for (first, from, to) in [(0, asc_deg, ic), (3, ic, desc), (6, desc, mc_deg), (9, mc_deg, asc_deg)] {
        let arc = normalize_360(to - from);
        cusps[first] = from;
        cusps[first + 1] = normalize_360(from + arc / 3.0);
        cusps[first + 2] = normalize_360(from + 2.0 * arc / 3.0);
    }
    cusps
}

/// Placidus: cusps 11, 12, 2, 3 trisect the semi-arcs of their own degree.
pub fn placidus_cusps(
    asc_deg: f64,
    mc_deg: f64,
    ramc: f64,
    latitude_rad: f64,
    obliquity_rad: f64,
) -> Result<[f64; 12], EngineError> {
    if latitude_rad.to_degrees().abs() > PLACIDUS_MAX_LATITUDE_DEG {
        return Err(EngineError::InvalidLocation(
            "latitude exceeds 66.5 deg limit for Placidus",
        ));
    }
    let cusp = |fraction, above| placidus_cusp(ramc, latitude_rad, obliquity_rad, fraction, above);
    let mut cusps = [0.0; 12];
    cusps[0] = normalize_360(asc_deg);
    cusps[9] = normalize_360(mc_deg);
    cusps[3] = normalize_360(mc_deg + 180.0);
    cusps[6] = normalize_360(asc_deg + 180.0);
    cusps[10] = cusp(1.0 / 3.0, true);
    cusps[11] = cusp(2.0 / 3.0, true);
    cusps[1] = cusp(2.0 / 3.0, false);
    cusps[2] = cusp(1.0 / 3.0, false);
    cusps[4] = normalize_360(cusps[10] + 180.0);
    cusps[5] = normalize_360(cusps[11] + 180.0);
    cusps[7] = normalize_360(cusps[1] + 180.0);
    cusps[8] = normalize_360(cusps[2] + 180.0);
    Ok(cusps)
}

/// One Placidus cusp by fixed-point iteration on right ascension.
///
/// Above the horizon: α = RAMC + f·DSA(δ).
/// Below the horizon: α = RAMC + π − f·NSA(δ), NSA = π − DSA.
fn placidus_cusp(ramc: f64, lat: f64, eps: f64, fraction: f64, above_horizon: bool) -> f64 {
    let offset = |dsa: f64| {
        if above_horizon {
            fraction * dsa
        } else {
            PI - fraction * (PI - dsa)
        }
    };
    let mut ra = ramc + offset(FRAC_PI_2);
    for _ in 0..50 {
        let dec = (eps.tan() * ra.sin()).atan();
        let dsa = (-lat.tan() * dec.tan()).clamp(-1.0, 1.0).acos();
        let next = ramc + offset(dsa);
        let converged = (next - ra).abs() < 1e-12;
        ra = next;
        if converged {
            break;
        }
    }
    ecliptic_longitude_of_ra(ra, eps)
}

/// Tropical house cusps at a UT Julian Date.
pub fn house_cusps_tropical(
    jd: f64,
    location: &GeoLocation,
    system: HouseSystem,
) -> Result<[f64; 12], EngineError> {
    let eps = mean_obliquity_deg(jd_to_centuries(jd)).to_radians();
    let lst = local_sidereal_time_rad(gmst_rad(jd), location.longitude_rad());
    let lat = location.latitude_rad();
    let asc = ascendant_deg(lst, lat, eps);
    let mc = midheaven_deg(lst, eps);
    match system {
        HouseSystem::Equal => Ok(equal_cusps(asc)),
        HouseSystem::WholeSign => Ok(whole_sign_cusps(asc)),
        HouseSystem::Sripati => Ok(sripati_cusps(asc, mc)),
        HouseSystem::Placidus => placidus_cusps(asc, mc, lst, lat, eps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.4393 * PI / 180.0;

    fn forward(from: f64, to: f64) -> f64 {
        normalize_360(to - from)
    }

    #[test]
    fn equator_at_zero_sidereal_time() {
        let asc = ascendant_deg(0.0, 0.0, EPS);
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
        assert!(midheaven_deg(0.0, EPS).abs() < 1e-9);
    }

    #[test]
    fn ascendant_is_on_eastern_horizon() {
        for &lat_deg in &[-50.0_f64, -20.0, 0.0, 25.45, 51.5, 64.0] {
            let lat = lat_deg.to_radians();
            for k in 0..24 {
                let lst = k as f64 * 15.0_f64.to_radians();
                let lam = ascendant_deg(lst, lat, EPS).to_radians();
                let ra = f64::atan2(lam.sin() * EPS.cos(), lam.cos());
                let dec = (EPS.sin() * lam.sin()).asin();
                let ha = lst - ra;
                let alt = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos()).asin();
                assert!(alt.abs() < 1e-9, "lat {lat_deg} lst {k}h: alt = {alt}");
                assert!(ha.sin() < 0.0, "lat {lat_deg} lst {k}h: point is setting");
            }
        }
    }

    #[test]
    fn ascendant_leads_midheaven() {
        for k in 0..24 {
            let lst = k as f64 * 15.0_f64.to_radians();
            let asc = ascendant_deg(lst, 40.0_f64.to_radians(), EPS);
            let mc = midheaven_deg(lst, EPS);
            let arc = forward(mc, asc);
            assert!(arc > 0.0 && arc < 180.0, "arc = {arc}");
        }
    }

    #[test]
    fn equal_and_whole_sign() {
        let eq = equal_cusps(350.0);
        assert_eq!(eq[0], 350.0);
        assert!((eq[1] - 20.0).abs() < 1e-12);
        let ws = whole_sign_cusps(47.3);
        assert_eq!(ws[0], 30.0);
        assert_eq!(ws[11], 0.0);
    }

    #[test]
    fn sripati_trisects_quadrants() {
        let c = sripati_cusps(100.0, 10.0);
        assert!((c[3] - 190.0).abs() < 1e-12);
        assert!((c[6] - 280.0).abs() < 1e-12);
        assert!((c[1] - 130.0).abs() < 1e-12);
        assert!((c[10] - 40.0).abs() < 1e-12);
        assert!((c[11] - 70.0).abs() < 1e-12);
    }

    #[test]
    fn placidus_at_equator_uses_equal_ra_steps() {
        let c = placidus_cusps(90.0, 0.0, 0.0, 0.0, EPS).unwrap();
        let expected_11 = f64::atan2(30.0_f64.to_radians().sin(), 30.0_f64.to_radians().cos() * EPS.cos())
            .to_degrees();
        assert!((c[10] - expected_11).abs() < 1e-9);
        let expected_2 = normalize_360(
            f64::atan2(120.0_f64.to_radians().sin(), 120.0_f64.to_radians().cos() * EPS.cos())
                .to_degrees(),
        );
        assert!((c[1] - expected_2).abs() < 1e-9);
    }

    #[test]
    fn placidus_cusps_run_in_order() {
        let lat = 40.0_f64.to_radians();
        for k in 0..24 {
            let lst = k as f64 * 15.0_f64.to_radians();
            let asc = ascendant_deg(lst, lat, EPS);
            let mc = midheaven_deg(lst, EPS);
            let c = placidus_cusps(asc, mc, lst, lat, EPS).unwrap();
            let total: f64 = (0..12).map(|i| forward(c[i], c[(i + 1) % 12])).sum();
            assert!((total - 360.0).abs() < 1e-6, "lst {k}h: cusps out of order {c:?}");
        }
    }

    #[test]
    fn placidus_rejects_polar_latitude() {
        let lat = 70.0_f64.to_radians();
        assert!(matches!(
            placidus_cusps(0.0, 0.0, 0.0, lat, EPS),
            Err(EngineError::InvalidLocation(_))
        ));
    }

    #[test]
    fn tropical_cusps_dispatch() {
        let loc = GeoLocation::new(25.45, 81.84).unwrap();
        let jd = 2_451_545.0;
        let eq = house_cusps_tropical(jd, &loc, HouseSystem::Equal).unwrap();
        let pl = house_cusps_tropical(jd, &loc, HouseSystem::Placidus).unwrap();
        let sr = house_cusps_tropical(jd, &loc, HouseSystem::Sripati).unwrap();
        assert!((eq[0] - pl[0]).abs() < 1e-9);
        assert!((sr[9] - pl[9]).abs() < 1e-9);
        let polar = GeoLocation::new(78.2, 15.6).unwrap();
        assert!(house_cusps_tropical(jd, &polar, HouseSystem::Placidus).is_err());
        assert!(house_cusps_tropical(jd, &polar, HouseSystem::Equal).is_ok());
    }
}
