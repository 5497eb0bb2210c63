//! Geocentric Moon from a truncated lunar theory.
//!
//! Principal periodic terms of Meeus, "Astronomical Algorithms" (2nd ed),
//! chapter 47 (ELP-2000/82 abridged). Longitude is referred to the mean
//! equinox of date. Truncation error is a few hundredths of a degree.

use jyoti_core::normalize_360;

/// Kilometres per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Geocentric lunar coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_km: f64,
}

// Multipliers of D, M, M', F then the sine (longitude, 1e-6°) and cosine
// (distance, 1e-3 km) coefficients.
#[rustfmt::skip]
const LON_DIST_TERMS: [(i8, i8, i8, i8, f64, f64); 25] = [
    (0,  0,  1,  0, 6288774.0, -20905355.0),
    (2,  0, -1,  0, 1274027.0,  -3699111.0),
    (2,  0,  0,  0,  658314.0,  -2955968.0),
    (0,  0,  2,  0,  213618.0,   -569925.0),
    (0,  1,  0,  0, -185116.0,     48888.0),
    (0,  0,  0,  2, -114332.0,     -3149.0),
    (2,  0, -2,  0,   58793.0,    246158.0),
    (2, -1, -1,  0,   57066.0,   -152138.0),
    (2,  0,  1,  0,   53322.0,   -170733.0),
    (2, -1,  0,  0,   45758.0,   -204586.0),
    (0,  1, -1,  0,  -40923.0,   -129620.0),
    (1,  0,  0,  0,  -34720.0,    108743.0),
    (0,  1,  1,  0,  -30383.0,    104755.0),
    (2,  0,  0, -2,   15327.0,     10321.0),
    (0,  0,  1,  2,  -12528.0,         0.0),
    (0,  0,  1, -2,   10980.0,     79661.0),
    (4,  0, -1,  0,   10675.0,    -34782.0),
    (0,  0,  3,  0,   10034.0,    -23210.0),
    (4,  0, -2,  0,    8548.0,    -21636.0),
    (2,  1, -1,  0,   -7888.0,     24208.0),
    (2,  1,  0,  0,   -6766.0,     30824.0),
    (1,  0, -1,  0,   -5163.0,     -8379.0),
    (1,  1,  0,  0,    4987.0,    -16675.0),
    (2, -1,  1,  0,    4036.0,    -12831.0),
    (2,  0,  2,  0,    3994.0,    -10445.0),
];

// Multipliers of D, M, M', F and the sine coefficient for latitude (1e-6°).
#[rustfmt::skip]
const LAT_TERMS: [(i8, i8, i8, i8, f64); 10] = [
    (0,  0,  0,  1, 5128122.0),
    (0,  0,  1,  1,  280602.0),
    (0,  0,  1, -1,  277693.0),
    (2,  0,  0, -1,  173237.0),
    (2,  0, -1,  1,   55413.0),
    (2,  0, -1, -1,   46271.0),
    (2,  0,  0,  1,   32573.0),
    (0,  0,  2,  1,   17198.0),
    (2,  0,  1, -1,    9266.0),
    (0,  0,  2, -1,    8822.0),
];

/// Moon position at `t` Julian centuries from J2000.
pub fn lunar_position(t: f64) -> LunarPosition {
    let poly = |c0: f64, c1: f64, c2: f64| normalize_360(c0 + t * (c1 + t * c2));
    let lp = poly(218.3164477, 481267.88123421, -0.0015786);
    let d = poly(297.8501921, 445267.1114034, -0.0018819).to_radians();
    let m = poly(357.5291092, 35999.0502909, -0.0001536).to_radians();
    let mp = poly(134.9633964, 477198.8675055, 0.0087414).to_radians();
    let f = poly(93.2720950, 483202.0175233, -0.0036539).to_radians();
    let a1 = poly(119.75, 131.849, 0.0).to_radians();
    let a2 = poly(53.09, 479264.290, 0.0).to_radians();
    let a3 = poly(313.45, 481266.484, 0.0).to_radians();
    // decreasing eccentricity of the Earth's orbit
    let ecc = 1.0 - t * (0.002516 + t * 0.0000074);

    let arg = |nd: i8, nm: i8, nmp: i8, nf: i8| {
        let angle = nd as f64 * d + nm as f64 * m + nmp as f64 * mp + nf as f64 * f;
        let scale = ecc.powi(nm.unsigned_abs() as i32);
        (angle, scale)
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(nd, nm, nmp, nf, sl, cr) in &LON_DIST_TERMS {
        let (angle, scale) = arg(nd, nm, nmp, nf);
        sum_l += sl * scale * angle.sin();
        sum_r += cr * scale * angle.cos();
    }
    let mut sum_b = 0.0;
    for &(nd, nm, nmp, nf, sb) in &LAT_TERMS {
        let (angle, scale) = arg(nd, nm, nmp, nf);
        sum_b += sb * scale * angle.sin();
    }

    let lp_rad = lp.to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp_rad - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp_rad.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp_rad - mp).sin()
        - 115.0 * (lp_rad + mp).sin();

    LunarPosition {
        longitude_deg: normalize_360(lp + sum_l * 1e-6),
        latitude_deg: sum_b * 1e-6,
        distance_km: 385_000.56 + sum_r * 1e-3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyoti_time::{calendar_to_jd, jd_to_centuries};

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: λ = 133.162655°, β = -3.229126°, Δ = 368409.7 km
        let t = jd_to_centuries(calendar_to_jd(1992, 4, 12.0));
        let p = lunar_position(t);
        assert!((p.longitude_deg - 133.162655).abs() < 0.05, "λ = {}", p.longitude_deg);
        assert!((p.latitude_deg + 3.229126).abs() < 0.08, "β = {}", p.latitude_deg);
        assert!((p.distance_km - 368_409.7).abs() < 300.0, "Δ = {}", p.distance_km);
    }

    #[test]
    fn distance_within_orbit_extremes() {
        for k in 0..60 {
            let t = k as f64 * 0.0011;
            let p = lunar_position(t);
            assert!((355_000.0..407_500.0).contains(&p.distance_km), "Δ = {}", p.distance_km);
            assert!(p.latitude_deg.abs() < 5.4);
        }
    }

    #[test]
    fn moves_about_thirteen_degrees_a_day() {
        let day = 1.0 / 36525.0;
        for k in 0..30 {
            let t = k as f64 * 0.003;
            let a = lunar_position(t).longitude_deg;
            let b = lunar_position(t + day).longitude_deg;
            let step = normalize_360(b - a);
            assert!((11.0..16.0).contains(&step), "step = {step}");
        }
    }
}
