//! Precession, obliquity and the Delaunay arguments.
//!
//! Sources:
//! - General precession p_A: Capitaine, Wallace & Chapront 2003 (IAU 2006).
//! - Mean obliquity: IAU 2006 (Hilton et al. 2006).
//! - Delaunay arguments: IERS Conventions 2010, Table 5.2e.
//! - Principal nutation terms: IERS Conventions 2010, Table 5.3b (first rows).

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// IAU 2006 general precession in ecliptic longitude, arcseconds.
///
/// `t` = Julian centuries since J2000.0. About 5028.8″ per century.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    t * (5028.796195 + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 - t * 0.0000000383))))
}

/// General precession in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// IAU 2006 mean obliquity of the ecliptic, degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84381.406
        + t * (-46.836769 + t * (-0.0001831 + t * (0.00200340 + t * (-0.000000576 - t * 0.0000000434))));
    arcsec / 3600.0
}

/// The five Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// - `l`  mean anomaly of the Moon
/// - `l'` mean anomaly of the Sun
/// - `F`  mean argument of latitude of the Moon
/// - `D`  mean elongation of the Moon from the Sun
/// - `Ω`  mean longitude of the Moon's ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let poly = |c: [f64; 5]| (c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])))) * AS2RAD;
    [
        poly([485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.00024470]),
        poly([1287104.79305, 129596581.0481, -0.5532, 0.000136, -0.00001149]),
        poly([335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417]),
        poly([1072260.70369, 1602961601.2090, -6.3706, 0.006593, -0.00003169]),
        poly([450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939]),
    ]
}

/// Nutation in longitude Δψ from the four largest lunisolar terms, arcseconds.
///
/// Good to about 0.5″, plenty for a true-equinox ayanamsha.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    // [nl, nl', nF, nD, nΩ, S (0.1 µas), S' (0.1 µas / century)]
    #[rustfmt::skip]
    const TERMS: [[f64; 7]; 4] = [
        [0.0, 0.0, 0.0,  0.0, 1.0, -172064161.0, -174666.0],
        [0.0, 0.0, 2.0, -2.0, 2.0,  -13170906.0,   -1675.0],
        [0.0, 0.0, 2.0,  0.0, 2.0,   -2276413.0,    -234.0],
        [0.0, 0.0, 0.0,  0.0, 2.0,    2074554.0,     207.0],
    ];
    let args = fundamental_arguments(t);
    let mut dpsi = 0.0;
    for row in &TERMS {
        let arg: f64 = (0..5).map(|k| row[k] * args[k]).sum();
        dpsi += (row[5] + row[6] * t) * arg.sin();
    }
    dpsi * 1e-7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precession_zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn precession_one_century() {
        let p = general_precession_longitude_arcsec(1.0);
        assert!((p - 5029.90).abs() < 1.0, "p_A(1) = {p}");
        assert!(general_precession_longitude_arcsec(-1.0) < 0.0);
    }

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_279).abs() < 1e-5);
        // decreasing by about 47″ per century
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
    }

    #[test]
    fn node_argument_at_j2000() {
        let om = fundamental_arguments(0.0)[4].to_degrees();
        assert!((om - 125.044_555).abs() < 1e-4, "Ω = {om}");
    }

    #[test]
    fn nutation_bounded() {
        for i in -20..=20 {
            let t = i as f64 * 0.05;
            let dpsi = nutation_longitude_arcsec(t);
            assert!(dpsi.abs() < 20.0, "Δψ({t}) = {dpsi}");
        }
    }

    #[test]
    fn nutation_at_j2000() {
        // full IAU 2000B gives about -13.93″ at J2000
        let dpsi = nutation_longitude_arcsec(0.0);
        assert!((dpsi + 13.93).abs() < 0.6, "Δψ = {dpsi}");
    }
}
