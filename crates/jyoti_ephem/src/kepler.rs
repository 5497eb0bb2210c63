//! Planetary positions from mean Keplerian elements.
//!
//! Elements and rates: E.M. Standish, "Keplerian Elements for Approximate
//! Positions of the Major Planets" (JPL), Table 1, valid 1800–2050.
//! Output is heliocentric, ecliptic and mean equinox of J2000.

use std::f64::consts::PI;

use jyoti_core::normalize_360;

/// Mean orbital elements at J2000 with their rates per Julian century.
///
/// Each pair is `[value, rate]`: `a` in AU, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis_au: [f64; 2],
    pub eccentricity: [f64; 2],
    pub inclination_deg: [f64; 2],
    pub mean_longitude_deg: [f64; 2],
    pub perihelion_longitude_deg: [f64; 2],
    pub ascending_node_deg: [f64; 2],
}

pub const MERCURY: OrbitalElements = OrbitalElements {
    semi_major_axis_au: [0.38709927, 0.00000037],
    eccentricity: [0.20563593, 0.00001906],
    inclination_deg: [7.00497902, -0.00594749],
    mean_longitude_deg: [252.25032350, 149472.67411175],
    perihelion_longitude_deg: [77.45779628, 0.16047689],
    ascending_node_deg: [48.33076593, -0.12534081],
};

pub const VENUS: OrbitalElements = OrbitalElements {
    semi_major_axis_au: [0.72333566, 0.00000390],
    eccentricity: [0.00677672, -0.00004107],
    inclination_deg: [3.39467605, -0.00078890],
    mean_longitude_deg: [181.97909950, 58517.81538729],
    perihelion_longitude_deg: [131.60246718, 0.00268329],
    ascending_node_deg: [76.67984255, -0.27769418],
};

/// Earth-Moon barycenter.
pub const EARTH_MOON: OrbitalElements = OrbitalElements {
    semi_major_axis_au: [1.00000261, 0.00000562],
    eccentricity: [0.01671123, -0.00004392],
    inclination_deg: [-0.00001531, -0.01294668],
    mean_longitude_deg: [100.46457166, 35999.37244981],
    perihelion_longitude_deg: [102.93768193, 0.32327364],
    ascending_node_deg: [0.0, 0.0],
};

pub const MARS: OrbitalElements = OrbitalElements {
    semi_major_axis_au: [1.52371034, 0.00001847],
    eccentricity: [0.09339410, 0.00007882],
    inclination_deg: [1.84969142, -0.00813131],
    mean_longitude_deg: [-4.55343205, 19140.30268499],
    perihelion_longitude_deg: [-23.94362959, 0.44441088],
    ascending_node_deg: [49.55953891, -0.29257343],
};

pub const JUPITER: OrbitalElements = OrbitalElements {
    semi_major_axis_au: [5.20288700, -0.00011607],
    eccentricity: [0.04838624, -0.00013253],
    inclination_deg: [1.30439695, -0.00183714],
    mean_longitude_deg: [34.39644051, 3034.74612775],
    perihelion_longitude_deg: [14.72847983, 0.21252668],
    ascending_node_deg: [100.47390909, 0.20469106],
};

pub const SATURN: OrbitalElements = OrbitalElements {
    semi_major_axis_au: [9.53667594, -0.00125060],
    eccentricity: [0.05386179, -0.00050991],
    inclination_deg: [2.48599187, 0.00193609],
    mean_longitude_deg: [49.95424423, 1222.49362201],
    perihelion_longitude_deg: [92.59887831, -0.41897216],
    ascending_node_deg: [113.66242448, -0.28867794],
};

/// Solve Kepler's equation `E - e sin E = M` (radians) by Newton iteration.
pub fn solve_kepler(mean_anomaly_rad: f64, eccentricity: f64) -> f64 {
    // keep M in (-π, π] so the starting guess is close
    let m = (mean_anomaly_rad + PI).rem_euclid(2.0 * PI) - PI;
    let mut e_anom = m + eccentricity * m.sin();
    for _ in 0..30 {
        let delta = (e_anom - eccentricity * e_anom.sin() - m) / (1.0 - eccentricity * e_anom.cos());
        e_anom -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    e_anom
}

impl OrbitalElements {
    /// Heliocentric ecliptic J2000 position in AU at `t` centuries from J2000.
    pub fn heliocentric_position(&self, t: f64) -> [f64; 3] {
        let at = |pair: [f64; 2]| pair[0] + pair[1] * t;
        let a = at(self.semi_major_axis_au);
        let e = at(self.eccentricity);
        let incl = at(self.inclination_deg).to_radians();
        let mean_lon = at(self.mean_longitude_deg);
        let peri = at(self.perihelion_longitude_deg);
        let node = at(self.ascending_node_deg);

        let arg_peri = (peri - node).to_radians();
        let mean_anomaly = normalize_360(mean_lon - peri).to_radians();
        let ecc_anom = solve_kepler(mean_anomaly, e);

        // orbital plane, x toward perihelion
        let xp = a * (ecc_anom.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

        let (sw, cw) = arg_peri.sin_cos();
        let (so, co) = node.to_radians().sin_cos();
        let (si, ci) = incl.sin_cos();
        [
            (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
            (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
            (sw * si) * xp + (cw * si) * yp,
        ]
    }
}
