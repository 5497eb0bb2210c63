//! Earth Rotation Angle, Greenwich Mean Sidereal Time and local sidereal time.
//!
//! Inputs are UT Julian Dates. No UT1-UTC correction is applied; the
//! sub-second difference is far below what the ascendant and house
//! computations resolve.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, [0, 2π).
///
/// θ = 2π (0.7790572732640 + 1.00273781191135448 Du), Du = JD − 2451545.0
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
///
/// GMST = ERA + (0.014506 + 4612.156534 T + 1.3915817 T² − 0.00000044 T³
/// − 0.000029956 T⁴ − 0.0000000368 T⁵) arcsec.
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let poly = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (earth_rotation_angle_rad(jd_ut) + poly * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time in radians from GMST and east longitude (radians).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

/// Local sidereal time in degrees [0, 360) at a UT Julian Date and east
/// longitude in degrees.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    local_sidereal_time_rad(gmst_rad(jd_ut), longitude_east_deg.to_radians())
        .to_degrees()
        .rem_euclid(360.0)
}
