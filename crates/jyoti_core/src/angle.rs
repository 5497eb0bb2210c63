//! Angle helpers shared across the workspace.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    if r < 0.0 {
        let w = r + 360.0;
        if w >= 360.0 { 0.0 } else { w }
    } else {
        r
    }
}

/// Wrap an angle into (-180, 180].
pub fn wrap_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}
