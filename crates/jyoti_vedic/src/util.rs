//! Small numeric helpers shared by the derivation modules.

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
