//! Mean and true ascending lunar node (Rahu).

use jyoti_core::normalize_360;

use crate::precession::fundamental_arguments;

/// Mean ascending node longitude, degrees [0, 360), mean equinox of date.
pub fn mean_node_deg(t: f64) -> f64 {
    normalize_360(fundamental_arguments(t)[4].to_degrees())
}

/// True ascending node: mean node plus the principal periodic terms
/// (Meeus, Astronomical Algorithms, ch. 47).
pub fn true_node_deg(t: f64) -> f64 {
    // [nl, nl', nF, nD, nΩ, amplitude°]
    #[rustfmt::skip]
    const TERMS: [[f64; 6]; 13] = [
        [0.0, 0.0, 0.0,  0.0,  1.0, -1.4979],
        [0.0, 0.0, 2.0, -2.0,  0.0,  0.1500],
        [0.0, 0.0, 2.0,  0.0,  0.0, -0.1226],
        [0.0, 0.0, 0.0,  0.0,  2.0,  0.1176],
        [1.0, 0.0, 0.0,  0.0,  0.0, -0.0801],
        [0.0, 1.0, 0.0,  0.0,  0.0,  0.0056],
        [0.0, 0.0, 2.0,  0.0, -2.0, -0.0047],
        [1.0, 0.0, 2.0,  0.0,  0.0, -0.0043],
        [0.0, 0.0, 2.0, -2.0,  2.0,  0.0040],
        [0.0, 1.0, 0.0,  0.0, -1.0,  0.0037],
        [0.0, 0.0, 0.0,  2.0,  0.0, -0.0030],
        [2.0, 0.0, 0.0,  0.0,  0.0, -0.0020],
        [0.0, 1.0, 2.0, -2.0,  0.0,  0.0015],
    ];
    let args = fundamental_arguments(t);
    let correction: f64 = TERMS
        .iter()
        .map(|row| {
            let arg: f64 = (0..5).map(|k| row[k] * args[k]).sum();
            row[5] * arg.sin()
        })
        .sum();
    normalize_360(args[4].to_degrees() + correction)
}
