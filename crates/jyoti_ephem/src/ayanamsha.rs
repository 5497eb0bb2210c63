//! Ayanamsha from a J2000 reference value plus accumulated precession.
//!
//! `ayanamsha(T) = reference_j2000 + p_A(T)`, with Δψ added for systems
//! measured from the true equinox.

use jyoti_core::AyanamshaSystem;

use crate::precession::{general_precession_longitude_deg, nutation_longitude_arcsec};

/// Mean-equinox ayanamsha in degrees.
pub fn ayanamsha_mean_deg(system: AyanamshaSystem, t: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_longitude_deg(t)
}

/// Ayanamsha in degrees, nutation-corrected where the system asks for it.
pub fn ayanamsha_deg(system: AyanamshaSystem, t: f64) -> f64 {
    let mean = ayanamsha_mean_deg(system, t);
    if system.uses_true_equinox() {
        mean + nutation_longitude_arcsec(t) / 3600.0
    } else {
        mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lahiri_at_j2000() {
        assert!((ayanamsha_deg(AyanamshaSystem::Lahiri, 0.0) - 23.853).abs() < 1e-12);
    }

    #[test]
    fn lahiri_in_2024() {
        // about 24.19° in early 2024
        let t = 24.0 / 100.0;
        let a = ayanamsha_deg(AyanamshaSystem::Lahiri, t);
        assert!((a - 24.19).abs() < 0.02, "a = {a}");
    }

    #[test]
    fn grows_about_fifty_arcsec_a_year() {
        let a = ayanamsha_deg(AyanamshaSystem::KP, 0.10);
        let b = ayanamsha_deg(AyanamshaSystem::KP, 0.11);
        assert!(((b - a) * 3600.0 - 50.29).abs() < 0.1);
    }

    #[test]
    fn true_lahiri_differs_by_nutation_only() {
        for i in 0..10 {
            let t = i as f64 * 0.03;
            let d = ayanamsha_deg(AyanamshaSystem::TrueLahiri, t)
                - ayanamsha_deg(AyanamshaSystem::Lahiri, t);
            assert!(d.abs() < 20.0 / 3600.0);
        }
    }

    #[test]
    fn systems_keep_their_offsets() {
        let t = 0.25;
        let lahiri = ayanamsha_deg(AyanamshaSystem::Lahiri, t);
        let raman = ayanamsha_deg(AyanamshaSystem::Raman, t);
        assert!((lahiri - raman - (23.853 - 22.370)).abs() < 1e-9);
    }
}
