//! Engine behaviour against a deterministic fake oracle.

use jyoti_core::*;
use jyoti_time::{Instant, J2000_JD};

/// Returns fixed tropical values; the ayanamsha is 24° unless overridden.
struct FixedOracle {
    longitude: f64,
    speed: f64,
    ayanamsa: f64,
    asc: f64,
}

impl FixedOracle {
    fn new(longitude: f64, speed: f64) -> Self {
        Self {
            longitude,
            speed,
            ayanamsa: 24.0,
            asc: 100.0,
        }
    }
}

impl Ephemeris for FixedOracle {
    fn body_position(&self, _jd: f64, body: Body) -> Result<BodyPosition, EngineError> {
        if body == Body::TrueNode {
            return Err(EngineError::UnsupportedBody(body));
        }
        Ok(BodyPosition {
            body,
            longitude_deg: self.longitude,
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_deg_per_day: self.speed,
        })
    }

    fn ayanamsa(&self, _jd: f64, system: AyanamshaSystem) -> Result<f64, EngineError> {
        match system {
            AyanamshaSystem::Raman => Ok(self.ayanamsa - 1.5),
            _ => Ok(self.ayanamsa),
        }
    }

    fn house_cusps(
        &self,
        _jd: f64,
        _location: &GeoLocation,
        _system: HouseSystem,
    ) -> Result<[f64; 12], EngineError> {
        Ok(std::array::from_fn(|i| normalize_360(self.asc + 30.0 * i as f64)))
    }
}

/// Rejects Placidus above 66.5° like the analytic oracle does.
struct PolarOracle;

impl Ephemeris for PolarOracle {
    fn body_position(&self, _jd: f64, body: Body) -> Result<BodyPosition, EngineError> {
        Ok(BodyPosition {
            body,
            longitude_deg: 0.0,
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_deg_per_day: 1.0,
        })
    }

    fn ayanamsa(&self, _jd: f64, _system: AyanamshaSystem) -> Result<f64, EngineError> {
        Ok(24.0)
    }

    fn house_cusps(
        &self,
        _jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<[f64; 12], EngineError> {
        if system == HouseSystem::Placidus && location.latitude_deg().abs() > 66.5 {
            return Err(EngineError::InvalidLocation("polar latitude"));
        }
        Ok(std::array::from_fn(|i| normalize_360(100.0 + 30.0 * i as f64)))
    }
}

fn origin() -> GeoLocation {
    GeoLocation::new(0.0, 0.0).unwrap()
}

#[test]
fn sidereal_subtracts_ayanamsa() {
    let engine = Engine::new(FixedOracle::new(100.0, 1.0), SiderealConfig::default());
    let p = engine.sidereal_position(J2000_JD, Body::Sun).unwrap();
    assert!((p.longitude_deg - 76.0).abs() < 1e-12);
    assert!((p.ayanamsa_deg - 24.0).abs() < 1e-12);
    assert!(!p.retrograde);
}

#[test]
fn sidereal_wraps_below_zero() {
    let engine = Engine::new(FixedOracle::new(10.0, 0.5), SiderealConfig::default());
    let p = engine.sidereal_position(J2000_JD, Body::Moon).unwrap();
    assert!((p.longitude_deg - 346.0).abs() < 1e-12);
}

#[test]
fn negative_speed_is_retrograde() {
    let engine = Engine::new(FixedOracle::new(200.0, -0.02), SiderealConfig::default());
    assert!(engine.sidereal_position(J2000_JD, Body::Saturn).unwrap().retrograde);
}

#[test]
fn configured_system_reaches_oracle() {
    let cfg = SiderealConfig::new(AyanamshaSystem::Raman, HouseSystem::Equal, NodeMode::Mean);
    let engine = Engine::new(FixedOracle::new(100.0, 1.0), cfg);
    let p = engine.sidereal_position(J2000_JD, Body::Sun).unwrap();
    assert!((p.longitude_deg - 77.5).abs() < 1e-12);
    assert_eq!(engine.config().house_system, HouseSystem::Equal);
}

#[test]
fn absurd_ayanamsa_is_oracle_failure() {
    let mut oracle = FixedOracle::new(100.0, 1.0);
    oracle.ayanamsa = 120.0;
    let engine = Engine::new(oracle, SiderealConfig::default());
    assert!(matches!(
        engine.sidereal_position(J2000_JD, Body::Sun),
        Err(EngineError::OutOfRange { what: "ayanamsha", .. })
    ));
}

#[test]
fn non_finite_longitude_is_oracle_failure() {
    let engine = Engine::new(FixedOracle::new(f64::NAN, 1.0), SiderealConfig::default());
    assert!(matches!(
        engine.sidereal_position(J2000_JD, Body::Sun),
        Err(EngineError::OutOfRange { .. })
    ));
    let engine = Engine::new(FixedOracle::new(10.0, 1.0), SiderealConfig::default());
    assert!(engine.sidereal_position(f64::INFINITY, Body::Sun).is_err());
}

#[test]
fn rahu_follows_node_mode() {
    let mean = Engine::new(FixedOracle::new(50.0, -0.05), SiderealConfig::default());
    let r = mean.rahu_position(J2000_JD).unwrap();
    assert_eq!(r.body, Body::MeanNode);
    assert!(r.retrograde);

    let cfg = SiderealConfig {
        node_mode: NodeMode::True,
        ..SiderealConfig::default()
    };
    let tru = Engine::new(FixedOracle::new(50.0, -0.05), cfg);
    assert!(matches!(
        tru.rahu_position(J2000_JD),
        Err(EngineError::UnsupportedBody(Body::TrueNode))
    ));
}

#[test]
fn ascendant_is_sidereal_first_cusp() {
    let engine = Engine::new(FixedOracle::new(0.0, 1.0), SiderealConfig::default());
    let asc = engine.ascendant_deg(J2000_JD, &origin()).unwrap();
    assert!((asc - 76.0).abs() < 1e-12);
    let cusps = engine.house_cusps_sidereal(J2000_JD, &origin()).unwrap();
    assert!((cusps[1] - 106.0).abs() < 1e-12);
    assert!((cusps[9] - 346.0).abs() < 1e-12);
}

#[test]
fn whole_sign_cusps_start_at_sidereal_sign() {
    let cfg = SiderealConfig {
        house_system: HouseSystem::WholeSign,
        ..SiderealConfig::default()
    };
    let engine = Engine::new(FixedOracle::new(0.0, 1.0), cfg);
    let cusps = engine.house_cusps_sidereal(J2000_JD, &origin()).unwrap();
    assert_eq!(cusps[0], 60.0);
    assert_eq!(cusps[1], 90.0);
    assert_eq!(cusps[11], 30.0);
    // the ascendant keeps its exact degree
    let asc = engine.ascendant_deg(J2000_JD, &origin()).unwrap();
    assert!((asc - 76.0).abs() < 1e-12);
}

#[test]
fn polar_ascendant_independent_of_house_system() {
    let tromso = GeoLocation::new(69.65, 18.96).unwrap();
    let engine = Engine::new(PolarOracle, SiderealConfig::default());
    assert_eq!(engine.config().house_system, HouseSystem::Placidus);
    let asc = engine.ascendant_deg(J2000_JD, &tromso).unwrap();
    assert!((asc - 76.0).abs() < 1e-12);
    assert!(matches!(
        engine.house_cusps_sidereal(J2000_JD, &tromso),
        Err(EngineError::InvalidLocation(_))
    ));

    let cfg = SiderealConfig {
        house_system: HouseSystem::WholeSign,
        ..SiderealConfig::default()
    };
    let whole = Engine::new(PolarOracle, cfg);
    assert_eq!(whole.house_cusps_sidereal(J2000_JD, &tromso).unwrap()[0], 60.0);
}

#[test]
fn julian_day_applies_offset() {
    let engine = Engine::new(FixedOracle::new(0.0, 1.0), SiderealConfig::default());
    let ist = Instant::from_fields(2000, 1, 1, 17, 30, 0.0, 5.5).unwrap();
    let jd = engine.julian_day(&ist).unwrap();
    assert!((jd - J2000_JD).abs() < 1e-9);
}

#[test]
fn default_julian_day_validates() {
    let oracle = FixedOracle::new(0.0, 1.0);
    assert!(matches!(
        oracle.julian_day(2023, 2, 29, 0.0),
        Err(EngineError::InvalidDate(_))
    ));
    assert!(oracle.julian_day(2023, 2, 28, 24.0).is_err());
    let jd = oracle.julian_day(2000, 1, 1, 12.0).unwrap();
    assert!((jd - J2000_JD).abs() < 1e-9);
}

#[test]
fn engine_accepts_borrowed_oracle() {
    let oracle = FixedOracle::new(100.0, 1.0);
    let engine = Engine::new(&oracle, SiderealConfig::default());
    assert!(engine.sidereal_position(J2000_JD, Body::Mars).is_ok());
}
