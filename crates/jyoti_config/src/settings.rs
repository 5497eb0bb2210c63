//! Validated settings built from a [`JyotiToml`].

use std::path::Path;

use jyoti_core::{GeoLocation, SiderealConfig};
use jyoti_time::{MAX_UTC_OFFSET_HOURS, TimeOfDay, Weekday};
use jyoti_vedic::{
    DEFAULT_DASHA_SEGMENTS, DEFAULT_FORECAST_DAYS, DEFAULT_MAX_RESULTS, DEFAULT_SUNRISE,
    DEFAULT_WINDOW_DAYS, DayRulerRule, MuhurtaTable,
};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::file::JyotiToml;

/// Longest accepted transit forecast, in days.
pub const MAX_TRANSIT_DAYS: u32 = 366;

/// Longest accepted muhurta search window, in days.
pub const MAX_MUHURTA_WINDOW_DAYS: u32 = 3660;

/// Most whole-year dasha segments accepted: ten full 120-year cycles.
pub const MAX_DASHA_SEGMENTS: usize = 90;

/// Typed settings for every tool in the workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub sidereal: SiderealConfig,
    pub location: GeoLocation,
    pub utc_offset_hours: f64,
    pub dasha_segments: usize,
    pub sunrise: TimeOfDay,
    pub day_ruler: DayRulerRule,
    pub muhurta_table: MuhurtaTable,
    pub muhurta_window_days: u32,
    pub muhurta_max_results: usize,
    pub transit_days: u32,
    pub transit_time: TimeOfDay,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sidereal: SiderealConfig::default(),
            location: prayagraj(),
            utc_offset_hours: 5.5,
            dasha_segments: DEFAULT_DASHA_SEGMENTS,
            sunrise: DEFAULT_SUNRISE,
            day_ruler: DayRulerRule::default(),
            muhurta_table: MuhurtaTable::default(),
            muhurta_window_days: DEFAULT_WINDOW_DAYS,
            muhurta_max_results: DEFAULT_MAX_RESULTS,
            transit_days: DEFAULT_FORECAST_DAYS,
            transit_time: TimeOfDay::noon(),
        }
    }
}

fn prayagraj() -> GeoLocation {
    match GeoLocation::new(25.45, 81.84) {
        Ok(loc) => loc,
        Err(_) => unreachable!("constant location is valid"),
    }
}

impl Settings {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: JyotiToml = toml::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(settings)
    }

    /// Like [`Settings::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate a deserialized file.
    pub fn from_raw(raw: JyotiToml) -> Result<Self, ConfigError> {
        let sidereal = SiderealConfig::new(
            raw.sidereal
                .ayanamsha
                .parse()
                .map_err(|e| ConfigError::invalid("sidereal.ayanamsha", format!("{e}")))?,
            raw.sidereal
                .house_system
                .parse()
                .map_err(|e| ConfigError::invalid("sidereal.house_system", format!("{e}")))?,
            raw.sidereal
                .node
                .parse()
                .map_err(|e| ConfigError::invalid("sidereal.node", format!("{e}")))?,
        );

        let location = GeoLocation::new(raw.location.latitude, raw.location.longitude)
            .map_err(|e| ConfigError::invalid("location", format!("{e}")))?;
        let utc_offset_hours = raw.location.utc_offset_hours;
        if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
            return Err(ConfigError::invalid(
                "location.utc_offset_hours",
                format!("{utc_offset_hours} is outside ±{MAX_UTC_OFFSET_HOURS} hours"),
            ));
        }

        if !(1..=MAX_DASHA_SEGMENTS).contains(&raw.dasha.segments) {
            return Err(ConfigError::invalid(
                "dasha.segments",
                format!("must be 1..={MAX_DASHA_SEGMENTS}"),
            ));
        }

        let sunrise: TimeOfDay = raw
            .hora
            .sunrise
            .parse()
            .map_err(|e| ConfigError::invalid("hora.sunrise", format!("{e}")))?;
        let day_ruler: DayRulerRule = raw
            .hora
            .day_ruler
            .parse()
            .map_err(|e| ConfigError::invalid("hora.day_ruler", format!("{e}")))?;

        let mut muhurta_table = if raw.muhurta.replace_defaults {
            MuhurtaTable::empty()
        } else {
            MuhurtaTable::default()
        };
        for (category, days) in &raw.muhurta.categories {
            let weekdays = days
                .iter()
                .map(|d| d.parse::<Weekday>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ConfigError::invalid("muhurta.categories", format!("{category}: {e}")))?;
            muhurta_table.insert(category, weekdays);
        }
        if raw.muhurta.window_days > MAX_MUHURTA_WINDOW_DAYS {
            return Err(ConfigError::invalid(
                "muhurta.window_days",
                format!("at most {MAX_MUHURTA_WINDOW_DAYS}"),
            ));
        }
        if raw.muhurta.max_results == 0 {
            return Err(ConfigError::invalid("muhurta.max_results", "must be at least 1"));
        }

        if !(1..=MAX_TRANSIT_DAYS).contains(&raw.transit.days) {
            return Err(ConfigError::invalid(
                "transit.days",
                format!("must be 1..={MAX_TRANSIT_DAYS}"),
            ));
        }
        let transit_time: TimeOfDay = raw
            .transit
            .time
            .parse()
            .map_err(|e| ConfigError::invalid("transit.time", format!("{e}")))?;

        Ok(Self {
            sidereal,
            location,
            utc_offset_hours,
            dasha_segments: raw.dasha.segments,
            sunrise,
            day_ruler,
            muhurta_table,
            muhurta_window_days: raw.muhurta.window_days,
            muhurta_max_results: raw.muhurta.max_results,
            transit_days: raw.transit.days,
            transit_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyoti_core::{AyanamshaSystem, HouseSystem, NodeMode};

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn sidereal_section() {
        let s = Settings::from_toml_str(
            r#"
            [sidereal]
            ayanamsha = "kp"
            house_system = "whole-sign"
            node = "true"
            "#,
        )
        .unwrap();
        assert_eq!(s.sidereal.ayanamsha, AyanamshaSystem::KP);
        assert_eq!(s.sidereal.house_system, HouseSystem::WholeSign);
        assert_eq!(s.sidereal.node_mode, NodeMode::True);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = Settings::from_toml_str("[dasha]\nlevels = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn unknown_ayanamsha_rejected() {
        let err = Settings::from_toml_str("[sidereal]\nayanamsha = \"tropical\"\n").unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { field: "sidereal.ayanamsha", .. }),
            "{err}"
        );
    }

    #[test]
    fn zero_segments_rejected() {
        let err = Settings::from_toml_str("[dasha]\nsegments = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "dasha.segments", .. }));
        let err = Settings::from_toml_str("[dasha]\nsegments = 91\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "dasha.segments", .. }));
        assert!(Settings::from_toml_str("[dasha]\nsegments = 90\n").is_ok());
    }

    #[test]
    fn offset_out_of_range() {
        let err = Settings::from_toml_str("[location]\nutc_offset_hours = 15.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "location.utc_offset_hours",
                ..
            }
        ));
    }

    #[test]
    fn muhurta_categories_merge() {
        let s = Settings::from_toml_str(
            r#"
            [muhurta]
            window_days = 30
            [muhurta.categories]
            Travel = ["tue"]
            surgery = ["Saturday", "Sunday"]
            "#,
        )
        .unwrap();
        assert_eq!(s.muhurta_window_days, 30);
        assert_eq!(s.muhurta_table.allowed("travel"), &[Weekday::Tuesday]);
        assert_eq!(
            s.muhurta_table.allowed("surgery"),
            &[Weekday::Saturday, Weekday::Sunday]
        );
        assert!(s.muhurta_table.contains("business"));
    }

    #[test]
    fn muhurta_replace_defaults() {
        let s = Settings::from_toml_str(
            "[muhurta]\nreplace_defaults = true\n[muhurta.categories]\nfestival = [\"fri\"]\n",
        )
        .unwrap();
        assert!(!s.muhurta_table.contains("business"));
        assert_eq!(s.muhurta_table.categories().collect::<Vec<_>>(), vec!["festival"]);
    }

    #[test]
    fn bad_weekday_names_category() {
        let err =
            Settings::from_toml_str("[muhurta.categories]\ntravel = [\"someday\"]\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("muhurta.categories"), "{msg}");
        assert!(msg.contains("travel"), "{msg}");
    }

    #[test]
    fn default_day_ruler_is_sequence_index() {
        assert_eq!(Settings::default().day_ruler, DayRulerRule::SequenceIndex);
        let s = Settings::from_toml_str("[hora]\nsunrise = \"06:00\"\n").unwrap();
        assert_eq!(s.day_ruler, DayRulerRule::SequenceIndex);
        let s = Settings::from_toml_str("[hora]\nday_ruler = \"weekday-lord\"\n").unwrap();
        assert_eq!(s.day_ruler, DayRulerRule::WeekdayLord);
    }

    #[test]
    fn hora_and_transit_times() {
        let s = Settings::from_toml_str(
            r#"
            [hora]
            sunrise = "05:42"
            day_ruler = "weekday-lord"
            [transit]
            days = 3
            time = "07:30"
            "#,
        )
        .unwrap();
        assert_eq!(s.sunrise, TimeOfDay::new(5, 42, 0.0).unwrap());
        assert_eq!(s.day_ruler, DayRulerRule::WeekdayLord);
        assert_eq!(s.transit_days, 3);
        assert_eq!(s.transit_time, TimeOfDay::new(7, 30, 0.0).unwrap());
    }

    #[test]
    fn bad_sunrise_rejected() {
        let err = Settings::from_toml_str("[hora]\nsunrise = \"25:00\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "hora.sunrise", .. }));
    }
}
