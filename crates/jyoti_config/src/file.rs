//! Raw TOML layout, deserialized as written.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level `jyoti.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct JyotiToml {
    /// Sidereal mode.
    #[serde(default)]
    pub sidereal: SiderealToml,

    /// Default observer location and time zone.
    #[serde(default)]
    pub location: LocationToml,

    #[serde(default)]
    pub dasha: DashaToml,

    #[serde(default)]
    pub hora: HoraToml,

    #[serde(default)]
    pub muhurta: MuhurtaToml,

    #[serde(default)]
    pub transit: TransitToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiderealToml {
    #[serde(default = "default_ayanamsha")]
    pub ayanamsha: String,
    #[serde(default = "default_house_system")]
    pub house_system: String,
    #[serde(default = "default_node")]
    pub node: String,
}

impl Default for SiderealToml {
    fn default() -> Self {
        Self {
            ayanamsha: default_ayanamsha(),
            house_system: default_house_system(),
            node: default_node(),
        }
    }
}

fn default_ayanamsha() -> String {
    "lahiri".to_string()
}
fn default_house_system() -> String {
    "placidus".to_string()
}
fn default_node() -> String {
    "mean".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: f64,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

// Prayagraj, IST
fn default_latitude() -> f64 {
    25.45
}
fn default_longitude() -> f64 {
    81.84
}
fn default_utc_offset_hours() -> f64 {
    5.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashaToml {
    #[serde(default = "default_segments")]
    pub segments: usize,
}

impl Default for DashaToml {
    fn default() -> Self {
        Self {
            segments: default_segments(),
        }
    }
}

fn default_segments() -> usize {
    jyoti_vedic::DEFAULT_DASHA_SEGMENTS
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoraToml {
    #[serde(default = "default_sunrise")]
    pub sunrise: String,
    #[serde(default = "default_day_ruler")]
    pub day_ruler: String,
}

impl Default for HoraToml {
    fn default() -> Self {
        Self {
            sunrise: default_sunrise(),
            day_ruler: default_day_ruler(),
        }
    }
}

fn default_sunrise() -> String {
    "06:00".to_string()
}
fn default_day_ruler() -> String {
    "sequence-index".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MuhurtaToml {
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Drop the built-in categories and use only `categories`.
    #[serde(default)]
    pub replace_defaults: bool,
    /// Category name → weekday names. Merged over the built-in table.
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
}

impl Default for MuhurtaToml {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            max_results: default_max_results(),
            replace_defaults: false,
            categories: BTreeMap::new(),
        }
    }
}

fn default_window_days() -> u32 {
    jyoti_vedic::DEFAULT_WINDOW_DAYS
}
fn default_max_results() -> usize {
    jyoti_vedic::DEFAULT_MAX_RESULTS
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitToml {
    #[serde(default = "default_transit_days")]
    pub days: u32,
    #[serde(default = "default_transit_time")]
    pub time: String,
}

impl Default for TransitToml {
    fn default() -> Self {
        Self {
            days: default_transit_days(),
            time: default_transit_time(),
        }
    }
}

fn default_transit_days() -> u32 {
    jyoti_vedic::DEFAULT_FORECAST_DAYS
}
fn default_transit_time() -> String {
    "12:00".to_string()
}
