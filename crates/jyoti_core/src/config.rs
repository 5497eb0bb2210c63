//! Sidereal mode selection.
//!
//! A [`SiderealConfig`] is fixed when an [`crate::Engine`] is built and never
//! changes afterwards.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::body::Body;
use crate::error::EngineError;

/// Ayanamsha (sidereal zodiac offset) systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0° Libra sidereal.
    #[default]
    Lahiri,
    /// Lahiri anchor measured from the true (nutated) equinox.
    TrueLahiri,
    /// Krishnamurti Paddhati.
    KP,
    /// B.V. Raman.
    Raman,
    /// Fagan-Bradley Synetic Vernal Point.
    FaganBradley,
}

pub const ALL_AYANAMSHA_SYSTEMS: [AyanamshaSystem; 5] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::TrueLahiri,
    AyanamshaSystem::KP,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
];

impl AyanamshaSystem {
    /// Ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri | Self::TrueLahiri => 23.853,
            Self::KP => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
        }
    }

    /// Only `TrueLahiri` is measured from the true equinox.
    pub const fn uses_true_equinox(self) -> bool {
        matches!(self, Self::TrueLahiri)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::TrueLahiri => "true-lahiri",
            Self::KP => "kp",
            Self::Raman => "raman",
            Self::FaganBradley => "fagan-bradley",
        }
    }

    pub const fn all() -> &'static [AyanamshaSystem; 5] {
        &ALL_AYANAMSHA_SYSTEMS
    }
}

/// House division systems supported by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    /// Placidus semi-arc trisection. Undefined in polar latitudes.
    #[default]
    Placidus,
    /// Sripati (Porphyry): each quadrant trisected in ecliptic longitude.
    Sripati,
    /// 30° houses starting at the ascendant degree.
    Equal,
    /// 30° houses starting at 0° of the ascendant's sign.
    WholeSign,
}

pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 4] = [
    HouseSystem::Placidus,
    HouseSystem::Sripati,
    HouseSystem::Equal,
    HouseSystem::WholeSign,
];

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "placidus",
            Self::Sripati => "sripati",
            Self::Equal => "equal",
            Self::WholeSign => "whole-sign",
        }
    }

    pub const fn all() -> &'static [HouseSystem; 4] {
        &ALL_HOUSE_SYSTEMS
    }
}

/// Which lunar node stands in for Rahu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeMode {
    #[default]
    Mean,
    True,
}

impl NodeMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }

    /// Oracle body for this node mode.
    pub const fn body(self) -> Body {
        match self {
            Self::Mean => Body::MeanNode,
            Self::True => Body::TrueNode,
        }
    }
}

/// Immutable sidereal mode handed to the engine at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SiderealConfig {
    pub ayanamsha: AyanamshaSystem,
    pub house_system: HouseSystem,
    pub node_mode: NodeMode,
}

impl SiderealConfig {
    pub const fn new(
        ayanamsha: AyanamshaSystem,
        house_system: HouseSystem,
        node_mode: NodeMode,
    ) -> Self {
        Self {
            ayanamsha,
            house_system,
            node_mode,
        }
    }
}

fn fold(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for AyanamshaSystem {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "lahiri" | "chitrapaksha" => Ok(Self::Lahiri),
            "truelahiri" => Ok(Self::TrueLahiri),
            "kp" | "krishnamurti" => Ok(Self::KP),
            "raman" => Ok(Self::Raman),
            "faganbradley" | "fagan" => Ok(Self::FaganBradley),
            _ => Err(EngineError::InvalidConfig("unknown ayanamsha system")),
        }
    }
}

impl FromStr for HouseSystem {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "placidus" => Ok(Self::Placidus),
            "sripati" | "porphyry" => Ok(Self::Sripati),
            "equal" => Ok(Self::Equal),
            "wholesign" => Ok(Self::WholeSign),
            _ => Err(EngineError::InvalidConfig("unknown house system")),
        }
    }
}

impl FromStr for NodeMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "mean" => Ok(Self::Mean),
            "true" | "osculating" => Ok(Self::True),
            _ => Err(EngineError::InvalidConfig("unknown node mode")),
        }
    }
}

impl Display for AyanamshaSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for HouseSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for NodeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
