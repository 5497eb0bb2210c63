//! Oracle contract and sidereal engine.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait behind which all astronomy lives
//! - [`Body`], [`GeoLocation`] and the immutable [`SiderealConfig`]
//! - [`Engine`], which turns oracle output into sidereal longitudes,
//!   retrograde flags, house cusps and the ascendant

pub mod angle;
pub mod body;
pub mod config;
pub mod engine;
pub mod error;
pub mod location;
pub mod oracle;

pub use angle::{normalize_360, wrap_180};
pub use body::{ALL_BODIES, Body};
pub use config::{
    ALL_AYANAMSHA_SYSTEMS, ALL_HOUSE_SYSTEMS, AyanamshaSystem, HouseSystem, NodeMode,
    SiderealConfig,
};
pub use engine::{Engine, MAX_AYANAMSHA_DEG, SiderealPosition};
pub use error::EngineError;
pub use location::GeoLocation;
pub use oracle::{BodyPosition, Ephemeris};
