//! `jyoti.toml` configuration.
//!
//! This crate provides:
//! - The raw TOML layout ([`JyotiToml`]) with per-field defaults
//! - Validated, typed [`Settings`] consumed by the command-line tool
//!
//! Every section and key is optional. Unknown keys are rejected.

pub mod error;
pub mod file;
pub mod settings;

pub use error::ConfigError;
pub use file::JyotiToml;
pub use settings::{MAX_DASHA_SEGMENTS, MAX_MUHURTA_WINDOW_DAYS, MAX_TRANSIT_DAYS, Settings};
