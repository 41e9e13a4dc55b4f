#![deny(unused_imports)]

//! Output mode configuration for schema.org structured-data generation.
//!
//! A generator producing structured-data documents supports several output
//! modes, each enabling a different bundle of optional fields. This crate
//! owns that mode→configuration mapping: parse a mode tag into a [`Mode`],
//! wrap it in a [`ModeConfig`], and read the resolved flags and derived
//! header values from there.

pub mod config;
pub mod errors;
pub mod modes;

pub use config::{ModeConfig, ModeConfiguration, PROFILE_BASE_IRI};
pub use errors::ModeError;
pub use modes::Mode;

pub type Result<T> = std::result::Result<T, ModeError>;
