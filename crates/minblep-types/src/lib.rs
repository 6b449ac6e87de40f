//! # minblep-types
//!
//! Core type definitions for MinBLEP kernel generation.
//!
//! This crate provides the plain data shared across the workspace:
//! - Validated kernel parameters and the derived table length
//! - Sample precision selection
//! - The generated table with its parameters attached

pub mod params;
pub mod table;

pub use params::*;
pub use table::*;
