//! # Storage Module
//!
//! Persistence for saved itineraries. The domain layer only sees the
//! `ItineraryStorage` trait; the YAML backend here is the default
//! implementation.

pub mod traits;
pub mod yaml;

pub use traits::*;
pub use yaml::*;
