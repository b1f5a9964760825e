//! # Domain Module
//!
//! Contains the business logic for the travel planner application.
//!
//! This module encapsulates itinerary generation end to end: the
//! destination catalog, interest-based selection, day-by-day
//! scheduling, and the facade the UI layer calls. It operates
//! independently of any UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **catalog**: Read-only destination/location data and picker options
//! - **selector**: Interest filtering and rating-based ranking
//! - **scheduler**: Day bucketing, time slots, dates, and meal stops
//! - **itinerary_service**: The generation facade orchestrating the above
//! - **premount_service**: Activity pre-mount registry for UI preloading
//!
//! ## Business Rules
//!
//! - A generated itinerary always has exactly the requested number of days
//! - Days aim for 2-4 activities; a sparse catalog legitimately leaves
//!   later days short or empty
//! - Selection is deterministic; only the restaurant draw and the day
//!   dates vary between runs, and both sit behind injectable traits
//! - Expected request failures surface as `None`, never as panics

pub mod catalog;
pub mod itinerary_service;
pub mod models;
pub mod premount_service;
pub mod scheduler;
pub mod selector;

pub use catalog::*;
pub use itinerary_service::*;
pub use models::*;
pub use premount_service::*;
pub use scheduler::*;
