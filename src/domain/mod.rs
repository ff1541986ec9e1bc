//! Domain layer containing business entities and logic.
//!
//! - [`entities`] - Visit records and aggregated statistics
//! - [`date_range`] - Inclusive calendar ranges and request-bound resolution
//! - [`series`] - Gap-filled daily series aggregation
//! - [`repositories`] - Store access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod date_range;
pub mod entities;
pub mod repositories;
pub mod series;
