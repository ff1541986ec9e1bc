//! Helper functions shared across layers.
//!
//! - [`table_name`] - Validation and quoting of configured table names

pub mod table_name;
