//! Infrastructure layer for external integrations.
//!
//! Implements the store interface defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL and in-memory visit repositories

pub mod persistence;
