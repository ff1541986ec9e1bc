//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access. Implementations live in
//! `crate::infrastructure::persistence`; mocks are generated via `mockall`
//! for unit tests.
//!
//! - [`VisitRepository`] - Range queries over daily visit counters

pub mod visit_repository;

pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use visit_repository::MockVisitRepository;
