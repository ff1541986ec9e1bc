//! Visit counter store implementations.
//!
//! - [`PgVisitRepository`] - PostgreSQL table queried with SQLx, paged
//! - [`MemoryVisitRepository`] - In-process store for tests and local runs

pub mod memory_visit_repository;
pub mod pg_visit_repository;

pub use memory_visit_repository::MemoryVisitRepository;
pub use pg_visit_repository::PgVisitRepository;
