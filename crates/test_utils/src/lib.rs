//! Test Utilities
//!
//! Shared helpers for the workspace test suites: in-memory implementations
//! of the store ports (so API tests run against the real routers without a
//! database) and builders for constructing test records with sensible
//! defaults.

pub mod builders;
pub mod memory;

pub use builders::{TestOrganizationBuilder, TestVitalBuilder};
pub use memory::{InMemoryOrganizationStore, InMemoryVitalStore};
