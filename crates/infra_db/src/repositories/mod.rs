//! Repository implementations of the domain store ports

pub mod organization;
pub mod vital;

pub use organization::PgOrganizationStore;
pub use vital::PgVitalStore;
