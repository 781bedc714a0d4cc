//! Organization Registration Domain
//!
//! An `Organization` is a registered healthcare provider: its names, contact
//! details, and postal addresses. Addresses are value objects owned entirely
//! by their organization — they have no identity of their own and are
//! persisted and deleted with the record that embeds them.

pub mod address;
pub mod organization;
pub mod ports;

pub use address::Address;
pub use organization::{NewOrganization, Organization};
pub use ports::{OrganizationSortField, OrganizationStore};
