//! Storage port for organization records

use async_trait::async_trait;
use core_kernel::{DomainStore, Page, PageRequest, StoreError};

use crate::organization::{NewOrganization, Organization};

/// Fields of an organization a collection query may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizationSortField {
    Id,
    Name,
    Alias,
    Email,
    OrganizationId,
}

impl OrganizationSortField {
    /// Resolves a wire-level field name, `None` for unsortable fields
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "alias" => Some(Self::Alias),
            "email" => Some(Self::Email),
            "organizationId" => Some(Self::OrganizationId),
            _ => None,
        }
    }
}

/// Persistence operations for organization records.
///
/// The embedded address collection is part of the record: `insert` and
/// `update` persist it atomically with the rest of the fields, and `delete`
/// removes it along with the record. `update` and `delete` fail with
/// [`StoreError::NotFound`] — leaving the store untouched — when the id does
/// not exist.
#[async_trait]
pub trait OrganizationStore: DomainStore {
    /// Persists a new record and returns it with its assigned id
    async fn insert(&self, organization: NewOrganization) -> Result<Organization, StoreError>;

    /// Fetches a record by id, `Ok(None)` when absent
    async fn find_by_id(&self, id: i32) -> Result<Option<Organization>, StoreError>;

    /// Overwrites the non-id fields of an existing record, addresses included
    async fn update(
        &self,
        id: i32,
        organization: NewOrganization,
    ) -> Result<Organization, StoreError>;

    /// Removes a record and its addresses permanently
    async fn delete(&self, id: i32) -> Result<(), StoreError>;

    /// Returns one page of records.
    ///
    /// The default order is ascending id; a sort on an unknown field fails
    /// with [`StoreError::InvalidSortField`]. Ordering is stable, with id as
    /// the tiebreaker.
    async fn list(&self, request: PageRequest) -> Result<Page<Organization>, StoreError>;

    /// Verifies the backing store is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}
