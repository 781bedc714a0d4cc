//! Storage port for vital records

use async_trait::async_trait;
use core_kernel::{DomainStore, Page, PageRequest, StoreError};

use crate::vital::{NewVital, Vital};

/// Fields of a vital record a collection query may sort by.
///
/// Parsed from the wire-level field names, so the whitelist lives in one
/// place for every store implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalSortField {
    Id,
    Weight,
    Height,
    GeneralExamination,
}

impl VitalSortField {
    /// Resolves a wire-level field name, `None` for unsortable fields
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "id" => Some(Self::Id),
            "weight" => Some(Self::Weight),
            "height" => Some(Self::Height),
            "generalExamination" => Some(Self::GeneralExamination),
            _ => None,
        }
    }
}

/// Persistence operations for vital records.
///
/// Implementations must keep ids unique and immutable: `insert` assigns the
/// id, `update` overwrites every other field of an existing record, and both
/// `update` and `delete` fail with [`StoreError::NotFound`] — leaving the
/// store untouched — when the id does not exist.
#[async_trait]
pub trait VitalStore: DomainStore {
    /// Persists a new record and returns it with its assigned id
    async fn insert(&self, vital: NewVital) -> Result<Vital, StoreError>;

    /// Fetches a record by id, `Ok(None)` when absent
    async fn find_by_id(&self, id: i32) -> Result<Option<Vital>, StoreError>;

    /// Overwrites the non-id fields of an existing record
    async fn update(&self, id: i32, vital: NewVital) -> Result<Vital, StoreError>;

    /// Removes a record permanently
    async fn delete(&self, id: i32) -> Result<(), StoreError>;

    /// Returns one page of records.
    ///
    /// The default order is ascending id; a sort on an unknown field fails
    /// with [`StoreError::InvalidSortField`]. Ordering is stable, with id as
    /// the tiebreaker.
    async fn list(&self, request: PageRequest) -> Result<Page<Vital>, StoreError>;

    /// Verifies the backing store is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}
