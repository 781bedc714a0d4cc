//! Storage ports
//!
//! Each domain crate defines a store trait describing the persistence
//! operations its service needs (save, find-by-id, delete, list-with-paging).
//! Infrastructure adapters implement those traits against a concrete backend;
//! the HTTP layer only ever sees the trait.
//!
//! ```rust,ignore
//! // In domain_vital/src/ports.rs
//! #[async_trait]
//! pub trait VitalStore: DomainStore {
//!     async fn find_by_id(&self, id: i32) -> Result<Option<Vital>, StoreError>;
//!     ...
//! }
//!
//! // In infra_db - PostgreSQL adapter
//! impl VitalStore for PgVitalStore { ... }
//! ```
//!
//! `StoreError` is the single error type crossing that boundary, so handlers
//! can map storage outcomes to HTTP statuses without knowing which backend is
//! wired in.

use thiserror::Error;

/// Error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: i32 },

    /// A list request named a field the store cannot sort by
    #[error("Cannot sort by field '{field}'")]
    InvalidSortField { field: String },

    /// Connection to the backing store failed
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The store failed for a reason the caller cannot act on
    #[error("Storage error: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: i32) -> Self {
        StoreError::NotFound {
            entity_type: entity_type.into(),
            id,
        }
    }

    /// Creates an InvalidSortField error
    pub fn invalid_sort_field(field: impl Into<String>) -> Self {
        StoreError::InvalidSortField {
            field: field.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        StoreError::Connection {
            message: message.into(),
        }
    }

    /// Creates a Backend error without an underlying source
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Backend error wrapping its cause
    pub fn backend_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StoreError::Backend {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Marker trait for all domain store ports
///
/// Store traits extend this marker so implementations are guaranteed to be
/// shareable across request tasks.
pub trait DomainStore: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_entity_and_id() {
        let error = StoreError::not_found("Vital", 42);
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Vital"));
        assert!(error.to_string().contains("42"));
    }

    #[test]
    fn sort_field_error_names_the_field() {
        let error = StoreError::invalid_sort_field("shoeSize");
        assert!(!error.is_not_found());
        assert!(error.to_string().contains("shoeSize"));
    }
}
