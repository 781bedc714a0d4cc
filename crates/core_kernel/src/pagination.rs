//! Pagination primitives
//!
//! Collection endpoints accept a page index, a page size, and an optional
//! sort expression, and return a bounded slice of the result set together
//! with total-count metadata. The types here carry that contract between the
//! HTTP layer and the stores.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::pagination::{PageRequest, Sort, SortDirection};
//!
//! let sort = Sort::parse("weight,desc").unwrap();
//! let request = PageRequest::new(2, 25).with_sort(sort);
//!
//! assert_eq!(request.offset(), 50);
//! assert_eq!(request.limit(), 25);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the page size a caller can request.
///
/// Requests above this are clamped rather than rejected, so a greedy client
/// still gets a valid (bounded) page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Error returned when a sort expression cannot be parsed
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid sort expression: '{expression}'")]
pub struct SortParseError {
    pub expression: String,
}

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Returns the SQL keyword for this direction
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// A single sort criterion: a field name as it appears on the wire plus a
/// direction.
///
/// Field names are not interpreted here; each store validates them against
/// its own whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    /// Creates an ascending sort on the given field
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort on the given field
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Parses the `field` / `field,asc` / `field,desc` query syntax.
    ///
    /// Direction defaults to ascending when omitted. Whitespace around either
    /// part is tolerated.
    ///
    /// # Errors
    ///
    /// Returns `SortParseError` for an empty field or an unrecognised
    /// direction token.
    pub fn parse(expression: &str) -> Result<Self, SortParseError> {
        let err = || SortParseError {
            expression: expression.to_string(),
        };

        let mut parts = expression.splitn(2, ',');
        let field = parts.next().unwrap_or("").trim();
        if field.is_empty() {
            return Err(err());
        }

        let direction = match parts.next().map(str::trim) {
            None | Some("asc") | Some("ASC") => SortDirection::Ascending,
            Some("desc") | Some("DESC") => SortDirection::Descending,
            Some(_) => return Err(err()),
        };

        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// A request for one page of a larger result set.
///
/// `page` is a 0-based index. `size` is clamped to `1..=MAX_PAGE_SIZE` at
/// construction, so downstream code never sees a zero or runaway limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

impl PageRequest {
    /// Creates a page request with the size clamped into bounds
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort: None,
        }
    }

    /// Attaches a sort criterion
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Number of rows to skip
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    /// Maximum number of rows to return
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the metadata needed to iterate the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    /// Creates a page from the items of one slice and the overall count
    pub fn new(items: Vec<T>, total_count: u64, request: &PageRequest) -> Self {
        Self {
            items,
            total_count,
            page: request.page,
            size: request.size,
        }
    }

    /// Total number of pages at this page size
    pub fn total_pages(&self) -> u64 {
        if self.total_count == 0 {
            0
        } else {
            self.total_count.div_ceil(u64::from(self.size))
        }
    }

    /// Converts the item type while keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_ascending() {
        let sort = Sort::parse("name").unwrap();
        assert_eq!(sort, Sort::ascending("name"));
    }

    #[test]
    fn parse_reads_direction() {
        assert_eq!(Sort::parse("id,desc").unwrap(), Sort::descending("id"));
        assert_eq!(Sort::parse("id, asc").unwrap(), Sort::ascending("id"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Sort::parse("").is_err());
        assert!(Sort::parse(",desc").is_err());
        assert!(Sort::parse("id,sideways").is_err());
    }

    #[test]
    fn size_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).size, 1);
        assert_eq!(PageRequest::new(0, 5000).size, MAX_PAGE_SIZE);
    }
}
