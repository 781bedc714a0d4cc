//! Pagination DTOs

use serde::{Deserialize, Serialize};

use core_kernel::{Page, PageRequest, Sort};

use crate::error::ApiError;

fn default_page_size() -> u32 {
    core_kernel::pagination::DEFAULT_PAGE_SIZE
}

/// Pagination query parameters: `?page=0&size=20&sort=weight,desc`
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
    #[serde(default)]
    pub sort: Option<String>,
}

impl PageQuery {
    /// Converts the raw query into a `PageRequest`, parsing the sort
    /// expression.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BadRequest` for a malformed sort expression.
    pub fn into_page_request(self) -> Result<PageRequest, ApiError> {
        let mut request = PageRequest::new(self.page, self.size);
        if let Some(expression) = &self.sort {
            let sort = Sort::parse(expression)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            request = request.with_sort(sort);
        }
        Ok(request)
    }
}

/// One page of results: items plus total metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub size: u32,
    pub total_pages: u64,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        Self {
            items: page.items,
            total_count: page.total_count,
            page: page.page,
            size: page.size,
            total_pages,
        }
    }
}
