//! Generic pagination wrapper used by every listing endpoint.

use crate::model::api::PaginatedDto;

/// Requested page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of items per page, already clamped to the configured maximum.
    pub per_page: u64,
}

/// One page of domain items with metadata for navigation controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        let total_pages = if request.per_page == 0 {
            0
        } else {
            total.div_ceil(request.per_page)
        };

        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
            total_pages,
        }
    }

    /// Converts every item with `f` and wraps the result in a paginated DTO.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PaginatedDto<D> {
        PaginatedDto {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
