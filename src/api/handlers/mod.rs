//! HTTP handlers.

mod assignments;
mod mentors;
mod students;
mod system;

#[cfg(test)]
mod assignments_test;
#[cfg(test)]
pub(crate) mod test_support;

pub use assignments::*;
pub use mentors::*;
pub use students::*;
pub use system::*;

pub use super::error::ErrorResponse;

use crate::db::{PageSort, SortOrder};

/// Page size used when a list request does not name one.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Build store pagination from list query parameters.
pub(crate) fn page_sort(
    limit: Option<usize>,
    offset: Option<usize>,
    sort: Option<&str>,
    order: Option<&str>,
) -> PageSort {
    PageSort {
        limit: Some(limit.unwrap_or(DEFAULT_PAGE_LIMIT)),
        offset,
        sort_by: sort.map(str::to_string),
        sort_order: order.and_then(|o| o.parse::<SortOrder>().ok()),
    }
}
