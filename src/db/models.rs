//! Domain models for the mentorship database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

// =============================================================================
// Query Types for Pagination and Sorting
// =============================================================================

/// Sort order for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

/// Base pagination and sorting options - composed into entity-specific queries.
#[derive(Debug, Clone, Default)]
pub struct PageSort {
    /// Maximum number of items to return.
    pub limit: Option<usize>,
    /// Number of items to skip.
    pub offset: Option<usize>,
    /// Field to sort by (validated per entity type).
    pub sort_by: Option<String>,
    /// Sort order (ascending or descending).
    pub sort_order: Option<SortOrder>,
}

/// Query for Mentors - pagination only.
#[derive(Debug, Clone, Default)]
pub struct MentorQuery {
    pub page: PageSort,
}

/// Query for Students. Filters combine with AND.
#[derive(Debug, Clone, Default)]
pub struct StudentQuery {
    pub page: PageSort,
    /// Only students referencing this mentor.
    pub mentor_id: Option<Id>,
    /// `Some(true)` keeps unassigned students, `Some(false)` keeps assigned ones.
    pub unassigned: Option<bool>,
    /// Restrict to these student IDs.
    pub ids: Option<Vec<Id>>,
}

/// Result of a paginated list query.
#[derive(Debug, Clone)]
pub struct ListResult<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Total count of all matching items (before pagination).
    pub total: usize,
    /// Limit that was applied.
    pub limit: Option<usize>,
    /// Offset that was applied.
    pub offset: usize,
}

/// 12-character hex ID type used for all entities.
pub type Id = String;

/// A mentor supervising zero or more students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: Id,
    pub name: String,
    pub email: String,
}

/// A student, optionally linked to exactly one mentor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: Id,
    pub name: String,
    pub email: String,
    /// Mentor reference (N:1). `None` while unassigned.
    #[serde(default)]
    pub mentor_id: Option<Id>,
}

