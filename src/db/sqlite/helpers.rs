//! Shared helper functions for SQLite repositories.

use crate::db::{DbError, DbResult, Id, PageSort, SortOrder};

/// Validate a sort field against the allowed column list.
/// Returns None for invalid fields (falls back to default).
pub fn validate_sort_field(field: &str, allowed: &[&'static str]) -> Option<&'static str> {
    allowed.iter().copied().find(|&allowed_field| allowed_field == field)
}

/// Build ORDER BY clause from PageSort parameters.
pub fn build_order_clause(
    page: &PageSort,
    allowed_fields: &[&'static str],
    default_field: &str,
) -> String {
    let sort_field = page
        .sort_by
        .as_deref()
        .and_then(|f| validate_sort_field(f, allowed_fields))
        .unwrap_or(default_field);

    let order = match page.sort_order.unwrap_or(SortOrder::Asc) {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };

    // rowid breaks ties so pages stay stable under equal sort keys
    if sort_field == "rowid" {
        format!("ORDER BY rowid {}", order)
    } else {
        format!("ORDER BY {} {}, rowid ASC", sort_field, order)
    }
}

/// Largest LIMIT/OFFSET value SQLite accepts (a signed 64-bit integer).
const MAX_SQL_INT: usize = i64::MAX as usize;

/// Build LIMIT/OFFSET clause from PageSort parameters.
/// Note: SQL requires LIMIT when using OFFSET. If offset is provided without limit,
/// we use LIMIT -1 (SQLite's "no limit" value). Values beyond `i64::MAX` are
/// clamped.
pub fn build_limit_offset_clause(page: &PageSort) -> String {
    let mut clause = String::new();

    if let Some(limit) = page.limit {
        clause.push_str(&format!(" LIMIT {}", limit.min(MAX_SQL_INT)));
    }

    if let Some(offset) = page.offset.filter(|&o| o > 0).map(|o| o.min(MAX_SQL_INT)) {
        if page.limit.is_none() {
            // SQLite requires LIMIT when using OFFSET
            clause.push_str(" LIMIT -1");
        }
        clause.push_str(&format!(" OFFSET {}", offset));
    }

    clause
}

/// SQL fragment matching `id` against a JSON array bound as one parameter.
///
/// Binding the set as a single value keeps arbitrarily large ID sets under
/// SQLite's bound-variable limit.
pub const ID_IN_JSON_SET: &str = "id IN (SELECT value FROM json_each(?))";

/// Encode an ID set as the JSON array bound to [`ID_IN_JSON_SET`].
pub fn json_id_set(ids: &[Id]) -> DbResult<String> {
    serde_json::to_string(ids).map_err(|e| DbError::Database {
        message: format!("failed to encode id set: {}", e),
    })
}
