//! Database utility functions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

use crate::db::{DbError, DbResult};

/// Length of generated entity IDs, in hex characters.
pub const ENTITY_ID_LEN: usize = 12;

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a 12-character hex ID for database entities.
///
/// The process-wide sequence keeps IDs distinct even when two entities are
/// created within the same clock tick.
pub fn generate_entity_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    hasher.update(seq.to_le_bytes());
    hasher
        .finalize()
        .iter()
        .take(ENTITY_ID_LEN / 2)
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Trim and validate the contact fields shared by mentors and students.
///
/// Returns the trimmed `(name, email)` pair.
pub fn validate_contact(name: &str, email: &str) -> DbResult<(String, String)> {
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() {
        return Err(DbError::Validation {
            message: "name cannot be empty".to_string(),
        });
    }

    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !well_formed {
        return Err(DbError::Validation {
            message: format!("'{}' is not a valid email address", email),
        });
    }

    Ok((name.to_string(), email.to_string()))
}

/// Collapse duplicate IDs, keeping first occurrence order.
pub fn dedup_ids(ids: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
