//! Service layer for the mentorship relationship.
//!
//! # Components
//!
//! - `assignment` - Mentor/student creation, assignment and relationship queries
//! - `error` - Service error type shared by every operation

mod assignment;
mod error;

#[cfg(test)]
mod error_test;

pub use assignment::{AssignOutcome, AssignmentService, NewMentor, NewStudent};
pub use error::{ServiceError, ServiceResult};
