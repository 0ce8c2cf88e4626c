//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod helpers;
mod mentor;
mod student;

#[cfg(test)]
mod mentor_test;

pub use connection::SqliteDatabase;
pub use mentor::SqliteMentorRepository;
pub use student::SqliteStudentRepository;
