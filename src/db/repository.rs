//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//! Every operation is atomic at the single-record level; `assign_unassigned`
//! is additionally atomic across the whole requested set.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Id, ListResult, Mentor, MentorQuery, Student, StudentQuery},
};

/// Repository for Mentor operations.
pub trait MentorRepository: Send + Sync {
    /// Create a new mentor. An empty `id` is replaced by a generated one.
    fn create(&self, mentor: &Mentor) -> impl Future<Output = DbResult<Mentor>> + Send;

    /// Get a mentor by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Mentor>> + Send;

    /// Check whether a mentor with this ID exists.
    fn exists(&self, id: &str) -> impl Future<Output = DbResult<bool>> + Send;

    /// List mentors.
    fn list(
        &self,
        query: Option<&MentorQuery>,
    ) -> impl Future<Output = DbResult<ListResult<Mentor>>> + Send;
}

/// Repository for Student operations.
pub trait StudentRepository: Send + Sync {
    /// Create a new student. An empty `id` is replaced by a generated one.
    fn create(&self, student: &Student) -> impl Future<Output = DbResult<Student>> + Send;

    /// Get a student by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Student>> + Send;

    /// List students matching the query filters.
    fn list(
        &self,
        query: Option<&StudentQuery>,
    ) -> impl Future<Output = DbResult<ListResult<Student>>> + Send;

    /// Overwrite one student's mentor reference, returning the updated record.
    fn set_mentor(
        &self,
        student_id: &str,
        mentor_id: &str,
    ) -> impl Future<Output = DbResult<Student>> + Send;

    /// Assign every listed student that is currently unassigned to `mentor_id`.
    ///
    /// Eligibility is checked and written in one statement, so a student
    /// assigned concurrently is never overwritten. Returns the updated
    /// records in request order; missing and already-assigned IDs are skipped.
    fn assign_unassigned(
        &self,
        student_ids: &[Id],
        mentor_id: &str,
    ) -> impl Future<Output = DbResult<Vec<Student>>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Mentors<'a>: MentorRepository
    where
        Self: 'a;
    type Students<'a>: StudentRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the mentor repository.
    fn mentors(&self) -> Self::Mentors<'_>;

    /// Get the student repository.
    fn students(&self) -> Self::Students<'_>;
}
