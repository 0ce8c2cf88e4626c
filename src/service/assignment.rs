//! Mentor/student assignment service.
//!
//! Owns every relationship rule between students and mentors:
//!
//! 1. Bulk assignment only touches students that exist and are unassigned.
//!    Eligibility and the write are a single atomic store operation.
//! 2. Single reassignment overwrites unconditionally.
//! 3. Both writes require the target mentor to exist.
//! 4. "Student not found" and "student has no mentor" are distinct results.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::db::{
    Database, DbError, Id, ListResult, Mentor, MentorQuery, MentorRepository, Student,
    StudentQuery, StudentRepository,
};
use crate::service::{ServiceError, ServiceResult};

/// Fields accepted when creating a mentor.
#[derive(Debug, Clone)]
pub struct NewMentor {
    pub name: String,
    pub email: String,
}

/// Fields accepted when creating a student. Students always start unassigned.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

/// Outcome of a bulk assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// At least one student was assigned; `students` holds the updated records.
    Assigned {
        mentor_id: Id,
        students: Vec<Student>,
    },
    /// None of the requested students was eligible. Nothing was written.
    NoEligibleStudents,
}

impl AssignOutcome {
    /// Number of students written by the operation.
    pub fn modified_count(&self) -> usize {
        match self {
            AssignOutcome::Assigned { students, .. } => students.len(),
            AssignOutcome::NoEligibleStudents => 0,
        }
    }
}

/// Service for mentor/student relationship operations.
///
/// Generic over `D: Database`; the store handle is injected at construction.
pub struct AssignmentService<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for AssignmentService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> AssignmentService<D> {
    pub fn new(db: impl Into<Arc<D>>) -> Self {
        Self { db: db.into() }
    }

    /// Get a reference to the underlying store.
    #[cfg(test)]
    pub(crate) fn db(&self) -> &D {
        &self.db
    }

    // =========================================================================
    // Entities
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn create_mentor(&self, new: NewMentor) -> ServiceResult<Mentor> {
        let mentor = self
            .db
            .mentors()
            .create(&Mentor {
                id: String::new(),
                name: new.name,
                email: new.email,
            })
            .await?;

        info!(mentor_id = %mentor.id, "Created mentor");
        Ok(mentor)
    }

    #[instrument(skip(self))]
    pub async fn create_student(&self, new: NewStudent) -> ServiceResult<Student> {
        let student = self
            .db
            .students()
            .create(&Student {
                id: String::new(),
                name: new.name,
                email: new.email,
                mentor_id: None,
            })
            .await?;

        info!(student_id = %student.id, "Created student");
        Ok(student)
    }

    pub async fn get_mentor(&self, mentor_id: &str) -> ServiceResult<Mentor> {
        Ok(self.db.mentors().get(mentor_id).await?)
    }

    pub async fn get_student(&self, student_id: &str) -> ServiceResult<Student> {
        Ok(self.db.students().get(student_id).await?)
    }

    pub async fn list_mentors(&self, query: &MentorQuery) -> ServiceResult<ListResult<Mentor>> {
        Ok(self.db.mentors().list(Some(query)).await?)
    }

    pub async fn list_students(&self, query: &StudentQuery) -> ServiceResult<ListResult<Student>> {
        Ok(self.db.students().list(Some(query)).await?)
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// Assign every eligible student in `student_ids` to `mentor_id`.
    ///
    /// Students that do not exist or already have a mentor are skipped
    /// without error. If nothing is eligible the outcome is
    /// `AssignOutcome::NoEligibleStudents` and the store is untouched.
    ///
    /// # Errors
    ///
    /// - `ServiceError::NotFound` - `mentor_id` does not name a mentor
    #[instrument(skip(self, student_ids), fields(requested = student_ids.len()))]
    pub async fn assign(&self, mentor_id: &str, student_ids: &[Id]) -> ServiceResult<AssignOutcome> {
        self.ensure_mentor_exists(mentor_id).await?;

        if student_ids.is_empty() {
            debug!("Empty student set, nothing to assign");
            return Ok(AssignOutcome::NoEligibleStudents);
        }

        let students = self
            .db
            .students()
            .assign_unassigned(student_ids, mentor_id)
            .await?;

        if students.is_empty() {
            info!("No eligible students among request");
            return Ok(AssignOutcome::NoEligibleStudents);
        }

        info!(assigned = students.len(), "Assigned students to mentor");
        Ok(AssignOutcome::Assigned {
            mentor_id: mentor_id.to_string(),
            students,
        })
    }

    /// Point one student at `mentor_id`, whatever its current mentor.
    ///
    /// # Errors
    ///
    /// - `ServiceError::NotFound` - the student or the mentor does not exist
    #[instrument(skip(self))]
    pub async fn reassign(&self, student_id: &str, mentor_id: &str) -> ServiceResult<Student> {
        self.ensure_mentor_exists(mentor_id).await?;

        let student = self.db.students().set_mentor(student_id, mentor_id).await?;

        info!("Reassigned student");
        Ok(student)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All students referencing `mentor_id`, in creation order.
    ///
    /// An unknown mentor yields an empty list rather than an error.
    #[instrument(skip(self))]
    pub async fn students_of(&self, mentor_id: &str) -> ServiceResult<Vec<Student>> {
        let query = StudentQuery {
            mentor_id: Some(mentor_id.to_string()),
            ..Default::default()
        };
        let result = self.db.students().list(Some(&query)).await?;
        Ok(result.items)
    }

    /// The mentor of `student_id`.
    ///
    /// Returns `Ok(None)` when the student exists but is unassigned, and
    /// `Err(ServiceError::NotFound)` when the student itself is missing.
    #[instrument(skip(self))]
    pub async fn mentor_of(&self, student_id: &str) -> ServiceResult<Option<Mentor>> {
        let student = self.db.students().get(student_id).await?;

        let Some(mentor_id) = student.mentor_id else {
            return Ok(None);
        };

        match self.db.mentors().get(&mentor_id).await {
            Ok(mentor) => Ok(Some(mentor)),
            Err(DbError::NotFound { .. }) => {
                warn!(%mentor_id, "Student references a mentor that does not exist");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn ensure_mentor_exists(&self, mentor_id: &str) -> ServiceResult<()> {
        if self.db.mentors().exists(mentor_id).await? {
            Ok(())
        } else {
            warn!(%mentor_id, "Rejected write to unknown mentor");
            Err(ServiceError::not_found("Mentor", mentor_id))
        }
    }
}
