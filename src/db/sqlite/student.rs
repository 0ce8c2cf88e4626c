//! SQLite StudentRepository implementation.

use std::collections::HashMap;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::{ID_IN_JSON_SET, build_limit_offset_clause, build_order_clause, json_id_set};
use crate::db::utils::{dedup_ids, generate_entity_id, validate_contact};
use crate::db::{DbError, DbResult, Id, ListResult, Student, StudentQuery, StudentRepository};

const STUDENT_COLUMNS: &str = "id, name, email, mentor_id";

/// SQLx-backed student repository.
pub struct SqliteStudentRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn student_from_row(row: &SqliteRow) -> DbResult<Student> {
    Ok(Student {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        mentor_id: row.try_get("mentor_id")?,
    })
}

impl<'a> StudentRepository for SqliteStudentRepository<'a> {
    async fn create(&self, student: &Student) -> DbResult<Student> {
        let (name, email) = validate_contact(&student.name, &student.email)?;

        // Use provided ID if not empty, otherwise generate one
        let id = if student.id.is_empty() {
            generate_entity_id()
        } else {
            student.id.clone()
        };

        sqlx::query("INSERT INTO student (id, name, email, mentor_id) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&name)
            .bind(&email)
            .bind(&student.mentor_id)
            .execute(self.pool)
            .await?;

        Ok(Student {
            id,
            name,
            email,
            mentor_id: student.mentor_id.clone(),
        })
    }

    async fn get(&self, id: &str) -> DbResult<Student> {
        let sql = format!("SELECT {} FROM student WHERE id = ?", STUDENT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Student", id))?;
        student_from_row(&row)
    }

    async fn list(&self, query: Option<&StudentQuery>) -> DbResult<ListResult<Student>> {
        let default_query = StudentQuery::default();
        let query = query.unwrap_or(&default_query);

        let mut bind_values: Vec<String> = Vec::new();
        let mut where_conditions: Vec<String> = Vec::new();

        if let Some(mentor_id) = &query.mentor_id {
            where_conditions.push("mentor_id = ?".to_string());
            bind_values.push(mentor_id.clone());
        }

        match query.unassigned {
            Some(true) => where_conditions.push("mentor_id IS NULL".to_string()),
            Some(false) => where_conditions.push("mentor_id IS NOT NULL".to_string()),
            None => {}
        }

        if let Some(ids) = &query.ids {
            if ids.is_empty() {
                // An explicit empty ID set matches nothing
                where_conditions.push("0".to_string());
            } else {
                where_conditions.push(ID_IN_JSON_SET.to_string());
                bind_values.push(json_id_set(ids)?);
            }
        }

        let where_clause = if where_conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", where_conditions.join(" AND "))
        };

        let order_clause = build_order_clause(&query.page, &["name", "email"], "rowid");
        let limit_clause = build_limit_offset_clause(&query.page);

        let sql = format!(
            "SELECT {} FROM student {} {}{}",
            STUDENT_COLUMNS, where_clause, order_clause, limit_clause
        );
        let count_sql = format!("SELECT COUNT(*) FROM student {}", where_clause);

        let mut sql_query = sqlx::query(&sql);
        for value in &bind_values {
            sql_query = sql_query.bind(value.as_str());
        }
        let rows = sql_query.fetch_all(self.pool).await?;
        let items = rows
            .iter()
            .map(student_from_row)
            .collect::<DbResult<Vec<_>>>()?;

        let mut count_query = sqlx::query_scalar(&count_sql);
        for value in &bind_values {
            count_query = count_query.bind(value.as_str());
        }
        let total: i64 = count_query.fetch_one(self.pool).await?;

        Ok(ListResult {
            items,
            total: total as usize,
            limit: query.page.limit,
            offset: query.page.offset.unwrap_or(0),
        })
    }

    async fn set_mentor(&self, student_id: &str, mentor_id: &str) -> DbResult<Student> {
        let sql = format!(
            "UPDATE student SET mentor_id = ? WHERE id = ? RETURNING {}",
            STUDENT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(mentor_id)
            .bind(student_id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Student", student_id))?;
        student_from_row(&row)
    }

    async fn assign_unassigned(&self, student_ids: &[Id], mentor_id: &str) -> DbResult<Vec<Student>> {
        let ids = dedup_ids(student_ids);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // Eligibility (mentor_id IS NULL) and the write happen in one statement
        let sql = format!(
            "UPDATE student SET mentor_id = ? WHERE mentor_id IS NULL AND {} RETURNING {}",
            ID_IN_JSON_SET, STUDENT_COLUMNS
        );

        let rows = sqlx::query(&sql)
            .bind(mentor_id)
            .bind(json_id_set(&ids)?)
            .fetch_all(self.pool)
            .await?;

        let mut updated = rows
            .iter()
            .map(student_from_row)
            .collect::<DbResult<Vec<_>>>()?;

        // RETURNING order is unspecified; report in request order
        let position: HashMap<&str, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        updated.sort_by_key(|s| position.get(s.id.as_str()).copied().unwrap_or(usize::MAX));

        Ok(updated)
    }
}
