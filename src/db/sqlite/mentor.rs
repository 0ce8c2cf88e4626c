//! SQLite MentorRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::{build_limit_offset_clause, build_order_clause};
use crate::db::utils::{generate_entity_id, validate_contact};
use crate::db::{DbError, DbResult, ListResult, Mentor, MentorQuery, MentorRepository};

/// SQLx-backed mentor repository.
pub struct SqliteMentorRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn mentor_from_row(row: &SqliteRow) -> DbResult<Mentor> {
    Ok(Mentor {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
    })
}

impl<'a> MentorRepository for SqliteMentorRepository<'a> {
    async fn create(&self, mentor: &Mentor) -> DbResult<Mentor> {
        let (name, email) = validate_contact(&mentor.name, &mentor.email)?;

        // Use provided ID if not empty, otherwise generate one
        let id = if mentor.id.is_empty() {
            generate_entity_id()
        } else {
            mentor.id.clone()
        };

        sqlx::query("INSERT INTO mentor (id, name, email) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&name)
            .bind(&email)
            .execute(self.pool)
            .await?;

        Ok(Mentor { id, name, email })
    }

    async fn get(&self, id: &str) -> DbResult<Mentor> {
        let row = sqlx::query("SELECT id, name, email FROM mentor WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Mentor", id))?;
        mentor_from_row(&row)
    }

    async fn exists(&self, id: &str) -> DbResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM mentor WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(found.is_some())
    }

    async fn list(&self, query: Option<&MentorQuery>) -> DbResult<ListResult<Mentor>> {
        let default_query = MentorQuery::default();
        let query = query.unwrap_or(&default_query);

        let order_clause = build_order_clause(&query.page, &["name", "email"], "rowid");
        let limit_clause = build_limit_offset_clause(&query.page);
        let sql = format!(
            "SELECT id, name, email FROM mentor {}{}",
            order_clause, limit_clause
        );

        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;
        let items = rows
            .iter()
            .map(mentor_from_row)
            .collect::<DbResult<Vec<_>>>()?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mentor")
            .fetch_one(self.pool)
            .await?;

        Ok(ListResult {
            items,
            total: total as usize,
            limit: query.page.limit,
            offset: query.page.offset.unwrap_or(0),
        })
    }
}
