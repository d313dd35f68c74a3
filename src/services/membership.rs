//! Membership Service
//!
//! Sole authority over member records: every read and write of the `users`
//! table passes through here. Enforces the lifecycle rules — 30-day
//! subscription windows, reactivation resets, non-stacking renewals.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use crate::models::member::{
    Member, MemberCreateRequest, MemberStats, MemberUpdateRequest, ProgramType,
};
use crate::services::subscription;
use crate::storage::database::DbPool;
use crate::storage::Database;
use crate::utils::error::{AppError, AppResult};

const MEMBER_COLUMNS: &str = "id, name, phone, program_type, diet, training, coach, \
                              registration_date, expiration_date, active";

/// Service for managing member records
pub struct MembershipService {
    pool: DbPool,
}

impl MembershipService {
    /// Create a new MembershipService with a database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create from a Database reference
    pub fn from_database(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    /// Register a new member. The registration instant opens the first
    /// 30-day window; field validation is the caller's responsibility.
    pub fn create_member(&self, request: MemberCreateRequest) -> AppResult<Member> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let now = Utc::now();
        let expiration = subscription::expiration_from(now);

        conn.execute(
            "INSERT INTO users (name, phone, program_type, diet, training, coach,
                                registration_date, expiration_date, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                request.name,
                request.phone,
                request.program_type.as_str(),
                request.diet as i32,
                request.training as i32,
                request.coach as i32,
                now.to_rfc3339(),
                expiration.to_rfc3339(),
                request.active as i32,
            ],
        )?;

        let id = conn.last_insert_rowid();
        drop(conn);
        tracing::info!(member_id = id, "member registered");

        self.get_member(id)?
            .ok_or_else(|| AppError::database("Failed to read back created member"))
    }

    /// Edit an existing member. A false→true transition of the
    /// administrative flag opens a fresh 30-day window in the same update;
    /// otherwise the expiration is untouched.
    pub fn update_member(&self, id: i64, request: MemberUpdateRequest) -> AppResult<Member> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let currently_active: bool = conn
            .query_row(
                "SELECT active FROM users WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| AppError::not_found(format!("Member not found: {}", id)))?;

        if request.active && !currently_active {
            let expiration = subscription::expiration_from(Utc::now());
            conn.execute(
                "UPDATE users SET name = ?1, phone = ?2, program_type = ?3, diet = ?4,
                                  training = ?5, coach = ?6, active = ?7, expiration_date = ?8
                 WHERE id = ?9",
                params![
                    request.name,
                    request.phone,
                    request.program_type.as_str(),
                    request.diet as i32,
                    request.training as i32,
                    request.coach as i32,
                    request.active as i32,
                    expiration.to_rfc3339(),
                    id,
                ],
            )?;
            tracing::info!(member_id = id, "member reactivated, subscription reset");
        } else {
            conn.execute(
                "UPDATE users SET name = ?1, phone = ?2, program_type = ?3, diet = ?4,
                                  training = ?5, coach = ?6, active = ?7
                 WHERE id = ?8",
                params![
                    request.name,
                    request.phone,
                    request.program_type.as_str(),
                    request.diet as i32,
                    request.training as i32,
                    request.coach as i32,
                    request.active as i32,
                    id,
                ],
            )?;
        }

        drop(conn);
        self.get_member(id)?
            .ok_or_else(|| AppError::database("Failed to read back updated member"))
    }

    /// Renew a membership: a fresh 30-day window from now and an active
    /// administrative flag, regardless of prior state. Renewals never
    /// stack onto the previous expiration.
    pub fn renew_membership(&self, id: i64) -> AppResult<Member> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let expiration = subscription::expiration_from(Utc::now());
        let affected = conn.execute(
            "UPDATE users SET expiration_date = ?1, active = 1 WHERE id = ?2",
            params![expiration.to_rfc3339(), id],
        )?;

        if affected == 0 {
            return Err(AppError::not_found(format!("Member not found: {}", id)));
        }

        drop(conn);
        tracing::info!(member_id = id, "membership renewed");

        self.get_member(id)?
            .ok_or_else(|| AppError::database("Failed to read back renewed member"))
    }

    /// Remove a member record entirely. Deleting an absent id is a no-op.
    pub fn delete_member(&self, id: i64) -> AppResult<()> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let affected = conn.execute("DELETE FROM users WHERE id = ?1", params![id])?;
        if affected == 0 {
            tracing::debug!(member_id = id, "delete of absent member ignored");
        } else {
            tracing::info!(member_id = id, "member deleted");
        }
        Ok(())
    }

    /// Get a single member by id
    pub fn get_member(&self, id: i64) -> AppResult<Option<Member>> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let member = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE id = ?1", MEMBER_COLUMNS),
                params![id],
                row_to_member,
            )
            .optional()?;

        Ok(member)
    }

    /// All members in storage order
    pub fn list_members(&self) -> AppResult<Vec<Member>> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let mut stmt = conn.prepare(&format!("SELECT {} FROM users", MEMBER_COLUMNS))?;
        let rows = stmt.query_map([], row_to_member)?;

        let mut members = Vec::new();
        for row in rows {
            members.push(row?);
        }
        Ok(members)
    }

    /// Members whose name or phone contains `query` as a substring.
    /// An empty query matches every row.
    pub fn search_members(&self, query: &str) -> AppResult<Vec<Member>> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let pattern = format!("%{}%", query);
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM users WHERE name LIKE ?1 OR phone LIKE ?2",
            MEMBER_COLUMNS
        ))?;
        let rows = stmt.query_map(params![pattern, pattern], row_to_member)?;

        let mut members = Vec::new();
        for row in rows {
            members.push(row?);
        }
        Ok(members)
    }

    /// Aggregate counts over the administrative flag. Derived subscription
    /// expiry never enters these numbers.
    pub fn member_stats(&self) -> AppResult<MemberStats> {
        let conn = self
            .pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))?;

        let (total, active): (i64, i64) = conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(active), 0) FROM users",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(MemberStats {
            total,
            active,
            inactive: total - active,
        })
    }
}

fn row_to_member(row: &rusqlite::Row) -> rusqlite::Result<Member> {
    let program_type: String = row.get(3)?;
    Ok(Member {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        program_type: ProgramType::from_stored(&program_type),
        diet: row.get(4)?,
        training: row.get(5)?,
        coach: row.get(6)?,
        registration_date: parse_timestamp(row, 7)?,
        expiration_date: parse_timestamp(row, 8)?,
        active: row.get(9)?,
    })
}

fn parse_timestamp(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
