//! Schema Migrations
//!
//! An explicit, ordered list of idempotent schema migrations applied every
//! time a database is opened. Each step is safe to re-run: table creation is
//! guarded by IF NOT EXISTS, column additions by a PRAGMA probe.

use rusqlite::Connection;

use crate::utils::error::AppResult;

/// A single named schema migration
pub struct Migration {
    pub name: &'static str,
    pub apply: fn(&Connection) -> AppResult<()>,
}

/// All migrations, in application order
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "create_users_table",
        apply: create_users_table,
    },
    Migration {
        name: "add_active_column",
        apply: add_active_column,
    },
    Migration {
        name: "index_users_active",
        apply: index_users_active,
    },
];

/// Apply every migration in order
pub fn apply_all(conn: &Connection) -> AppResult<()> {
    for migration in MIGRATIONS {
        (migration.apply)(conn)?;
        tracing::debug!(migration = migration.name, "schema migration applied");
    }
    Ok(())
}

/// Check whether a table has a given column (via PRAGMA table_info).
pub fn table_has_column(conn: &Connection, table: &str, column: &str) -> bool {
    let sql = format!("PRAGMA table_info({})", table);
    if let Ok(mut stmt) = conn.prepare(&sql) {
        if let Ok(rows) = stmt.query_map([], |row| row.get::<_, String>(1)) {
            for row in rows.flatten() {
                if row == column {
                    return true;
                }
            }
        }
    }
    false
}

/// The member table. Named `users` for compatibility with pre-existing
/// installations. Booleans are stored as 0/1, timestamps as RFC 3339 text.
fn create_users_table(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            program_type TEXT NOT NULL,
            diet BOOLEAN NOT NULL,
            training BOOLEAN NOT NULL,
            coach BOOLEAN NOT NULL,
            registration_date TEXT NOT NULL,
            expiration_date TEXT NOT NULL,
            active BOOLEAN NOT NULL DEFAULT 1
        )",
        [],
    )?;
    Ok(())
}

/// Stores created before the administrative flag existed lack the `active`
/// column; add it with a default of 1 (true). SQLite has no IF NOT EXISTS
/// for ALTER TABLE ADD COLUMN, so existence is probed via PRAGMA.
fn add_active_column(conn: &Connection) -> AppResult<()> {
    if !table_has_column(conn, "users", "active") {
        conn.execute(
            "ALTER TABLE users ADD COLUMN active BOOLEAN NOT NULL DEFAULT 1",
            [],
        )?;
    }
    Ok(())
}

/// Index for the aggregate stats queries over the administrative flag
fn index_users_active(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_users_active ON users(active)",
        [],
    )?;
    Ok(())
}
