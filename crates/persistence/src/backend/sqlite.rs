// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-specific backend utilities.
//!
//! `SQLite` has no server-side settings, so every connection is configured
//! here right after it opens:
//! - `foreign_keys` must be switched on per connection
//! - `busy_timeout` lets reads wait out a writer's lock instead of failing
//! - file databases switch to WAL so readers never block the writer

use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// `SQLite` migrations, the default backend for development and tests.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How long a statement waits on a locked database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct IndexCollation {
    #[diesel(sql_type = Text)]
    collation: String,
}

#[derive(QueryableByName)]
struct JournalModePragma {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

/// Runs a PRAGMA that returns nothing useful.
fn set_pragma(conn: &mut SqliteConnection, pragma: &str) -> Result<(), PersistenceError> {
    // NOTE: PRAGMA is raw SQL (Diesel has no PRAGMA DSL)
    diesel::sql_query(format!("PRAGMA {pragma}"))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("PRAGMA {pragma}: {e}")))?;
    Ok(())
}

/// Verifies that foreign key enforcement is enabled.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let pragma: ForeignKeysPragma = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;

    if pragma.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    debug!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Verifies that the unique index on `UserAccounts.User` compares with
/// `NOCASE`.
///
/// # Errors
///
/// Returns an error if the index is missing or compares case-sensitively.
pub fn verify_username_collation(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let index: Option<IndexCollation> = diesel::sql_query(
        "SELECT ii.coll AS collation \
         FROM pragma_index_list('UserAccounts') AS il, pragma_index_xinfo(il.name) AS ii \
         WHERE il.\"unique\" = 1 AND ii.name = 'User'",
    )
    .get_result(conn)
    .optional()?;

    match index {
        Some(IndexCollation { collation }) if collation.eq_ignore_ascii_case("NOCASE") => {
            debug!("SQLite username collation is NOCASE");
            Ok(())
        }
        Some(IndexCollation { collation }) => {
            Err(PersistenceError::CaseSensitiveUsernames { collation })
        }
        None => Err(PersistenceError::CaseSensitiveUsernames {
            collation: String::from("none"),
        }),
    }
}

/// Opens a `SQLite` database, configures the connection and applies
/// pending migrations.
///
/// # Arguments
///
/// * `database_url` - A file path or `SQLite` URI
///
/// # Errors
///
/// Returns an error if the connection, configuration or migrations fail.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Initializing SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    set_pragma(&mut conn, "foreign_keys = ON")?;
    set_pragma(&mut conn, &format!("busy_timeout = {BUSY_TIMEOUT_MS}"))?;

    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Switches a file database to write-ahead logging.
///
/// `SQLite` answers with the journal mode actually in effect, which stays
/// `memory` for in-memory databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA fails or WAL mode could not be enabled.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let pragma: JournalModePragma =
        diesel::sql_query("PRAGMA journal_mode = WAL").get_result(conn)?;

    if !pragma.journal_mode.eq_ignore_ascii_case("wal") {
        return Err(PersistenceError::InitializationError(format!(
            "WAL mode unavailable; journal mode is '{}'",
            pragma.journal_mode
        )));
    }

    debug!("SQLite WAL mode enabled");
    Ok(())
}
