// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-dialect connection setup.
//!
//! `sqlite` and `mysql` each own their migrations, session settings and the
//! schema checks that have to read dialect-specific catalogs. The read
//! queries in `queries/` are shared between both.

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

/// Scheme prefix that selects the `MySQL` backend in [`BackendKind::from_url`].
const MYSQL_SCHEME: &str = "mysql://";

/// Which backend a connection URL selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// A private in-memory `SQLite` database.
    SqliteMemory,
    /// A file-based `SQLite` database.
    SqliteFile,
    /// A `MySQL`/`MariaDB` server.
    Mysql,
}

impl BackendKind {
    /// Classifies a connection URL.
    ///
    /// `mysql://` URLs select `MySQL`, `:memory:` selects an in-memory
    /// `SQLite` database, and anything else is treated as a `SQLite` file path.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        if url.starts_with(MYSQL_SCHEME) {
            Self::Mysql
        } else if url == ":memory:" {
            Self::SqliteMemory
        } else {
            Self::SqliteFile
        }
    }
}

/// Schema checks a connection must pass before it serves queries.
pub trait PersistenceBackend: Connection {
    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;

    /// Verifies that `UserAccounts.User` compares case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the column compares case-sensitively.
    fn verify_username_collation(&mut self) -> Result<(), PersistenceError>;

    /// Runs every check in order.
    ///
    /// # Errors
    ///
    /// Returns the first failed check.
    fn run_startup_checks(&mut self) -> Result<(), PersistenceError> {
        self.verify_foreign_key_enforcement()?;
        self.verify_username_collation()
    }
}

impl PersistenceBackend for SqliteConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }

    fn verify_username_collation(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_username_collation(self)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }

    fn verify_username_collation(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_username_collation(self)
    }
}
