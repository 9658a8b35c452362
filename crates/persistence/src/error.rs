// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use userdb_domain::DomainError;

/// Errors returned by the persistence adapter.
///
/// A record that does not exist is not an error: lookups answer `Ok(None)`
/// and listings answer an empty collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The database reported an error while running a statement.
    DatabaseError(String),
    /// The connection could not be established.
    DatabaseConnectionFailed(String),
    /// Embedded migrations could not be applied.
    MigrationFailed(String),
    /// A setup or verification statement failed.
    QueryFailed(String),
    /// A row could not be converted to or from JSON.
    SerializationError(String),
    /// The adapter could not be constructed from its arguments.
    InitializationError(String),
    /// The connection does not enforce foreign keys.
    ForeignKeyEnforcementNotEnabled,
    /// `UserAccounts.User` compares case-sensitively, so lookups by
    /// username would miss differently cased input.
    CaseSensitiveUsernames {
        /// The collation reported for the column.
        collation: String,
    },
    /// An aggregate count did not fit in `u32`.
    CountOutOfRange(i64),
    /// A stored value or caller input failed domain validation.
    Domain(DomainError),
    /// A statement that must return a row returned none.
    NotFound(String),
    /// Any other failure, including those reported by profile collaborators.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => write!(f, "Database connection failed: {msg}"),
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::CaseSensitiveUsernames { collation } => write!(
                f,
                "UserAccounts.User uses case-sensitive collation '{collation}'"
            ),
            Self::CountOutOfRange(value) => write!(f, "Count {value} is out of range"),
            Self::Domain(err) => write!(f, "Domain error: {err}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound(String::from("Record not found")),
            other => Self::DatabaseError(other.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}
