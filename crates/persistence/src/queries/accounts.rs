// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-user lookups against `UserAccounts`.
//!
//! Username comparisons are case-insensitive: the column collation
//! (`NOCASE` on `SQLite`, `_ci` on `MySQL`) makes `User = ?` match any casing.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use serde_json::{Map, Value};
use tracing::debug;
use userdb_domain::{UserField, validate_username_format};

use crate::data_models::{AccountDetails, UserAccount};
use crate::diesel_schema::user_accounts;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves the full account row for a username.
///
/// Soft-deleted accounts are returned; callers that must hide them should
/// check `UserAccount::is_deleted`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_user_by_username(
    conn: &mut _,
    username: &str,
) -> Result<Option<UserAccount>, PersistenceError> {
    if username.is_empty() {
        return Ok(None);
    }

    let account = user_accounts::table
        .filter(user_accounts::user.eq(username))
        .select(UserAccount::as_select())
        .first(conn)
        .optional()?;

    Ok(account)
}
}

backend_fn! {
/// Retrieves the account details projection for an active account.
///
/// Empty or malformed usernames are rejected without querying.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The username, in any casing
///
/// # Returns
///
/// * `Ok(Some(details))` for an existing account that is not soft-deleted
/// * `Ok(None)` otherwise
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_account_details(
    conn: &mut _,
    username: &str,
) -> Result<Option<AccountDetails>, PersistenceError> {
    if let Err(e) = validate_username_format(username) {
        debug!(error = %e, "Skipping account lookup for invalid username");
        return Ok(None);
    }

    let details = user_accounts::table
        .filter(user_accounts::user.eq(username))
        .filter(user_accounts::deleted.is_null())
        .select(AccountDetails::as_select())
        .first(conn)
        .optional()?;

    Ok(details)
}
}

backend_fn! {
/// Looks up the numeric ID for a username.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_user_id_by_username(
    conn: &mut _,
    username: &str,
) -> Result<Option<i64>, PersistenceError> {
    if username.is_empty() {
        return Ok(None);
    }

    let id = user_accounts::table
        .filter(user_accounts::user.eq(username))
        .select(user_accounts::id)
        .first::<i64>(conn)
        .optional()?;

    Ok(id)
}
}

backend_fn! {
/// Retrieves the full account row for a numeric user ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_user_metadata_by_id(
    conn: &mut _,
    user_id: i64,
) -> Result<Option<UserAccount>, PersistenceError> {
    let account = user_accounts::table
        .find(user_id)
        .select(UserAccount::as_select())
        .first(conn)
        .optional()?;

    Ok(account)
}
}

backend_fn! {
/// Returns the stored casing of a username, if the account exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn validate_username(
    conn: &mut _,
    candidate: &str,
) -> Result<Option<String>, PersistenceError> {
    if candidate.is_empty() {
        return Ok(None);
    }

    let canonical = user_accounts::table
        .filter(user_accounts::user.eq(candidate))
        .select(user_accounts::user)
        .first::<String>(conn)
        .optional()?;

    Ok(canonical)
}
}

/// Projects the requested allowlisted fields out of a full account row.
///
/// Keys are the stored column names; repeated fields collapse to one key.
///
/// # Errors
///
/// Returns an error if the row cannot be serialized.
pub fn project_fields(
    account: &UserAccount,
    fields: &[UserField],
) -> Result<Map<String, Value>, PersistenceError> {
    let Value::Object(mut row) = serde_json::to_value(account)? else {
        return Err(PersistenceError::SerializationError(String::from(
            "Account row did not serialize to an object",
        )));
    };

    let mut projected: Map<String, Value> = Map::new();
    for field in fields {
        let name: &str = field.column_name();
        let value: Value = row.remove(name).unwrap_or(Value::Null);
        projected.entry(name).or_insert(value);
    }

    Ok(projected)
}
