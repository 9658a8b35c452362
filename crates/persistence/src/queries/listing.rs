// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ranked user listing.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use userdb_domain::{PermissionFilter, SortDirection, UserListColumn, UserListSort};

use crate::data_models::UserListEntry;
use crate::diesel_schema::user_accounts;
use crate::error::PersistenceError;

/// Window and visibility options for the ranked user listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserListQuery<'a> {
    pub sort: UserListSort,
    pub offset: u32,
    pub limit: u32,
    /// The signed-in user, who always sees their own row.
    pub requesting_username: Option<&'a str>,
    pub include_untracked: bool,
}

backend_fn! {
/// Loads one window of the user listing.
///
/// The caller resolves the permission filter first; an unresolvable filter
/// means an empty listing and never reaches this function.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_users(
    conn: &mut _,
    filter: PermissionFilter,
    options: &UserListQuery<'_>,
) -> Result<Vec<UserListEntry>, PersistenceError> {
    let mut query = user_accounts::table
        .filter(user_accounts::deleted.is_null())
        .select(UserListEntry::as_select())
        .into_boxed();

    query = match filter {
        PermissionFilter::Exact(level) => {
            query.filter(user_accounts::permissions.eq(level.as_i32()))
        }
        PermissionFilter::AtLeast(level) => {
            query.filter(user_accounts::permissions.ge(level.as_i32()))
        }
        PermissionFilter::UntrackedOnly => query.filter(user_accounts::untracked.eq(true)),
    };

    if !options.include_untracked {
        query = match options.requesting_username {
            Some(requester) => query.filter(
                user_accounts::untracked
                    .eq(false)
                    .or(user_accounts::user.eq(requester.to_string())),
            ),
            None => query.filter(user_accounts::untracked.eq(false)),
        };
    }

    // The row ID follows the primary direction so the two directions of a
    // sort are exact mirrors even across ties.
    let (column, direction) = options.sort.key();
    query = match (column, direction) {
        (UserListColumn::Username, SortDirection::Asc) => query.order_by(user_accounts::user.asc()),
        (UserListColumn::Username, SortDirection::Desc) => {
            query.order_by(user_accounts::user.desc())
        }
        (UserListColumn::TotalPoints, SortDirection::Asc) => {
            query.order_by(user_accounts::ra_points.asc())
        }
        (UserListColumn::TotalPoints, SortDirection::Desc) => {
            query.order_by(user_accounts::ra_points.desc())
        }
        (UserListColumn::AchievementsAwarded, SortDirection::Asc) => {
            query.order_by(user_accounts::achievements_unlocked.asc())
        }
        (UserListColumn::AchievementsAwarded, SortDirection::Desc) => {
            query.order_by(user_accounts::achievements_unlocked.desc())
        }
        (UserListColumn::LastLogin, SortDirection::Asc) => {
            query.order_by(user_accounts::last_login.asc())
        }
        (UserListColumn::LastLogin, SortDirection::Desc) => {
            query.order_by(user_accounts::last_login.desc())
        }
    };
    query = match direction {
        SortDirection::Asc => query.then_order_by(user_accounts::id.asc()),
        SortDirection::Desc => query.then_order_by(user_accounts::id.desc()),
    };

    let rows = query
        .offset(i64::from(options.offset))
        .limit(i64::from(options.limit))
        .load::<UserListEntry>(conn)?;

    Ok(rows)
}
}
