// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row and payload types returned by the persistence adapter.
//!
//! Serialized keys match the legacy associative keys consumed by the
//! view layer, so most structs carry `PascalCase` renames plus a handful
//! of per-field overrides for the irregular legacy names.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use userdb_domain::{DomainError, Permissions};

use crate::diesel_schema::user_accounts;

/// A full `UserAccounts` row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = user_accounts)]
#[serde(rename_all = "PascalCase")]
pub struct UserAccount {
    #[serde(rename = "ID")]
    pub id: i64,
    pub user: String,
    pub email_address: String,
    pub permissions: i32,
    #[serde(rename = "RAPoints")]
    pub ra_points: i32,
    #[serde(rename = "RASoftcorePoints")]
    pub ra_softcore_points: i32,
    #[serde(rename = "TrueRAPoints")]
    pub true_ra_points: i32,
    #[serde(rename = "cookie")]
    pub cookie: Option<String>,
    #[serde(rename = "websitePrefs")]
    pub website_prefs: Option<i32>,
    pub unread_message_count: Option<i32>,
    pub motto: String,
    pub user_wall_active: bool,
    #[serde(rename = "APIKey")]
    pub api_key: Option<String>,
    pub contrib_count: i32,
    pub contrib_yield: i32,
    pub rich_presence_msg: Option<String>,
    #[serde(rename = "LastGameID")]
    pub last_game_id: i64,
    pub last_login: Option<String>,
    #[serde(rename = "LastActivityID")]
    pub last_activity_id: i64,
    pub created: Option<String>,
    pub delete_requested: Option<String>,
    pub deleted: Option<String>,
    pub untracked: bool,
    #[serde(rename = "achievements_unlocked")]
    pub achievements_unlocked: i32,
}

impl UserAccount {
    /// Returns the typed permission level.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored code is not a known level.
    pub fn permission_level(&self) -> Result<Permissions, DomainError> {
        Permissions::try_from(self.permissions)
    }

    /// Returns whether the account has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted.is_some()
    }
}

/// The account projection used for the signed-in user's own details.
///
/// `user` carries the stored casing, which callers should prefer over
/// whatever casing they looked the account up with.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = user_accounts)]
#[serde(rename_all = "PascalCase")]
pub struct AccountDetails {
    #[serde(rename = "ID")]
    pub id: i64,
    pub user: String,
    pub email_address: String,
    pub permissions: i32,
    #[serde(rename = "RAPoints")]
    pub ra_points: i32,
    #[serde(rename = "RASoftcorePoints")]
    pub ra_softcore_points: i32,
    #[serde(rename = "TrueRAPoints")]
    pub true_ra_points: i32,
    #[serde(rename = "cookie")]
    pub cookie: Option<String>,
    #[serde(rename = "websitePrefs")]
    pub website_prefs: Option<i32>,
    pub unread_message_count: Option<i32>,
    pub motto: String,
    pub user_wall_active: bool,
    #[serde(rename = "APIKey")]
    pub api_key: Option<String>,
    pub contrib_count: i32,
    pub contrib_yield: i32,
    pub rich_presence_msg: Option<String>,
    #[serde(rename = "LastGameID")]
    pub last_game_id: i64,
    pub last_login: Option<String>,
    #[serde(rename = "LastActivityID")]
    pub last_activity_id: i64,
    pub created: Option<String>,
    pub delete_requested: Option<String>,
    pub untracked: bool,
}

/// One row of the ranked user listing.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = user_accounts)]
#[serde(rename_all = "PascalCase")]
pub struct UserListEntry {
    #[serde(rename = "ID")]
    pub id: i64,
    pub user: String,
    #[serde(rename = "RAPoints")]
    pub ra_points: i32,
    #[serde(rename = "TrueRAPoints")]
    pub true_ra_points: i32,
    pub last_login: Option<String>,
    #[diesel(column_name = achievements_unlocked)]
    pub num_awarded: i32,
}

/// Per-author developer statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeveloperStats {
    pub author: String,
    pub permissions: i32,
    pub contrib_count: i32,
    pub contrib_yield: i32,
    /// Published achievements by this author.
    pub achievements: u32,
    /// Open or pending-request tickets against this author's achievements.
    pub open_tickets: u32,
    /// Tickets this user resolved on other authors' achievements.
    pub tickets_resolved_for_others: u32,
    pub last_login: Option<String>,
    /// Set claims in progress.
    pub active_claims: u32,
}

/// Completion award counts for one user across a set of games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AwardedUser {
    pub user: String,
    pub beaten_softcore: u32,
    pub beaten_hardcore: u32,
    pub completed: u32,
    pub mastered: u32,
}

/// Completion award counts for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AwardedGame {
    /// Game title, absent when the game has no `GameData` row.
    pub title: Option<String>,
    #[serde(rename = "ID")]
    pub id: i64,
    pub console_name: Option<String>,
    pub game_icon: Option<String>,
    pub beaten_softcore: u32,
    pub beaten_hardcore: u32,
    pub completed: u32,
    pub mastered: u32,
}
