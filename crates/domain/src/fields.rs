// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The allowlist of user columns that may be projected by name.
//!
//! Credentials and contact details (`EmailAddress`, `cookie`, `APIKey`)
//! are absent, so no caller can request them through a field
//! list.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A projectable `UserAccounts` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserField {
    Id,
    User,
    Permissions,
    RaPoints,
    RaSoftcorePoints,
    TrueRaPoints,
    WebsitePrefs,
    UnreadMessageCount,
    Motto,
    UserWallActive,
    ContribCount,
    ContribYield,
    RichPresenceMsg,
    LastGameId,
    LastLogin,
    LastActivityId,
    Created,
    DeleteRequested,
    Deleted,
    Untracked,
    AchievementsUnlocked,
}

impl UserField {
    /// Every projectable field, in table order.
    pub const ALL: [Self; 21] = [
        Self::Id,
        Self::User,
        Self::Permissions,
        Self::RaPoints,
        Self::RaSoftcorePoints,
        Self::TrueRaPoints,
        Self::WebsitePrefs,
        Self::UnreadMessageCount,
        Self::Motto,
        Self::UserWallActive,
        Self::ContribCount,
        Self::ContribYield,
        Self::RichPresenceMsg,
        Self::LastGameId,
        Self::LastLogin,
        Self::LastActivityId,
        Self::Created,
        Self::DeleteRequested,
        Self::Deleted,
        Self::Untracked,
        Self::AchievementsUnlocked,
    ];

    /// Returns the stored column name.
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::User => "User",
            Self::Permissions => "Permissions",
            Self::RaPoints => "RAPoints",
            Self::RaSoftcorePoints => "RASoftcorePoints",
            Self::TrueRaPoints => "TrueRAPoints",
            Self::WebsitePrefs => "websitePrefs",
            Self::UnreadMessageCount => "UnreadMessageCount",
            Self::Motto => "Motto",
            Self::UserWallActive => "UserWallActive",
            Self::ContribCount => "ContribCount",
            Self::ContribYield => "ContribYield",
            Self::RichPresenceMsg => "RichPresenceMsg",
            Self::LastGameId => "LastGameID",
            Self::LastLogin => "LastLogin",
            Self::LastActivityId => "LastActivityID",
            Self::Created => "Created",
            Self::DeleteRequested => "DeleteRequested",
            Self::Deleted => "Deleted",
            Self::Untracked => "Untracked",
            Self::AchievementsUnlocked => "achievements_unlocked",
        }
    }

    /// Parses a list of column names, rejecting the first one not on the
    /// allowlist.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownUserField` for the first unknown name.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>, DomainError> {
        names.iter().map(|n| n.as_ref().parse()).collect()
    }
}

impl FromStr for UserField {
    type Err = DomainError;

    /// Parses an exact column name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.column_name() == s)
            .ok_or_else(|| DomainError::UnknownUserField(s.to_string()))
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
