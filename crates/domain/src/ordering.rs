// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sort codes for the ranked listings.
//!
//! Callers pass small integer codes (from query strings or legacy
//! links). Each code maps to a closed enum, and each enum variant maps to a
//! typed `(column, direction)` pair. Unrecognized codes fall back to a
//! documented default instead of failing.

use serde::{Deserialize, Serialize};

/// Direction of an `ORDER BY` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword for this direction.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Columns the user listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserListColumn {
    Username,
    TotalPoints,
    /// Number of achievements the user has unlocked.
    AchievementsAwarded,
    LastLogin,
}

/// Sort order for the ranked user listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserListSort {
    #[default]
    UsernameAsc,
    UsernameDesc,
    PointsDesc,
    PointsAsc,
    AwardedDesc,
    AwardedAsc,
    LastLoginDesc,
    LastLoginAsc,
}

impl UserListSort {
    /// Maps a legacy sort code to a sort order.
    ///
    /// Codes `1..=4` select username, points, awarded count and last login;
    /// adding 10 flips the direction. Anything else sorts by username
    /// ascending.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            11 => Self::UsernameDesc,
            2 => Self::PointsDesc,
            12 => Self::PointsAsc,
            3 => Self::AwardedDesc,
            13 => Self::AwardedAsc,
            4 => Self::LastLoginDesc,
            14 => Self::LastLoginAsc,
            _ => Self::UsernameAsc,
        }
    }

    /// Returns the legacy code for this sort order.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::UsernameAsc => 1,
            Self::UsernameDesc => 11,
            Self::PointsDesc => 2,
            Self::PointsAsc => 12,
            Self::AwardedDesc => 3,
            Self::AwardedAsc => 13,
            Self::LastLoginDesc => 4,
            Self::LastLoginAsc => 14,
        }
    }

    /// Returns the column and direction this sort order applies.
    #[must_use]
    pub const fn key(self) -> (UserListColumn, SortDirection) {
        match self {
            Self::UsernameAsc => (UserListColumn::Username, SortDirection::Asc),
            Self::UsernameDesc => (UserListColumn::Username, SortDirection::Desc),
            Self::PointsDesc => (UserListColumn::TotalPoints, SortDirection::Desc),
            Self::PointsAsc => (UserListColumn::TotalPoints, SortDirection::Asc),
            Self::AwardedDesc => (UserListColumn::AchievementsAwarded, SortDirection::Desc),
            Self::AwardedAsc => (UserListColumn::AchievementsAwarded, SortDirection::Asc),
            Self::LastLoginDesc => (UserListColumn::LastLogin, SortDirection::Desc),
            Self::LastLoginAsc => (UserListColumn::LastLogin, SortDirection::Asc),
        }
    }

    /// Returns the sort order on the same column in the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::UsernameAsc => Self::UsernameDesc,
            Self::UsernameDesc => Self::UsernameAsc,
            Self::PointsDesc => Self::PointsAsc,
            Self::PointsAsc => Self::PointsDesc,
            Self::AwardedDesc => Self::AwardedAsc,
            Self::AwardedAsc => Self::AwardedDesc,
            Self::LastLoginDesc => Self::LastLoginAsc,
            Self::LastLoginAsc => Self::LastLoginDesc,
        }
    }
}

/// Result columns the developer statistics can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeveloperStatsColumn {
    Author,
    Achievements,
    ContribCount,
    ContribYield,
    OpenTickets,
    TicketsResolvedForOthers,
    LastLogin,
    ActiveClaims,
}

impl DeveloperStatsColumn {
    /// Returns the result alias used in the statistics statement.
    ///
    /// These are the only identifiers that reach the `ORDER BY` clause.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Achievements => "achievements",
            Self::ContribCount => "contrib_count",
            Self::ContribYield => "contrib_yield",
            Self::OpenTickets => "open_tickets",
            Self::TicketsResolvedForOthers => "tickets_resolved_for_others",
            Self::LastLogin => "last_login",
            Self::ActiveClaims => "active_claims",
        }
    }
}

/// Sort order for the developer statistics.
///
/// Every order is followed by an ascending open-ticket tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeveloperSort {
    /// Points awarded to other players for the author's achievements.
    ContribYield,
    /// Achievements by the author unlocked by other players.
    ContribCount,
    OpenTickets,
    TicketsResolvedForOthers,
    LastLogin,
    Author,
    ActiveClaims,
    #[default]
    Achievements,
}

impl DeveloperSort {
    /// Maps a legacy sort code (`1..=7`) to a sort order.
    ///
    /// Anything else sorts by published achievement count.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::ContribYield,
            2 => Self::ContribCount,
            3 => Self::OpenTickets,
            4 => Self::TicketsResolvedForOthers,
            5 => Self::LastLogin,
            6 => Self::Author,
            7 => Self::ActiveClaims,
            _ => Self::Achievements,
        }
    }

    /// Returns the primary column and direction for this sort order.
    #[must_use]
    pub const fn key(self) -> (DeveloperStatsColumn, SortDirection) {
        match self {
            Self::ContribYield => (DeveloperStatsColumn::ContribYield, SortDirection::Desc),
            Self::ContribCount => (DeveloperStatsColumn::ContribCount, SortDirection::Desc),
            Self::OpenTickets => (DeveloperStatsColumn::OpenTickets, SortDirection::Desc),
            Self::TicketsResolvedForOthers => (
                DeveloperStatsColumn::TicketsResolvedForOthers,
                SortDirection::Desc,
            ),
            Self::LastLogin => (DeveloperStatsColumn::LastLogin, SortDirection::Desc),
            Self::Author => (DeveloperStatsColumn::Author, SortDirection::Asc),
            Self::ActiveClaims => (DeveloperStatsColumn::ActiveClaims, SortDirection::Desc),
            Self::Achievements => (DeveloperStatsColumn::Achievements, SortDirection::Desc),
        }
    }

    /// Renders the full `ORDER BY` list, including the tie-break.
    #[must_use]
    pub fn order_by_clause(self) -> String {
        let (column, direction) = self.key();
        format!(
            "{} {}, {} ASC",
            column.alias(),
            direction.as_sql(),
            DeveloperStatsColumn::OpenTickets.alias()
        )
    }
}
