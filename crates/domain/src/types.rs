// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Integer-coded domain enums.
//!
//! Every enum here is stored in the database as a small integer. Each one
//! converts from its code with `TryFrom<i32>`, back with `as_i32`, and
//! round-trips its variant name through `Display` / `FromStr`.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Generates the code and name conversions shared by every integer-coded enum.
///
/// The macro only emits conversion impls; the enum itself is written out
/// by hand so each variant keeps its own documentation.
macro_rules! int_coded {
    ($ty:ident, $kind:literal, $err:ident, { $($variant:ident = $code:literal),+ $(,)? }) => {
        impl $ty {
            /// Returns the integer code stored in the database.
            #[must_use]
            pub const fn as_i32(self) -> i32 {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Returns the variant name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl TryFrom<i32> for $ty {
            type Error = DomainError;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(DomainError::$err(code)),
                }
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(Self::$variant),)+
                    _ => Err(DomainError::UnknownName {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

/// A user's permission level.
///
/// Levels are ordered: comparisons between variants follow their codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permissions {
    /// Account flagged as spam.
    Spam,
    /// Banned account.
    Banned,
    /// Account created but email not confirmed.
    Unregistered,
    /// Regular member.
    Registered,
    /// Developer on probation.
    JuniorDeveloper,
    /// Full developer.
    Developer,
    /// Site moderator.
    Moderator,
}

int_coded!(Permissions, "permission level", InvalidPermissions, {
    Spam = -2,
    Banned = -1,
    Unregistered = 0,
    Registered = 1,
    JuniorDeveloper = 2,
    Developer = 3,
    Moderator = 4,
});

impl Permissions {
    /// Returns whether this level is in the low band (`Spam..=Unregistered`).
    #[must_use]
    pub const fn is_low_band(self) -> bool {
        matches!(self, Self::Spam | Self::Banned | Self::Unregistered)
    }
}

/// Site award categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardType {
    /// Completed (softcore) or mastered (hardcore) a game.
    Mastery,
    /// Milestone for achievements unlocked by other players.
    AchievementUnlocksYield,
    /// Milestone for points earned by other players.
    AchievementPointsYield,
    /// Patreon supporter badge.
    PatreonSupporter,
    /// Certified legend badge.
    CertifiedLegend,
    /// Beat a game in softcore or hardcore.
    GameBeaten,
}

int_coded!(AwardType, "award type", InvalidAwardType, {
    Mastery = 1,
    AchievementUnlocksYield = 2,
    AchievementPointsYield = 3,
    PatreonSupporter = 6,
    CertifiedLegend = 7,
    GameBeaten = 8,
});

impl AwardType {
    /// Award types whose `AwardData` is a game ID.
    #[must_use]
    pub const fn game() -> [Self; 2] {
        [Self::Mastery, Self::GameBeaten]
    }
}

/// The mode an award was earned in, stored in `AwardDataExtra`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnlockMode {
    Softcore,
    Hardcore,
}

int_coded!(UnlockMode, "unlock mode", InvalidUnlockMode, {
    Softcore = 0,
    Hardcore = 1,
});

/// Report state of an achievement ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketState {
    Closed,
    Open,
    Resolved,
    /// Waiting on the reporter for more information.
    Request,
}

int_coded!(TicketState, "ticket state", InvalidTicketState, {
    Closed = 0,
    Open = 1,
    Resolved = 2,
    Request = 3,
});

impl TicketState {
    /// States counted as open work against an achievement's author.
    #[must_use]
    pub const fn unresolved() -> [Self; 2] {
        [Self::Open, Self::Request]
    }
}

/// Status of a developer's claim on a game's achievement set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    Active,
    Complete,
    Dropped,
    InReview,
}

int_coded!(ClaimStatus, "claim status", InvalidClaimStatus, {
    Active = 0,
    Complete = 1,
    Dropped = 2,
    InReview = 3,
});

impl ClaimStatus {
    /// Statuses under which a claim is still being worked.
    #[must_use]
    pub const fn in_progress() -> [Self; 2] {
        [Self::Active, Self::InReview]
    }
}

/// Lifecycle flag of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementFlag {
    /// Published in the official set.
    OfficialCore,
    /// Unofficial; still counted for some author aggregates.
    Unofficial,
}

int_coded!(AchievementFlag, "achievement flag", InvalidAchievementFlag, {
    OfficialCore = 3,
    Unofficial = 5,
});
