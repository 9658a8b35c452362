// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permission filters for the ranked listings.

use crate::types::Permissions;
use serde::{Deserialize, Serialize};

/// How the user listing restricts rows by permission level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionFilter {
    /// Only users at exactly this level.
    Exact(Permissions),
    /// Users at this level or higher.
    AtLeast(Permissions),
    /// Only untracked users, regardless of level.
    UntrackedOnly,
}

impl PermissionFilter {
    /// Resolves a raw permission filter value.
    ///
    /// Low-band levels and `JuniorDeveloper` match exactly; `Registered`
    /// and the remaining higher levels match that level and above. Any other
    /// value selects untracked users when `include_untracked` is set and
    /// resolves to `None` otherwise, meaning the listing is empty.
    #[must_use]
    pub fn resolve(raw: i32, include_untracked: bool) -> Option<Self> {
        match Permissions::try_from(raw) {
            Ok(level) if level.is_low_band() || level == Permissions::JuniorDeveloper => {
                Some(Self::Exact(level))
            }
            Ok(level) => Some(Self::AtLeast(level)),
            Err(_) if include_untracked => Some(Self::UntrackedOnly),
            Err(_) => None,
        }
    }
}

/// Comparison operator of a permission predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    Eq,
    Ne,
    Ge,
    Le,
}

impl Comparison {
    /// Returns the SQL operator.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Ge => ">=",
            Self::Le => "<=",
        }
    }

    /// Applies the comparison to two permission levels.
    #[must_use]
    pub fn matches(self, lhs: Permissions, rhs: Permissions) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Ge => lhs >= rhs,
            Self::Le => lhs <= rhs,
        }
    }
}

/// A `Permissions <op> level` predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionPredicate {
    pub comparison: Comparison,
    pub level: Permissions,
}

impl PermissionPredicate {
    #[must_use]
    pub const fn new(comparison: Comparison, level: Permissions) -> Self {
        Self { comparison, level }
    }

    /// Returns whether a user at `level` satisfies the predicate.
    #[must_use]
    pub fn accepts(self, level: Permissions) -> bool {
        self.comparison.matches(level, self.level)
    }
}

/// Which developers the statistics listing includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeveloperActivityFilter {
    /// Full developers and above.
    Active,
    /// Junior developers only.
    Junior,
    /// Junior developers and above.
    ActiveOrJunior,
    /// Former developers, now at `Registered` or below.
    Inactive,
    /// Everyone except junior developers.
    NotJunior,
    /// Junior developers and former developers.
    JuniorOrInactive,
    /// No permission restriction.
    #[default]
    All,
}

impl DeveloperActivityFilter {
    /// Maps a legacy filter code (`1..=6`) to a filter.
    ///
    /// Anything else, including the usual default of 7, applies no
    /// restriction.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Active,
            2 => Self::Junior,
            3 => Self::ActiveOrJunior,
            4 => Self::Inactive,
            5 => Self::NotJunior,
            6 => Self::JuniorOrInactive,
            _ => Self::All,
        }
    }

    /// Returns the legacy code for this filter.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Active => 1,
            Self::Junior => 2,
            Self::ActiveOrJunior => 3,
            Self::Inactive => 4,
            Self::NotJunior => 5,
            Self::JuniorOrInactive => 6,
            Self::All => 7,
        }
    }

    /// Returns the permission predicate, or `None` when unrestricted.
    #[must_use]
    pub const fn predicate(self) -> Option<PermissionPredicate> {
        let predicate = match self {
            Self::Active => PermissionPredicate::new(Comparison::Ge, Permissions::Developer),
            Self::Junior => PermissionPredicate::new(Comparison::Eq, Permissions::JuniorDeveloper),
            Self::ActiveOrJunior => {
                PermissionPredicate::new(Comparison::Ge, Permissions::JuniorDeveloper)
            }
            Self::Inactive => PermissionPredicate::new(Comparison::Le, Permissions::Registered),
            Self::NotJunior => {
                PermissionPredicate::new(Comparison::Ne, Permissions::JuniorDeveloper)
            }
            Self::JuniorOrInactive => {
                PermissionPredicate::new(Comparison::Le, Permissions::JuniorDeveloper)
            }
            Self::All => return None,
        };
        Some(predicate)
    }
}
