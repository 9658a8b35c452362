// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod fields;
mod filters;
mod ordering;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use fields::UserField;
pub use filters::{Comparison, DeveloperActivityFilter, PermissionFilter, PermissionPredicate};
pub use ordering::{
    DeveloperSort, DeveloperStatsColumn, SortDirection, UserListColumn, UserListSort,
};
pub use types::{AchievementFlag, AwardType, ClaimStatus, Permissions, TicketState, UnlockMode};
pub use validation::{
    USERNAME_MAX_LEN, USERNAME_MIN_LEN, is_valid_username, validate_username_format,
};
