// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! Every query here is read-only.
//!
//! ## Module Organization
//!
//! - `accounts`: Single-user lookups and field projection
//! - `listing`: Ranked user listing
//! - `developers`: Per-author contribution statistics
//! - `awards`: Completion award aggregation
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod accounts;
pub mod awards;
pub mod developers;
pub mod listing;

use num_traits::ToPrimitive;

use crate::error::PersistenceError;

pub use accounts::{
    get_account_details_mysql, get_account_details_sqlite, get_user_by_username_mysql,
    get_user_by_username_sqlite, get_user_id_by_username_mysql, get_user_id_by_username_sqlite,
    get_user_metadata_by_id_mysql, get_user_metadata_by_id_sqlite, project_fields,
    validate_username_mysql, validate_username_sqlite,
};
pub use awards::{
    get_most_awarded_games_mysql, get_most_awarded_games_sqlite, get_most_awarded_users_mysql,
    get_most_awarded_users_sqlite,
};
pub use developers::{get_developer_stats_full_mysql, get_developer_stats_full_sqlite};
pub use listing::{UserListQuery, list_users_mysql, list_users_sqlite};

/// Converts an aggregate count column to `u32`.
///
/// # Errors
///
/// Returns `CountOutOfRange` for negative values and values above `u32::MAX`.
pub fn to_count(value: i64) -> Result<u32, PersistenceError> {
    value
        .to_u32()
        .ok_or(PersistenceError::CountOutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_conversion_rejects_out_of_range_values() {
        assert_eq!(to_count(0), Ok(0));
        assert_eq!(to_count(i64::from(u32::MAX)), Ok(u32::MAX));
        assert_eq!(to_count(-1), Err(PersistenceError::CountOutOfRange(-1)));

        let too_large = i64::from(u32::MAX) + 1;
        assert_eq!(
            to_count(too_large),
            Err(PersistenceError::CountOutOfRange(too_large))
        );
    }
}
