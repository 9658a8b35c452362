// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collapsed result view for callers ported from the legacy helpers.
//!
//! The legacy helpers answered every failure with an empty value, so a
//! missing record and an unreachable database looked the same. New code
//! should match on the `Result`; ported call sites can opt back into the
//! old behavior with [`LegacyResult::or_empty`], which at least logs what
//! was swallowed.

use tracing::warn;

use crate::error::PersistenceError;

/// Extension trait that collapses a failed query to an empty value.
pub trait LegacyResult<T> {
    /// Returns the value, or `T::default()` after logging the error.
    fn or_empty(self) -> T;
}

impl<T: Default> LegacyResult<T> for Result<T, PersistenceError> {
    fn or_empty(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Query failed; returning empty result");
                T::default()
            }
        }
    }
}
