// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Shortest accepted username.
pub const USERNAME_MIN_LEN: usize = 2;

/// Longest accepted username.
pub const USERNAME_MAX_LEN: usize = 20;

/// Validates that a username has an acceptable format.
///
/// This function only checks the shape of the string. It does NOT check
/// whether the user exists (that requires the database).
///
/// # Arguments
///
/// * `username` - The candidate username
///
/// # Returns
///
/// * `Ok(())` if the username is well-formed
/// * `Err(DomainError::InvalidUsername)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The username is empty
/// - The username is shorter than 2 or longer than 20 characters
/// - The username contains anything other than ASCII letters and digits
pub fn validate_username_format(username: &str) -> Result<(), DomainError> {
    if username.is_empty() {
        return Err(DomainError::InvalidUsername(String::from("Username cannot be empty")));
    }

    // Rule: only ASCII alphanumerics, so byte length equals character count
    if let Some(bad) = username.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(DomainError::InvalidUsername(format!(
            "Username contains invalid character '{bad}'"
        )));
    }

    let len: usize = username.len();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(DomainError::InvalidUsername(format!(
            "Username must be between {USERNAME_MIN_LEN} and {USERNAME_MAX_LEN} characters, got {len}"
        )));
    }

    Ok(())
}

/// Returns whether a username passes [`validate_username_format`].
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    validate_username_format(username).is_ok()
}
