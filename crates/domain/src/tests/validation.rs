// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, is_valid_username, validate_username_format};

#[test]
fn test_valid_usernames() {
    assert!(validate_username_format("Alice").is_ok());
    assert!(validate_username_format("ab").is_ok());
    assert!(validate_username_format("Player2024").is_ok());
    assert!(validate_username_format("ABCDEFGHIJKLMNOPQRST").is_ok());
}

#[test]
fn test_empty_username_is_rejected() {
    let result = validate_username_format("");
    assert!(matches!(result, Err(DomainError::InvalidUsername(_))));
}

#[test]
fn test_username_length_bounds() {
    assert!(validate_username_format("a").is_err());
    assert!(validate_username_format("ABCDEFGHIJKLMNOPQRSTU").is_err());
}

#[test]
fn test_username_rejects_non_alphanumeric() {
    assert!(!is_valid_username("bad name"));
    assert!(!is_valid_username("robert'); DROP TABLE"));
    assert!(!is_valid_username("under_score"));
    assert!(!is_valid_username("dash-ed"));
    assert!(!is_valid_username("ünïcode"));
}

#[test]
fn test_invalid_character_is_reported() {
    let err = validate_username_format("a.b").unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidUsername(String::from("Username contains invalid character '.'"))
    );
}
