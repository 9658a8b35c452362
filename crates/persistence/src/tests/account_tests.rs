// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for single-user lookups and field projection.

use serde_json::{Value, json};
use userdb_domain::{DomainError, Permissions, UserField};

use crate::tests::{UserSeed, insert_user};
use crate::{LegacyResult, Persistence, PersistenceError};

fn seeded() -> Persistence {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create persistence");
    let alice = UserSeed::new(1, "Alice").points(500, 1234);
    insert_user(&mut persistence, &alice);
    insert_user(
        &mut persistence,
        &UserSeed::new(2, "Gone").deleted("2024-05-01 12:00:00"),
    );
    persistence
}

#[test]
fn test_account_details_any_casing_returns_stored_name() {
    let mut persistence = seeded();

    for lookup in ["alice", "ALICE", "Alice"] {
        let details = persistence
            .get_account_details(lookup)
            .unwrap()
            .unwrap_or_else(|| panic!("Alice should be found as '{lookup}'"));
        assert_eq!(details.user, "Alice");
        assert_eq!(details.ra_points, 500);
        assert_eq!(details.true_ra_points, 1234);
        assert_eq!(details.permissions, 1);
    }
}

#[test]
fn test_account_details_absent_user() {
    let mut persistence = seeded();
    assert!(persistence.get_account_details("Nobody").unwrap().is_none());
}

#[test]
fn test_account_details_soft_deleted_user() {
    let mut persistence = seeded();
    assert!(persistence.get_account_details("Gone").unwrap().is_none());

    // The full-row lookups do not hide deleted accounts
    let row = persistence.get_user_by_username("Gone").unwrap().unwrap();
    assert!(row.is_deleted());
    assert!(persistence.get_user_metadata_by_id(2).unwrap().is_some());
}

#[test]
fn test_permission_level_decodes_stored_code() {
    let mut persistence = seeded();
    insert_user(&mut persistence, &UserSeed::new(3, "Odd").permissions(9));

    let alice = persistence.get_user_by_username("Alice").unwrap().unwrap();
    assert_eq!(alice.permission_level(), Ok(Permissions::Registered));

    let odd = persistence.get_user_by_username("Odd").unwrap().unwrap();
    assert_eq!(
        odd.permission_level(),
        Err(DomainError::InvalidPermissions(9))
    );
}

#[test]
fn test_account_details_rejects_malformed_usernames() {
    let mut persistence = seeded();
    for bad in ["", "a", "Alice'--", "Al ice", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"] {
        assert!(
            persistence.get_account_details(bad).unwrap().is_none(),
            "'{bad}' should be rejected"
        );
    }
}

#[test]
fn test_user_id_lookup() {
    let mut persistence = seeded();
    assert_eq!(
        persistence.get_user_id_by_username("alice").unwrap(),
        Some(1)
    );
    assert_eq!(persistence.get_user_id_by_username("Nobody").unwrap(), None);
    assert_eq!(persistence.get_user_id_by_username("").unwrap(), None);

    assert_eq!(persistence.user_id_or_zero("Alice"), 1);
    assert_eq!(persistence.user_id_or_zero("Nobody"), 0);
    assert_eq!(persistence.user_id_or_zero(""), 0);
}

#[test]
fn test_user_metadata_by_id() {
    let mut persistence = seeded();
    let row = persistence.get_user_metadata_by_id(1).unwrap().unwrap();
    assert_eq!(row.user, "Alice");
    assert_eq!(row.email_address, "Alice@example.com");
    assert!(persistence.get_user_metadata_by_id(99).unwrap().is_none());
}

#[test]
fn test_validate_username_returns_canonical_casing() {
    let mut persistence = seeded();
    assert_eq!(
        persistence.validate_username("aLiCe").unwrap().as_deref(),
        Some("Alice")
    );
    assert_eq!(persistence.validate_username("Bob").unwrap(), None);
    assert_eq!(persistence.validate_username("").unwrap(), None);
}

#[test]
fn test_fields_by_username_projects_requested_columns() {
    let mut persistence = seeded();
    let fields = UserField::parse_list(&["User", "RAPoints", "TrueRAPoints", "Untracked"]).unwrap();

    let row = persistence
        .get_fields_by_username("alice", &fields)
        .unwrap()
        .unwrap();

    assert_eq!(row.len(), 4);
    assert_eq!(row["User"], json!("Alice"));
    assert_eq!(row["RAPoints"], json!(500));
    assert_eq!(row["TrueRAPoints"], json!(1234));
    assert_eq!(row["Untracked"], json!(false));
    assert!(!row.contains_key("EmailAddress"));
}

#[test]
fn test_fields_by_username_nullable_column() {
    let mut persistence = seeded();
    let row = persistence
        .get_fields_by_username("Alice", &[UserField::LastLogin, UserField::LastLogin])
        .unwrap()
        .unwrap();
    assert_eq!(row.len(), 1);
    assert_eq!(row["LastLogin"], Value::Null);
}

#[test]
fn test_fields_by_username_absent_user() {
    let mut persistence = seeded();
    let row = persistence
        .get_fields_by_username("Nobody", &[UserField::User])
        .unwrap();
    assert!(row.is_none());
}

#[test]
fn test_or_empty_collapses_errors() {
    let failed: Result<Option<i64>, PersistenceError> =
        Err(PersistenceError::QueryFailed(String::from("connection reset")));
    assert_eq!(failed.or_empty(), None);

    let failed: Result<Vec<i64>, PersistenceError> = Err(PersistenceError::Other(String::new()));
    assert!(failed.or_empty().is_empty());

    let ok: Result<Option<i64>, PersistenceError> = Ok(Some(7));
    assert_eq!(ok.or_empty(), Some(7));
}
