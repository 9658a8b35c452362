// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, UserField};

#[test]
fn test_column_names_parse_back() {
    for field in UserField::ALL {
        let parsed: UserField = field.column_name().parse().unwrap();
        assert_eq!(parsed, field);
    }
}

#[test]
fn test_private_columns_are_not_projectable() {
    for name in ["EmailAddress", "cookie", "APIKey", "Password"] {
        assert_eq!(
            name.parse::<UserField>(),
            Err(DomainError::UnknownUserField(String::from(name)))
        );
    }
}

#[test]
fn test_field_names_are_case_sensitive() {
    assert!("rapoints".parse::<UserField>().is_err());
    assert_eq!("RAPoints".parse::<UserField>(), Ok(UserField::RaPoints));
}

#[test]
fn test_parse_list_stops_at_first_unknown() {
    let fields = UserField::parse_list(&["User", "Motto"]).unwrap();
    assert_eq!(fields, vec![UserField::User, UserField::Motto]);

    let err = UserField::parse_list(&["User", "User; DROP TABLE", "cookie"]).unwrap_err();
    assert_eq!(
        err,
        DomainError::UnknownUserField(String::from("User; DROP TABLE"))
    );
}
