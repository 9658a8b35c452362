// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Comparison, DeveloperActivityFilter, PermissionFilter, Permissions};

#[test]
fn test_low_band_resolves_to_exact() {
    assert_eq!(
        PermissionFilter::resolve(-2, false),
        Some(PermissionFilter::Exact(Permissions::Spam))
    );
    assert_eq!(
        PermissionFilter::resolve(-1, false),
        Some(PermissionFilter::Exact(Permissions::Banned))
    );
    assert_eq!(
        PermissionFilter::resolve(0, true),
        Some(PermissionFilter::Exact(Permissions::Unregistered))
    );
}

#[test]
fn test_junior_developer_resolves_to_exact() {
    assert_eq!(
        PermissionFilter::resolve(2, false),
        Some(PermissionFilter::Exact(Permissions::JuniorDeveloper))
    );
}

#[test]
fn test_registered_band_resolves_to_at_least() {
    assert_eq!(
        PermissionFilter::resolve(1, false),
        Some(PermissionFilter::AtLeast(Permissions::Registered))
    );
    assert_eq!(
        PermissionFilter::resolve(3, false),
        Some(PermissionFilter::AtLeast(Permissions::Developer))
    );
    assert_eq!(
        PermissionFilter::resolve(4, false),
        Some(PermissionFilter::AtLeast(Permissions::Moderator))
    );
}

#[test]
fn test_out_of_band_filter() {
    for raw in [-3, 5, 99, i32::MIN, i32::MAX] {
        assert_eq!(PermissionFilter::resolve(raw, false), None);
        assert_eq!(
            PermissionFilter::resolve(raw, true),
            Some(PermissionFilter::UntrackedOnly)
        );
    }
}

#[test]
fn test_developer_activity_codes() {
    assert_eq!(
        DeveloperActivityFilter::from_code(1),
        DeveloperActivityFilter::Active
    );
    assert_eq!(
        DeveloperActivityFilter::from_code(6),
        DeveloperActivityFilter::JuniorOrInactive
    );
    assert_eq!(
        DeveloperActivityFilter::from_code(7),
        DeveloperActivityFilter::All
    );
    assert_eq!(
        DeveloperActivityFilter::from_code(0),
        DeveloperActivityFilter::All
    );
    assert_eq!(DeveloperActivityFilter::default().code(), 7);
}

#[test]
fn test_developer_activity_predicates() {
    let active = DeveloperActivityFilter::Active.predicate().unwrap();
    assert_eq!(active.comparison, Comparison::Ge);
    assert_eq!(active.level, Permissions::Developer);
    assert!(active.accepts(Permissions::Moderator));
    assert!(!active.accepts(Permissions::JuniorDeveloper));

    let junior = DeveloperActivityFilter::Junior.predicate().unwrap();
    assert!(junior.accepts(Permissions::JuniorDeveloper));
    assert!(!junior.accepts(Permissions::Developer));

    let inactive = DeveloperActivityFilter::Inactive.predicate().unwrap();
    assert!(inactive.accepts(Permissions::Registered));
    assert!(inactive.accepts(Permissions::Banned));
    assert!(!inactive.accepts(Permissions::JuniorDeveloper));

    let not_junior = DeveloperActivityFilter::NotJunior.predicate().unwrap();
    assert_eq!(not_junior.comparison.as_sql(), "<>");
    assert!(not_junior.accepts(Permissions::Developer));
    assert!(!not_junior.accepts(Permissions::JuniorDeveloper));

    assert!(DeveloperActivityFilter::All.predicate().is_none());
}
