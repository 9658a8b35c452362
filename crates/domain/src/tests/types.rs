// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AchievementFlag, AwardType, ClaimStatus, DomainError, Permissions, TicketState, UnlockMode,
};
use std::str::FromStr;

#[test]
fn test_permission_codes() {
    assert_eq!(Permissions::Spam.as_i32(), -2);
    assert_eq!(Permissions::Banned.as_i32(), -1);
    assert_eq!(Permissions::Unregistered.as_i32(), 0);
    assert_eq!(Permissions::Registered.as_i32(), 1);
    assert_eq!(Permissions::JuniorDeveloper.as_i32(), 2);
    assert_eq!(Permissions::Developer.as_i32(), 3);
    assert_eq!(Permissions::Moderator.as_i32(), 4);
}

#[test]
fn test_permission_from_code() {
    assert_eq!(Permissions::try_from(3), Ok(Permissions::Developer));
    assert_eq!(Permissions::try_from(-2), Ok(Permissions::Spam));
    assert_eq!(
        Permissions::try_from(5),
        Err(DomainError::InvalidPermissions(5))
    );
    assert_eq!(
        Permissions::try_from(-3),
        Err(DomainError::InvalidPermissions(-3))
    );
}

#[test]
fn test_permission_ordering_follows_codes() {
    assert!(Permissions::Spam < Permissions::Banned);
    assert!(Permissions::Unregistered < Permissions::Registered);
    assert!(Permissions::JuniorDeveloper < Permissions::Developer);
    assert!(Permissions::Developer < Permissions::Moderator);
}

#[test]
fn test_permission_low_band() {
    assert!(Permissions::Spam.is_low_band());
    assert!(Permissions::Banned.is_low_band());
    assert!(Permissions::Unregistered.is_low_band());
    assert!(!Permissions::Registered.is_low_band());
    assert!(!Permissions::Moderator.is_low_band());
}

#[test]
fn test_permission_name_round_trip() {
    for code in -2..=4 {
        let level = Permissions::try_from(code).unwrap();
        let parsed = Permissions::from_str(&level.to_string()).unwrap();
        assert_eq!(level, parsed);
    }
}

#[test]
fn test_unknown_name_is_rejected() {
    let result = Permissions::from_str("Admin");
    assert_eq!(
        result,
        Err(DomainError::UnknownName {
            kind: "permission level",
            value: String::from("Admin"),
        })
    );

    // Names are case-sensitive
    assert!(AwardType::from_str("mastery").is_err());
}

#[test]
fn test_award_type_codes() {
    assert_eq!(AwardType::Mastery.as_i32(), 1);
    assert_eq!(AwardType::GameBeaten.as_i32(), 8);
    assert_eq!(AwardType::try_from(6), Ok(AwardType::PatreonSupporter));
    assert_eq!(
        AwardType::try_from(4),
        Err(DomainError::InvalidAwardType(4))
    );
    assert_eq!(
        AwardType::try_from(5),
        Err(DomainError::InvalidAwardType(5))
    );
}

#[test]
fn test_game_award_types() {
    assert_eq!(
        AwardType::game(),
        [AwardType::Mastery, AwardType::GameBeaten]
    );
}

#[test]
fn test_unlock_mode_codes() {
    assert_eq!(UnlockMode::try_from(0), Ok(UnlockMode::Softcore));
    assert_eq!(UnlockMode::try_from(1), Ok(UnlockMode::Hardcore));
    assert_eq!(
        UnlockMode::try_from(2),
        Err(DomainError::InvalidUnlockMode(2))
    );
    assert_eq!(UnlockMode::Hardcore.to_string(), "Hardcore");
}

#[test]
fn test_ticket_state_unresolved() {
    let unresolved = TicketState::unresolved();
    assert!(unresolved.contains(&TicketState::Open));
    assert!(unresolved.contains(&TicketState::Request));
    assert!(!unresolved.contains(&TicketState::Resolved));
    assert!(!unresolved.contains(&TicketState::Closed));
}

#[test]
fn test_claim_status_in_progress() {
    assert_eq!(
        ClaimStatus::in_progress(),
        [ClaimStatus::Active, ClaimStatus::InReview]
    );
    assert_eq!(ClaimStatus::InReview.as_i32(), 3);
}

#[test]
fn test_achievement_flag_codes() {
    assert_eq!(AchievementFlag::OfficialCore.as_i32(), 3);
    assert_eq!(AchievementFlag::Unofficial.as_i32(), 5);
    assert_eq!(
        AchievementFlag::try_from(4),
        Err(DomainError::InvalidAchievementFlag(4))
    );
}
