// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DeveloperSort, DeveloperStatsColumn, SortDirection, UserListColumn, UserListSort};

const ALL_USER_LIST_SORTS: [UserListSort; 8] = [
    UserListSort::UsernameAsc,
    UserListSort::UsernameDesc,
    UserListSort::PointsDesc,
    UserListSort::PointsAsc,
    UserListSort::AwardedDesc,
    UserListSort::AwardedAsc,
    UserListSort::LastLoginDesc,
    UserListSort::LastLoginAsc,
];

#[test]
fn test_user_list_codes_round_trip() {
    for sort in ALL_USER_LIST_SORTS {
        assert_eq!(UserListSort::from_code(sort.code()), sort, "{sort:?}");
    }
}

#[test]
fn test_user_list_codes_above_ten_flip_direction() {
    assert_eq!(
        UserListSort::from_code(12).key(),
        (UserListColumn::TotalPoints, SortDirection::Asc)
    );
    assert_eq!(
        UserListSort::from_code(11).key(),
        (UserListColumn::Username, SortDirection::Desc)
    );
}

#[test]
fn test_unknown_user_list_code_sorts_by_username() {
    for code in [0, 5, 10, 15, -1] {
        assert_eq!(UserListSort::from_code(code), UserListSort::UsernameAsc);
    }
    assert_eq!(UserListSort::default(), UserListSort::UsernameAsc);
}

#[test]
fn test_reversed_sort_keeps_column_and_flips_direction() {
    for sort in ALL_USER_LIST_SORTS {
        let (column, direction) = sort.key();
        let reversed = sort.reversed();

        assert_eq!(reversed.key(), (column, direction.reversed()), "{sort:?}");
        assert_eq!(reversed.reversed(), sort);
    }
}

#[test]
fn test_direction_keywords() {
    assert_eq!(SortDirection::Asc.as_sql(), "ASC");
    assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    assert_eq!(SortDirection::Asc.reversed(), SortDirection::Desc);
    assert_eq!(SortDirection::Desc.reversed(), SortDirection::Asc);
}

#[test]
fn test_developer_codes_select_columns() {
    let expected = [
        (1, DeveloperStatsColumn::ContribYield),
        (2, DeveloperStatsColumn::ContribCount),
        (3, DeveloperStatsColumn::OpenTickets),
        (4, DeveloperStatsColumn::TicketsResolvedForOthers),
        (5, DeveloperStatsColumn::LastLogin),
        (6, DeveloperStatsColumn::Author),
        (7, DeveloperStatsColumn::ActiveClaims),
        (0, DeveloperStatsColumn::Achievements),
        (8, DeveloperStatsColumn::Achievements),
    ];
    for (code, column) in expected {
        let (actual, _) = DeveloperSort::from_code(code).key();
        assert_eq!(actual, column, "code {code}");
    }
}

#[test]
fn test_developer_order_by_ends_with_open_ticket_tie_break() {
    assert_eq!(
        DeveloperSort::default().order_by_clause(),
        "achievements DESC, open_tickets ASC"
    );
    assert_eq!(
        DeveloperSort::Author.order_by_clause(),
        "author ASC, open_tickets ASC"
    );
}
