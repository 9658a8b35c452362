// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

// Table and column names follow the legacy store; Rust identifiers are
// snake_case and mapped with `sql_name`.

diesel::table! {
    #[sql_name = "UserAccounts"]
    user_accounts (id) {
        #[sql_name = "ID"]
        id -> BigInt,
        #[sql_name = "User"]
        user -> Text,
        #[sql_name = "EmailAddress"]
        email_address -> Text,
        #[sql_name = "Permissions"]
        permissions -> Integer,
        #[sql_name = "RAPoints"]
        ra_points -> Integer,
        #[sql_name = "RASoftcorePoints"]
        ra_softcore_points -> Integer,
        #[sql_name = "TrueRAPoints"]
        true_ra_points -> Integer,
        cookie -> Nullable<Text>,
        #[sql_name = "websitePrefs"]
        website_prefs -> Nullable<Integer>,
        #[sql_name = "UnreadMessageCount"]
        unread_message_count -> Nullable<Integer>,
        #[sql_name = "Motto"]
        motto -> Text,
        #[sql_name = "UserWallActive"]
        user_wall_active -> Bool,
        #[sql_name = "APIKey"]
        api_key -> Nullable<Text>,
        #[sql_name = "ContribCount"]
        contrib_count -> Integer,
        #[sql_name = "ContribYield"]
        contrib_yield -> Integer,
        #[sql_name = "RichPresenceMsg"]
        rich_presence_msg -> Nullable<Text>,
        #[sql_name = "LastGameID"]
        last_game_id -> BigInt,
        #[sql_name = "LastLogin"]
        last_login -> Nullable<Text>,
        #[sql_name = "LastActivityID"]
        last_activity_id -> BigInt,
        #[sql_name = "Created"]
        created -> Nullable<Text>,
        #[sql_name = "DeleteRequested"]
        delete_requested -> Nullable<Text>,
        #[sql_name = "Deleted"]
        deleted -> Nullable<Text>,
        #[sql_name = "Untracked"]
        untracked -> Bool,
        achievements_unlocked -> Integer,
    }
}

diesel::table! {
    #[sql_name = "Achievements"]
    achievements (id) {
        #[sql_name = "ID"]
        id -> BigInt,
        #[sql_name = "GameID"]
        game_id -> BigInt,
        #[sql_name = "Title"]
        title -> Text,
        #[sql_name = "Author"]
        author -> Text,
        #[sql_name = "Flags"]
        flags -> Integer,
        #[sql_name = "Points"]
        points -> Integer,
    }
}

diesel::table! {
    #[sql_name = "Ticket"]
    ticket (id) {
        #[sql_name = "ID"]
        id -> BigInt,
        #[sql_name = "AchievementID"]
        achievement_id -> BigInt,
        #[sql_name = "ReportedByUserID"]
        reported_by_user_id -> Nullable<BigInt>,
        #[sql_name = "ResolvedByUserID"]
        resolved_by_user_id -> Nullable<BigInt>,
        #[sql_name = "ReportState"]
        report_state -> Integer,
    }
}

diesel::table! {
    #[sql_name = "SetClaim"]
    set_claim (id) {
        #[sql_name = "ID"]
        id -> BigInt,
        #[sql_name = "User"]
        user -> Text,
        #[sql_name = "GameID"]
        game_id -> BigInt,
        #[sql_name = "Status"]
        status -> Integer,
    }
}

diesel::table! {
    #[sql_name = "SiteAwards"]
    site_awards (id) {
        #[sql_name = "ID"]
        id -> BigInt,
        #[sql_name = "User"]
        user -> Text,
        #[sql_name = "AwardType"]
        award_type -> Integer,
        #[sql_name = "AwardData"]
        award_data -> BigInt,
        #[sql_name = "AwardDataExtra"]
        award_data_extra -> Integer,
    }
}

diesel::table! {
    #[sql_name = "GameData"]
    game_data (id) {
        #[sql_name = "ID"]
        id -> BigInt,
        #[sql_name = "Title"]
        title -> Text,
        #[sql_name = "ConsoleID"]
        console_id -> BigInt,
        #[sql_name = "ImageIcon"]
        image_icon -> Nullable<Text>,
    }
}

diesel::table! {
    #[sql_name = "Console"]
    console (id) {
        #[sql_name = "ID"]
        id -> BigInt,
        #[sql_name = "Name"]
        name -> Text,
    }
}

diesel::joinable!(ticket -> achievements (achievement_id));
diesel::joinable!(game_data -> console (console_id));

diesel::allow_tables_to_appear_in_same_query!(
    user_accounts,
    achievements,
    ticket,
    set_claim,
    site_awards,
    game_data,
    console,
);
