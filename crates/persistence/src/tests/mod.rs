// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod account_tests;

use diesel::RunQueryDsl;

use crate::{BackendConnection, Persistence};

/// Executes a seed statement against an `SQLite` test database.
///
/// # Panics
///
/// Panics if the adapter is not backed by `SQLite` or the statement fails.
pub fn execute_sql(persistence: &mut Persistence, sql: &str) {
    match &mut persistence.conn {
        BackendConnection::Sqlite(conn) => {
            diesel::sql_query(sql)
                .execute(conn)
                .unwrap_or_else(|e| panic!("Failed to execute seed SQL: {e}\n{sql}"));
        }
        BackendConnection::Mysql(_) => panic!("This test requires SQLite"),
    }
}

/// Renders an optional text value as an SQL literal.
fn sql_text(value: Option<&str>) -> String {
    value.map_or_else(|| String::from("NULL"), |v| format!("'{v}'"))
}

/// Renders an optional ID as an SQL literal.
fn sql_id(value: Option<i64>) -> String {
    value.map_or_else(|| String::from("NULL"), |v| v.to_string())
}

/// Column values for a seeded `UserAccounts` row.
#[derive(Debug, Clone)]
pub struct UserSeed {
    pub id: i64,
    pub user: &'static str,
    pub permissions: i32,
    pub ra_points: i32,
    pub ra_softcore_points: i32,
    pub true_ra_points: i32,
    pub contrib_count: i32,
    pub contrib_yield: i32,
    pub motto: &'static str,
    pub rich_presence_msg: Option<&'static str>,
    pub last_game_id: i64,
    pub last_login: Option<&'static str>,
    pub created: Option<&'static str>,
    pub deleted: Option<&'static str>,
    pub untracked: bool,
    pub achievements_unlocked: i32,
}

impl UserSeed {
    /// A registered, tracked user with no points or contributions.
    pub const fn new(id: i64, user: &'static str) -> Self {
        Self {
            id,
            user,
            permissions: 1,
            ra_points: 0,
            ra_softcore_points: 0,
            true_ra_points: 0,
            contrib_count: 0,
            contrib_yield: 0,
            motto: "",
            rich_presence_msg: None,
            last_game_id: 0,
            last_login: None,
            created: Some("2020-01-01 00:00:00"),
            deleted: None,
            untracked: false,
            achievements_unlocked: 0,
        }
    }

    pub const fn permissions(mut self, permissions: i32) -> Self {
        self.permissions = permissions;
        self
    }

    pub const fn points(mut self, ra_points: i32, true_ra_points: i32) -> Self {
        self.ra_points = ra_points;
        self.true_ra_points = true_ra_points;
        self
    }

    pub const fn contributions(mut self, count: i32, yield_points: i32) -> Self {
        self.contrib_count = count;
        self.contrib_yield = yield_points;
        self
    }

    pub const fn untracked(mut self) -> Self {
        self.untracked = true;
        self
    }

    pub const fn deleted(mut self, at: &'static str) -> Self {
        self.deleted = Some(at);
        self
    }

    pub const fn last_login(mut self, at: &'static str) -> Self {
        self.last_login = Some(at);
        self
    }

    pub const fn rich_presence(mut self, msg: &'static str) -> Self {
        self.rich_presence_msg = Some(msg);
        self
    }

    pub const fn last_game(mut self, game_id: i64) -> Self {
        self.last_game_id = game_id;
        self
    }

    pub const fn awarded(mut self, achievements_unlocked: i32) -> Self {
        self.achievements_unlocked = achievements_unlocked;
        self
    }
}

pub fn insert_user(persistence: &mut Persistence, seed: &UserSeed) {
    let sql = format!(
        "INSERT INTO UserAccounts (ID, User, EmailAddress, Permissions, RAPoints, RASoftcorePoints,
             TrueRAPoints, cookie, APIKey, Motto, ContribCount, ContribYield, RichPresenceMsg,
             LastGameID, LastLogin, Created, Deleted, Untracked, achievements_unlocked)
         VALUES ({id}, '{user}', '{user}@example.com', {permissions}, {ra_points}, {ra_softcore_points},
             {true_ra_points}, 'cookie-{id}', 'key-{id}', '{motto}', {contrib_count}, {contrib_yield},
             {rich_presence}, {last_game_id}, {last_login}, {created}, {deleted}, {untracked},
             {achievements_unlocked})",
        id = seed.id,
        user = seed.user,
        permissions = seed.permissions,
        ra_points = seed.ra_points,
        ra_softcore_points = seed.ra_softcore_points,
        true_ra_points = seed.true_ra_points,
        motto = seed.motto,
        contrib_count = seed.contrib_count,
        contrib_yield = seed.contrib_yield,
        rich_presence = sql_text(seed.rich_presence_msg),
        last_game_id = seed.last_game_id,
        last_login = sql_text(seed.last_login),
        created = sql_text(seed.created),
        deleted = sql_text(seed.deleted),
        untracked = i32::from(seed.untracked),
        achievements_unlocked = seed.achievements_unlocked,
    );
    execute_sql(persistence, &sql);
}

pub fn insert_achievement(
    persistence: &mut Persistence,
    id: i64,
    game_id: i64,
    author: &str,
    flags: i32,
) {
    execute_sql(
        persistence,
        &format!(
            "INSERT INTO Achievements (ID, GameID, Title, Author, Flags, Points)
             VALUES ({id}, {game_id}, 'Achievement {id}', '{author}', {flags}, 10)"
        ),
    );
}

pub fn insert_ticket(
    persistence: &mut Persistence,
    id: i64,
    achievement_id: i64,
    reported_by: Option<i64>,
    resolved_by: Option<i64>,
    state: i32,
) {
    execute_sql(
        persistence,
        &format!(
            "INSERT INTO Ticket (ID, AchievementID, ReportedByUserID, ResolvedByUserID, ReportState)
             VALUES ({id}, {achievement_id}, {}, {}, {state})",
            sql_id(reported_by),
            sql_id(resolved_by),
        ),
    );
}

pub fn insert_claim(persistence: &mut Persistence, id: i64, user: &str, game_id: i64, status: i32) {
    execute_sql(
        persistence,
        &format!(
            "INSERT INTO SetClaim (ID, User, GameID, Status)
             VALUES ({id}, '{user}', {game_id}, {status})"
        ),
    );
}

pub fn insert_console(persistence: &mut Persistence, id: i64, name: &str) {
    execute_sql(
        persistence,
        &format!("INSERT INTO Console (ID, Name) VALUES ({id}, '{name}')"),
    );
}

pub fn insert_game(persistence: &mut Persistence, id: i64, title: &str, console_id: i64) {
    execute_sql(
        persistence,
        &format!(
            "INSERT INTO GameData (ID, Title, ConsoleID, ImageIcon)
             VALUES ({id}, '{title}', {console_id}, '/Images/{id:06}.png')"
        ),
    );
}

pub fn insert_award(
    persistence: &mut Persistence,
    id: i64,
    user: &str,
    award_type: i32,
    game_id: i64,
    mode: i32,
) {
    execute_sql(
        persistence,
        &format!(
            "INSERT INTO SiteAwards (ID, User, AwardType, AwardData, AwardDataExtra)
             VALUES ({id}, '{user}', {award_type}, {game_id}, {mode})"
        ),
    );
}
