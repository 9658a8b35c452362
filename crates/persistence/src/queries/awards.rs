// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Completion award aggregation across a set of games.
//!
//! Both queries take a caller-supplied list of game IDs. Each ID gets its own
//! bound placeholder; an empty list is answered without touching the
//! database, since `IN ()` is not valid SQL.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Integer, Nullable, Text};
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;
use userdb_domain::{AwardType, UnlockMode};

use crate::data_models::{AwardedGame, AwardedUser};
use crate::error::PersistenceError;
use crate::queries::to_count;

/// The four `(award type, mode)` buckets, in output column order.
const BUCKETS: [(AwardType, UnlockMode); 4] = [
    (AwardType::GameBeaten, UnlockMode::Softcore),
    (AwardType::GameBeaten, UnlockMode::Hardcore),
    (AwardType::Mastery, UnlockMode::Softcore),
    (AwardType::Mastery, UnlockMode::Hardcore),
];

/// Count expressions for [`BUCKETS`]; each takes two placeholders.
const BUCKET_COLUMNS: &str = "\
    COUNT(CASE WHEN sa.AwardType = ? AND sa.AwardDataExtra = ? THEN 1 END) AS beaten_softcore, \
    COUNT(CASE WHEN sa.AwardType = ? AND sa.AwardDataExtra = ? THEN 1 END) AS beaten_hardcore, \
    COUNT(CASE WHEN sa.AwardType = ? AND sa.AwardDataExtra = ? THEN 1 END) AS completed, \
    COUNT(CASE WHEN sa.AwardType = ? AND sa.AwardDataExtra = ? THEN 1 END) AS mastered";

#[derive(Debug, QueryableByName)]
struct AwardedUserRow {
    #[diesel(sql_type = Text)]
    user: String,
    #[diesel(sql_type = BigInt)]
    beaten_softcore: i64,
    #[diesel(sql_type = BigInt)]
    beaten_hardcore: i64,
    #[diesel(sql_type = BigInt)]
    completed: i64,
    #[diesel(sql_type = BigInt)]
    mastered: i64,
}

#[derive(Debug, QueryableByName)]
struct AwardedGameRow {
    #[diesel(sql_type = Nullable<Text>)]
    title: Option<String>,
    #[diesel(sql_type = BigInt)]
    id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    console_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    game_icon: Option<String>,
    #[diesel(sql_type = BigInt)]
    beaten_softcore: i64,
    #[diesel(sql_type = BigInt)]
    beaten_hardcore: i64,
    #[diesel(sql_type = BigInt)]
    completed: i64,
    #[diesel(sql_type = BigInt)]
    mastered: i64,
}

impl TryFrom<AwardedUserRow> for AwardedUser {
    type Error = PersistenceError;

    fn try_from(row: AwardedUserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user: row.user,
            beaten_softcore: to_count(row.beaten_softcore)?,
            beaten_hardcore: to_count(row.beaten_hardcore)?,
            completed: to_count(row.completed)?,
            mastered: to_count(row.mastered)?,
        })
    }
}

impl TryFrom<AwardedGameRow> for AwardedGame {
    type Error = PersistenceError;

    fn try_from(row: AwardedGameRow) -> Result<Self, Self::Error> {
        Ok(Self {
            title: row.title,
            id: row.id,
            console_name: row.console_name,
            game_icon: row.game_icon,
            beaten_softcore: to_count(row.beaten_softcore)?,
            beaten_hardcore: to_count(row.beaten_hardcore)?,
            completed: to_count(row.completed)?,
            mastered: to_count(row.mastered)?,
        })
    }
}

/// Returns `n` comma-separated placeholders.
fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// Per-user statement. Placeholders: the bucket pairs, the two game award
/// types, one per game ID, then the untracked flag.
fn most_awarded_users_sql(game_count: usize) -> String {
    format!(
        "SELECT ua.User AS user, {BUCKET_COLUMNS} \
         FROM SiteAwards AS sa \
         INNER JOIN UserAccounts AS ua ON ua.User = sa.User \
         WHERE sa.AwardType IN (?, ?) \
           AND sa.AwardData IN ({ids}) \
           AND ua.Untracked = ? \
         GROUP BY ua.User \
         ORDER BY ua.User",
        ids = placeholders(game_count),
    )
}

/// Per-game statement. Placeholders: the bucket pairs, the two game award
/// types, then one per game ID.
fn most_awarded_games_sql(game_count: usize) -> String {
    format!(
        "SELECT gd.Title AS title, sa.AwardData AS id, c.Name AS console_name, \
                gd.ImageIcon AS game_icon, {BUCKET_COLUMNS} \
         FROM SiteAwards AS sa \
         LEFT JOIN GameData AS gd ON gd.ID = sa.AwardData \
         LEFT JOIN Console AS c ON c.ID = gd.ConsoleID \
         WHERE sa.AwardType IN (?, ?) \
           AND sa.AwardData IN ({ids}) \
         GROUP BY sa.AwardData, gd.Title, c.Name, gd.ImageIcon \
         ORDER BY gd.Title, sa.AwardData",
        ids = placeholders(game_count),
    )
}

backend_fn! {
/// Counts beaten and mastery awards per tracked user across `game_ids`.
///
/// Results are ordered by username.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_most_awarded_users(
    conn: &mut _,
    game_ids: &[i64],
) -> Result<Vec<AwardedUser>, PersistenceError> {
    if game_ids.is_empty() {
        debug!("No game IDs given; skipping most-awarded users query");
        return Ok(Vec::new());
    }

    let mut query = diesel::sql_query(most_awarded_users_sql(game_ids.len())).into_boxed();
    for (award_type, mode) in BUCKETS {
        query = query
            .bind::<Integer, _>(award_type.as_i32())
            .bind::<Integer, _>(mode.as_i32());
    }
    for award_type in AwardType::game() {
        query = query.bind::<Integer, _>(award_type.as_i32());
    }
    for id in game_ids {
        query = query.bind::<BigInt, _>(*id);
    }
    query = query.bind::<Bool, _>(false);

    let rows: Vec<AwardedUserRow> = query.load(conn)?;
    rows.into_iter().map(AwardedUser::try_from).collect()
}
}

backend_fn! {
/// Counts beaten and mastery awards per game across `game_ids`.
///
/// Every award counts, including those held by untracked users. Results are
/// ordered by game title.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_most_awarded_games(
    conn: &mut _,
    game_ids: &[i64],
) -> Result<Vec<AwardedGame>, PersistenceError> {
    if game_ids.is_empty() {
        debug!("No game IDs given; skipping most-awarded games query");
        return Ok(Vec::new());
    }

    let mut query = diesel::sql_query(most_awarded_games_sql(game_ids.len())).into_boxed();
    for (award_type, mode) in BUCKETS {
        query = query
            .bind::<Integer, _>(award_type.as_i32())
            .bind::<Integer, _>(mode.as_i32());
    }
    for award_type in AwardType::game() {
        query = query.bind::<Integer, _>(award_type.as_i32());
    }
    for id in game_ids {
        query = query.bind::<BigInt, _>(*id);
    }

    let rows: Vec<AwardedGameRow> = query.load(conn)?;
    rows.into_iter().map(AwardedGame::try_from).collect()
}
}
