// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-author developer statistics.
//!
//! The aggregate needs a derived table and conditional distinct counts,
//! which the Diesel DSL cannot express, so the statement is written by hand.
//! It sticks to syntax shared by `SQLite` and `MySQL`: `CASE` instead of
//! `IF`, `<>` instead of `NOT LIKE`, and `?` placeholders for every value.
//! The only text spliced into the statement is the optional permission
//! operator and the `ORDER BY` list, both taken from closed enums.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Nullable, Text};
use diesel::{MysqlConnection, SqliteConnection};
use userdb_domain::{
    AchievementFlag, ClaimStatus, DeveloperActivityFilter, DeveloperSort, TicketState,
};

use crate::data_models::DeveloperStats;
use crate::error::PersistenceError;
use crate::queries::to_count;

/// Raw aggregate row; counts arrive as `BIGINT` on both backends.
#[derive(Debug, QueryableByName)]
struct DeveloperStatsRow {
    #[diesel(sql_type = Text)]
    author: String,
    #[diesel(sql_type = Integer)]
    permissions: i32,
    #[diesel(sql_type = Integer)]
    contrib_count: i32,
    #[diesel(sql_type = Integer)]
    contrib_yield: i32,
    #[diesel(sql_type = BigInt)]
    achievements: i64,
    #[diesel(sql_type = BigInt)]
    open_tickets: i64,
    #[diesel(sql_type = BigInt)]
    tickets_resolved_for_others: i64,
    #[diesel(sql_type = Nullable<Text>)]
    last_login: Option<String>,
    #[diesel(sql_type = BigInt)]
    active_claims: i64,
}

impl TryFrom<DeveloperStatsRow> for DeveloperStats {
    type Error = PersistenceError;

    fn try_from(row: DeveloperStatsRow) -> Result<Self, Self::Error> {
        Ok(Self {
            author: row.author,
            permissions: row.permissions,
            contrib_count: row.contrib_count,
            contrib_yield: row.contrib_yield,
            achievements: to_count(row.achievements)?,
            open_tickets: to_count(row.open_tickets)?,
            tickets_resolved_for_others: to_count(row.tickets_resolved_for_others)?,
            last_login: row.last_login,
            active_claims: to_count(row.active_claims)?,
        })
    }
}

/// Builds the statistics statement for a filter and sort order.
///
/// Placeholders, in order: the published flag for the achievement count,
/// the two counted flags, the two unresolved ticket states, the two
/// in-progress claim states, the resolved state and published flag for the
/// resolved-for-others subquery, then the permission level when `activity`
/// restricts by level.
fn developer_stats_sql(sort: DeveloperSort, activity: DeveloperActivityFilter) -> String {
    let permission_clause: String = activity
        .predicate()
        .map(|p| format!(" AND ua.Permissions {} ?", p.comparison.as_sql()))
        .unwrap_or_default();

    format!(
        "SELECT ua.User AS author, \
                ua.Permissions AS permissions, \
                ua.ContribCount AS contrib_count, \
                ua.ContribYield AS contrib_yield, \
                COUNT(DISTINCT CASE WHEN ach.Flags = ? THEN ach.ID END) AS achievements, \
                COUNT(DISTINCT tick.ID) AS open_tickets, \
                COALESCE(resolved.total, 0) AS tickets_resolved_for_others, \
                ua.LastLogin AS last_login, \
                COUNT(DISTINCT sc.ID) AS active_claims \
         FROM UserAccounts AS ua \
         LEFT JOIN Achievements AS ach \
                ON ach.Author = ua.User AND ach.Flags IN (?, ?) \
         LEFT JOIN Ticket AS tick \
                ON tick.AchievementID = ach.ID AND tick.ReportState IN (?, ?) \
         LEFT JOIN SetClaim AS sc \
                ON sc.User = ua.User AND sc.Status IN (?, ?) \
         LEFT JOIN ( \
                SELECT resolver.User AS resolver_name, COUNT(t.ID) AS total \
                FROM Ticket AS t \
                INNER JOIN UserAccounts AS reporter ON reporter.ID = t.ReportedByUserID \
                INNER JOIN UserAccounts AS resolver ON resolver.ID = t.ResolvedByUserID \
                INNER JOIN Achievements AS a ON a.ID = t.AchievementID \
                WHERE t.ReportState = ? \
                  AND reporter.User <> resolver.User \
                  AND a.Author <> resolver.User \
                  AND a.Flags = ? \
                GROUP BY resolver.User \
         ) AS resolved ON resolved.resolver_name = ua.User \
         WHERE ua.ContribCount > 0 AND ua.ContribYield > 0{permission_clause} \
         GROUP BY ua.ID, ua.User, ua.Permissions, ua.ContribCount, ua.ContribYield, \
                  ua.LastLogin, resolved.total \
         ORDER BY {order_by}",
        order_by = sort.order_by_clause(),
    )
}

backend_fn! {
/// Computes contribution statistics for every author with a positive
/// contribution history.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `sort` - The sort order (ties always fall back to open tickets ascending)
/// * `activity` - Which permission band of developers to include
///
/// # Errors
///
/// Returns an error if the query fails or a count does not fit in `u32`.
pub fn get_developer_stats_full(
    conn: &mut _,
    sort: DeveloperSort,
    activity: DeveloperActivityFilter,
) -> Result<Vec<DeveloperStats>, PersistenceError> {
    let [unresolved_a, unresolved_b] = TicketState::unresolved();
    let [claim_a, claim_b] = ClaimStatus::in_progress();

    let mut query = diesel::sql_query(developer_stats_sql(sort, activity))
        .into_boxed()
        .bind::<Integer, _>(AchievementFlag::OfficialCore.as_i32())
        .bind::<Integer, _>(AchievementFlag::OfficialCore.as_i32())
        .bind::<Integer, _>(AchievementFlag::Unofficial.as_i32())
        .bind::<Integer, _>(unresolved_a.as_i32())
        .bind::<Integer, _>(unresolved_b.as_i32())
        .bind::<Integer, _>(claim_a.as_i32())
        .bind::<Integer, _>(claim_b.as_i32())
        .bind::<Integer, _>(TicketState::Resolved.as_i32())
        .bind::<Integer, _>(AchievementFlag::OfficialCore.as_i32());

    if let Some(predicate) = activity.predicate() {
        query = query.bind::<Integer, _>(predicate.level.as_i32());
    }

    let rows: Vec<DeveloperStatsRow> = query.load(conn)?;
    rows.into_iter().map(DeveloperStats::try_from).collect()
}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_count_tracks_activity_filter() {
        let unrestricted =
            developer_stats_sql(DeveloperSort::default(), DeveloperActivityFilter::All);
        assert_eq!(unrestricted.matches('?').count(), 9);

        let restricted =
            developer_stats_sql(DeveloperSort::default(), DeveloperActivityFilter::Junior);
        assert_eq!(restricted.matches('?').count(), 10);
        assert!(restricted.contains("AND ua.Permissions = ?"));
    }

    #[test]
    fn test_order_by_ends_with_tie_break() {
        let sql = developer_stats_sql(DeveloperSort::Author, DeveloperActivityFilter::All);
        assert!(sql.ends_with("ORDER BY author ASC, open_tickets ASC"));
    }
}
