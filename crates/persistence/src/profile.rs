// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profile page aggregation.
//!
//! The profile payload combines the user's own row with three lookups owned
//! by other parts of the application: site rank, recently played games and
//! per-game progress. Those lookups are reached through [`ProfileSources`].
//! A failure in any of them is logged and leaves its part of the payload
//! empty; only the user lookup itself can fail the request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data_models::UserAccount;
use crate::error::PersistenceError;

/// Placeholder rich presence text that is never shown.
const UNKNOWN_RICH_PRESENCE: &str = "Unknown";

/// A game from the user's recent play history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecentlyPlayedGame {
    #[serde(rename = "GameID")]
    pub game_id: i64,
    #[serde(rename = "ConsoleID")]
    pub console_id: i64,
    pub console_name: Option<String>,
    pub title: String,
    pub image_icon: Option<String>,
    pub last_played: Option<String>,
}

/// Unlock totals for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameProgress {
    pub num_possible_achievements: u32,
    pub possible_score: u32,
    pub num_achieved: u32,
    pub score_achieved: u32,
    pub num_achieved_hardcore: u32,
    pub score_achieved_hardcore: u32,
}

/// A recently unlocked achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecentAchievement {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "GameID")]
    pub game_id: i64,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub badge_name: String,
    pub date_awarded: String,
    pub hardcore_achieved: bool,
}

/// Display metadata for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameInfo {
    #[serde(rename = "ID")]
    pub id: i64,
    pub title: String,
    #[serde(rename = "ConsoleID")]
    pub console_id: i64,
    pub console_name: Option<String>,
    pub image_icon: Option<String>,
}

/// Progress across a set of games, as returned by
/// [`ProfileSources::user_progress`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserProgress {
    /// Unlock totals keyed by game ID.
    pub awarded: BTreeMap<i64, GameProgress>,
    /// Recent unlocks keyed by game ID, then achievement ID.
    pub recent_achievements: BTreeMap<i64, BTreeMap<i64, RecentAchievement>>,
    /// Game metadata keyed by game ID; only filled when requested.
    pub game_info: BTreeMap<i64, GameInfo>,
}

/// Lookups the profile page needs from outside this crate.
pub trait ProfileSources {
    /// Returns the user's site rank, or `None` when unranked.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn user_rank(&mut self, username: &str) -> Result<Option<u64>, PersistenceError>;

    /// Returns up to `limit` recently played games, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn recently_played_games(
        &mut self,
        username: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<RecentlyPlayedGame>, PersistenceError>;

    /// Returns progress for `game_ids` with up to `achievement_limit` recent
    /// unlocks across them.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn user_progress(
        &mut self,
        user: &UserAccount,
        game_ids: &[i64],
        achievement_limit: usize,
        with_game_info: bool,
    ) -> Result<UserProgress, PersistenceError>;
}

/// What to include in a profile payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileRequest {
    /// Maximum number of recently played games.
    pub game_limit: usize,
    /// Maximum number of recent unlocks across those games.
    pub achievement_limit: usize,
    /// Whether recent activity may be shown, i.e. the viewer is signed in.
    pub include_private_activity: bool,
}

/// The profile page payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPageInfo {
    pub user: String,
    pub member_since: Option<String>,
    pub last_activity: Option<String>,
    #[serde(rename = "LastActivityID")]
    pub last_activity_id: i64,
    pub rich_presence_msg: Option<String>,
    #[serde(rename = "LastGameID")]
    pub last_game_id: i64,
    pub contrib_count: i32,
    pub contrib_yield: i32,
    pub total_points: i32,
    pub total_softcore_points: i32,
    pub total_true_points: i32,
    pub permissions: i32,
    pub untracked: bool,
    #[serde(rename = "ID")]
    pub id: i64,
    pub user_wall_active: bool,
    pub motto: String,
    pub rank: Option<u64>,
    pub recently_played_count: usize,
    pub recently_played: Vec<RecentlyPlayedGame>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub awarded: Option<BTreeMap<i64, GameProgress>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recent_achievements: Option<BTreeMap<i64, BTreeMap<i64, RecentAchievement>>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_game: Option<GameInfo>,
}

/// Returns the rich presence text worth showing, if any.
fn visible_rich_presence(msg: Option<&str>) -> Option<String> {
    msg.filter(|m| !m.is_empty() && *m != UNKNOWN_RICH_PRESENCE)
        .map(str::to_string)
}

/// Builds the profile payload for an already loaded account.
#[must_use]
pub fn build_user_page_info<S: ProfileSources + ?Sized>(
    user: &UserAccount,
    request: ProfileRequest,
    sources: &mut S,
) -> UserPageInfo {
    let rank: Option<u64> = sources.user_rank(&user.user).unwrap_or_else(|e| {
        warn!(user = %user.user, error = %e, "Rank lookup failed");
        None
    });

    let recently_played: Vec<RecentlyPlayedGame> = if request.include_private_activity {
        sources
            .recently_played_games(&user.user, 0, request.game_limit)
            .unwrap_or_else(|e| {
                warn!(user = %user.user, error = %e, "Recently played lookup failed");
                Vec::new()
            })
    } else {
        Vec::new()
    };

    let mut info = UserPageInfo {
        user: user.user.clone(),
        member_since: user.created.clone(),
        last_activity: user.last_login.clone(),
        last_activity_id: user.last_activity_id,
        rich_presence_msg: visible_rich_presence(user.rich_presence_msg.as_deref()),
        last_game_id: user.last_game_id,
        contrib_count: user.contrib_count,
        contrib_yield: user.contrib_yield,
        total_points: user.ra_points,
        total_softcore_points: user.ra_softcore_points,
        total_true_points: user.true_ra_points,
        permissions: user.permissions,
        untracked: user.untracked,
        id: user.id,
        user_wall_active: user.user_wall_active,
        motto: user.motto.clone(),
        rank,
        recently_played_count: recently_played.len(),
        recently_played,
        awarded: None,
        recent_achievements: None,
        last_game: None,
    };

    if info.recently_played.is_empty() {
        return info;
    }

    let mut game_ids: Vec<i64> = info.recently_played.iter().map(|g| g.game_id).collect();
    if user.last_game_id != 0 && !game_ids.contains(&user.last_game_id) {
        game_ids.push(user.last_game_id);
    }

    match sources.user_progress(user, &game_ids, request.achievement_limit, true) {
        Ok(mut progress) => {
            info.last_game = progress.game_info.remove(&user.last_game_id);
            info.awarded = Some(progress.awarded);
            info.recent_achievements = Some(progress.recent_achievements);
        }
        Err(e) => {
            warn!(user = %user.user, error = %e, "Progress lookup failed");
        }
    }

    info
}
