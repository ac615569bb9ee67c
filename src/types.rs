//! Core types shared across the fetch, decision, and notification stages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Final result of one game from the tracked team's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub date: NaiveDate,
    pub home_game: bool,
    pub won: bool,
    pub team_score: u16,
    pub opponent_score: u16,
    pub opponent_team: String,
    pub venue: String,
}

impl GameResult {
    /// The notification trigger: only home wins produce an email.
    pub fn is_home_win(&self) -> bool {
        self.won && self.home_game
    }
}

/// What a single run concluded, after fetch and (maybe) send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The schedule could not be fetched or decoded.
    ScheduleUnavailable,
    /// The schedule was fetched but the tracked team did not play.
    NoGame,
    /// The team played and lost (ties count as losses).
    Loss,
    /// The team won on the road. No email for away wins.
    AwayWin,
    /// The team won at home. `notified` records whether the email went out.
    HomeWin { notified: bool },
}
