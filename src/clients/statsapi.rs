//! MLB Stats API client
//!
//! Fetches the daily schedule and reduces it to a single game result for
//! the tracked team. The schedule endpoint is public and needs no API key.

use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;
use crate::types::GameResult;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Stats API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Stats API non-2xx: {status} body={body}")]
    BadStatus { status: StatusCode, body: String },
    #[error("Stats API returned invalid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct StatsApiClient {
    http: Client,
    base_url: String,
    sport_id: u32,
}

impl StatsApiClient {
    pub fn new(cfg: &Config) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: cfg.stats_api_base_url.trim_end_matches('/').to_string(),
            sport_id: cfg.sport_id,
        }
    }

    /// Fetch the schedule for `date` and scan it for a game involving
    /// `team_id`. `Ok(None)` means the schedule was fetched fine but the
    /// team did not play that day.
    pub async fn team_result(
        &self,
        team_id: u32,
        date: NaiveDate,
    ) -> Result<Option<GameResult>, FetchError> {
        let schedule = self.fetch_schedule(date).await?;
        Ok(find_team_result(&schedule, team_id, date))
    }

    async fn fetch_schedule(&self, date: NaiveDate) -> Result<Schedule, FetchError> {
        let url = format!(
            "{}/api/v1/schedule?sportId={}&date={}",
            self.base_url,
            self.sport_id,
            date.format("%Y-%m-%d")
        );

        debug!("Fetching schedule: {}", url);

        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::BadStatus { status, body });
        }

        resp.json().await.map_err(FetchError::Decode)
    }
}

/// Scan the schedule for the first game involving `team_id` and derive the
/// result from that team's perspective. Final scores can be absent on
/// postponed or suspended games; a missing score counts as 0, which also
/// makes a scoreless tie a non-win.
fn find_team_result(schedule: &Schedule, team_id: u32, date: NaiveDate) -> Option<GameResult> {
    for day in &schedule.dates {
        for game in &day.games {
            let (ours, theirs, home_game) = if game.teams.home.team.id == team_id {
                (&game.teams.home, &game.teams.away, true)
            } else if game.teams.away.team.id == team_id {
                (&game.teams.away, &game.teams.home, false)
            } else {
                continue;
            };

            if ours.score.is_none() || theirs.score.is_none() {
                warn!(
                    "Game against {} has no final score, treating missing scores as 0",
                    theirs.team.name
                );
            }
            let team_score = ours.score.unwrap_or(0);
            let opponent_score = theirs.score.unwrap_or(0);
            let venue = game
                .venue
                .as_ref()
                .and_then(|v| v.name.clone())
                .unwrap_or_else(|| "Unknown".to_string());

            return Some(GameResult {
                date,
                home_game,
                won: team_score > opponent_score,
                team_score,
                opponent_score,
                opponent_team: theirs.team.name.clone(),
                venue,
            });
        }
    }

    None
}

/// Internal Stats API response structures
#[derive(Debug, Deserialize)]
struct Schedule {
    #[serde(default)]
    dates: Vec<ScheduleDate>,
}

#[derive(Debug, Deserialize)]
struct ScheduleDate {
    #[serde(default)]
    games: Vec<ScheduleGame>,
}

#[derive(Debug, Deserialize)]
struct ScheduleGame {
    teams: GameTeams,
    venue: Option<Venue>,
}

#[derive(Debug, Deserialize)]
struct GameTeams {
    away: GameSide,
    home: GameSide,
}

#[derive(Debug, Deserialize)]
struct GameSide {
    team: TeamRef,
    score: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct TeamRef {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Venue {
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schedule_from(value: serde_json::Value) -> Schedule {
        serde_json::from_value(value).unwrap()
    }

    fn game_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
    }

    #[test]
    fn test_home_win_derivation() {
        let schedule = schedule_from(json!({
            "totalGames": 1,
            "dates": [{
                "date": "2024-07-04",
                "games": [{
                    "gamePk": 745804,
                    "teams": {
                        "away": {"team": {"id": 137, "name": "San Francisco Giants"}, "score": 2},
                        "home": {"team": {"id": 119, "name": "Los Angeles Dodgers"}, "score": 5}
                    },
                    "venue": {"id": 22, "name": "Dodger Stadium"}
                }]
            }]
        }));

        let result = find_team_result(&schedule, 119, game_day()).unwrap();
        assert!(result.home_game);
        assert!(result.won);
        assert_eq!(result.team_score, 5);
        assert_eq!(result.opponent_score, 2);
        assert_eq!(result.opponent_team, "San Francisco Giants");
        assert_eq!(result.venue, "Dodger Stadium");
        assert_eq!(result.date, game_day());
    }

    #[test]
    fn test_away_game_swaps_sides() {
        let schedule = schedule_from(json!({
            "dates": [{
                "games": [{
                    "teams": {
                        "away": {"team": {"id": 119, "name": "Los Angeles Dodgers"}, "score": 7},
                        "home": {"team": {"id": 137, "name": "San Francisco Giants"}, "score": 1}
                    },
                    "venue": {"name": "Oracle Park"}
                }]
            }]
        }));

        let result = find_team_result(&schedule, 119, game_day()).unwrap();
        assert!(!result.home_game);
        assert!(result.won);
        assert_eq!(result.team_score, 7);
        assert_eq!(result.opponent_score, 1);
        assert_eq!(result.opponent_team, "San Francisco Giants");
        assert_eq!(result.venue, "Oracle Park");
    }

    #[test]
    fn test_tie_is_not_a_win() {
        let schedule = schedule_from(json!({
            "dates": [{
                "games": [{
                    "teams": {
                        "away": {"team": {"id": 137, "name": "San Francisco Giants"}, "score": 3},
                        "home": {"team": {"id": 119, "name": "Los Angeles Dodgers"}, "score": 3}
                    },
                    "venue": {"name": "Dodger Stadium"}
                }]
            }]
        }));

        let result = find_team_result(&schedule, 119, game_day()).unwrap();
        assert!(!result.won);
    }

    #[test]
    fn test_missing_scores_default_to_zero() {
        // Postponed games carry team entries without a score field.
        let schedule = schedule_from(json!({
            "dates": [{
                "games": [{
                    "teams": {
                        "away": {"team": {"id": 137, "name": "San Francisco Giants"}},
                        "home": {"team": {"id": 119, "name": "Los Angeles Dodgers"}}
                    },
                    "venue": {"name": "Dodger Stadium"}
                }]
            }]
        }));

        let result = find_team_result(&schedule, 119, game_day()).unwrap();
        assert_eq!(result.team_score, 0);
        assert_eq!(result.opponent_score, 0);
        assert!(!result.won);
    }

    #[test]
    fn test_one_missing_score_defaults_only_that_side() {
        let schedule = schedule_from(json!({
            "dates": [{
                "games": [{
                    "teams": {
                        "away": {"team": {"id": 137, "name": "San Francisco Giants"}},
                        "home": {"team": {"id": 119, "name": "Los Angeles Dodgers"}, "score": 5}
                    },
                    "venue": {"name": "Dodger Stadium"}
                }]
            }]
        }));

        let result = find_team_result(&schedule, 119, game_day()).unwrap();
        assert_eq!(result.team_score, 5);
        assert_eq!(result.opponent_score, 0);
        assert!(result.won);
    }

    #[test]
    fn test_missing_venue_defaults_to_unknown() {
        let schedule = schedule_from(json!({
            "dates": [{
                "games": [{
                    "teams": {
                        "away": {"team": {"id": 137, "name": "San Francisco Giants"}, "score": 2},
                        "home": {"team": {"id": 119, "name": "Los Angeles Dodgers"}, "score": 5}
                    }
                }]
            }]
        }));

        let result = find_team_result(&schedule, 119, game_day()).unwrap();
        assert_eq!(result.venue, "Unknown");
    }

    #[test]
    fn test_other_teams_only_is_none() {
        let schedule = schedule_from(json!({
            "dates": [{
                "games": [{
                    "teams": {
                        "away": {"team": {"id": 147, "name": "New York Yankees"}, "score": 4},
                        "home": {"team": {"id": 111, "name": "Boston Red Sox"}, "score": 2}
                    },
                    "venue": {"name": "Fenway Park"}
                }]
            }]
        }));

        assert!(find_team_result(&schedule, 119, game_day()).is_none());
    }

    #[test]
    fn test_empty_dates_is_none() {
        let schedule = schedule_from(json!({"dates": []}));
        assert!(find_team_result(&schedule, 119, game_day()).is_none());
    }

    #[test]
    fn test_missing_dates_key_is_none() {
        // Off-season responses omit the dates array entirely.
        let schedule = schedule_from(json!({"totalGames": 0}));
        assert!(find_team_result(&schedule, 119, game_day()).is_none());
    }

    #[test]
    fn test_first_matching_game_is_used() {
        // Doubleheader: two entries for the same team, first one wins.
        let schedule = schedule_from(json!({
            "dates": [{
                "games": [
                    {
                        "teams": {
                            "away": {"team": {"id": 137, "name": "San Francisco Giants"}, "score": 0},
                            "home": {"team": {"id": 119, "name": "Los Angeles Dodgers"}, "score": 4}
                        },
                        "venue": {"name": "Dodger Stadium"}
                    },
                    {
                        "teams": {
                            "away": {"team": {"id": 137, "name": "San Francisco Giants"}, "score": 8},
                            "home": {"team": {"id": 119, "name": "Los Angeles Dodgers"}, "score": 3}
                        },
                        "venue": {"name": "Dodger Stadium"}
                    }
                ]
            }]
        }));

        let result = find_team_result(&schedule, 119, game_day()).unwrap();
        assert!(result.won);
        assert_eq!(result.team_score, 4);
    }
}
