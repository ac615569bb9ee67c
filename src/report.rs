//! Message and console formatting
//!
//! Builds the home-win email and the per-run console lines. Everything here
//! is pure string assembly so the wording can be pinned down in tests.

use crate::types::{GameResult, Outcome};

/// Build the (subject, body) pair for a home-win email.
pub fn home_win_email(team_name: &str, result: &GameResult) -> (String, String) {
    let subject = format!("🎉 {team_name} Won a Home Game!");

    let mut body = String::new();
    body.push_str(&format!(
        "Great news! The {} won their home game yesterday ({})!\n\n",
        team_name,
        result.date.format("%Y-%m-%d")
    ));
    body.push_str(&format!(
        "Final Score: {} {} - {} {}\n",
        team_name, result.team_score, result.opponent_score, result.opponent_team
    ));
    body.push_str(&format!("Venue: {}\n\n", result.venue));
    body.push_str(&format!("Go {team_name}! 🟢⚾"));

    (subject, body)
}

/// Console echo of the game that was found.
pub fn result_lines(team_name: &str, result: &GameResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Date: {}\n", result.date.format("%Y-%m-%d")));
    out.push_str(&format!("Home game: {}\n", result.home_game));
    out.push_str(&format!("{} won: {}\n", team_name, result.won));
    out.push_str(&format!(
        "Score: {} {} - {} {}\n",
        team_name, result.team_score, result.opponent_score, result.opponent_team
    ));
    out.push_str(&format!("Venue: {}", result.venue));
    out
}

/// One closing line per run saying what happened.
pub fn action_line(team_name: &str, outcome: Outcome) -> String {
    match outcome {
        Outcome::ScheduleUnavailable => {
            "Could not fetch yesterday's schedule, no email sent.".to_string()
        }
        Outcome::NoGame => format!("No {team_name} game found for yesterday."),
        Outcome::Loss => format!("{team_name} lost, no email sent."),
        Outcome::AwayWin => format!("{team_name} didn't play at home, no email sent."),
        Outcome::HomeWin { notified: true } => "Email sent successfully!".to_string(),
        Outcome::HomeWin { notified: false } => {
            "Home win, but sending the email failed.".to_string()
        }
    }
}
