//! Single-run orchestration
//!
//! Fetches the schedule for yesterday, reports what was found, and sends
//! the email when the tracked team won at home. Fetch and send failures are
//! logged and folded into the returned outcome; they never abort the run.

use chrono::{Duration, Local, NaiveDate};
use log::{error, info};

use crate::clients::StatsApiClient;
use crate::config::Config;
use crate::mailer::Notifier;
use crate::report;
use crate::types::Outcome;

/// The date a run looks at: yesterday on the local clock.
pub fn date_of_interest() -> NaiveDate {
    Local::now().date_naive() - Duration::days(1)
}

pub async fn run(
    cfg: &Config,
    client: &StatsApiClient,
    notifier: &dyn Notifier,
    date: NaiveDate,
) -> Outcome {
    let outcome = match client.team_result(cfg.team_id, date).await {
        Err(e) => {
            error!("Error fetching game data: {}", e);
            Outcome::ScheduleUnavailable
        }
        Ok(None) => Outcome::NoGame,
        Ok(Some(result)) => {
            println!("{}", report::result_lines(&cfg.team_name, &result));

            if result.is_home_win() {
                let (subject, body) = report::home_win_email(&cfg.team_name, &result);
                match notifier.send(&subject, &body).await {
                    Ok(()) => {
                        info!("Home win email sent to {}", cfg.to_email);
                        Outcome::HomeWin { notified: true }
                    }
                    Err(e) => {
                        error!("Error sending email: {}", e);
                        Outcome::HomeWin { notified: false }
                    }
                }
            } else if result.won {
                Outcome::AwayWin
            } else {
                Outcome::Loss
            }
        }
    };

    println!("{}", report::action_line(&cfg.team_name, outcome));
    outcome
}
