//! Configuration for homewin_alert
//!
//! All settings come from environment variables (a local .env file works too).
//! The SMTP settings and the recipient have no defaults and must be set; the
//! team and API settings default to the LA Dodgers on the MLB Stats API.

use anyhow::{anyhow, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    // Team selection
    pub team_id: u32,
    pub team_name: String,
    pub sport_id: u32,

    // Stats API
    pub stats_api_base_url: String,

    // SMTP delivery
    pub email_user: String,
    pub email_pass: String,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub to_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let email_user =
            env::var("EMAIL_USER").map_err(|_| anyhow!("EMAIL_USER must be set"))?;
        let email_pass =
            env::var("EMAIL_PASS").map_err(|_| anyhow!("EMAIL_PASS must be set"))?;
        let smtp_server =
            env::var("SMTP_SERVER").map_err(|_| anyhow!("SMTP_SERVER must be set"))?;
        let to_email = env::var("TO_EMAIL").map_err(|_| anyhow!("TO_EMAIL must be set"))?;

        let smtp_port: u16 = env::var("SMTP_PORT")
            .map_err(|_| anyhow!("SMTP_PORT must be set"))?
            .parse()
            .map_err(|_| anyhow!("SMTP_PORT must be a valid u16"))?;
        if smtp_port == 0 {
            return Err(anyhow!("SMTP_PORT must be > 0"));
        }

        Ok(Self {
            team_id: parse_u32("TEAM_ID", 119)?,

            team_name: env::var("TEAM_NAME").unwrap_or_else(|_| "LA Dodgers".to_string()),

            sport_id: parse_u32("SPORT_ID", 1)?,

            stats_api_base_url: env::var("STATS_API_BASE_URL")
                .unwrap_or_else(|_| "https://statsapi.mlb.com".to_string()),

            email_user,
            email_pass,
            smtp_server,
            smtp_port,
            to_email,
        })
    }
}

/// Parse environment variable as u32 with default fallback
fn parse_u32(var_name: &str, default: u32) -> Result<u32> {
    match env::var(var_name) {
        Ok(val) => val.parse().map_err(|_| anyhow!("{} must be a valid u32", var_name)),
        Err(_) => Ok(default),
    }
}
