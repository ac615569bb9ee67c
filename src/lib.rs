//! homewin_alert - Checks yesterday's MLB schedule and emails when the tracked team wins at home

pub mod clients;
pub mod config;
pub mod mailer;
pub mod report;
pub mod runner;
pub mod types;

pub use config::Config;
pub use types::{GameResult, Outcome};
