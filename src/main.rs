use anyhow::{Context, Result};
use dotenv::dotenv;
use homewin_alert::clients::StatsApiClient;
use homewin_alert::mailer::SmtpMailer;
use homewin_alert::{runner, Config};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    info!("Starting homewin_alert...");

    let cfg = Config::from_env()?;
    info!(
        "Config: team={} (id={}) smtp={}:{} to={}",
        cfg.team_name, cfg.team_id, cfg.smtp_server, cfg.smtp_port, cfg.to_email
    );

    let client = StatsApiClient::new(&cfg);
    let mailer = SmtpMailer::new(&cfg).context("Failed to build SMTP transport")?;

    runner::run(&cfg, &client, &mailer, runner::date_of_interest()).await;

    Ok(())
}
