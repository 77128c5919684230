//! Handler for the table build.

use std::sync::Arc;

use chrono::Local;
use tracing::info;

use super::command::Cli;
use super::output::{self, OutputConfig};
use super::table::render;
use crate::adapter::outbound::mlb::MlbStatsClient;
use crate::application::usage::{UsageReport, UsageRequest, UsageService};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Load configuration, build the table for today and print it.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json));

    let config = Config::load_or_default(&cli.config)?;
    config.init_logging();
    info!(config = %cli.config.display(), "bullpen starting");

    let provider = Arc::new(MlbStatsClient::from_config(&config.provider));
    let service = UsageService::new(provider, config.table.clone());
    let request = UsageRequest {
        team: cli.team.clone(),
        league: cli.league,
        today: Local::now().date_naive(),
    };

    let report = service.build(&request).await?;
    print_report(&cli, &report, &config.table.no_pitches)?;

    Ok(())
}

fn print_report(cli: &Cli, report: &UsageReport, marker: &str) -> Result<()> {
    if output::is_json() {
        output::json_output(&serde_json::to_value(report)?);
        return Ok(());
    }

    output::header(
        &cli.team,
        format!(
            "team {} · league {} · {} to {}",
            report.team_id, report.league, report.start, report.end
        ),
    );
    output::lines(&render(&report.table, marker));
    Ok(())
}
