use std::io::Write;

use colored::Colorize;

pub mod error;
pub mod fetch;
pub mod model;
pub mod percentile;
pub mod report;

pub use error::Error;
pub use fetch::StatsClient;

pub const DEFAULT_API_URL: &str = "https://api.foldingathome.org";
pub const DEFAULT_TEAM: u64 = 236098;
pub const DEFAULT_RESULT_LIMIT: usize = 20;
pub const DEFAULT_MARGIN: usize = 2;

/// Settings for a run, gathered from the environment
#[derive(Debug, Clone)]
pub struct Bootstrap {
    pub api_url: String,
    /// Team reported when no ids are given on the command line
    pub default_team: u64,
    /// Maximum number of members shown per team
    pub result_limit: usize,
    /// Spaces between member table columns
    pub margin: usize,
}

impl Bootstrap {
    pub fn new() -> Result<Self, Error> {
        println!(
            "{}",
            "I'm checking the environment for FAH_API_URL, FAH_DEFAULT_TEAM and FAH_RESULT_LIMIT..."
                .yellow()
        );

        let api_url = std::env::var("FAH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        println!("{} {}", "I will query:".green(), api_url.white());

        let default_team = match std::env::var("FAH_DEFAULT_TEAM") {
            Ok(team) => team
                .trim()
                .parse::<u64>()
                .map_err(|e| Error::Config(format!("FAH_DEFAULT_TEAM {team:?}: {e}")))?,
            Err(_) => DEFAULT_TEAM,
        };

        let result_limit = match std::env::var("FAH_RESULT_LIMIT") {
            Ok(limit) => match limit.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(Error::Config(
                        "FAH_RESULT_LIMIT must be at least 1".to_string(),
                    ))
                }
                Ok(limit) => limit,
                Err(e) => {
                    return Err(Error::Config(format!("FAH_RESULT_LIMIT {limit:?}: {e}")));
                }
            },
            Err(_) => DEFAULT_RESULT_LIMIT,
        };

        Ok(Self {
            default_team,
            result_limit,
            ..Self::with_base_url(&api_url)
        })
    }

    /// Default settings pointed at `api_url`, without looking at the environment
    pub fn with_base_url(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            default_team: DEFAULT_TEAM,
            result_limit: DEFAULT_RESULT_LIMIT,
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Fetch and print the summary and member table of every team in `team_ids`,
/// in order. Falls back to the configured default team when `team_ids` is
/// empty. Stops at the first failure.
pub fn run_report(
    client: &StatsClient,
    bootstrap: &Bootstrap,
    team_ids: &[u64],
    out: &mut impl Write,
) -> Result<(), Error> {
    let default_team = [bootstrap.default_team];
    let team_ids = if team_ids.is_empty() {
        &default_team[..]
    } else {
        team_ids
    };

    let total_teams = client.fetch_team_count()?;
    println!(
        "{} {} {}",
        "Success! There are".green(),
        total_teams.to_string().white(),
        "teams".green()
    );

    for &team_id in team_ids {
        let info = client.fetch_team_info(team_id)?;
        let members = client.fetch_members(team_id)?;
        log::debug!("team {team_id}: {} members", members.len());

        writeln!(out)?;
        report::write_team_summary(
            out,
            &info,
            total_teams,
            members.len(),
            &chrono::Local::now(),
        )?;
        report::write_member_table(out, &members, bootstrap.margin, bootstrap.result_limit)?;
        out.flush()?;
    }

    Ok(())
}
