use colored::Colorize;
use log::debug;
use serde_json::Value;

use crate::error::Error;
use crate::model::{self, MemberList, TeamInfo};

/// Thin wrapper around a blocking HTTP client that knows the three
/// statistics endpoints we need.
pub struct StatsClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("fah-teamstats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Total number of teams registered with the service
    pub fn fetch_team_count(&self) -> Result<u64, Error> {
        println!("{}", "I'm fetching the total number of teams...".yellow());
        let value = self.get_json("/team/count")?;
        model::parse_team_count(&value)
    }

    pub fn fetch_team_info(&self, team_id: u64) -> Result<TeamInfo, Error> {
        println!(
            "{} {}...",
            "I'm downloading statistics for team id".yellow(),
            team_id.to_string().white()
        );
        let value = self.get_json(&format!("/team/{team_id}"))?;
        model::parse_team_info(value)
    }

    pub fn fetch_members(&self, team_id: u64) -> Result<MemberList, Error> {
        println!(
            "{} {}...",
            "I'm downloading the members of team id".yellow(),
            team_id.to_string().white()
        );
        let value = self.get_json(&format!("/team/{team_id}/members"))?;
        model::parse_members(value)
    }

    fn get_json(&self, path: &str) -> Result<Value, Error> {
        let url = format!("{}{path}", self.base_url);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        debug!("GET {url} -> {status}");
        if !status.is_success() {
            println!(
                "{}",
                format!("[API Response {} - ERROR]", status.as_u16()).red()
            );
            return Err(Error::BadStatus(status.as_u16()));
        }
        println!(
            "{}",
            format!("[API Response {} - OK]", status.as_u16()).green()
        );

        let content = response
            .text()
            .map_err(|e| Error::Protocol(e.to_string()))?;

        serde_json::from_str::<Value>(&content)
            .map_err(|e| Error::Protocol(format!("the response is not valid JSON: {e}")))
    }
}
