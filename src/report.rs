use std::fmt::Display;
use std::io::Write;

use chrono::{DateTime, TimeZone};

use crate::error::Error;
use crate::model::{MemberRecord, TeamInfo};
use crate::percentile::percentile;

/// Width of the label column in the team summary
const LABEL_WIDTH: usize = 14;

/// The service never lists more members than this, so hitting it exactly
/// means there are more we can't see.
pub const SERVICE_MEMBER_CAP: usize = 1000;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Shown in the rank column for members the service hasn't ranked yet
const NO_RANK: &str = "-";

fn write_field(out: &mut impl Write, label: &str, value: impl Display) -> Result<(), Error> {
    writeln!(out, "{:<width$}{value}", format!("{label}: "), width = LABEL_WIDTH)?;
    Ok(())
}

/// Member count as shown in the summary
pub fn member_count_label(count: usize) -> String {
    if count == SERVICE_MEMBER_CAP {
        format!("{SERVICE_MEMBER_CAP}+")
    } else {
        count.to_string()
    }
}

/// Write the summary block for a team
pub fn write_team_summary<Tz>(
    out: &mut impl Write,
    info: &TeamInfo,
    total_teams: u64,
    member_count: usize,
    as_of: &DateTime<Tz>,
) -> Result<(), Error>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let top = percentile(info.rank, total_teams, true)?;

    write_field(out, "Team", format!("{} ({})", info.name, info.id))?;
    write_field(out, "Homepage", &info.url)?;
    write_field(
        out,
        "Ranked",
        format!("{} of {total_teams} (Top {top}%)", info.rank),
    )?;
    write_field(out, "Score", info.score)?;
    write_field(out, "Work Units", info.wus)?;
    if let Some(active) = info.active_50 {
        write_field(out, "Active CPUs", format!("{active} in last 50 days"))?;
    }
    write_field(out, "Members", member_count_label(member_count))?;
    write_field(out, "As of", as_of.format(TIMESTAMP_FORMAT))?;
    writeln!(out)?;

    Ok(())
}

fn rank_label(rank: Option<u64>) -> String {
    match rank {
        Some(rank) => rank.to_string(),
        None => NO_RANK.to_string(),
    }
}

/// Write the member leaderboard, showing at most `result_limit` members.
///
/// Column widths only account for the rows actually shown; the header labels
/// are not measured and may stick out of a narrow column.
pub fn write_member_table(
    out: &mut impl Write,
    members: &[MemberRecord],
    margin: usize,
    result_limit: usize,
) -> Result<(), Error> {
    if members.is_empty() {
        writeln!(out, "(No members listed)")?;
        writeln!(out)?;
        return Ok(());
    }

    let shown = &members[..members.len().min(result_limit)];
    let rows: Vec<[String; 4]> = shown
        .iter()
        .map(|m| {
            [
                rank_label(m.rank),
                m.name.clone(),
                m.score.to_string(),
                m.wus.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let [rank_w, name_w, score_w, wus_w] = widths;
    let gap = " ".repeat(margin);

    writeln!(
        out,
        "{:>rank_w$}{gap}{:<name_w$}{gap}{:>score_w$}{gap}{:>wus_w$}",
        "Rank", "Name", "Score", "WUs"
    )?;
    writeln!(out, "{}", "-".repeat(widths.iter().sum::<usize>() + 3 * margin))?;

    for [rank, name, score, wus] in &rows {
        writeln!(
            out,
            "{rank:>rank_w$}{gap}{name:<name_w$}{gap}{score:>score_w$}{gap}{wus:>wus_w$}"
        )?;
    }

    if members.len() > rows.len() {
        writeln!(out, "[...] (List truncated to top {} members)", rows.len())?;
    }
    writeln!(out)?;

    Ok(())
}
