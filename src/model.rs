use serde_json::Value;

use crate::error::Error;

/// The literal the members feed sometimes puts in the name column of a
/// header row mixed in with the real members.
pub const HEADER_ROW_NAME: &str = "name";

/// A team as reported by `/team/{id}`
#[derive(Debug, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct TeamInfo {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub rank: u64,
    pub score: u64,
    pub wus: u64,
    /// Active CPUs over the last 50 days. Not every deployment of the
    /// service reports it.
    #[serde(default)]
    pub active_50: Option<u64>,
}

/// One contributor of a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub name: String,
    pub id: u64,
    pub rank: Option<u64>,
    pub score: u64,
    pub wus: u64,
}

/// Members in the order the service ranks them, header rows already removed.
pub type MemberList = Vec<MemberRecord>;

/// Wire shape of a member: `[name, id, rank|null, score, wus]`
#[derive(serde::Deserialize)]
struct MemberRow(String, u64, Option<u64>, u64, u64);

impl From<MemberRow> for MemberRecord {
    fn from(row: MemberRow) -> Self {
        let MemberRow(name, id, rank, score, wus) = row;
        Self {
            name,
            id,
            rank,
            score,
            wus,
        }
    }
}

/// Return whether a raw member row is one of the header-shaped rows the feed
/// sometimes emits instead of a real member.
pub fn is_header_row(row: &Value) -> bool {
    row.get(0).and_then(Value::as_str) == Some(HEADER_ROW_NAME)
}

/// Parse the team count, which the service sends either as a bare number or
/// as a string holding one.
pub fn parse_team_count(value: &Value) -> Result<u64, Error> {
    let count = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    count.ok_or_else(|| Error::Schema(format!("the team count is not an integer: {value}")))
}

pub fn parse_team_info(value: Value) -> Result<TeamInfo, Error> {
    serde_json::from_value(value).map_err(|e| Error::Schema(format!("team info: {e}")))
}

/// Parse the members feed, dropping header rows wherever they appear.
pub fn parse_members(value: Value) -> Result<MemberList, Error> {
    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(Error::Schema(format!(
                "expected a list of members, got: {other}"
            )))
        }
    };

    rows.into_iter()
        .enumerate()
        .filter(|(_, row)| !is_header_row(row))
        .map(|(position, row)| {
            serde_json::from_value::<MemberRow>(row)
                .map(MemberRecord::from)
                .map_err(|e| Error::Schema(format!("member row {position}: {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_team_count_number_and_string() {
        assert_eq!(parse_team_count(&json!(262144)).unwrap(), 262144);
        assert_eq!(parse_team_count(&json!("500")).unwrap(), 500);
    }

    #[test]
    fn test_parse_team_count_rejects_garbage() {
        assert!(matches!(
            parse_team_count(&json!({"count": 3})),
            Err(Error::Schema(_))
        ));
        assert!(matches!(parse_team_count(&json!(-4)), Err(Error::Schema(_))));
    }

    #[test]
    fn test_parse_team_info() {
        let info = parse_team_info(json!({
            "id": 236098,
            "name": "Ratticon",
            "url": "https://example.org",
            "rank": 5,
            "score": 123456,
            "wus": 789,
            "founder": "someone"
        }))
        .unwrap();
        assert_eq!(info.id, 236098);
        assert_eq!(info.name, "Ratticon");
        assert_eq!(info.rank, 5);
        assert_eq!(info.active_50, None);
    }

    #[test]
    fn test_parse_team_info_missing_field() {
        let err = parse_team_info(json!({"id": 1, "name": "x", "url": "", "score": 1, "wus": 1}))
            .unwrap_err();
        match err {
            Error::Schema(msg) => assert!(msg.contains("rank"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_members_skips_header_rows_anywhere() {
        let members = parse_members(json!([
            ["name", "id", "rank", "score", "wus"],
            ["alice", 1, 10, 5000, 50],
            ["name", "id", "rank", "score", "wus"],
            ["bob", 2, null, 10, 1]
        ]))
        .unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, "alice");
        assert_eq!(members[0].rank, Some(10));
        assert_eq!(members[1].name, "bob");
        assert_eq!(members[1].rank, None);
    }

    #[test]
    fn test_parse_members_rank_zero_is_not_absent() {
        let members = parse_members(json!([["carol", 3, 0, 1, 1]])).unwrap();
        assert_eq!(members[0].rank, Some(0));
    }

    #[test]
    fn test_parse_members_bad_row() {
        let err = parse_members(json!([["alice", 1, 10, 5000, 50], ["bob", 2]])).unwrap_err();
        match err {
            Error::Schema(msg) => assert!(msg.starts_with("member row 1"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_members_not_a_list() {
        assert!(matches!(
            parse_members(json!({"members": []})),
            Err(Error::Schema(_))
        ));
    }
}
