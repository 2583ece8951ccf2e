//! # Match Snapshot Format
//!
//! A saved match is a versioned JSON envelope:
//!
//! ```json
//! {"version":1,"state":{"score_a":21,"score_b":19,"is_over":true,"winner":"A",
//!   "history":[{"score_a":1,"score_b":0,"team":"A"}]}}
//! ```
//!
//! Snapshots written by the old browser scoreboard carry no version and use
//! camelCase keys (`scoreA`, `gameOver`, ...). They are still accepted, with
//! missing fields defaulting to an empty game.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::models::match_state::{decide_winner, MatchState, MatchStatus, PointEvent, Team};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u64),
    #[error("unknown team in snapshot: {0}")]
    Team(String),
    #[error("snapshot does not describe a reachable game: {0}")]
    Inconsistent(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEnvelope {
    version: u32,
    state: MatchRecord,
}

#[derive(Debug, Serialize, Deserialize)]
struct MatchRecord {
    score_a: u32,
    score_b: u32,
    is_over: bool,
    winner: Option<String>,
    history: Vec<PointRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PointRecord {
    score_a: u32,
    score_b: u32,
    team: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacySnapshot {
    score_a: Option<u32>,
    score_b: Option<u32>,
    game_over: Option<bool>,
    winner: Option<String>,
    history: Option<Vec<LegacyPoint>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyPoint {
    score_a: u32,
    score_b: u32,
    team: String,
}

impl From<&MatchState> for MatchRecord {
    fn from(state: &MatchState) -> Self {
        MatchRecord {
            score_a: state.score_a(),
            score_b: state.score_b(),
            is_over: state.is_over(),
            winner: state.winner().map(|team| team.to_string()),
            history: state
                .history()
                .iter()
                .map(|event| PointRecord {
                    score_a: event.score_a,
                    score_b: event.score_b,
                    team: event.team.to_string(),
                })
                .collect(),
        }
    }
}

fn parse_team(value: &str) -> Result<Team, SnapshotError> {
    Team::from_string(value).map_err(|_| SnapshotError::Team(value.to_string()))
}

fn build_state(
    score_a: u32,
    score_b: u32,
    is_over: bool,
    winner: Option<&str>,
    history: Vec<PointEvent>,
) -> Result<MatchState, SnapshotError> {
    let winner = winner.map(parse_team).transpose()?;
    let status = replay_status(score_a, score_b, &history)?;

    let expected_winner = match status {
        MatchStatus::Over { winner } => Some(winner),
        MatchStatus::InProgress => None,
    };
    if is_over != expected_winner.is_some() || (is_over && winner != expected_winner) {
        return Err(SnapshotError::Inconsistent(format!(
            "game over flag {} with winner {:?} at {}-{}",
            is_over, winner, score_a, score_b
        )));
    }
    Ok(MatchState::from_parts(score_a, score_b, status, history))
}

/// Walk the history from 0-0 and return the status it leads to.
///
/// Every entry must add one point to the named team, no point may follow a
/// decided game, and the last entry must match the saved scores.
fn replay_status(score_a: u32, score_b: u32, history: &[PointEvent]) -> Result<MatchStatus, SnapshotError> {
    let mut status = MatchStatus::InProgress;
    let (mut a, mut b) = (0u32, 0u32);

    for (index, point) in history.iter().enumerate() {
        if status != MatchStatus::InProgress {
            return Err(SnapshotError::Inconsistent(format!("point {} recorded after the game ended", index + 1)));
        }
        let expected = match point.team {
            Team::A => (a.checked_add(1), Some(b)),
            Team::B => (Some(a), b.checked_add(1)),
        };
        if expected != (Some(point.score_a), Some(point.score_b)) {
            return Err(SnapshotError::Inconsistent(format!(
                "point {} goes from {}-{} to {}-{}",
                index + 1,
                a,
                b,
                point.score_a,
                point.score_b
            )));
        }
        a = point.score_a;
        b = point.score_b;
        if let Some(winner) = decide_winner(a, b, point.team) {
            status = MatchStatus::Over { winner };
        }
    }

    if (a, b) != (score_a, score_b) {
        return Err(SnapshotError::Inconsistent(format!(
            "score {}-{} does not match history ending at {}-{}",
            score_a, score_b, a, b
        )));
    }
    Ok(status)
}

/// Serialize `state` into the current snapshot format
pub fn encode(state: &MatchState) -> Result<String, SnapshotError> {
    let envelope = SnapshotEnvelope {
        version: SNAPSHOT_VERSION,
        state: MatchRecord::from(state),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Read a snapshot in the current or the legacy format
pub fn decode(raw: &str) -> Result<MatchState, SnapshotError> {
    let value: Value = serde_json::from_str(raw)?;

    if let Some(version) = value.get("version") {
        let version = version.as_u64().unwrap_or(0);
        if version != u64::from(SNAPSHOT_VERSION) {
            return Err(SnapshotError::UnsupportedVersion(version));
        }
        let envelope: SnapshotEnvelope = serde_json::from_value(value)?;
        let record = envelope.state;
        let history = record
            .history
            .iter()
            .map(|point| {
                Ok(PointEvent {
                    score_a: point.score_a,
                    score_b: point.score_b,
                    team: parse_team(&point.team)?,
                })
            })
            .collect::<Result<Vec<_>, SnapshotError>>()?;
        return build_state(record.score_a, record.score_b, record.is_over, record.winner.as_deref(), history);
    }

    let legacy: LegacySnapshot = serde_json::from_value(value)?;
    let history = legacy
        .history
        .unwrap_or_default()
        .iter()
        .map(|point| {
            Ok(PointEvent {
                score_a: point.score_a,
                score_b: point.score_b,
                team: parse_team(&point.team)?,
            })
        })
        .collect::<Result<Vec<_>, SnapshotError>>()?;
    build_state(
        legacy.score_a.unwrap_or(0),
        legacy.score_b.unwrap_or(0),
        legacy.game_over.unwrap_or(false),
        legacy.winner.as_deref(),
        history,
    )
}
