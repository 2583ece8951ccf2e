//! Badminton game scoring.
//!
//! A game goes to 21 and must be won by two clear points. From 20-all play
//! continues until someone leads by two, capped at 30: at 29-all the next
//! point wins.

use std::fmt;

/// Points needed before a two point lead ends the game
pub const GAME_POINT: u32 = 21;
/// Score that ends the game regardless of the lead
pub const SCORE_CAP: u32 = 30;
/// Lead required once a side reaches [`GAME_POINT`]
pub const WINNING_MARGIN: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn from_string(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Team::A),
            "B" => Ok(Team::B),
            other => Err(format!("Unknown team: {}", other)),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => write!(f, "A"),
            Team::B => write!(f, "B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Over { winner: Team },
}

/// Scores right after a point, plus who won the rally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointEvent {
    pub score_a: u32,
    pub score_b: u32,
    pub team: Team,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    score_a: u32,
    score_b: u32,
    status: MatchStatus,
    history: Vec<PointEvent>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            score_a: 0,
            score_b: 0,
            status: MatchStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Rebuild a state from persisted parts without replaying history
    pub fn from_parts(score_a: u32, score_b: u32, status: MatchStatus, history: Vec<PointEvent>) -> Self {
        Self {
            score_a,
            score_b,
            status,
            history,
        }
    }

    pub fn score_a(&self) -> u32 {
        self.score_a
    }

    pub fn score_b(&self) -> u32 {
        self.score_b
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn history(&self) -> &[PointEvent] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, MatchStatus::Over { .. })
    }

    pub fn winner(&self) -> Option<Team> {
        match self.status {
            MatchStatus::Over { winner } => Some(winner),
            MatchStatus::InProgress => None,
        }
    }

    /// Give one point to `team`. Returns false when the game is already over.
    pub fn award_point(&mut self, team: Team) -> bool {
        if self.is_over() {
            return false;
        }

        let score = match team {
            Team::A => &mut self.score_a,
            Team::B => &mut self.score_b,
        };
        let Some(next) = score.checked_add(1) else {
            return false;
        };
        *score = next;
        self.history.push(PointEvent {
            score_a: self.score_a,
            score_b: self.score_b,
            team,
        });

        if let Some(winner) = decide_winner(self.score_a, self.score_b, team) {
            self.status = MatchStatus::Over { winner };
        }
        true
    }

    /// Take back the last point. Returns false when there is nothing to undo.
    ///
    /// Undo always reopens the game, even when the restored score would
    /// still satisfy the win condition.
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }

        match self.history.last() {
            Some(previous) => {
                self.score_a = previous.score_a;
                self.score_b = previous.score_b;
            }
            None => {
                self.score_a = 0;
                self.score_b = 0;
            }
        }
        self.status = MatchStatus::InProgress;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Winner for the given score, if the game is decided.
///
/// Equal scores at the cap cannot happen with single point increments; if
/// they ever do, the side that scored last takes the game.
pub fn decide_winner(score_a: u32, score_b: u32, scored_last: Team) -> Option<Team> {
    let leader = match score_a.cmp(&score_b) {
        std::cmp::Ordering::Greater => Team::A,
        std::cmp::Ordering::Less => Team::B,
        std::cmp::Ordering::Equal => scored_last,
    };

    if score_a >= SCORE_CAP || score_b >= SCORE_CAP {
        return Some(leader);
    }
    if (score_a >= GAME_POINT || score_b >= GAME_POINT) && score_a.abs_diff(score_b) >= WINNING_MARGIN {
        return Some(leader);
    }
    None
}
