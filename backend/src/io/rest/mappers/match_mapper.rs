use crate::domain::models::match_state::{MatchState, PointEvent as DomainPointEvent, Team as DomainTeam};
use shared::{MatchStateResponse, PointEvent as SharedPointEvent, Team as SharedTeam};

pub struct MatchMapper;

impl MatchMapper {
    pub fn to_dto(state: &MatchState) -> MatchStateResponse {
        MatchStateResponse {
            score_a: state.score_a(),
            score_b: state.score_b(),
            is_over: state.is_over(),
            winner: state.winner().map(Self::to_dto_team),
            history: state.history().iter().map(Self::to_dto_event).collect(),
            can_undo: !state.history().is_empty(),
        }
    }

    fn to_dto_event(event: &DomainPointEvent) -> SharedPointEvent {
        SharedPointEvent {
            score_a: event.score_a,
            score_b: event.score_b,
            team: Self::to_dto_team(event.team),
        }
    }

    fn to_dto_team(team: DomainTeam) -> SharedTeam {
        match team {
            DomainTeam::A => SharedTeam::A,
            DomainTeam::B => SharedTeam::B,
        }
    }
}
