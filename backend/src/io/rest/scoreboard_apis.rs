use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{info, warn};

use crate::domain::models::match_state::Team;
use crate::io::rest::mappers::match_mapper::MatchMapper;
use crate::AppState;

/// Routes for the shared scoreboard, nested under `/api/score`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_score))
        .route("/point/:team", post(award_point))
        .route("/undo", post(undo_point))
        .route("/reset", post(reset_score))
}

async fn get_score(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/score");
    Json(MatchMapper::to_dto(&state.scoreboard_service.current()))
}

/// Award one point; points after the game is decided are ignored
async fn award_point(State(state): State<AppState>, Path(team): Path<String>) -> impl IntoResponse {
    info!("POST /api/score/point/{}", team);

    let team = match Team::from_string(&team) {
        Ok(team) => team,
        Err(e) => {
            warn!("Rejected point: {}", e);
            return (StatusCode::BAD_REQUEST, e).into_response();
        }
    };

    let match_state = state.scoreboard_service.award_point(team);
    (StatusCode::OK, Json(MatchMapper::to_dto(&match_state))).into_response()
}

async fn undo_point(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/score/undo");
    Json(MatchMapper::to_dto(&state.scoreboard_service.undo()))
}

async fn reset_score(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/score/reset");
    Json(MatchMapper::to_dto(&state.scoreboard_service.reset()))
}
