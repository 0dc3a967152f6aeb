//! Reading HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{
    CloseReadingCommand, GetChapterBar, NavigateChapterCommand, OpenReadingCommand,
};
use crate::domain::document::DocumentId;
use crate::domain::reading::Direction;
use crate::infrastructure::http::dto::{
    ApiResponse, ChapterBarDto, CloseReadingResponseDto, NavigateResponseDto, OpenReadingRequest,
    SessionRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Open
// ============================================================================

pub async fn open_reading(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OpenReadingRequest>,
) -> Result<Json<ApiResponse<ChapterBarDto>>, ApiError> {
    let cmd = OpenReadingCommand {
        document_id: DocumentId::from_uuid(req.document_id),
        start_chapter: req.start_chapter,
    };

    let result = state.open_reading_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(ChapterBarDto::from(result.view))))
}

// ============================================================================
// Bar
// ============================================================================

pub async fn chapter_bar(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ApiResponse<ChapterBarDto>>, ApiError> {
    let query = GetChapterBar {
        session_id: req.session_id,
    };

    let view = state.get_chapter_bar_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(ChapterBarDto::from(view))))
}

// ============================================================================
// Previous / Next
// ============================================================================

pub async fn previous_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ApiResponse<NavigateResponseDto>>, ApiError> {
    navigate(&state, req.session_id, Direction::Previous).await
}

pub async fn next_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ApiResponse<NavigateResponseDto>>, ApiError> {
    navigate(&state, req.session_id, Direction::Next).await
}

async fn navigate(
    state: &AppState,
    session_id: String,
    direction: Direction,
) -> Result<Json<ApiResponse<NavigateResponseDto>>, ApiError> {
    let cmd = NavigateChapterCommand {
        session_id,
        direction,
    };

    let result = state.navigate_chapter_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(NavigateResponseDto {
        moved: result.moved,
        bar: ChapterBarDto::from(result.view),
    })))
}

// ============================================================================
// Close
// ============================================================================

pub async fn close_reading(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ApiResponse<CloseReadingResponseDto>>, ApiError> {
    let cmd = CloseReadingCommand {
        session_id: req.session_id,
    };

    let result = state.close_reading_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(CloseReadingResponseDto {
        session_id: result.session_id,
    })))
}
