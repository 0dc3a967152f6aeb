//! Document HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetDocument, ListDocuments, LoadDocument, UnloadDocument};
use crate::domain::document::DocumentId;
use crate::infrastructure::http::dto::{
    ApiResponse, DocumentDto, DocumentIdRequest, LoadDocumentRequest, LoadDocumentResponseDto,
    UnloadDocumentResponseDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn load_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoadDocumentRequest>,
) -> Result<Json<ApiResponse<LoadDocumentResponseDto>>, ApiError> {
    let cmd = LoadDocument {
        title: req.title,
        chapter_titles: req.chapters,
    };

    let result = state.load_document_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(LoadDocumentResponseDto {
        id: *result.document_id.as_uuid(),
        title: result.title,
        chapter_count: result.chapter_count,
    })))
}

pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DocumentIdRequest>,
) -> Result<Json<ApiResponse<DocumentDto>>, ApiError> {
    let query = GetDocument {
        document_id: DocumentId::from_uuid(req.id),
    };

    let result = state.get_document_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(DocumentDto::from(result))))
}

pub async fn list_documents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<DocumentDto>>>, ApiError> {
    let result = state.list_documents_handler.handle(ListDocuments).await?;

    Ok(Json(ApiResponse::success(
        result.into_iter().map(DocumentDto::from).collect(),
    )))
}

pub async fn unload_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DocumentIdRequest>,
) -> Result<Json<ApiResponse<UnloadDocumentResponseDto>>, ApiError> {
    let cmd = UnloadDocument {
        document_id: DocumentId::from_uuid(req.id),
    };

    let result = state.unload_document_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(UnloadDocumentResponseDto {
        id: *result.document_id.as_uuid(),
        closed_sessions: result.closed_sessions,
    })))
}
