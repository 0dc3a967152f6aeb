//! Document Query Handlers

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::error::ApplicationError;
use crate::application::ports::DocumentProviderPort;
use crate::application::queries::{GetDocument, ListDocuments};
use crate::domain::document::{Document, DocumentId};

// ============================================================================
// Response DTOs
// ============================================================================

/// 文档详情响应
#[derive(Debug, Clone)]
pub struct DocumentResponse {
    pub id: DocumentId,
    pub title: String,
    pub chapter_count: u32,
    pub chapter_titles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            id: *document.id(),
            title: document.title().to_string(),
            chapter_count: document.chapter_count().get(),
            chapter_titles: document
                .chapters()
                .iter()
                .map(|c| c.title().to_string())
                .collect(),
            created_at: document.created_at(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetDocument Handler
pub struct GetDocumentHandler {
    documents: Arc<dyn DocumentProviderPort>,
}

impl GetDocumentHandler {
    pub fn new(documents: Arc<dyn DocumentProviderPort>) -> Self {
        Self { documents }
    }

    pub async fn handle(&self, query: GetDocument) -> Result<DocumentResponse, ApplicationError> {
        let document = self
            .documents
            .find_by_id(query.document_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Document", query.document_id))?;

        Ok(DocumentResponse::from(document))
    }
}

/// ListDocuments Handler
pub struct ListDocumentsHandler {
    documents: Arc<dyn DocumentProviderPort>,
}

impl ListDocumentsHandler {
    pub fn new(documents: Arc<dyn DocumentProviderPort>) -> Self {
        Self { documents }
    }

    pub async fn handle(
        &self,
        _query: ListDocuments,
    ) -> Result<Vec<DocumentResponse>, ApplicationError> {
        let mut documents = self.documents.find_all().await?;
        documents.sort_by_key(|d| d.created_at());
        Ok(documents.into_iter().map(DocumentResponse::from).collect())
    }
}
