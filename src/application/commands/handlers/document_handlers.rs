//! Document Command Handlers

use std::sync::Arc;

use crate::application::commands::document_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentProviderPort, NavigationStorePort};
use crate::domain::document::{Document, DocumentError, Title};
use crate::infrastructure::events::EventPublisher;

/// LoadDocument Handler - 校验并保存文档
pub struct LoadDocumentHandler {
    documents: Arc<dyn DocumentProviderPort>,
    event_publisher: Arc<EventPublisher>,
    max_chapters: usize,
}

impl LoadDocumentHandler {
    pub fn new(
        documents: Arc<dyn DocumentProviderPort>,
        event_publisher: Arc<EventPublisher>,
        max_chapters: usize,
    ) -> Self {
        Self {
            documents,
            event_publisher,
            max_chapters,
        }
    }

    pub async fn handle(&self, cmd: LoadDocument) -> Result<LoadDocumentResponse, ApplicationError> {
        let title = Title::new(cmd.title)
            .map_err(|e| DocumentError::InvalidTitle(e.to_string()))?;

        let document = Document::new(title, cmd.chapter_titles, self.max_chapters)?;
        let document_id = *document.id();
        let title = document.title().to_string();
        let chapter_count = document.chapter_count().get();

        if document.chapters().is_empty() {
            tracing::warn!(
                document_id = %document_id,
                "Document has no chapters, treating as single chapter"
            );
        }

        self.documents.save(document).await?;

        tracing::info!(
            document_id = %document_id,
            title = %title,
            chapter_count = chapter_count,
            "Document loaded"
        );

        self.event_publisher
            .publish_document_loaded(*document_id.as_uuid(), &title, chapter_count);

        Ok(LoadDocumentResponse {
            document_id,
            title,
            chapter_count,
        })
    }
}

/// UnloadDocument Handler - 删除文档并关闭它的阅读会话
pub struct UnloadDocumentHandler {
    documents: Arc<dyn DocumentProviderPort>,
    store: Arc<dyn NavigationStorePort>,
    event_publisher: Arc<EventPublisher>,
}

impl UnloadDocumentHandler {
    pub fn new(
        documents: Arc<dyn DocumentProviderPort>,
        store: Arc<dyn NavigationStorePort>,
        event_publisher: Arc<EventPublisher>,
    ) -> Self {
        Self {
            documents,
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: UnloadDocument,
    ) -> Result<UnloadDocumentResponse, ApplicationError> {
        // 先删除文档：之后的 OpenReading 都会得到 NotFound，
        // 删除前已解析到文档的会话由下面的清扫关闭
        self.documents.delete(cmd.document_id).await?;

        let mut closed_sessions = 0;
        for session_id in self.store.find_by_document(cmd.document_id) {
            // 会话可能已被并发关闭
            if self.store.close(&session_id).is_ok() {
                self.event_publisher
                    .publish_reading_closed(&session_id, "document_unloaded");
                self.event_publisher.unregister_session(&session_id);
                closed_sessions += 1;
            }
        }

        tracing::info!(
            document_id = %cmd.document_id,
            closed_sessions = closed_sessions,
            "Document unloaded"
        );

        self.event_publisher
            .publish_document_unloaded(*cmd.document_id.as_uuid());

        Ok(UnloadDocumentResponse {
            document_id: cmd.document_id,
            closed_sessions,
        })
    }
}
