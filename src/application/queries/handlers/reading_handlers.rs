//! Reading Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentProviderPort, NavigationStorePort};
use crate::application::queries::{resolve_position, ChapterBarView, GetChapterBar};

/// GetChapterBar Handler - 计算导航栏视图，不修改任何状态
pub struct GetChapterBarHandler {
    store: Arc<dyn NavigationStorePort>,
    documents: Arc<dyn DocumentProviderPort>,
}

impl GetChapterBarHandler {
    pub fn new(store: Arc<dyn NavigationStorePort>, documents: Arc<dyn DocumentProviderPort>) -> Self {
        Self { store, documents }
    }

    pub async fn handle(&self, query: GetChapterBar) -> Result<ChapterBarView, ApplicationError> {
        let session = self.store.get(&query.session_id)?;
        let document = self.documents.find_by_id(session.document_id).await?;
        if document.is_none() {
            tracing::warn!(
                session_id = %session.id,
                document_id = %session.document_id,
                "Document missing, treating as single chapter"
            );
        }

        let position = resolve_position(session.current_chapter_index, document.as_ref());
        self.store.touch(&session.id);

        Ok(ChapterBarView::new(
            session.id,
            session.document_id,
            position,
            document.as_ref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ReadingSession;
    use crate::domain::document::{Document, DocumentId, Title};
    use crate::domain::reading::Boundary;
    use crate::infrastructure::memory::{InMemoryDocumentProvider, InMemoryNavigationStore};

    async fn setup(chapters: usize, start: u32) -> (GetChapterBarHandler, String) {
        let store = Arc::new(InMemoryNavigationStore::new());
        let documents = Arc::new(InMemoryDocumentProvider::new());
        let titles: Vec<String> = (1..=chapters).map(|n| format!("第{}章", n)).collect();
        let document = Document::new(Title::new("书").unwrap(), titles, 100).unwrap();
        let session = ReadingSession::new(*document.id(), start);
        documents.save(document).await.unwrap();
        let session_id = store.create(session).unwrap();
        (GetChapterBarHandler::new(store, documents), session_id)
    }

    #[tokio::test]
    async fn test_first_chapter_view() {
        let (handler, session_id) = setup(5, 0).await;
        let view = handler.handle(GetChapterBar { session_id }).await.unwrap();

        assert!(!view.can_go_previous);
        assert!(view.can_go_next);
        assert_eq!(view.progress.numerator, 1);
        assert_eq!(view.progress.denominator, 5);
        assert_eq!(view.progress.percent, 20.0);
        assert_eq!(view.chapter_title.as_deref(), Some("第1章"));
    }

    #[tokio::test]
    async fn test_last_chapter_view() {
        let (handler, session_id) = setup(5, 4).await;
        let view = handler.handle(GetChapterBar { session_id }).await.unwrap();

        assert!(view.can_go_previous);
        assert!(!view.can_go_next);
        assert_eq!(view.boundary, Boundary::AtLast);
        assert_eq!(view.progress.percent, 100.0);
    }

    #[tokio::test]
    async fn test_missing_document_falls_back_to_single_chapter() {
        let store = Arc::new(InMemoryNavigationStore::new());
        let documents = Arc::new(InMemoryDocumentProvider::new());
        let session_id = store
            .create(ReadingSession::new(DocumentId::new(), 0))
            .unwrap();

        let handler = GetChapterBarHandler::new(store, documents);
        let view = handler.handle(GetChapterBar { session_id }).await.unwrap();

        assert!(!view.can_go_previous);
        assert!(!view.can_go_next);
        assert_eq!(view.boundary, Boundary::Single);
        assert_eq!(view.progress.label(), "1/1");
        assert_eq!(view.progress.percent, 100.0);
        assert!(view.chapter_title.is_none());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let (handler, _) = setup(3, 0).await;
        let result = handler
            .handle(GetChapterBar {
                session_id: "missing".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }
}
