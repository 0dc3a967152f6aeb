//! Reading Command Handlers
//!
//! 导航流程：从 store 读取权威索引 -> 纯状态转移 -> 仅在移动时写回。

use std::sync::Arc;

use crate::application::commands::reading_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentProviderPort, NavigationStorePort, ReadingSession};
use crate::application::queries::{resolve_position, ChapterBarView};
use crate::domain::reading::{ChapterPosition, Navigation};
use crate::infrastructure::events::EventPublisher;

/// OpenReading Handler - 为文档创建阅读会话
pub struct OpenReadingHandler {
    store: Arc<dyn NavigationStorePort>,
    documents: Arc<dyn DocumentProviderPort>,
}

impl OpenReadingHandler {
    pub fn new(store: Arc<dyn NavigationStorePort>, documents: Arc<dyn DocumentProviderPort>) -> Self {
        Self { store, documents }
    }

    pub async fn handle(
        &self,
        cmd: OpenReadingCommand,
    ) -> Result<OpenReadingResponse, ApplicationError> {
        let document = self
            .documents
            .find_by_id(cmd.document_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Document", cmd.document_id))?;

        let position = ChapterPosition::new(cmd.start_chapter, document.chapter_count())?;

        let session = ReadingSession::new(cmd.document_id, position.current_index());
        let session_id = self.store.create(session)?;

        tracing::info!(
            session_id = %session_id,
            document_id = %cmd.document_id,
            start_chapter = cmd.start_chapter,
            chapter_count = position.chapter_count().get(),
            "Reading session opened"
        );

        let view = ChapterBarView::new(&session_id, cmd.document_id, position, Some(&document));
        Ok(OpenReadingResponse { session_id, view })
    }
}

/// NavigateChapter Handler - 上一章 / 下一章
pub struct NavigateChapterHandler {
    store: Arc<dyn NavigationStorePort>,
    documents: Arc<dyn DocumentProviderPort>,
    event_publisher: Arc<EventPublisher>,
}

impl NavigateChapterHandler {
    pub fn new(
        store: Arc<dyn NavigationStorePort>,
        documents: Arc<dyn DocumentProviderPort>,
        event_publisher: Arc<EventPublisher>,
    ) -> Self {
        Self {
            store,
            documents,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: NavigateChapterCommand,
    ) -> Result<NavigateChapterResponse, ApplicationError> {
        let session = self.store.get(&cmd.session_id)?;
        let document = self.documents.find_by_id(session.document_id).await?;

        let direction = cmd.direction;
        let mut navigation: Option<Navigation> = None;
        let session = self.store.transition(&cmd.session_id, &mut |current| {
            let nav = resolve_position(current, document.as_ref()).step(direction);
            navigation = Some(nav);
            nav.moved().then(|| nav.position().current_index())
        })?;
        let navigation = navigation
            .ok_or_else(|| ApplicationError::internal("navigation transition did not run"))?;

        let position = navigation.position();
        match navigation {
            Navigation::Moved { from, to } => {
                tracing::info!(
                    session_id = %session.id,
                    direction = direction.as_str(),
                    from = from.current_index(),
                    to = to.current_index(),
                    chapter_count = to.chapter_count().get(),
                    "Chapter changed"
                );
                self.event_publisher.publish_chapter_changed(
                    &session.id,
                    to.current_index(),
                    to.chapter_count().get(),
                    to.progress().percent,
                );
            }
            Navigation::Blocked { at } => {
                tracing::debug!(
                    session_id = %session.id,
                    direction = direction.as_str(),
                    chapter_index = at.current_index(),
                    "Navigation blocked at boundary"
                );
            }
        }

        Ok(NavigateChapterResponse {
            moved: navigation.moved(),
            view: ChapterBarView::new(
                session.id,
                session.document_id,
                position,
                document.as_ref(),
            ),
        })
    }
}

/// CloseReading Handler - 关闭阅读会话
pub struct CloseReadingHandler {
    store: Arc<dyn NavigationStorePort>,
    event_publisher: Arc<EventPublisher>,
}

impl CloseReadingHandler {
    pub fn new(store: Arc<dyn NavigationStorePort>, event_publisher: Arc<EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CloseReadingCommand,
    ) -> Result<CloseReadingResponse, ApplicationError> {
        self.store.close(&cmd.session_id)?;

        self.event_publisher
            .publish_reading_closed(&cmd.session_id, "closed_by_client");
        self.event_publisher.unregister_session(&cmd.session_id);

        tracing::info!(session_id = %cmd.session_id, "Reading session closed");

        Ok(CloseReadingResponse {
            session_id: cmd.session_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{Document, DocumentId, Title};
    use crate::domain::reading::Direction;
    use crate::infrastructure::events::ReadingEvent;
    use crate::infrastructure::memory::{InMemoryDocumentProvider, InMemoryNavigationStore};

    struct Fixture {
        store: Arc<InMemoryNavigationStore>,
        documents: Arc<InMemoryDocumentProvider>,
        publisher: Arc<EventPublisher>,
        document_id: DocumentId,
    }

    impl Fixture {
        async fn new(chapters: usize) -> Self {
            let documents = Arc::new(InMemoryDocumentProvider::new());
            let titles: Vec<String> = (1..=chapters).map(|n| format!("Chapter {}", n)).collect();
            let document = Document::new(Title::new("Book").unwrap(), titles, 100).unwrap();
            let document_id = *document.id();
            documents.save(document).await.unwrap();
            Self {
                store: Arc::new(InMemoryNavigationStore::new()),
                documents,
                publisher: Arc::new(EventPublisher::new()),
                document_id,
            }
        }

        fn open_handler(&self) -> OpenReadingHandler {
            OpenReadingHandler::new(self.store.clone(), self.documents.clone())
        }

        fn navigate_handler(&self) -> NavigateChapterHandler {
            NavigateChapterHandler::new(
                self.store.clone(),
                self.documents.clone(),
                self.publisher.clone(),
            )
        }

        async fn open(&self, start_chapter: u32) -> String {
            self.open_handler()
                .handle(OpenReadingCommand {
                    document_id: self.document_id,
                    start_chapter,
                })
                .await
                .unwrap()
                .session_id
        }

        async fn navigate(&self, session_id: &str, direction: Direction) -> NavigateChapterResponse {
            self.navigate_handler()
                .handle(NavigateChapterCommand {
                    session_id: session_id.to_string(),
                    direction,
                })
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn test_open_reading_returns_initial_view() {
        let fx = Fixture::new(5).await;
        let response = fx
            .open_handler()
            .handle(OpenReadingCommand {
                document_id: fx.document_id,
                start_chapter: 0,
            })
            .await
            .unwrap();

        assert_eq!(response.view.progress.label(), "1/5");
        assert_eq!(response.view.progress.percent, 20.0);
        assert!(!response.view.can_go_previous);
        assert!(response.view.can_go_next);
        assert!(fx.store.is_valid(&response.session_id));
    }

    #[tokio::test]
    async fn test_open_rejects_start_chapter_outside_document() {
        let fx = Fixture::new(3).await;
        let result = fx
            .open_handler()
            .handle(OpenReadingCommand {
                document_id: fx.document_id,
                start_chapter: 3,
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_open_unknown_document_is_not_found() {
        let fx = Fixture::new(3).await;
        let result = fx
            .open_handler()
            .handle(OpenReadingCommand {
                document_id: DocumentId::new(),
                start_chapter: 0,
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_next_moves_and_writes_back() {
        let fx = Fixture::new(5).await;
        let session_id = fx.open(0).await;

        let response = fx.navigate(&session_id, Direction::Next).await;
        assert!(response.moved);
        assert_eq!(response.view.chapter_index, 1);
        assert_eq!(response.view.chapter_title.as_deref(), Some("Chapter 2"));
        assert_eq!(fx.store.get(&session_id).unwrap().current_chapter_index, 1);
    }

    #[tokio::test]
    async fn test_next_at_last_chapter_is_noop() {
        let fx = Fixture::new(5).await;
        let session_id = fx.open(4).await;

        let first = fx.navigate(&session_id, Direction::Next).await;
        let second = fx.navigate(&session_id, Direction::Next).await;

        assert!(!first.moved);
        assert!(!second.moved);
        assert_eq!(first.view.progress, second.view.progress);
        assert_eq!(first.view.progress.percent, 100.0);
        assert_eq!(fx.store.get(&session_id).unwrap().current_chapter_index, 4);
    }

    #[tokio::test]
    async fn test_previous_at_first_chapter_is_noop() {
        let fx = Fixture::new(5).await;
        let session_id = fx.open(0).await;

        let response = fx.navigate(&session_id, Direction::Previous).await;
        assert!(!response.moved);
        assert_eq!(fx.store.get(&session_id).unwrap().current_chapter_index, 0);
    }

    #[tokio::test]
    async fn test_next_then_previous_round_trips() {
        let fx = Fixture::new(5).await;
        let session_id = fx.open(2).await;

        fx.navigate(&session_id, Direction::Next).await;
        let back = fx.navigate(&session_id, Direction::Previous).await;
        assert!(back.moved);
        assert_eq!(back.view.chapter_index, 2);
    }

    #[tokio::test]
    async fn test_walk_to_the_end_never_overshoots() {
        let fx = Fixture::new(4).await;
        let session_id = fx.open(0).await;

        for _ in 0..10 {
            fx.navigate(&session_id, Direction::Next).await;
        }
        let index = fx.store.get(&session_id).unwrap().current_chapter_index;
        assert_eq!(index, 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_steps_are_not_lost() {
        let fx = Fixture::new(20).await;
        let session_id = fx.open(0).await;
        let handler = Arc::new(fx.navigate_handler());

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let handler = handler.clone();
                let session_id = session_id.clone();
                tokio::spawn(async move {
                    handler
                        .handle(NavigateChapterCommand {
                            session_id,
                            direction: Direction::Next,
                        })
                        .await
                        .unwrap()
                })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().moved);
        }

        assert_eq!(fx.store.get(&session_id).unwrap().current_chapter_index, 8);
    }

    #[tokio::test]
    async fn test_missing_document_disables_navigation() {
        let fx = Fixture::new(3).await;
        let session_id = fx
            .store
            .create(ReadingSession::new(DocumentId::new(), 0))
            .unwrap();

        let response = fx.navigate(&session_id, Direction::Next).await;
        assert!(!response.moved);
        assert!(!response.view.can_go_next);
        assert!(!response.view.can_go_previous);
        assert_eq!(response.view.progress.label(), "1/1");
    }

    #[tokio::test]
    async fn test_move_publishes_chapter_changed() {
        let fx = Fixture::new(3).await;
        let session_id = fx.open(0).await;
        let mut rx = fx.publisher.register_session(&session_id);

        fx.navigate(&session_id, Direction::Next).await;

        match rx.recv().await.unwrap() {
            ReadingEvent::ChapterChanged {
                chapter_index,
                chapter_count,
                ..
            } => {
                assert_eq!(chapter_index, 1);
                assert_eq!(chapter_count, 3);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blocked_navigation_publishes_nothing() {
        let fx = Fixture::new(3).await;
        let session_id = fx.open(0).await;
        let mut rx = fx.publisher.register_session(&session_id);

        fx.navigate(&session_id, Direction::Previous).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_close_reading() {
        let fx = Fixture::new(3).await;
        let session_id = fx.open(0).await;
        let handler = CloseReadingHandler::new(fx.store.clone(), fx.publisher.clone());

        handler
            .handle(CloseReadingCommand {
                session_id: session_id.clone(),
            })
            .await
            .unwrap();
        assert!(!fx.store.is_valid(&session_id));

        let again = handler.handle(CloseReadingCommand { session_id }).await;
        assert!(matches!(again, Err(ApplicationError::NotFound { .. })));
    }
}
