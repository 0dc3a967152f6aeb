//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CloseReadingHandler, LoadDocumentHandler, NavigateChapterHandler, OpenReadingHandler,
    UnloadDocumentHandler,
    // Query handlers
    GetChapterBarHandler, GetDocumentHandler, ListDocumentsHandler,
    // Ports
    DocumentProviderPort, NavigationStorePort,
};
use crate::infrastructure::events::EventPublisher;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub store: Arc<dyn NavigationStorePort>,
    pub documents: Arc<dyn DocumentProviderPort>,
    pub event_publisher: Arc<EventPublisher>,

    // ========== Command Handlers ==========
    pub load_document_handler: LoadDocumentHandler,
    pub unload_document_handler: UnloadDocumentHandler,
    pub open_reading_handler: OpenReadingHandler,
    pub navigate_chapter_handler: NavigateChapterHandler,
    pub close_reading_handler: CloseReadingHandler,

    // ========== Query Handlers ==========
    pub get_document_handler: GetDocumentHandler,
    pub list_documents_handler: ListDocumentsHandler,
    pub get_chapter_bar_handler: GetChapterBarHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        store: Arc<dyn NavigationStorePort>,
        documents: Arc<dyn DocumentProviderPort>,
        event_publisher: Arc<EventPublisher>,
        max_chapters: usize,
    ) -> Self {
        Self {
            // Ports
            store: store.clone(),
            documents: documents.clone(),
            event_publisher: event_publisher.clone(),

            // Command handlers
            load_document_handler: LoadDocumentHandler::new(
                documents.clone(),
                event_publisher.clone(),
                max_chapters,
            ),
            unload_document_handler: UnloadDocumentHandler::new(
                documents.clone(),
                store.clone(),
                event_publisher.clone(),
            ),
            open_reading_handler: OpenReadingHandler::new(store.clone(), documents.clone()),
            navigate_chapter_handler: NavigateChapterHandler::new(
                store.clone(),
                documents.clone(),
                event_publisher.clone(),
            ),
            close_reading_handler: CloseReadingHandler::new(store.clone(), event_publisher),

            // Query handlers
            get_document_handler: GetDocumentHandler::new(documents.clone()),
            list_documents_handler: ListDocumentsHandler::new(documents.clone()),
            get_chapter_bar_handler: GetChapterBarHandler::new(store, documents),
        }
    }
}
