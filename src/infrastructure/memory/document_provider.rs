//! In-Memory Document Provider Implementation

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::ports::{DocumentProviderPort, RepositoryError};
use crate::domain::document::{Document, DocumentId};

/// 内存文档仓储
pub struct InMemoryDocumentProvider {
    documents: DashMap<DocumentId, Document>,
}

impl InMemoryDocumentProvider {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }
}

impl Default for InMemoryDocumentProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentProviderPort for InMemoryDocumentProvider {
    async fn save(&self, document: Document) -> Result<(), RepositoryError> {
        let id = *document.id();
        if self.documents.contains_key(&id) {
            return Err(RepositoryError::Duplicate(id.to_string()));
        }
        self.documents.insert(id, document);
        Ok(())
    }

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError> {
        Ok(self.documents.get(&id).map(|d| d.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Document>, RepositoryError> {
        Ok(self.documents.iter().map(|e| e.value().clone()).collect())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.documents.len())
    }

    async fn delete(&self, id: DocumentId) -> Result<(), RepositoryError> {
        self.documents
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }
}
