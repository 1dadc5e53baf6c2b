//! Document Manager for the REST completion language server
//!
//! Tracks open documents with DashMap and caches their parsed structural
//! model. The model is built lazily on a blocking task the first time a
//! completion needs it after an edit.

use crate::models::HttpDocument;
use crate::parser::parse_document;
use dashmap::DashMap;
use lsp_types::Url;
use std::sync::Arc;
use thiserror::Error;

/// Error types for document operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Document not found in the manager
    #[error("Document not found")]
    NotFound,
    /// Invalid URI format or normalization failed
    #[error("Invalid URI: {0}")]
    InvalidUri(String),
}

/// State kept per open document.
#[derive(Debug, Clone)]
struct DocumentState {
    text: String,
    version: i32,
    /// Parsed model of `text`, dropped on every edit.
    model: Option<Arc<HttpDocument>>,
}

/// Thread-safe document manager for tracking open files
#[derive(Debug, Clone, Default)]
pub struct DocumentManager {
    /// Document state by normalized URI
    documents: Arc<DashMap<String, DocumentState>>,
}

impl DocumentManager {
    /// Creates a new DocumentManager instance
    ///
    /// # Examples
    ///
    /// ```
    /// use rest_completion::lsp_server::document::DocumentManager;
    ///
    /// let manager = DocumentManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            documents: Arc::new(DashMap::new()),
        }
    }

    /// Normalizes a URI to a consistent string format
    ///
    /// File URIs are rebuilt from their path with forward slashes so the same
    /// file maps to the same key on every platform.
    fn normalize_uri(uri: &Url) -> Result<String, DocumentError> {
        let uri_str = uri.as_str();

        if uri_str.is_empty() {
            return Err(DocumentError::InvalidUri("Empty URI".to_string()));
        }

        if uri.scheme() == "file" {
            match uri.to_file_path() {
                Ok(path) => {
                    let normalized_path = path.to_string_lossy().replace('\\', "/");
                    Ok(format!("file://{}", normalized_path))
                }
                Err(_) => Ok(uri_str.to_string()),
            }
        } else {
            Ok(uri_str.to_string())
        }
    }

    /// Returns the key a URI is stored under.
    pub fn key(uri: &Url) -> Result<String, DocumentError> {
        Self::normalize_uri(uri)
    }

    /// Inserts a document, replacing any existing one with the same URI.
    pub fn insert(&self, uri: Url, content: String, version: i32) -> Result<(), DocumentError> {
        let normalized_uri = Self::normalize_uri(&uri)?;
        self.documents.insert(
            normalized_uri,
            DocumentState {
                text: content,
                version,
                model: None,
            },
        );
        Ok(())
    }

    /// Replaces the content of an open document and drops its cached model.
    ///
    /// Returns `Err(DocumentError::NotFound)` if the document is not open.
    pub fn update(&self, uri: Url, content: String, version: i32) -> Result<(), DocumentError> {
        let normalized_uri = Self::normalize_uri(&uri)?;

        match self.documents.get_mut(&normalized_uri) {
            Some(mut state) => {
                state.text = content;
                state.version = version;
                state.model = None;
                Ok(())
            }
            None => Err(DocumentError::NotFound),
        }
    }

    /// Retrieves a document's content by URI
    pub fn get(&self, uri: &Url) -> Option<String> {
        let normalized_uri = Self::normalize_uri(uri).ok()?;
        self.documents
            .get(&normalized_uri)
            .map(|entry| entry.text.clone())
    }

    /// Returns the parsed model of a document, parsing it if needed.
    ///
    /// Resolves to `None` when the document is not open or parsing was
    /// aborted. A model parsed from a version that was edited in the
    /// meantime is returned but not cached.
    pub async fn model(&self, uri: &Url) -> Option<Arc<HttpDocument>> {
        let normalized_uri = Self::normalize_uri(uri).ok()?;

        let (text, version) = {
            let entry = self.documents.get(&normalized_uri)?;
            if let Some(model) = &entry.model {
                return Some(Arc::clone(model));
            }
            (entry.text.clone(), entry.version)
        };

        let model = match tokio::task::spawn_blocking(move || parse_document(&text)).await {
            Ok(document) => Arc::new(document),
            Err(e) => {
                log::error!("Parsing {} failed: {}", normalized_uri, e);
                return None;
            }
        };

        if let Some(mut entry) = self.documents.get_mut(&normalized_uri) {
            if entry.version == version {
                entry.model = Some(Arc::clone(&model));
            }
        }

        Some(model)
    }

    /// Removes a document from the manager, returning its content
    pub fn remove(&self, uri: &Url) -> Option<String> {
        let normalized_uri = Self::normalize_uri(uri).ok()?;
        self.documents
            .remove(&normalized_uri)
            .map(|(_, state)| state.text)
    }

    /// Returns the number of documents currently managed
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the manager has no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Clears all documents from the manager
    pub fn clear(&self) {
        self.documents.clear();
    }
}

/// Returns the text of `line` up to the UTF-16 column `character`.
///
/// Columns past the end of the line clamp to the line end; a line past the
/// end of the text yields an empty string.
pub fn text_before_position(text: &str, line: usize, character: usize) -> String {
    let Some(line_text) = text.split('\n').nth(line) else {
        return String::new();
    };
    let line_text = line_text.strip_suffix('\r').unwrap_or(line_text);

    let mut utf16_offset = 0;
    let mut byte_end = line_text.len();
    for (byte_index, ch) in line_text.char_indices() {
        if utf16_offset >= character {
            byte_end = byte_index;
            break;
        }
        utf16_offset += ch.len_utf16();
    }

    line_text[..byte_end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_manager_is_empty() {
        let manager = DocumentManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let manager = DocumentManager::new();
        let uri = Url::parse("file:///test.http").unwrap();

        manager
            .insert(uri.clone(), "GET https://example.com".to_string(), 1)
            .unwrap();
        assert_eq!(manager.get(&uri), Some("GET https://example.com".to_string()));
    }

    #[test]
    fn test_update_nonexistent_document() {
        let manager = DocumentManager::new();
        let uri = Url::parse("file:///nonexistent.http").unwrap();

        let result = manager.update(uri, "content".to_string(), 2);
        assert_eq!(result, Err(DocumentError::NotFound));
    }

    #[test]
    fn test_remove_existing_document() {
        let manager = DocumentManager::new();
        let uri = Url::parse("file:///test.http").unwrap();

        manager.insert(uri.clone(), "GET x".to_string(), 1).unwrap();
        assert_eq!(manager.remove(&uri), Some("GET x".to_string()));
        assert!(manager.is_empty());
        assert_eq!(manager.remove(&uri), None);
    }

    #[tokio::test]
    async fn test_model_is_cached_until_update() {
        let manager = DocumentManager::new();
        let uri = Url::parse("file:///test.http").unwrap();

        manager
            .insert(uri.clone(), "# @name a\nGET https://example.com".to_string(), 1)
            .unwrap();
        let first = manager.model(&uri).await.unwrap();
        assert_eq!(first.regions[0].name.as_deref(), Some("a"));

        let cached = manager.model(&uri).await.unwrap();
        assert!(Arc::ptr_eq(&first, &cached));

        manager
            .update(uri.clone(), "# @name b\nGET https://example.com".to_string(), 2)
            .unwrap();

        let reparsed = manager.model(&uri).await.unwrap();
        assert!(!Arc::ptr_eq(&first, &reparsed));
        assert_eq!(reparsed.regions[0].name.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_model_of_unknown_document() {
        let manager = DocumentManager::new();
        let uri = Url::parse("file:///missing.http").unwrap();
        assert!(manager.model(&uri).await.is_none());
    }

    #[test]
    fn test_concurrent_access() {
        let manager = Arc::new(DocumentManager::new());
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let manager = Arc::clone(&manager);
                thread::spawn(move || {
                    let uri = Url::parse(&format!("file:///test{}.http", i)).unwrap();
                    manager.insert(uri, format!("content {}", i), 1).unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(manager.len(), 10);
    }

    #[test]
    fn test_text_before_position() {
        let text = "GET https://example.com\r\nContent-Type: app\n";
        assert_eq!(text_before_position(text, 0, 3), "GET");
        assert_eq!(text_before_position(text, 1, 100), "Content-Type: app");
        assert_eq!(text_before_position(text, 2, 0), "");
        assert_eq!(text_before_position(text, 7, 4), "");
    }

    #[test]
    fn test_text_before_position_utf16() {
        // '😀' is two UTF-16 code units
        let text = "# 😀 @re";
        assert_eq!(text_before_position(text, 0, 4), "# 😀");
        assert_eq!(text_before_position(text, 0, 8), "# 😀 @re");
    }
}
