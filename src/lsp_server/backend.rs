//! LSP Backend Implementation for the REST completion language server
//!
//! This module implements the Language Server Protocol backend using tower-lsp.
//! It keeps open `.http` documents in sync and answers
//! `textDocument/completion` with the candidates of the completion engine.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CompletionItem as LspCompletionItem, CompletionItemKind, CompletionOptions, CompletionParams,
    CompletionResponse, CompletionTextEdit, DidChangeConfigurationParams, DidChangeTextDocumentParams,
    DidCloseTextDocumentParams, DidOpenTextDocumentParams, Documentation, InitializeParams,
    InitializeResult, InitializedParams, MarkupContent, MarkupKind, MessageType, Position, Range,
    ServerCapabilities, ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind, TextEdit,
};
use tower_lsp::{Client, LanguageServer};

use super::document::{text_before_position, DocumentError, DocumentManager};
use crate::completion::{CompletionEngine, CompletionError, CompletionRequest};
use crate::config::{self, CompletionConfig, SETTINGS_KEY};
use crate::models::{CandidateKind, CompletionCandidate};

/// A completion request that is still running for a document.
#[derive(Debug)]
struct PendingCompletion {
    id: u64,
    token: CancellationToken,
}

/// LSP Backend for the REST completion server
///
/// Serves context-sensitive completions for `.http` and `.rest` files.
#[derive(Debug)]
pub struct Backend {
    /// LSP client for sending notifications and requests to the editor
    client: Client,

    /// Document manager for tracking open files
    documents: Arc<DocumentManager>,

    /// Latest completion request per document
    pending: Arc<DashMap<String, PendingCompletion>>,

    /// Source of completion request ids
    next_request_id: AtomicU64,
}

impl Backend {
    /// Creates a new Backend instance
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rest_completion::lsp_server::backend::Backend;
    ///
    /// let (service, socket) = tower_lsp::LspService::new(|client| {
    ///     Backend::new(client)
    /// });
    /// ```
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(DocumentManager::new()),
            pending: Arc::new(DashMap::new()),
            next_request_id: AtomicU64::new(0),
        }
    }

    /// Logs a message to the client
    async fn log_message(&self, typ: MessageType, message: impl std::fmt::Display) {
        self.client.log_message(typ, message).await;
    }

    /// Logs an informational message
    async fn log_info(&self, message: impl std::fmt::Display) {
        self.log_message(MessageType::INFO, message).await;
    }

    /// Logs a warning message
    async fn log_warn(&self, message: impl std::fmt::Display) {
        self.log_message(MessageType::WARNING, message).await;
    }

    /// Logs an error message
    async fn log_error(&self, message: impl std::fmt::Display) {
        self.log_message(MessageType::ERROR, message).await;
    }

    /// Applies a settings payload to the global configuration.
    ///
    /// Accepts either `{"rest-completion": {...}}` or the bare settings
    /// object. Invalid settings leave the previous configuration in place.
    async fn apply_settings(&self, settings: Option<Value>) -> CompletionConfig {
        let settings = settings.map(|value| {
            if value.get(SETTINGS_KEY).is_some() {
                value
            } else {
                serde_json::json!({ SETTINGS_KEY: value })
            }
        });

        match config::load_config(settings) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring invalid settings: {}", e);
                self.log_warn(format!("Ignoring invalid settings: {}", e))
                    .await;
                config::get_config()
            }
        }
    }

    /// Registers a completion request for `key`, cancelling the one it supersedes.
    fn begin_completion(&self, key: &str) -> (u64, CancellationToken) {
        let id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();

        let previous = self.pending.insert(
            key.to_string(),
            PendingCompletion {
                id,
                token: token.clone(),
            },
        );
        if let Some(previous) = previous {
            previous.token.cancel();
        }

        (id, token)
    }

    /// Forgets a completion request unless a newer one replaced it.
    fn finish_completion(&self, key: &str, id: u64) {
        self.pending.remove_if(key, |_, pending| pending.id == id);
    }

    /// Cancels the completion request running for `key`, if any.
    fn cancel_completion(&self, key: &str) {
        if let Some((_, pending)) = self.pending.remove(key) {
            pending.token.cancel();
        }
    }
}

/// Maps a candidate kind to the LSP completion item kind.
fn completion_item_kind(kind: CandidateKind) -> CompletionItemKind {
    match kind {
        CandidateKind::Keyword => CompletionItemKind::KEYWORD,
        CandidateKind::Field => CompletionItemKind::FIELD,
        CandidateKind::Value => CompletionItemKind::VALUE,
        CandidateKind::Reference => CompletionItemKind::REFERENCE,
    }
}

/// Converts an engine candidate into an LSP completion item.
///
/// Candidates whose insert text is only the untyped rest of their name
/// (meta directives) are inserted at the cursor through a zero-width edit,
/// so the client does not replace the word already typed.
fn to_completion_item(candidate: CompletionCandidate, position: Position) -> LspCompletionItem {
    let partial = candidate.insert_text != candidate.name;
    let text_edit = partial.then(|| {
        CompletionTextEdit::Edit(TextEdit {
            range: Range::new(position, position),
            new_text: candidate.insert_text.clone(),
        })
    });
    let filter_text = partial.then(|| candidate.name.clone());

    let documentation = (!candidate.description.is_empty()).then(|| {
        Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::PlainText,
            value: candidate.description.clone(),
        })
    });

    LspCompletionItem {
        label: candidate.name,
        kind: Some(completion_item_kind(candidate.kind)),
        detail: Some(candidate.description),
        documentation,
        filter_text,
        insert_text: Some(candidate.insert_text),
        text_edit,
        ..Default::default()
    }
}

/// Builds the server capabilities for a configuration.
fn server_capabilities(config: &CompletionConfig) -> ServerCapabilities {
    ServerCapabilities {
        // Full text document synchronization - server receives complete document content
        text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),

        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(config.trigger_characters.clone()),
            resolve_provider: Some(false),
            all_commit_characters: None,
            work_done_progress_options: Default::default(),
            completion_item: None,
        }),

        ..Default::default()
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    /// Initialize the language server
    ///
    /// Loads settings from the initialization options and declares full
    /// document sync plus a completion provider.
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        self.log_info(format!(
            "Initializing REST completion server (process ID: {:?})",
            params.process_id
        ))
        .await;

        let config = self.apply_settings(params.initialization_options).await;
        log::info!(
            "Completion trigger characters: {:?}",
            config.trigger_characters
        );

        Ok(InitializeResult {
            capabilities: server_capabilities(&config),
            server_info: Some(ServerInfo {
                name: "rest-completion".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.log_info("REST completion server initialized").await;
    }

    /// Shutdown the language server
    ///
    /// Cancels outstanding completions and drops every document.
    async fn shutdown(&self) -> Result<()> {
        self.log_info("Shutting down REST completion server").await;

        for entry in self.pending.iter() {
            entry.value().token.cancel();
        }
        self.pending.clear();
        self.documents.clear();

        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        log::debug!("Document opened: {}", uri);

        if let Err(e) = self.documents.insert(
            uri.clone(),
            params.text_document.text,
            params.text_document.version,
        ) {
            self.log_error(format!("Failed to insert document {}: {}", uri, e))
                .await;
        }
    }

    /// Handle textDocument/didChange notification
    ///
    /// Stores the new content and cancels a completion still waiting on the
    /// previous model.
    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // FULL sync: the last change carries the complete content
        let Some(change) = params.content_changes.into_iter().last() else {
            self.log_warn(format!("No content changes received for document: {}", uri))
                .await;
            return;
        };

        if let Ok(key) = DocumentManager::key(&uri) {
            self.cancel_completion(&key);
        }

        match self.documents.update(uri.clone(), change.text.clone(), version) {
            Ok(()) => log::debug!("Document changed: {} (version {})", uri, version),
            Err(DocumentError::NotFound) => {
                if let Err(e) = self.documents.insert(uri.clone(), change.text, version) {
                    self.log_error(format!("Failed to insert document {}: {}", uri, e))
                        .await;
                }
            }
            Err(e) => {
                self.log_error(format!("Failed to update document {}: {}", uri, e))
                    .await;
            }
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        log::debug!("Document closed: {}", uri);

        if let Ok(key) = DocumentManager::key(&uri) {
            self.cancel_completion(&key);
        }

        if self.documents.remove(&uri).is_none() {
            self.log_warn(format!("Document not found when closing: {}", uri))
                .await;
        }
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        let config = self.apply_settings(Some(params.settings)).await;
        log::info!("Configuration updated: {:?}", config);
    }

    /// Handle textDocument/completion request
    ///
    /// A newer request for the same document cancels this one; a cancelled
    /// request answers with no items.
    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        log::debug!(
            "Completion request for: {} at {}:{}",
            uri,
            position.line,
            position.character
        );

        let Some(text) = self.documents.get(&uri) else {
            self.log_warn(format!("Document not found for completion: {}", uri))
                .await;
            return Ok(None);
        };

        let key = match DocumentManager::key(&uri) {
            Ok(key) => key,
            Err(e) => {
                self.log_error(format!("Cannot complete in {}: {}", uri, e))
                    .await;
                return Ok(None);
            }
        };

        let line = position.line as usize;
        let request = CompletionRequest::new(
            text_before_position(&text, line, position.character as usize),
            line,
        );

        let (id, token) = self.begin_completion(&key);
        let engine = CompletionEngine::new(config::get_config());
        let outcome = engine
            .complete(&request, self.documents.model(&uri), &token)
            .await;
        self.finish_completion(&key, id);

        match outcome {
            Ok(candidates) if candidates.is_empty() => Ok(None),
            Ok(candidates) => {
                log::debug!("Provided {} completion(s) for: {}", candidates.len(), uri);
                Ok(Some(CompletionResponse::Array(
                    candidates
                        .into_iter()
                        .map(|candidate| to_completion_item(candidate, position))
                        .collect(),
                )))
            }
            Err(CompletionError::Cancelled) => {
                log::debug!("Completion for {} superseded", uri);
                Ok(None)
            }
        }
    }
}
