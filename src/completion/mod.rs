//! Context-sensitive completions for request files.
//!
//! Given the text typed on the cursor line and the parsed document, the
//! engine classifies the line, picks the candidate tables that apply and
//! filters them by what has been typed. Results are concatenated in a fixed
//! order: methods, headers, content types, authorization schemes, meta
//! directives, region references.
//!
//! Nothing here fails: a missing document or an unrecognized line simply
//! yields fewer candidates. The asynchronous entry point additionally
//! reports [`CompletionError::Cancelled`] when the request was superseded
//! while the document model was being prepared.

pub mod context;
pub mod error;
pub mod filter;
pub mod mime;
pub mod references;
pub mod tables;

pub use context::{classify, HeaderValueContext, LineContext, LineContexts};
pub use error::{CancellationSignal, CompletionError, NeverCancelled};
pub use filter::{directive_candidates, filter};
pub use references::resolve_references;

use crate::config::CompletionConfig;
use crate::models::{CompletionCandidate, HttpDocument};
use std::future::Future;
use std::ops::Deref;

/// What the host knows about the cursor when it asks for completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Text of the cursor line up to the cursor.
    pub line_text_before_cursor: String,
    /// Zero-based cursor line.
    pub cursor_line: usize,
}

impl CompletionRequest {
    /// Creates a new completion request
    pub fn new(line_text_before_cursor: impl Into<String>, cursor_line: usize) -> Self {
        Self {
            line_text_before_cursor: line_text_before_cursor.into(),
            cursor_line,
        }
    }
}

/// The completion engine.
///
/// Holds only configuration; every call works on its own inputs, so one
/// engine can serve any number of requests.
#[derive(Debug, Clone, Default)]
pub struct CompletionEngine {
    config: CompletionConfig,
}

impl CompletionEngine {
    /// Creates an engine with the given configuration
    pub fn new(config: CompletionConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Computes completions for a line.
    ///
    /// Synchronous and deterministic: identical inputs give identical output.
    ///
    /// # Examples
    ///
    /// ```
    /// use rest_completion::completion::{CompletionEngine, CompletionRequest};
    /// use rest_completion::parser::parse_document;
    ///
    /// let document = parse_document("GET https://example.com\nAuth");
    /// let engine = CompletionEngine::default();
    /// let candidates = engine.complete_line(&CompletionRequest::new("Auth", 1), Some(&document));
    /// assert_eq!(candidates[0].name, "Authorization");
    /// ```
    pub fn complete_line(
        &self,
        request: &CompletionRequest,
        document: Option<&HttpDocument>,
    ) -> Vec<CompletionCandidate> {
        let contexts = classify(&request.line_text_before_cursor, request.cursor_line, document);
        let trimmed = request.line_text_before_cursor.trim();
        log::debug!(
            "line {} classified as {:?}",
            request.cursor_line,
            contexts.iter().collect::<Vec<_>>()
        );

        let mut candidates = Vec::new();

        if self.config.methods && contexts.has_request_line() {
            candidates.extend(filter(tables::method_table(), trimmed));
        }

        if let Some(variant) = contexts.header_variant() {
            if self.config.headers {
                candidates.extend(filter(tables::header_table(Some(variant)), trimmed));
            }

            match context::header_value_context(trimmed) {
                Some(HeaderValueContext::ContentType(value)) if self.config.mime_types => {
                    candidates.extend(filter(tables::mime_type_table(), &value));
                }
                Some(HeaderValueContext::Authorization(value))
                    if self.config.authorization_schemes =>
                {
                    candidates.extend(filter(tables::auth_scheme_table(), &value));
                }
                _ => {}
            }
        }

        if self.config.meta_directives {
            if let Some(prefix) = contexts.meta_prefix() {
                candidates.extend(directive_candidates(tables::meta_directive_table(), prefix));
            }
        }

        if self.config.references {
            if let Some(document) = document {
                candidates.extend(filter(
                    resolve_references(&contexts, document),
                    context::reference_prefix(trimmed),
                ));
            }
        }

        log::trace!("{} candidate(s) for line {}", candidates.len(), request.cursor_line);
        candidates
    }

    /// Awaits the document model, then computes completions.
    ///
    /// `model` resolves to the parsed document, or `None` when it is not
    /// available; the latter degrades to request-line completions. If
    /// `cancellation` fires while the model is pending, no candidates are
    /// computed.
    pub async fn complete<F, D, C>(
        &self,
        request: &CompletionRequest,
        model: F,
        cancellation: &C,
    ) -> Result<Vec<CompletionCandidate>, CompletionError>
    where
        F: Future<Output = Option<D>>,
        D: Deref<Target = HttpDocument>,
        C: CancellationSignal + ?Sized,
    {
        let document = model.await;

        if cancellation.is_cancelled() {
            log::debug!("completion for line {} cancelled", request.cursor_line);
            return Err(CompletionError::Cancelled);
        }

        Ok(self.complete_line(request, document.as_deref()))
    }
}

/// Computes completions with the default configuration.
pub fn provide_completions(
    line_text_before_cursor: &str,
    cursor_line: usize,
    document: Option<&HttpDocument>,
) -> Vec<CompletionCandidate> {
    CompletionEngine::default().complete_line(
        &CompletionRequest::new(line_text_before_cursor, cursor_line),
        document,
    )
}
