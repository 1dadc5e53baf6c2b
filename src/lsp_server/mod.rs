//! LSP server module for REST completions
//!
//! This module provides the Language Server Protocol host for the completion
//! engine: document synchronization, lazily parsed document models and
//! cancellable `textDocument/completion` requests.

pub mod backend;
pub mod document;

// Re-export main types for convenience
pub use backend::Backend;
pub use document::DocumentManager;
