//! Data models for completion candidates and the parsed document structure.
//!
//! This module contains the core data structures shared by the parser, the
//! completion engine and the language server host.

pub mod candidate;
pub mod document;

pub use candidate::{CandidateKind, CompletionCandidate};
pub use document::{HttpDocument, HttpRegion, RequestVariant, SymbolKind, SymbolNode};
