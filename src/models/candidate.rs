//! Completion candidate data models.
//!
//! A candidate is what the engine hands back to the host: a display label,
//! a short description, the literal text to insert and a presentation kind.

use serde::{Deserialize, Serialize};

/// Presentation grouping for a completion candidate.
///
/// The host uses this to pick an icon; it carries no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateKind {
    /// Request-line keywords (methods and protocol selectors)
    Keyword,
    /// Header fields and meta directives
    Field,
    /// Header values (content types, authorization schemes)
    Value,
    /// Names of other request regions
    Reference,
}

/// A single completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCandidate {
    /// Canonical display label.
    pub name: String,

    /// Human-readable description shown next to the label.
    pub description: String,

    /// Text inserted when the candidate is accepted.
    ///
    /// Equals `name` except for meta directives, where only the part the
    /// user has not typed yet is inserted.
    pub insert_text: String,

    /// Presentation grouping.
    pub kind: CandidateKind,
}

impl CompletionCandidate {
    /// Creates a candidate whose insert text equals its name.
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: CandidateKind) -> Self {
        let name = name.into();
        Self {
            insert_text: name.clone(),
            name,
            description: description.into(),
            kind,
        }
    }

    /// Replaces the insert text.
    pub fn with_insert_text(mut self, insert_text: impl Into<String>) -> Self {
        self.insert_text = insert_text.into();
        self
    }

    /// Creates a request-line keyword candidate
    pub fn keyword(name: &str, description: &str) -> Self {
        Self::new(name, description, CandidateKind::Keyword)
    }

    /// Creates a header field candidate
    pub fn field(name: &str, description: &str) -> Self {
        Self::new(name, description, CandidateKind::Field)
    }

    /// Creates a header value candidate
    pub fn value(name: &str, description: &str) -> Self {
        Self::new(name, description, CandidateKind::Value)
    }

    /// Creates a region reference candidate
    pub fn reference(name: &str, description: &str) -> Self {
        Self::new(name, description, CandidateKind::Reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_text_defaults_to_name() {
        let candidate = CompletionCandidate::keyword("GET", "Retrieve a resource");
        assert_eq!(candidate.insert_text, "GET");
        assert_eq!(candidate.kind, CandidateKind::Keyword);
    }

    #[test]
    fn test_with_insert_text() {
        let candidate =
            CompletionCandidate::field("@ref", "Reference a request").with_insert_text("f ");
        assert_eq!(candidate.name, "@ref");
        assert_eq!(candidate.insert_text, "f ");
    }
}
