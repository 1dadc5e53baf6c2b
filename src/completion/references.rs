//! Region name completions for reference comments.

use super::context::LineContexts;
use crate::models::{CompletionCandidate, HttpDocument};

/// Description attached to every region name candidate.
pub const REGION_NAME_DESCRIPTION: &str = "request region name";

/// Lists the named regions of the current document.
///
/// Only applies when the line is a reference comment. Regions sharing a
/// name each produce a candidate.
pub fn resolve_references(contexts: &LineContexts, document: &HttpDocument) -> Vec<CompletionCandidate> {
    if !contexts.is_reference() {
        return Vec::new();
    }

    document
        .region_names()
        .map(|name| CompletionCandidate::reference(name, REGION_NAME_DESCRIPTION))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::context::classify;
    use crate::models::CandidateKind;
    use crate::parser::parse_document;

    const DOC: &str = "# @name login\nPOST https://example.com/login\n\n###\n# @name users\nGET https://example.com/users\n\n###\nGET https://example.com/anonymous\n";

    #[test]
    fn test_resolves_named_regions_in_order() {
        let doc = parse_document(DOC);
        let contexts = classify("# @ref ", 0, Some(&doc));
        let result = resolve_references(&contexts, &doc);

        let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["login", "users"]);
        assert!(result.iter().all(|c| c.kind == CandidateKind::Reference));
        assert!(result.iter().all(|c| c.description == REGION_NAME_DESCRIPTION));
    }

    #[test]
    fn test_not_a_reference_line() {
        let doc = parse_document(DOC);
        let contexts = classify("# @name", 0, Some(&doc));
        assert!(resolve_references(&contexts, &doc).is_empty());
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let doc = parse_document("# @name foo\nGET https://a\n###\n# @name foo\nGET https://b");
        let contexts = classify("# ref foo", 0, Some(&doc));
        let result = resolve_references(&contexts, &doc);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.name == "foo"));
    }
}
