//! Property tests for prefix filtering and engine determinism

use proptest::prelude::*;
use rest_completion::completion::{filter, provide_completions};
use rest_completion::models::{CandidateKind, CompletionCandidate};
use rest_completion::parser::parse_document;

fn candidate_strategy() -> impl Strategy<Value = CompletionCandidate> {
    ("[a-zA-Z@/+.-]{0,10}", "[a-z ]{0,12}").prop_map(|(name, description)| {
        CompletionCandidate::new(name, description, CandidateKind::Value)
    })
}

proptest! {
    #[test]
    fn filter_keeps_exactly_case_insensitive_prefix_matches(
        candidates in prop::collection::vec(candidate_strategy(), 0..20),
        prefix in "[a-zA-Z@/]{1,3}",
    ) {
        let lowered = prefix.to_lowercase();
        let expected: Vec<CompletionCandidate> = candidates
            .iter()
            .filter(|c| c.name.to_lowercase().starts_with(&lowered))
            .cloned()
            .collect();

        prop_assert_eq!(filter(candidates, &prefix), expected);
    }

    #[test]
    fn filter_with_empty_prefix_is_identity(
        candidates in prop::collection::vec(candidate_strategy(), 0..20),
    ) {
        prop_assert_eq!(filter(candidates.clone(), ""), candidates);
    }

    #[test]
    fn filter_ignores_prefix_case(
        candidates in prop::collection::vec(candidate_strategy(), 0..20),
        prefix in "[a-zA-Z]{1,3}",
    ) {
        prop_assert_eq!(
            filter(candidates.clone(), &prefix.to_uppercase()),
            filter(candidates, &prefix.to_lowercase())
        );
    }

    #[test]
    fn completions_are_deterministic(
        line in "[ #@a-zA-Z:-]{0,16}",
        cursor in 0usize..6,
    ) {
        let doc = parse_document(
            "# @name login\nPOST https://example.com\nContent-Type: application/json\n\n###\n# @ref ",
        );

        prop_assert_eq!(
            provide_completions(&line, cursor, Some(&doc)),
            provide_completions(&line, cursor, Some(&doc))
        );
    }

    #[test]
    fn method_completions_match_typed_prefix(line in "[a-zA-Z]{0,4}") {
        let result = provide_completions(&line, 0, None);
        let lowered = line.to_lowercase();
        prop_assert!(result
            .iter()
            .all(|c| c.kind == CandidateKind::Keyword && c.name.to_lowercase().starts_with(&lowered)));
    }
}
