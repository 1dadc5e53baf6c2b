//! Prefix filtering and directive insertion text.

use crate::grammar::MetaDirective;
use crate::models::CompletionCandidate;

/// Keeps the candidates whose name starts with `typed_prefix`, ignoring case.
///
/// An empty prefix keeps everything in the original order.
pub fn filter(candidates: Vec<CompletionCandidate>, typed_prefix: &str) -> Vec<CompletionCandidate> {
    if typed_prefix.is_empty() {
        return candidates;
    }

    let prefix = typed_prefix.to_lowercase();
    candidates
        .into_iter()
        .filter(|candidate| candidate.name.to_lowercase().starts_with(&prefix))
        .collect()
}

/// Builds directive candidates for the text typed after `#`.
///
/// Each directive expands to `@name sub` per sub-completion, or to `@name `
/// when it takes a free-form argument. Typed text starting with `@` is
/// matched against that full form, anything else against the form without
/// `@`. The insert text is the part of the matched form the user has not
/// typed yet.
///
/// # Examples
///
/// ```
/// use rest_completion::completion::filter::directive_candidates;
/// use rest_completion::grammar::META_DIRECTIVES;
///
/// let candidates = directive_candidates(META_DIRECTIVES, "re");
/// let reference = candidates.iter().find(|c| c.name == "@ref").unwrap();
/// assert_eq!(reference.insert_text, "f ");
/// ```
pub fn directive_candidates(directives: &[MetaDirective], typed: &str) -> Vec<CompletionCandidate> {
    let typed_lower = typed.to_lowercase();
    let typed_len = typed.chars().count();
    let match_with_at = typed.starts_with('@');

    let mut candidates = Vec::new();
    for directive in directives {
        for full_name in expand_directive(directive) {
            let key = if match_with_at {
                full_name.as_str()
            } else {
                &full_name[1..]
            };

            if !key.to_lowercase().starts_with(&typed_lower) {
                continue;
            }

            let insert_text: String = key.chars().skip(typed_len).collect();
            candidates.push(
                CompletionCandidate::field(full_name.trim_end(), directive.description)
                    .with_insert_text(insert_text),
            );
        }
    }

    candidates
}

/// Full `@name ...` forms of a directive, in sub-completion order.
fn expand_directive(directive: &MetaDirective) -> Vec<String> {
    match directive.completions {
        Some(completions) => completions
            .iter()
            .map(|completion| format!("@{} {}", directive.name, completion))
            .collect(),
        None => vec![format!("@{} ", directive.name)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateKind;

    const DIRECTIVES: &[MetaDirective] = &[
        MetaDirective {
            name: "ref",
            description: "reference",
            completions: None,
        },
        MetaDirective {
            name: "rejectUnauthorized",
            description: "tls",
            completions: Some(&["true", "false"]),
        },
        MetaDirective {
            name: "name",
            description: "name",
            completions: None,
        },
    ];

    fn names(candidates: &[CompletionCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_filter_empty_prefix_keeps_order() {
        let input = vec![
            CompletionCandidate::keyword("POST", ""),
            CompletionCandidate::keyword("GET", ""),
        ];
        assert_eq!(filter(input.clone(), ""), input);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_anchored() {
        let input = vec![
            CompletionCandidate::field("Accept", ""),
            CompletionCandidate::field("Accept-Encoding", ""),
            CompletionCandidate::field("X-Accept", ""),
        ];
        let result = filter(input, "aCC");
        assert_eq!(names(&result), vec!["Accept", "Accept-Encoding"]);
    }

    #[test]
    fn test_filter_longer_prefix_than_name() {
        let input = vec![CompletionCandidate::field("Content-Type", "")];
        assert!(filter(input, "content-type: ").is_empty());
    }

    #[test]
    fn test_directives_without_typed_text() {
        let result = directive_candidates(DIRECTIVES, "");
        assert_eq!(
            names(&result),
            vec![
                "@ref",
                "@rejectUnauthorized true",
                "@rejectUnauthorized false",
                "@name"
            ]
        );
        assert_eq!(result[0].insert_text, "ref ");
        assert_eq!(result[1].insert_text, "rejectUnauthorized true");
        assert!(result.iter().all(|c| c.kind == CandidateKind::Field));
    }

    #[test]
    fn test_directive_typed_without_at() {
        let result = directive_candidates(DIRECTIVES, "ref");
        assert_eq!(names(&result), vec!["@ref"]);
        assert_eq!(result[0].insert_text, " ");

        let result = directive_candidates(DIRECTIVES, "re");
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].insert_text, "f ");
        assert_eq!(result[1].insert_text, "jectUnauthorized true");
    }

    #[test]
    fn test_directive_typed_with_at() {
        let result = directive_candidates(DIRECTIVES, "@rejectunauthorized f");
        assert_eq!(names(&result), vec!["@rejectUnauthorized false"]);
        assert_eq!(result[0].insert_text, "alse");
    }

    #[test]
    fn test_directive_fully_typed() {
        let result = directive_candidates(DIRECTIVES, "@ref ");
        assert_eq!(names(&result), vec!["@ref"]);
        assert_eq!(result[0].insert_text, "");
    }

    #[test]
    fn test_directive_no_match() {
        assert!(directive_candidates(DIRECTIVES, "@zzz").is_empty());
        assert!(directive_candidates(DIRECTIVES, "ref foo").is_empty());
    }

    #[test]
    fn test_directive_candidates_idempotent() {
        let first = directive_candidates(DIRECTIVES, "@rej");
        let second = directive_candidates(DIRECTIVES, "@rej");
        assert_eq!(first, second);
    }
}
