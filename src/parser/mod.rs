//! Structural parser for request files.
//!
//! This module turns the text of a `.http` or `.rest` file into an
//! [`HttpDocument`]: regions separated by `###` delimiters, each tagged with
//! its symbolic name, its request variant and a symbol tree describing the
//! role of its lines. The parser never fails; text it does not understand
//! is tagged as [`SymbolKind::Other`].

use crate::models::{HttpDocument, HttpRegion, RequestVariant, SymbolKind, SymbolNode};
use once_cell::sync::Lazy;
use regex::Regex;

/// `# @name foo` or `// @name foo`
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:#+|/{2,})\s*@name\s+(\S.*)$").expect("valid regex"));

/// `METHOD target`, any case
static REQUEST_LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(GET|HEAD|POST|PUT|DELETE|CONNECT|OPTIONS|TRACE|PATCH|PROPFIND|PROPPATCH|MKCOL|COPY|MOVE|LOCK|UNLOCK|CHECKOUT|CHECKIN|REPORT|MERGE|MKACTIVITY|MKWORKSPACE|VERSION-CONTROL|BASELINE-CONTROL|MQTT|WS|WSS|SSE|EVENTSOURCE|GRPC)\s+(\S+)",
    )
    .expect("valid regex")
});

/// A bare URL on its own line is an implicit GET (or protocol-specific) request
static BARE_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?|mqtts?|wss?|grpc)://\S+").expect("valid regex")
});

/// `@key = value` file variables
static VARIABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[\w.-]+\s*=").expect("valid regex"));

/// `Name: value`
static HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w!$%&'*+.^`|~-]+\s*:").expect("valid regex"));

/// Parses the content of a request file into its structural model.
///
/// Regions are separated by lines starting with `###`. The delimiter line
/// itself belongs to no region.
///
/// # Examples
///
/// ```
/// use rest_completion::parser::parse_document;
///
/// let content = "# @name users\nGET https://api.example.com/users\n\n###\n\nMQTT mqtt://broker\n";
/// let document = parse_document(content);
/// assert_eq!(document.regions.len(), 2);
/// assert_eq!(document.regions[0].name.as_deref(), Some("users"));
/// ```
pub fn parse_document(content: &str) -> HttpDocument {
    let mut regions = Vec::new();
    let mut current_block: Vec<(usize, &str)> = Vec::new();

    // Normalize line endings (handle both \r\n and \n)
    let normalized_content = content.replace("\r\n", "\n");

    // Split on '\n' so a trailing newline yields the empty last line the editor shows
    for (line_num, line) in normalized_content.split('\n').enumerate() {
        if line.trim_start().starts_with("###") {
            if has_content(&current_block) {
                regions.push(parse_region(&current_block));
            }
            current_block.clear();
        } else {
            current_block.push((line_num, line));
        }
    }

    if has_content(&current_block) {
        regions.push(parse_region(&current_block));
    }

    log::trace!("parsed {} region(s)", regions.len());
    HttpDocument::new(regions)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Preamble,
    RequestLine,
    Headers,
    Body,
}

/// Blocks made only of blank lines carry no structure and produce no region.
fn has_content(block: &[(usize, &str)]) -> bool {
    block.iter().any(|(_, line)| !line.trim().is_empty())
}

/// Parses a single region block.
///
/// `lines` must not be empty.
fn parse_region(lines: &[(usize, &str)]) -> HttpRegion {
    let start_line = lines.first().map(|(n, _)| *n).unwrap_or_default();
    let end_line = lines.last().map(|(n, _)| *n).unwrap_or(start_line);

    let mut region = HttpRegion {
        start_line,
        end_line,
        ..Default::default()
    };
    let mut request: Option<SymbolNode> = None;
    let mut body_start: Option<usize> = None;
    let mut state = State::Preamble;

    for &(line_num, line) in lines {
        let trimmed = line.trim();

        match state {
            State::Preamble => {
                if trimmed.is_empty() {
                    continue;
                }

                if is_comment(trimmed) {
                    if region.name.is_none() {
                        region.name = parse_name_directive(trimmed);
                    }
                    region
                        .symbols
                        .push(SymbolNode::new(SymbolKind::Other, line_num, line_num));
                    continue;
                }

                if !VARIABLE_PATTERN.is_match(trimmed) {
                    if let Some(variant) = parse_request_line(trimmed) {
                        region.variant = variant;
                        request = Some(SymbolNode::new(SymbolKind::RequestLine, line_num, line_num));
                        state = State::RequestLine;
                        continue;
                    }
                }

                region
                    .symbols
                    .push(SymbolNode::new(SymbolKind::Other, line_num, line_num));
            }
            State::RequestLine | State::Headers => {
                let Some(node) = request.as_mut() else {
                    break;
                };

                if state == State::RequestLine
                    && (trimmed.starts_with('?') || trimmed.starts_with('&'))
                {
                    node.end_line = line_num;
                    continue;
                }

                if is_comment(trimmed) {
                    node.children
                        .push(SymbolNode::new(SymbolKind::Other, line_num, line_num));
                    state = State::Headers;
                    continue;
                }

                if HEADER_PATTERN.is_match(trimmed) {
                    node.children
                        .push(SymbolNode::new(SymbolKind::RequestHeader, line_num, line_num));
                    node.end_line = line_num;
                    state = State::Headers;
                    continue;
                }

                // Blank line or anything that is not a header starts the body
                body_start = Some(line_num);
                state = State::Body;
            }
            State::Body => break,
        }
    }

    if let Some(node) = request {
        region.symbols.push(node);
    }
    if let Some(start) = body_start {
        region
            .symbols
            .push(SymbolNode::new(SymbolKind::Other, start, end_line));
    }
    region.symbols.sort_by_key(|symbol| symbol.start_line);

    region
}

/// Returns true for `#` and `//` comment lines.
fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with('#') || trimmed.starts_with("//")
}

/// Extracts the symbolic name from a `@name` directive.
fn parse_name_directive(trimmed: &str) -> Option<String> {
    NAME_PATTERN
        .captures(trimmed)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Recognizes a request line and resolves its variant.
///
/// Returns `None` when the line is not a request line, and `Some(None)` for
/// request lines whose protocol has no dedicated variant (WebSocket).
pub fn parse_request_line(trimmed: &str) -> Option<Option<RequestVariant>> {
    if let Some(captures) = REQUEST_LINE_PATTERN.captures(trimmed) {
        let method = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let target = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
        return Some(variant_for_method(method).unwrap_or_else(|| variant_for_target(target)));
    }

    if BARE_URL_PATTERN.is_match(trimmed) {
        return Some(variant_for_target(trimmed));
    }

    None
}

/// Variant implied by a protocol selector keyword.
///
/// Returns `None` for plain HTTP verbs, which defer to the target URL.
fn variant_for_method(method: &str) -> Option<Option<RequestVariant>> {
    match method.to_ascii_uppercase().as_str() {
        "MQTT" => Some(Some(RequestVariant::Mqtt)),
        "SSE" | "EVENTSOURCE" => Some(Some(RequestVariant::EventSource)),
        "GRPC" => Some(Some(RequestVariant::Grpc)),
        "WS" | "WSS" => Some(None),
        _ => None,
    }
}

/// Variant implied by the scheme of a request target.
fn variant_for_target(target: &str) -> Option<RequestVariant> {
    let scheme = target
        .split_once("://")
        .map(|(scheme, _)| scheme.to_ascii_lowercase());

    match scheme.as_deref() {
        Some("mqtt" | "mqtts") => Some(RequestVariant::Mqtt),
        Some("grpc") => Some(RequestVariant::Grpc),
        Some("ws" | "wss") => None,
        _ => Some(RequestVariant::Http),
    }
}
