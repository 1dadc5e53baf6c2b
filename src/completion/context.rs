//! Line context classification.
//!
//! Decides which completion domains apply to the line under the cursor.
//! Several contexts can hold at once; they are reported in the order the
//! engine concatenates their candidates.

use crate::models::{HttpDocument, HttpRegion, RequestVariant};

/// A completion domain that applies to the current line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineContext {
    /// Method keywords may be typed here. Always eligible.
    RequestLine,
    /// The line follows a request line or header of a request of this variant.
    HeaderLine(RequestVariant),
    /// A `#` comment outside the header block; holds the text typed after
    /// the `#` run and the whitespace following it.
    MetaCommentLine(String),
    /// A `#` comment mentioning `ref`.
    ReferenceCommentLine,
}

/// Header value sub-context, only meaningful inside [`LineContext::HeaderLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValueContext {
    /// `Content-Type:` line; holds the value typed so far.
    ContentType(String),
    /// `Authorization:` line; holds the value typed so far.
    Authorization(String),
}

/// The ordered set of contexts classified for one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineContexts {
    contexts: Vec<LineContext>,
}

impl LineContexts {
    /// Iterates the contexts in composition order.
    pub fn iter(&self) -> impl Iterator<Item = &LineContext> {
        self.contexts.iter()
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn contains(&self, context: &LineContext) -> bool {
        self.contexts.contains(context)
    }

    pub fn has_request_line(&self) -> bool {
        self.contains(&LineContext::RequestLine)
    }

    /// Variant of the header context, if the line is in one.
    pub fn header_variant(&self) -> Option<RequestVariant> {
        self.contexts.iter().find_map(|context| match context {
            LineContext::HeaderLine(variant) => Some(*variant),
            _ => None,
        })
    }

    /// Typed directive prefix, if the line is a meta comment.
    pub fn meta_prefix(&self) -> Option<&str> {
        self.contexts.iter().find_map(|context| match context {
            LineContext::MetaCommentLine(prefix) => Some(prefix.as_str()),
            _ => None,
        })
    }

    pub fn is_reference(&self) -> bool {
        self.contains(&LineContext::ReferenceCommentLine)
    }
}

/// Classifies the line under the cursor.
///
/// # Arguments
/// * `line_text_before_cursor` - Text of the cursor line up to the cursor
/// * `cursor_line` - Zero-based line number of the cursor
/// * `document` - Parsed model of the document, if available
///
/// Without a document, or outside every region, only
/// [`LineContext::RequestLine`] applies.
pub fn classify(
    line_text_before_cursor: &str,
    cursor_line: usize,
    document: Option<&HttpDocument>,
) -> LineContexts {
    let trimmed = line_text_before_cursor.trim();
    let mut contexts = vec![LineContext::RequestLine];

    let Some(region) = document.and_then(|doc| doc.region_at(cursor_line)) else {
        return LineContexts { contexts };
    };

    let header_variant = header_variant(region, cursor_line);
    if let Some(variant) = header_variant {
        contexts.push(LineContext::HeaderLine(variant));
    }

    if trimmed.starts_with('#') {
        if header_variant.is_none() {
            contexts.push(LineContext::MetaCommentLine(
                meta_prefix(line_text_before_cursor).to_string(),
            ));
        }
        if trimmed.to_ascii_lowercase().contains("ref") {
            contexts.push(LineContext::ReferenceCommentLine);
        }
    }

    LineContexts { contexts }
}

/// Variant of the enclosing request when the previous line is its request
/// line or one of its headers.
fn header_variant(region: &HttpRegion, cursor_line: usize) -> Option<RequestVariant> {
    let previous_line = cursor_line.checked_sub(1)?;

    if region.is_request_line_or_header(previous_line) {
        region.variant
    } else {
        None
    }
}

/// Text after the leading `#` run and the whitespace that follows it.
///
/// Trailing whitespace is kept so that re-triggering after an accepted
/// `@directive ` still lines up with the inserted text.
pub fn meta_prefix(line: &str) -> &str {
    line.trim_start().trim_start_matches('#').trim_start()
}

/// Detects a header value position on a header line.
///
/// The value prefix is the text after the first `:`, or empty while the
/// header name is still being typed.
pub fn header_value_context(line: &str) -> Option<HeaderValueContext> {
    let lower = line.to_ascii_lowercase();
    let value = line
        .split_once(':')
        .map(|(_, value)| value.trim_start())
        .unwrap_or_default()
        .to_string();

    if lower.contains("content-type") {
        Some(HeaderValueContext::ContentType(value))
    } else if lower.contains("authorization") {
        Some(HeaderValueContext::Authorization(value))
    } else {
        None
    }
}

/// Text typed after the word containing the first `ref`.
///
/// `# @ref fo` yields `fo`, `# @forceRef` yields an empty prefix.
pub fn reference_prefix(line: &str) -> &str {
    let trimmed = line.trim();
    let Some(start) = trimmed.to_ascii_lowercase().find("ref") else {
        return "";
    };

    let after = &trimmed[start..];
    let word_end = after
        .find(char::is_whitespace)
        .unwrap_or(after.len());
    after[word_end..].trim_start()
}
