//! Structural model of a request file.
//!
//! A document is an ordered list of regions. Each region covers a range of
//! lines, may carry a symbolic name (`# @name foo`), knows which protocol
//! family its request belongs to and exposes a symbol tree tagging the
//! syntactic role of its lines.

use serde::{Deserialize, Serialize};

/// Protocol family of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestVariant {
    /// Plain HTTP request
    Http,
    /// MQTT broker session
    Mqtt,
    /// Server-sent events stream
    EventSource,
    /// gRPC call
    Grpc,
}

impl RequestVariant {
    /// Returns the string representation of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestVariant::Http => "http",
            RequestVariant::Mqtt => "mqtt",
            RequestVariant::EventSource => "eventsource",
            RequestVariant::Grpc => "grpc",
        }
    }
}

impl std::fmt::Display for RequestVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Syntactic role of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    /// The `METHOD url` line, including `?`/`&` continuation lines
    RequestLine,
    /// A `Name: value` header line
    RequestHeader,
    /// Anything else (meta comments, variables, body)
    Other,
}

/// A node of a region's symbol tree.
///
/// Line numbers are zero-based and `end_line` is inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolNode {
    pub kind: SymbolKind,
    pub start_line: usize,
    pub end_line: usize,
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    /// Creates a leaf symbol
    pub fn new(kind: SymbolKind, start_line: usize, end_line: usize) -> Self {
        Self {
            kind,
            start_line,
            end_line,
            children: Vec::new(),
        }
    }

    /// Returns true if `line` lies within this symbol.
    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }
}

/// A parsed, line-range-delimited unit of the document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HttpRegion {
    /// Symbolic name from a `@name` directive, if any.
    pub name: Option<String>,

    /// First line of the region (zero-based).
    pub start_line: usize,

    /// Last line of the region (zero-based, inclusive).
    pub end_line: usize,

    /// Protocol family of the region's request, when it has one.
    pub variant: Option<RequestVariant>,

    /// Top-level symbols in line order.
    pub symbols: Vec<SymbolNode>,
}

impl HttpRegion {
    /// Returns true if `line` lies within this region.
    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Returns the kind of the innermost symbol covering `line`.
    pub fn symbol_kind_at(&self, line: usize) -> Option<SymbolKind> {
        fn find(nodes: &[SymbolNode], line: usize) -> Option<SymbolKind> {
            nodes
                .iter()
                .filter(|node| node.contains_line(line))
                .find_map(|node| find(&node.children, line).or(Some(node.kind)))
        }
        find(&self.symbols, line)
    }

    /// Returns true if `line` is tagged as a request line or a request header.
    pub fn is_request_line_or_header(&self, line: usize) -> bool {
        matches!(
            self.symbol_kind_at(line),
            Some(SymbolKind::RequestLine | SymbolKind::RequestHeader)
        )
    }
}

/// The structural model of a whole request file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HttpDocument {
    pub regions: Vec<HttpRegion>,
}

impl HttpDocument {
    /// Creates a document from already parsed regions
    pub fn new(regions: Vec<HttpRegion>) -> Self {
        Self { regions }
    }

    /// Returns the region enclosing `line`, if any.
    pub fn region_at(&self, line: usize) -> Option<&HttpRegion> {
        self.regions.iter().find(|region| region.contains_line(line))
    }

    /// Returns the non-empty symbolic names of all regions, in document order.
    ///
    /// Repeated names are kept.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions
            .iter()
            .filter_map(|region| region.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_with_request(start: usize, end: usize) -> HttpRegion {
        let mut request_line = SymbolNode::new(SymbolKind::RequestLine, start, start + 1);
        request_line
            .children
            .push(SymbolNode::new(SymbolKind::RequestHeader, start + 1, start + 1));
        HttpRegion {
            name: None,
            start_line: start,
            end_line: end,
            variant: Some(RequestVariant::Http),
            symbols: vec![request_line],
        }
    }

    #[test]
    fn test_region_at() {
        let doc = HttpDocument::new(vec![region_with_request(0, 3), region_with_request(5, 9)]);
        assert_eq!(doc.region_at(2).map(|r| r.start_line), Some(0));
        assert_eq!(doc.region_at(7).map(|r| r.start_line), Some(5));
        assert!(doc.region_at(4).is_none());
        assert!(doc.region_at(10).is_none());
    }

    #[test]
    fn test_symbol_kind_at_prefers_children() {
        let region = region_with_request(0, 3);
        assert_eq!(region.symbol_kind_at(0), Some(SymbolKind::RequestLine));
        assert_eq!(region.symbol_kind_at(1), Some(SymbolKind::RequestHeader));
        assert_eq!(region.symbol_kind_at(2), None);
        assert!(region.is_request_line_or_header(1));
        assert!(!region.is_request_line_or_header(3));
    }

    #[test]
    fn test_region_names_skips_empty_and_keeps_duplicates() {
        let mut a = region_with_request(0, 1);
        a.name = Some("foo".to_string());
        let mut b = region_with_request(2, 3);
        b.name = Some(String::new());
        let mut c = region_with_request(4, 5);
        c.name = Some("foo".to_string());

        let doc = HttpDocument::new(vec![a, b, c]);
        let names: Vec<&str> = doc.region_names().collect();
        assert_eq!(names, vec!["foo", "foo"]);
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(RequestVariant::EventSource.to_string(), "eventsource");
        assert_eq!(RequestVariant::Grpc.as_str(), "grpc");
    }
}
