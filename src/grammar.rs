//! Grammar definitions for the request file format.
//!
//! Meta directives are `#`-prefixed annotations (`# @name login`,
//! `# @no-redirect`) that control how a request region is treated. This
//! module owns the registered set; completion and any other consumer read it
//! from here.

/// A registered meta directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaDirective {
    /// Directive name without the leading `@`.
    pub name: &'static str,
    /// Short explanation shown next to completions.
    pub description: &'static str,
    /// Fixed argument values, in suggestion order.
    pub completions: Option<&'static [&'static str]>,
}

const BOOLEAN: &[&str] = &["true", "false"];

/// All known meta directives, in suggestion order.
pub static META_DIRECTIVES: &[MetaDirective] = &[
    MetaDirective {
        name: "name",
        description: "Name of the request, used for references and response variables",
        completions: None,
    },
    MetaDirective {
        name: "title",
        description: "Title of the request shown in request lists",
        completions: None,
    },
    MetaDirective {
        name: "description",
        description: "Longer description of the request",
        completions: None,
    },
    MetaDirective {
        name: "ref",
        description: "Run the named request first unless it already has a response",
        completions: None,
    },
    MetaDirective {
        name: "forceRef",
        description: "Always run the named request first",
        completions: None,
    },
    MetaDirective {
        name: "import",
        description: "Import regions and variables from another request file",
        completions: None,
    },
    MetaDirective {
        name: "disabled",
        description: "Skip the request (optionally when the given expression is truthy)",
        completions: None,
    },
    MetaDirective {
        name: "loop",
        description: "Repeat the request (for ... of, for <count>, while <expression>)",
        completions: Some(&["for", "while"]),
    },
    MetaDirective {
        name: "sleep",
        description: "Wait the given number of milliseconds before sending",
        completions: None,
    },
    MetaDirective {
        name: "timeout",
        description: "Request timeout in milliseconds",
        completions: None,
    },
    MetaDirective {
        name: "ratelimit",
        description: "Limit the request rate (minIdleTime, max, expire)",
        completions: None,
    },
    MetaDirective {
        name: "note",
        description: "Ask for confirmation before sending the request",
        completions: None,
    },
    MetaDirective {
        name: "verbose",
        description: "Log request and response at trace level",
        completions: None,
    },
    MetaDirective {
        name: "debug",
        description: "Log request and response at debug level",
        completions: None,
    },
    MetaDirective {
        name: "jwt",
        description: "Decode the named JWT variable and log its payload",
        completions: None,
    },
    MetaDirective {
        name: "save",
        description: "Save the response body to disk without showing it",
        completions: None,
    },
    MetaDirective {
        name: "openWith",
        description: "Open the response with the given editor view type",
        completions: None,
    },
    MetaDirective {
        name: "extension",
        description: "File extension used when saving the response",
        completions: None,
    },
    MetaDirective {
        name: "keepStreaming",
        description: "Keep streaming protocols (MQTT, SSE, WebSocket, gRPC) open until cancelled",
        completions: None,
    },
    MetaDirective {
        name: "injectVariables",
        description: "Inject variables into the request body",
        completions: None,
    },
    MetaDirective {
        name: "rejectUnauthorized",
        description: "Whether invalid TLS certificates are rejected",
        completions: Some(BOOLEAN),
    },
    MetaDirective {
        name: "followRedirect",
        description: "Whether redirect responses are followed",
        completions: Some(BOOLEAN),
    },
    MetaDirective {
        name: "proxy",
        description: "Proxy server used for this request",
        completions: None,
    },
    MetaDirective {
        name: "no-proxy",
        description: "Ignore the configured proxy for this request",
        completions: None,
    },
    MetaDirective {
        name: "no-redirect",
        description: "Do not follow redirects",
        completions: None,
    },
    MetaDirective {
        name: "no-reject-unauthorized",
        description: "Accept invalid TLS certificates",
        completions: None,
    },
    MetaDirective {
        name: "no-client-cert",
        description: "Do not send a client certificate",
        completions: None,
    },
    MetaDirective {
        name: "no-cookie-jar",
        description: "Do not use the cookie jar for this request",
        completions: None,
    },
    MetaDirective {
        name: "no-log",
        description: "Do not log the request and response",
        completions: None,
    },
    MetaDirective {
        name: "no-response-view",
        description: "Do not show the response in an editor",
        completions: None,
    },
    MetaDirective {
        name: "no-streaming-log",
        description: "Do not log individual streamed messages",
        completions: None,
    },
    MetaDirective {
        name: "grpc-reflection",
        description: "Resolve the gRPC service definition via server reflection",
        completions: None,
    },
];
