//! Static candidate tables.
//!
//! Every vocabulary offered by the completion engine lives here as plain
//! data. Adding a header field or a protocol is a table edit; the lookup
//! functions only select a table and wrap its rows as candidates.

use super::mime::MIME_TYPES;
use crate::grammar::{MetaDirective, META_DIRECTIVES};
use crate::models::{CompletionCandidate, RequestVariant};

/// A `(name, description)` row.
pub type TableEntry = (&'static str, &'static str);

/// Request-line keywords: HTTP verbs followed by protocol selectors.
pub static METHODS: &[TableEntry] = &[
    ("GET", "Requests a representation of the specified resource"),
    ("HEAD", "Like GET, but without the response body"),
    ("POST", "Submits an entity to the specified resource"),
    ("PUT", "Replaces the target resource with the request payload"),
    ("DELETE", "Deletes the specified resource"),
    ("CONNECT", "Establishes a tunnel to the server identified by the target resource"),
    ("OPTIONS", "Describes the communication options for the target resource"),
    ("TRACE", "Performs a message loop-back test along the path to the target resource"),
    ("PATCH", "Applies partial modifications to a resource"),
    ("MQTT", "Connects to an MQTT broker"),
    ("WSS", "Opens a WebSocket connection"),
    ("SSE", "Subscribes to a server-sent events stream"),
    ("GRPC", "Calls a gRPC service method"),
];

/// Registered HTTP request header fields.
pub static HTTP_HEADERS: &[TableEntry] = &[
    ("A-IM", "Acceptable instance-manipulations for the request"),
    ("Accept", "Media type(s) that is/are acceptable for the response"),
    ("Accept-Charset", "Character sets that are acceptable"),
    ("Accept-Datetime", "Acceptable version in time"),
    ("Accept-Encoding", "List of acceptable encodings"),
    ("Accept-Language", "List of acceptable human languages for response"),
    ("Accept-Patch", "Patch document formats accepted by the server"),
    ("Access-Control-Request-Headers", "Headers the actual request will use (CORS preflight)"),
    ("Access-Control-Request-Method", "Method the actual request will use (CORS preflight)"),
    ("Authorization", "Authentication credentials for HTTP authentication"),
    ("Cache-Control", "Directives that must be obeyed by all caching mechanisms along the request-response chain"),
    ("Connection", "Control options for the current connection"),
    ("Content-Disposition", "Presentation style of the payload"),
    ("Content-Encoding", "The type of encoding used on the data"),
    ("Content-Language", "The natural language of the intended audience"),
    ("Content-Length", "The length of the request body in octets (8-bit bytes)"),
    ("Content-MD5", "A Base64-encoded binary MD5 sum of the content of the request body"),
    ("Content-Type", "The Media type of the body of the request (used with POST and PUT requests)"),
    ("Cookie", "An HTTP cookie previously sent by the server with Set-Cookie"),
    ("Date", "The date and time at which the message was originated"),
    ("DNT", "Requests a web application to disable their tracking of a user"),
    ("Early-Data", "Indicates that the request has been conveyed in TLS early data"),
    ("Expect", "Indicates that particular server behaviors are required by the client"),
    ("Forwarded", "Discloses original information of a client connecting through an HTTP proxy"),
    ("From", "The email address of the user making the request"),
    ("Front-End-Https", "Non-standard header field used by Microsoft applications and load-balancers"),
    ("Host", "The domain name of the server (for virtual hosting), and the TCP port number"),
    ("HTTP2-Settings", "Connection-specific HTTP/2 settings for an upgrade request"),
    ("If-Match", "Only perform the action if the client supplied entity matches the same entity on the server"),
    ("If-Modified-Since", "Allows a 304 Not Modified to be returned if content is unchanged"),
    ("If-None-Match", "Allows a 304 Not Modified to be returned if content is unchanged"),
    ("If-Range", "If the entity is unchanged, send me the part(s) that I am missing; otherwise, send me the entire new entity"),
    ("If-Unmodified-Since", "Only send the response if the entity has not been modified since a specific time"),
    ("Keep-Alive", "Parameters for a persistent connection"),
    ("Max-Forwards", "Limit the number of times the message can be forwarded through proxies or gateways"),
    ("Origin", "Initiates a request for cross-origin resource sharing"),
    ("Pragma", "Implementation-specific fields that may have various effects anywhere along the request-response chain"),
    ("Prefer", "Preferences for specific server behaviors during request processing"),
    ("Proxy-Authorization", "Authorization credentials for connecting to a proxy"),
    ("Proxy-Connection", "Implemented as a misunderstanding of the HTTP specifications"),
    ("Range", "Request only part of an entity. Bytes are numbered from 0"),
    ("Referer", "The address of the previous web page from which a link to the currently requested page was followed"),
    ("Save-Data", "Indicates the client's preference for reduced data usage"),
    ("Sec-Fetch-Dest", "The request's destination"),
    ("Sec-Fetch-Mode", "The request's mode"),
    ("Sec-Fetch-Site", "Relationship between the request initiator's origin and the target's origin"),
    ("Sec-Fetch-User", "Whether the navigation request was triggered by user activation"),
    ("TE", "The transfer encodings the user agent is willing to accept"),
    ("Trailer", "Header fields present in the trailer of a chunked message"),
    ("Transfer-Encoding", "The form of encoding used to safely transfer the entity to the user"),
    ("Upgrade", "Ask the server to upgrade to another protocol"),
    ("Upgrade-Insecure-Requests", "Tells a server which hosts are willing to accept secure requests"),
    ("User-Agent", "The user agent string of the user agent"),
    ("Via", "Informs the server of proxies through which the request was sent"),
    ("Warning", "A general warning about possible problems with the entity body"),
    ("X-ATT-DeviceId", "Allows easier parsing of the MakeModel/Firmware that is usually found in the User-Agent String of AT&T Devices"),
    ("X-Correlation-ID", "Correlates HTTP requests between a client and server"),
    ("X-Csrf-Token", "Used to prevent cross-site request forgery"),
    ("X-Forwarded-For", "Identifying the originating IP address of a client connecting through an HTTP proxy or load balancer"),
    ("X-Forwarded-Host", "Identifying the original host requested by the client in the Host HTTP request header"),
    ("X-Forwarded-Proto", "Identifying the originating protocol of an HTTP request"),
    ("X-Http-Method-Override", "Requests a web application to override the method specified in the request"),
    ("X-Request-ID", "Correlates HTTP requests between a client and server"),
    ("X-Requested-With", "Mainly used to identify Ajax requests"),
    ("X-UIDH", "Server-side deep packet insertion of a unique ID identifying customers of Verizon Wireless"),
    ("X-Wap-Profile", "Links to an XML file on the Internet with a full description and details about the device currently connecting"),
];

/// Broker-session fields of an MQTT request.
pub static MQTT_HEADERS: &[TableEntry] = &[
    ("Username", "The username required by your broker, if any"),
    ("Password", "The password required by your broker, if any"),
    ("Clean", "Set to false to receive QoS 1 and 2 messages while offline"),
    ("Keepalive", "Keepalive interval in seconds, 0 to disable"),
    ("QoS", "Quality of service level (0, 1 or 2)"),
    ("Retain", "Retain flag for published messages"),
    ("Subscribe", "Topic(s) to subscribe to"),
    ("Publish", "Topic(s) to publish the body to"),
    ("Topic", "Topic(s) to subscribe and publish to"),
];

/// Fields of a server-sent events request.
pub static EVENT_SOURCE_HEADERS: &[TableEntry] =
    &[("Event", "Event names to listen for (comma separated)")];

/// Fields of a gRPC request.
pub static GRPC_HEADERS: &[TableEntry] = &[(
    "ChannelCredentials",
    "Credentials used for the channel (insecure, ssl or a credentials object)",
)];

/// Authorization schemes offered after `Authorization:`.
pub static AUTH_SCHEMES: &[TableEntry] = &[
    ("Basic", "Basic authentication with username and password"),
    ("Digest", "Digest access authentication with username and password"),
    ("AWS", "AWS Signature v4 authentication"),
    ("OAuth2", "OAuth2 token flow (client_credentials, password, authorization_code, implicit)"),
    ("OpenId", "OpenID Connect token flow"),
    ("Bearer", "Bearer token authentication"),
];

/// Content type that is not a file type and therefore missing from the extension map.
pub const FORM_URLENCODED: TableEntry = (
    "application/x-www-form-urlencoded",
    "Form data encoded as key-value pairs",
);

fn keywords(table: &[TableEntry]) -> Vec<CompletionCandidate> {
    table
        .iter()
        .map(|(name, description)| CompletionCandidate::keyword(name, description))
        .collect()
}

fn fields(table: &[TableEntry]) -> Vec<CompletionCandidate> {
    table
        .iter()
        .map(|(name, description)| CompletionCandidate::field(name, description))
        .collect()
}

fn values(table: &[TableEntry]) -> Vec<CompletionCandidate> {
    table
        .iter()
        .map(|(name, description)| CompletionCandidate::value(name, description))
        .collect()
}

/// Returns the header rows registered for a request variant.
pub fn header_entries(variant: Option<RequestVariant>) -> &'static [TableEntry] {
    match variant {
        Some(RequestVariant::Http) => HTTP_HEADERS,
        Some(RequestVariant::Mqtt) => MQTT_HEADERS,
        Some(RequestVariant::EventSource) => EVENT_SOURCE_HEADERS,
        Some(RequestVariant::Grpc) => GRPC_HEADERS,
        None => &[],
    }
}

/// Method keywords and protocol selectors.
pub fn method_table() -> Vec<CompletionCandidate> {
    keywords(METHODS)
}

/// Header fields for the given request variant; empty when it is unknown.
pub fn header_table(variant: Option<RequestVariant>) -> Vec<CompletionCandidate> {
    fields(header_entries(variant))
}

/// One candidate per registered extension mapping, plus the form content type.
///
/// The candidate is keyed by the content type; its description is the file
/// extension the mapping was registered for.
pub fn mime_type_table() -> Vec<CompletionCandidate> {
    MIME_TYPES
        .iter()
        .map(|(extension, content_type)| CompletionCandidate::value(content_type, extension))
        .chain(std::iter::once(CompletionCandidate::value(
            FORM_URLENCODED.0,
            FORM_URLENCODED.1,
        )))
        .collect()
}

/// Authorization schemes.
pub fn auth_scheme_table() -> Vec<CompletionCandidate> {
    values(AUTH_SCHEMES)
}

/// Registered meta directives.
pub fn meta_directive_table() -> &'static [MetaDirective] {
    META_DIRECTIVES
}
