use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::CodeError;

// ---------------------------------------------------------------------------
// ParserState
// ---------------------------------------------------------------------------

/// A snapshot of an HTTP parser's public state fields.
///
/// This is a plain data record, not a view into any foreign struct layout:
/// whatever adapter sits in front of the actual parsing library is expected
/// to copy the four fields into it. Fields are deliberately wider than the
/// bit widths the packed layout allots them (16/8/7/1 bits) so that
/// out-of-range values can be represented; the packer does not validate
/// them (see [`crate::pack_flags`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ParserState {
    /// Response status code. Occupies bits 0-15 of the packed value.
    pub status_code: u32,
    /// Numeric HTTP method code (see [`HttpMethod`]). Bits 16-23.
    pub method: u32,
    /// Numeric parser error code (see [`HttpErrno`]). Bits 24-30.
    pub http_errno: u32,
    /// Whether a protocol upgrade was requested. Bit 31.
    pub upgrade: bool,
}

// ---------------------------------------------------------------------------
// HttpMethod
// ---------------------------------------------------------------------------

/// HTTP request methods and their `http-parser` v2.5 numeric codes.
///
/// The discriminants match the upstream method table exactly; the packed
/// flags layout stores them in bits 16-23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum HttpMethod {
    DELETE = 0,
    GET = 1,
    HEAD = 2,
    POST = 3,
    PUT = 4,
    CONNECT = 5,
    OPTIONS = 6,
    TRACE = 7,
    COPY = 8,
    LOCK = 9,
    MKCOL = 10,
    MOVE = 11,
    PROPFIND = 12,
    PROPPATCH = 13,
    SEARCH = 14,
    UNLOCK = 15,
    BIND = 16,
    REBIND = 17,
    UNBIND = 18,
    ACL = 19,
    REPORT = 20,
    MKACTIVITY = 21,
    CHECKOUT = 22,
    MERGE = 23,
    MSEARCH = 24,
    NOTIFY = 25,
    SUBSCRIBE = 26,
    UNSUBSCRIBE = 27,
    PATCH = 28,
    PURGE = 29,
    MKCALENDAR = 30,
    LINK = 31,
    UNLINK = 32,
}

impl HttpMethod {
    /// All methods in code order.
    pub const ALL: [HttpMethod; 33] = [
        Self::DELETE,
        Self::GET,
        Self::HEAD,
        Self::POST,
        Self::PUT,
        Self::CONNECT,
        Self::OPTIONS,
        Self::TRACE,
        Self::COPY,
        Self::LOCK,
        Self::MKCOL,
        Self::MOVE,
        Self::PROPFIND,
        Self::PROPPATCH,
        Self::SEARCH,
        Self::UNLOCK,
        Self::BIND,
        Self::REBIND,
        Self::UNBIND,
        Self::ACL,
        Self::REPORT,
        Self::MKACTIVITY,
        Self::CHECKOUT,
        Self::MERGE,
        Self::MSEARCH,
        Self::NOTIFY,
        Self::SUBSCRIBE,
        Self::UNSUBSCRIBE,
        Self::PATCH,
        Self::PURGE,
        Self::MKCALENDAR,
        Self::LINK,
        Self::UNLINK,
    ];

    /// Look up a method by its numeric code.
    ///
    /// Returns an error if the code is outside the known method table.
    pub fn from_code(code: u32) -> Result<Self, CodeError> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(CodeError::UnknownMethod(code))
    }

    /// Look up a method by its canonical name (e.g. `"GET"`, `"M-SEARCH"`).
    ///
    /// Matching is exact and case-sensitive, as upstream method tokens are.
    pub fn from_name(name: &str) -> Result<Self, CodeError> {
        Self::ALL
            .iter()
            .find(|m| m.as_str() == name)
            .copied()
            .ok_or_else(|| CodeError::UnknownMethodName(name.to_owned()))
    }

    /// Return the numeric code of this method.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Return the method as a static string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DELETE => "DELETE",
            Self::GET => "GET",
            Self::HEAD => "HEAD",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::CONNECT => "CONNECT",
            Self::OPTIONS => "OPTIONS",
            Self::TRACE => "TRACE",
            Self::COPY => "COPY",
            Self::LOCK => "LOCK",
            Self::MKCOL => "MKCOL",
            Self::MOVE => "MOVE",
            Self::PROPFIND => "PROPFIND",
            Self::PROPPATCH => "PROPPATCH",
            Self::SEARCH => "SEARCH",
            Self::UNLOCK => "UNLOCK",
            Self::BIND => "BIND",
            Self::REBIND => "REBIND",
            Self::UNBIND => "UNBIND",
            Self::ACL => "ACL",
            Self::REPORT => "REPORT",
            Self::MKACTIVITY => "MKACTIVITY",
            Self::CHECKOUT => "CHECKOUT",
            Self::MERGE => "MERGE",
            Self::MSEARCH => "M-SEARCH",
            Self::NOTIFY => "NOTIFY",
            Self::SUBSCRIBE => "SUBSCRIBE",
            Self::UNSUBSCRIBE => "UNSUBSCRIBE",
            Self::PATCH => "PATCH",
            Self::PURGE => "PURGE",
            Self::MKCALENDAR => "MKCALENDAR",
            Self::LINK => "LINK",
            Self::UNLINK => "UNLINK",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HttpErrno
// ---------------------------------------------------------------------------

/// Parser error conditions and their `http-parser` v2.5 numeric codes.
///
/// The packed flags layout stores the code in bits 24-30, so every known
/// value fits in 7 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HttpErrno {
    Ok = 0,
    CbMessageBegin = 1,
    CbUrl = 2,
    CbHeaderField = 3,
    CbHeaderValue = 4,
    CbHeadersComplete = 5,
    CbBody = 6,
    CbMessageComplete = 7,
    CbStatus = 8,
    CbChunkHeader = 9,
    CbChunkComplete = 10,
    InvalidEofState = 11,
    HeaderOverflow = 12,
    ClosedConnection = 13,
    InvalidVersion = 14,
    InvalidStatus = 15,
    InvalidMethod = 16,
    InvalidUrl = 17,
    InvalidHost = 18,
    InvalidPort = 19,
    InvalidPath = 20,
    InvalidQueryString = 21,
    InvalidFragment = 22,
    LfExpected = 23,
    InvalidHeaderToken = 24,
    InvalidContentLength = 25,
    InvalidChunkSize = 26,
    InvalidConstant = 27,
    InvalidInternalState = 28,
    Strict = 29,
    Paused = 30,
    Unknown = 31,
}

impl HttpErrno {
    /// All error conditions in code order.
    pub const ALL: [HttpErrno; 32] = [
        Self::Ok,
        Self::CbMessageBegin,
        Self::CbUrl,
        Self::CbHeaderField,
        Self::CbHeaderValue,
        Self::CbHeadersComplete,
        Self::CbBody,
        Self::CbMessageComplete,
        Self::CbStatus,
        Self::CbChunkHeader,
        Self::CbChunkComplete,
        Self::InvalidEofState,
        Self::HeaderOverflow,
        Self::ClosedConnection,
        Self::InvalidVersion,
        Self::InvalidStatus,
        Self::InvalidMethod,
        Self::InvalidUrl,
        Self::InvalidHost,
        Self::InvalidPort,
        Self::InvalidPath,
        Self::InvalidQueryString,
        Self::InvalidFragment,
        Self::LfExpected,
        Self::InvalidHeaderToken,
        Self::InvalidContentLength,
        Self::InvalidChunkSize,
        Self::InvalidConstant,
        Self::InvalidInternalState,
        Self::Strict,
        Self::Paused,
        Self::Unknown,
    ];

    /// Look up an error condition by its numeric code.
    pub fn from_code(code: u32) -> Result<Self, CodeError> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(CodeError::UnknownErrno(code))
    }

    /// Return the numeric code of this error condition.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Return the upstream `HPE_*` identifier for this error condition.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "HPE_OK",
            Self::CbMessageBegin => "HPE_CB_message_begin",
            Self::CbUrl => "HPE_CB_url",
            Self::CbHeaderField => "HPE_CB_header_field",
            Self::CbHeaderValue => "HPE_CB_header_value",
            Self::CbHeadersComplete => "HPE_CB_headers_complete",
            Self::CbBody => "HPE_CB_body",
            Self::CbMessageComplete => "HPE_CB_message_complete",
            Self::CbStatus => "HPE_CB_status",
            Self::CbChunkHeader => "HPE_CB_chunk_header",
            Self::CbChunkComplete => "HPE_CB_chunk_complete",
            Self::InvalidEofState => "HPE_INVALID_EOF_STATE",
            Self::HeaderOverflow => "HPE_HEADER_OVERFLOW",
            Self::ClosedConnection => "HPE_CLOSED_CONNECTION",
            Self::InvalidVersion => "HPE_INVALID_VERSION",
            Self::InvalidStatus => "HPE_INVALID_STATUS",
            Self::InvalidMethod => "HPE_INVALID_METHOD",
            Self::InvalidUrl => "HPE_INVALID_URL",
            Self::InvalidHost => "HPE_INVALID_HOST",
            Self::InvalidPort => "HPE_INVALID_PORT",
            Self::InvalidPath => "HPE_INVALID_PATH",
            Self::InvalidQueryString => "HPE_INVALID_QUERY_STRING",
            Self::InvalidFragment => "HPE_INVALID_FRAGMENT",
            Self::LfExpected => "HPE_LF_EXPECTED",
            Self::InvalidHeaderToken => "HPE_INVALID_HEADER_TOKEN",
            Self::InvalidContentLength => "HPE_INVALID_CONTENT_LENGTH",
            Self::InvalidChunkSize => "HPE_INVALID_CHUNK_SIZE",
            Self::InvalidConstant => "HPE_INVALID_CONSTANT",
            Self::InvalidInternalState => "HPE_INVALID_INTERNAL_STATE",
            Self::Strict => "HPE_STRICT",
            Self::Paused => "HPE_PAUSED",
            Self::Unknown => "HPE_UNKNOWN",
        }
    }

    /// Return the human-readable description for this error condition.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::CbMessageBegin => "the on_message_begin callback failed",
            Self::CbUrl => "the on_url callback failed",
            Self::CbHeaderField => "the on_header_field callback failed",
            Self::CbHeaderValue => "the on_header_value callback failed",
            Self::CbHeadersComplete => "the on_headers_complete callback failed",
            Self::CbBody => "the on_body callback failed",
            Self::CbMessageComplete => "the on_message_complete callback failed",
            Self::CbStatus => "the on_status callback failed",
            Self::CbChunkHeader => "the on_chunk_header callback failed",
            Self::CbChunkComplete => "the on_chunk_complete callback failed",
            Self::InvalidEofState => "stream ended at an unexpected time",
            Self::HeaderOverflow => "too many header bytes seen; overflow detected",
            Self::ClosedConnection => {
                "data received after completed connection: close message"
            }
            Self::InvalidVersion => "invalid HTTP version",
            Self::InvalidStatus => "invalid HTTP status code",
            Self::InvalidMethod => "invalid HTTP method",
            Self::InvalidUrl => "invalid URL",
            Self::InvalidHost => "invalid host",
            Self::InvalidPort => "invalid port",
            Self::InvalidPath => "invalid path",
            Self::InvalidQueryString => "invalid query string",
            Self::InvalidFragment => "invalid fragment",
            Self::LfExpected => "LF character expected",
            Self::InvalidHeaderToken => "invalid character in header",
            Self::InvalidContentLength => "invalid character in content-length header",
            Self::InvalidChunkSize => "invalid character in chunk size header",
            Self::InvalidConstant => "invalid constant string",
            Self::InvalidInternalState => "encountered unexpected internal state",
            Self::Strict => "strict mode assertion failed",
            Self::Paused => "parser is paused",
            Self::Unknown => "an unknown error occurred",
        }
    }
}

impl fmt::Display for HttpErrno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for HttpErrno {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

/// An upstream parser library version, reported as a packed `u32`.
///
/// Uses the same shift-and-OR discipline as the flag packer, over a
/// different layout: one byte per component, `major << 16 | minor << 8 |
/// patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Version {
    /// Decode a version from its packed `u32` representation.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            major: ((packed >> 16) & 0xFF) as u8,
            minor: ((packed >> 8) & 0xFF) as u8,
            patch: (packed & 0xFF) as u8,
        }
    }

    /// Encode this version into its packed `u32` representation.
    pub const fn to_packed(self) -> u32 {
        ((self.major as u32) << 16) | ((self.minor as u32) << 8) | (self.patch as u32)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
