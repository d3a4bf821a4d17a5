use std::fmt;

/// Errors that can occur when resolving numeric codes to their named forms.
///
/// Packing itself is infallible; only the reverse direction — mapping a
/// method or error code out of a packed value back to its enum — can fail,
/// because a packed `u32` can carry codes outside the known tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// The method code is outside the known method table.
    UnknownMethod(u32),
    /// The method name does not match any known method.
    UnknownMethodName(String),
    /// The error code is outside the known error table.
    UnknownErrno(u32),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod(c) => write!(f, "unknown HTTP method code: {c}"),
            Self::UnknownMethodName(n) => write!(f, "unknown HTTP method name: '{n}'"),
            Self::UnknownErrno(c) => write!(f, "unknown parser error code: {c}"),
        }
    }
}

impl std::error::Error for CodeError {}
