//! # flagpack
//!
//! A **bit-packed inspection utility for HTTP parser state**, usable both
//! as a Rust library and as a CLI tool.
//!
//! An HTTP parser tracks four small pieces of public state: the response
//! status code, the request method, the parser error number, and the
//! upgrade flag. flagpack packs those four fields into a single `u32` at
//! fixed bit offsets for compact inspection or logging, and unpacks such
//! values back into named fields:
//!
//! ```text
//!   31       24 23     16 15                0
//!  +-+---------+---------+------------------+
//!  |U|  errno  | method  |   status_code    |
//!  +-+---------+---------+------------------+
//! ```
//!
//! ## Quick start — packing
//!
//! ```rust
//! use flagpack::{pack_flags, ParserState};
//!
//! let state = ParserState {
//!     status_code: 200,
//!     method: 1, // GET
//!     http_errno: 0,
//!     upgrade: false,
//! };
//! assert_eq!(pack_flags(&state), 0x0001_0200);
//! ```
//!
//! ## Quick start — inspecting a packed value
//!
//! ```rust
//! use flagpack::{HttpMethod, PackedFlags};
//!
//! let flags = PackedFlags::new(0x8001_0065);
//! assert_eq!(flags.status_code(), 101);
//! assert_eq!(flags.method().unwrap(), HttpMethod::GET);
//! assert!(flags.upgrade());
//! ```
//!
//! Packing performs **no validation**: a field value wider than its slot
//! silently bleeds into the neighboring field, exactly as a C bit-field
//! assignment would. See [`PackedFlags::pack`] for details.

mod error;
mod flags;
mod output;
mod types;

// Re-export public API.
pub use error::CodeError;
pub use flags::{
    ERRNO_MASK, ERRNO_SHIFT, METHOD_MASK, METHOD_SHIFT, PackedFlags, STATUS_MASK,
    UPGRADE_SHIFT,
};
pub use output::{format_debug, format_hex, format_json};
pub use types::{HttpErrno, HttpMethod, ParserState, Version};

/// Pack the four parser state fields into a single `u32` in one call.
///
/// This is a convenience wrapper around [`PackedFlags::pack`]. For access
/// to the individual fields of an already-packed value, wrap it in a
/// [`PackedFlags`] instead.
#[must_use]
pub fn pack_flags(state: &ParserState) -> u32 {
    PackedFlags::pack(state).bits()
}

/// Wrap a raw packed value for field-by-field inspection.
///
/// ```rust
/// use flagpack::unpack_flags;
///
/// assert_eq!(unpack_flags(0x0001_0200).status_code(), 512);
/// ```
#[must_use]
pub fn unpack_flags(packed: u32) -> PackedFlags {
    PackedFlags::new(packed)
}
