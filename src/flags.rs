use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::CodeError;
use crate::types::{HttpErrno, HttpMethod, ParserState};

// ---------------------------------------------------------------------------
// Bit layout
// ---------------------------------------------------------------------------
//
//   31       24 23     16 15                0
//  +-+---------+---------+------------------+
//  |U|  errno  | method  |   status_code    |
//  +-+---------+---------+------------------+

/// Shift of the method field within the packed value.
pub const METHOD_SHIFT: u32 = 16;
/// Shift of the error-number field within the packed value.
pub const ERRNO_SHIFT: u32 = 24;
/// Shift of the upgrade bit within the packed value.
pub const UPGRADE_SHIFT: u32 = 31;

/// Mask of the status-code field after shifting down.
pub const STATUS_MASK: u32 = 0xFFFF;
/// Mask of the method field after shifting down.
pub const METHOD_MASK: u32 = 0xFF;
/// Mask of the error-number field after shifting down.
pub const ERRNO_MASK: u32 = 0x7F;

// ---------------------------------------------------------------------------
// PackedFlags
// ---------------------------------------------------------------------------

/// Four HTTP parser state fields packed into a single `u32`.
///
/// The value has no identity beyond its bit pattern: it is computed fresh
/// from a [`ParserState`] by [`PackedFlags::pack`] and can be wrapped
/// around any raw `u32` with [`PackedFlags::new`].
///
/// ```rust
/// use flagpack::{PackedFlags, ParserState};
///
/// let state = ParserState { status_code: 200, method: 1, http_errno: 0, upgrade: false };
/// let flags = PackedFlags::pack(&state);
///
/// assert_eq!(flags.bits(), 0x0001_0200);
/// assert_eq!(flags.status_code(), 200);
/// assert_eq!(flags.method_code(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PackedFlags(u32);

impl PackedFlags {
    /// Wrap a raw packed value.
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Pack the four state fields into a single value.
    ///
    /// Pure and total: the input is read-only and every input produces a
    /// well-defined result. Fields are **not** masked to their allotted
    /// widths before shifting, so an out-of-range field bleeds into its
    /// neighbor's bits; callers are trusted to supply in-range values.
    pub const fn pack(state: &ParserState) -> Self {
        Self(
            state.status_code
                | (state.method << METHOD_SHIFT)
                | (state.http_errno << ERRNO_SHIFT)
                | ((state.upgrade as u32) << UPGRADE_SHIFT),
        )
    }

    /// Return the raw packed value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Extract the status code (bits 0-15).
    pub const fn status_code(self) -> u16 {
        (self.0 & STATUS_MASK) as u16
    }

    /// Extract the numeric method code (bits 16-23).
    pub const fn method_code(self) -> u8 {
        ((self.0 >> METHOD_SHIFT) & METHOD_MASK) as u8
    }

    /// Extract the numeric error code (bits 24-30).
    pub const fn errno_code(self) -> u8 {
        ((self.0 >> ERRNO_SHIFT) & ERRNO_MASK) as u8
    }

    /// Extract the upgrade flag (bit 31).
    pub const fn upgrade(self) -> bool {
        (self.0 >> UPGRADE_SHIFT) == 1
    }

    /// Resolve the method field to its named form.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::UnknownMethod`] if the packed code is outside
    /// the known method table.
    pub fn method(self) -> Result<HttpMethod, CodeError> {
        HttpMethod::from_code(u32::from(self.method_code()))
    }

    /// Resolve the error-number field to its named form.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::UnknownErrno`] if the packed code is outside
    /// the known error table.
    pub fn errno(self) -> Result<HttpErrno, CodeError> {
        HttpErrno::from_code(u32::from(self.errno_code()))
    }

    /// Reconstruct a [`ParserState`] from the packed fields.
    ///
    /// This is only a left inverse of [`PackedFlags::pack`] for in-range
    /// inputs: overflowed fields cannot be recovered once packed.
    pub const fn unpack(self) -> ParserState {
        ParserState {
            status_code: self.status_code() as u32,
            method: self.method_code() as u32,
            http_errno: self.errno_code() as u32,
            upgrade: self.upgrade(),
        }
    }
}

impl From<u32> for PackedFlags {
    fn from(bits: u32) -> Self {
        Self::new(bits)
    }
}

impl From<PackedFlags> for u32 {
    fn from(flags: PackedFlags) -> Self {
        flags.bits()
    }
}

impl From<&ParserState> for PackedFlags {
    fn from(state: &ParserState) -> Self {
        Self::pack(state)
    }
}

impl fmt::Display for PackedFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl fmt::LowerHex for PackedFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Serialize as a field-by-field breakdown rather than a bare integer, so
/// JSON consumers see both the raw value and each extracted field. Method
/// and errno names are `null` when the code is outside the known tables.
impl Serialize for PackedFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("PackedFlags", 8)?;
        s.serialize_field("packed", &self.bits())?;
        s.serialize_field("hex", &self.to_string())?;
        s.serialize_field("status_code", &self.status_code())?;
        s.serialize_field("method_code", &self.method_code())?;
        s.serialize_field("method", &self.method().ok().map(HttpMethod::as_str))?;
        s.serialize_field("errno_code", &self.errno_code())?;
        s.serialize_field("errno", &self.errno().ok().map(HttpErrno::name))?;
        s.serialize_field("upgrade", &self.upgrade())?;
        s.end()
    }
}

// ---------------------------------------------------------------------------
// Tests (unit)
// ---------------------------------------------------------------------------
