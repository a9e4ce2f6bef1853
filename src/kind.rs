//! Numeric kind tags.

use core::fmt;

use crate::error::{InvalidNumericKindSnafu, Result};
use crate::log::trace_failure;

/// A fixed-width numeric kind.
///
/// The discriminant doubles as the stable wire tag returned by
/// [`tag`](Self::tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum NumericKind {
    /// `i8`.
    Int8 = 0,
    /// `u8`.
    UInt8 = 1,
    /// `i16`.
    Int16 = 2,
    /// `u16`.
    UInt16 = 3,
    /// `i32`.
    Int32 = 4,
    /// `u32`.
    UInt32 = 5,
    /// `i64`.
    Int64 = 6,
    /// `u64`.
    UInt64 = 7,
    /// IEEE 754 binary32, `f32`.
    Float32 = 8,
    /// IEEE 754 binary64, `f64`.
    Float64 = 9,
}

impl NumericKind {
    /// Every supported kind, in tag order.
    pub const ALL: [NumericKind; 10] = [
        Self::Int8,
        Self::UInt8,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Float32,
        Self::Float64,
    ];

    /// Encoded width in bytes.
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 => 8,
        }
    }

    /// True for signed integers and floats.
    #[inline]
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64
        )
    }

    /// True for `Float32` and `Float64`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Stable one-byte tag.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Resolve a tag produced by [`tag`](Self::tag).
    ///
    /// ```
    /// use endiancast::NumericKind;
    ///
    /// assert_eq!(NumericKind::from_tag(8).unwrap(), NumericKind::Float32);
    /// assert!(NumericKind::from_tag(10).is_err());
    /// ```
    pub fn from_tag(tag: u8) -> Result<Self> {
        match Self::ALL.get(usize::from(tag)) {
            Some(kind) => Ok(*kind),
            None => {
                trace_failure!(tag, "invalid numeric kind tag");
                InvalidNumericKindSnafu { tag }.fail()
            }
        }
    }

    /// Rust type name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "i8",
            Self::UInt8 => "u8",
            Self::Int16 => "i16",
            Self::UInt16 => "u16",
            Self::Int32 => "i32",
            Self::UInt32 => "u32",
            Self::Int64 => "i64",
            Self::UInt64 => "u64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
        }
    }
}

impl TryFrom<u8> for NumericKind {
    type Error = crate::CodecError;

    fn try_from(tag: u8) -> Result<Self> {
        Self::from_tag(tag)
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
