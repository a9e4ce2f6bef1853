//! Byte order strategies.
//!
//! [`Endian`] selects an order at runtime. [`LittleEndian`] and
//! [`BigEndian`] are zero-sized markers for the same operations when the
//! order is known at compile time, via the [`ByteOrder`] trait.

use crate::codec;
use crate::error::Result;
use crate::{NumericKind, Primitive, Value, ValueBytes};

#[cfg(feature = "std")]
use std::io::{Read, Write};

/// Byte order of an encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Endian {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endian {
    /// Order of the compilation target.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;

    /// Order of the compilation target.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// Host order; see [`SystemEndian`].
    pub const SYSTEM: Self = Self::NATIVE;

    /// Network order, big endian.
    pub const NETWORK: Self = Self::Big;

    /// True if values in this order need no byte reversal on this host.
    #[inline]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Self::Little, Self::Little) | (Self::Big, Self::Big)
        )
    }

    /// The opposite order.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }

    /// Encode `value` into a fresh array.
    ///
    /// ```
    /// use endiancast::Endian;
    ///
    /// assert_eq!(Endian::Little.to_bytes(0x1234i16), [0x34, 0x12]);
    /// assert_eq!(Endian::Big.to_bytes(0x1234i16), [0x12, 0x34]);
    /// ```
    #[inline]
    pub fn to_bytes<T: Primitive>(self, value: T) -> T::Bytes {
        codec::to_bytes(self, value)
    }

    /// Encode `value` into `dst`, which must be exactly `T::WIDTH` bytes.
    #[inline]
    pub fn encode<T: Primitive>(self, value: T, dst: &mut [u8]) -> Result<()> {
        codec::encode(self, value, dst)
    }

    /// Decode a `T` from `src`, which must be exactly `T::WIDTH` bytes.
    #[inline]
    pub fn decode<T: Primitive>(self, src: &[u8]) -> Result<T> {
        codec::decode(self, src)
    }

    /// Encode `values` back to back into `dst`.
    ///
    /// `dst` must be exactly `values.len() * T::WIDTH` bytes.
    #[inline]
    pub fn encode_slice<T: Primitive>(self, values: &[T], dst: &mut [u8]) -> Result<()> {
        codec::encode_slice(self, values, dst)
    }

    /// Decode `out.len()` values from `src`.
    ///
    /// `src` must be exactly `out.len() * T::WIDTH` bytes.
    #[inline]
    pub fn decode_slice<T: Primitive>(self, src: &[u8], out: &mut [T]) -> Result<()> {
        codec::decode_slice(self, src, out)
    }
}

impl Default for Endian {
    fn default() -> Self {
        Self::NATIVE
    }
}

/// Compile-time byte order.
///
/// Sealed: implemented by [`LittleEndian`] and [`BigEndian`] only. Every
/// method forwards to the matching [`Endian`] method.
///
/// # Example
///
/// ```
/// use endiancast::{BigEndian, ByteOrder, LittleEndian};
///
/// let mut buf = [0u8; 4];
/// LittleEndian::encode(1.0f32, &mut buf).unwrap();
/// assert_eq!(buf, [0x00, 0x00, 0x80, 0x3F]);
///
/// let v: f32 = LittleEndian::decode(&buf).unwrap();
/// assert_eq!(v, 1.0);
///
/// assert!(BigEndian::decode::<i32>(&buf[..2]).is_err());
/// ```
pub trait ByteOrder: Copy + Default + sealed::Sealed {
    /// Runtime equivalent.
    const ENDIAN: Endian;

    /// See [`Endian::to_bytes`].
    #[inline]
    fn to_bytes<T: Primitive>(value: T) -> T::Bytes {
        Self::ENDIAN.to_bytes(value)
    }

    /// See [`Endian::encode`].
    #[inline]
    fn encode<T: Primitive>(value: T, dst: &mut [u8]) -> Result<()> {
        Self::ENDIAN.encode(value, dst)
    }

    /// See [`Endian::decode`].
    #[inline]
    fn decode<T: Primitive>(src: &[u8]) -> Result<T> {
        Self::ENDIAN.decode(src)
    }

    /// See [`Endian::encode_slice`].
    #[inline]
    fn encode_slice<T: Primitive>(values: &[T], dst: &mut [u8]) -> Result<()> {
        Self::ENDIAN.encode_slice(values, dst)
    }

    /// See [`Endian::decode_slice`].
    #[inline]
    fn decode_slice<T: Primitive>(src: &[u8], out: &mut [T]) -> Result<()> {
        Self::ENDIAN.decode_slice(src, out)
    }

    /// See [`Endian::value_to_bytes`].
    #[inline]
    fn value_to_bytes(value: Value) -> ValueBytes {
        Self::ENDIAN.value_to_bytes(value)
    }

    /// See [`Endian::encode_value`].
    #[inline]
    fn encode_value(value: Value, dst: &mut [u8]) -> Result<()> {
        Self::ENDIAN.encode_value(value, dst)
    }

    /// See [`Endian::decode_value`].
    #[inline]
    fn decode_value(kind: NumericKind, src: &[u8]) -> Result<Value> {
        Self::ENDIAN.decode_value(kind, src)
    }

    /// See [`Endian::write`].
    #[cfg(feature = "std")]
    #[inline]
    fn write<T: Primitive, W: Write + ?Sized>(value: T, sink: &mut W) -> Result<()> {
        Self::ENDIAN.write(value, sink)
    }

    /// See [`Endian::read`].
    #[cfg(feature = "std")]
    #[inline]
    fn read<T: Primitive, R: Read + ?Sized>(source: &mut R) -> Result<T> {
        Self::ENDIAN.read(source)
    }

    /// See [`Endian::write_value`].
    #[cfg(feature = "std")]
    #[inline]
    fn write_value<W: Write + ?Sized>(value: Value, sink: &mut W) -> Result<()> {
        Self::ENDIAN.write_value(value, sink)
    }

    /// See [`Endian::read_value`].
    #[cfg(feature = "std")]
    #[inline]
    fn read_value<R: Read + ?Sized>(kind: NumericKind, source: &mut R) -> Result<Value> {
        Self::ENDIAN.read_value(kind, source)
    }
}

/// Least significant byte first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

/// Most significant byte first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

impl ByteOrder for LittleEndian {
    const ENDIAN: Endian = Endian::Little;
}

impl ByteOrder for BigEndian {
    const ENDIAN: Endian = Endian::Big;
}

/// Host byte order.
#[cfg(target_endian = "little")]
pub type SystemEndian = LittleEndian;

/// Host byte order.
#[cfg(target_endian = "big")]
pub type SystemEndian = BigEndian;

/// Network byte order.
pub type NetworkEndian = BigEndian;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::LittleEndian {}
    impl Sealed for super::BigEndian {}
}
