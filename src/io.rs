//! Byte-stream boundary over `std::io`.
//!
//! Each call moves exactly one value's width through the stream. A short
//! read is reported as [`CodecError::UnexpectedEndOfStream`] and never
//! yields a partial value.
//!
//! [`CodecError::UnexpectedEndOfStream`]: crate::CodecError::UnexpectedEndOfStream

use std::io::{ErrorKind, Read, Write};

use snafu::ResultExt;

use crate::codec;
use crate::error::{IoSnafu, Result, UnexpectedEndOfStreamSnafu};
use crate::log::trace_failure;
use crate::value::{with_kind, with_value};
use crate::{ByteOrder, Endian, NumericKind, Primitive, Value};

impl Endian {
    /// Write `value` to `sink` as exactly `T::WIDTH` bytes.
    ///
    /// ```
    /// use endiancast::Endian;
    ///
    /// let mut out = Vec::new();
    /// Endian::Big.write(0x0102_0304u32, &mut out).unwrap();
    /// assert_eq!(out, [1, 2, 3, 4]);
    /// ```
    pub fn write<T: Primitive, W: Write + ?Sized>(self, value: T, sink: &mut W) -> Result<()> {
        write_all(T::KIND, sink, codec::to_bytes(self, value).as_ref())
    }

    /// Read exactly `T::WIDTH` bytes from `source` and decode them.
    ///
    /// ```
    /// use endiancast::{CodecError, Endian};
    ///
    /// let mut src: &[u8] = &[0x34, 0x12, 0xFF];
    /// assert_eq!(Endian::Little.read::<u16, _>(&mut src).unwrap(), 0x1234);
    ///
    /// let err = Endian::Little.read::<u16, _>(&mut src).unwrap_err();
    /// assert!(matches!(err, CodecError::UnexpectedEndOfStream { needed: 2, read: 1, .. }));
    /// ```
    pub fn read<T: Primitive, R: Read + ?Sized>(self, source: &mut R) -> Result<T> {
        let mut bytes = T::Bytes::default();
        read_full(T::KIND, source, bytes.as_mut())?;
        Ok(codec::from_bytes(self, bytes))
    }

    /// Write a runtime-tagged value to `sink`.
    pub fn write_value<W: Write + ?Sized>(self, value: Value, sink: &mut W) -> Result<()> {
        with_value!(value, v => self.write(v, sink))
    }

    /// Read a value of `kind` from `source`.
    pub fn read_value<R: Read + ?Sized>(self, kind: NumericKind, source: &mut R) -> Result<Value> {
        with_kind!(kind, T => self.read::<T, R>(source).map(Value::from))
    }
}

fn write_all<W: Write + ?Sized>(kind: NumericKind, sink: &mut W, bytes: &[u8]) -> Result<()> {
    sink.write_all(bytes)
        .inspect_err(|_e| trace_failure!(%kind, error = %_e, "stream write failed"))
        .context(IoSnafu { kind })
}

/// Fill `buf` completely, retrying interrupted reads.
fn read_full<R: Read + ?Sized>(kind: NumericKind, source: &mut R, buf: &mut [u8]) -> Result<()> {
    let needed = buf.len();
    let mut read = 0;
    while read < needed {
        match source.read(&mut buf[read..]) {
            Ok(0) => {
                trace_failure!(%kind, needed, read, "stream ended mid-value");
                return UnexpectedEndOfStreamSnafu { kind, needed, read }.fail();
            }
            Ok(n) => read += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => {
                trace_failure!(%kind, error = %e, "stream read failed");
                return Err(e).context(IoSnafu { kind });
            }
        }
    }
    Ok(())
}

/// Numeric reads for any [`Read`].
///
/// ```
/// use endiancast::{BigEndian, LittleEndian, NumericKind, ReadNumericExt, Value};
///
/// let mut src: &[u8] = &[0x00, 0x00, 0x80, 0x3F, 0x12, 0x34];
/// let f: f32 = src.read_num::<_, LittleEndian>().unwrap();
/// assert_eq!(f, 1.0);
///
/// let v = src.read_value::<BigEndian>(NumericKind::Int16).unwrap();
/// assert_eq!(v, Value::Int16(0x1234));
/// ```
pub trait ReadNumericExt: Read {
    /// Read one `T` in order `O`.
    #[inline]
    fn read_num<T: Primitive, O: ByteOrder>(&mut self) -> Result<T> {
        O::ENDIAN.read(self)
    }

    /// Read one value of `kind` in order `O`.
    #[inline]
    fn read_value<O: ByteOrder>(&mut self, kind: NumericKind) -> Result<Value> {
        O::ENDIAN.read_value(kind, self)
    }
}

impl<R: Read + ?Sized> ReadNumericExt for R {}

/// Numeric writes for any [`Write`].
///
/// ```
/// use endiancast::{NetworkEndian, Value, WriteNumericExt};
///
/// let mut out = Vec::new();
/// out.write_num::<u16, NetworkEndian>(0x0102).unwrap();
/// out.write_value::<NetworkEndian>(Value::UInt8(3)).unwrap();
/// assert_eq!(out, [1, 2, 3]);
/// ```
pub trait WriteNumericExt: Write {
    /// Write one `T` in order `O`.
    #[inline]
    fn write_num<T: Primitive, O: ByteOrder>(&mut self, value: T) -> Result<()> {
        O::ENDIAN.write(value, self)
    }

    /// Write a runtime-tagged value in order `O`.
    #[inline]
    fn write_value<O: ByteOrder>(&mut self, value: Value) -> Result<()> {
        O::ENDIAN.write_value(value, self)
    }
}

impl<W: Write + ?Sized> WriteNumericExt for W {}
