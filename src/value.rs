//! Runtime-tagged values for callers that only know the kind at runtime.

use crate::error::Result;
use crate::{Endian, NumericKind, Primitive};

/// One numeric value of any supported kind.
///
/// Equality is bit-exact: two float values are equal iff their bit
/// patterns are, so a NaN equals itself and `0.0 != -0.0`.
#[derive(Debug, Clone, Copy)]
pub enum Value {
    /// `i8` value.
    Int8(i8),
    /// `u8` value.
    UInt8(u8),
    /// `i16` value.
    Int16(i16),
    /// `u16` value.
    UInt16(u16),
    /// `i32` value.
    Int32(i32),
    /// `u32` value.
    UInt32(u32),
    /// `i64` value.
    Int64(i64),
    /// `u64` value.
    UInt64(u64),
    /// `f32` value.
    Float32(f32),
    /// `f64` value.
    Float64(f64),
}

/// Apply `$body` to the payload of a [`Value`], bound as `$v`.
macro_rules! with_value {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            $crate::Value::Int8($v) => $body,
            $crate::Value::UInt8($v) => $body,
            $crate::Value::Int16($v) => $body,
            $crate::Value::UInt16($v) => $body,
            $crate::Value::Int32($v) => $body,
            $crate::Value::UInt32($v) => $body,
            $crate::Value::Int64($v) => $body,
            $crate::Value::UInt64($v) => $body,
            $crate::Value::Float32($v) => $body,
            $crate::Value::Float64($v) => $body,
        }
    };
}

/// Evaluate `$body` with `$ty` aliased to the Rust type of a [`NumericKind`].
macro_rules! with_kind {
    ($kind:expr, $ty:ident => $body:expr) => {
        match $kind {
            $crate::NumericKind::Int8 => {
                type $ty = i8;
                $body
            }
            $crate::NumericKind::UInt8 => {
                type $ty = u8;
                $body
            }
            $crate::NumericKind::Int16 => {
                type $ty = i16;
                $body
            }
            $crate::NumericKind::UInt16 => {
                type $ty = u16;
                $body
            }
            $crate::NumericKind::Int32 => {
                type $ty = i32;
                $body
            }
            $crate::NumericKind::UInt32 => {
                type $ty = u32;
                $body
            }
            $crate::NumericKind::Int64 => {
                type $ty = i64;
                $body
            }
            $crate::NumericKind::UInt64 => {
                type $ty = u64;
                $body
            }
            $crate::NumericKind::Float32 => {
                type $ty = f32;
                $body
            }
            $crate::NumericKind::Float64 => {
                type $ty = f64;
                $body
            }
        }
    };
}

pub(crate) use {with_kind, with_value};

impl Value {
    /// Kind of the held value.
    pub fn kind(&self) -> NumericKind {
        with_value!(*self, v => primitive_kind(v))
    }

    /// Encoded width in bytes.
    #[inline]
    pub fn width(&self) -> usize {
        self.kind().width()
    }

    /// Host memory-order bytes, zero padded to eight.
    fn native_bits(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        with_value!(*self, v => {
            let bytes = v.to_native_bytes();
            out[..bytes.as_ref().len()].copy_from_slice(bytes.as_ref());
        });
        out
    }
}

#[inline]
fn primitive_kind<T: Primitive>(_: T) -> NumericKind {
    T::KIND
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.native_bits() == other.native_bits()
    }
}

impl Eq for Value {}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )+
    };
}

impl_from_primitive!(
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
);

/// Encoded bytes of a [`Value`], exactly [`Value::width`] long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueBytes {
    buf: [u8; 8],
    len: usize,
}

impl ValueBytes {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf[..bytes.len()].copy_from_slice(bytes);
        Self {
            buf,
            len: bytes.len(),
        }
    }

    /// Encoded bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of encoded bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; every kind is at least one byte wide.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for ValueBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl core::ops::Deref for ValueBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Endian {
    /// Encode a runtime-tagged value into a fresh buffer.
    ///
    /// ```
    /// use endiancast::{Endian, Value};
    ///
    /// let bytes = Endian::Big.value_to_bytes(Value::UInt16(0xABCD));
    /// assert_eq!(bytes.as_slice(), &[0xAB, 0xCD]);
    /// ```
    pub fn value_to_bytes(self, value: Value) -> ValueBytes {
        with_value!(value, v => ValueBytes::new(self.to_bytes(v).as_ref()))
    }

    /// Encode a runtime-tagged value into `dst`, which must be exactly
    /// [`Value::width`] bytes.
    pub fn encode_value(self, value: Value, dst: &mut [u8]) -> Result<()> {
        with_value!(value, v => self.encode(v, dst))
    }

    /// Decode a value of `kind` from `src`, which must be exactly
    /// `kind.width()` bytes.
    pub fn decode_value(self, kind: NumericKind, src: &[u8]) -> Result<Value> {
        with_kind!(kind, T => self.decode::<T>(src).map(Value::from))
    }

    /// Resolve a raw kind tag, then decode as [`decode_value`](Self::decode_value).
    ///
    /// ```
    /// use endiancast::{CodecError, Endian, Value};
    ///
    /// let v = Endian::Little.decode_tagged(2, &[0x34, 0x12]).unwrap();
    /// assert_eq!(v, Value::Int16(0x1234));
    ///
    /// let err = Endian::Little.decode_tagged(42, &[0x00]).unwrap_err();
    /// assert!(matches!(err, CodecError::InvalidNumericKind { tag: 42 }));
    /// ```
    pub fn decode_tagged(self, tag: u8, src: &[u8]) -> Result<Value> {
        self.decode_value(NumericKind::from_tag(tag)?, src)
    }
}
