//! Fixed-width numeric traits.

use crate::NumericKind;

/// A fixed-width numeric type the codec can move to and from bytes.
///
/// Sealed: implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64`,
/// `u64`, `f32` and `f64` only.
///
/// # Example
///
/// ```
/// use endiancast::{NumericKind, Primitive};
///
/// assert_eq!(<u16 as Primitive>::KIND, NumericKind::UInt16);
/// assert_eq!(<f64 as Primitive>::WIDTH, 8);
/// ```
pub trait Primitive: Copy + sealed::Sealed {
    /// Runtime tag for this type.
    const KIND: NumericKind;

    /// Encoded width in bytes.
    const WIDTH: usize = Self::KIND.width();

    /// Byte array of exactly `WIDTH` bytes.
    type Bytes: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    /// The value's bytes in host memory order.
    ///
    /// A reinterpretation of the bits, never a numeric conversion.
    fn to_native_bytes(self) -> Self::Bytes;

    /// Reinterpret bytes in host memory order as a value.
    fn from_native_bytes(bytes: Self::Bytes) -> Self;
}

pub(crate) mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for i8 {}
    impl Sealed for u16 {}
    impl Sealed for i16 {}
    impl Sealed for u32 {}
    impl Sealed for i32 {}
    impl Sealed for u64 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
