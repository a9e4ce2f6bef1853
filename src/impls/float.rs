//! Floats ride on the equal-width signed integer impls.
//!
//! The float is transmuted to `i32`/`i64` and back; sign, exponent and
//! every NaN payload bit survive untouched.

use crate::{NumericKind, Primitive};

impl Primitive for f32 {
    const KIND: NumericKind = NumericKind::Float32;

    type Bytes = <i32 as Primitive>::Bytes;

    #[inline]
    fn to_native_bytes(self) -> Self::Bytes {
        let bits: i32 = zerocopy::transmute!(self);
        bits.to_native_bytes()
    }

    #[inline]
    fn from_native_bytes(bytes: Self::Bytes) -> Self {
        let bits = i32::from_native_bytes(bytes);
        zerocopy::transmute!(bits)
    }
}

impl Primitive for f64 {
    const KIND: NumericKind = NumericKind::Float64;

    type Bytes = <i64 as Primitive>::Bytes;

    #[inline]
    fn to_native_bytes(self) -> Self::Bytes {
        let bits: i64 = zerocopy::transmute!(self);
        bits.to_native_bytes()
    }

    #[inline]
    fn from_native_bytes(bytes: Self::Bytes) -> Self {
        let bits = i64::from_native_bytes(bytes);
        zerocopy::transmute!(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_matches_to_bits() {
        for v in [0.0f32, -0.0, 1.0, f32::MIN_POSITIVE, f32::INFINITY] {
            assert_eq!(v.to_native_bytes(), v.to_bits().to_ne_bytes());
        }
    }

    #[test]
    fn test_f64_nan_payload_survives() {
        let nan = f64::from_bits(0x7FF0_0000_0000_0001);
        let back = f64::from_native_bytes(nan.to_native_bytes());
        assert_eq!(back.to_bits(), 0x7FF0_0000_0000_0001);
    }

    #[test]
    fn test_f32_negative_nan_survives() {
        let nan = f32::from_bits(0xFFC0_1234);
        let back = f32::from_native_bytes(nan.to_native_bytes());
        assert_eq!(back.to_bits(), 0xFFC0_1234);
    }
}
