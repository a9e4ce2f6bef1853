//! Width-generic byte shuffling shared by both byte orders.
//!
//! A value is taken in host memory order, reversed as a whole when the
//! requested order is not the host's, and copied out. Decoding mirrors it.
//! No shifting or masking: bytes are only ever moved.

use crate::error::{BufferSizeMismatchSnafu, Result};
use crate::log::trace_failure;
use crate::{Endian, NumericKind, Primitive};

/// Reverse `bytes` in place unless `order` is the host order.
#[inline]
pub(crate) fn arrange<T: Primitive>(order: Endian, mut bytes: T::Bytes) -> T::Bytes {
    if T::WIDTH > 1 && !order.is_native() {
        bytes.as_mut().reverse();
    }
    bytes
}

#[inline]
pub(crate) fn to_bytes<T: Primitive>(order: Endian, value: T) -> T::Bytes {
    arrange::<T>(order, value.to_native_bytes())
}

#[inline]
pub(crate) fn from_bytes<T: Primitive>(order: Endian, bytes: T::Bytes) -> T {
    T::from_native_bytes(arrange::<T>(order, bytes))
}

pub(crate) fn check_len(kind: NumericKind, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    trace_failure!(%kind, expected, actual, "buffer size mismatch");
    BufferSizeMismatchSnafu {
        kind,
        expected,
        actual,
    }
    .fail()
}

pub(crate) fn encode<T: Primitive>(order: Endian, value: T, dst: &mut [u8]) -> Result<()> {
    check_len(T::KIND, T::WIDTH, dst.len())?;
    dst.copy_from_slice(to_bytes(order, value).as_ref());
    Ok(())
}

pub(crate) fn decode<T: Primitive>(order: Endian, src: &[u8]) -> Result<T> {
    check_len(T::KIND, T::WIDTH, src.len())?;
    let mut bytes = T::Bytes::default();
    bytes.as_mut().copy_from_slice(src);
    Ok(from_bytes(order, bytes))
}

pub(crate) fn encode_slice<T: Primitive>(order: Endian, values: &[T], dst: &mut [u8]) -> Result<()> {
    check_len(T::KIND, values.len() * T::WIDTH, dst.len())?;
    for (value, chunk) in values.iter().zip(dst.chunks_exact_mut(T::WIDTH)) {
        chunk.copy_from_slice(to_bytes(order, *value).as_ref());
    }
    Ok(())
}

pub(crate) fn decode_slice<T: Primitive>(order: Endian, src: &[u8], out: &mut [T]) -> Result<()> {
    check_len(T::KIND, out.len() * T::WIDTH, src.len())?;
    for (slot, chunk) in out.iter_mut().zip(src.chunks_exact(T::WIDTH)) {
        let mut bytes = T::Bytes::default();
        bytes.as_mut().copy_from_slice(chunk);
        *slot = from_bytes(order, bytes);
    }
    Ok(())
}
