//! Fixed-width numeric encoding with an explicit byte order.
//!
//! Moves `i8`..`u64`, `f32` and `f64` between their in-memory bit pattern
//! and exactly `width` bytes in little or big endian order. Values are never
//! reconstructed arithmetically: the host-order bytes are reinterpreted and,
//! when the requested order differs from the host's, reversed as a whole.
//! Floats travel as the equal-width signed integer, so every NaN payload
//! survives a round trip.
//!
//! # Compile-time order
//!
//! ```
//! use endiancast::{BigEndian, ByteOrder, LittleEndian};
//!
//! assert_eq!(LittleEndian::to_bytes(0x1234i16), [0x34, 0x12]);
//! assert_eq!(BigEndian::to_bytes(0x1234i16), [0x12, 0x34]);
//!
//! let v: i16 = LittleEndian::decode(&[0x34, 0x12]).unwrap();
//! assert_eq!(v, 0x1234);
//! ```
//!
//! # Runtime order and kind
//!
//! ```
//! use endiancast::{Endian, NumericKind, Value};
//!
//! let order = Endian::Little;
//! let mut buf = [0u8; 4];
//! order.encode_value(Value::Float32(1.0), &mut buf).unwrap();
//! assert_eq!(buf, [0x00, 0x00, 0x80, 0x3F]);
//!
//! let v = order.decode_value(NumericKind::Float32, &buf).unwrap();
//! assert_eq!(v, Value::Float32(1.0));
//! ```
//!
//! # Features
//!
//! - `std` (default): stream operations over `std::io::{Read, Write}`.
//! - `tracing`: `trace`-level events on every failure.
//! - `serde`: `Serialize`/`Deserialize` for [`NumericKind`] and [`Endian`].

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

mod codec;
mod error;
mod impls;
mod kind;
mod log;
mod order;
mod traits;
mod value;

#[cfg(feature = "std")]
mod io;

pub use error::{CodecError, IoError, Result};
pub use kind::NumericKind;
pub use order::{BigEndian, ByteOrder, Endian, LittleEndian, NetworkEndian, SystemEndian};
pub use traits::Primitive;
pub use value::{Value, ValueBytes};

#[cfg(feature = "std")]
pub use io::{ReadNumericExt, WriteNumericExt};

#[cfg(test)]
mod tests;
