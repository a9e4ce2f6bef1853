use crate::{NumericKind, Primitive};

// One impl per integer width; zerocopy guarantees the transmute is a pure
// reinterpretation of the value's memory.
macro_rules! impl_primitive_for_int {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl Primitive for $ty {
                const KIND: NumericKind = NumericKind::$kind;

                type Bytes = [u8; core::mem::size_of::<$ty>()];

                #[inline]
                fn to_native_bytes(self) -> Self::Bytes {
                    zerocopy::transmute!(self)
                }

                #[inline]
                fn from_native_bytes(bytes: Self::Bytes) -> Self {
                    zerocopy::transmute!(bytes)
                }
            }
        )+
    };
}

impl_primitive_for_int!(
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
);
