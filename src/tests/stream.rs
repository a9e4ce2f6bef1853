use std::io::{self, Cursor, ErrorKind, Read, Write};

use crate::{
    BigEndian, ByteOrder, CodecError, Endian, LittleEndian, NumericKind, ReadNumericExt, Value,
    WriteNumericExt,
};

/// Yields one byte per call, with an `Interrupted` before each.
struct Trickle<'a> {
    data: &'a [u8],
    interrupt: bool,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(ErrorKind::Interrupted.into());
        }
        match self.data.split_first() {
            Some((first, rest)) if !buf.is_empty() => {
                buf[0] = *first;
                self.data = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(ErrorKind::ConnectionReset, "reset"))
    }
}

impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_then_read() {
    let mut out = Vec::new();
    LittleEndian::write(0x1234i16, &mut out).unwrap();
    BigEndian::write(1.0f32, &mut out).unwrap();
    assert_eq!(out, [0x34, 0x12, 0x3F, 0x80, 0x00, 0x00]);

    let mut src = Cursor::new(out);
    assert_eq!(LittleEndian::read::<i16, _>(&mut src).unwrap(), 0x1234);
    assert_eq!(BigEndian::read::<f32, _>(&mut src).unwrap(), 1.0);
}

#[test]
fn test_short_stream() {
    let mut src: &[u8] = &[1, 2, 3];
    let err = Endian::Big.read::<u64, _>(&mut src).unwrap_err();
    assert!(matches!(
        err,
        CodecError::UnexpectedEndOfStream {
            kind: NumericKind::UInt64,
            needed: 8,
            read: 3,
        }
    ));
}

#[test]
fn test_empty_stream() {
    let mut src: &[u8] = &[];
    let err = Endian::Little.read::<u8, _>(&mut src).unwrap_err();
    assert!(matches!(
        err,
        CodecError::UnexpectedEndOfStream { needed: 1, read: 0, .. }
    ));
}

#[test]
fn test_trickling_stream_is_reassembled() {
    let mut src = Trickle {
        data: &[0x01, 0x02, 0x03, 0x04],
        interrupt: false,
    };
    assert_eq!(Endian::Big.read::<u32, _>(&mut src).unwrap(), 0x0102_0304);
}

#[test]
fn test_read_error_propagates() {
    let err = Endian::Little.read::<i32, _>(&mut Broken).unwrap_err();
    match err {
        CodecError::Io { kind, source } => {
            assert_eq!(kind, NumericKind::Int32);
            assert_eq!(source.kind(), ErrorKind::ConnectionReset);
        }
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_write_error_propagates() {
    let err = Endian::Big.write(9u16, &mut Broken).unwrap_err();
    assert!(matches!(err, CodecError::Io { kind: NumericKind::UInt16, .. }));
}

#[test]
fn test_write_zero_is_io_error() {
    let mut buf = [0u8; 3];
    let mut sink: &mut [u8] = &mut buf;
    let err = Endian::Big.write(9u32, &mut sink).unwrap_err();
    match err {
        CodecError::Io { source, .. } => assert_eq!(source.kind(), ErrorKind::WriteZero),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_stream_matches_buffer() {
    for order in [Endian::Little, Endian::Big] {
        let buf = order.to_bytes(-0.15625f64);
        let mut src: &[u8] = buf.as_ref();
        let from_stream: f64 = order.read(&mut src).unwrap();
        let from_buffer: f64 = order.decode(&buf).unwrap();
        assert_eq!(from_stream.to_bits(), from_buffer.to_bits());
        assert!(src.is_empty());
    }
}

#[test]
fn test_values_over_stream() {
    let values = [
        Value::UInt8(1),
        Value::Int16(-2),
        Value::Float32(f32::from_bits(0xFFC0_0001)),
        Value::UInt64(u64::MAX - 1),
    ];

    let mut out = Vec::new();
    for value in values {
        Endian::NETWORK.write_value(value, &mut out).unwrap();
    }
    assert_eq!(out.len(), 1 + 2 + 4 + 8);

    let mut src = out.as_slice();
    for value in values {
        assert_eq!(Endian::NETWORK.read_value(value.kind(), &mut src).unwrap(), value);
    }
}

#[test]
fn test_extension_traits() {
    let mut out = Vec::new();
    out.write_num::<u32, BigEndian>(0xCAFE_BABE).unwrap();
    out.write_value::<LittleEndian>(Value::Int16(0x0102)).unwrap();
    assert_eq!(out, [0xCA, 0xFE, 0xBA, 0xBE, 0x02, 0x01]);

    let mut src = out.as_slice();
    assert_eq!(src.read_num::<u32, BigEndian>().unwrap(), 0xCAFE_BABE);
    assert_eq!(
        src.read_value::<LittleEndian>(NumericKind::Int16).unwrap(),
        Value::Int16(0x0102)
    );
    assert!(src.read_num::<u8, BigEndian>().is_err());
}
