//! Tests for the buffer and fixed-point helpers the codec is built on.

use rstest::rstest;
use vmeta_core::shared::byte_reader::{ByteReader, OutOfBounds};
use vmeta_core::shared::byte_writer::ByteWriter;
use vmeta_core::shared::fixed_point::{from_fixed_i16, from_fixed_i32, to_fixed_i16, to_fixed_i32};

// ── Byte cursor ──────────────────────────────────────────────────────

#[test]
fn test_writer_then_reader_preserves_sequence() {
    let mut w = ByteWriter::default();
    w.put_u8(0xab);
    w.put_u16(0xbeef);
    w.put_u32(0xdead_beef);
    w.put_u64(u64::MAX - 1);
    let bytes = w.into_inner();
    assert_eq!(bytes.len(), 15);

    let mut r = ByteReader::new(&bytes);
    assert_eq!(r.read_u8().unwrap(), 0xab);
    assert_eq!(r.read_u16().unwrap(), 0xbeef);
    assert_eq!(r.read_u32().unwrap(), 0xdead_beef);
    assert_eq!(r.read_u64().unwrap(), u64::MAX - 1);
    assert!(r.is_empty());
}

#[test]
fn test_reader_on_empty_slice() {
    let mut r = ByteReader::new(&[]);
    assert_eq!(
        r.read_u8(),
        Err(OutOfBounds {
            offset: 0,
            needed: 1,
            available: 0
        })
    );
    assert_eq!(r.read_bytes(0).unwrap(), &[] as &[u8]);
}

#[test]
fn test_nested_take_stays_within_parent() {
    let data: Vec<u8> = (0..10).collect();
    let mut r = ByteReader::new(&data);
    r.read_bytes(2).unwrap();
    let mut inner = r.take(4).unwrap();
    assert_eq!(inner.read_bytes(4).unwrap(), &[2, 3, 4, 5]);
    assert!(inner.read_u8().is_err());
    assert_eq!(r.position(), 6);
    assert!(r.take(5).is_err());
    assert_eq!(r.remaining(), 4);
}

#[test]
fn test_floats_are_big_endian_ieee() {
    let mut w = ByteWriter::default();
    w.put_f32(1.0);
    w.put_f64(-2.0);
    assert_eq!(
        w.into_inner(),
        vec![0x3f, 0x80, 0, 0, 0xc0, 0, 0, 0, 0, 0, 0, 0]
    );
}

// ── Fixed point ──────────────────────────────────────────────────────

#[rstest]
#[case::zero(0.0, 0)]
#[case::one(1.0, 1 << 22)]
#[case::max_latitude(90.0, 90 << 22)]
#[case::min_longitude(-180.0, -180 << 22)]
fn test_q10_22_values(#[case] value: f64, #[case] raw: i32) {
    assert_eq!(to_fixed_i32(value, 22), Some(raw));
    assert_eq!(from_fixed_i32(raw, 22), value);
}

#[rstest]
#[case::pi(std::f64::consts::PI, 12868)]
#[case::negative_half(-0.5, -2048)]
fn test_q4_12_values(#[case] value: f64, #[case] raw: i16) {
    assert_eq!(to_fixed_i16(value, 12), Some(raw));
}

#[test]
fn test_fixed_point_extremes() {
    assert_eq!(from_fixed_i16(i16::MIN, 12), -8.0);
    assert_eq!(to_fixed_i16(-8.0, 12), Some(i16::MIN));
    assert_eq!(to_fixed_i32(-32768.0, 16), Some(i32::MIN));
    assert_eq!(to_fixed_i32(32768.0, 16), None);
}
