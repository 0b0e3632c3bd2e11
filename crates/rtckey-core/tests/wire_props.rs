//! Wire primitive properties: byte-exactness, length bounds, map ordering.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeMap;

use bytes::Bytes;

use rtckey_core::wire;

#[test]
fn integers_are_big_endian() {
    let mut buf = Vec::new();
    wire::put_u16(&mut buf, 0x1234);
    wire::put_u32(&mut buf, 0xdead_beef);
    assert_eq!(buf, [0x12, 0x34, 0xde, 0xad, 0xbe, 0xef]);

    let mut rd = Bytes::from(buf);
    assert_eq!(wire::get_u16(&mut rd).unwrap(), 0x1234);
    assert_eq!(wire::get_u32(&mut rd).unwrap(), 0xdead_beef);
}

#[test]
fn string_is_length_prefixed_utf8() {
    let mut buf = Vec::new();
    wire::put_string(&mut buf, "room42").unwrap();
    assert_eq!(buf, [0, 6, b'r', b'o', b'o', b'm', b'4', b'2']);

    let mut rd = Bytes::from(buf);
    assert_eq!(wire::get_string(&mut rd).unwrap(), "room42");
}

#[test]
fn empty_string_roundtrips() {
    let mut buf = Vec::new();
    wire::put_string(&mut buf, "").unwrap();
    assert_eq!(buf, [0, 0]);

    let mut rd = Bytes::from(buf);
    assert_eq!(wire::get_string(&mut rd).unwrap(), "");
}

#[test]
fn string_length_bounds() {
    let max = "a".repeat(65535);
    let mut buf = Vec::new();
    wire::put_string(&mut buf, &max).unwrap();
    assert_eq!(buf.len(), 2 + 65535);

    let over = "a".repeat(65536);
    let err = wire::put_string(&mut Vec::new(), &over).expect_err("must fail");
    assert_eq!(err.code().as_str(), "VALUE_OUT_OF_RANGE");
}

#[test]
fn map_encodes_in_ascending_key_order() {
    let orders: [&[u16]; 3] = [&[1, 2, 3, 4], &[4, 3, 2, 1], &[3, 1, 4, 2]];

    let mut encodings = Vec::new();
    for keys in orders {
        let mut map = BTreeMap::new();
        for &k in keys {
            map.insert(k, 1_700_000_000);
        }
        let mut buf = Vec::new();
        wire::put_map_u32(&mut buf, &map).unwrap();
        encodings.push(buf);
    }

    assert_eq!(encodings[0], encodings[1]);
    assert_eq!(encodings[0], encodings[2]);

    // count, then (key, value) pairs with keys ascending
    let buf = &encodings[0];
    assert_eq!(&buf[0..2], [0, 4]);
    assert_eq!(&buf[2..4], [0, 1]);
    assert_eq!(&buf[8..10], [0, 2]);
    assert_eq!(&buf[14..16], [0, 3]);
    assert_eq!(&buf[20..22], [0, 4]);
}

#[test]
fn map_roundtrips_with_distinct_values() {
    let mut map = BTreeMap::new();
    map.insert(1u16, 1_700_000_000u32);
    map.insert(2, 1_700_003_600);
    map.insert(700, 42);

    let mut buf = Vec::new();
    wire::put_map_u32(&mut buf, &map).unwrap();

    let mut rd = Bytes::from(buf);
    assert_eq!(wire::get_map_u32(&mut rd).unwrap(), map);
}

#[test]
fn truncated_buffers_are_malformed() {
    // u16 needs 2 bytes
    let mut rd = Bytes::from_static(&[0x12]);
    assert_eq!(wire::get_u16(&mut rd).expect_err("short u16").code().as_str(), "MALFORMED");

    // u32 needs 4 bytes
    let mut rd = Bytes::from_static(&[0, 0, 0]);
    assert_eq!(wire::get_u32(&mut rd).expect_err("short u32").code().as_str(), "MALFORMED");

    // declared string length overruns the remaining buffer
    let mut rd = Bytes::from_static(&[0, 5, b'a', b'b']);
    assert_eq!(
        wire::get_string(&mut rd).expect_err("overrun string").code().as_str(),
        "MALFORMED"
    );

    // map entry cut mid value
    let mut rd = Bytes::from_static(&[0, 1, 0, 1, 0, 0, 0]);
    assert_eq!(
        wire::get_map_u32(&mut rd).expect_err("short map").code().as_str(),
        "MALFORMED"
    );
}

#[test]
fn decoder_consumes_exactly_the_bytes_produced() {
    let mut buf = Vec::new();
    wire::put_string(&mut buf, "app").unwrap();
    let mut map = BTreeMap::new();
    map.insert(1u16, 99u32);
    wire::put_map_u32(&mut buf, &map).unwrap();
    wire::put_u32(&mut buf, 7);

    let mut rd = Bytes::from(buf);
    assert_eq!(wire::get_string(&mut rd).unwrap(), "app");
    assert_eq!(wire::get_map_u32(&mut rd).unwrap(), map);
    assert_eq!(wire::get_u32(&mut rd).unwrap(), 7);
    assert!(rd.is_empty());
}
