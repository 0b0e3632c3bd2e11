//! Big-endian wire primitives (panic-free).
//!
//! Encoding rules:
//! - Fixed-width integers are big-endian; no padding, no alignment.
//! - Strings are u16-length-prefixed UTF-8 bytes.
//! - Maps are a u16 count followed by (u16 key, u32 value) pairs in
//!   ascending key order. The order is part of the wire format.
//!
//! Decoding rules:
//! - Never index (`buf[0]`) — always use `Buf` and `remaining()` checks.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.

use std::collections::BTreeMap;

use bytes::{Buf, BufMut, Bytes};

use crate::error::{Result, TokenError};

/// Emit exactly 2 bytes, most significant first.
pub fn put_u16(buf: &mut Vec<u8>, v: u16) {
    buf.put_u16(v);
}

/// Emit exactly 4 bytes, most significant first.
pub fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.put_u32(v);
}

/// Emit a u16 length prefix followed by the raw bytes.
pub fn put_bytes(buf: &mut Vec<u8>, b: &[u8]) -> Result<()> {
    let len = u16::try_from(b.len()).map_err(|_| {
        TokenError::ValueOutOfRange(format!(
            "{} bytes exceeds the u16 length prefix",
            b.len()
        ))
    })?;
    buf.put_u16(len);
    buf.put_slice(b);
    Ok(())
}

/// Emit a string as its u16-length-prefixed UTF-8 bytes.
pub fn put_string(buf: &mut Vec<u8>, s: &str) -> Result<()> {
    put_bytes(buf, s.as_bytes())
}

/// Emit a u16 entry count, then each (u16 key, u32 value) pair ascending by key.
pub fn put_map_u32(buf: &mut Vec<u8>, map: &BTreeMap<u16, u32>) -> Result<()> {
    let count = u16::try_from(map.len()).map_err(|_| {
        TokenError::ValueOutOfRange(format!(
            "{} map entries exceeds the u16 count prefix",
            map.len()
        ))
    })?;
    buf.put_u16(count);
    for (&key, &value) in map {
        buf.put_u16(key);
        buf.put_u32(value);
    }
    Ok(())
}

/// Read exactly 2 bytes, most significant first.
pub fn get_u16(buf: &mut Bytes) -> Result<u16> {
    if buf.remaining() < 2 {
        return Err(TokenError::Malformed("buffer too short for u16".into()));
    }
    Ok(buf.get_u16())
}

/// Read exactly 4 bytes, most significant first.
pub fn get_u32(buf: &mut Bytes) -> Result<u32> {
    if buf.remaining() < 4 {
        return Err(TokenError::Malformed("buffer too short for u32".into()));
    }
    Ok(buf.get_u32())
}

/// Read a u16 length prefix and that many bytes.
pub fn get_bytes(buf: &mut Bytes) -> Result<Bytes> {
    let len = get_u16(buf)? as usize;
    if buf.remaining() < len {
        return Err(TokenError::Malformed(
            "declared length overruns remaining buffer".into(),
        ));
    }
    Ok(buf.copy_to_bytes(len))
}

/// Read a u16-length-prefixed UTF-8 string.
pub fn get_string(buf: &mut Bytes) -> Result<String> {
    let raw = get_bytes(buf)?;
    String::from_utf8(raw.to_vec())
        .map_err(|_| TokenError::Malformed("string is not valid utf-8".into()))
}

/// Read a u16 entry count, then that many (u16 key, u32 value) pairs.
pub fn get_map_u32(buf: &mut Bytes) -> Result<BTreeMap<u16, u32>> {
    let count = get_u16(buf)?;
    let mut map = BTreeMap::new();
    for _ in 0..count {
        let key = get_u16(buf)?;
        let value = get_u32(buf)?;
        map.insert(key, value);
    }
    Ok(map)
}
