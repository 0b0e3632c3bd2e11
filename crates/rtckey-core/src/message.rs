//! Signed message assembly.
//!
//! The signed envelope is `u32 salt || u32 issued_at || map<u16, u32>`
//! privileges, authenticated with HMAC-SHA256 keyed by the app certificate.

use std::collections::BTreeMap;

use bytes::Bytes;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Result, TokenError};
use crate::wire;

type HmacSha256 = Hmac<Sha256>;

/// SHA-256 digest size; every signature is exactly this long.
pub const SIGNATURE_LEN: usize = 32;

/// Pack salt, issue time, and the privilege map into the byte buffer that
/// gets signed.
pub fn pack_message(
    salt: u32,
    issued_at: u32,
    privileges: &BTreeMap<u16, u32>,
) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(10 + privileges.len() * 6);
    wire::put_u32(&mut buf, salt);
    wire::put_u32(&mut buf, issued_at);
    wire::put_map_u32(&mut buf, privileges)?;
    Ok(buf)
}

/// Inverse of [`pack_message`], consuming exactly the bytes it produced.
pub fn unpack_message(buf: &mut Bytes) -> Result<(u32, u32, BTreeMap<u16, u32>)> {
    let salt = wire::get_u32(buf)?;
    let issued_at = wire::get_u32(buf)?;
    let privileges = wire::get_map_u32(buf)?;
    Ok((salt, issued_at, privileges))
}

/// HMAC-SHA256 over the packed message. Standard construction, full digest.
pub fn sign_message(certificate: &[u8], packed: &[u8]) -> Result<Vec<u8>> {
    let mut mac = new_mac(certificate)?;
    mac.update(packed);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Recompute the signature over `packed` and compare in constant time.
pub fn verify_message(certificate: &[u8], packed: &[u8], signature: &[u8]) -> Result<bool> {
    let mut mac = new_mac(certificate)?;
    mac.update(packed);
    Ok(mac.verify_slice(signature).is_ok())
}

fn new_mac(certificate: &[u8]) -> Result<HmacSha256> {
    HmacSha256::new_from_slice(certificate)
        .map_err(|_| TokenError::Configuration("hmac key setup failed".into()))
}
