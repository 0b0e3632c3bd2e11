//! The "007" access token codec.
//!
//! Wire layout (all integers big-endian, strings u16-length-prefixed):
//!
//! ```text
//! token   = "007" || base64(payload)
//! payload = string(base64(signature)) || content
//! content = string(app_id) || string(channel) || string(decimal uid) || message
//! message = u32 salt || u32 issued_at || map<u16, u32> privileges
//! ```
//!
//! Encoding is deterministic once the salt and issue time are fixed; both
//! are injectable on the builder and default to a fresh random draw and the
//! wall clock.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use bytes::{Buf, Bytes};
use rand::Rng;

use crate::error::{Result, TokenError};
use crate::message;
use crate::wire;

/// Token format version tag. Hard format constant, emitted verbatim.
pub const VERSION: &str = "007";

/// Salt values are drawn uniformly below this bound.
const SALT_BOUND: u32 = 100_000_000;

/// Capabilities a token can grant, keyed into the privilege map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    JoinChannel,
    PublishAudio,
    PublishVideo,
    PublishData,
}

impl Privilege {
    /// Wire key of this privilege inside the signed map.
    pub fn key(self) -> u16 {
        match self {
            Privilege::JoinChannel => 1,
            Privilege::PublishAudio => 2,
            Privilege::PublishVideo => 3,
            Privilege::PublishData => 4,
        }
    }
}

/// Builder for a signed channel-access token.
///
/// The privilege map stays generic: the format allows arbitrary u16 keys and
/// an independent expiry per key, even though typical callers grant the four
/// [`Privilege`] kinds with a single expiry.
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    app_id: String,
    channel_name: String,
    uid: u32,
    privileges: BTreeMap<u16, u32>,
    issued_at: Option<u32>,
    salt: Option<u32>,
}

impl TokenBuilder {
    /// Start a token for `uid` joining `channel_name` under `app_id`.
    ///
    /// `uid == 0` is the valid "unassigned" sentinel; an empty channel name
    /// is legal and round-trips as the empty string.
    pub fn new(
        app_id: impl Into<String>,
        channel_name: impl Into<String>,
        uid: u32,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            channel_name: channel_name.into(),
            uid,
            privileges: BTreeMap::new(),
            issued_at: None,
            salt: None,
        }
    }

    /// Grant `privilege` until `expires_at` (unix seconds).
    pub fn privilege(mut self, privilege: Privilege, expires_at: u32) -> Self {
        self.privileges.insert(privilege.key(), expires_at);
        self
    }

    /// Grant a raw map entry. The wire format permits keys beyond the
    /// [`Privilege`] enum.
    pub fn privilege_key(mut self, key: u16, expires_at: u32) -> Self {
        self.privileges.insert(key, expires_at);
        self
    }

    /// Fix the issue timestamp instead of reading the wall clock.
    pub fn issued_at(mut self, issued_at: u32) -> Self {
        self.issued_at = Some(issued_at);
        self
    }

    /// Fix the salt instead of drawing a fresh random value.
    pub fn salt(mut self, salt: u32) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Sign and serialize the token.
    pub fn sign(self, certificate: &str) -> Result<String> {
        if self.app_id.is_empty() {
            return Err(TokenError::Configuration("app_id must not be empty".into()));
        }
        if certificate.is_empty() {
            return Err(TokenError::Configuration(
                "app certificate must not be empty".into(),
            ));
        }
        if self.privileges.is_empty() {
            return Err(TokenError::Configuration(
                "token must grant at least one privilege".into(),
            ));
        }

        let issued_at = match self.issued_at {
            Some(ts) => ts,
            None => unix_now()?,
        };
        let salt = self
            .salt
            .unwrap_or_else(|| rand::thread_rng().gen_range(0..SALT_BOUND));

        let packed = message::pack_message(salt, issued_at, &self.privileges)?;
        let signature = message::sign_message(certificate.as_bytes(), &packed)?;

        let mut content = Vec::with_capacity(
            6 + self.app_id.len() + self.channel_name.len() + 10 + packed.len(),
        );
        wire::put_string(&mut content, &self.app_id)?;
        wire::put_string(&mut content, &self.channel_name)?;
        wire::put_string(&mut content, &self.uid.to_string())?;
        content.extend_from_slice(&packed);

        let mut payload = Vec::with_capacity(2 + 44 + content.len());
        wire::put_string(&mut payload, &B64.encode(&signature))?;
        payload.extend_from_slice(&content);

        Ok(format!("{VERSION}{}", B64.encode(payload)))
    }
}

/// Every field of a token, recovered without judging its values.
///
/// Decoding proves nothing about authenticity; call [`DecodedToken::verify`]
/// with the shared certificate for that.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub app_id: String,
    pub channel_name: String,
    pub uid: u32,
    pub salt: u32,
    pub issued_at: u32,
    pub privileges: BTreeMap<u16, u32>,
    pub signature: Vec<u8>,
}

impl DecodedToken {
    /// Repack the decoded message fields, recompute HMAC with `certificate`,
    /// and compare against the embedded signature.
    pub fn verify(&self, certificate: &str) -> Result<bool> {
        let packed = message::pack_message(self.salt, self.issued_at, &self.privileges)?;
        message::verify_message(certificate.as_bytes(), &packed, &self.signature)
    }
}

/// Decode a token back into its full field set.
pub fn decode(token: &str) -> Result<DecodedToken> {
    let body = token
        .strip_prefix(VERSION)
        .ok_or(TokenError::UnsupportedVersion)?;
    let payload = B64
        .decode(body)
        .map_err(|_| TokenError::Malformed("payload is not valid base64".into()))?;
    let mut buf = Bytes::from(payload);

    let signature_b64 = wire::get_string(&mut buf)?;
    let signature = B64
        .decode(signature_b64.as_bytes())
        .map_err(|_| TokenError::Malformed("signature is not valid base64".into()))?;
    if signature.len() != message::SIGNATURE_LEN {
        return Err(TokenError::Malformed(format!(
            "signature must be {} bytes",
            message::SIGNATURE_LEN
        )));
    }

    let app_id = wire::get_string(&mut buf)?;
    let channel_name = wire::get_string(&mut buf)?;
    let uid = wire::get_string(&mut buf)?
        .parse::<u32>()
        .map_err(|_| TokenError::Malformed("uid is not a decimal integer".into()))?;

    let (salt, issued_at, privileges) = message::unpack_message(&mut buf)?;
    if buf.has_remaining() {
        return Err(TokenError::Malformed(
            "trailing bytes after privilege map".into(),
        ));
    }

    Ok(DecodedToken {
        app_id,
        channel_name,
        uid,
        salt,
        issued_at,
        privileges,
        signature,
    })
}

/// Seconds since the unix epoch, checked into u32.
pub fn unix_now() -> Result<u32> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TokenError::Configuration("system clock is before the unix epoch".into()))?
        .as_secs();
    u32::try_from(secs)
        .map_err(|_| TokenError::ValueOutOfRange("unix time exceeds u32 seconds".into()))
}
