//! Role-based token issuing on top of the core codec.

use rtckey_core::error::Result;
use rtckey_core::token::{unix_now, Privilege, TokenBuilder};

use crate::config::IssuerConfig;

/// Caller role, mapped to the privilege set the token grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// May join and publish audio, video, and data.
    Publisher,
    /// May join only.
    Subscriber,
}

impl Role {
    /// Wire value used by request payloads.
    pub fn as_wire(self) -> u16 {
        match self {
            Role::Publisher => 1,
            Role::Subscriber => 2,
        }
    }

    /// Inverse of [`Role::as_wire`]; unknown values map to `None`.
    pub fn from_wire(v: u16) -> Option<Self> {
        match v {
            1 => Some(Role::Publisher),
            2 => Some(Role::Subscriber),
            _ => None,
        }
    }
}

/// A freshly issued token plus the expiry the caller should surface.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: u32,
}

/// Issues signed channel tokens under one application's credentials.
///
/// Stateless apart from the credentials; calls are independent and safe to
/// run concurrently.
#[derive(Debug, Clone)]
pub struct Issuer {
    app_id: String,
    certificate: String,
    token_ttl_secs: u32,
}

impl Issuer {
    pub fn new(
        app_id: impl Into<String>,
        certificate: impl Into<String>,
        token_ttl_secs: u32,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            certificate: certificate.into(),
            token_ttl_secs,
        }
    }

    pub fn from_config(cfg: &IssuerConfig) -> Result<Self> {
        Ok(Self {
            app_id: cfg.issuer.app_id.clone(),
            certificate: cfg.issuer.certificate()?,
            token_ttl_secs: cfg.issuer.token_ttl_secs,
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Issue a token for `channel`/`uid` expiring `token_ttl_secs` from now.
    pub fn issue(&self, channel: &str, uid: u32, role: Role) -> Result<IssuedToken> {
        let now = unix_now()?;
        let expires_at = now.saturating_add(self.token_ttl_secs);
        let token = self.build(channel, uid, role, expires_at, None, None)?;
        tracing::info!(channel, uid, role = ?role, expires_at, "issued channel token");
        Ok(IssuedToken { token, expires_at })
    }

    /// Deterministic variant: the caller controls issue time and salt.
    pub fn issue_at(
        &self,
        channel: &str,
        uid: u32,
        role: Role,
        issued_at: u32,
        expires_at: u32,
        salt: u32,
    ) -> Result<IssuedToken> {
        let token = self.build(channel, uid, role, expires_at, Some(issued_at), Some(salt))?;
        Ok(IssuedToken { token, expires_at })
    }

    fn build(
        &self,
        channel: &str,
        uid: u32,
        role: Role,
        expires_at: u32,
        issued_at: Option<u32>,
        salt: Option<u32>,
    ) -> Result<String> {
        let mut b = TokenBuilder::new(&self.app_id, channel, uid)
            .privilege(Privilege::JoinChannel, expires_at);
        if role == Role::Publisher {
            b = b
                .privilege(Privilege::PublishAudio, expires_at)
                .privilege(Privilege::PublishVideo, expires_at)
                .privilege(Privilege::PublishData, expires_at);
        }
        if let Some(ts) = issued_at {
            b = b.issued_at(ts);
        }
        if let Some(s) = salt {
            b = b.salt(s);
        }
        b.sign(&self.certificate)
    }
}
