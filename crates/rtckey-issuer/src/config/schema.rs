use serde::Deserialize;

use rtckey_core::error::{Result, TokenError};

/// Environment variable consulted when `issuer.app_certificate` is absent
/// from the file, keeping the signing key out of config files.
pub const CERTIFICATE_ENV: &str = "RTCKEY_APP_CERTIFICATE";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssuerConfig {
    pub version: u32,

    pub issuer: IssuerSection,
}

impl IssuerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TokenError::UnsupportedVersion);
        }
        self.issuer.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssuerSection {
    /// Tenant application identifier embedded in every token.
    pub app_id: String,

    /// Signing key. Optional here; resolved from [`CERTIFICATE_ENV`] when
    /// omitted.
    #[serde(default)]
    pub app_certificate: Option<String>,

    /// Lifetime granted to every privilege, in seconds from issue time.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u32,
}

impl IssuerSection {
    pub fn validate(&self) -> Result<()> {
        if self.app_id.is_empty() {
            return Err(TokenError::Configuration(
                "issuer.app_id must not be empty".into(),
            ));
        }
        if let Some(cert) = &self.app_certificate {
            if cert.is_empty() {
                return Err(TokenError::Configuration(
                    "issuer.app_certificate must not be empty".into(),
                ));
            }
        }
        if !(60..=86400).contains(&self.token_ttl_secs) {
            return Err(TokenError::Configuration(
                "issuer.token_ttl_secs must be between 60 and 86400".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the signing key from the file or the environment.
    pub fn certificate(&self) -> Result<String> {
        if let Some(cert) = &self.app_certificate {
            return Ok(cert.clone());
        }
        match std::env::var(CERTIFICATE_ENV) {
            Ok(cert) if !cert.is_empty() => Ok(cert),
            _ => Err(TokenError::Configuration(format!(
                "issuer.app_certificate missing and {CERTIFICATE_ENV} not set"
            ))),
        }
    }
}

fn default_token_ttl_secs() -> u32 {
    3600
}
