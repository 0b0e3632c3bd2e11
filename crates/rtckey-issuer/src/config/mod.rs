//! Issuer config loader (strict parsing).

pub mod schema;

use std::fs;

use rtckey_core::error::{Result, TokenError};

pub use schema::{IssuerConfig, IssuerSection, CERTIFICATE_ENV};

pub fn load_from_file(path: &str) -> Result<IssuerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TokenError::Configuration(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<IssuerConfig> {
    let cfg: IssuerConfig = serde_yaml::from_str(s)
        .map_err(|e| TokenError::Configuration(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
