//! rtckey issuer library entry.
//!
//! This crate wires credential configuration, role → privilege mapping, and
//! TTL policy around the core token codec. It is intended to be consumed by
//! the `rtckey-mint` binary and by embedding services.

pub mod config;
pub mod issuer;

pub use issuer::{IssuedToken, Issuer, Role};
