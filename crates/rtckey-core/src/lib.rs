//! rtckey core: the "007" channel-access token codec and its error surface.
//!
//! This crate defines the wire-level token format shared by the issuer,
//! validating peers, and tooling. It intentionally carries no transport or
//! runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TokenError`/`Result` so issuing
//! processes do not crash on malformed input or bad credentials.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod message;
pub mod token;
pub mod wire;

/// Shared result type.
pub use error::{Result, TokenError};
pub use token::{decode, DecodedToken, Privilege, TokenBuilder, VERSION};
