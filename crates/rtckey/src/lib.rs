//! Top-level facade crate for rtckey.
//!
//! Re-exports the core codec and the issuer so users can depend on a single crate.

pub mod core {
    pub use rtckey_core::*;
}

pub mod issuer {
    pub use rtckey_issuer::*;
}
