//! rtckey-mint: issue one signed channel token from the local issuer config.
//!
//! Usage: `rtckey-mint <channel> [uid] [role]` with role `publisher` (default)
//! or `subscriber`. The config path defaults to `rtckey.yaml` and can be
//! overridden with `RTCKEY_CONFIG`. The token goes to stdout; metadata is
//! logged via tracing.

use tracing_subscriber::{fmt, EnvFilter};

use rtckey_issuer::{config, Issuer, Role};

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let channel = match args.next() {
        Some(c) => c,
        None => {
            eprintln!("usage: rtckey-mint <channel> [uid] [role]");
            std::process::exit(2);
        }
    };
    let uid: u32 = match args.next() {
        None => 0,
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("uid must be a decimal integer");
                std::process::exit(2);
            }
        },
    };
    let role = match args.next().as_deref() {
        None | Some("publisher") => Role::Publisher,
        Some("subscriber") => Role::Subscriber,
        Some(other) => {
            eprintln!("unknown role: {other} (expected publisher or subscriber)");
            std::process::exit(2);
        }
    };

    let path = std::env::var("RTCKEY_CONFIG").unwrap_or_else(|_| "rtckey.yaml".into());
    let cfg = config::load_from_file(&path).expect("config load failed");
    let issuer = Issuer::from_config(&cfg).expect("issuer init failed");

    match issuer.issue(&channel, uid, role) {
        Ok(issued) => {
            tracing::info!(expires_at = issued.expires_at, "token minted");
            println!("{}", issued.token);
        }
        Err(e) => {
            eprintln!("token issue failed: {e}");
            std::process::exit(1);
        }
    }
}
