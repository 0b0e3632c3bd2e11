#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rtckey_issuer::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
issuer:
  app_id: "app1"
  app_certificat: "typo-should-fail"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIGURATION");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
issuer:
  app_id: "app1"
  app_certificate: "cert1"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.issuer.app_id, "app1");
    assert_eq!(cfg.issuer.token_ttl_secs, 3600);
}

#[test]
fn unknown_version_is_rejected() {
    let bad = r#"
version: 2
issuer:
  app_id: "app1"
  app_certificate: "cert1"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn empty_app_id_is_rejected() {
    let bad = r#"
version: 1
issuer:
  app_id: ""
  app_certificate: "cert1"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIGURATION");
}

#[test]
fn ttl_bounds_are_enforced() {
    let bad = r#"
version: 1
issuer:
  app_id: "app1"
  app_certificate: "cert1"
  token_ttl_secs: 30
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIGURATION");

    let ok = r#"
version: 1
issuer:
  app_id: "app1"
  app_certificate: "cert1"
  token_ttl_secs: 86400
"#;
    assert_eq!(config::load_from_str(ok).unwrap().issuer.token_ttl_secs, 86400);
}

#[test]
fn certificate_resolves_from_file_or_environment() {
    let with_cert = config::load_from_str(
        r#"
version: 1
issuer:
  app_id: "app1"
  app_certificate: "cert1"
"#,
    )
    .unwrap();
    assert_eq!(with_cert.issuer.certificate().unwrap(), "cert1");

    let without_cert = config::load_from_str(
        r#"
version: 1
issuer:
  app_id: "app1"
"#,
    )
    .unwrap();

    // Both branches in one test: env mutation is process-wide.
    std::env::remove_var(config::CERTIFICATE_ENV);
    let err = without_cert.issuer.certificate().expect_err("no cert anywhere");
    assert_eq!(err.code().as_str(), "CONFIGURATION");

    std::env::set_var(config::CERTIFICATE_ENV, "env-cert");
    assert_eq!(without_cert.issuer.certificate().unwrap(), "env-cert");
    std::env::remove_var(config::CERTIFICATE_ENV);
}
