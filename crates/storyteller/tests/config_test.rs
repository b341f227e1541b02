//! Tests for configuration loading and precedence.

use std::io::Write;
use std::time::Duration;
use storyteller::AppConfig;

fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn toml_file(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_defaults() -> anyhow::Result<()> {
    let config = AppConfig::load_from(None, vars(&[]))?;

    assert_eq!(config.server.socket_addr(), "0.0.0.0:4000");
    assert!(config.server.cors_allow_any_origin);
    assert_eq!(config.upstream.model, "gpt2");
    assert_eq!(
        config.upstream.base_url,
        "https://api-inference.huggingface.co/models"
    );
    assert_eq!(config.upstream.max_length, 100);
    assert_eq!(config.upstream.timeout_secs, 30);
    assert_eq!(config.upstream.api_key, None);
    assert_eq!(config.database.pool_size, 10);
    assert_eq!(config.database.connect_timeout_secs, 30);
    assert_eq!(config.database.url, None);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    Ok(())
}

#[test]
fn test_conventional_variables() -> anyhow::Result<()> {
    let config = AppConfig::load_from(
        None,
        vars(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/stories"),
            ("HF_API_KEY", "hf_abc"),
        ]),
    )?;

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.database_url()?, "postgres://localhost/stories");

    let hf = config.huggingface()?;
    assert_eq!(hf.api_key(), "hf_abc");
    assert_eq!(hf.endpoint(), "https://api-inference.huggingface.co/models/gpt2");
    assert_eq!(*hf.timeout(), Duration::from_secs(30));
    Ok(())
}

#[test]
fn test_missing_credentials_are_errors() -> anyhow::Result<()> {
    let config = AppConfig::load_from(None, vars(&[("HF_API_KEY", "  ")]))?;

    let err = config.huggingface().unwrap_err();
    assert!(err.message.contains("HF_API_KEY"));
    let err = config.database_url().unwrap_err();
    assert!(err.message.contains("DATABASE_URL"));
    Ok(())
}

#[test]
fn test_file_then_prefixed_env_then_conventional() -> anyhow::Result<()> {
    let file = toml_file(
        r#"
[server]
port = 5000
bind = "127.0.0.1"

[upstream]
model = "distilgpt2"
timeout_secs = 10

[logging]
json = true
"#,
    )?;

    let config = AppConfig::load_from(
        Some(file.path()),
        vars(&[
            ("STORYTELLER_UPSTREAM__TIMEOUT_SECS", "5"),
            ("STORYTELLER_SERVER__PORT", "6000"),
            ("PORT", "7000"),
        ]),
    )?;

    assert_eq!(config.server.bind, "127.0.0.1");
    assert_eq!(config.server.port, 7000);
    assert_eq!(config.upstream.model, "distilgpt2");
    assert_eq!(config.upstream.timeout_secs, 5);
    assert_eq!(config.upstream.max_length, 100);
    assert!(config.logging.json);
    Ok(())
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = AppConfig::load_from(Some(&missing), vars(&[])).unwrap_err();

    assert!(err.message.contains("Failed to build configuration"));
}

#[test]
fn test_bad_port_is_error() {
    let err = AppConfig::load_from(None, vars(&[("PORT", "not-a-port")])).unwrap_err();
    assert!(err.message.contains("configuration"));
}

#[test]
fn test_debug_redacts_secrets() -> anyhow::Result<()> {
    let config = AppConfig::load_from(
        None,
        vars(&[
            ("HF_API_KEY", "hf_super_secret"),
            ("DATABASE_URL", "postgres://user:hunter2@db/stories"),
        ]),
    )?;

    let debug = format!("{:?}", config);
    assert!(!debug.contains("hf_super_secret"));
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("<redacted>"));
    Ok(())
}
