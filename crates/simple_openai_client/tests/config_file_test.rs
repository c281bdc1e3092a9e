//! Loading client configuration from TOML files.

use simple_openai_client::{ClientConfig, DEFAULT_BASE_URL, SimpleOpenAI};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_from_file_minimal() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, r#"api_key = "sk-from-file""#)?;

    let config = ClientConfig::from_file(file.path())?;
    assert_eq!(config.api_key(), "sk-from-file");
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), None);

    SimpleOpenAI::from_config(&config)?;
    Ok(())
}

#[test]
fn test_from_file_full() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"
api_key = "sk-from-file"
base_url = "http://localhost:8080/v1"
organization = "org_1"
project = "proj_1"
timeout_secs = 15
"#
    )?;

    let config = ClientConfig::from_file(file.path())?;
    assert_eq!(config.organization().as_deref(), Some("org_1"));
    assert_eq!(config.project().as_deref(), Some("proj_1"));
    assert_eq!(config.timeout(), Some(Duration::from_secs(15)));

    let openai = SimpleOpenAI::from_config(&config)?;
    assert_eq!(openai.dispatcher().base_url(), "http://localhost:8080/v1");
    Ok(())
}

#[test]
fn test_from_file_rejects_bad_input() -> anyhow::Result<()> {
    let missing = ClientConfig::from_file("/nonexistent/simple_openai.toml").unwrap_err();
    assert!(missing.is_config());

    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, r#"base_url = "https://api.openai.com/v1""#)?;
    let err = ClientConfig::from_file(file.path()).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("Failed to parse"));

    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, r#"api_key = "sk-test""#)?;
    writeln!(file, r#"base_url = "ftp://example.com""#)?;
    let err = ClientConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("http://"));
    Ok(())
}
