use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());

    assert!(test.root().join(".compscanrc.json").exists());

    let content = test.read_file(".compscanrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed.get("sourceRoot").is_some());
    assert!(parsed.get("ignoreTestFiles").is_some());
    // 2-space indentation
    assert!(content.contains("  "));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".compscanrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("already exists"));

    Ok(())
}
