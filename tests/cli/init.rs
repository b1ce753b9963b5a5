use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;
    let out = run(&mut test.subcommand("init"))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Created"));
    assert!(out.stdout.contains(".mcpverserc.json"));

    let config: Value = serde_json::from_str(&test.read_file(".mcpverserc.json")?)?;
    assert_eq!(config["registry"], "./mcpverse.json");
    assert_eq!(config["output"], "./index.html");
    assert_eq!(config["title"], "MCPVerse");
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".mcpverserc.json", r#"{ "title": "Mine" }"#)?;

    let out = run(&mut test.subcommand("init"))?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains(".mcpverserc.json already exists"));
    assert_eq!(test.read_file(".mcpverserc.json")?, r#"{ "title": "Mine" }"#);
    Ok(())
}
