use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_list_table() -> Result<()> {
    let test = CliTest::with_registry()?;
    let out = run(&mut test.subcommand("list"))?;

    assert_eq!(out.code, Some(0));
    assert_snapshot!(out.stdout, @r"
    slack       Slack       Communication  ✓ official
    filesystem  filesystem  Files
    weather     Weather     Data

    3 entries
    ");
    Ok(())
}

#[test]
fn test_list_json_keeps_document_order() -> Result<()> {
    let test = CliTest::with_registry()?;
    let out = run(test.subcommand("list").arg("--json"))?;

    assert_eq!(out.code, Some(0));
    let entries: Value = serde_json::from_str(&out.stdout)?;
    let ids: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["slack", "filesystem", "weather"]);
    assert_eq!(entries[0]["readmeUrl"], "https://example.com/slack");
    Ok(())
}

#[test]
fn test_list_category_filter() -> Result<()> {
    let test = CliTest::with_registry()?;
    let out = run(test.subcommand("list").args(["--category", "files"]))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.starts_with("filesystem"));
    assert!(out.stdout.contains("1 entry"));
    assert!(!out.stdout.contains("slack"));
    Ok(())
}

#[test]
fn test_list_registry_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data/other.json", r#"{ "only": { "name": "Only" } }"#)?;

    let out = run(test.subcommand("list").args(["--registry", "data/other.json"]))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.starts_with("only  Only\n"));
    Ok(())
}

#[test]
fn test_list_registry_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".mcpverserc.json", r#"{ "registry": "registry/servers.json" }"#)?;
    test.write_file("registry/servers.json", r#"{ "cfg": { "name": "Configured" } }"#)?;
    test.write_file("sub/dir/.keep", "")?;

    let out = run(test
        .subcommand("list")
        .current_dir(test.root().join("sub/dir")))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.starts_with("cfg  Configured\n"));
    Ok(())
}

#[test]
fn test_list_empty_registry() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("mcpverse.json", "{}")?;

    let out = run(&mut test.subcommand("list"))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "No MCPs found in the registry.\n");
    Ok(())
}

#[test]
fn test_list_missing_registry() -> Result<()> {
    let test = CliTest::new()?;
    let out = run(&mut test.subcommand("list"))?;

    assert_eq!(out.code, Some(2));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.contains("Error: Failed to read MCP registry"));
    assert!(out.stderr.contains("mcpverse.json"));
    Ok(())
}

#[test]
fn test_list_invalid_registry() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("mcpverse.json", "{ \"slack\": ")?;

    let out = run(&mut test.subcommand("list"))?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Error: Failed to parse MCP registry"));
    Ok(())
}
