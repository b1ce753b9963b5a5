use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_show_entry() -> Result<()> {
    let test = CliTest::with_registry()?;
    let out = run(test.subcommand("show").arg("slack"))?;

    assert_eq!(out.code, Some(0));
    assert_snapshot!(out.stdout, @r#"
    Slack (slack)
      Category:    Communication
      Official:    yes
      Description: Read and post Slack messages
      README:      https://example.com/slack
      Install:     npx -y slack-mcp "<SLACK_TOKEN>"
      Variables:
        SLACK_TOKEN  Bot token (e.g., xoxb-...) [secret]
    "#);
    Ok(())
}

#[test]
fn test_show_entry_without_installation() -> Result<()> {
    let test = CliTest::with_registry()?;
    let out = run(test.subcommand("show").arg("weather"))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Install:     no installation information"));
    Ok(())
}

#[test]
fn test_show_json() -> Result<()> {
    let test = CliTest::with_registry()?;
    let out = run(test.subcommand("show").args(["filesystem", "--json"]))?;

    assert_eq!(out.code, Some(0));
    let entry: Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(entry["id"], "filesystem");
    assert_eq!(entry["official"], false);
    assert_eq!(entry["installation"]["args"][2], "<ROOT_DIR>");
    Ok(())
}

#[test]
fn test_show_unknown_id() -> Result<()> {
    let test = CliTest::with_registry()?;
    let out = run(test.subcommand("show").arg("github"))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(out.stderr, "\u{2718} No MCP found with id \"github\"\n");
    Ok(())
}
