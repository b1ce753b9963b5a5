use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary directory holding a registry document.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    registry_path: PathBuf,
}

impl McpTestFixture {
    /// Create a fixture with the given registry document
    pub fn with_registry(registry: &Value) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let registry_path = temp_dir.path().canonicalize()?.join("mcpverse.json");
        let fixture = Self {
            _temp_dir: temp_dir,
            registry_path,
        };
        fixture.write_registry(registry)?;
        Ok(fixture)
    }

    /// Overwrite the registry document
    pub fn write_registry(&self, registry: &Value) -> Result<()> {
        let json_str = serde_json::to_string_pretty(registry)?;
        fs::write(&self.registry_path, json_str)
            .with_context(|| format!("Failed to write registry: {}", self.registry_path.display()))
    }

    /// Get the registry path as a string (for MCP parameters)
    pub fn registry(&self) -> String {
        self.registry_path.to_string_lossy().to_string()
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Registry with a mix of installable and informational entries
pub fn fixture_catalog() -> Result<McpTestFixture> {
    McpTestFixture::with_registry(&json!({
        "slack": {
            "name": "Slack",
            "category": "Communication",
            "official": true,
            "installation": {
                "command": "npx",
                "args": ["-y", "slack-mcp", "<SLACK_TOKEN>"],
                "variables": {
                    "SLACK_TOKEN": { "description": "Bot token", "secret": true }
                }
            }
        },
        "postgres": {
            "name": "Postgres",
            "category": "Database",
            "installation": {
                "command": "docker",
                "args": ["run", "-i", "--rm", "mcp/postgres", "<DATABASE_URL>", "<SCHEMA>"],
                "variables": {
                    "DATABASE_URL": { "description": "Connection string", "secret": true },
                    "SCHEMA": { "description": "Schema name", "placeholder": "public" }
                }
            }
        },
        "sqlite": {
            "name": "SQLite",
            "category": "database"
        },
        "notes": {
            "name": "Notes"
        }
    }))
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse the JSON text content of a successful tool result
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    // Check for errors using is_error field
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let text_content = result.content[0]
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}

/// Text of a tool-level error result
pub fn extract_tool_error_text(result: &rmcp::model::CallToolResult) -> String {
    assert_eq!(result.is_error, Some(true), "Expected tool error: {:?}", result);

    result.content[0]
        .as_text()
        .expect("Tool error content should be text")
        .text
        .clone()
}
