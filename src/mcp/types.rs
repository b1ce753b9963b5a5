use std::collections::{BTreeMap, HashMap};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::registry::{Entry, VariableSpec};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesParams {
    /// Path to the registry JSON file
    pub registry_path: String,
    /// Only return entries in this category (case-insensitive)
    #[serde(default)]
    pub category: Option<String>,
    /// Number of entries to skip (default 0)
    #[serde(default)]
    pub offset: Option<u32>,
    /// Maximum number of entries to return (default 50, max 100)
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetEntryParams {
    /// Path to the registry JSON file
    pub registry_path: String,
    /// Entry id, e.g. "slack"
    pub id: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveInstallationParams {
    /// Path to the registry JSON file
    pub registry_path: String,
    /// Entry id, e.g. "slack"
    pub id: String,
    /// Placeholder values keyed by variable name, e.g. {"SLACK_TOKEN": "xoxb-..."}
    #[serde(default)]
    pub values: HashMap<String, String>,
}

// ============================================================
// Results
// ============================================================

/// Result of list_entries operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesResult {
    pub total_count: usize,
    /// All categories in the registry, sorted
    pub categories: Vec<String>,
    pub items: Vec<EntrySummary>,
    pub pagination: Pagination,
}

/// Short form of an entry for listings
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub official: bool,
    pub has_installation: bool,
}

impl From<&Entry> for EntrySummary {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            category: entry.category.clone(),
            description: entry.description.clone(),
            official: entry.official,
            has_installation: entry.installation.is_some(),
        }
    }
}

/// Result of resolve_installation operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveInstallationResult {
    pub id: String,
    pub command: String,
    pub args: Vec<String>,
    pub variables: BTreeMap<String, VariableSpec>,
    /// Placeholders still waiting for a value
    pub unresolved: Vec<String>,
}

/// Result of build_command operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildCommandResult {
    pub id: String,
    pub command_line: String,
    /// Placeholders still waiting for a value
    pub unresolved: Vec<String>,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
