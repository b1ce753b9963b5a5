use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::debug;

use crate::registry::{Registry, RegistryCache};

use super::types::{
    BuildCommandResult, EntrySummary, GetEntryParams, ListEntriesParams, ListEntriesResult,
    Pagination, ResolveInstallationParams, ResolveInstallationResult,
};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct McpverseServer {
    tool_router: ToolRouter<Self>,
    /// One cache per registry path, shared across tool calls.
    caches: Arc<Mutex<HashMap<PathBuf, Arc<RegistryCache>>>>,
}

impl Default for McpverseServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl McpverseServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            caches: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// List registry entries
    #[tool(
        description = "List MCP servers in the registry, optionally filtered by category. Returns a paginated list of short entries plus all known categories."
    )]
    pub async fn list_entries(
        &self,
        params: Parameters<ListEntriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let cache = self.registry_cache(&params.registry_path)?;
        let registry = load(&cache)?;

        let all_items: Vec<EntrySummary> = registry
            .iter()
            .filter(|entry| match &params.category {
                Some(category) => entry
                    .category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category)),
                None => true,
            })
            .map(EntrySummary::from)
            .collect();

        let total_count = all_items.len();

        // Apply pagination
        let items: Vec<EntrySummary> = all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        json_result(&ListEntriesResult {
            total_count,
            categories: registry.categories(),
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Get a full registry entry
    #[tool(
        description = "Get the full registry entry for an MCP server id, including its installation command template and variables."
    )]
    pub async fn get_entry(
        &self,
        params: Parameters<GetEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let cache = self.registry_cache(&params.registry_path)?;
        let registry = load(&cache)?;

        match registry.get(&params.id) {
            Some(entry) => json_result(entry),
            None => Ok(tool_error(format!("No MCP found with id \"{}\"", params.id))),
        }
    }

    /// Resolve installation args with placeholder values
    #[tool(
        description = "Resolve the installation command of an MCP server, substituting <PLACEHOLDER> args with the given values. Returns command, args, declared variables and the placeholders still unresolved."
    )]
    pub async fn resolve_installation(
        &self,
        params: Parameters<ResolveInstallationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let cache = self.registry_cache(&params.registry_path)?;
        let registry = load(&cache)?;

        let Some(resolved) = registry.resolve_args(&params.id, &params.values) else {
            return Ok(no_installation(&params.id));
        };

        let unresolved = resolved.unresolved().to_vec();
        json_result(&ResolveInstallationResult {
            id: params.id,
            command: resolved.command,
            args: resolved.args,
            variables: resolved.variables,
            unresolved,
        })
    }

    /// Build a shell-ready installation command line
    #[tool(
        description = "Build a ready-to-run shell command line for installing an MCP server, substituting <PLACEHOLDER> args with the given values and quoting args as needed."
    )]
    pub async fn build_command(
        &self,
        params: Parameters<ResolveInstallationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let cache = self.registry_cache(&params.registry_path)?;
        let registry = load(&cache)?;

        let Some(resolved) = registry.resolve_args(&params.id, &params.values) else {
            return Ok(no_installation(&params.id));
        };

        json_result(&BuildCommandResult {
            id: params.id,
            command_line: resolved.command_line(),
            unresolved: resolved.unresolved().to_vec(),
        })
    }

    fn registry_cache(&self, registry_path: &str) -> Result<Arc<RegistryCache>, McpError> {
        let path = PathBuf::from(registry_path);
        let mut caches = self
            .caches
            .lock()
            .map_err(|_| McpError::internal_error("Registry cache lock poisoned", None))?;
        let cache = caches
            .entry(path.clone())
            .or_insert_with(|| {
                debug!(path = %path.display(), "creating registry cache");
                Arc::new(RegistryCache::new(path))
            })
            .clone();
        Ok(cache)
    }
}

fn load(cache: &RegistryCache) -> Result<&Registry, McpError> {
    cache
        .get()
        .map_err(|e| McpError::internal_error(format!("Failed to load registry: {}", e), None))
}

fn no_installation(id: &str) -> CallToolResult {
    tool_error(format!(
        "No MCP with installation information found for id \"{}\"",
        id
    ))
}

fn tool_error(message: String) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message)])
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for McpverseServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "mcpverse MCP helps AI agents discover and install MCP servers from a registry file.\n\n\
                 Available tools:\n\
                 1. list_entries - List registry entries (paginated, optional category filter)\n\
                 2. get_entry - Get the full entry for an id\n\
                 3. resolve_installation - Substitute placeholder values into installation args\n\
                 4. build_command - Build a shell-ready installation command line\n\n\
                 Recommended Workflow:\n\
                 1. Use list_entries to find the server id\n\
                 2. Use get_entry to see which variables it needs (secret ones must come from the user)\n\
                 3. Use build_command with the values to get the command to run"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = McpverseServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
