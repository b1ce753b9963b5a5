//! mcpverse - reader and renderer for MCP server registries
//!
//! mcpverse is a CLI tool and library for working with a static registry of
//! MCP servers: a JSON object mapping ids to name, description, category and
//! installation instructions. It looks entries up, builds ready-to-run
//! installation commands and renders the catalog as an HTML page.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `install`: Placeholder interpolation and shell quoting
//! - `mcp`: Model Context Protocol server implementation
//! - `registry`: Registry document loading, caching and lookup
//! - `render`: HTML rendering of the catalog

pub mod cli;
pub mod config;
pub mod install;
pub mod mcp;
pub mod registry;
pub mod render;
