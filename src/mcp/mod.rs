//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes registry lookup and installation command generation to AI
//! assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{McpverseServer, run_server};
