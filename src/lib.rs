//! MCP server exposing the API registry REST surface as tools.

pub mod app;
pub mod constants;
pub mod errors;
pub mod mcp;
pub mod models;
pub mod registry;
pub mod services;
pub mod utils;
