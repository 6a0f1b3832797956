//! The Freezer Door Library
//!
//! Batch cocktail dilution: the calculation core, the reference catalog, and the HTTP and MCP
//! front-ends over it.

pub mod api;
pub mod build_info;
pub mod catalog;
pub mod config;
pub mod dilution;
pub mod mcp;
pub mod models;
pub mod telemetry;
pub mod tools;
