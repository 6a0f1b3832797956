//! Freezer Door tools module
//!
//! Transport-independent operations. The HTTP API and the MCP server are thin wrappers over
//! these functions.

pub mod calculate;
pub mod cocktails;
pub mod error;
pub mod presets;
pub mod spirits;
pub mod status;

pub use error::{ToolError, ToolResult};
