//! Current-weather lookup for LLM function calling.
//!
//! [`service::Weather`] is served as an MCP tool by the `get-weather` binary,
//! and implements [`capability::Capability`] for hosts that dispatch by data
//! tag instead.

pub mod capability;
pub mod constants;
pub mod models;
pub mod service;
