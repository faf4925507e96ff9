//! InfluxDB tooling for rig agents.
//!
//! This crate provides:
//! - Three agent tools: query, measurement info, list measurements
//! - [`InfluxToolkit`], which binds a database handle to the tools
//! - The prompt templates the agent preamble is assembled from
//! - [`create_influx_agent`], which hands everything to rig's
//!   `AgentBuilder`
//!
//! The agent loop itself — tool-call routing, stopping conditions,
//! retries — is rig's. Tools here never return `Err` across the tool
//! boundary: every runtime failure becomes an `"Error: "`-prefixed
//! observation the model can react to.

pub mod agent;
pub mod error;
pub mod prompt;
pub mod tool_name;
pub mod toolkit;
pub mod tools;

pub use agent::{ask, create_influx_agent, AgentOptions, DEFAULT_MAX_TURNS};
pub use error::{AgentError, Result};
pub use prompt::{
    format_prefix, format_query_checker, AGENT_PREFIX, AGENT_SUFFIX, DEFAULT_TOP_K, QUERY_CHECKER,
};
pub use tool_name::ToolName;
pub use toolkit::InfluxToolkit;
pub use tools::{ListMeasurementsTool, MeasurementInfoTool, QueryInfluxTool, QueryReply};
