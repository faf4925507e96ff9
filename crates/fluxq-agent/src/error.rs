use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// The database handle is malformed or missing a capability. Raised
    /// synchronously during toolkit/agent assembly, never from a tool call.
    #[error("toolkit configuration error: {0}")]
    Configuration(#[from] fluxq_influx::InfluxError),

    /// The rig executor failed while running the agent.
    #[error("prompt execution failed: {0}")]
    Prompt(#[from] rig::completion::PromptError),
}

pub type Result<T> = std::result::Result<T, AgentError>;
