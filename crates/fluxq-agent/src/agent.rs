//! Agent assembly on top of rig.
//!
//! [`create_influx_agent`] formats the preamble, attaches the toolkit and
//! hands everything to rig's `AgentBuilder`. The execution loop — tool
//! selection, observation feedback, stopping — belongs to rig from there.

use rig::agent::{Agent, AgentBuilder};
use rig::completion::{CompletionModel, Prompt};

use fluxq_influx::InfluxStore;

use crate::error::Result;
use crate::prompt::{self, DEFAULT_TOP_K};
use crate::toolkit::InfluxToolkit;

/// Default turn cap for [`ask`]. Enough for a list/describe pass plus a
/// few query rewrites.
pub const DEFAULT_MAX_TURNS: usize = 15;

/// Knobs for [`create_influx_agent`].
#[derive(Debug, Clone)]
pub struct AgentOptions {
    /// Row limit interpolated into the prompt prefix.
    pub top_k: usize,
    /// Prefix override; may use `{database}` and `{top_k}` placeholders.
    pub prefix: Option<String>,
    /// Suffix override.
    pub suffix: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u64>,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            prefix: None,
            suffix: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Assemble the preamble from options and the bound database name.
pub fn build_preamble(database: &str, options: &AgentOptions) -> String {
    let prefix = match &options.prefix {
        Some(custom) => custom
            .replace("{database}", database)
            .replace("{top_k}", &options.top_k.to_string()),
        None => prompt::format_prefix(database, options.top_k),
    };
    let suffix = options.suffix.as_deref().unwrap_or(prompt::AGENT_SUFFIX);
    format!("{prefix}\n\n{suffix}")
}

/// Build a rig agent wired to the InfluxDB toolkit.
///
/// Configuration problems (for example a handle with no database selected)
/// surface here as `Err`, to the assembling caller; once the agent runs,
/// tool-level failures only ever reach the model as observation text.
pub fn create_influx_agent<M, S>(
    model: M,
    toolkit: &InfluxToolkit<S>,
    options: AgentOptions,
) -> Result<Agent<M>>
where
    M: CompletionModel,
    S: InfluxStore + 'static,
{
    let database = toolkit.database()?;
    let preamble = build_preamble(&database, &options);
    tracing::debug!(database = %database, top_k = options.top_k, "assembling influxdb agent");

    let mut builder = AgentBuilder::new(model).preamble(&preamble);
    if let Some(temperature) = options.temperature {
        builder = builder.temperature(temperature);
    }
    if let Some(max_tokens) = options.max_tokens {
        builder = builder.max_tokens(max_tokens);
    }
    Ok(toolkit.install(builder).build())
}

/// Run one question through the agent's multi-turn executor.
pub async fn ask<M: CompletionModel>(
    agent: &Agent<M>,
    question: &str,
    max_turns: usize,
) -> Result<String> {
    Ok(agent.prompt(question).multi_turn(max_turns).await?)
}
