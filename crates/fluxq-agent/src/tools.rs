//! The three InfluxDB tools.
//!
//! Each tool binds a shared store handle and implements `rig::tool::Tool`.
//! The internal operations are typed and fallible; the `call` wrappers
//! flatten any failure into an `"Error: "`-prefixed observation string, so
//! the tools never raise across the tool boundary (`Error = Infallible`).
//! The agent reads the error text like any other observation and decides
//! what to do next.

use std::convert::Infallible;
use std::sync::Arc;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use fluxq_influx::{InfluxError, InfluxStore, Point};

use crate::tool_name::ToolName;

fn error_text(e: &InfluxError) -> String {
    format!("Error: {e}")
}

// ============================================================================
// influx_db_query
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QueryArgs {
    /// A detailed and correct InfluxQL query.
    pub query: String,
}

/// Result of the query tool.
///
/// Success is a sequence of points, failure a message string; callers
/// branch on the variant (or, after serialization, on array vs string),
/// never on the `"Error: "` prefix — a legitimate result value could start
/// with that text too.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryReply {
    Rows(Vec<Point>),
    Message(String),
}

/// Executes one free-form InfluxQL statement verbatim.
///
/// No validation and no statement whitelist: the read-only restriction in
/// the agent prompt is advisory only.
pub struct QueryInfluxTool<S> {
    store: Arc<S>,
}

impl<S> QueryInfluxTool<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> Clone for QueryInfluxTool<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: InfluxStore + 'static> Tool for QueryInfluxTool<S> {
    const NAME: &'static str = ToolName::Query.as_str();

    type Error = Infallible;
    type Args = QueryArgs;
    type Output = QueryReply;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: format!(
                "Input to this tool is a detailed and correct InfluxQL query, output is a \
                 result from the database. If the query is not correct, an error message \
                 will be returned. If an error is returned, rewrite the query, check the \
                 query, and try again. If you encounter an issue with unknown fields, \
                 use {} to query the correct measurement fields.",
                ToolName::MeasurementInfo,
            ),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "A detailed and correct InfluxQL query."
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        tracing::debug!(query = %args.query, "running query tool");
        Ok(match self.store.query(&args.query).await {
            Ok(points) => QueryReply::Rows(points),
            Err(e) => QueryReply::Message(error_text(&e)),
        })
    }
}

// ============================================================================
// influx_db_measurement_info
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MeasurementInfoArgs {
    /// Comma-separated measurement names. Example: `cpu, memory`
    pub measurement_names: String,
}

/// Reports field and tag keys for a comma-separated list of measurements.
///
/// Names are trimmed but not validated against the list tool's output; an
/// unknown name simply yields empty key lists. The batch is all-or-nothing:
/// a failure on any name discards the results gathered so far.
pub struct MeasurementInfoTool<S> {
    store: Arc<S>,
}

impl<S> MeasurementInfoTool<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> Clone for MeasurementInfoTool<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: InfluxStore + 'static> MeasurementInfoTool<S> {
    async fn describe(&self, measurement_names: &str) -> Result<String, InfluxError> {
        let mut schema = serde_json::Map::new();
        for name in measurement_names.split(',').map(str::trim) {
            let fields = self
                .store
                .query(&format!("SHOW FIELD KEYS FROM {name}"))
                .await?;
            let tags = self
                .store
                .query(&format!("SHOW TAG KEYS FROM {name}"))
                .await?;
            schema.insert(
                name.to_string(),
                json!({
                    "fields": column_values(&fields, "fieldKey"),
                    "tags": column_values(&tags, "tagKey"),
                }),
            );
        }
        Ok(Value::Object(schema).to_string())
    }
}

impl<S: InfluxStore + 'static> Tool for MeasurementInfoTool<S> {
    const NAME: &'static str = ToolName::MeasurementInfo.as_str();

    type Error = Infallible;
    type Args = MeasurementInfoArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: format!(
                "Input to this tool is a comma-separated list of measurement names, output \
                 is the schema (field and tag keys) for those measurements. Ensure the \
                 measurements exist by calling {} first! \
                 Example Input: measurement1, measurement2, measurement3",
                ToolName::ListMeasurements,
            ),
            parameters: json!({
                "type": "object",
                "properties": {
                    "measurement_names": {
                        "type": "string",
                        "description": "A comma-separated list of measurement names to get details for. Example: 'cpu, memory'"
                    }
                },
                "required": ["measurement_names"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(self
            .describe(&args.measurement_names)
            .await
            .unwrap_or_else(|e| error_text(&e)))
    }
}

// ============================================================================
// influx_db_list_measurements
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ListMeasurementsArgs {
    /// Ignored; the tool takes no real input.
    #[serde(default)]
    pub tool_input: String,
}

/// Lists every measurement in the database as a comma-separated string.
///
/// An empty database yields the empty string.
pub struct ListMeasurementsTool<S> {
    store: Arc<S>,
}

impl<S> ListMeasurementsTool<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> Clone for ListMeasurementsTool<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: InfluxStore + 'static> ListMeasurementsTool<S> {
    async fn list(&self) -> Result<String, InfluxError> {
        let points = self.store.query("SHOW MEASUREMENTS").await?;
        let names: Vec<&str> = points
            .iter()
            .filter_map(|p| p.get("name").and_then(Value::as_str))
            .collect();
        Ok(names.join(", "))
    }
}

impl<S: InfluxStore + 'static> Tool for ListMeasurementsTool<S> {
    const NAME: &'static str = ToolName::ListMeasurements.as_str();

    type Error = Infallible;
    type Args = ListMeasurementsArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Input is an empty string, output is a comma-separated list of \
                          measurements in the database."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "tool_input": {
                        "type": "string",
                        "description": "An empty string"
                    }
                },
                "required": []
            }),
        }
    }

    async fn call(&self, _args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(self.list().await.unwrap_or_else(|e| error_text(&e)))
    }
}

/// Pull one named column out of every point, keeping string values only.
fn column_values(points: &[Point], column: &str) -> Vec<Value> {
    points
        .iter()
        .filter_map(|p| p.get(column))
        .filter(|v| v.is_string())
        .cloned()
        .collect()
}
