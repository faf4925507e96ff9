//! The store abstraction the agent tools are written against.

use serde_json::Value;

use crate::error::Result;

/// One result record: column name to value, including the implicit `time`
/// column. Series tags are merged into each point.
pub type Point = serde_json::Map<String, Value>;

/// A queryable InfluxDB handle.
///
/// Implementors provide exactly two capabilities: executing one InfluxQL
/// statement and reporting the name of the bound database. The tools in
/// `fluxq-agent` call `query` strictly sequentially and add no locking;
/// concurrent use is the caller's problem.
#[async_trait::async_trait]
pub trait InfluxStore: Send + Sync {
    /// Execute a single InfluxQL statement verbatim and materialize every
    /// resulting point.
    async fn query(&self, q: &str) -> Result<Vec<Point>>;

    /// Name of the database this handle is bound to.
    ///
    /// A handle with no selected database must fail here with
    /// [`InfluxError::DatabaseNotSelected`](crate::InfluxError::DatabaseNotSelected),
    /// at access time rather than at construction.
    fn database_name(&self) -> Result<String>;
}
