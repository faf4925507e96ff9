//! Toolkit assembly: one store handle, three tools, fixed order.

use std::sync::Arc;

use rig::agent::{AgentBuilder, AgentBuilderSimple};
use rig::completion::{CompletionModel, ToolDefinition};
use rig::tool::Tool;

use fluxq_influx::InfluxStore;

use crate::error::Result;
use crate::tools::{ListMeasurementsTool, MeasurementInfoTool, QueryInfluxTool};

/// Binds a database handle to the three InfluxDB tools.
///
/// The handle is shared, long-lived, and reused sequentially across all
/// tools and calls; nothing here synchronizes concurrent use.
pub struct InfluxToolkit<S> {
    store: Arc<S>,
}

impl<S> Clone for InfluxToolkit<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: InfluxStore + 'static> InfluxToolkit<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Name of the bound database, used to parameterize the agent prompt.
    ///
    /// Fails with a configuration error when the handle has no database
    /// selected — at access time, not at toolkit construction.
    pub fn database(&self) -> Result<String> {
        Ok(self.store.database_name()?)
    }

    pub fn query_tool(&self) -> QueryInfluxTool<S> {
        QueryInfluxTool::new(Arc::clone(&self.store))
    }

    pub fn measurement_info_tool(&self) -> MeasurementInfoTool<S> {
        MeasurementInfoTool::new(Arc::clone(&self.store))
    }

    pub fn list_measurements_tool(&self) -> ListMeasurementsTool<S> {
        ListMeasurementsTool::new(Arc::clone(&self.store))
    }

    /// Descriptor list for the three tools, in the order the agent is
    /// handed them: query, measurement info, list measurements.
    pub async fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            self.query_tool().definition(String::new()).await,
            self.measurement_info_tool().definition(String::new()).await,
            self.list_measurements_tool().definition(String::new()).await,
        ]
    }

    /// Attach the three tools to a rig agent builder.
    pub fn install<M: CompletionModel>(&self, builder: AgentBuilder<M>) -> AgentBuilderSimple<M> {
        builder
            .tool(self.query_tool())
            .tool(self.measurement_info_tool())
            .tool(self.list_measurements_tool())
    }
}
