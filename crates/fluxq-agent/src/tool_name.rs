//! Tool name enumeration.
//!
//! The string forms are the wire names the model calls tools by; they are
//! also what the tool descriptions use to reference each other.

use std::fmt;

/// The three tools the toolkit exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    /// Execute an InfluxQL query
    Query,
    /// Field and tag keys for a list of measurements
    MeasurementInfo,
    /// List all measurements in the database
    ListMeasurements,
}

impl ToolName {
    pub const fn as_str(self) -> &'static str {
        match self {
            ToolName::Query => "influx_db_query",
            ToolName::MeasurementInfo => "influx_db_measurement_info",
            ToolName::ListMeasurements => "influx_db_list_measurements",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
