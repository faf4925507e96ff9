//! In-memory [`InfluxStore`] for tests.
//!
//! Statements are matched verbatim against canned responses; anything not
//! registered yields an empty result, which is also what the real server
//! does for a `SHOW` against an unknown measurement.

use std::collections::HashMap;

use crate::error::{InfluxError, Result};
use crate::store::{InfluxStore, Point};

/// Canned-response store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    database: Option<String>,
    responses: HashMap<String, Vec<Point>>,
    failures: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bound to a database name.
    pub fn with_database(database: impl Into<String>) -> Self {
        Self {
            database: Some(database.into()),
            ..Self::default()
        }
    }

    /// Register the points a statement returns.
    pub fn on(mut self, statement: impl Into<String>, points: Vec<Point>) -> Self {
        self.responses.insert(statement.into(), points);
        self
    }

    /// Make a statement fail with a query error.
    pub fn fail_on(mut self, statement: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(statement.into(), message.into());
        self
    }
}

#[async_trait::async_trait]
impl InfluxStore for MemoryStore {
    async fn query(&self, q: &str) -> Result<Vec<Point>> {
        if let Some(message) = self.failures.get(q) {
            return Err(InfluxError::Query(message.clone()));
        }
        Ok(self.responses.get(q).cloned().unwrap_or_default())
    }

    fn database_name(&self) -> Result<String> {
        self.database.clone().ok_or(InfluxError::DatabaseNotSelected)
    }
}

/// Build a single-column [`Point`] row, the shape `SHOW` statements return.
pub fn row(column: &str, value: impl Into<serde_json::Value>) -> Point {
    let mut point = Point::new();
    point.insert(column.to_string(), value.into());
    point
}
