//! InfluxDB 1.x `/query` HTTP client.
//!
//! One statement per call, one fully materialized result per call. The
//! flattening mirrors the wire shape of the 1.x API: every series in every
//! statement result is zipped column-by-column into point records, with
//! series tags merged into each point.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{InfluxError, Result};
use crate::store::{InfluxStore, Point};

/// Connection settings for [`InfluxClient::connect`].
#[derive(Debug, Clone)]
pub struct InfluxConfig {
    /// Server root, e.g. `http://localhost:8086`.
    pub url: String,
    /// Database the connection is bound to. Queries that need one fail
    /// without it; so does [`InfluxStore::database_name`].
    pub database: Option<String>,
    /// Basic-auth credentials.
    pub username: Option<String>,
    pub password: Option<String>,
    /// Per-request timeout. `None` leaves reqwest's default in place.
    pub timeout: Option<Duration>,
}

impl InfluxConfig {
    /// Create a config pointing at the given server root.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: None,
            username: None,
            password: None,
            timeout: None,
        }
    }

    /// Bind the connection to a database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set basic-auth credentials.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Host/port/database summary of a bound connection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectionContext {
    pub host: String,
    pub port: Option<u16>,
    pub database: Option<String>,
}

/// A long-lived InfluxDB 1.x connection handle.
///
/// Safe for sequential reuse across calls; not synchronized for concurrent
/// use.
#[derive(Debug)]
pub struct InfluxClient {
    http: reqwest::Client,
    endpoint: Url,
    database: Option<String>,
    auth: Option<(String, String)>,
}

impl InfluxClient {
    /// Build a client from `config`.
    ///
    /// Fails synchronously on a malformed URL; a missing database is not an
    /// error here (it surfaces at [`InfluxStore::database_name`] or query
    /// time instead).
    pub fn connect(config: InfluxConfig) -> Result<Self> {
        let mut base = Url::parse(&config.url)?;
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        let endpoint = base.join("query")?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        tracing::debug!(
            endpoint = %endpoint,
            database = config.database.as_deref().unwrap_or("<none>"),
            "influxdb client ready"
        );

        Ok(Self {
            http,
            endpoint,
            database: config.database,
            auth: match (config.username, config.password) {
                (Some(u), Some(p)) => Some((u, p)),
                _ => None,
            },
        })
    }

    /// Database this handle is bound to, if any.
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Host/port/database summary of this connection.
    pub fn context(&self) -> ConnectionContext {
        ConnectionContext {
            host: self.endpoint.host_str().unwrap_or_default().to_string(),
            port: self.endpoint.port_or_known_default(),
            database: self.database.clone(),
        }
    }

    async fn send(&self, q: &str) -> Result<QueryResponse> {
        let mut request = self.http.get(self.endpoint.clone()).query(&[("q", q)]);
        if let Some(db) = &self.database {
            request = request.query(&[("db", db.as_str())]);
        }
        if let Some((user, pass)) = &self.auth {
            request = request.basic_auth(user, Some(pass));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(InfluxError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| InfluxError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl InfluxStore for InfluxClient {
    async fn query(&self, q: &str) -> Result<Vec<Point>> {
        tracing::debug!(statement = q, "executing influxql statement");
        let response = self.send(q).await?;
        points_from_response(response)
    }

    fn database_name(&self) -> Result<String> {
        self.database
            .clone()
            .ok_or(InfluxError::DatabaseNotSelected)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<StatementResult>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatementResult {
    #[serde(default)]
    series: Vec<Series>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Series {
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    values: Vec<Vec<Value>>,
    #[serde(default)]
    tags: Option<serde_json::Map<String, Value>>,
}

/// Flatten a decoded `/query` response into point records.
///
/// A statement-level `error` field fails the whole call, matching the
/// server contract that a failed statement produces no series.
fn points_from_response(response: QueryResponse) -> Result<Vec<Point>> {
    if let Some(message) = response.error {
        return Err(InfluxError::Query(message));
    }

    let mut points = Vec::new();
    for result in response.results {
        if let Some(message) = result.error {
            return Err(InfluxError::Query(message));
        }
        for series in result.series {
            for row in series.values {
                let mut point = Point::new();
                if let Some(tags) = &series.tags {
                    for (key, value) in tags {
                        point.insert(key.clone(), value.clone());
                    }
                }
                for (column, value) in series.columns.iter().zip(row) {
                    point.insert(column.clone(), value);
                }
                points.push(point);
            }
        }
    }
    Ok(points)
}
