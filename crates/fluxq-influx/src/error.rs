use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfluxError {
    #[error("invalid influxdb url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("no database selected on this connection")]
    DatabaseNotSelected,

    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("influxdb returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("query failed: {0}")]
    Query(String),

    #[error("malformed response body: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, InfluxError>;
