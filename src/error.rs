//! Error types for the Acoustic Campaign client.

use reqwest::StatusCode;
use thiserror::Error;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, AcousticError>;

/// Errors surfaced by [`AcousticClient`](crate::AcousticClient) operations.
#[derive(Debug, Error)]
pub enum AcousticError {
    /// The OAuth refresh-token exchange was rejected.
    #[error("authentication failed: status {status}: {body}")]
    Authentication { status: StatusCode, body: String },

    /// A reporting call answered with a non-success HTTP status.
    #[error("{operation} failed: status {status}: {body}")]
    Request {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The vendor answered with `SUCCESS=FALSE` and a fault description.
    #[error("api fault: {0}")]
    Fault(String),

    /// Transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not well-formed XML.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The response parsed but an expected field was missing or empty.
    #[error("parse error: {0}")]
    Parse(String),

    /// A request template could not be rendered.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// A template file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-supplied value is outside the supported set.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The vendor moved the job to a terminal state without producing a report.
    #[error("job {job_id} ended as {status}")]
    JobFailed { job_id: String, status: String },

    /// The poll bound was exhausted before the job completed.
    #[error("job {job_id} not complete after {attempts} status polls")]
    Timeout { job_id: String, attempts: u32 },
}

impl AcousticError {
    /// Create a parse error.
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// True for errors produced by the credential exchange.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// True when the poll bound was exhausted.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
