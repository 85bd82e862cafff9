//! Request-template loading and rendering.
//!
//! Every XML API call is a templated `Envelope/Body` document. The bundled
//! templates cover the two supported exports plus the status check; callers
//! with custom envelopes can load their own from a file or a string.

use std::path::Path;

use chrono::NaiveDateTime;
use serde_json::Value;
use tera::{Context, Tera};

use crate::error::Result;

/// Timestamp format the XML API expects in date parameters.
pub const DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

const RAW_RECIPIENT_EXPORT_XML: &str = include_str!("../templates/raw_recipient_export.xml.tera");
const CONTACT_EXPORT_XML: &str = include_str!("../templates/contact_export.xml.tera");
const GET_JOB_STATUS_XML: &str = include_str!("../templates/get_job_status.xml.tera");

/// Format a timestamp the way the XML API expects, e.g. `01/31/2024 23:59:59`.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(DATE_FORMAT).to_string()
}

/// An XML request body with named substitution points.
#[derive(Debug, Clone)]
pub struct RequestTemplate {
    source: String,
}

impl RequestTemplate {
    /// Bundled template for a per-recipient event export.
    ///
    /// Parameters: `date_start`, `date_end`, `columns` (list of column names).
    pub fn raw_recipient_export() -> Self {
        Self::from_source(RAW_RECIPIENT_EXPORT_XML)
    }

    /// Bundled template for a contact list export.
    ///
    /// Parameters: `list_id`, `visibility`, `date_start`, `date_end`,
    /// `columns` (list of column names).
    pub fn contact_export() -> Self {
        Self::from_source(CONTACT_EXPORT_XML)
    }

    /// Use an in-memory template source.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Load a template from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            source: std::fs::read_to_string(path)?,
        })
    }

    /// Render the template with the given parameters.
    ///
    /// `params` must be a JSON object; each key becomes a template variable.
    /// XML is not HTML, so no autoescaping is applied to substituted values.
    pub fn render(&self, params: &Value) -> Result<String> {
        let context = Context::from_serialize(params)?;
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        Ok(tera.render_str(&self.source, &context)?)
    }
}

/// Render the status-check request for one job.
pub(crate) fn render_job_status_request(job_id: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("job_id", job_id);
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    Ok(tera.render_str(GET_JOB_STATUS_XML, &context)?)
}
