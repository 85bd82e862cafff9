//! Report request and job types.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AcousticError;

/// Report flavors the XML API can generate.
///
/// The submission response carries the job handle in a different place for
/// each flavor, so submissions outside this set are rejected up front instead
/// of failing during response extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    /// Per-recipient event export (`RawRecipientDataExport`).
    RawRecipientExport,
    /// Contact list export (`ExportList`).
    ContactExport,
}

impl ReportType {
    /// Name used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::RawRecipientExport => "raw_recipient_export",
            ReportType::ContactExport => "contact_export",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = AcousticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw_recipient_export" => Ok(ReportType::RawRecipientExport),
            "contact_export" => Ok(ReportType::ContactExport),
            other => Err(AcousticError::InvalidArgument(format!(
                "unsupported report type {other:?}, expected raw_recipient_export or contact_export"
            ))),
        }
    }
}

/// Job progress as reported by `GetJobStatus`.
///
/// Matching is case-insensitive. The vendor's vocabulary is open-ended, so
/// unrecognized values land in [`JobStatus::Other`] and polling continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Waiting,
    Running,
    Complete,
    Canceled,
    Error,
    Other(String),
}

impl JobStatus {
    /// Parse a raw status string, accepting both CANCELED spellings.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "waiting" => JobStatus::Waiting,
            "running" => JobStatus::Running,
            "complete" => JobStatus::Complete,
            "canceled" | "cancelled" => JobStatus::Canceled,
            "error" => JobStatus::Error,
            other => JobStatus::Other(other.to_string()),
        }
    }

    /// The job finished and the report artifact exists.
    pub fn is_complete(&self) -> bool {
        matches!(self, JobStatus::Complete)
    }

    /// The job reached a terminal state that will never produce a report.
    pub fn is_failed(&self) -> bool {
        matches!(self, JobStatus::Canceled | JobStatus::Error)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Waiting => "waiting",
            JobStatus::Running => "running",
            JobStatus::Complete => "complete",
            JobStatus::Canceled => "canceled",
            JobStatus::Error => "error",
            JobStatus::Other(s) => s,
        };
        f.write_str(s)
    }
}

/// Job handle assigned by the vendor at submission time.
///
/// The report location is only known to be readable once the job reports
/// complete; the vendor returns it at submission anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportJob {
    /// Opaque identifier used for status polling.
    pub job_id: String,
    /// Path of the report artifact on the vendor's SFTP/stored-files area.
    pub report_location: String,
}

/// Outcome of a completed report-generation call.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    /// Job identifier the vendor assigned to the export.
    pub job_id: String,
    /// Where the finished report can be retrieved.
    pub report_location: String,
    /// Number of status polls before the job reported complete.
    pub polls: u32,
    /// Wall-clock time from submission to completion.
    pub elapsed: Duration,
}
