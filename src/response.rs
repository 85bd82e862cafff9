//! Serde models for XML API response envelopes.
//!
//! Every call answers with an `Envelope/Body/RESULT` document whose fields
//! under `RESULT` differ per operation, so the envelope is generic over the
//! result shape. Result fields are optional at the serde layer and checked
//! during extraction, which keeps a missing field a [`AcousticError::Parse`]
//! instead of a deserialization failure with no context.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{AcousticError, Result};
use crate::report::{ReportJob, ReportType};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(rename = "Body")]
    body: Body<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Body<T> {
    #[serde(rename = "RESULT")]
    result: T,
    #[serde(rename = "Fault")]
    fault: Option<Fault>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Fault {
    #[serde(rename = "FaultString")]
    fault_string: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobStatusResult {
    #[serde(rename = "SUCCESS")]
    success: Option<String>,
    #[serde(rename = "JOB_STATUS")]
    job_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContactExportResult {
    #[serde(rename = "SUCCESS")]
    success: Option<String>,
    #[serde(rename = "JOB_ID")]
    job_id: Option<String>,
    #[serde(rename = "FILE_PATH")]
    file_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRecipientExportResult {
    #[serde(rename = "SUCCESS")]
    success: Option<String>,
    #[serde(rename = "MAILING")]
    mailing: Option<Mailing>,
}

// Raw recipient exports nest the job handle one level down.
#[derive(Debug, Deserialize)]
pub(crate) struct Mailing {
    #[serde(rename = "JOB_ID")]
    job_id: Option<String>,
    #[serde(rename = "FILE_PATH")]
    file_path: Option<String>,
}

fn decode<T: DeserializeOwned>(xml: &str) -> Result<Body<T>> {
    let envelope: Envelope<T> = quick_xml::de::from_str(xml)?;
    Ok(envelope.body)
}

/// Turn a `SUCCESS=FALSE` answer into a fault error before field extraction.
fn check_success(success: Option<&str>, fault: Option<&Fault>) -> Result<()> {
    if success.is_some_and(|s| s.eq_ignore_ascii_case("false")) {
        let message = fault
            .and_then(|f| f.fault_string.as_deref())
            .unwrap_or("request unsuccessful")
            .to_string();
        return Err(AcousticError::Fault(message));
    }
    Ok(())
}

fn required(value: Option<String>, what: &str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AcousticError::parse(format!("no {what} in response")))
}

/// Pull the job handle out of a submission response for the given report type.
pub(crate) fn extract_report_job(xml: &str, report_type: ReportType) -> Result<ReportJob> {
    match report_type {
        ReportType::ContactExport => {
            let body: Body<ContactExportResult> = decode(xml)?;
            check_success(body.result.success.as_deref(), body.fault.as_ref())?;
            Ok(ReportJob {
                job_id: required(body.result.job_id, "JOB_ID")?,
                report_location: required(body.result.file_path, "FILE_PATH")?,
            })
        }
        ReportType::RawRecipientExport => {
            let body: Body<RawRecipientExportResult> = decode(xml)?;
            check_success(body.result.success.as_deref(), body.fault.as_ref())?;
            let mailing = body
                .result
                .mailing
                .ok_or_else(|| AcousticError::parse("no MAILING in response"))?;
            Ok(ReportJob {
                job_id: required(mailing.job_id, "MAILING JOB_ID")?,
                report_location: required(mailing.file_path, "MAILING FILE_PATH")?,
            })
        }
    }
}

/// Pull the raw status string out of a `GetJobStatus` response.
pub(crate) fn extract_job_status(xml: &str) -> Result<String> {
    let body: Body<JobStatusResult> = decode(xml)?;
    check_success(body.result.success.as_deref(), body.fault.as_ref())?;
    required(body.result.job_status, "JOB_STATUS")
}
