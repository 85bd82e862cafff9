//! The Acoustic Campaign XML API client.

use std::time::Instant;

use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, StatusCode, header};
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::auth;
use crate::config::AcousticConfig;
use crate::error::{AcousticError, Result};
use crate::report::{GeneratedReport, JobStatus, ReportJob, ReportType};
use crate::response;
use crate::template::{self, RequestTemplate};

const XML_API_PATH: &str = "XMLAPI";
const XML_CONTENT_TYPE: &str = "text/xml;charset=utf-8";

/// Client for the Acoustic Campaign XML API.
///
/// Construction performs the OAuth exchange, so an unauthenticated client is
/// never handed to the caller. The client can be shared behind a reference;
/// each report-generation call carries its own job state, and the access
/// token sits in a lock so a mid-call refresh is visible to every caller.
#[derive(Debug)]
pub struct AcousticClient {
    http: Client,
    config: AcousticConfig,
    base_url: String,
    access_token: RwLock<String>,
}

impl AcousticClient {
    /// Authenticate and return a ready-to-use client.
    ///
    /// Fails with [`AcousticError::Authentication`] when the token endpoint
    /// rejects the credentials; no reporting call is attempted in that case.
    pub async fn connect(config: AcousticConfig) -> Result<Self> {
        let base_url = config.normalized_base_url()?;
        let http = config.build_http_client()?;
        let token = auth::exchange_refresh_token(&http, &base_url, &config).await?;
        debug!(base_url = %base_url, "authenticated");
        Ok(Self {
            http,
            config,
            base_url,
            access_token: RwLock::new(token),
        })
    }

    /// Generate a report and wait for it to finish.
    ///
    /// [`submit_report`](Self::submit_report) followed by the built-in
    /// polling loop. The returned report location is the one captured from
    /// the submission response; it only becomes readable at completion.
    /// Polling gives up with [`AcousticError::Timeout`] once the configured
    /// bound is exhausted, and a job the vendor cancels or fails surfaces as
    /// [`AcousticError::JobFailed`].
    pub async fn generate_report(
        &self,
        template: &RequestTemplate,
        params: &Value,
        report_type: ReportType,
    ) -> Result<GeneratedReport> {
        let started = Instant::now();
        let job = self.submit_report(template, params, report_type).await?;
        let polls = self.poll_until_complete(&job.job_id, report_type).await?;

        let elapsed = started.elapsed();
        info!(
            job_id = %job.job_id,
            report_type = %report_type,
            report_location = %job.report_location,
            polls,
            elapsed_secs = elapsed.as_secs(),
            "report generation complete"
        );

        Ok(GeneratedReport {
            job_id: job.job_id,
            report_location: job.report_location,
            polls,
            elapsed,
        })
    }

    /// Submit a report request without waiting for it to finish.
    ///
    /// Returns the job handle the vendor assigned. Pair it with
    /// [`job_status`](Self::job_status) to poll on a caller-controlled
    /// cadence, or use [`generate_report`](Self::generate_report) for the
    /// built-in loop.
    pub async fn submit_report(
        &self,
        template: &RequestTemplate,
        params: &Value,
        report_type: ReportType,
    ) -> Result<ReportJob> {
        let body = template.render(params)?;
        debug!(report_type = %report_type, "submitting report request");
        let xml = self.xmlapi_post(&body, "report submission").await?;
        let job = response::extract_report_job(&xml, report_type)?;
        info!(job_id = %job.job_id, report_type = %report_type, "report job submitted");
        Ok(job)
    }

    /// Fetch the current status of a report job.
    pub async fn job_status(&self, job_id: &str) -> Result<JobStatus> {
        let body = template::render_job_status_request(job_id)?;
        let xml = self.xmlapi_post(&body, "job status poll").await?;
        let raw = response::extract_job_status(&xml)?;
        Ok(JobStatus::parse(&raw))
    }

    /// Poll until the job completes, fails, or the poll bound is exhausted.
    ///
    /// Returns the number of polls performed. The fixed delay sits between
    /// polls, not after the last one.
    async fn poll_until_complete(&self, job_id: &str, report_type: ReportType) -> Result<u32> {
        let policy = &self.config.poll;
        for attempt in 1..=policy.max_attempts {
            let status = self.job_status(job_id).await?;
            info!(
                job_id = %job_id,
                status = %status,
                report_type = %report_type,
                attempt,
                "report job status"
            );
            if status.is_complete() {
                return Ok(attempt);
            }
            if status.is_failed() {
                return Err(AcousticError::JobFailed {
                    job_id: job_id.to_string(),
                    status: status.to_string(),
                });
            }
            if attempt < policy.max_attempts {
                sleep(policy.interval).await;
            }
        }
        Err(AcousticError::Timeout {
            job_id: job_id.to_string(),
            attempts: policy.max_attempts,
        })
    }

    /// POST an XML body to the reporting endpoint.
    ///
    /// A 401 means the short-lived access token expired mid-run: the refresh
    /// exchange runs once more and the same request is retried once. Any
    /// other non-success status aborts with [`AcousticError::Request`].
    async fn xmlapi_post(&self, body: &str, operation: &'static str) -> Result<String> {
        let mut response = self.xmlapi_request(body).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!(operation, "access token rejected, refreshing");
            self.refresh_access_token().await?;
            response = self.xmlapi_request(body).send().await?;
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AcousticError::Request {
                operation,
                status,
                body,
            });
        }

        Ok(response.text().await?)
    }

    fn xmlapi_request(&self, body: &str) -> RequestBuilder {
        self.http
            .post(format!("{}/{XML_API_PATH}", self.base_url))
            .header(header::CONTENT_TYPE, XML_CONTENT_TYPE)
            .bearer_auth(self.access_token.read().as_str())
            .body(body.to_string())
    }

    /// Re-run the refresh-token exchange and swap in the new access token.
    async fn refresh_access_token(&self) -> Result<()> {
        let token = auth::exchange_refresh_token(&self.http, &self.base_url, &self.config).await?;
        *self.access_token.write() = token;
        Ok(())
    }
}
