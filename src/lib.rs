//! Acoustic Campaign XML API client.
//!
//! Authenticates with an OAuth refresh-token exchange, submits templated XML
//! report requests, and polls job status until the export is ready on the
//! vendor side. Supports the two export flavors the XML API exposes for
//! reporting pipelines: raw recipient (per-event) exports and contact list
//! exports.
//!
//! ## Core types
//!
//! - [`AcousticClient`]: connect, submit, poll
//! - [`AcousticConfig`] and [`PollPolicy`]: credentials, pod URL, poll bound
//! - [`RequestTemplate`]: bundled or caller-supplied XML request bodies
//! - [`ReportType`] and [`JobStatus`]: the supported exports and the vendor's
//!   status vocabulary
//! - [`GeneratedReport`]: job id, report location, poll count and elapsed time
//!
//! ## Polling
//!
//! Report jobs run asynchronously on the vendor side. After submission the
//! client polls `GetJobStatus` at a fixed interval (20 seconds by default, up
//! to 90 polls) until the job reports `COMPLETE`. Exhausting the bound yields
//! [`AcousticError::Timeout`](error::AcousticError::Timeout); a job the vendor
//! cancels or errors yields
//! [`AcousticError::JobFailed`](error::AcousticError::JobFailed). An access
//! token that expires mid-run is refreshed once and the rejected request is
//! retried.
//!
//! ## Example
//!
//! ```no_run
//! use acoustic_campaign::{AcousticClient, AcousticConfig, ReportType, RequestTemplate};
//! use serde_json::json;
//!
//! # async fn run() -> acoustic_campaign::Result<()> {
//! let config = AcousticConfig::new("client-id", "client-secret", "refresh-token");
//! let client = AcousticClient::connect(config).await?;
//!
//! let report = client
//!     .generate_report(
//!         &RequestTemplate::contact_export(),
//!         &json!({
//!             "list_id": 12345,
//!             "visibility": 1,
//!             "date_start": "01/01/2024 00:00:00",
//!             "date_end": "01/31/2024 23:59:59",
//!             "columns": ["EMAIL", "FIRST_NAME"],
//!         }),
//!         ReportType::ContactExport,
//!     )
//!     .await?;
//!
//! println!("report ready at {}", report.report_location);
//! # Ok(())
//! # }
//! ```

mod auth;
mod response;

pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod template;

pub use client::AcousticClient;
pub use config::{AcousticConfig, DEFAULT_BASE_URL, PollPolicy};
pub use error::{AcousticError, Result};
pub use report::{GeneratedReport, JobStatus, ReportJob, ReportType};
pub use template::{DATE_FORMAT, RequestTemplate, format_timestamp};
