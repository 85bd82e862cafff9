//! OAuth token exchange.
//!
//! The XML API authenticates with a refresh-token grant: the long-lived
//! refresh token plus the client id/secret pair are traded for a short-lived
//! access token, which is then sent as a bearer header on every reporting
//! call. The vendor caps each OAuth client at 10 concurrent connections.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::AcousticConfig;
use crate::error::{AcousticError, Result};

const OAUTH_TOKEN_PATH: &str = "oauth/token";

/// JSON body answered by the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Exchange the configured refresh token for an access token.
pub(crate) async fn exchange_refresh_token(
    http: &Client,
    base_url: &str,
    config: &AcousticConfig,
) -> Result<String> {
    let url = format!("{base_url}/{OAUTH_TOKEN_PATH}");

    let params = [
        ("grant_type", "refresh_token"),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
        ("refresh_token", config.refresh_token.as_str()),
    ];

    let response = http.post(&url).form(&params).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AcousticError::Authentication { status, body });
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| AcousticError::parse(format!("token response: {e}")))?;

    debug!(
        token_type = token.token_type.as_deref().unwrap_or("bearer"),
        expires_in = token.expires_in,
        "access token obtained"
    );

    Ok(token.access_token)
}
