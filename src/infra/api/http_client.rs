use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::{GenerationRequest, QuoteError, QuoteSuccess};

use super::QuoteBackend;
use super::env::{read_env_var, read_timeout_from_env};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const GENERATE_ENDPOINT_PATH: &str = "generate-quote";

const ENV_BASE_URL: &str = "QUOTEGEN_API_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "QUOTEGEN_TIMEOUT_SECS";

const GENERIC_REJECTION_MESSAGE: &str = "Failed to generate quote";
const GENERIC_TRANSPORT_MESSAGE: &str = "An error occurred";

const MAX_ERROR_MESSAGE_LEN: usize = 256;

/// Blocking HTTP client for the quote generation endpoint. Fire-once per
/// call: no retries, no backoff beyond the configured request timeout.
pub struct HttpQuoteBackend {
    api_base_url: String,
    client: Client,
}

impl HttpQuoteBackend {
    pub fn from_env() -> Result<Self, QuoteError> {
        let api_base_url =
            read_env_var(ENV_BASE_URL)?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = read_timeout_from_env(ENV_TIMEOUT_SECS)?.unwrap_or(DEFAULT_TIMEOUT);
        Self::with_config(api_base_url, timeout)
    }

    pub fn with_config(
        api_base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, QuoteError> {
        let api_base_url = api_base_url.into();
        if api_base_url.trim().is_empty() {
            return Err(QuoteError::validation(
                "quote API base URL must not be empty",
            ));
        }

        let client = Client::builder().timeout(timeout).build().map_err(|err| {
            QuoteError::internal(format!("failed to create quote API HTTP client: {err}"))
        })?;

        Ok(Self {
            api_base_url,
            client,
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn endpoint_url(&self) -> String {
        build_api_url(&self.api_base_url, GENERATE_ENDPOINT_PATH)
    }

    fn map_success_response(&self, response_body: &str) -> Result<QuoteSuccess, QuoteError> {
        let payload: QuoteApiResponse = serde_json::from_str(response_body).map_err(|err| {
            QuoteError::invalid_response(format!("quote API response decode failed: {err}"))
        })?;

        if !payload.success {
            let message = payload
                .error
                .as_deref()
                .and_then(non_empty_owned)
                .unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_string());
            return Err(QuoteError::rejected(message));
        }

        let quote = payload.quote.ok_or_else(|| {
            QuoteError::invalid_response("quote API success payload did not include a quote")
        })?;
        let author = payload.author.ok_or_else(|| {
            QuoteError::invalid_response("quote API success payload did not include an author")
        })?;

        let success = QuoteSuccess {
            quote,
            author,
            resolved_theme: payload.theme.unwrap_or_default(),
        };
        success.validate()?;
        Ok(success)
    }
}

impl QuoteBackend for HttpQuoteBackend {
    fn generate(&self, request: &GenerationRequest) -> Result<QuoteSuccess, QuoteError> {
        request.validate()?;

        let response = self
            .client
            .post(self.endpoint_url())
            .header("content-type", "application/json")
            .json(request)
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        let response_body = response.text().map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_http_error(status, &response_body));
        }

        self.map_success_response(&response_body)
    }
}

/// Response envelope of `POST /api/generate-quote`. `success: true` carries
/// quote/author/theme; `success: false` carries `error`.
#[derive(Debug, Deserialize)]
struct QuoteApiResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    quote: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn map_http_error(status: StatusCode, body: &str) -> QuoteError {
    tracing::warn!(%status, "quote API returned an error status");

    if status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::GATEWAY_TIMEOUT {
        return QuoteError::Timeout;
    }

    // A non-2xx body may still carry the service's error envelope; its
    // message wins over a status-derived one.
    let envelope_message = serde_json::from_str::<QuoteApiResponse>(body)
        .ok()
        .and_then(|payload| payload.error)
        .as_deref()
        .and_then(non_empty_owned);

    let message = envelope_message.unwrap_or_else(|| {
        let compact = truncate_message(body);
        if compact.is_empty() {
            format!("quote API returned HTTP {status}")
        } else {
            format!("quote API returned HTTP {status}: {compact}")
        }
    });

    QuoteError::transport(message)
}

fn map_transport_error(error: reqwest::Error) -> QuoteError {
    tracing::warn!(%error, "quote API transport failure");

    if error.is_timeout() {
        return QuoteError::Timeout;
    }

    let message =
        non_empty_owned(&error.to_string()).unwrap_or_else(|| GENERIC_TRANSPORT_MESSAGE.to_string());
    QuoteError::transport(message)
}

fn truncate_message(body: &str) -> String {
    let compact = body.trim().replace('\n', " ");
    compact.chars().take(MAX_ERROR_MESSAGE_LEN).collect()
}

fn non_empty_owned(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn build_api_url(api_base_url: &str, endpoint_path: &str) -> String {
    let base = api_base_url.trim_end_matches('/');
    let endpoint_path = endpoint_path.trim_start_matches('/');

    if base.ends_with("/api") {
        format!("{base}/{endpoint_path}")
    } else {
        format!("{base}/api/{endpoint_path}")
    }
}
