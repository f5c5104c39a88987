use std::future::Future;

use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::{DeliveryMode, RegistrationConfig};
use crate::error::{RegistrationError, Result};
use crate::model::RegistrationPayload;

/// Something that can deliver a registration payload.
///
/// The workflow only depends on this trait, so tests can substitute an
/// in-memory recorder for the HTTP client.
pub trait Transmitter {
    type Error: std::error::Error;

    /// Destination address, checked against the placeholder before sending.
    fn endpoint(&self) -> &str;

    fn transmit(
        &self,
        payload: &RegistrationPayload,
    ) -> impl Future<Output = std::result::Result<(), Self::Error>>;
}

/// Posts registrations to the spreadsheet script endpoint.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> tech_triad::Result<()> {
/// use tech_triad::{RegistrationClient, RegistrationConfig};
///
/// let config = RegistrationConfig::from_env();
/// let client = RegistrationClient::new(config)?;
/// println!("sending to {}", client.config().endpoint);
/// # Ok(())
/// # }
/// ```
pub struct RegistrationClient {
    http: reqwest::Client,
    config: RegistrationConfig,
}

/// Reply written by the spreadsheet script.
#[derive(Debug, Deserialize)]
struct Acknowledgement {
    result: String,
    #[serde(default)]
    message: Option<String>,
}

impl RegistrationClient {
    /// Create a client, applying the configured request timeout.
    pub fn new(config: RegistrationConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(RegistrationError::Client)?;
        Ok(Self { http, config })
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc. The
    /// configured timeout is not applied to the given client.
    pub fn with_client(client: reqwest::Client, config: RegistrationConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Post one registration and judge the outcome per the delivery mode.
    #[instrument(skip(self, payload), fields(event = %payload.event, team = %payload.team_name))]
    pub async fn submit(&self, payload: &RegistrationPayload) -> Result<()> {
        let url = self.config.endpoint.as_str();
        let body = serde_json::to_vec(payload)?;
        debug!(url, bytes = body.len(), "posting registration");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .body(body)
            .send()
            .await
            .map_err(|e| RegistrationError::Http {
                url: url.to_owned(),
                source: e,
            })?;

        if self.config.delivery == DeliveryMode::Opaque {
            debug!("opaque delivery, response not inspected");
            return Ok(());
        }

        let status = response.status();
        if !status.is_success() {
            return Err(RegistrationError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| RegistrationError::ResponseBody {
                url: url.to_owned(),
                source: e,
            })?;

        check_acknowledgement(&text)
    }
}

/// A 2xx reply that is not the script's JSON is accepted as is; only an
/// explicit `"result": "error"` fails.
fn check_acknowledgement(body: &str) -> Result<()> {
    let Ok(ack) = serde_json::from_str::<Acknowledgement>(body) else {
        debug!("reply is not an acknowledgement document, accepting");
        return Ok(());
    };
    if ack.result.eq_ignore_ascii_case("error") {
        let message = ack
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "The registration endpoint reported an error.".to_string());
        warn!(%message, "endpoint rejected registration");
        return Err(RegistrationError::Rejected { message });
    }
    debug!(result = %ack.result, "registration acknowledged");
    Ok(())
}

impl Transmitter for RegistrationClient {
    type Error = RegistrationError;

    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    async fn transmit(&self, payload: &RegistrationPayload) -> Result<()> {
        self.submit(payload).await
    }
}
