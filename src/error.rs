/// All errors that can occur while delivering a registration to the endpoint.
#[derive(thiserror::Error, Debug)]
pub enum RegistrationError {
    /// The HTTP client could not be built from the configuration.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Endpoint returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The endpoint acknowledged the request but reported a failure.
    #[error("{message}")]
    Rejected { message: String },

    /// The payment screenshot could not be read.
    #[error("failed to read screenshot {name}: {source}")]
    Screenshot {
        name: String,
        source: std::io::Error,
    },

    /// The payload could not be serialized to JSON.
    #[error("failed to serialize registration: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistrationError>;

pub(crate) const SUBMIT_FALLBACK: &str = "Failed to submit form. Please try again.";

/// Why a confirmed registration ended in the error state.
///
/// Every variant is scoped to one modal session and is recoverable with
/// "try again" or by closing the modal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The destination address is still the placeholder.
    #[error("Setup is incomplete. Please add a valid Google Apps Script URL.")]
    EndpointUnconfigured,

    /// No payment screenshot was attached at confirm time.
    #[error("Payment screenshot is required.")]
    MissingAttachment,

    /// Encoding or transmission failed.
    #[error("{0}")]
    TransmissionFailure(String),
}

impl SubmissionError {
    /// Wrap any transport error, falling back to a generic message when the
    /// error renders as an empty string.
    pub fn transmission(err: impl std::error::Error) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Self::TransmissionFailure(SUBMIT_FALLBACK.to_string())
        } else {
            Self::TransmissionFailure(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(thiserror::Error, Debug)]
    #[error("")]
    struct Silent;

    #[test]
    fn test_precondition_messages() {
        assert_eq!(
            SubmissionError::MissingAttachment.to_string(),
            "Payment screenshot is required."
        );
        assert!(SubmissionError::EndpointUnconfigured
            .to_string()
            .starts_with("Setup is incomplete"));
    }

    #[test]
    fn test_empty_transport_error_uses_fallback() {
        let err = SubmissionError::transmission(Silent);
        assert_eq!(err.to_string(), SUBMIT_FALLBACK);
    }

    #[test]
    fn test_rejected_shows_endpoint_message() {
        let err = RegistrationError::Rejected {
            message: "Sheet is locked".to_string(),
        };
        let err = SubmissionError::transmission(err);
        assert_eq!(err, SubmissionError::TransmissionFailure("Sheet is locked".into()));
    }
}
