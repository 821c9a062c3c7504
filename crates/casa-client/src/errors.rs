//! CRM delivery error types

use thiserror::Error;

/// CRM delivery errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// A single CRM call failed, in transport or with a non-2xx
    /// status. Transport failures carry status 0 and the underlying
    /// request error.
    #[error("Request failed with status code {status}")]
    Http {
        status: u16,
        body: Option<String>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The retry budget was spent without a successful delivery. Only
    /// the most recent HTTP failure is preserved, not the history.
    #[error("Maximum retry attempts exceeded after {count} retries")]
    RetriesExhausted {
        count: u32,
        #[source]
        last: Box<ClientError>,
    },

    /// Rejected before any network I/O: the customer identifier is
    /// missing or zero.
    #[error("Invalid customer id: {customer_id}")]
    InvalidCustomer { customer_id: i64 },

    /// The retry policy cannot make a single attempt.
    #[error("Invalid retry policy: {reason}")]
    InvalidRetryPolicy { reason: String },

    /// The configured CRM base URL does not parse.
    #[error("Invalid CRM base url '{url}'")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The CRM accepted the property but its response body could not
    /// be decoded.
    #[error("Failed to decode CRM response")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Status code of an HTTP failure; `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_reports_status() {
        let error = ClientError::Http {
            status: 422,
            body: Some("Unprocessable Entity".to_string()),
            source: None,
        };
        assert_eq!(error.status(), Some(422));
        assert_eq!(error.to_string(), "Request failed with status code 422");
    }

    #[test]
    fn exhaustion_preserves_only_the_last_failure() {
        let error = ClientError::RetriesExhausted {
            count: 5,
            last: Box::new(ClientError::Http {
                status: 500,
                body: None,
                source: None,
            }),
        };
        assert_eq!(
            error.to_string(),
            "Maximum retry attempts exceeded after 5 retries"
        );
        match error {
            ClientError::RetriesExhausted { last, .. } => assert_eq!(last.status(), Some(500)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn non_http_errors_have_no_status() {
        assert_eq!(
            ClientError::InvalidCustomer { customer_id: 0 }.status(),
            None
        );
    }
}
