use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fields::FormFields;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Template parameters handed to the relay: the visible fields plus the
/// submission metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub date: String,
    pub address: String,
}

impl EmailPayload {
    pub fn new(fields: FormFields, date: String, address: String) -> Self {
        let FormFields {
            name,
            email,
            subject,
            message,
        } = fields;
        Self {
            name,
            email,
            subject,
            message,
            date,
            address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Values stamped in by `build.rs`, overridable with the
    /// `CONTACT_RELAY_*` environment variables at build time.
    pub fn from_build_env() -> Self {
        Self {
            service_id: env!("CONTACT_RELAY_SERVICE_ID").to_string(),
            template_id: env!("CONTACT_RELAY_TEMPLATE_ID").to_string(),
            public_key: env!("CONTACT_RELAY_PUBLIC_KEY").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayAck {
    pub status: u16,
    pub text: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Network(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("email relay is only reachable from the browser")]
    Unavailable,
}

/// Delivers a contact message to the third-party relay.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, payload: &EmailPayload) -> Result<RelayAck, RelayError>;
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

/// EmailJS REST client.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    fn request<'a>(&'a self, payload: &'a EmailPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        }
    }
}

impl EmailRelay for EmailJsRelay {
    #[cfg(feature = "hydrate")]
    async fn send(&self, payload: &EmailPayload) -> Result<RelayAck, RelayError> {
        use gloo_net::http::Request;

        let response = Request::post(EMAILJS_SEND_URL)
            .json(&self.request(payload))
            .map_err(|e| RelayError::Network(format!("couldn't encode request: {e}")))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if response.ok() {
            Ok(RelayAck { status, text })
        } else {
            Err(RelayError::Rejected { status, body: text })
        }
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send(&self, payload: &EmailPayload) -> Result<RelayAck, RelayError> {
        log::debug!(
            "not relaying {} outside the browser",
            serde_json::to_string(&self.request(payload)).unwrap_or_default()
        );
        Err(RelayError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> EmailPayload {
        EmailPayload::new(
            FormFields {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Hello".to_string(),
                message: "Let's build an app".to_string(),
            },
            "Tuesday, March 4, 2025 at 3:45 PM (PKT)".to_string(),
            "Lahore, Pakistan".to_string(),
        )
    }

    #[test]
    fn test_send_request_shape() {
        let relay = EmailJsRelay::new(RelayConfig {
            service_id: "service_a".to_string(),
            template_id: "template_b".to_string(),
            public_key: "key_c".to_string(),
        });
        let payload = payload();
        let body = serde_json::to_value(relay.request(&payload)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_a",
                "template_id": "template_b",
                "user_id": "key_c",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "subject": "Hello",
                    "message": "Let's build an app",
                    "date": "Tuesday, March 4, 2025 at 3:45 PM (PKT)",
                    "address": "Lahore, Pakistan",
                }
            })
        );
    }

    #[test]
    fn test_build_env_config_is_populated() {
        let config = RelayConfig::from_build_env();
        assert!(!config.service_id.is_empty());
        assert!(!config.template_id.is_empty());
        assert!(!config.public_key.is_empty());
    }

    #[cfg(not(feature = "hydrate"))]
    #[tokio::test]
    async fn test_relay_is_unavailable_off_browser() {
        let relay = EmailJsRelay::new(RelayConfig::from_build_env());
        assert_eq!(relay.send(&payload()).await, Err(RelayError::Unavailable));
    }
}
