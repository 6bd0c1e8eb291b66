use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::contact::form::ContactSubmission;

/// Template parameters the relay substitutes into the outgoing email.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RelayPayload {
    pub to_name: String,
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    #[serde(rename = "g-recaptcha-response")]
    pub recaptcha_response: String,
}

impl RelayPayload {
    /// Returns `None` without a verification token; the relay would reject it anyway.
    pub fn from_submission(submission: &ContactSubmission) -> Option<Self> {
        if submission.token.is_empty() {
            return None;
        }
        Some(Self {
            to_name: config::RELAY_RECIPIENT.to_string(),
            from_name: submission.name.clone(),
            from_email: submission.email.clone(),
            message: submission.message.clone(),
            recaptcha_response: submission.token.clone(),
        })
    }
}

#[derive(Serialize, Debug)]
pub struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a RelayPayload,
}

impl<'a> RelayRequest<'a> {
    pub fn new(template_params: &'a RelayPayload) -> Self {
        Self {
            service_id: config::RELAY_SERVICE_ID,
            template_id: config::RELAY_TEMPLATE_ID,
            user_id: config::RELAY_PUBLIC_KEY,
            template_params,
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    #[error("failed to encode relay request: {0}")]
    Encode(String),
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sends one message through the relay. Only a 200 counts as delivered.
pub async fn send_email(payload: &RelayPayload) -> Result<(), DispatchError> {
    let request = Request::post(config::RELAY_URL)
        .json(&RelayRequest::new(payload))
        .map_err(|e| DispatchError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| DispatchError::Transport(e.to_string()))?;

    let status = response.status();
    if status == 200 {
        info!("Relay accepted contact message");
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    warn!("Relay responded with status {}: {}", status, body);
    Err(DispatchError::Rejected { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Tiger Woods".to_string(),
            email: "tiger@example.com".to_string(),
            message: "Looking for a milled mallet with a custom face.".to_string(),
            token: "abc123".to_string(),
        }
    }

    #[test]
    fn payload_requires_token() {
        let mut submission = submission();
        submission.token.clear();
        assert_eq!(RelayPayload::from_submission(&submission), None);
    }

    #[test]
    fn payload_uses_relay_field_names() {
        let payload = RelayPayload::from_submission(&submission()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "to_name": "Chase",
                "from_name": "Tiger Woods",
                "from_email": "tiger@example.com",
                "message": "Looking for a milled mallet with a custom face.",
                "g-recaptcha-response": "abc123",
            })
        );
    }

    #[test]
    fn request_carries_service_and_template() {
        let payload = RelayPayload::from_submission(&submission()).unwrap();
        let value = serde_json::to_value(RelayRequest::new(&payload)).unwrap();
        assert_eq!(value["service_id"], "origin_golf_contact");
        assert_eq!(value["template_id"], "og_contact_template");
        assert_eq!(value["user_id"], config::RELAY_PUBLIC_KEY);
        assert_eq!(value["template_params"]["from_name"], "Tiger Woods");
    }

    #[test]
    fn rejected_error_mentions_status() {
        let err = DispatchError::Rejected {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "relay rejected message with status 500: Internal Server Error"
        );
    }
}
