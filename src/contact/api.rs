use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use crate::contact::phone;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub whatsapp: String,
    #[serde(rename = "acceptCommunication")]
    pub accept_communication: bool,
}

/// Body of `POST /api/contact`, success and failure alike.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub contact_id: Option<String>,
    // FastAPI puts a list of field errors here on 422.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ContactResponse {
    fn server_message(&self) -> Option<String> {
        let detail = self.detail.as_ref().and_then(Value::as_str);
        detail
            .or(self.message.as_deref())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactReceipt {
    pub contact_id: String,
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HealthProbe {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Could not reach the contact API: {0}")]
    Transport(String),

    #[error("Contact API rejected the submission ({status:?}): {message:?}")]
    Rejected {
        status: Option<u16>,
        message: Option<String>,
    },

    #[error("Malformed contact API exchange: {0}")]
    Malformed(String),
}

pub trait ContactApi {
    fn submit<'a>(
        &'a self,
        request: &'a ContactRequest,
    ) -> LocalBoxFuture<'a, Result<ContactReceipt, ApiError>>;

    fn health(&self) -> LocalBoxFuture<'_, Result<HealthProbe, ApiError>>;
}

/// Decides what a completed HTTP exchange means. `body` is `None` when the
/// response could not be decoded as JSON.
pub fn classify_response(
    status: u16,
    body: Option<ContactResponse>,
) -> Result<ContactReceipt, ApiError> {
    let http_ok = (200..300).contains(&status);

    match body {
        Some(body) if http_ok && body.success => {
            let message = body.server_message();
            match body.contact_id.filter(|id| !id.trim().is_empty()) {
                Some(contact_id) => Ok(ContactReceipt { contact_id, message }),
                None => Err(ApiError::Malformed(
                    "success response without contact_id".to_string(),
                )),
            }
        }
        Some(body) => Err(ApiError::Rejected {
            status: Some(status),
            message: body.server_message(),
        }),
        None => Err(ApiError::Rejected {
            status: Some(status),
            message: None,
        }),
    }
}

pub struct HttpContactApi {
    contact_url: String,
    health_url: String,
}

impl HttpContactApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            contact_url: config.contact_url(),
            health_url: config.health_url(),
        }
    }

    async fn post_contact(&self, request: &ContactRequest) -> Result<ContactReceipt, ApiError> {
        info!(
            "Sending contact for {} to {}",
            phone::redact(&request.whatsapp),
            self.contact_url
        );

        let response = Request::post(&self.contact_url)
            .header("Accept", "application/json")
            .json(request)
            .map_err(|e| ApiError::Malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("Network error: {}", e);
                ApiError::Transport(e.to_string())
            })?;

        let status = response.status();
        info!("Contact API answered with status {}", status);

        let body = match response.json::<ContactResponse>().await {
            Ok(body) => Some(body),
            Err(e) => {
                error!("Could not decode contact API response: {}", e);
                None
            }
        };

        classify_response(status, body).map_err(|e| {
            error!("{}", e);
            e
        })
    }

    async fn get_health(&self) -> Result<HealthProbe, ApiError> {
        let response = Request::get(&self.health_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok(HealthProbe { status, body })
    }
}

impl ContactApi for HttpContactApi {
    fn submit<'a>(
        &'a self,
        request: &'a ContactRequest,
    ) -> LocalBoxFuture<'a, Result<ContactReceipt, ApiError>> {
        Box::pin(self.post_contact(request))
    }

    fn health(&self) -> LocalBoxFuture<'_, Result<HealthProbe, ApiError>> {
        Box::pin(self.get_health())
    }
}
