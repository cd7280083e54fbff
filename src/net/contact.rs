//! Contact form submission to a third-party email relay.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`submit`] returns [`SubmitError::Unavailable`] since the
//! relays are only reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed [`SubmitError`] for logging, but the page shows one
//! generic retry prompt whatever the cause. There is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::RelayConfig;

/// EmailJS REST endpoint for template sends.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Phone placeholder sent to EmailJS templates when none was given.
const EMAILJS_NO_PHONE: &str = "Not provided";

/// Why a form draft cannot be sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("please fill in your {0}")]
    Missing(&'static str),

    #[error("please enter a valid email address")]
    InvalidEmail,
}

/// Why a relay call failed.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode relay payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("relay unreachable: {0}")]
    Network(String),

    #[error("relay answered with status {0}")]
    Status(u16),

    #[error("relay calls are only available in the browser")]
    Unavailable,
}

/// A validated contact form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
}

impl ContactMessage {
    /// Trim and validate raw form fields. An empty phone becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError`] when name, email, or message is blank, or
    /// the email has no `@`.
    pub fn new(name: &str, email: &str, phone: &str, message: &str) -> Result<Self, ContactError> {
        let name = required(name, "name")?;
        let email = required(email, "email")?;
        if !email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        let message = required(message, "message")?;
        let phone = Some(phone.trim()).filter(|p| !p.is_empty()).map(str::to_owned);
        Ok(Self {
            name,
            email,
            phone,
            message,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn required(raw: &str, field: &'static str) -> Result<String, ContactError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ContactError::Missing(field))
    } else {
        Ok(trimmed.to_owned())
    }
}

#[derive(Serialize)]
struct FormspreePayload<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: EmailJsParams<'a>,
}

#[derive(Serialize)]
struct EmailJsParams<'a> {
    to_email: &'a str,
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    phone: &'a str,
}

/// A fully-formed relay call: target URL and JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayRequest {
    pub url: String,
    pub body: Value,
}

/// Shape the request for the configured relay.
///
/// # Errors
///
/// Returns [`SubmitError::Encode`] if the payload cannot be serialized.
pub fn relay_request(relay: &RelayConfig, message: &ContactMessage) -> Result<RelayRequest, SubmitError> {
    match relay {
        RelayConfig::Formspree { endpoint } => {
            let body = serde_json::to_value(FormspreePayload {
                name: message.name(),
                email: message.email(),
                phone: message.phone().unwrap_or_default(),
                message: message.message(),
            })?;
            Ok(RelayRequest {
                url: endpoint.clone(),
                body,
            })
        }
        RelayConfig::EmailJs(cfg) => {
            let body = serde_json::to_value(EmailJsPayload {
                service_id: &cfg.service_id,
                template_id: &cfg.template_id,
                user_id: &cfg.public_key,
                template_params: EmailJsParams {
                    to_email: &cfg.to_email,
                    from_name: message.name(),
                    from_email: message.email(),
                    message: message.message(),
                    phone: message.phone().unwrap_or(EMAILJS_NO_PHONE),
                },
            })?;
            Ok(RelayRequest {
                url: EMAILJS_SEND_URL.to_owned(),
                body,
            })
        }
    }
}

/// Post `message` to the configured relay. Any non-2xx answer is a failure.
///
/// # Errors
///
/// Returns [`SubmitError`] on encoding, network, or status failure, and
/// [`SubmitError::Unavailable`] outside the browser.
pub async fn submit(relay: &RelayConfig, message: &ContactMessage) -> Result<(), SubmitError> {
    let request = relay_request(relay, message)?;
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&request.url)
            .header("Accept", "application/json")
            .json(&request.body)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(SubmitError::Status(resp.status()));
        }
        log::info!("contact form delivered via {:?}", relay.kind());
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(SubmitError::Unavailable)
    }
}
