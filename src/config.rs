//! Build-time site configuration.
//!
//! The site is served as static files, so there is no runtime environment to
//! read. Settings are baked in at compile time through `option_env!` and
//! default to placeholder relay credentials.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `FOLIO_RELAY` | `formspree` (default) or `emailjs` |
//! | `FOLIO_FORMSPREE_ENDPOINT` | Formspree form URL |
//! | `FOLIO_EMAILJS_SERVICE_ID` | EmailJS service id |
//! | `FOLIO_EMAILJS_TEMPLATE_ID` | EmailJS template id |
//! | `FOLIO_EMAILJS_PUBLIC_KEY` | EmailJS public key |
//! | `FOLIO_CONTACT_TO` | recipient address passed to EmailJS |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use thiserror::Error;

const DEFAULT_FORMSPREE_ENDPOINT: &str = "https://formspree.io/f/YOUR_FORM_ID";
const DEFAULT_EMAILJS_SERVICE_ID: &str = "YOUR_SERVICE_ID";
const DEFAULT_EMAILJS_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
const DEFAULT_EMAILJS_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";
const DEFAULT_CONTACT_TO: &str = "your-email@example.com";

/// How long success/error status lines stay visible.
pub const STATUS_HIDE_MS: u32 = 5_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown relay {0:?}; expected \"formspree\" or \"emailjs\"")]
    UnknownRelay(String),
}

/// Which third-party relay receives contact form submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RelayKind {
    #[default]
    Formspree,
    EmailJs,
}

impl FromStr for RelayKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formspree" => Ok(Self::Formspree),
            "emailjs" => Ok(Self::EmailJs),
            _ => Err(ConfigError::UnknownRelay(s.to_owned())),
        }
    }
}

/// Credentials for the EmailJS REST endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_email: String,
}

/// The selected relay with its settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelayConfig {
    Formspree { endpoint: String },
    EmailJs(EmailJsConfig),
}

impl RelayConfig {
    #[must_use]
    pub fn kind(&self) -> RelayKind {
        match self {
            Self::Formspree { .. } => RelayKind::Formspree,
            Self::EmailJs(_) => RelayKind::EmailJs,
        }
    }
}

/// Site-wide settings, provided to components as context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub relay: RelayConfig,
    pub status_hide_ms: u32,
}

impl SiteConfig {
    /// Build from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRelay`] when `FOLIO_RELAY` names no
    /// known relay.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_owned());

        let kind = match lookup("FOLIO_RELAY") {
            Some(raw) => raw.parse()?,
            None => RelayKind::default(),
        };
        let relay = match kind {
            RelayKind::Formspree => RelayConfig::Formspree {
                endpoint: value("FOLIO_FORMSPREE_ENDPOINT", DEFAULT_FORMSPREE_ENDPOINT),
            },
            RelayKind::EmailJs => RelayConfig::EmailJs(EmailJsConfig {
                service_id: value("FOLIO_EMAILJS_SERVICE_ID", DEFAULT_EMAILJS_SERVICE_ID),
                template_id: value("FOLIO_EMAILJS_TEMPLATE_ID", DEFAULT_EMAILJS_TEMPLATE_ID),
                public_key: value("FOLIO_EMAILJS_PUBLIC_KEY", DEFAULT_EMAILJS_PUBLIC_KEY),
                to_email: value("FOLIO_CONTACT_TO", DEFAULT_CONTACT_TO),
            }),
        };

        Ok(Self {
            relay,
            status_hide_ms: STATUS_HIDE_MS,
        })
    }

    /// Settings baked in at compile time. An invalid relay selector is
    /// logged and replaced by the default relay.
    #[must_use]
    pub fn from_build_env() -> Self {
        match Self::from_lookup(|name| build_env(name).map(str::to_owned)) {
            Ok(config) => config,
            Err(err) => {
                log::error!("site config: {err}; falling back to defaults");
                Self::default()
            }
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relay: RelayConfig::Formspree {
                endpoint: DEFAULT_FORMSPREE_ENDPOINT.to_owned(),
            },
            status_hide_ms: STATUS_HIDE_MS,
        }
    }
}

fn build_env(name: &str) -> Option<&'static str> {
    match name {
        "FOLIO_RELAY" => option_env!("FOLIO_RELAY"),
        "FOLIO_FORMSPREE_ENDPOINT" => option_env!("FOLIO_FORMSPREE_ENDPOINT"),
        "FOLIO_EMAILJS_SERVICE_ID" => option_env!("FOLIO_EMAILJS_SERVICE_ID"),
        "FOLIO_EMAILJS_TEMPLATE_ID" => option_env!("FOLIO_EMAILJS_TEMPLATE_ID"),
        "FOLIO_EMAILJS_PUBLIC_KEY" => option_env!("FOLIO_EMAILJS_PUBLIC_KEY"),
        "FOLIO_CONTACT_TO" => option_env!("FOLIO_CONTACT_TO"),
        _ => None,
    }
}
