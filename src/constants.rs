//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a default model location, only edit this file.

/// Default URL model artifact (relative to the working directory)
pub const DEFAULT_URL_MODEL_PATH: &str = "url_phishing_model.json";

/// Default email model artifact
pub const DEFAULT_EMAIL_MODEL_PATH: &str = "email_phishing_model.json";

/// Default per-invocation classifier timeout (milliseconds)
pub const DEFAULT_MODEL_TIMEOUT_MS: u64 = 2000;

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "PhishSniff";

// ============================================
// Environment variable names
// ============================================

pub const ENV_URL_MODEL: &str = "PHISHSNIFF_URL_MODEL";
pub const ENV_EMAIL_MODEL: &str = "PHISHSNIFF_EMAIL_MODEL";
pub const ENV_URL_MODEL_SHA256: &str = "PHISHSNIFF_URL_MODEL_SHA256";
pub const ENV_EMAIL_MODEL_SHA256: &str = "PHISHSNIFF_EMAIL_MODEL_SHA256";
pub const ENV_MODEL_TIMEOUT_MS: &str = "PHISHSNIFF_MODEL_TIMEOUT_MS";
pub const ENV_LOG: &str = "PHISHSNIFF_LOG";
