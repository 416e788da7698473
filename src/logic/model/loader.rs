//! Model Loader - File-backed model source
//!
//! Loads JSON artifacts from disk once at startup.
//! A missing or broken artifact is not fatal: it is logged and the
//! engine runs without that classifier.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::linear::LinearTextModel;
use super::traits::{EmailClassifier, ModelSource, UrlClassifier};
use crate::config::Config;
use crate::error::LoadError;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub classes: Vec<String>,
    pub sha256: String,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// A loaded model and where it came from
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub model: Arc<LinearTextModel>,
    pub metadata: ModelMetadata,
}

// ============================================================================
// LOADING
// ============================================================================

/// Load and validate a model artifact, optionally pinning its SHA-256
pub fn load_model(path: &Path, expected_sha256: Option<&str>) -> Result<LoadedModel, LoadError> {
    log::info!("Loading model from: {}", path.display());

    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let actual = hex::encode(Sha256::digest(&bytes));

    if let Some(expected) = expected_sha256 {
        if !expected.trim().eq_ignore_ascii_case(&actual) {
            return Err(LoadError::ChecksumMismatch {
                expected: expected.trim().to_lowercase(),
                actual,
            });
        }
    }

    let model: LinearTextModel = serde_json::from_slice(&bytes)?;
    model.validate()?;

    let metadata = ModelMetadata {
        model_path: path.display().to_string(),
        classes: model.classes.clone(),
        sha256: actual,
        loaded_at: chrono::Utc::now(),
    };

    Ok(LoadedModel {
        model: Arc::new(model),
        metadata,
    })
}

/// Load a model, logging instead of failing
pub fn safe_load(path: &Path, expected_sha256: Option<&str>, name: &str) -> Option<LoadedModel> {
    match load_model(path, expected_sha256) {
        Ok(loaded) => {
            log::info!("✅ Loaded {} ({} classes)", name, loaded.metadata.classes.len());
            Some(loaded)
        }
        Err(e) => {
            log::warn!("❌ Failed to load {}: {}", name, e);
            None
        }
    }
}

// ============================================================================
// FILE MODEL SOURCE
// ============================================================================

/// Model source reading both artifacts from the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FileModelSource {
    url: Option<LoadedModel>,
    email: Option<LoadedModel>,
}

impl FileModelSource {
    /// Load both artifacts; each one may independently be absent
    pub fn load(
        url_path: impl Into<PathBuf>,
        url_sha256: Option<&str>,
        email_path: impl Into<PathBuf>,
        email_sha256: Option<&str>,
    ) -> Self {
        let url_path = url_path.into();
        let email_path = email_path.into();
        Self {
            url: safe_load(&url_path, url_sha256, "URL Model"),
            email: safe_load(&email_path, email_sha256, "Email Model"),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::load(
            config.url_model_path.clone(),
            config.url_model_sha256.as_deref(),
            config.email_model_path.clone(),
            config.email_model_sha256.as_deref(),
        )
    }

    pub fn url_metadata(&self) -> Option<&ModelMetadata> {
        self.url.as_ref().map(|m| &m.metadata)
    }

    pub fn email_metadata(&self) -> Option<&ModelMetadata> {
        self.email.as_ref().map(|m| &m.metadata)
    }
}

impl ModelSource for FileModelSource {
    fn url_model(&self) -> Option<Arc<dyn UrlClassifier>> {
        self.url
            .as_ref()
            .map(|m| m.model.clone() as Arc<dyn UrlClassifier>)
    }

    fn email_model(&self) -> Option<Arc<dyn EmailClassifier>> {
        self.email
            .as_ref()
            .map(|m| m.model.clone() as Arc<dyn EmailClassifier>)
    }
}

// ============================================================================
// TESTS
// ============================================================================
