//! Classifier Capabilities
//!
//! The engine only sees these traits. How a model was trained, stored or
//! fetched stays behind them.

use std::sync::Arc;

use crate::error::ClassifierError;

// ============================================================================
// CLASSIFIER TRAITS
// ============================================================================

/// URL classifier: binary label, class 0 = safe, class 1 = phishing
pub trait UrlClassifier: Send + Sync {
    fn predict_label(&self, text: &str) -> Result<i64, ClassifierError>;
    fn predict_probabilities(&self, text: &str) -> Result<Vec<f64>, ClassifierError>;
}

/// Email classifier: named classes, probabilities parallel to `class_names`
pub trait EmailClassifier: Send + Sync {
    fn predict_label(&self, text: &str) -> Result<String, ClassifierError>;
    fn predict_probabilities(&self, text: &str) -> Result<Vec<f64>, ClassifierError>;
    fn class_names(&self) -> Result<Vec<String>, ClassifierError>;
}

// ============================================================================
// MODEL SOURCE
// ============================================================================

/// Where classifier handles come from (files, a download cache, test mocks)
pub trait ModelSource {
    fn url_model(&self) -> Option<Arc<dyn UrlClassifier>>;
    fn email_model(&self) -> Option<Arc<dyn EmailClassifier>>;
}
