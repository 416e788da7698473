//! Classification Orchestrator
//!
//! Input: raw text. Output: Verdict.
//! Only `EmptyInput` ever leaves this module; every classifier failure,
//! panics included, is absorbed into the heuristic fallback (URL) or an
//! UNKNOWN verdict (email).

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{AppResult, ClassifierError, ClassifyError};
use crate::logic::model::{EmailClassifier, ModelSource, UrlClassifier};

use super::adapter::{try_email_model, try_url_model};
use super::heuristic::heuristic_score;
use super::shape::classify_shape;
use super::types::{ClassifierOutcome, ShapeLabel, Verdict};

type Attempt = Option<Result<ClassifierOutcome, ClassifierError>>;

// ============================================================================
// ENGINE
// ============================================================================

/// Stateless dispatcher over read-only classifier handles
#[derive(Clone, Default)]
pub struct PhishingEngine {
    url_model: Option<Arc<dyn UrlClassifier>>,
    email_model: Option<Arc<dyn EmailClassifier>>,
}

impl std::fmt::Debug for PhishingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhishingEngine")
            .field("url_model", &self.url_model.is_some())
            .field("email_model", &self.email_model.is_some())
            .finish()
    }
}

impl PhishingEngine {
    pub fn new(
        url_model: Option<Arc<dyn UrlClassifier>>,
        email_model: Option<Arc<dyn EmailClassifier>>,
    ) -> Self {
        Self {
            url_model,
            email_model,
        }
    }

    pub fn from_source(source: &dyn ModelSource) -> Self {
        Self::new(source.url_model(), source.email_model())
    }

    pub fn has_url_model(&self) -> bool {
        self.url_model.is_some()
    }

    pub fn has_email_model(&self) -> bool {
        self.email_model.is_some()
    }

    /// Classify `text` as a URL or an email and return a verdict
    pub fn classify(&self, text: &str) -> AppResult<Verdict> {
        let text = prepare(text)?;
        let shape = classify_shape(text);
        log::debug!("Input classified as {}", shape);

        let verdict = match shape {
            ShapeLabel::Url => {
                let attempt = self
                    .url_model
                    .as_ref()
                    .map(|model| guarded(|| try_url_model(model.as_ref(), text)));
                url_verdict(text, attempt)
            }
            ShapeLabel::Email => {
                let attempt = self
                    .email_model
                    .as_ref()
                    .map(|model| guarded(|| try_email_model(model.as_ref(), text)));
                email_verdict(attempt)
            }
        };

        Ok(verdict)
    }

    /// Same as `classify`, but each classifier call runs on the blocking
    /// pool and is abandoned after `timeout`. A timeout counts as a failure.
    pub async fn classify_with_timeout(&self, text: &str, timeout: Duration) -> AppResult<Verdict> {
        let text = prepare(text)?;
        let shape = classify_shape(text);
        log::debug!("Input classified as {} (timeout {:?})", shape, timeout);

        let verdict = match shape {
            ShapeLabel::Url => {
                let attempt = match &self.url_model {
                    Some(model) => {
                        let model = Arc::clone(model);
                        let owned = text.to_string();
                        Some(run_blocking(timeout, move || guarded(|| try_url_model(model.as_ref(), &owned))).await)
                    }
                    None => None,
                };
                url_verdict(text, attempt)
            }
            ShapeLabel::Email => {
                let attempt = match &self.email_model {
                    Some(model) => {
                        let model = Arc::clone(model);
                        let owned = text.to_string();
                        Some(run_blocking(timeout, move || guarded(|| try_email_model(model.as_ref(), &owned))).await)
                    }
                    None => None,
                };
                email_verdict(attempt)
            }
        };

        Ok(verdict)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn prepare(text: &str) -> Result<&str, ClassifyError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ClassifyError::EmptyInput);
    }
    Ok(text)
}

fn url_verdict(text: &str, attempt: Attempt) -> Verdict {
    match attempt {
        Some(Ok(outcome)) => return Verdict::from_outcome(ShapeLabel::Url, outcome),
        Some(Err(e)) => log::warn!("⚠️ URL model error: {} - using heuristic", e),
        None => log::debug!("No URL model loaded - using heuristic"),
    }
    Verdict::from_heuristic(ShapeLabel::Url, heuristic_score(text))
}

fn email_verdict(attempt: Attempt) -> Verdict {
    match attempt {
        Some(Ok(outcome)) => return Verdict::from_outcome(ShapeLabel::Email, outcome),
        Some(Err(e)) => log::warn!("⚠️ Email model error: {}", e),
        None => log::debug!("No email model loaded - cannot classify"),
    }
    Verdict::unknown(ShapeLabel::Email)
}

/// Run one classifier attempt, turning a panic into `Invocation`
fn guarded<F>(attempt: F) -> Result<ClassifierOutcome, ClassifierError>
where
    F: FnOnce() -> Result<ClassifierOutcome, ClassifierError>,
{
    panic::catch_unwind(AssertUnwindSafe(attempt)).unwrap_or_else(|payload| {
        Err(ClassifierError::Invocation(format!(
            "classifier panicked: {}",
            panic_message(payload.as_ref())
        )))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

async fn run_blocking<F>(timeout: Duration, f: F) -> Result<ClassifierOutcome, ClassifierError>
where
    F: FnOnce() -> Result<ClassifierOutcome, ClassifierError> + Send + 'static,
{
    match tokio::time::timeout(timeout, tokio::task::spawn_blocking(f)).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => Err(ClassifierError::Invocation(format!("classifier task failed: {}", e))),
        Err(_) => Err(ClassifierError::Timeout(timeout.as_millis() as u64)),
    }
}
