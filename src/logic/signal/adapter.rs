//! Classifier Adapters
//!
//! Turn raw classifier output (labels, probability vectors, class lists)
//! into a `ClassifierOutcome`. Any error or malformed output is returned
//! as `ClassifierError` for the orchestrator to absorb.

use crate::error::ClassifierError;
use crate::logic::model::{EmailClassifier, UrlClassifier};

use super::types::ClassifierOutcome;

/// Label the URL classifier uses for phishing
pub const URL_PHISHING_LABEL: i64 = 1;

/// Class-name marker for the phishing class of an email classifier
pub const PHISH_MARKER: &str = "phish";

/// Email phishing index when no class name carries the marker
pub const DEFAULT_PHISHING_INDEX: usize = 1;

// ============================================================================
// URL
// ============================================================================

pub fn try_url_model(
    classifier: &dyn UrlClassifier,
    text: &str,
) -> Result<ClassifierOutcome, ClassifierError> {
    let label = classifier.predict_label(text)?;
    let proba = classifier.predict_probabilities(text)?;

    // A single-entry vector is read as the phishing probability.
    let phishing_probability = match proba.as_slice() {
        [] => {
            return Err(ClassifierError::Malformed(
                "empty probability vector".to_string(),
            ))
        }
        [only] => *only,
        [_, phishing, ..] => *phishing,
    };

    let phishing_percent = to_percent(phishing_probability)?;
    Ok(ClassifierOutcome::from_phishing_percent(
        label == URL_PHISHING_LABEL,
        phishing_percent,
    ))
}

// ============================================================================
// EMAIL
// ============================================================================

/// First class whose lower-cased name contains "phish", else index 1
pub fn phishing_class_index(classes: &[String]) -> usize {
    classes
        .iter()
        .position(|c| c.to_lowercase().contains(PHISH_MARKER))
        .unwrap_or(DEFAULT_PHISHING_INDEX)
}

/// Category follows the predicted label; confidence follows the
/// probability at the phishing index. The two are read independently.
pub fn try_email_model(
    classifier: &dyn EmailClassifier,
    text: &str,
) -> Result<ClassifierOutcome, ClassifierError> {
    let label = classifier.predict_label(text)?;
    let proba = classifier.predict_probabilities(text)?;
    let classes = classifier.class_names()?;

    if classes.is_empty() {
        return Err(ClassifierError::Malformed("empty class list".to_string()));
    }

    let idx = phishing_class_index(&classes);
    let phishing_probability = proba.get(idx).copied().ok_or_else(|| {
        ClassifierError::Malformed(format!(
            "no probability at phishing index {} (vector has {})",
            idx,
            proba.len()
        ))
    })?;

    let phishing_percent = to_percent(phishing_probability)?;
    let is_phishing = label.to_lowercase().starts_with(PHISH_MARKER);

    Ok(ClassifierOutcome::from_phishing_percent(is_phishing, phishing_percent))
}

fn to_percent(probability: f64) -> Result<f64, ClassifierError> {
    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(ClassifierError::Malformed(format!(
            "probability {} outside [0, 1]",
            probability
        )));
    }
    Ok(probability * 100.0)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::signal::tests::{MockEmail, MockUrl};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_url_phishing_uses_index_one() {
        let model = MockUrl::answering(1, vec![0.1, 0.9]);
        let outcome = try_url_model(&model, "http://x.xyz").unwrap();
        assert!(outcome.is_phishing);
        assert!(approx(outcome.confidence_percent, 90.0));
    }

    #[test]
    fn test_url_safe_confidence_is_complement() {
        let model = MockUrl::answering(0, vec![0.8, 0.2]);
        let outcome = try_url_model(&model, "http://x.com").unwrap();
        assert!(!outcome.is_phishing);
        assert!(approx(outcome.confidence_percent, 80.0));
    }

    #[test]
    fn test_url_single_entry_vector_is_phishing_probability() {
        let model = MockUrl::answering(1, vec![0.7]);
        let outcome = try_url_model(&model, "x.com").unwrap();
        assert!(approx(outcome.confidence_percent, 70.0));
    }

    #[test]
    fn test_url_empty_vector_is_malformed() {
        let model = MockUrl::answering(1, vec![]);
        assert!(matches!(
            try_url_model(&model, "x.com"),
            Err(ClassifierError::Malformed(_))
        ));
    }

    #[test]
    fn test_url_out_of_range_probability_is_malformed() {
        let model = MockUrl::answering(1, vec![0.0, 1.5]);
        assert!(try_url_model(&model, "x.com").is_err());
        let model = MockUrl::answering(1, vec![0.0, f64::NAN]);
        assert!(try_url_model(&model, "x.com").is_err());
    }

    #[test]
    fn test_url_label_error_propagates() {
        let model = MockUrl::failing();
        assert!(matches!(
            try_url_model(&model, "x.com"),
            Err(ClassifierError::Invocation(_))
        ));
    }

    #[test]
    fn test_phishing_class_lookup() {
        let classes = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(phishing_class_index(&classes(&["Phishing Email", "Safe Email"])), 0);
        assert_eq!(phishing_class_index(&classes(&["ham", "spam"])), 1);
        assert_eq!(phishing_class_index(&classes(&["safe", "PHISH", "phishing"])), 1);
        assert_eq!(phishing_class_index(&classes(&["legit", "other", "phishy"])), 2);
    }

    #[test]
    fn test_email_phishing_class_first() {
        let model = MockEmail::answering("Phishing Email", vec![0.95, 0.05], &["Phishing Email", "Safe Email"]);
        let outcome = try_email_model(&model, "Dear user").unwrap();
        assert!(outcome.is_phishing);
        assert!(approx(outcome.confidence_percent, 95.0));
    }

    #[test]
    fn test_email_safe_label_uses_complement() {
        let model = MockEmail::answering("Safe Email", vec![0.3, 0.7], &["Phishing Email", "Safe Email"]);
        let outcome = try_email_model(&model, "Lunch at noon?").unwrap();
        assert!(!outcome.is_phishing);
        assert!(approx(outcome.confidence_percent, 70.0));
    }

    #[test]
    fn test_email_label_and_probability_read_independently() {
        // Label says safe while the phishing probability is high.
        let model = MockEmail::answering("legitimate", vec![0.4, 0.6], &["legitimate", "phishing"]);
        let outcome = try_email_model(&model, "text").unwrap();
        assert!(!outcome.is_phishing);
        assert!(approx(outcome.confidence_percent, 40.0));
    }

    #[test]
    fn test_email_default_index_without_marker() {
        let model = MockEmail::answering("spam", vec![0.25, 0.75], &["ham", "spam"]);
        let outcome = try_email_model(&model, "text").unwrap();
        // "spam" does not start with "phish"
        assert!(!outcome.is_phishing);
        assert!(approx(outcome.confidence_percent, 25.0));
    }

    #[test]
    fn test_email_empty_classes_is_malformed() {
        let model = MockEmail::answering("phishing", vec![0.5, 0.5], &[]);
        assert!(matches!(
            try_email_model(&model, "text"),
            Err(ClassifierError::Malformed(_))
        ));
    }

    #[test]
    fn test_email_short_probability_vector_is_malformed() {
        let model = MockEmail::answering("ham", vec![0.9], &["ham", "spam"]);
        assert!(try_email_model(&model, "text").is_err());
    }

    #[test]
    fn test_email_call_error_propagates() {
        let model = MockEmail::failing();
        assert!(try_email_model(&model, "text").is_err());
    }
}
