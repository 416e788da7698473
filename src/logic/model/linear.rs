//! Linear Text Model
//!
//! Bag-of-tokens linear classifier stored as a JSON artifact.
//! logits = intercept + Σ count(token) · weight(token), then softmax.
//! One artifact format serves both the URL and the email classifier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::traits::{EmailClassifier, UrlClassifier};
use crate::error::{ClassifierError, LoadError};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// How input text is split into features
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tokenizer {
    /// Lower-cased alphanumeric runs
    #[default]
    Words,
    /// Lower-cased character n-grams, `min..=max`
    CharNgrams { min: usize, max: usize },
}

/// Serialized model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearTextModel {
    /// Class names, index-aligned with `intercepts` and every weight vector
    pub classes: Vec<String>,
    pub intercepts: Vec<f64>,
    #[serde(default)]
    pub weights: HashMap<String, Vec<f64>>,
    #[serde(default)]
    pub tokenizer: Tokenizer,
}

impl LinearTextModel {
    /// Check shape consistency of a freshly deserialized artifact
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.classes.is_empty() {
            return Err(LoadError::Invalid("no classes defined".to_string()));
        }
        if self.intercepts.len() != self.classes.len() {
            return Err(LoadError::Invalid(format!(
                "{} intercepts for {} classes",
                self.intercepts.len(),
                self.classes.len()
            )));
        }
        if self.intercepts.iter().any(|v| !v.is_finite()) {
            return Err(LoadError::Invalid("non-finite intercept".to_string()));
        }
        for (token, weights) in &self.weights {
            if weights.len() != self.classes.len() {
                return Err(LoadError::Invalid(format!(
                    "token '{}' has {} weights for {} classes",
                    token,
                    weights.len(),
                    self.classes.len()
                )));
            }
            if weights.iter().any(|v| !v.is_finite()) {
                return Err(LoadError::Invalid(format!("token '{}' has a non-finite weight", token)));
            }
        }
        if let Tokenizer::CharNgrams { min, max } = self.tokenizer {
            if min == 0 || min > max {
                return Err(LoadError::Invalid(format!("bad n-gram range {}..={}", min, max)));
            }
        }
        Ok(())
    }

    /// Cheap per-call check that inference can run on this model.
    /// Fields are public, so a model need not have gone through `validate`.
    fn ensure_usable(&self) -> Result<(), ClassifierError> {
        if self.classes.is_empty() || self.intercepts.len() != self.classes.len() {
            return Err(ClassifierError::Malformed(format!(
                "{} intercepts for {} classes",
                self.intercepts.len(),
                self.classes.len()
            )));
        }
        if let Tokenizer::CharNgrams { min, max } = self.tokenizer {
            if min == 0 || min > max {
                return Err(ClassifierError::Malformed(format!(
                    "bad n-gram range {}..={}",
                    min, max
                )));
            }
        }
        Ok(())
    }

    /// Token counts for `text`
    pub fn tokenize(&self, text: &str) -> HashMap<String, usize> {
        let lowered = text.to_lowercase();
        let mut counts = HashMap::new();

        match self.tokenizer {
            Tokenizer::Words => {
                for word in lowered.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
                    *counts.entry(word.to_string()).or_insert(0) += 1;
                }
            }
            Tokenizer::CharNgrams { min, max } => {
                let chars: Vec<char> = lowered.chars().collect();
                for n in min.max(1)..=max {
                    for gram in chars.windows(n) {
                        *counts.entry(gram.iter().collect::<String>()).or_insert(0) += 1;
                    }
                }
            }
        }

        counts
    }

    /// Per-class probabilities (softmax over the linear logits)
    pub fn probabilities(&self, text: &str) -> Result<Vec<f64>, ClassifierError> {
        self.ensure_usable()?;
        let mut logits = self.intercepts.clone();

        for (token, count) in self.tokenize(text) {
            if let Some(weights) = self.weights.get(&token) {
                for (logit, w) in logits.iter_mut().zip(weights) {
                    *logit += w * count as f64;
                }
            }
        }

        Ok(softmax(&logits))
    }

    /// Index of the most probable class (first one on ties)
    pub fn predict_index(&self, text: &str) -> Result<usize, ClassifierError> {
        let probs = self.probabilities(text)?;
        probs
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i, p)),
            })
            .map(|(i, _)| i)
            .ok_or_else(|| ClassifierError::Malformed("model has no classes".to_string()))
    }
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

// ============================================================================
// CLASSIFIER IMPLEMENTATIONS
// ============================================================================

impl UrlClassifier for LinearTextModel {
    fn predict_label(&self, text: &str) -> Result<i64, ClassifierError> {
        self.predict_index(text).map(|i| i as i64)
    }

    fn predict_probabilities(&self, text: &str) -> Result<Vec<f64>, ClassifierError> {
        self.probabilities(text)
    }
}

impl EmailClassifier for LinearTextModel {
    fn predict_label(&self, text: &str) -> Result<String, ClassifierError> {
        let idx = self.predict_index(text)?;
        self.classes
            .get(idx)
            .cloned()
            .ok_or_else(|| ClassifierError::Malformed(format!("no class at index {}", idx)))
    }

    fn predict_probabilities(&self, text: &str) -> Result<Vec<f64>, ClassifierError> {
        self.probabilities(text)
    }

    fn class_names(&self) -> Result<Vec<String>, ClassifierError> {
        Ok(self.classes.clone())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn word_model() -> LinearTextModel {
        LinearTextModel {
            classes: vec!["legitimate".to_string(), "phishing".to_string()],
            intercepts: vec![0.5, -0.5],
            weights: HashMap::from([
                ("verify".to_string(), vec![0.0, 3.0]),
                ("account".to_string(), vec![0.0, 2.0]),
                ("meeting".to_string(), vec![2.0, 0.0]),
            ]),
            tokenizer: Tokenizer::Words,
        }
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = word_model();
        let probs = model.probabilities("Please verify your account now").unwrap();
        assert_eq!(probs.len(), 2);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(probs[1] > 0.9);
    }

    #[test]
    fn test_labels_follow_argmax() {
        let model = word_model();
        assert_eq!(UrlClassifier::predict_label(&model, "verify account").unwrap(), 1);
        assert_eq!(UrlClassifier::predict_label(&model, "team meeting").unwrap(), 0);
        assert_eq!(
            EmailClassifier::predict_label(&model, "VERIFY your ACCOUNT").unwrap(),
            "phishing"
        );
    }

    #[test]
    fn test_unknown_tokens_use_intercepts_only() {
        let model = word_model();
        let probs = model.probabilities("zzz qqq").unwrap();
        let expected = softmax(&[0.5, -0.5]);
        assert!((probs[0] - expected[0]).abs() < 1e-12);
    }

    #[test]
    fn test_char_ngram_tokenizer() {
        let model = LinearTextModel {
            tokenizer: Tokenizer::CharNgrams { min: 2, max: 3 },
            ..word_model()
        };
        let counts = model.tokenize("ABab");
        assert_eq!(counts.get("ab"), Some(&2));
        assert_eq!(counts.get("ba"), Some(&1));
        assert_eq!(counts.get("aba"), Some(&1));
        assert_eq!(counts.get("bab"), Some(&1));
        assert!(counts.get("abab").is_none());
    }

    #[test]
    fn test_unvalidated_bad_range_is_malformed_not_panic() {
        let model = LinearTextModel {
            tokenizer: Tokenizer::CharNgrams { min: 0, max: 1 },
            ..word_model()
        };
        assert!(model.tokenize("abc").contains_key("a"));
        assert!(matches!(
            model.probabilities("example.com"),
            Err(ClassifierError::Malformed(_))
        ));
        assert!(UrlClassifier::predict_label(&model, "example.com").is_err());
    }

    #[test]
    fn test_unvalidated_missing_intercepts_is_malformed() {
        let model = LinearTextModel {
            intercepts: vec![],
            ..word_model()
        };
        assert!(EmailClassifier::predict_label(&model, "verify").is_err());
    }

    #[test]
    fn test_default_tokenizer_is_words() {
        assert_eq!(Tokenizer::default(), Tokenizer::Words);
    }

    #[test]
    fn test_validate_rejects_shape_mismatch() {
        let mut model = word_model();
        model.intercepts.push(0.0);
        assert!(matches!(model.validate(), Err(LoadError::Invalid(_))));

        let mut model = word_model();
        model.weights.insert("bad".to_string(), vec![1.0]);
        assert!(matches!(model.validate(), Err(LoadError::Invalid(_))));

        let model = LinearTextModel {
            tokenizer: Tokenizer::CharNgrams { min: 4, max: 2 },
            ..word_model()
        };
        assert!(matches!(model.validate(), Err(LoadError::Invalid(_))));

        assert!(word_model().validate().is_ok());
    }

    #[test]
    fn test_artifact_json_shape() {
        let json = r#"{
            "classes": ["safe", "phishing"],
            "intercepts": [0.0, 0.0],
            "weights": {"login": [0.0, 1.5]},
            "tokenizer": {"kind": "char_ngrams", "min": 3, "max": 5}
        }"#;
        let model: LinearTextModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.tokenizer, Tokenizer::CharNgrams { min: 3, max: 5 });
        assert!(model.validate().is_ok());
    }
}
