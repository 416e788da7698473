//! Signal Types
//!
//! Core types for phishing classification.
//! No logic here beyond constructors - only data structures.

use serde::{Deserialize, Serialize};

use super::rules::{HEURISTIC_PHISHING_THRESHOLD, HEURISTIC_SCORE_MAX, HEURISTIC_SCORE_MIN};

// ============================================================================
// INPUT SHAPE
// ============================================================================

/// Whether input is treated as a URL or as email text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeLabel {
    Url,
    Email,
}

impl ShapeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeLabel::Url => "url",
            ShapeLabel::Email => "email",
        }
    }
}

impl std::fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// VERDICT PARTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Phishing,
    Safe,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Phishing => "phishing",
            Category::Safe => "safe",
            Category::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What produced the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Model,
    Heuristic,
    None,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Model => "model",
            Source::Heuristic => "heuristic",
            Source::None => "none",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CLASSIFIER OUTCOME (from an adapter)
// ============================================================================

/// Normalized classifier answer.
/// `confidence_percent` is relative to the reported side, in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutcome {
    pub is_phishing: bool,
    pub confidence_percent: f64,
}

impl ClassifierOutcome {
    /// Build from the predicted side and the raw phishing probability (0-100)
    pub fn from_phishing_percent(is_phishing: bool, phishing_percent: f64) -> Self {
        let confidence_percent = if is_phishing {
            phishing_percent
        } else {
            100.0 - phishing_percent
        };
        Self {
            is_phishing,
            confidence_percent,
        }
    }
}

// ============================================================================
// HEURISTIC SCORE
// ============================================================================

/// Heuristic phishing likelihood, always within [1.0, 99.9]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct HeuristicScore(f64);

impl HeuristicScore {
    pub fn new(raw: f64) -> Self {
        Self(raw.clamp(HEURISTIC_SCORE_MIN, HEURISTIC_SCORE_MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_phishing(&self) -> bool {
        self.0 > HEURISTIC_PHISHING_THRESHOLD
    }
}

// ============================================================================
// VERDICT
// ============================================================================

/// Final result of one classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub shape: ShapeLabel,
    pub category: Category,
    pub confidence_percent: f64,
    pub source: Source,
}

impl Verdict {
    pub fn from_outcome(shape: ShapeLabel, outcome: ClassifierOutcome) -> Self {
        Self {
            shape,
            category: if outcome.is_phishing { Category::Phishing } else { Category::Safe },
            confidence_percent: outcome.confidence_percent,
            source: Source::Model,
        }
    }

    /// The heuristic score is the confidence on either side
    pub fn from_heuristic(shape: ShapeLabel, score: HeuristicScore) -> Self {
        Self {
            shape,
            category: if score.is_phishing() { Category::Phishing } else { Category::Safe },
            confidence_percent: score.value(),
            source: Source::Heuristic,
        }
    }

    pub fn unknown(shape: ShapeLabel) -> Self {
        Self {
            shape,
            category: Category::Unknown,
            confidence_percent: 0.0,
            source: Source::None,
        }
    }

    pub fn is_phishing(&self) -> bool {
        self.category == Category::Phishing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_score_only_built_through_clamp() {
        assert_eq!(HeuristicScore::new(150.0).value(), 99.9);
        assert_eq!(HeuristicScore::new(-3.0).value(), 1.0);
        assert_eq!(serde_json::to_string(&HeuristicScore::new(250.0)).unwrap(), "99.9");
    }

    #[test]
    fn test_safe_outcome_confidence_is_complement() {
        let outcome = ClassifierOutcome::from_phishing_percent(false, 30.0);
        assert_eq!(outcome.confidence_percent, 70.0);
    }
}
