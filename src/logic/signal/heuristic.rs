//! Heuristic URL Scorer
//!
//! Model-free fallback for URL-shaped input. Additive point scoring on a
//! lower-cased copy of the input, clamped to [1.0, 99.9].
//!
//! Components:
//! - length: `min(chars / 50, 30)`
//! - punctuation: 1.2 per character from `-_@?=&%$+`
//! - keywords: fixed weight per keyword found as a substring (once each)
//! - suspicious TLD: +12 when the string ends in a listed TLD

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::rules::{
    KEYWORD_WEIGHTS, LENGTH_CAP, LENGTH_DIVISOR, PUNCTUATION_WEIGHT, SUSPICIOUS_PUNCTUATION,
    SUSPICIOUS_TLD_PATTERN, SUSPICIOUS_TLD_WEIGHT,
};
use super::types::HeuristicScore;

static SUSPICIOUS_TLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(SUSPICIOUS_TLD_PATTERN).expect("suspicious TLD pattern is valid"));

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// How the heuristic score was assembled
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeuristicBreakdown {
    pub length_points: f64,
    pub punctuation_points: f64,
    pub keyword_points: f64,
    pub tld_points: f64,
    /// Matched keywords, in scan order
    pub keywords: Vec<&'static str>,
}

impl HeuristicBreakdown {
    pub fn raw_total(&self) -> f64 {
        self.length_points + self.punctuation_points + self.keyword_points + self.tld_points
    }

    pub fn score(&self) -> HeuristicScore {
        HeuristicScore::new(self.raw_total())
    }
}

// ============================================================================
// SCORING
// ============================================================================

/// Full component breakdown for `url`
pub fn score_breakdown(url: &str) -> HeuristicBreakdown {
    let u = url.to_lowercase();

    let length_points = (u.chars().count() as f64 / LENGTH_DIVISOR).min(LENGTH_CAP);

    let punctuation_count = u.chars().filter(|c| SUSPICIOUS_PUNCTUATION.contains(*c)).count();
    let punctuation_points = punctuation_count as f64 * PUNCTUATION_WEIGHT;

    let mut keywords = Vec::new();
    let mut keyword_points = 0.0;
    for (keyword, weight) in KEYWORD_WEIGHTS {
        if u.contains(keyword) {
            keywords.push(keyword);
            keyword_points += weight;
        }
    }

    let tld_points = if SUSPICIOUS_TLD.is_match(&u) {
        SUSPICIOUS_TLD_WEIGHT
    } else {
        0.0
    };

    HeuristicBreakdown {
        length_points,
        punctuation_points,
        keyword_points,
        tld_points,
        keywords,
    }
}

/// Deterministic phishing-likelihood estimate for a URL-like string
pub fn heuristic_score(url: &str) -> HeuristicScore {
    score_breakdown(url).score()
}

// ============================================================================
// TESTS
// ============================================================================
