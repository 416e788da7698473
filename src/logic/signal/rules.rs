//! Signal Rules & Constants
//!
//! Weights and thresholds for shape detection and the heuristic URL scorer.
//! No scoring logic here - only constants.

// ============================================================================
// SHAPE DETECTION
// ============================================================================

pub const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

pub const WWW_MARKER: &str = "www.";

/// Bare tokens at or above this many characters are never URLs
pub const BARE_URL_MAX_LEN: usize = 200;

// ============================================================================
// HEURISTIC WEIGHTS
// ============================================================================

/// Characters per length point
pub const LENGTH_DIVISOR: f64 = 50.0;

/// Cap on the length component
pub const LENGTH_CAP: f64 = 30.0;

/// Characters counted by the punctuation component
pub const SUSPICIOUS_PUNCTUATION: &str = "-_@?=&%$+";

pub const PUNCTUATION_WEIGHT: f64 = 1.2;

/// Keyword weights, scanned in this order, each counted once
pub const KEYWORD_WEIGHTS: [(&str, f64); 8] = [
    ("login", 8.0),
    ("secure", 10.0),
    ("bank", 12.0),
    ("update", 8.0),
    ("verify", 10.0),
    ("account", 8.0),
    ("paypal", 12.0),
    ("signin", 8.0),
];

/// Anchored at end of string, applied to the lower-cased input
pub const SUSPICIOUS_TLD_PATTERN: &str = r"\.(xyz|top|club|info|online|site|pw|icu|shop)$";

pub const SUSPICIOUS_TLD_WEIGHT: f64 = 12.0;

// ============================================================================
// SCORE BOUNDS
// ============================================================================

pub const HEURISTIC_SCORE_MIN: f64 = 1.0;

pub const HEURISTIC_SCORE_MAX: f64 = 99.9;

/// Strictly above this = phishing
pub const HEURISTIC_PHISHING_THRESHOLD: f64 = 50.0;
