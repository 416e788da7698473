//! Signal Module
//!
//! Phishing classification of a single URL or email text.
//! This is the CORE STEP - where PHISHING / SAFE / UNKNOWN is decided.
//!
//! ## Structure
//! - `types`: Core types (ShapeLabel, ClassifierOutcome, HeuristicScore, Verdict)
//! - `rules`: Keyword weights, thresholds and constants
//! - `shape`: URL vs email detection
//! - `heuristic`: Model-free URL scorer
//! - `adapter`: Classifier output normalization
//! - `engine`: Orchestration and fallback
//!
//! ## Usage
//! ```ignore
//! use phishsniff_core::logic::signal::{PhishingEngine, Category};
//!
//! let engine = PhishingEngine::new(url_model, email_model);
//! match engine.classify(text)?.category {
//!     Category::Phishing => println!("Phishing"),
//!     Category::Safe => println!("Safe"),
//!     Category::Unknown => println!("Could not classify"),
//! }
//! ```

pub mod types;
pub mod rules;
pub mod shape;
pub mod heuristic;
pub mod adapter;
pub mod engine;


// Re-export main types for convenience
pub use types::{Category, ClassifierOutcome, HeuristicScore, ShapeLabel, Source, Verdict};

pub use shape::classify_shape;
pub use heuristic::{heuristic_score, score_breakdown, HeuristicBreakdown};
pub use adapter::{phishing_class_index, try_email_model, try_url_model};
pub use engine::PhishingEngine;
