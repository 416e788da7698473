//! PhishSniff Core - Phishing URL & Email Classification Engine
//!
//! Classifies a URL or a block of email text as phishing or safe, using a
//! probabilistic classifier when one is loaded and a lexical heuristic for
//! URLs otherwise.

pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

pub use config::Config;
pub use error::{AppResult, ClassifierError, ClassifyError, LoadError};
pub use logic::model::{EmailClassifier, FileModelSource, ModelSource, UrlClassifier};
pub use logic::signal::{Category, PhishingEngine, ShapeLabel, Source, Verdict};
