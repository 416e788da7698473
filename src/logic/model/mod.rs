//! Model Module - Classifier capabilities and artifact loading
//!
//! The signal engine depends on `traits` only; `linear` and `loader`
//! are one concrete way of producing handles.

pub mod traits;
pub mod linear;
pub mod loader;

// Re-export common types
pub use traits::{EmailClassifier, ModelSource, UrlClassifier};
pub use linear::{LinearTextModel, Tokenizer};
pub use loader::{load_model, safe_load, FileModelSource, LoadedModel, ModelMetadata};
