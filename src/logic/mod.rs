//! Logic Module - Classification engine & model handling
//!
//! - `signal/` - Shape detection, heuristic scoring, adapters, orchestration
//! - `model/` - Classifier capabilities and artifact loading
//! - `report` - Verdict presentation

pub mod signal;
pub mod model;
pub mod report;
