// src/health/mod.rs
mod checker;
mod engine;
mod sink;
mod status;

pub use checker::{HealthCheckResult, HealthClassifier, HealthError};
pub use engine::{EngineError, StatusEngine};
pub use sink::{DiagnosticSink, RecordingSink, TracingSink};
pub use status::{Status, StatusVerdict};
