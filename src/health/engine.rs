// src/health/engine.rs
use super::status::StatusVerdict;
use crate::object::Object;

/// Error returned by a status engine. Opaque to the classifier.
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// Computes the reconciliation status of an object.
///
/// How the verdict is inferred is entirely up to the implementation; the
/// classifier only maps the result.
pub trait StatusEngine {
    fn compute(&self, obj: &Object) -> Result<StatusVerdict, EngineError>;
}

impl<F> StatusEngine for F
where
    F: Fn(&Object) -> Result<StatusVerdict, EngineError>,
{
    fn compute(&self, obj: &Object) -> Result<StatusVerdict, EngineError> {
        self(obj)
    }
}
