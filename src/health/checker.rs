// src/health/checker.rs
use super::engine::{EngineError, StatusEngine};
use super::sink::{DiagnosticSink, TracingSink};
use super::status::Status;
use crate::object::Object;
use tracing::Level;

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("unable to compute condition for {object}: {source}")]
    Compute {
        object: String,
        #[source]
        source: EngineError,
    },
}

#[derive(Debug)]
pub struct HealthCheckResult {
    /// Human name of the checked object.
    pub object: String,
    pub healthy: bool,
    /// Engine message, passed through unmodified. Empty when the engine failed.
    pub message: String,
    pub error: Option<HealthError>,
}

impl HealthCheckResult {
    pub fn into_result(self) -> Result<(bool, String), HealthError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok((self.healthy, self.message)),
        }
    }
}

/// Maps engine verdicts onto a health flag.
pub struct HealthClassifier<E, S = TracingSink> {
    engine: E,
    sink: S,
}

impl<E: StatusEngine> HealthClassifier<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            sink: TracingSink,
        }
    }
}

impl<E: StatusEngine, S: DiagnosticSink> HealthClassifier<E, S> {
    pub fn with_sink(engine: E, sink: S) -> Self {
        Self { engine, sink }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Reports whether the object should be considered healthy.
    pub fn is_healthy(&self, obj: &Object) -> HealthCheckResult {
        let object = obj.human_name().to_string();

        let verdict = match self.engine.compute(obj) {
            Ok(verdict) => verdict,
            Err(source) => {
                self.sink.emit(
                    Level::INFO,
                    &format!("unable to compute condition for {}", object),
                );
                return HealthCheckResult {
                    object: object.clone(),
                    healthy: false,
                    message: String::new(),
                    error: Some(HealthError::Compute { object, source }),
                };
            }
        };

        let healthy = match &verdict.status {
            Status::Current => true,
            Status::InProgress | Status::Failed | Status::Terminating => false,
            Status::Unknown => {
                self.sink
                    .emit(Level::WARN, &format!("unknown status for {}", object));
                false
            }
            Status::Unrecognized(raw) => {
                self.sink
                    .emit(Level::WARN, &format!("unknown status value {}", raw));
                false
            }
        };

        HealthCheckResult {
            object,
            healthy,
            message: verdict.message,
            error: None,
        }
    }
}
