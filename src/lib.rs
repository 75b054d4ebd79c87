// src/lib.rs
pub mod config;
pub mod health;
pub mod logging;
pub mod object;

pub use health::{
    HealthCheckResult, HealthClassifier, HealthError, Status, StatusEngine, StatusVerdict,
};
pub use object::{human_name, Object};
