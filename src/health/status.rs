// src/health/status.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Reconciliation state reported by a status engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Failed,
    Terminating,
    Unknown,
    Current,
    /// A value outside the known set, kept verbatim for diagnostics.
    Unrecognized(String),
}

impl Status {
    /// Only `Current` is healthy.
    pub fn is_healthy(&self) -> bool {
        match self {
            Status::Current => true,
            Status::InProgress
            | Status::Failed
            | Status::Terminating
            | Status::Unknown
            | Status::Unrecognized(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::InProgress => "InProgress",
            Status::Failed => "Failed",
            Status::Terminating => "Terminating",
            Status::Unknown => "Unknown",
            Status::Current => "Current",
            Status::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "InProgress" => Status::InProgress,
            "Failed" => Status::Failed,
            "Terminating" => Status::Terminating,
            "Unknown" => Status::Unknown,
            "Current" => Status::Current,
            other => Status::Unrecognized(other.to_string()),
        }
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status::from(s))
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Status::from(raw.as_str()))
    }
}

/// Result of a status computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusVerdict {
    pub status: Status,
    #[serde(default)]
    pub message: String,
}

impl StatusVerdict {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}
