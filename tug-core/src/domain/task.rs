//! Remote task type codes

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Task type codes understood by the data-integration service
///
/// The documented set gets named variants; anything else passes through
/// as `Other`. The client performs no validation here — an unknown code
/// is the remote service's to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskType {
    /// DMASK, a masking task
    Masking,
    /// DRS, a replication task
    Replication,
    /// DSS, a synchronization task
    Synchronization,
    /// MTT, a mapping task
    Mapping,
    /// PCS, a PowerCenter task
    PowerCenter,
    /// Any code outside the documented set, passed through verbatim
    Other(String),
}

impl TaskType {
    /// The wire code sent in the job-start request
    pub fn as_code(&self) -> &str {
        match self {
            Self::Masking => "DMASK",
            Self::Replication => "DRS",
            Self::Synchronization => "DSS",
            Self::Mapping => "MTT",
            Self::PowerCenter => "PCS",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for TaskType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "DMASK" => Self::Masking,
            "DRS" => Self::Replication,
            "DSS" => Self::Synchronization,
            "MTT" => Self::Mapping,
            "PCS" => Self::PowerCenter,
            _ => Self::Other(code),
        }
    }
}

impl From<TaskType> for String {
    fn from(task_type: TaskType) -> Self {
        task_type.as_code().to_string()
    }
}

impl FromStr for TaskType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_codes_round_trip() {
        for (code, task_type) in [
            ("DMASK", TaskType::Masking),
            ("DRS", TaskType::Replication),
            ("DSS", TaskType::Synchronization),
            ("MTT", TaskType::Mapping),
            ("PCS", TaskType::PowerCenter),
        ] {
            assert_eq!(code.parse::<TaskType>().unwrap(), task_type);
            assert_eq!(task_type.as_code(), code);
        }
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let task_type: TaskType = "CUSTOM_42".parse().unwrap();
        assert_eq!(task_type, TaskType::Other("CUSTOM_42".to_string()));
        assert_eq!(task_type.as_code(), "CUSTOM_42");
    }

    #[test]
    fn test_serializes_as_bare_code() {
        let json = serde_json::to_string(&TaskType::Mapping).unwrap();
        assert_eq!(json, "\"MTT\"");
    }
}
