use std::{fmt, str::FromStr};

/// What `publish` does when a listener returns an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the failing listener and return its error to the publisher.
    /// Listeners after it are not invoked for that publish.
    #[default]
    FailFast,
    /// Log the failure and keep invoking the remaining listeners.
    Isolate,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::FailFast => f.write_str("fail-fast"),
            FailurePolicy::Isolate => f.write_str("isolate"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail-fast" | "failfast" => Ok(FailurePolicy::FailFast),
            "isolate" => Ok(FailurePolicy::Isolate),
            other => Err(format!("unknown failure policy `{other}`")),
        }
    }
}

/// Hub configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubConfig {
    pub failure_policy: FailurePolicy,
}

impl HubConfig {
    pub fn isolating() -> Self {
        Self {
            failure_policy: FailurePolicy::Isolate,
        }
    }
}
