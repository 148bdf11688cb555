use std::fmt;

use serde::{Deserialize, Serialize};

/// Carries a row through a pipeline together with the row as it was first
/// received, so a failed row can be dead-lettered without losing its input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FailsafeFeatureRow<O, C> {
    original_payload: O,
    payload: C,
    error_message: Option<String>,
    stacktrace: Option<String>,
}

impl<O, C> FailsafeFeatureRow<O, C> {
    pub fn of(original_payload: O, payload: C) -> Self {
        Self {
            original_payload,
            payload,
            error_message: None,
            stacktrace: None,
        }
    }

    pub fn original_payload(&self) -> &O {
        &self.original_payload
    }

    pub fn payload(&self) -> &C {
        &self.payload
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn stacktrace(&self) -> Option<&str> {
        self.stacktrace.as_deref()
    }

    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    pub fn with_stacktrace(mut self, stacktrace: impl Into<String>) -> Self {
        self.stacktrace = Some(stacktrace.into());
        self
    }

    /// Records `err` as the failure of this row, keeping its cause chain as the stacktrace.
    pub fn with_error(self, err: &anyhow::Error) -> Self {
        self.with_error_message(err.to_string())
            .with_stacktrace(format!("{:?}", err))
    }

    pub fn is_failed(&self) -> bool {
        self.error_message.is_some()
    }
}

impl<O: fmt::Debug, C: fmt::Debug> fmt::Display for FailsafeFeatureRow<O, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FailsafeFeatureRow {{ original_payload: {:?}, payload: {:?}, error_message: {:?}, stacktrace: {:?} }}",
            self.original_payload, self.payload, self.error_message, self.stacktrace
        )
    }
}
