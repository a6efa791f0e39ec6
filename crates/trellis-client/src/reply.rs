use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// One element of a heterogeneous batch response.
///
/// A batch executes every command it carries even when some of them fail, so
/// the per-element results mix successful payloads with classified errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    /// Command produced no value.
    Nil,
    /// Simple acknowledgment.
    Ok,
    /// Signed integer payload.
    Int {
        /// Payload value.
        value: i64,
    },
    /// Text payload.
    Text {
        /// Payload value.
        value: String,
    },
    /// Nested payload sequence.
    Array {
        /// Element payloads in response order.
        items: Vec<Reply>,
    },
    /// The command failed.
    Error {
        /// Classified failure for this element.
        error: ClientError,
    },
}

impl Reply {
    /// Returns the carried error when this element is a failure, `None` for
    /// every successful payload.
    pub fn as_error(&self) -> Option<&ClientError> {
        match self {
            Reply::Error { error } => Some(error),
            _ => None,
        }
    }

    /// True when this element carries a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error { .. })
    }
}
