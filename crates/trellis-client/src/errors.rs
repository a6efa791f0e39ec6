use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signal::{Signal, SignalCode};

/// Typed client-side failure raised at the engine boundary.
///
/// Display yields the carried message verbatim; variants compare equal when
/// their kind and message match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClientError {
    /// Transport failed while establishing or maintaining a session.
    #[error("{message}")]
    Connection { message: String },
    /// The engine aborted a queued transaction.
    #[error("{message}")]
    ExecAbort { message: String },
    /// A request did not complete within its deadline.
    #[error("{message}")]
    Timeout { message: String },
    /// The engine reported that the session was terminated.
    #[error("{message}")]
    Disconnect { message: String },
    /// An operation was attempted after the client began shutting down.
    #[error("{message}")]
    Closing { message: String },
    /// Invalid client configuration was detected.
    #[error("{message}")]
    Configuration { message: String },
    /// Unclassified engine signals and ad hoc local failures.
    #[error("{message}")]
    Generic { message: String },
}

impl ClientError {
    pub fn connection(message: impl Into<String>) -> Self {
        ClientError::Connection {
            message: message.into(),
        }
    }

    pub fn exec_abort(message: impl Into<String>) -> Self {
        ClientError::ExecAbort {
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        ClientError::Timeout {
            message: message.into(),
        }
    }

    pub fn disconnect(message: impl Into<String>) -> Self {
        ClientError::Disconnect {
            message: message.into(),
        }
    }

    pub fn closing(message: impl Into<String>) -> Self {
        ClientError::Closing {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        ClientError::Configuration {
            message: message.into(),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        ClientError::Generic {
            message: message.into(),
        }
    }

    /// Failure text exactly as it was supplied at construction.
    pub fn message(&self) -> &str {
        match self {
            ClientError::Connection { message }
            | ClientError::ExecAbort { message }
            | ClientError::Timeout { message }
            | ClientError::Disconnect { message }
            | ClientError::Closing { message }
            | ClientError::Configuration { message }
            | ClientError::Generic { message } => message,
        }
    }

    /// Lifts a raw engine signal into a typed error.
    ///
    /// Total over the whole code space: the three recognized codes map to
    /// their dedicated variants and every other code, including ones this
    /// client version has never seen, falls back to
    /// [`ClientError::Generic`]. The message passes through unchanged.
    pub fn from_signal(code: u32, message: impl Into<String>) -> Self {
        let message = message.into();
        match SignalCode::from_raw(code) {
            SignalCode::ExecAbort => ClientError::ExecAbort { message },
            SignalCode::Timeout => ClientError::Timeout { message },
            SignalCode::Disconnect => ClientError::Disconnect { message },
            SignalCode::Unspecified => ClientError::Generic { message },
            SignalCode::Unrecognized(raw) => {
                tracing::debug!(code = raw, "unrecognized engine signal code");
                ClientError::Generic { message }
            }
        }
    }
}

impl From<Signal> for ClientError {
    fn from(signal: Signal) -> Self {
        ClientError::from_signal(signal.code, signal.message)
    }
}
