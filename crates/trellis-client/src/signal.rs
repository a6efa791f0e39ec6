use serde::{Deserialize, Serialize};

/// Failure codes defined by the engine's native bindings.
///
/// The engine is free to introduce new codes over time; anything outside the
/// named set decodes to [`SignalCode::Unrecognized`] so that decoding stays
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCode {
    /// The engine did not classify the failure.
    Unspecified,
    /// A queued transaction was aborted server-side.
    ExecAbort,
    /// The request missed its deadline.
    Timeout,
    /// The engine reported that the session was terminated.
    Disconnect,
    /// A code outside the set known to this client version.
    Unrecognized(u32),
}

impl SignalCode {
    /// Decodes a raw numeric code from the engine boundary.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => SignalCode::Unspecified,
            1 => SignalCode::ExecAbort,
            2 => SignalCode::Timeout,
            3 => SignalCode::Disconnect,
            other => SignalCode::Unrecognized(other),
        }
    }

    /// Numeric value as the engine emits it.
    pub fn raw(self) -> u32 {
        match self {
            SignalCode::Unspecified => 0,
            SignalCode::ExecAbort => 1,
            SignalCode::Timeout => 2,
            SignalCode::Disconnect => 3,
            SignalCode::Unrecognized(raw) => raw,
        }
    }
}

/// One failure report received across the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Raw numeric code as emitted by the engine.
    pub code: u32,
    /// Failure text, carried through untouched.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::SignalCode;

    #[test]
    fn raw_roundtrip_named_codes() {
        for raw in 0..4 {
            assert_eq!(SignalCode::from_raw(raw).raw(), raw);
        }
    }

    #[test]
    fn raw_roundtrip_unrecognized() {
        let code = SignalCode::from_raw(0xFFFF);
        assert_eq!(code, SignalCode::Unrecognized(0xFFFF));
        assert_eq!(code.raw(), 0xFFFF);
    }
}
