use thiserror::Error;

use crate::render::errors_to_string;

/// Boxed error trait object accepted by batch aggregation.
///
/// Preparation failures are not always [`ClientError`](crate::ClientError)s;
/// encoding and validation layers contribute their own types.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Aggregate of the failures gathered while preparing one batch of commands.
///
/// The sequence is frozen at construction and kept in submission order; the
/// rendered message is derived from it on demand and always reports the
/// exact constituent count.
#[derive(Debug, Error)]
#[error(
    "there were {} errors while preparing commands in this batch: \n{}",
    .errors.len(),
    errors_to_string(.errors)
)]
pub struct BatchError {
    errors: Vec<BoxError>,
}

impl BatchError {
    /// Freezes the gathered failures into one reportable unit.
    ///
    /// An empty sequence is accepted and renders a zero-error report;
    /// construction never fails.
    pub fn new(errors: Vec<BoxError>) -> Self {
        BatchError { errors }
    }

    /// Number of constituent failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no failures were gathered.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Constituent failures in submission order.
    pub fn errors(&self) -> &[BoxError] {
        &self.errors
    }
}
