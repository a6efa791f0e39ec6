//! Typed error model for the trellis engine boundary.
//!
//! The native engine reports failures as a numeric code plus a message; this
//! crate lifts that pair into [`ClientError`], aggregates per-command
//! preparation failures into [`BatchError`], and models the heterogeneous
//! per-element results of an executed batch as [`Reply`].

pub mod batch;
pub mod errors;
pub mod render;
pub mod reply;
pub mod signal;

pub use batch::{BatchError, BoxError};
pub use errors::ClientError;
pub use render::errors_to_string;
pub use reply::Reply;
pub use signal::{Signal, SignalCode};
