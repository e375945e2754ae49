//! Pass-level errors.
//!
//! Diagnostics never surface here; they are accumulated data (see
//! [`crate::diagnostics`]). The only condition that aborts a pass is host
//! cancellation.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The host requested cancellation; the pass unwound without emitting.
    #[error("generation pass was cancelled by the host")]
    Cancelled,
}
