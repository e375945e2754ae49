//! Cooperative cancellation shared between the host and a running pass.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::GeneratorError;

/// Cancellation flag the host may set at any time.
///
/// Every loop over classes or properties checks the token at its iteration
/// boundary; once cancelled, the pass unwinds with
/// [`GeneratorError::Cancelled`] and emits nothing for the in-flight item.
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Errors when cancellation has been requested.
    pub fn check(&self) -> Result<(), GeneratorError> {
        if self.is_cancelled() {
            Err(GeneratorError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(token.check().is_ok());

        clone.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check(), Err(GeneratorError::Cancelled)));
    }
}
