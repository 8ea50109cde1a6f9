use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SignificanceError};

/// Cooperative cancellation flag for long-running computations.
///
/// Clones share the same flag, so one handle can be given to a worker and
/// another kept by the caller. Algorithms poll [`CancelToken::check`] at
/// loop boundaries and bail out with [`SignificanceError::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Returns `Err(Cancelled)` once [`CancelToken::cancel`] has been called.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::Cancelled`] when the flag is set.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(SignificanceError::Cancelled)
        } else {
            Ok(())
        }
    }
}
