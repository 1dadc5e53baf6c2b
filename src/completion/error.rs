//! Completion outcome errors and cancellation.
//!
//! The engine degrades every failure to fewer suggestions. The one outcome
//! the host must tell apart from "no suggestions" is a request that was
//! superseded while waiting for the document model.

use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Errors returned to the host by an asynchronous completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// The request was cancelled before the document model was available.
    #[error("completion request was cancelled")]
    Cancelled,
}

/// A cooperative cancellation flag polled by the engine.
pub trait CancellationSignal {
    fn is_cancelled(&self) -> bool;
}

impl CancellationSignal for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<T: CancellationSignal + ?Sized> CancellationSignal for std::sync::Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

#[cfg(feature = "lsp")]
impl CancellationSignal for tokio_util::sync::CancellationToken {
    fn is_cancelled(&self) -> bool {
        tokio_util::sync::CancellationToken::is_cancelled(self)
    }
}

/// Never cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancelled;

impl CancellationSignal for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}
