//! Cancellation is an external collaborator: the parser only polls a hook at
//! well-defined suspension points and bubbles a [`Cancelled`]
//! failure the instant the hook answers `true`. It never decides *when*
//! cancellation should happen, only what to do once it has.

/// Polled at production entry/exit, every token advance, every
/// context start/end and every checkpoint create/restore.
///
/// Implementors must be cheap to call repeatedly; the parser does not cache
/// the answer between suspension points.
pub trait CancellationToken {
    fn is_cancelled(&self) -> bool;
}

/// The default token: a parse using this can never be cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancelled;

impl CancellationToken for NeverCancelled {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A token backed by an [`std::sync::atomic::AtomicBool`], for callers that
/// want to request cancellation from another thread while the single-
/// threaded parse runs. Setting the flag does not itself touch parser state;
/// the parser remains responsible for polling it and unwinding cleanly.
#[derive(Debug, Clone)]
pub struct FlagCancellationToken(std::sync::Arc<std::sync::atomic::AtomicBool>);

impl FlagCancellationToken {
    pub fn new() -> Self {
        Self(std::sync::Arc::new(std::sync::atomic::AtomicBool::new(
            false,
        )))
    }

    pub fn cancel(&self) {
        self.0.store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

impl Default for FlagCancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken for FlagCancellationToken {
    fn is_cancelled(&self) -> bool {
        self.0.load(std::sync::atomic::Ordering::SeqCst)
    }
}
