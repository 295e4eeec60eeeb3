//! CallContext - cancellation and deadline handed to every plugin call

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::PluginError;

/// Per-call cancellation scope.
///
/// The host creates one for each call and may cancel it or give it a deadline.
/// Adapters forward it untouched; only the plugin doing the work decides how
/// to honour it, typically by wrapping its I/O in [`CallContext::run`].
///
/// Cloning shares the same token, so cancelling any clone cancels all of them.
///
/// # Example
///
/// ```ignore
/// async fn generate_configs(&self, ctx: &CallContext) -> Result<ConfigMap, PluginError> {
///     let body = ctx.run(fetch_remote_config()).await??;
///     Ok(ConfigMap::from([("remote".to_string(), body)]))
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that is never cancelled unless asked to
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: expire `timeout` from now.
    ///
    /// A timeout too large to represent as an instant sets no deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Builder: expire at `deadline`, keeping an earlier existing deadline
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    /// A context cancelled whenever this one is, but cancellable on its own
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Signal cancellation to everything sharing this context
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// True once cancelled or past the deadline
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.is_expired()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, `None` when there is no deadline
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// The underlying token, for plugins that hand it to their own tasks
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Resolves when the context is cancelled or its deadline passes
    pub async fn cancelled(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.token.cancelled() => {}
                    _ = tokio::time::sleep_until(deadline) => {}
                }
            }
            None => self.token.cancelled().await,
        }
    }

    /// Drive `fut` to completion unless the context ends first.
    ///
    /// Returns [`PluginError::Cancelled`] if the token fires and
    /// [`PluginError::DeadlineExceeded`] if the deadline passes. A context that
    /// is already done never polls `fut`.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, PluginError>
    where
        F: Future,
    {
        if self.token.is_cancelled() {
            return Err(PluginError::Cancelled);
        }
        if self.is_expired() {
            return Err(PluginError::DeadlineExceeded);
        }

        let outcome = match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => Err(PluginError::Cancelled),
                    _ = tokio::time::sleep_until(deadline) => Err(PluginError::DeadlineExceeded),
                    out = fut => Ok(out),
                }
            }
            None => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => Err(PluginError::Cancelled),
                    out = fut => Ok(out),
                }
            }
        };

        if let Err(ref e) = outcome {
            tracing::debug!(error = %e, "Call context ended before work completed");
        }
        outcome
    }

    fn is_expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}
