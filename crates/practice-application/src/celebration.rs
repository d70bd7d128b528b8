//! Auto-dismissal of the celebration overlay.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::intent::Intent;

/// Sends `Intent::DismissCelebration` once `delay` has elapsed.
///
/// Dropping the timer cancels it, so a view that is torn down before the
/// delay never receives a dismissal. If the receiving side is already gone the
/// send is discarded.
#[derive(Debug)]
pub struct CelebrationTimer {
    token: CancellationToken,
}

impl CelebrationTimer {
    /// Spawns the timer on the current tokio runtime.
    pub fn schedule(seq: u64, delay: Duration, sender: mpsc::UnboundedSender<Intent>) -> Self {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    tracing::debug!(seq, "Celebration timer cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    if sender.send(Intent::DismissCelebration { seq }).is_err() {
                        tracing::debug!(seq, "Celebration view closed before dismissal");
                    }
                }
            }
        });

        Self { token }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for CelebrationTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
