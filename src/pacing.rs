//! The delay between a visit and an un-visit.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use animated_bst::{BinarySearchTree, Pacing};
//!
//! let tree: BinarySearchTree<i64> = BinarySearchTree::new();
//!
//! // Hold on to a handle so the speed can be changed while the tree is busy.
//! let pacing = tree.pacing().clone();
//! assert_eq!(pacing.delay(), Pacing::DEFAULT_DELAY);
//!
//! pacing.set_delay(Duration::from_millis(40));
//! assert_eq!(tree.pacing().delay(), Duration::from_millis(40));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A shared, adjustable pause length.
///
/// Clones share the same setting. The delay is read when a pause starts, so changing it never
/// stretches or shortens a pause that is already in progress.
#[derive(Clone, Debug)]
pub struct Pacing {
    nanos: Arc<AtomicU64>,
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Pacing {
    /// The delay a new tree starts with.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

    /// Pacing that pauses for `delay` at every step.
    pub fn new(delay: Duration) -> Self {
        Self {
            nanos: Arc::new(AtomicU64::new(saturating_nanos(delay))),
        }
    }

    /// Pacing with no delay. Pauses return immediately without touching the timer.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The current delay.
    pub fn delay(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Relaxed))
    }

    /// Changes the delay for every pause that starts from now on.
    pub fn set_delay(&self, delay: Duration) {
        self.nanos.store(saturating_nanos(delay), Ordering::Relaxed);
    }

    /// Suspends the calling task for the current delay.
    ///
    /// This is a timer, not a blocking sleep: other tasks on the same thread keep running, and
    /// dropping the returned future cancels the pause.
    pub async fn pause(&self) {
        let delay = self.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Anything longer than ~584 years is clamped.
fn saturating_nanos(delay: Duration) -> u64 {
    u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX)
}
