//! One-time initialization of the convergence iteration bound.

use std::num::NonZeroU32;
use std::sync::OnceLock;

use parking_lot::Mutex;
use snafu::OptionExt;

use crate::error::{AlreadyInitializedSnafu, InvalidIterationBoundSnafu, NotInitializedSnafu, Result};

#[derive(Debug, Default)]
struct LifecycleState {
    initialized: bool,
    iteration_bound: u32,
}

/// Guards the `uninitialized -> initialized` transition.
///
/// The mutex protects only the lifecycle state. Once `init` succeeds the bound
/// is published through a `OnceLock`, so readers on the apply path never take
/// the lock.
#[derive(Debug, Default)]
pub struct LifecycleGuard {
    state: Mutex<LifecycleState>,
    published: OnceLock<NonZeroU32>,
}

impl LifecycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the iteration bound. Succeeds exactly once per guard.
    pub fn init(&self, iteration_bound: u32) -> Result<NonZeroU32> {
        let mut state = self.state.lock();
        if state.initialized {
            return AlreadyInitializedSnafu { iteration_bound: state.iteration_bound }.fail();
        }
        let bound = NonZeroU32::new(iteration_bound).context(InvalidIterationBoundSnafu)?;

        state.iteration_bound = bound.get();
        state.initialized = true;
        // Only ever set here, under the lock, after the initialized check.
        let _ = self.published.set(bound);

        tracing::debug!(iteration_bound = bound.get(), "transformer manager initialized");
        Ok(bound)
    }

    pub fn is_initialized(&self) -> bool {
        self.published.get().is_some()
    }

    pub fn iteration_bound(&self) -> Option<NonZeroU32> {
        self.published.get().copied()
    }

    /// Bound for an apply call; `NotInitialized` before `init`.
    pub fn require_bound(&self) -> Result<NonZeroU32> {
        self.iteration_bound().context(NotInitializedSnafu)
    }
}
