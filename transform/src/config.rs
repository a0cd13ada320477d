//! Manager configuration.
//!
//! Typed configuration with a `bon` builder and environment variable
//! fallbacks.

use std::num::NonZeroU32;

use bon::bon;

use crate::level::OptimizationLevel;

/// Default maximum number of rounds per level.
pub const DEFAULT_ITERATION_BOUND: NonZeroU32 = NonZeroU32::new(10).unwrap();

/// Configuration for a [`TransformerManager`](crate::TransformerManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Maximum rounds per level before giving up on a fixed point.
    pub iteration_bound: NonZeroU32,
    /// Highest set of transformer levels a session should apply.
    pub optimization_level: OptimizationLevel,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self { iteration_bound: DEFAULT_ITERATION_BOUND, optimization_level: OptimizationLevel::default() }
    }
}

#[bon]
impl ManagerConfig {
    /// Create a configuration with builder pattern.
    #[builder(finish_fn = build)]
    pub fn builder(
        #[builder(default = DEFAULT_ITERATION_BOUND)] iteration_bound: NonZeroU32,
        #[builder(default)] optimization_level: OptimizationLevel,
    ) -> Self {
        Self { iteration_bound, optimization_level }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `MOROK_TRANSFORM_STEPS` - Iteration bound per level (default: 10, must be positive)
    /// * `MOROK_GRAPH_OPT_LEVEL` - `0`/`1`/`2`/`99` or `disable_all`/`basic`/`extended`/`all` (default: all)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("MOROK_TRANSFORM_STEPS").ok().as_deref(),
            std::env::var("MOROK_GRAPH_OPT_LEVEL").ok().as_deref(),
        )
    }

    fn from_vars(steps: Option<&str>, opt_level: Option<&str>) -> Self {
        let iteration_bound = steps.and_then(|s| s.trim().parse().ok()).unwrap_or(DEFAULT_ITERATION_BOUND);
        let optimization_level = opt_level.and_then(|s| s.parse().ok()).unwrap_or_default();
        Self { iteration_bound, optimization_level }
    }
}
