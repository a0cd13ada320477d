//! Graph transformer manager.
//!
//! Owns every registered transformer, groups them by [`TransformerLevel`] and
//! drives a requested level to a fixed point over a caller-owned graph.
//!
//! # Lifecycle
//!
//! 1. Setup: [`register`](TransformerManager::register) transformers. This
//!    needs `&mut self`, so setup is single-threaded by construction.
//! 2. [`init`](TransformerManager::init) once with the iteration bound.
//! 3. Any number of [`apply_level`](TransformerManager::apply_level) calls.
//!    They take `&self`, so a manager behind an `Arc` can optimize distinct
//!    graphs from several threads at once.
//!
//! # Example
//!
//! ```
//! use morok_transform::{FnTransformer, TransformError, TransformerLevel, TransformerManager};
//!
//! let mut manager = TransformerManager::<Vec<i64>>::new();
//! manager.register(
//!     Box::new(FnTransformer::new("drop_zeros", |g: &mut Vec<i64>| -> Result<bool, TransformError> {
//!         let before = g.len();
//!         g.retain(|v| *v != 0);
//!         Ok(g.len() != before)
//!     })),
//!     TransformerLevel::Level1,
//! )?;
//! manager.init(5)?;
//!
//! let mut graph = vec![0, 3, 0, 4];
//! let report = manager.apply_level(&mut graph, TransformerLevel::Level1)?;
//! assert_eq!(graph, vec![3, 4]);
//! assert!(report.converged);
//! # Ok::<(), morok_transform::Error>(())
//! ```

use std::fmt;
use std::num::NonZeroU32;

use crate::config::ManagerConfig;
use crate::driver::{self, ApplyReport};
use crate::error::Result;
use crate::level::TransformerLevel;
use crate::lifecycle::LifecycleGuard;
use crate::registry::LevelRegistry;
use crate::transformer::Transformer;

pub struct TransformerManager<G> {
    registry: LevelRegistry<G>,
    lifecycle: LifecycleGuard,
}

impl<G> TransformerManager<G> {
    pub fn new() -> Self {
        Self { registry: LevelRegistry::new(), lifecycle: LifecycleGuard::new() }
    }

    /// Create a manager already initialized with `config.iteration_bound`.
    pub fn with_config(config: &ManagerConfig) -> Result<Self> {
        let manager = Self::new();
        manager.lifecycle.init(config.iteration_bound.get())?;
        Ok(manager)
    }

    /// Register `transformer` under `level`.
    ///
    /// Names are unique across all levels; a duplicate fails with
    /// `DuplicateName` and leaves the manager unchanged.
    pub fn register(&mut self, transformer: Box<dyn Transformer<G>>, level: TransformerLevel) -> Result<()> {
        let name = transformer.name().to_string();
        self.registry.register(transformer, level)?;
        tracing::debug!(transformer = %name, %level, "registered transformer");
        Ok(())
    }

    /// Fix the maximum number of rounds per level. Succeeds once.
    pub fn init(&self, iteration_bound: u32) -> Result<()> {
        self.lifecycle.init(iteration_bound).map(|_| ())
    }

    /// Run the transformers of `level` over `graph` until no transformer
    /// modifies it or the iteration bound is reached.
    ///
    /// A transformer failure aborts the call immediately. The graph keeps any
    /// rewrites applied before the failure.
    pub fn apply_level(&self, graph: &mut G, level: TransformerLevel) -> Result<ApplyReport> {
        let bound = self.lifecycle.require_bound()?;
        driver::converge(graph, level, self.registry.level(level), bound)
    }

    pub fn lookup(&self, name: &str) -> Option<&dyn Transformer<G>> {
        self.registry.lookup(name)
    }

    pub fn level_of(&self, name: &str) -> Option<TransformerLevel> {
        self.registry.level_of(name)
    }

    /// Names registered for `level`, in execution order.
    pub fn transformer_names(&self, level: TransformerLevel) -> Vec<&str> {
        self.registry.names(level).collect()
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle.is_initialized()
    }

    pub fn iteration_bound(&self) -> Option<NonZeroU32> {
        self.lifecycle.iteration_bound()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl<G> Default for TransformerManager<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> fmt::Debug for TransformerManager<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels: Vec<_> = TransformerLevel::MAX.up_to().map(|level| (level, self.transformer_names(level))).collect();
        f.debug_struct("TransformerManager")
            .field("levels", &levels)
            .field("iteration_bound", &self.iteration_bound())
            .finish()
    }
}
