//! The rewrite-pass capability consumed by the manager.

use std::error::Error as StdError;
use std::fmt;

/// Failure reported by a transformer. Propagated unchanged to the caller of
/// [`apply_level`](crate::TransformerManager::apply_level).
pub type TransformError = Box<dyn StdError + Send + Sync>;

/// A single graph rewrite pass.
///
/// The graph type is opaque to the manager; implementations inspect and
/// rewrite it in place. `apply` takes `&self` so one registered instance can
/// serve concurrent applies on distinct graphs. Transformers that keep
/// mutable state must synchronize it themselves.
pub trait Transformer<G>: Send + Sync {
    /// Unique name across the whole manager.
    fn name(&self) -> &str;

    /// Apply the pass once. Returns `true` if the graph was modified.
    ///
    /// Must be deterministic for a given graph state and must not retain
    /// references to `graph` past the call.
    fn apply(&self, graph: &mut G) -> Result<bool, TransformError>;

    /// Run only in the first round of a level, never again while iterating
    /// to a fixed point.
    fn should_only_apply_once(&self) -> bool {
        false
    }
}

/// Transformer built from a name and a closure.
///
/// # Example
///
/// ```
/// use morok_transform::{FnTransformer, TransformError, Transformer};
///
/// let strip_zeros = FnTransformer::new("strip_zeros", |graph: &mut Vec<i32>| -> Result<bool, TransformError> {
///     let before = graph.len();
///     graph.retain(|v| *v != 0);
///     Ok(graph.len() != before)
/// });
///
/// let mut graph = vec![1, 0, 2];
/// assert!(strip_zeros.apply(&mut graph).unwrap());
/// assert_eq!(graph, vec![1, 2]);
/// ```
pub struct FnTransformer<F> {
    name: String,
    apply: F,
    apply_once: bool,
}

impl<F> FnTransformer<F> {
    pub fn new(name: impl Into<String>, apply: F) -> Self {
        Self { name: name.into(), apply, apply_once: false }
    }

    /// Mark the transformer to run in the first round only.
    pub fn apply_once(mut self) -> Self {
        self.apply_once = true;
        self
    }
}

impl<G, F> Transformer<G> for FnTransformer<F>
where
    F: Fn(&mut G) -> Result<bool, TransformError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, graph: &mut G) -> Result<bool, TransformError> {
        (self.apply)(graph)
    }

    fn should_only_apply_once(&self) -> bool {
        self.apply_once
    }
}

impl<F> fmt::Debug for FnTransformer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransformer").field("name", &self.name).field("apply_once", &self.apply_once).finish()
    }
}
