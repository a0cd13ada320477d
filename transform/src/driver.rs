//! Fixed-point driver for a single transformer level.
//!
//! # Algorithm
//!
//! A *round* runs every transformer of the level once, in registration order,
//! against the same graph. Later transformers see the rewrites of earlier
//! ones within the same round. Rounds repeat while any transformer reports a
//! modification, up to the iteration bound:
//!
//! ```text
//! round = 0, changed = true
//! while changed && round < bound:
//!     changed = false
//!     for t in level:                 # registration order
//!         changed |= t.apply(graph)?  # first failure aborts, no rollback
//!     round += 1
//! ```
//!
//! Running out of rounds is not an error. The caller gets a normal result with
//! [`ApplyReport::converged`] set to `false`.

use std::num::NonZeroU32;

use snafu::ResultExt;
use tracing::{debug, trace};

use crate::error::{Result, TransformerFailedSnafu};
use crate::level::TransformerLevel;
use crate::transformer::Transformer;

/// Outcome of a successful level application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
    pub level: TransformerLevel,
    /// Rounds executed. Zero for an empty level.
    pub rounds: u32,
    /// `false` if the iteration bound was reached while the last round still
    /// modified the graph.
    pub converged: bool,
}

impl ApplyReport {
    fn empty(level: TransformerLevel) -> Self {
        Self { level, rounds: 0, converged: true }
    }
}

/// Run `transformers` over `graph` until a fixed point or `bound` rounds.
///
/// `transformers` is re-iterated once per round, so it must yield the same
/// sequence each time it is cloned.
#[tracing::instrument(skip_all, fields(level = %level, bound = bound.get()))]
pub fn converge<'t, G, I>(graph: &mut G, level: TransformerLevel, transformers: I, bound: NonZeroU32) -> Result<ApplyReport>
where
    G: 't,
    I: IntoIterator<Item = &'t dyn Transformer<G>>,
    I::IntoIter: Clone + ExactSizeIterator,
{
    let transformers = transformers.into_iter();
    if transformers.len() == 0 {
        trace!("no transformers registered");
        return Ok(ApplyReport::empty(level));
    }

    let mut round = 0;
    let mut changed = true;
    while changed && round < bound.get() {
        changed = false;
        for transformer in transformers.clone() {
            if round > 0 && transformer.should_only_apply_once() {
                continue;
            }

            let name = transformer.name();
            let modified = transformer.apply(graph).context(TransformerFailedSnafu { name })?;
            if modified {
                debug!(transformer = name, round, "graph modified");
                changed = true;
            } else {
                trace!(transformer = name, round, "no changes");
            }
        }
        round += 1;
    }

    if changed {
        debug!(rounds = round, "iteration bound reached before fixed point");
    } else {
        debug!(rounds = round, "fixed point reached");
    }

    Ok(ApplyReport { level, rounds: round, converged: !changed })
}
