//! Session-side helper that applies every level enabled by an
//! [`OptimizationLevel`], lowest first.
//!
//! The manager itself never chains levels. This is the sequence a session
//! driver would otherwise spell out by hand.

use crate::driver::ApplyReport;
use crate::error::Result;
use crate::level::OptimizationLevel;
use crate::manager::TransformerManager;

/// Apply each transformer level enabled by `optimization_level` in ascending
/// order, stopping at the first failure.
///
/// [`OptimizationLevel::DisableAll`] applies nothing, but the manager must
/// still be initialized.
#[tracing::instrument(skip_all, fields(optimization_level = %optimization_level))]
pub fn apply_optimization_level<G>(
    manager: &TransformerManager<G>,
    graph: &mut G,
    optimization_level: OptimizationLevel,
) -> Result<Vec<ApplyReport>> {
    if !manager.is_initialized() {
        return crate::error::NotInitializedSnafu.fail();
    }

    optimization_level.transformer_levels().map(|level| manager.apply_level(graph, level)).collect()
}
