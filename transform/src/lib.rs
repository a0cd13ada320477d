//! Graph transformer manager for morok.
//!
//! Keeps a registry of graph rewrite passes ("transformers") grouped into
//! ordered optimization levels, and runs one level at a time over a mutable
//! graph until it reaches a fixed point or the iteration bound.
//!
//! # Module Organization
//!
//! - [`transformer`] - The [`Transformer`] capability and a closure adapter
//! - [`level`] - [`TransformerLevel`] phases and session [`OptimizationLevel`]
//! - [`registry`] - Owning arena with per-level order and a name index
//! - [`lifecycle`] - Exactly-once initialization of the iteration bound
//! - [`driver`] - Fixed-point loop for one level
//! - [`manager`] - [`TransformerManager`], the public surface
//! - [`pipeline`] - Applying all levels enabled by an optimization level
//! - [`config`] - [`ManagerConfig`] with builder and environment fallbacks
//!
//! The graph type is a type parameter and is never inspected here.

pub mod config;
pub mod driver;
pub mod error;
pub mod level;
pub mod lifecycle;
pub mod manager;
pub mod pipeline;
pub mod registry;
pub mod transformer;


pub use config::{DEFAULT_ITERATION_BOUND, ManagerConfig};
pub use driver::ApplyReport;
pub use error::*;
pub use level::{OptimizationLevel, TransformerLevel};
pub use manager::TransformerManager;
pub use pipeline::apply_optimization_level;
pub use transformer::{FnTransformer, TransformError, Transformer};
