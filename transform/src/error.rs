use snafu::Snafu;

use crate::transformer::TransformError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// A transformer with the same name is already registered (at any level).
    #[snafu(display("transformer '{name}' is already registered"))]
    DuplicateName { name: String },

    /// `init` was called more than once.
    #[snafu(display("transformer manager is already initialized with iteration bound {iteration_bound}"))]
    AlreadyInitialized { iteration_bound: u32 },

    /// Iteration bound must be positive.
    #[snafu(display("iteration bound must be positive"))]
    InvalidIterationBound,

    /// A level was applied before `init`.
    #[snafu(display("transformer manager must be initialized before applying transformers"))]
    NotInitialized,

    /// A transformer reported a failure while rewriting the graph.
    #[snafu(display("transformer '{name}' failed: {source}"))]
    TransformerFailed { name: String, source: TransformError },

    #[snafu(display("invalid optimization level: {value}"))]
    InvalidLevel { value: String },
}
