//! Optimization levels.
//!
//! Two related notions live here:
//! - [`TransformerLevel`] - the phase a transformer is registered against.
//!   Levels are applied one at a time by the caller; the manager never chains
//!   them on its own.
//! - [`OptimizationLevel`] - the session-facing knob that selects the highest
//!   transformer level a compilation should run.

use std::str::FromStr;

use derive_more::Display;
use strum::IntoEnumIterator;

use crate::error::{Error, InvalidLevelSnafu};

/// Optimization phase a transformer belongs to.
///
/// Ordering follows declaration order: `Level1 < Level2 < Level3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum TransformerLevel {
    Level1,
    Level2,
    Level3,
}

impl TransformerLevel {
    pub const MAX: Self = Self::Level3;

    /// Zero-based position, usable as an index into per-level tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// All levels up to and including `self`, ascending.
    pub fn up_to(self) -> impl Iterator<Item = Self> {
        Self::iter().take_while(move |level| *level <= self)
    }
}

impl FromStr for TransformerLevel {
    type Err = Error;

    /// Accepts `"1"`..`"3"` or `"level1"`..`"level3"` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let digits = normalized.strip_prefix("level").unwrap_or(&normalized);
        match digits {
            "1" => Ok(Self::Level1),
            "2" => Ok(Self::Level2),
            "3" => Ok(Self::Level3),
            _ => InvalidLevelSnafu { value: s }.fail(),
        }
    }
}

/// Graph optimization level selected for a session.
///
/// Discriminants match the values sessions accept on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[derive(strum::EnumIter, strum::FromRepr)]
#[repr(u8)]
pub enum OptimizationLevel {
    /// No graph transformers run.
    DisableAll = 0,
    Basic = 1,
    Extended = 2,
    #[default]
    All = 99,
}

impl OptimizationLevel {
    /// Highest transformer level enabled, or `None` for [`OptimizationLevel::DisableAll`].
    pub const fn max_transformer_level(self) -> Option<TransformerLevel> {
        match self {
            Self::DisableAll => None,
            Self::Basic => Some(TransformerLevel::Level1),
            Self::Extended => Some(TransformerLevel::Level2),
            Self::All => Some(TransformerLevel::MAX),
        }
    }

    /// Enabled transformer levels in the order they should be applied.
    pub fn transformer_levels(self) -> impl Iterator<Item = TransformerLevel> {
        self.max_transformer_level().into_iter().flat_map(TransformerLevel::up_to)
    }
}

impl FromStr for OptimizationLevel {
    type Err = Error;

    /// Accepts the numeric value or the level name (`disable_all`, `basic`, `extended`, `all`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        if let Ok(value) = normalized.parse::<u8>() {
            return Self::from_repr(value).ok_or_else(|| InvalidLevelSnafu { value: s }.build());
        }
        match normalized.as_str() {
            "disable_all" | "disableall" | "none" => Ok(Self::DisableAll),
            "basic" => Ok(Self::Basic),
            "extended" => Ok(Self::Extended),
            "all" => Ok(Self::All),
            _ => InvalidLevelSnafu { value: s }.fail(),
        }
    }
}
