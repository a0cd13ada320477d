//! Level registry: owned transformers, their execution order per level, and a
//! manager-wide name index.

use std::collections::HashMap;

use snafu::ensure;
use strum::EnumCount;

use crate::error::{DuplicateNameSnafu, Result};
use crate::level::TransformerLevel;
use crate::transformer::Transformer;

struct Entry<G> {
    transformer: Box<dyn Transformer<G>>,
    level: TransformerLevel,
}

/// Registered transformers grouped by level.
///
/// Transformers live in a single arena; each level keeps arena indices in
/// registration order, which is also their execution order. Names are unique
/// across all levels.
pub struct LevelRegistry<G> {
    arena: Vec<Entry<G>>,
    levels: [Vec<usize>; TransformerLevel::COUNT],
    by_name: HashMap<String, usize>,
}

impl<G> LevelRegistry<G> {
    pub fn new() -> Self {
        Self { arena: Vec::new(), levels: Default::default(), by_name: HashMap::new() }
    }

    /// Append `transformer` to `level`.
    ///
    /// Fails with `DuplicateName` if the name is taken at any level; the
    /// registry is left untouched in that case.
    pub fn register(&mut self, transformer: Box<dyn Transformer<G>>, level: TransformerLevel) -> Result<()> {
        let name = transformer.name();
        ensure!(!self.by_name.contains_key(name), DuplicateNameSnafu { name });

        let index = self.arena.len();
        self.by_name.insert(name.to_string(), index);
        self.levels[level.index()].push(index);
        self.arena.push(Entry { transformer, level });
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&dyn Transformer<G>> {
        self.by_name.get(name).map(|&index| -> &dyn Transformer<G> { self.arena[index].transformer.as_ref() })
    }

    pub fn level_of(&self, name: &str) -> Option<TransformerLevel> {
        self.by_name.get(name).map(|&index| self.arena[index].level)
    }

    /// Transformers of `level` in execution order.
    pub fn level(&self, level: TransformerLevel) -> impl ExactSizeIterator<Item = &dyn Transformer<G>> + Clone + '_ {
        self.levels[level.index()].iter().map(|&index| -> &dyn Transformer<G> { self.arena[index].transformer.as_ref() })
    }

    pub fn names(&self, level: TransformerLevel) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.level(level).map(|transformer| transformer.name())
    }

    pub fn level_len(&self, level: TransformerLevel) -> usize {
        self.levels[level.index()].len()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

impl<G> Default for LevelRegistry<G> {
    fn default() -> Self {
        Self::new()
    }
}
