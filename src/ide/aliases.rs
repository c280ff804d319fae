//! Alias table — bidirectional command/alias mapping supplied per query.
//!
//! Only Function-kind reference search consults it: a command and its
//! aliases resolve to one logical symbol. Lookups are case-insensitive;
//! keys are folded on insert.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::symbols::matching::names_fold_eq;

/// Bidirectional mapping between command names and their aliases.
#[derive(Clone, Debug, Default)]
pub struct AliasTable {
    /// folded command name → aliases
    aliases_of: FxHashMap<String, Vec<SmolStr>>,
    /// folded alias name → canonical command
    canonical_of: FxHashMap<String, SmolStr>,
}

impl AliasTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias` as an alias of `command`.
    pub fn insert(&mut self, command: &str, alias: &str) {
        self.aliases_of
            .entry(fold(command))
            .or_default()
            .push(SmolStr::new(alias));
        self.canonical_of.insert(fold(alias), SmolStr::new(command));
    }

    /// All registered aliases of a command.
    pub fn aliases_of(&self, command: &str) -> &[SmolStr] {
        self.aliases_of
            .get(&fold(command))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The canonical command an alias stands for, if any.
    pub fn canonical_of(&self, alias: &str) -> Option<&SmolStr> {
        self.canonical_of.get(&fold(alias))
    }

    /// Alias-aware name equality.
    ///
    /// True when the names fold-equal, when either is an alias of the other,
    /// or when both are aliases of the same canonical command. The relation
    /// is symmetric; chains are followed through the canonical name only,
    /// never alias-to-alias.
    pub fn names_match(&self, a: &str, b: &str) -> bool {
        if names_fold_eq(a, b) {
            return true;
        }
        let canonical_a = self.canonical_of(a);
        let canonical_b = self.canonical_of(b);
        if canonical_a.is_some_and(|canonical| names_fold_eq(canonical, b)) {
            return true;
        }
        if canonical_b.is_some_and(|canonical| names_fold_eq(canonical, a)) {
            return true;
        }
        matches!((canonical_a, canonical_b),
            (Some(x), Some(y)) if names_fold_eq(x, y))
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}
