// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::data::name::DeclId;
use crate::state::{Entry, FrozenUnit};
use indexmap::IndexMap;
use log::{debug, warn};

/// Symbol mapping plus export log, as seen from one point of a compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationState {
    /// Declaration -> Dafny identifier, in insertion order
    symbols: IndexMap<DeclId, String>,
    /// Rendered declarations; the most recent one is on top
    exports: Vec<String>,
}

impl TranslationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `value`. An existing binding is replaced; the previous
    /// target is returned.
    pub fn insert(&mut self, key: DeclId, value: String) -> Option<String> {
        if let Some(previous) = self.symbols.get(&key) {
            warn!("rebinding `{key}` from `{previous}` to `{value}`");
        }
        self.symbols.insert(key, value)
    }

    /// Dafny name of `key`, if one was recorded.
    pub fn find(&self, key: &DeclId) -> Option<&str> {
        self.symbols.get(key).map(String::as_str)
    }

    /// Push a rendered declaration onto the export log.
    pub fn export(&mut self, declaration: String) {
        self.exports.push(declaration);
    }

    /// Export log in recording order.
    pub fn exports(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.exports.iter().map(String::as_str)
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn export_count(&self) -> usize {
        self.exports.len()
    }

    /// Apply one recorded entry.
    pub fn apply(&mut self, entry: &Entry) {
        match entry {
            Entry::AddDecl { decl, target } => {
                self.insert(decl.clone(), target.clone());
            }
            Entry::ToExport { declaration } => self.export(declaration.clone()),
        }
    }

    /// Apply entries in order.
    pub fn replay<'a>(&mut self, entries: impl IntoIterator<Item = &'a Entry>) {
        for entry in entries {
            self.apply(entry);
        }
    }

    /// Rebuild the state visible at the start of a unit by replaying the frozen
    /// logs of its imports, in the order given. Duplicated keys across units are
    /// not rejected: whichever unit is replayed last wins.
    pub fn merge_from_imports<'a>(units: impl IntoIterator<Item = &'a FrozenUnit>) -> Self {
        let mut state = Self::new();
        for unit in units {
            debug!("replaying {} entries of `{}`", unit.entries.len(), unit.unit);
            state.replay(&unit.entries);
        }
        state
    }
}
