// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::data::name::{DeclId, Name};
use crate::state::{Entry, TranslationState};
use log::info;
use serde::{Deserialize, Serialize};

/// The persisted history of one compiled unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenUnit {
    /// Unit name
    pub unit: Name,
    /// Direct imports, in source order
    pub imports: Vec<Name>,
    /// Entries recorded by this unit only, in recording order
    pub entries: Vec<Entry>,
}

/// Symbol store of the unit currently being compiled.
///
/// Owned by exactly one compilation pass. Every write is recorded in the unit's
/// own history and applied to the accumulator in the same step, so the
/// accumulator always equals "imports replayed, then own entries replayed".
#[derive(Debug)]
pub struct UnitState {
    unit: Name,
    imports: Vec<Name>,
    state: TranslationState,
    entries: Vec<Entry>,
}

impl UnitState {
    /// Start a unit. `imported` is the transitive import closure, dependencies
    /// first, each unit once.
    pub fn new<'a>(
        unit: Name,
        imports: Vec<Name>,
        imported: impl IntoIterator<Item = &'a FrozenUnit>,
    ) -> Self {
        let state = TranslationState::merge_from_imports(imported);
        Self {
            unit,
            imports,
            state,
            entries: vec![],
        }
    }

    pub fn unit(&self) -> &Name {
        &self.unit
    }

    /// Everything visible so far: imports plus this unit's own entries.
    pub fn state(&self) -> &TranslationState {
        &self.state
    }

    /// Entries recorded by this unit.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn record(&mut self, entry: Entry) {
        self.state.apply(&entry);
        self.entries.push(entry);
    }

    pub fn add_decl(&mut self, decl: DeclId, target: String) {
        self.record(Entry::AddDecl { decl, target });
    }

    pub fn add_export(&mut self, declaration: String) {
        self.record(Entry::ToExport { declaration });
    }

    /// Finish the unit. The frozen history is what importers replay.
    pub fn freeze(self) -> FrozenUnit {
        info!(
            "freezing unit `{}` with {} entries",
            self.unit,
            self.entries.len()
        );
        FrozenUnit {
            unit: self.unit,
            imports: self.imports,
            entries: self.entries,
        }
    }
}
