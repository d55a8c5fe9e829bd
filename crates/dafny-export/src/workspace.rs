// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Frozen unit logs on disk and import resolution.

use anyhow::{anyhow, bail, Context};
use dafny_backend::Options;
use dafny_ir::{FrozenUnit, Name, TranslationState};
use itertools::Itertools;
use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

/// Build directory holding one `<unit>.<suffix>` entry log per compiled unit.
pub struct Workspace {
    build_dir: PathBuf,
    suffix: String,
    units: BTreeMap<Name, FrozenUnit>,
}

impl Workspace {
    pub fn new(options: &Options) -> Self {
        Self {
            build_dir: PathBuf::from(&options.build_dir),
            suffix: options.entry_file_suffix.clone(),
            units: BTreeMap::new(),
        }
    }

    /// `<build_dir>/<unit>.<suffix>`. Unit names become file names, so they
    /// must not contain path separators.
    pub fn entry_path(&self, unit: &Name) -> anyhow::Result<PathBuf> {
        let name = unit.as_str();
        if name.is_empty() || name.contains(['/', '\\']) {
            bail!("invalid unit name `{unit}`: unit names cannot contain path separators");
        }
        Ok(self.build_dir.join(format!("{name}.{}", self.suffix)))
    }

    /// Frozen unit, loading it from the build directory on first use.
    pub fn load(&mut self, unit: &Name) -> anyhow::Result<&FrozenUnit> {
        if !self.units.contains_key(unit) {
            let path = self.entry_path(unit)?;
            if !path.exists() {
                bail!("unit `{unit}` has not been compiled (no {})", path.display());
            }
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let frozen: FrozenUnit = serde_json::from_str(&content)
                .with_context(|| format!("malformed entry log {}", path.display()))?;
            if &frozen.unit != unit {
                bail!(
                    "{} holds unit `{}`, expected `{unit}`",
                    path.display(),
                    frozen.unit
                );
            }
            debug!("loaded `{unit}` ({} entries)", frozen.entries.len());
            self.units.insert(unit.clone(), frozen);
        }
        self.units
            .get(unit)
            .ok_or_else(|| anyhow!("unit `{unit}` missing after load"))
    }

    /// Persist a frozen unit and make it available to later imports.
    pub fn store(&mut self, frozen: FrozenUnit) -> anyhow::Result<PathBuf> {
        let path = self.entry_path(&frozen.unit)?;
        fs::create_dir_all(&self.build_dir)
            .with_context(|| format!("failed to create {}", self.build_dir.display()))?;
        let content = serde_json::to_string_pretty(&frozen)?;
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
        info!(
            "stored `{}` ({} entries) in {}",
            frozen.unit,
            frozen.entries.len(),
            path.display()
        );
        self.units.insert(frozen.unit.clone(), frozen);
        Ok(path)
    }

    /// Transitive closure of `imports`: dependencies before dependents, each
    /// unit once, otherwise in import-list order.
    pub fn import_closure(&mut self, imports: &[Name]) -> anyhow::Result<Vec<Name>> {
        let mut order = Vec::new();
        let mut done = BTreeSet::new();
        let mut in_progress = Vec::new();
        for unit in imports {
            self.visit(unit, &mut order, &mut done, &mut in_progress)?;
        }
        Ok(order)
    }

    fn visit(
        &mut self,
        unit: &Name,
        order: &mut Vec<Name>,
        done: &mut BTreeSet<Name>,
        in_progress: &mut Vec<Name>,
    ) -> anyhow::Result<()> {
        if done.contains(unit) {
            return Ok(());
        }
        if in_progress.contains(unit) {
            let cycle = in_progress.iter().chain(std::iter::once(unit)).join(" -> ");
            bail!("import cycle: {cycle}");
        }
        let imports = self.load(unit)?.imports.clone();
        in_progress.push(unit.clone());
        for import in &imports {
            self.visit(import, order, done, in_progress)?;
        }
        in_progress.pop();
        done.insert(unit.clone());
        order.push(unit.clone());
        Ok(())
    }

    /// Frozen units for already resolved names.
    pub fn frozen_units<'a>(&'a self, names: &'a [Name]) -> impl Iterator<Item = &'a FrozenUnit> {
        names.iter().filter_map(|name| self.units.get(name))
    }

    /// State visible at the end of `unit`: its imports replayed, then its own
    /// entries.
    pub fn final_state(&mut self, unit: &Name) -> anyhow::Result<TranslationState> {
        let closure = self.import_closure(std::slice::from_ref(unit))?;
        Ok(TranslationState::merge_from_imports(self.frozen_units(&closure)))
    }
}
