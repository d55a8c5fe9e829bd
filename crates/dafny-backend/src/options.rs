// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Represents options provided to the tool. Options are read from an optional
/// toml file; command line flags override them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Directory holding the frozen entry logs of compiled units.
    pub build_dir: String,
    /// Verbosity level for logging.
    pub verbosity_level: LevelFilter,
    /// File receiving the export dump. Standard output when unset.
    pub output_path: Option<String>,
    /// Suffix of the per-unit entry log files, `<unit>.<suffix>`.
    pub entry_file_suffix: String,
    /// Keyword introducing exported declarations.
    pub axiom_keyword: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            build_dir: "build".to_string(),
            verbosity_level: LevelFilter::Info,
            output_path: None,
            entry_file_suffix: "dafny.json".to_string(),
            axiom_keyword: "axiom".to_string(),
        }
    }
}

impl Options {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid options")
    }

    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read options from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse options in {}", path.display()))
    }
}
