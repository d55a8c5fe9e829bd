// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Compilation unit source files
//!
//! A unit is a JSON document listing its imports and the commands the host
//! processed, in file order, with every expression already elaborated.

use crate::attributes::AttributeSyntax;
use anyhow::Context;
use dafny_ir::{Expr, Name};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitSource {
    pub name: Name,
    #[serde(default)]
    pub imports: Vec<Name>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

/// One top-level command of a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// `@[attributes] theorem/def name : type := value`
    Declare {
        name: Name,
        #[serde(rename = "type")]
        ty: Expr,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Expr>,
        #[serde(default)]
        attributes: Vec<AttributeSyntax>,
    },
    /// `attribute [attributes] decl`
    Attribute {
        decl: Name,
        attributes: Vec<AttributeSyntax>,
    },
    /// `attribute [-attribute] decl`
    EraseAttribute { decl: Name, attribute: String },
    /// `#export_dafny`
    ExportDafny,
}

impl UnitSource {
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("malformed unit")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read unit {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("in {}", path.display()))
    }
}
