// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::data::name::DeclId;
use serde::{Deserialize, Serialize};

/// One recorded change to the symbol store.
///
/// Entries are the persisted wire format between units: replaying all entries of
/// the imported units, then the unit's own, rebuilds its [`TranslationState`].
/// Renaming a variant or field breaks previously written unit logs.
///
/// [`TranslationState`]: crate::TranslationState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// `decl` is known to Dafny as `target`
    AddDecl { decl: DeclId, target: String },
    /// A rendered Dafny declaration for the export dump
    ToExport { declaration: String },
}

impl Entry {
    pub fn add_decl(decl: impl Into<DeclId>, target: impl Into<String>) -> Self {
        Entry::AddDecl {
            decl: decl.into(),
            target: target.into(),
        }
    }

    pub fn to_export(declaration: impl Into<String>) -> Self {
        Entry::ToExport {
            declaration: declaration.into(),
        }
    }
}
