// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Hierarchical declaration names like `Nat.succ` or `HAdd.hAdd`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dotted host-language name.
///
/// Stored as the full dotted string; components are only split on demand.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

/// Identifier of a host declaration, unique within one compilation.
pub type DeclId = Name;

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
