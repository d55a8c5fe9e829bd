// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Dafny export IR
//!
//! This crate holds everything between the host's elaborated expressions and the
//! textual Dafny output: a capability-limited view of host expressions, the Dafny
//! term/formula algebra, the translators between the two, and the symbol store
//! that carries name mappings across compilation units. It does NOT render Dafny
//! text - that belongs to `dafny-backend`.

mod data;
pub mod state;
pub mod translation;

// Host constants recognised by the translators (from data/builtins.rs)
pub use data::builtins;

// Host expression view (from data/expr.rs)
pub use data::expr::{Expr, Literal};

// Hierarchical names (from data/name.rs)
pub use data::name::{DeclId, Name};

// Dafny term algebra (from data/terms.rs)
pub use data::terms::{Formula, Term};

// Symbol store (from state/)
pub use state::{Entry, FrozenUnit, TranslationState, UnitState};

// Translators (from translation/)
pub use translation::{translate_formula, translate_term, TranslationError, TranslationResult};
