// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Dafny renderer - pure structural printing, no precedence handling.
//!
//! The fragment produced by the translators never nests `+` under `==` or `&&`
//! in a way that needs parentheses, so none are emitted. A richer term algebra
//! would need precedence-aware printing here.

mod dafny_writer;
mod render;

pub use dafny_writer::{render_to_string, DafnyWriter};
pub use render::{
    axiom_declaration, formula_to_string, render_formula, render_term, term_to_string,
};
