// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Host expression -> Dafny term/formula translation
//!
//! Both translators are partial: they accept a small fragment (numerals,
//! successor, addition, mapped symbols, equality, conjunction) and reject
//! everything else with the offending sub-expression.

mod error;
mod formula_translator;
mod term_translator;

pub use error::{TranslationError, TranslationResult};
pub use formula_translator::FormulaTranslator;
pub use term_translator::TermTranslator;

use crate::{Expr, Formula, Term, TranslationState};

/// Translate an arithmetic expression, resolving mapped symbols through `state`.
pub fn translate_term(state: &TranslationState, expr: &Expr) -> TranslationResult<Term> {
    TermTranslator::new(state).translate(expr)
}

/// Translate a proposition, resolving mapped symbols through `state`.
pub fn translate_formula(state: &TranslationState, expr: &Expr) -> TranslationResult<Formula> {
    FormulaTranslator::new(state).translate(expr)
}
