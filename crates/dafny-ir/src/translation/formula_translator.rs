// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Translates host propositions to Dafny formulas

use crate::data::builtins;
use crate::translation::{TermTranslator, TranslationError, TranslationResult};
use crate::{Expr, Formula, TranslationState};

pub struct FormulaTranslator<'s> {
    terms: TermTranslator<'s>,
}

impl<'s> FormulaTranslator<'s> {
    pub fn new(symbols: &'s TranslationState) -> Self {
        Self {
            terms: TermTranslator::new(symbols),
        }
    }

    pub fn translate(&self, expr: &Expr) -> TranslationResult<Formula> {
        match expr {
            Expr::MData(inner) => self.translate(inner),
            Expr::App(..) => self.translate_app(expr),
            _ => Err(TranslationError::UnsupportedExpression(expr.clone())),
        }
    }

    fn translate_app(&self, expr: &Expr) -> TranslationResult<Formula> {
        let Some((name, args)) = expr.const_app() else {
            return Err(TranslationError::UnsupportedApplication(expr.clone()));
        };

        match (name.as_str(), args.as_slice()) {
            (builtins::EQ, [_ty, lhs, rhs]) => Ok(Formula::eq(
                self.terms.translate(lhs)?,
                self.terms.translate(rhs)?,
            )),
            (builtins::AND, [lhs, rhs]) => {
                Ok(Formula::and(self.translate(lhs)?, self.translate(rhs)?))
            }
            _ => Err(TranslationError::UnsupportedConstantApplication(expr.clone())),
        }
    }
}
