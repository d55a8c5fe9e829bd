// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Translates host arithmetic expressions to Dafny terms

use crate::data::builtins;
use crate::translation::{TranslationError, TranslationResult};
use crate::{Expr, Literal, Term, TranslationState};

pub struct TermTranslator<'s> {
    symbols: &'s TranslationState,
}

impl<'s> TermTranslator<'s> {
    pub fn new(symbols: &'s TranslationState) -> Self {
        Self { symbols }
    }

    pub fn translate(&self, expr: &Expr) -> TranslationResult<Term> {
        match expr {
            Expr::Lit(Literal::Nat(n)) => Ok(Term::Num(n.clone())),

            Expr::MData(inner) => self.translate(inner),

            Expr::Const(name) if name.as_str() == builtins::NAT_ZERO => Ok(Term::num(0u32)),

            Expr::App(..) => self.translate_app(expr),

            _ => Err(TranslationError::UnsupportedExpression(expr.clone())),
        }
    }

    fn translate_app(&self, expr: &Expr) -> TranslationResult<Term> {
        let Some((name, args)) = expr.const_app() else {
            return Err(TranslationError::UnsupportedApplication(expr.clone()));
        };

        // Mapped symbols take precedence over the built-in rules
        if let Some(target) = self.symbols.find(name) {
            let args = args
                .into_iter()
                .map(|arg| self.translate(arg))
                .collect::<TranslationResult<Vec<_>>>()?;
            return Ok(Term::app(target, args));
        }

        match (name.as_str(), args.as_slice()) {
            (builtins::HADD_HADD, [_, _, _, _inst, lhs, rhs]) => {
                Ok(Term::add(self.translate(lhs)?, self.translate(rhs)?))
            }
            (builtins::NAT_SUCC, [n]) => Ok(Term::add(self.translate(n)?, Term::num(1u32))),
            (builtins::OFNAT_OFNAT, [_ty, literal, _inst]) => self.translate(literal),
            _ => Err(TranslationError::UnsupportedConstantApplication(expr.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Name;

    fn mapped(pairs: &[(&str, &str)]) -> TranslationState {
        let mut state = TranslationState::new();
        for (k, v) in pairs {
            state.insert(Name::new(*k), v.to_string());
        }
        state
    }

    fn translate(state: &TranslationState, expr: &Expr) -> TranslationResult<Term> {
        TermTranslator::new(state).translate(expr)
    }

    #[test]
    fn test_literals() {
        let state = TranslationState::new();
        for n in [0u32, 1, 7, 4096] {
            assert_eq!(translate(&state, &Expr::nat_lit(n)), Ok(Term::num(n)));
            assert_eq!(translate(&state, &Expr::nat(n)), Ok(Term::num(n)));
        }
    }

    #[test]
    fn test_zero_and_metadata() {
        let state = TranslationState::new();
        assert_eq!(translate(&state, &Expr::nat_zero()), Ok(Term::num(0u32)));
        assert_eq!(
            translate(&state, &Expr::mdata(Expr::nat(5u32))),
            Ok(Term::num(5u32))
        );
    }

    #[test]
    fn test_successor() {
        let state = TranslationState::new();
        assert_eq!(
            translate(&state, &Expr::nat_succ(Expr::nat(4u32))),
            Ok(Term::add(Term::num(4u32), Term::num(1u32)))
        );
    }

    #[test]
    fn test_addition_uses_last_two_arguments() {
        let state = TranslationState::new();
        assert_eq!(
            translate(&state, &Expr::nat_add(Expr::nat(2u32), Expr::nat(3u32))),
            Ok(Term::add(Term::num(2u32), Term::num(3u32)))
        );
    }

    #[test]
    fn test_mapped_symbol() {
        let state = mapped(&[("foo", "bla")]);
        let e = Expr::app(Expr::constant("foo"), [Expr::nat(1u32)]);
        assert_eq!(
            translate(&state, &e),
            Ok(Term::app("bla", vec![Term::num(1u32)]))
        );
    }

    #[test]
    fn test_bare_mapped_constant_is_rejected() {
        let state = mapped(&[("foo", "bla")]);
        assert_eq!(
            translate(&state, &Expr::constant("foo")),
            Err(TranslationError::UnsupportedExpression(Expr::constant("foo")))
        );
    }

    #[test]
    fn test_mapping_overrides_builtin_rule() {
        let state = mapped(&[("Nat.succ", "succ")]);
        assert_eq!(
            translate(&state, &Expr::nat_succ(Expr::nat_zero())),
            Ok(Term::app("succ", vec![Term::num(0u32)]))
        );
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let state = TranslationState::new();
        let e = Expr::app(
            Expr::constant("HAdd.hAdd"),
            [Expr::nat(1u32), Expr::nat(2u32)],
        );
        assert_eq!(
            translate(&state, &e),
            Err(TranslationError::UnsupportedConstantApplication(e.clone()))
        );
    }

    #[test]
    fn test_unmapped_constant_application() {
        let state = TranslationState::new();
        let e = Expr::app(Expr::constant("foo"), [Expr::nat(1u32)]);
        assert_eq!(
            translate(&state, &e),
            Err(TranslationError::UnsupportedConstantApplication(e.clone()))
        );
    }

    #[test]
    fn test_non_constant_head() {
        let state = TranslationState::new();
        let e = Expr::app(Expr::BVar(0), [Expr::nat(1u32)]);
        assert_eq!(
            translate(&state, &e),
            Err(TranslationError::UnsupportedApplication(e.clone()))
        );
    }

    #[test]
    fn test_other_expressions() {
        let state = TranslationState::new();
        for e in [Expr::BVar(0), Expr::str_lit("x"), Expr::prop(), Expr::constant("bar")] {
            assert_eq!(
                translate(&state, &e),
                Err(TranslationError::UnsupportedExpression(e.clone()))
            );
        }
    }

    #[test]
    fn test_argument_failure_reports_inner_expression() {
        let state = mapped(&[("foo", "bla")]);
        let bad = Expr::BVar(3);
        let e = Expr::app(Expr::constant("foo"), [Expr::nat(1u32), bad.clone()]);
        let err = translate(&state, &e).unwrap_err();
        assert_eq!(err.expr(), &bad);
    }
}
