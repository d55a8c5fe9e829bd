// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! `align_dafny` and `export_dafny` attribute handlers
//!
//! Handlers run right after the host accepts a declaration. A failing handler
//! leaves the declaration in place and records nothing; only the extra
//! translation step is rejected.

use crate::environment::Host;
use dafny_backend::{axiom_declaration, Options};
use dafny_ir::{translate_formula, Name, TranslationError, UnitState};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const ALIGN_DAFNY: &str = "align_dafny";
pub const EXPORT_DAFNY: &str = "export_dafny";

/// The two registered attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Map the declaration onto an existing Dafny symbol
    AlignDafny,
    /// Translate the declaration's statement into a Dafny axiom
    ExportDafny,
}

impl AttributeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            ALIGN_DAFNY => Some(AttributeKind::AlignDafny),
            EXPORT_DAFNY => Some(AttributeKind::ExportDafny),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeKind::AlignDafny => ALIGN_DAFNY,
            AttributeKind::ExportDafny => EXPORT_DAFNY,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An attribute argument as written at the use site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrArg {
    /// String literal
    Str(String),
    /// Bare identifier
    Ident(Name),
    /// Numeric literal
    Num(u64),
}

/// `@[name args...]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSyntax {
    pub name: String,
    #[serde(default)]
    pub args: Vec<AttrArg>,
}

impl AttributeSyntax {
    pub fn new(name: impl Into<String>, args: Vec<AttrArg>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// `@[name "target"]`
    pub fn with_str(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, vec![AttrArg::Str(target.into())])
    }

    /// The single string-literal argument both attributes take.
    fn string_parameter(&self) -> Result<&str, AttributeError> {
        match self.args.as_slice() {
            [AttrArg::Str(s)] => Ok(s),
            _ => Err(AttributeError::InvalidAttributeParameter {
                attribute: self.name.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("invalid parameter for attribute `{attribute}`: expected exactly one string literal")]
    InvalidAttributeParameter { attribute: String },

    #[error("cannot export `{decl}`: only propositions are supported")]
    OnlyPropositionsSupported { decl: Name },

    #[error("attribute `{attribute}` cannot be removed")]
    AttributeCannotBeRemoved { attribute: AttributeKind },

    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    #[error("unknown declaration `{0}`")]
    UnknownDeclaration(Name),

    #[error(transparent)]
    Translation(#[from] TranslationError),
}

/// Runs attribute handlers against the unit's symbol store.
pub struct AttributeHandlers {
    axiom_keyword: String,
}

impl AttributeHandlers {
    pub fn new(options: &Options) -> Self {
        Self {
            axiom_keyword: options.axiom_keyword.clone(),
        }
    }

    /// Fire `attribute` for `decl`. Returns which handler ran.
    pub fn apply(
        &self,
        host: &impl Host,
        unit: &mut UnitState,
        decl: &Name,
        attribute: &AttributeSyntax,
    ) -> Result<AttributeKind, AttributeError> {
        let kind = AttributeKind::from_name(&attribute.name)
            .ok_or_else(|| AttributeError::UnknownAttribute(attribute.name.clone()))?;
        let target = attribute.string_parameter()?;
        match kind {
            AttributeKind::AlignDafny => self.align(unit, decl, target),
            AttributeKind::ExportDafny => self.export(host, unit, decl, target)?,
        }
        Ok(kind)
    }

    /// `align_dafny`: bind `decl` to an existing Dafny symbol.
    pub fn align(&self, unit: &mut UnitState, decl: &Name, target: &str) {
        debug!("aligning `{decl}` with Dafny `{target}`");
        unit.add_decl(decl.clone(), target.to_string());
    }

    /// `export_dafny`: translate the statement of `decl` into an axiom named
    /// `target` and bind `decl` to that name.
    pub fn export(
        &self,
        host: &impl Host,
        unit: &mut UnitState,
        decl: &Name,
        target: &str,
    ) -> Result<(), AttributeError> {
        let declaration = host
            .declaration(decl)
            .ok_or_else(|| AttributeError::UnknownDeclaration(decl.clone()))?;
        if !host.is_proposition(&declaration.ty) {
            return Err(AttributeError::OnlyPropositionsSupported { decl: decl.clone() });
        }

        let formula = translate_formula(unit.state(), &declaration.ty)?;
        let axiom = axiom_declaration(&self.axiom_keyword, target, &formula);
        debug!(
            "exporting `{decl}` ({} equations): {axiom}",
            formula.atom_count()
        );

        unit.add_export(axiom);
        unit.add_decl(decl.clone(), target.to_string());
        Ok(())
    }

    /// Attribute removal. Recorded mappings and exports cannot be retracted, so
    /// this always fails.
    pub fn erase(&self, attribute: &str) -> Result<(), AttributeError> {
        match AttributeKind::from_name(attribute) {
            Some(kind) => Err(AttributeError::AttributeCannotBeRemoved { attribute: kind }),
            None => Err(AttributeError::UnknownAttribute(attribute.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Declaration, Environment};
    use dafny_ir::{Entry, Expr};

    fn handlers() -> AttributeHandlers {
        AttributeHandlers::new(&Options::default())
    }

    fn unit() -> UnitState {
        UnitState::new(Name::new("Test"), vec![], [])
    }

    fn declare(env: &mut Environment, name: &str, ty: Expr) -> Name {
        let name = Name::new(name);
        env.add(Declaration {
            name: name.clone(),
            ty,
        });
        name
    }

    fn foo_app(n: u32) -> Expr {
        Expr::app(Expr::constant("foo"), [Expr::nat(n)])
    }

    /// `def foo (x : Nat) : Nat := x + 1` aligned with `bla`
    fn setup() -> (Environment, UnitState) {
        let mut env = Environment::new();
        let mut unit = unit();
        let foo = declare(&mut env, "foo", Expr::pi(Expr::nat_type(), Expr::nat_type()));
        handlers()
            .apply(&env, &mut unit, &foo, &AttributeSyntax::with_str(ALIGN_DAFNY, "bla"))
            .unwrap();
        (env, unit)
    }

    #[test]
    fn test_align_records_mapping() {
        let (_, unit) = setup();
        assert_eq!(unit.state().find(&Name::new("foo")), Some("bla"));
        assert_eq!(unit.entries(), &[Entry::add_decl("foo", "bla")]);
    }

    #[test]
    fn test_export_simple_equation() {
        let (mut env, mut unit) = setup();
        let thm = declare(&mut env, "simple1", Expr::nat_eq(Expr::nat(2u32), foo_app(1)));

        let kind = handlers()
            .apply(&env, &mut unit, &thm, &AttributeSyntax::with_str(EXPORT_DAFNY, "simple1D"))
            .unwrap();
        assert_eq!(kind, AttributeKind::ExportDafny);
        assert_eq!(
            unit.state().exports().collect::<Vec<_>>(),
            vec!["axiom simple1D : 2 == bla(1)"]
        );
        // the theorem itself becomes referenceable
        assert_eq!(unit.state().find(&thm), Some("simple1D"));
        assert_eq!(
            &unit.entries()[1..],
            &[
                Entry::to_export("axiom simple1D : 2 == bla(1)"),
                Entry::add_decl("simple1", "simple1D"),
            ]
        );
    }

    #[test]
    fn test_export_conjunction() {
        let (mut env, mut unit) = setup();
        let thm = declare(
            &mut env,
            "simple2",
            Expr::and(
                Expr::nat_eq(Expr::nat(3u32), Expr::nat_add(Expr::nat(2u32), Expr::nat(1u32))),
                Expr::nat_eq(Expr::nat(1u32), foo_app(0)),
            ),
        );
        handlers()
            .apply(&env, &mut unit, &thm, &AttributeSyntax::with_str(EXPORT_DAFNY, "simple2D"))
            .unwrap();
        assert_eq!(
            unit.state().exports().collect::<Vec<_>>(),
            vec!["axiom simple2D : 3 == 2 + 1 && 1 == bla(0)"]
        );
    }

    #[test]
    fn test_export_of_non_proposition_records_nothing() {
        let (mut env, mut unit) = setup();
        let def = declare(&mut env, "two", Expr::nat_type());
        let before = unit.entries().len();

        let err = handlers()
            .apply(&env, &mut unit, &def, &AttributeSyntax::with_str(EXPORT_DAFNY, "twoD"))
            .unwrap_err();
        assert_eq!(err, AttributeError::OnlyPropositionsSupported { decl: def.clone() });
        assert_eq!(unit.entries().len(), before);
        assert_eq!(unit.state().export_count(), 0);
        assert_eq!(unit.state().find(&def), None);
    }

    #[test]
    fn test_failed_translation_records_nothing() {
        let mut env = Environment::new();
        let mut unit = unit();
        // foo is not aligned in this unit
        let thm = declare(&mut env, "t", Expr::nat_eq(Expr::nat(2u32), foo_app(1)));

        let err = handlers()
            .apply(&env, &mut unit, &thm, &AttributeSyntax::with_str(EXPORT_DAFNY, "tD"))
            .unwrap_err();
        assert_eq!(
            err,
            AttributeError::Translation(TranslationError::UnsupportedConstantApplication(foo_app(1)))
        );
        assert!(unit.entries().is_empty());
    }

    #[test]
    fn test_quantified_proposition_reaches_the_translator() {
        let mut env = Environment::new();
        let mut unit = unit();
        // ∀ p : Prop, p
        let statement = Expr::pi(Expr::prop(), Expr::BVar(0));
        let thm = declare(&mut env, "everything", statement.clone());

        let err = handlers()
            .apply(&env, &mut unit, &thm, &AttributeSyntax::with_str(EXPORT_DAFNY, "everythingD"))
            .unwrap_err();
        assert_eq!(
            err,
            AttributeError::Translation(TranslationError::UnsupportedExpression(statement))
        );
        assert!(unit.entries().is_empty());
    }

    #[test]
    fn test_parameters_must_be_single_string_literal() {
        let (env, mut unit) = setup();
        let foo = Name::new("foo");
        for args in [
            vec![],
            vec![AttrArg::Ident(Name::new("bla"))],
            vec![AttrArg::Num(3)],
            vec![AttrArg::Str("a".to_string()), AttrArg::Str("b".to_string())],
        ] {
            let err = handlers()
                .apply(&env, &mut unit, &foo, &AttributeSyntax::new(ALIGN_DAFNY, args))
                .unwrap_err();
            assert_eq!(
                err,
                AttributeError::InvalidAttributeParameter {
                    attribute: ALIGN_DAFNY.to_string()
                }
            );
        }
    }

    #[test]
    fn test_attributes_cannot_be_removed() {
        let handlers = handlers();
        for kind in [AttributeKind::AlignDafny, AttributeKind::ExportDafny] {
            assert_eq!(
                handlers.erase(kind.name()),
                Err(AttributeError::AttributeCannotBeRemoved { attribute: kind })
            );
        }
        assert_eq!(
            handlers.erase("simp"),
            Err(AttributeError::UnknownAttribute("simp".to_string()))
        );
    }

    #[test]
    fn test_translation_is_deterministic() {
        let (mut env, mut unit) = setup();
        let thm = declare(&mut env, "t", Expr::nat_eq(Expr::nat(2u32), foo_app(1)));
        let h = handlers();
        h.export(&env, &mut unit, &thm, "a").unwrap();
        h.export(&env, &mut unit, &thm, "a").unwrap();
        let exports: Vec<_> = unit.state().exports().collect();
        assert_eq!(exports[0], exports[1]);
    }
}
