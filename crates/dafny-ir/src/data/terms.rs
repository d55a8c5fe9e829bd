// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Dafny expression algebra produced by the translators.

use num::BigUint;

/// A Dafny value expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Natural number constant
    Num(BigUint),
    /// `lhs + rhs`
    Add(Box<Term>, Box<Term>),
    /// Call of a Dafny function: `f(args)`
    App(String, Vec<Term>),
}

/// A Dafny boolean expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// `lhs == rhs`
    Eq(Term, Term),
    /// `lhs && rhs`
    And(Box<Formula>, Box<Formula>),
}

impl Term {
    pub fn num(n: impl Into<BigUint>) -> Self {
        Term::Num(n.into())
    }

    pub fn add(lhs: Term, rhs: Term) -> Self {
        Term::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn app(function: impl Into<String>, args: Vec<Term>) -> Self {
        Term::App(function.into(), args)
    }
}

impl Formula {
    pub fn eq(lhs: Term, rhs: Term) -> Self {
        Formula::Eq(lhs, rhs)
    }

    pub fn and(lhs: Formula, rhs: Formula) -> Self {
        Formula::And(Box::new(lhs), Box::new(rhs))
    }

    /// Number of `==` atoms in this formula.
    pub fn atom_count(&self) -> usize {
        match self {
            Formula::Eq(..) => 1,
            Formula::And(lhs, rhs) => lhs.atom_count() + rhs.atom_count(),
        }
    }
}
