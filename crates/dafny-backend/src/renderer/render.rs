// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders terms and formulas to Dafny syntax

use super::dafny_writer::{render_to_string, DafnyWriter};
use dafny_ir::{Formula, Term};
use std::fmt::{self, Write};

pub fn render_term<W: Write>(w: &mut DafnyWriter<W>, term: &Term) -> fmt::Result {
    match term {
        Term::Num(n) => w.emit(n),
        Term::Add(lhs, rhs) => {
            render_term(w, lhs)?;
            w.write(" + ")?;
            render_term(w, rhs)
        }
        Term::App(function, args) => {
            w.write(function)?;
            w.write("(")?;
            w.sep_with(", ", args, |w, arg| render_term(w, arg))?;
            w.write(")")
        }
    }
}

pub fn render_formula<W: Write>(w: &mut DafnyWriter<W>, formula: &Formula) -> fmt::Result {
    match formula {
        Formula::Eq(lhs, rhs) => {
            render_term(w, lhs)?;
            w.write(" == ")?;
            render_term(w, rhs)
        }
        Formula::And(lhs, rhs) => {
            render_formula(w, lhs)?;
            w.write(" && ")?;
            render_formula(w, rhs)
        }
    }
}

pub fn term_to_string(term: &Term) -> String {
    render_to_string(|w| render_term(w, term))
}

pub fn formula_to_string(formula: &Formula) -> String {
    render_to_string(|w| render_formula(w, formula))
}

/// `<keyword> <name> : <formula>`, e.g. `axiom simple1D : 2 == bla(1)`.
pub fn axiom_declaration(keyword: &str, name: &str, formula: &Formula) -> String {
    render_to_string(|w| {
        w.write(keyword)?;
        w.write(" ")?;
        w.write(name)?;
        w.write(" : ")?;
        render_formula(w, formula)
    })
}
