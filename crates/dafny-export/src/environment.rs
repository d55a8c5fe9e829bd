// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Declaration table of the unit being compiled.
//!
//! Stands in for the host elaborator: declarations arrive fully elaborated and
//! the table only answers lookups and the "is this a proposition" question.

use dafny_ir::{builtins, Expr, Name};
use indexmap::IndexMap;

/// An accepted host declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: Name,
    /// Statement (for theorems) or signature (for definitions)
    pub ty: Expr,
}

/// What the attribute handlers need from the host.
pub trait Host {
    fn declaration(&self, name: &Name) -> Option<&Declaration>;

    /// Whether `ty` is a proposition, i.e. its own type is `Prop`.
    fn is_proposition(&self, ty: &Expr) -> bool;
}

#[derive(Debug, Default)]
pub struct Environment {
    declarations: IndexMap<Name, Declaration>,
}

/// Strip binders and metadata down to the final codomain of a type.
fn codomain(ty: &Expr) -> &Expr {
    let mut ty = ty.strip_mdata();
    while let Expr::Pi(_, body) = ty {
        ty = body.strip_mdata();
    }
    ty
}

/// `Prop`, or a function type ending in `Prop`.
fn is_sort_zero_valued(ty: &Expr) -> bool {
    matches!(codomain(ty), Expr::Sort(0))
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration. Returns `false` and leaves the table unchanged if the
    /// name is already declared.
    pub fn add(&mut self, declaration: Declaration) -> bool {
        if self.declarations.contains_key(&declaration.name) {
            return false;
        }
        self.declarations
            .insert(declaration.name.clone(), declaration);
        true
    }
}

impl Host for Environment {
    fn declaration(&self, name: &Name) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    fn is_proposition(&self, ty: &Expr) -> bool {
        // Binder types of the enclosing Pis, outermost first
        let mut binders = Vec::new();
        let mut ty = ty.strip_mdata();
        while let Expr::Pi(binder, body) = ty {
            binders.push(binder.as_ref());
            ty = body.strip_mdata();
        }

        match ty.get_app_fn().strip_mdata() {
            Expr::Const(name) => {
                builtins::PROPOSITION_FORMERS.contains(&name.as_str())
                    || self
                        .declaration(name)
                        .is_some_and(|d| is_sort_zero_valued(&d.ty))
            }
            Expr::BVar(idx) => binders
                .len()
                .checked_sub(*idx as usize + 1)
                .and_then(|level| binders.get(level))
                .is_some_and(|binder| is_sort_zero_valued(binder)),
            _ => false,
        }
    }
}
