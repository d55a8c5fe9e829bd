// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Capability-limited view of elaborated host expressions.
//!
//! The host's expression language is much richer than what the translators
//! understand. This view keeps only the shapes needed to recognise literals,
//! constant-headed applications and metadata wrappers; everything else is carried
//! through opaquely so the translators can reject it with a useful diagnostic.

use crate::data::builtins;
use crate::data::name::Name;
use num::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal values
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// Natural number literal
    Nat(#[serde(with = "nat_repr")] BigUint),
    /// String literal
    Str(String),
}

/// Natural literals are written as JSON numbers when they fit in `u64` and as
/// decimal strings otherwise.
mod nat_repr {
    use num::{BigUint, ToPrimitive};
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Small(u64),
        Decimal(String),
    }

    pub fn serialize<S: Serializer>(n: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        match n.to_u64() {
            Some(small) => serializer.serialize_u64(small),
            None => serializer.serialize_str(&n.to_string()),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Small(n) => Ok(BigUint::from(n)),
            Repr::Decimal(s) => s
                .parse::<BigUint>()
                .map_err(|e| de::Error::custom(format!("invalid natural literal {s:?}: {e}"))),
        }
    }
}

/// Elaborated host expression
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Bound variable (de Bruijn index, 0 = innermost)
    #[serde(rename = "bvar")]
    BVar(u32),
    /// Universe sort; `Sort(0)` is `Prop`
    Sort(u32),
    /// Reference to a declaration
    Const(Name),
    /// Function application (curried)
    App(Box<Expr>, Box<Expr>),
    /// Lambda abstraction: binder type, body
    Lam(Box<Expr>, Box<Expr>),
    /// Pi/forall type: binder type, body
    Pi(Box<Expr>, Box<Expr>),
    /// Literal value
    Lit(Literal),
    /// Metadata wrapper, transparent for translation
    #[serde(rename = "mdata")]
    MData(Box<Expr>),
}

impl Expr {
    pub fn constant(name: impl Into<Name>) -> Self {
        Expr::Const(name.into())
    }

    pub fn nat_lit(n: impl Into<BigUint>) -> Self {
        Expr::Lit(Literal::Nat(n.into()))
    }

    pub fn str_lit(s: impl Into<String>) -> Self {
        Expr::Lit(Literal::Str(s.into()))
    }

    pub fn mdata(inner: Expr) -> Self {
        Expr::MData(Box::new(inner))
    }

    pub fn pi(binder: Expr, body: Expr) -> Self {
        Expr::Pi(Box::new(binder), Box::new(body))
    }

    pub fn lam(binder: Expr, body: Expr) -> Self {
        Expr::Lam(Box::new(binder), Box::new(body))
    }

    /// Apply `f` to `args` left to right: `app(f, [a, b])` is `(f a) b`.
    pub fn app(f: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        args.into_iter()
            .fold(f, |acc, arg| Expr::App(Box::new(acc), Box::new(arg)))
    }

    pub fn prop() -> Self {
        Expr::Sort(0)
    }

    pub fn nat_type() -> Self {
        Expr::constant(builtins::NAT)
    }

    /// The elaborated numeral `(n : Nat)`: `@OfNat.ofNat Nat n (instOfNatNat n)`.
    pub fn nat(n: impl Into<BigUint>) -> Self {
        let n = n.into();
        let inst = Expr::app(
            Expr::constant(builtins::INST_OFNAT_NAT),
            [Expr::nat_lit(n.clone())],
        );
        Expr::app(
            Expr::constant(builtins::OFNAT_OFNAT),
            [Expr::nat_type(), Expr::nat_lit(n), inst],
        )
    }

    /// `Nat.zero`
    pub fn nat_zero() -> Self {
        Expr::constant(builtins::NAT_ZERO)
    }

    /// `Nat.succ n`
    pub fn nat_succ(n: Expr) -> Self {
        Expr::app(Expr::constant(builtins::NAT_SUCC), [n])
    }

    /// The elaborated `a + b` on naturals: `@HAdd.hAdd Nat Nat Nat (instHAdd Nat instAddNat) a b`.
    pub fn nat_add(lhs: Expr, rhs: Expr) -> Self {
        let inst = Expr::app(
            Expr::constant(builtins::INST_HADD),
            [Expr::nat_type(), Expr::constant(builtins::INST_ADD_NAT)],
        );
        Expr::app(
            Expr::constant(builtins::HADD_HADD),
            [Expr::nat_type(), Expr::nat_type(), Expr::nat_type(), inst, lhs, rhs],
        )
    }

    /// `@Eq ty lhs rhs`
    pub fn eq(ty: Expr, lhs: Expr, rhs: Expr) -> Self {
        Expr::app(Expr::constant(builtins::EQ), [ty, lhs, rhs])
    }

    /// `@Eq Nat lhs rhs`
    pub fn nat_eq(lhs: Expr, rhs: Expr) -> Self {
        Expr::eq(Expr::nat_type(), lhs, rhs)
    }

    /// `And lhs rhs`
    pub fn and(lhs: Expr, rhs: Expr) -> Self {
        Expr::app(Expr::constant(builtins::AND), [lhs, rhs])
    }

    /// Remove any number of metadata wrappers.
    pub fn strip_mdata(&self) -> &Expr {
        let mut e = self;
        while let Expr::MData(inner) = e {
            e = inner;
        }
        e
    }

    /// Name of the constant if this expression is one.
    pub fn const_name(&self) -> Option<&Name> {
        match self {
            Expr::Const(name) => Some(name),
            _ => None,
        }
    }

    /// The head of an application spine.
    pub fn get_app_fn(&self) -> &Expr {
        let mut e = self;
        while let Expr::App(f, _) = e {
            e = f;
        }
        e
    }

    /// Split an application spine into its head and arguments, first argument first.
    pub fn get_app_fn_args(&self) -> (&Expr, Vec<&Expr>) {
        let mut args = Vec::new();
        let mut e = self;
        while let Expr::App(f, arg) = e {
            args.push(arg.as_ref());
            e = f;
        }
        args.reverse();
        (e, args)
    }

    /// Head constant and arguments, if the head of the spine is a constant.
    pub fn const_app(&self) -> Option<(&Name, Vec<&Expr>)> {
        let (head, args) = self.get_app_fn_args();
        head.const_name().map(|name| (name, args))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Nat(n) => write!(f, "{n}"),
            Literal::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// Compact host-style rendering used in diagnostics.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::BVar(idx) => write!(f, "#{idx}"),
            Expr::Sort(0) => write!(f, "Prop"),
            Expr::Sort(level) => write!(f, "Sort {level}"),
            Expr::Const(name) => write!(f, "{name}"),
            Expr::App(..) => {
                let (head, args) = self.get_app_fn_args();
                write!(f, "({head}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                write!(f, ")")
            }
            Expr::Lam(ty, body) => write!(f, "(fun _ : {ty} => {body})"),
            Expr::Pi(ty, body) => write!(f, "({ty} → {body})"),
            Expr::Lit(lit) => write!(f, "{lit}"),
            Expr::MData(inner) => write!(f, "{inner}"),
        }
    }
}
