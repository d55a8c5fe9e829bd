// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Host constants the translators recognise structurally.
//!
//! The operand positions used with these constants follow the host's elaborated
//! application shape (implicit type and instance arguments come first). They are
//! tied to the host's elaborator and are not validated against it; if the host
//! changes how it elaborates `+` or numerals, the shapes below must follow.

/// The natural number type.
pub const NAT: &str = "Nat";
/// `Nat.zero`, translated to the literal `0`.
pub const NAT_ZERO: &str = "Nat.zero";
/// `Nat.succ n`, one explicit argument.
pub const NAT_SUCC: &str = "Nat.succ";
/// `@HAdd.hAdd α β γ inst a b`: three types, one instance, two operands.
pub const HADD_HADD: &str = "HAdd.hAdd";
/// `@OfNat.ofNat α n inst`: type, raw literal, instance.
pub const OFNAT_OFNAT: &str = "OfNat.ofNat";
/// `@Eq α a b`.
pub const EQ: &str = "Eq";
/// `And p q`.
pub const AND: &str = "And";

/// Instance names used when building host-shaped expressions.
pub const INST_HADD: &str = "instHAdd";
pub const INST_ADD_NAT: &str = "instAddNat";
pub const INST_OFNAT_NAT: &str = "instOfNatNat";

/// Heads whose applications are propositions. Only the head is checked, not
/// the number of arguments.
pub const PROPOSITION_FORMERS: &[&str] = &[
    EQ, AND, "Ne", "Or", "Not", "Iff", "True", "False", "LE.le", "LT.lt", "GE.ge", "GT.gt",
];
