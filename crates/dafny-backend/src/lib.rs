// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Dafny backend
//!
//! Renders translated terms and formulas to Dafny syntax and writes the export
//! dump. No translation logic lives here.

pub mod generator;
pub mod options;
pub mod renderer;

pub use generator::{dump_exports, export_lines, write_exports};
pub use options::Options;
pub use renderer::{axiom_declaration, formula_to_string, term_to_string, DafnyWriter};
