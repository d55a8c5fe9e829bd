// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! User-facing diagnostics for rejected attributes and commands.

use crate::attributes::AttributeError;
use codespan_reporting::diagnostic::{Diagnostic, Severity};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::{self, termcolor::WriteColor, Config};
use dafny_ir::Name;

/// Diagnostics carry no source labels, so the file id is never resolved.
pub type UnitDiagnostic = Diagnostic<usize>;

pub fn attribute_error(unit: &Name, decl: &Name, attribute: &str, error: &AttributeError) -> UnitDiagnostic {
    let mut notes = vec![format!("in unit `{unit}`, declaration `{decl}`")];
    match error {
        AttributeError::Translation(inner) => {
            notes.push(format!("rejected sub-expression: {}", inner.expr()));
            notes.push(
                "exportable statements use numerals, `Nat.succ`, `+`, aligned symbols, `=` and `∧`"
                    .to_string(),
            );
        }
        AttributeError::AttributeCannotBeRemoved { .. } => {
            notes.push("recorded Dafny mappings and exports cannot be retracted".to_string());
        }
        _ => {}
    }
    Diagnostic::error()
        .with_message(format!("`{attribute}` failed: {error}"))
        .with_notes(notes)
}

pub fn duplicate_declaration(unit: &Name, decl: &Name) -> UnitDiagnostic {
    Diagnostic::error()
        .with_message(format!("`{decl}` has already been declared"))
        .with_notes(vec![format!("in unit `{unit}`")])
}

pub fn error_count(diagnostics: &[UnitDiagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity >= Severity::Error)
        .count()
}

pub fn emit<W: WriteColor>(writer: &mut W, diagnostics: &[UnitDiagnostic]) -> anyhow::Result<()> {
    let files = SimpleFiles::<String, String>::new();
    let config = Config::default();
    for diagnostic in diagnostics {
        term::emit(writer, &config, &files, diagnostic)?;
    }
    Ok(())
}
