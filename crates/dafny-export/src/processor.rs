// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Processes one compilation unit: merges its imports, runs its commands in
//! order, then freezes and persists its entry log.

use crate::attributes::{AttributeHandlers, AttributeSyntax};
use crate::diagnostics::{self, UnitDiagnostic};
use crate::environment::{Declaration, Environment, Host};
use crate::unit::{Command, UnitSource};
use crate::workspace::Workspace;
use anyhow::bail;
use dafny_backend::{export_lines, Options};
use dafny_ir::{FrozenUnit, Name, UnitState};
use log::{debug, info};
use std::path::PathBuf;

/// Where a declaration ended up after its attributes ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationStatus {
    /// Accepted by the host, no attribute fired
    Declared,
    /// Every attribute handler succeeded
    Translated,
    /// At least one handler failed; the declaration itself stands
    Rejected,
}

/// Outcome of compiling one unit
#[derive(Debug)]
pub struct UnitReport {
    pub unit: Name,
    /// Where the frozen entry log was written
    pub entry_path: PathBuf,
    /// Number of entries the unit recorded itself
    pub entry_count: usize,
    pub statuses: Vec<(Name, DeclarationStatus)>,
    pub diagnostics: Vec<UnitDiagnostic>,
    /// Lines produced by `#export_dafny` commands, in order
    pub dumped: Vec<String>,
}

impl UnitReport {
    pub fn has_errors(&self) -> bool {
        diagnostics::error_count(&self.diagnostics) > 0
    }

    pub fn status(&self, decl: &Name) -> Option<DeclarationStatus> {
        self.statuses
            .iter()
            .rev()
            .find(|(name, _)| name == decl)
            .map(|(_, status)| *status)
    }
}

pub struct UnitProcessor {
    handlers: AttributeHandlers,
    env: Environment,
    unit: UnitState,
    statuses: Vec<(Name, DeclarationStatus)>,
    diagnostics: Vec<UnitDiagnostic>,
    dumped: Vec<String>,
}

impl UnitProcessor {
    pub fn new(options: &Options, unit: UnitState) -> Self {
        Self {
            handlers: AttributeHandlers::new(options),
            env: Environment::new(),
            unit,
            statuses: vec![],
            diagnostics: vec![],
            dumped: vec![],
        }
    }

    pub fn process(&mut self, command: Command) {
        match command {
            Command::Declare {
                name,
                ty,
                value,
                attributes,
            } => {
                debug!(
                    "declaring `{name}` : {ty}{}",
                    if value.is_some() { " (with body)" } else { "" }
                );
                let declaration = Declaration {
                    name: name.clone(),
                    ty,
                };
                if !self.env.add(declaration) {
                    self.diagnostics
                        .push(diagnostics::duplicate_declaration(self.unit.unit(), &name));
                    return;
                }
                self.fire(&name, &attributes);
            }

            Command::Attribute { decl, attributes } => {
                if self.env.declaration(&decl).is_none() {
                    self.unknown_declaration(&decl, &attributes);
                    return;
                }
                self.fire(&decl, &attributes);
            }

            Command::EraseAttribute { decl, attribute } => {
                let result = match self.env.declaration(&decl) {
                    Some(_) => self.handlers.erase(&attribute),
                    None => Err(crate::attributes::AttributeError::UnknownDeclaration(decl.clone())),
                };
                if let Err(error) = result {
                    self.diagnostics.push(diagnostics::attribute_error(
                        self.unit.unit(),
                        &decl,
                        &attribute,
                        &error,
                    ));
                }
            }

            Command::ExportDafny => {
                let lines = export_lines(self.unit.state());
                debug!("#export_dafny: {} declarations", lines.len());
                self.dumped.extend(lines);
            }
        }
    }

    /// Run the handlers of `attributes` for an accepted declaration.
    fn fire(&mut self, decl: &Name, attributes: &[AttributeSyntax]) {
        let mut status = DeclarationStatus::Declared;
        for attribute in attributes {
            match self.handlers.apply(&self.env, &mut self.unit, decl, attribute) {
                Ok(kind) => {
                    debug!("`{kind}` applied to `{decl}`");
                    if status == DeclarationStatus::Declared {
                        status = DeclarationStatus::Translated;
                    }
                }
                Err(error) => {
                    status = DeclarationStatus::Rejected;
                    self.diagnostics.push(diagnostics::attribute_error(
                        self.unit.unit(),
                        decl,
                        &attribute.name,
                        &error,
                    ));
                }
            }
        }
        self.statuses.push((decl.clone(), status));
    }

    fn unknown_declaration(&mut self, decl: &Name, attributes: &[AttributeSyntax]) {
        let error = crate::attributes::AttributeError::UnknownDeclaration(decl.clone());
        for attribute in attributes {
            self.diagnostics.push(diagnostics::attribute_error(
                self.unit.unit(),
                decl,
                &attribute.name,
                &error,
            ));
        }
    }

    /// Freeze the unit's own history.
    pub fn finish(
        self,
    ) -> (
        FrozenUnit,
        Vec<(Name, DeclarationStatus)>,
        Vec<UnitDiagnostic>,
        Vec<String>,
    ) {
        (self.unit.freeze(), self.statuses, self.diagnostics, self.dumped)
    }
}

/// Compile `source` against the units already in `workspace` and persist it.
pub fn compile_unit(
    workspace: &mut Workspace,
    options: &Options,
    source: UnitSource,
) -> anyhow::Result<UnitReport> {
    workspace.entry_path(&source.name)?;
    let closure = workspace.import_closure(&source.imports)?;
    if closure.contains(&source.name) {
        bail!("unit `{}` imports itself", source.name);
    }
    let unit = UnitState::new(
        source.name.clone(),
        source.imports,
        workspace.frozen_units(&closure),
    );
    info!(
        "compiling `{}` ({} commands, {} units imported, {} symbols visible)",
        source.name,
        source.commands.len(),
        closure.len(),
        unit.state().symbol_count()
    );
    let mut processor = UnitProcessor::new(options, unit);
    for command in source.commands {
        processor.process(command);
    }

    let (frozen, statuses, diagnostics, dumped) = processor.finish();
    let entry_count = frozen.entries.len();
    let entry_path = workspace.store(frozen)?;

    Ok(UnitReport {
        unit: source.name,
        entry_path,
        entry_count,
        statuses,
        diagnostics,
        dumped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{ALIGN_DAFNY, EXPORT_DAFNY};
    use dafny_ir::Expr;
    use tempfile::TempDir;

    fn options(dir: &TempDir) -> Options {
        Options {
            build_dir: dir.path().to_string_lossy().to_string(),
            ..Options::default()
        }
    }

    fn declare(name: &str, ty: Expr, attributes: Vec<AttributeSyntax>) -> Command {
        Command::Declare {
            name: Name::new(name),
            ty,
            value: None,
            attributes,
        }
    }

    fn unit(name: &str, imports: &[&str], commands: Vec<Command>) -> UnitSource {
        UnitSource {
            name: Name::new(name),
            imports: imports.iter().map(|i| Name::new(*i)).collect(),
            commands,
        }
    }

    #[test]
    fn test_dump_order_follows_recording_order() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir);
        let mut ws = Workspace::new(&options);
        let eq = |n: u32| Expr::nat_eq(Expr::nat(n), Expr::nat(n));
        let source = unit(
            "Order",
            &[],
            vec![
                declare("t1", eq(1), vec![AttributeSyntax::with_str(EXPORT_DAFNY, "s1")]),
                declare("t2", eq(2), vec![AttributeSyntax::with_str(EXPORT_DAFNY, "s2")]),
                declare("t3", eq(3), vec![AttributeSyntax::with_str(EXPORT_DAFNY, "s3")]),
                Command::ExportDafny,
            ],
        );
        let report = compile_unit(&mut ws, &options, source).unwrap();
        assert!(!report.has_errors());
        assert_eq!(
            report.dumped,
            vec!["axiom s1 : 1 == 1", "axiom s2 : 2 == 2", "axiom s3 : 3 == 3"]
        );
        assert_eq!(report.entry_count, 6);
    }

    #[test]
    fn test_rejected_declaration_does_not_stop_the_unit() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir);
        let mut ws = Workspace::new(&options);
        let source = unit(
            "Mixed",
            &[],
            vec![
                declare("n", Expr::nat_type(), vec![AttributeSyntax::with_str(EXPORT_DAFNY, "bad")]),
                declare(
                    "ok",
                    Expr::nat_eq(Expr::nat(1u32), Expr::nat_succ(Expr::nat_zero())),
                    vec![AttributeSyntax::with_str(EXPORT_DAFNY, "good")],
                ),
                Command::EraseAttribute {
                    decl: Name::new("ok"),
                    attribute: EXPORT_DAFNY.to_string(),
                },
                Command::ExportDafny,
            ],
        );
        let report = compile_unit(&mut ws, &options, source).unwrap();
        assert_eq!(diagnostics::error_count(&report.diagnostics), 2);
        assert_eq!(report.status(&Name::new("n")), Some(DeclarationStatus::Rejected));
        assert_eq!(report.status(&Name::new("ok")), Some(DeclarationStatus::Translated));
        assert_eq!(report.dumped, vec!["axiom good : 1 == 0 + 1"]);
    }

    #[test]
    fn test_alignment_is_visible_to_importers() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir);
        let mut ws = Workspace::new(&options);
        let foo_ty = Expr::pi(Expr::nat_type(), Expr::nat_type());
        compile_unit(
            &mut ws,
            &options,
            unit("Base", &[], vec![declare("foo", foo_ty, vec![AttributeSyntax::with_str(ALIGN_DAFNY, "bla")])]),
        )
        .unwrap();

        let statement = Expr::nat_eq(
            Expr::nat(2u32),
            Expr::app(Expr::constant("foo"), [Expr::nat(1u32)]),
        );
        let report = compile_unit(
            &mut ws,
            &options,
            unit(
                "Top",
                &["Base"],
                vec![
                    declare("thm", statement, vec![AttributeSyntax::with_str(EXPORT_DAFNY, "simple1D")]),
                    Command::ExportDafny,
                ],
            ),
        )
        .unwrap();
        assert_eq!(report.dumped, vec!["axiom simple1D : 2 == bla(1)"]);
    }

    #[test]
    fn test_unit_name_with_path_separator_is_rejected() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir);
        let mut ws = Workspace::new(&options);
        let source = unit("../outside", &[], vec![Command::ExportDafny]);
        let err = compile_unit(&mut ws, &options, source).unwrap_err();
        assert!(err.to_string().starts_with("invalid unit name `../outside`"));
    }

    #[test]
    fn test_self_import_is_an_error() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir);
        let mut ws = Workspace::new(&options);
        compile_unit(&mut ws, &options, unit("Loop", &[], vec![])).unwrap();
        let err = compile_unit(&mut ws, &options, unit("Loop", &["Loop"], vec![])).unwrap_err();
        assert_eq!(err.to_string(), "unit `Loop` imports itself");
    }
}
