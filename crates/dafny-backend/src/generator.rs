// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Export dump: writes the accumulated Dafny declarations, one per line, in the
//! order they were recorded.

use crate::options::Options;
use crate::renderer::render_to_string;
use anyhow::Context;
use dafny_ir::TranslationState;
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Export log in recording order.
pub fn export_lines(state: &TranslationState) -> Vec<String> {
    state.exports().map(str::to_string).collect()
}

fn render_exports(state: &TranslationState) -> String {
    render_to_string(|w| w.lines_with(state.exports(), |w, decl| w.write(decl)))
}

/// Write every export, one per line.
pub fn write_exports<W: Write>(state: &TranslationState, out: &mut W) -> anyhow::Result<()> {
    out.write_all(render_exports(state).as_bytes())
        .context("failed to write export dump")?;
    out.flush().context("failed to flush export dump")
}

/// Dump to `options.output_path`, or to standard output when no path is set.
pub fn dump_exports(state: &TranslationState, options: &Options) -> anyhow::Result<()> {
    match &options.output_path {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, render_exports(state))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {} declarations to {}", state.export_count(), path.display());
            Ok(())
        }
        None => write_exports(state, &mut std::io::stdout().lock()),
    }
}
