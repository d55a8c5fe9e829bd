// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::*;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use dafny_backend::{dump_exports, Options};
use dafny_export::{compile_unit, diagnostics, UnitSource, Workspace};
use dafny_ir::Name;
use log::{debug, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[derive(Parser)]
#[clap(
    name = env!("CARGO_BIN_NAME"),
    about = "Translates propositions annotated with @[export_dafny] into Dafny declarations",
    rename_all = "kebab-case",
    author,
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Args {
    /// Directory holding the entry logs of compiled units
    #[clap(long = "build-dir", short = 'b', global = true)]
    pub build_dir: Option<PathBuf>,

    /// Options file (toml)
    #[clap(long = "config", short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Log everything
    #[clap(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile unit files in order; later units may import earlier ones
    Compile {
        #[clap(required = true)]
        units: Vec<PathBuf>,
    },
    /// Print the export log of a compiled unit and everything it imports
    Dump {
        unit: String,

        /// Write the dump to this file instead of standard output
        #[clap(long = "output", short = 'o')]
        output: Option<PathBuf>,
    },
}

fn options(args: &Args) -> anyhow::Result<Options> {
    let mut options = match &args.config {
        Some(path) => Options::from_toml_file(path)?,
        None => Options::default(),
    };
    if let Some(dir) = &args.build_dir {
        options.build_dir = dir.to_string_lossy().to_string();
    }
    if args.verbose {
        options.verbosity_level = LevelFilter::Trace;
    }
    if let Commands::Dump {
        output: Some(path), ..
    } = &args.command
    {
        options.output_path = Some(path.to_string_lossy().to_string());
    }
    Ok(options)
}

/// Returns whether every unit compiled without error diagnostics.
fn compile(options: &Options, units: &[PathBuf]) -> anyhow::Result<bool> {
    let mut workspace = Workspace::new(options);
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let mut clean = true;
    for path in units {
        let source = UnitSource::from_path(path)?;
        let report = compile_unit(&mut workspace, options, source)?;
        diagnostics::emit(&mut stderr, &report.diagnostics)?;
        for line in &report.dumped {
            println!("{line}");
        }
        debug!(
            "`{}`: {} entries written to {}",
            report.unit,
            report.entry_count,
            report.entry_path.display()
        );
        clean &= !report.has_errors();
    }
    Ok(clean)
}

/// Install the stderr terminal logger. Returns `false` when it could not be
/// installed; the run continues either way.
fn init_logging(level: LevelFilter) -> bool {
    match TermLogger::init(level, Config::default(), TerminalMode::Stderr) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{}", format!("logging disabled: {err:?}").yellow());
            false
        }
    }
}

fn execute(args: Args) -> anyhow::Result<bool> {
    let options = options(&args)?;
    init_logging(options.verbosity_level);

    match &args.command {
        Commands::Compile { units } => compile(&options, units),
        Commands::Dump { unit, .. } => {
            let mut workspace = Workspace::new(&options);
            let state = workspace.final_state(&Name::new(unit.as_str()))?;
            dump_exports(&state, &options)?;
            Ok(true)
        }
    }
}

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let args = Args::parse();

    match execute(args) {
        Ok(true) => (),
        Ok(false) => {
            println!("{}", "exiting with translation errors".bold().red());
            std::process::exit(1);
        }
        Err(err) => {
            let err = format!("{:?}", err);
            println!("{}", err.bold().red());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_logger_is_reported_not_fatal() {
        init_logging(LevelFilter::Off);
        assert!(!init_logging(LevelFilter::Off));
    }
}
