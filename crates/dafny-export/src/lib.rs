// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Driver for exporting annotated host propositions to Dafny.
//!
//! A unit is read from its JSON source, the frozen entry logs of its imports
//! are merged into a fresh symbol store, its commands run in order, and its own
//! entries are frozen back into the build directory.

pub mod attributes;
pub mod diagnostics;
pub mod environment;
pub mod processor;
pub mod unit;
pub mod workspace;

pub use attributes::{AttributeError, AttributeHandlers, AttributeKind, AttributeSyntax};
pub use environment::{Declaration, Environment, Host};
pub use processor::{compile_unit, DeclarationStatus, UnitProcessor, UnitReport};
pub use unit::{Command, UnitSource};
pub use workspace::Workspace;
