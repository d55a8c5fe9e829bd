// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Symbol store shared between the translators and the attribute handlers.
//!
//! State is split in two phases. While a unit is being compiled, a [`UnitState`]
//! owns the accumulator (everything visible so far) and the unit's own entry
//! history. Once the unit is done it is frozen into a [`FrozenUnit`], which is
//! what gets persisted and later replayed by importers.

mod entry;
mod translation_state;
mod unit_state;

pub use entry::Entry;
pub use translation_state::TranslationState;
pub use unit_state::{FrozenUnit, UnitState};
