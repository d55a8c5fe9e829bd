// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

pub mod builtins;
pub mod expr;
pub mod name;
pub mod terms;
