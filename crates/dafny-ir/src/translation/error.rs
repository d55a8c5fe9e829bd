// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::Expr;
use thiserror::Error;

/// Result type for translation
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Reasons an expression falls outside the translatable fragment.
/// Each variant carries the sub-expression that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// Neither a literal, a known constant nor an application
    #[error("unsupported expression: {0}")]
    UnsupportedExpression(Expr),

    /// Application whose head is not a constant
    #[error("unsupported application: {0}")]
    UnsupportedApplication(Expr),

    /// Constant application with no mapping and no built-in rule
    #[error("unsupported constant application: {0}")]
    UnsupportedConstantApplication(Expr),
}

impl TranslationError {
    /// The rejected sub-expression.
    pub fn expr(&self) -> &Expr {
        match self {
            TranslationError::UnsupportedExpression(e)
            | TranslationError::UnsupportedApplication(e)
            | TranslationError::UnsupportedConstantApplication(e) => e,
        }
    }
}
