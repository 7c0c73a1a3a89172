// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use showdown_cards::ParseCardError;
use thiserror::Error;

/// An evaluation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card notation is malformed or its rank is unknown.
    #[error("invalid card: {0}")]
    InvalidCard(#[from] ParseCardError),
    /// The number of cards is outside the accepted range.
    #[error("invalid hand size {count}, expected {min} to {max} cards")]
    InvalidHandSize {
        /// The number of cards given, not counting missing cards.
        count: usize,
        /// The minimum number of cards.
        min: usize,
        /// The maximum number of cards.
        max: usize,
    },
}

/// Result type for evaluation functions.
pub type Result<T> = std::result::Result<T, EvalError>;
