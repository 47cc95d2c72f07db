// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Range string and board texture errors.
use thiserror::Error;

/// Errors from range string parsing, expansion, and texture calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Malformed range string.
    #[error("syntax error at offset {pos}: expected {expected}")]
    Grammar {
        /// Byte offset of the failure in the input string.
        pos: usize,
        /// The construct the parser was looking for.
        expected: &'static str,
    },
    /// Dash range endpoints disagree on suitedness.
    #[error("suitedness mismatch between '{lo}' and '{hi}'")]
    SuitednessMismatch {
        /// The lower endpoint token.
        lo: String,
        /// The higher endpoint token.
        hi: String,
    },
    /// Dash range endpoints disagree on the high card.
    #[error("top card mismatch between '{lo}' and '{hi}'")]
    TopCardMismatch {
        /// The lower endpoint token.
        lo: String,
        /// The higher endpoint token.
        hi: String,
    },
    /// The same card appears twice in a hand or board.
    #[error("duplicate card '{0}'")]
    DuplicateCard(String),
    /// Fewer than three board cards.
    #[error("not enough cards in board: got {0}, need at least 3")]
    InsufficientBoard(usize),
    /// More than five board cards.
    #[error("too many cards in board: got {0}, need at most 5")]
    OversizedBoard(usize),
}
