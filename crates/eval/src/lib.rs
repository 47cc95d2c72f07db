// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Floptex Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator computes
//! the rank of the best five cards hand without extracting the best hand,
//! useful for computing odds and other stats.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the
//! hand and get its rank:
//!
//! ```
//! # use floptex_eval::*;
//! let cards = |s: &str| -> Vec<Card> {
//!     s.split_whitespace().map(|c| c.parse().unwrap()).collect()
//! };
//!
//! let high_card = HandValue::eval(&cards("2s 3h 7d 9c Jh"));
//! let pair = HandValue::eval(&cards("As Ah 7d 9c Jh"));
//! assert!(pair > high_card);
//! assert_eq!(pair.rank(), HandRank::Pair);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use floptex_cards::{Card, Deck, Rank, Suit};
