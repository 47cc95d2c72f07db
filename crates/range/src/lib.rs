// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Floptex hand range strings and board texture analysis.
//!
//! A range string is a comma separated list of hand type tokens,
//! explicit hands, or tags:
//!
//! ```text
//! ATo, 86s, JT, 99
//! As3c, 8c5s
//! #UTG#, #My_Tag#
//! ```
//!
//! Tokens with the same suitedness can be grouped:
//!
//! ```text
//! 88-JJ    => 88, 99, TT, JJ
//! A7o-ATo  => A7o, A8o, A9o, ATo
//! T6s+     => T6s, T7s, T8s, T9s
//! ```
//!
//! and groups of tokens can be combined with a weight:
//!
//! ```text
//! 0.6(AA, AK)
//! 40%(ATs+)
//! ```
//!
//! Parsing, serialization, and validation:
//!
//! ```
//! # use floptex_range::*;
//! # use floptex_cards::Rank;
//! let tokens = string_to_tokens("AA, 0.8(AKs)").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         (HandType::Pair(Rank::Ace), 1.0),
//!         (HandType::Suited(Rank::Ace, Rank::King), 0.8),
//!     ]
//! );
//!
//! assert_eq!(tokens_to_string(&tokens), "AA, 80%(AKs)");
//! assert!(validate("TT+, A8o-ATo, 80%(KTs+)"));
//! ```
//!
//! A [HandRange] maps every one of the 1326 two cards hands to a
//! probability, a [BoardTexture] buckets a range's probability mass by
//! the hand category each hand makes on a board:
//!
//! ```
//! # use floptex_range::*;
//! let board = ["2h", "7d", "9c"].map(|c| c.parse().unwrap());
//! let mut texture = BoardTexture::new();
//! texture.calculate("AKo", &board).unwrap();
//! assert!((texture.hand_type(HandRank::HighCard) - 1.0).abs() < 1e-9);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
mod parse;
mod range;
mod serialize;
mod store;
mod texture;
mod token;

pub use error::RangeError;
pub use parse::{string_to_groups, string_to_hands, string_to_tokens, validate};
pub use range::{Hand, HandRange};
pub use serialize::tokens_to_string;
pub use store::{RangeStore, SavedRanges, resolve_tags};
pub use texture::{BoardTexture, DrawType, PairType};
pub use token::{GroupToken, HandType, RankPair, Suitedness};

// Reexport the cards and evaluator types used in this crate API.
pub use floptex_cards::{Card, Deck, Rank, Suit};
pub use floptex_eval::{HandRank, HandValue};
