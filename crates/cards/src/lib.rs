// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Floptex Poker cards types.
//!
//! This crate defines types to create and parse cards:
//!
//! ```
//! # use floptex_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!("Ah".parse::<Card>().unwrap(), ah);
//! ```
//!
//! and a [Deck] type whose default order is the canonical deck order used
//! everywhere a deterministic card or hand ordering is needed.
//!
//! For example to enumerate all 1326 two cards hands with the higher card
//! first:
//!
//! ```
//! # use floptex_cards::Deck;
//! let mut counter = 0;
//! for (high, low) in Deck::default().hands() {
//!     assert!(high > low);
//!     counter += 1;
//! }
//! assert_eq!(counter, 1326);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
