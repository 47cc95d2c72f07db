// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Board texture classification.
//!
//! A board texture is the probability distribution of hand categories a
//! range makes against a fixed board: the nine exclusive hand types plus
//! the draw and pair sub-type tags layered on top of them.
use std::fmt;

use floptex_cards::{Card, Rank};
use floptex_eval::{HandRank, HandValue};

use crate::{
    error::RangeError,
    range::{Hand, HandRange},
};

/// Draw categories layered on top of a hand type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawType {
    /// Four cards of one suit.
    FlushDraw = 0,
    /// Open-ended straight draw, four ranks in sequence.
    Oesd,
    /// Inside straight draw, one missing rank in a five ranks span.
    Gutshot,
}

impl DrawType {
    /// Returns all draw types.
    pub fn types() -> impl Iterator<Item = DrawType> {
        [DrawType::FlushDraw, DrawType::Oesd, DrawType::Gutshot].into_iter()
    }
}

impl fmt::Display for DrawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrawType::FlushDraw => "Flush Draw",
            DrawType::Oesd => "OESD",
            DrawType::Gutshot => "Gutshot",
        };

        write!(f, "{name}")
    }
}

/// Sub-types of a one pair hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairType {
    /// A pocket pair above the highest board card.
    OverPair = 0,
    /// A pair of the highest board card.
    TopPair,
    /// A pair of the second highest board card or better.
    SecondPair,
    /// A pair below the second highest board card.
    LowPair,
    /// The pair is on the board, the hole cards missed.
    BoardPair,
}

impl PairType {
    /// Returns all pair types.
    pub fn types() -> impl Iterator<Item = PairType> {
        [
            PairType::OverPair,
            PairType::TopPair,
            PairType::SecondPair,
            PairType::LowPair,
            PairType::BoardPair,
        ]
        .into_iter()
    }
}

impl fmt::Display for PairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PairType::OverPair => "Over Pair",
            PairType::TopPair => "Top Pair",
            PairType::SecondPair => "Second Pair",
            PairType::LowPair => "Low Pair",
            PairType::BoardPair => "Board Pair",
        };

        write!(f, "{name}")
    }
}

/// The probability of each hand category for a range on a board.
///
/// Hand type probabilities are exclusive and sum to one over a full
/// calculation, draw and pair sub-type probabilities are tags on top of
/// a hand type outcome. A texture instance must not be shared by
/// concurrent calculations, [BoardTexture::calculate] resets it in
/// place.
#[derive(Debug, Clone, Default)]
pub struct BoardTexture {
    hand_types: [f64; 9],
    draw_types: [f64; 3],
    pair_types: [f64; 5],
}

impl BoardTexture {
    /// Creates a texture with all probabilities at zero.
    pub fn new() -> BoardTexture {
        BoardTexture::default()
    }

    /// The probability of the given hand type.
    pub fn hand_type(&self, rank: HandRank) -> f64 {
        self.hand_types[rank as usize]
    }

    /// The probability of the given draw type.
    pub fn draw_type(&self, draw: DrawType) -> f64 {
        self.draw_types[draw as usize]
    }

    /// The probability of the given pair sub-type.
    pub fn pair_type(&self, pair: PairType) -> f64 {
        self.pair_types[pair as usize]
    }

    /// Calculates the texture of a range against a board.
    ///
    /// Builds the range, removes the board cards from it, then buckets
    /// every remaining hand weight by the category the hand makes on
    /// the board. Inputs are validated before the texture resets, a
    /// failed call leaves the previous values untouched.
    pub fn calculate(&mut self, range_string: &str, board: &[Card]) -> Result<(), RangeError> {
        if board.len() < 3 {
            return Err(RangeError::InsufficientBoard(board.len()));
        }
        if board.len() > 5 {
            return Err(RangeError::OversizedBoard(board.len()));
        }
        for (i, card) in board.iter().enumerate() {
            if board[i + 1..].contains(card) {
                return Err(RangeError::DuplicateCard(card.to_string()));
            }
        }

        let mut range: HandRange = range_string.parse()?;
        range.exclude_cards(board);

        *self = BoardTexture::default();

        let mut cards = Vec::with_capacity(board.len() + 2);
        for (hand, prob) in range.iter() {
            if prob == 0.0 {
                continue;
            }
            cards.clear();
            cards.extend_from_slice(board);
            cards.push(hand.high());
            cards.push(hand.low());

            let rank = HandValue::eval(&cards).rank();
            self.hand_types[rank as usize] += prob;

            if cards.len() < 7 && rank < HandRank::Flush {
                // Draws are still possible.
                if flush_draw(&cards) {
                    self.draw_types[DrawType::FlushDraw as usize] += prob;
                }
                if rank < HandRank::Straight {
                    if let Some(draw) = straight_draw(&cards) {
                        self.draw_types[draw as usize] += prob;
                    }
                }
            }

            if rank == HandRank::Pair {
                self.pair_types[pair_type(hand, board) as usize] += prob;
            }
        }

        Ok(())
    }
}

/// Checks if `cards` are one card short of a flush.
fn flush_draw(cards: &[Card]) -> bool {
    let mut suit_counts = [0u8; 4];
    for card in cards {
        suit_counts[card.suit().index()] += 1;
    }
    suit_counts.iter().max() == Some(&4)
}

/// Checks if `cards` hold an open-ended or inside straight draw.
fn straight_draw(cards: &[Card]) -> Option<DrawType> {
    // Rank presence bitmask, bit 0 doubles the ace for the wheel.
    let mut bits: u16 = 0;
    for card in cards {
        bits |= 2 << card.rank_bits();
        if card.rank() == Rank::Ace {
            bits |= 1;
        }
    }

    // Look for '11110' or '1011101' (open ended).
    for i in 0..9 {
        let s = bits >> i;
        if s & 0b11111 == 0b11110 || s & 0b1111111 == 0b1011101 {
            return Some(DrawType::Oesd);
        }
    }

    // Look for a four out of five ranks gutshot pattern.
    for i in 0..10 {
        if matches!((bits >> i) & 0b11111, 30 | 29 | 27 | 23 | 15) {
            return Some(DrawType::Gutshot);
        }
    }
    None
}

/// Classifies a one pair hand against the board.
fn pair_type(hand: Hand, board: &[Card]) -> PairType {
    let mut rank_counts = [0u8; 13];
    let mut board_ranks = board.iter().map(|c| c.rank_bits()).collect::<Vec<_>>();
    board_ranks.sort_unstable();
    let hand_ranks = [hand.high().rank_bits(), hand.low().rank_bits()];
    for &rank in board_ranks.iter().chain(hand_ranks.iter()) {
        rank_counts[rank as usize] += 1;
    }

    let paired = rank_counts
        .iter()
        .position(|&count| count == 2)
        .expect("a one pair hand has a paired rank") as u8;
    let top = board_ranks[board_ranks.len() - 1];
    let second = board_ranks[board_ranks.len() - 2];

    if !hand_ranks.contains(&paired) {
        PairType::BoardPair
    } else if paired > top {
        PairType::OverPair
    } else if paired == top {
        PairType::TopPair
    } else if paired >= second {
        PairType::SecondPair
    } else {
        PairType::LowPair
    }
}
