// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
use std::fmt;

use floptex_cards::Card;

/// The rank class of an evaluated hand.
///
/// Classes are ordered from [HandRank::HighCard] to [HandRank::StraightFlush].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No pair.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    Trips,
    /// Five cards in rank sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four of a kind.
    Quads,
    /// A straight in a single suit.
    StraightFlush,
}

impl HandRank {
    /// Returns all hand ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPair,
            Trips,
            Straight,
            Flush,
            FullHouse,
            Quads,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::Trips => "Trips",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::Quads => "Quads",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of an evaluated hand.
///
/// Values order hands by strength, the high bits encode the [HandRank]
/// class and the low bits the ranks that break ties within a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

impl HandValue {
    const RANK_SHIFT: u32 = 20;

    /// Evaluates the best five cards hand out of 5, 6, or 7 cards.
    ///
    /// Panics if the number of cards is not in `5..=7`.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert!(
            (5..=7).contains(&cards.len()),
            "eval expects 5 to 7 cards, got {}",
            cards.len()
        );

        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        let mut suit_masks = [0u32; 4];
        for card in cards {
            let r = card.rank_bits() as usize;
            let s = card.suit().index();
            rank_counts[r] += 1;
            suit_counts[s] += 1;
            suit_masks[s] |= 1 << r;
        }

        let rank_mask = suit_masks.iter().fold(0u32, |m, &s| m | s);

        // At most one suit can hold five of up to seven cards.
        let flush_suit = (0..4).find(|&s| suit_counts[s] >= 5);

        if let Some(s) = flush_suit {
            if let Some(hi) = straight_high(suit_masks[s]) {
                return Self::new(HandRank::StraightFlush, hi);
            }
        }

        let mut quads = None;
        let mut trips = None;
        let mut second_trips = None;
        let mut pairs = Vec::with_capacity(3);
        for r in (0..13u32).rev() {
            match rank_counts[r as usize] {
                4 => quads = Some(r),
                3 if trips.is_none() => trips = Some(r),
                3 => second_trips = second_trips.or(Some(r)),
                2 => pairs.push(r),
                _ => {}
            }
        }

        if let Some(q) = quads {
            let kicker = high_cards(rank_mask & !(1 << q), 1);
            return Self::new(HandRank::Quads, (q << 4) | kicker);
        }

        if let Some(t) = trips {
            // A second trips pairs with the first one.
            if let Some(p) = second_trips.or(pairs.first().copied()) {
                return Self::new(HandRank::FullHouse, (t << 4) | p);
            }
        }

        if let Some(s) = flush_suit {
            return Self::new(HandRank::Flush, high_cards(suit_masks[s], 5));
        }

        if let Some(hi) = straight_high(rank_mask) {
            return Self::new(HandRank::Straight, hi);
        }

        if let Some(t) = trips {
            let kickers = high_cards(rank_mask & !(1 << t), 2);
            return Self::new(HandRank::Trips, (t << 8) | kickers);
        }

        match pairs.as_slice() {
            [p1, p2, ..] => {
                let kicker = high_cards(rank_mask & !(1 << p1) & !(1 << p2), 1);
                Self::new(HandRank::TwoPair, (p1 << 8) | (p2 << 4) | kicker)
            }
            [p] => {
                let kickers = high_cards(rank_mask & !(1 << p), 3);
                Self::new(HandRank::Pair, (p << 12) | kickers)
            }
            [] => Self::new(HandRank::HighCard, high_cards(rank_mask, 5)),
        }
    }

    /// The rank class of this hand.
    pub fn rank(&self) -> HandRank {
        match self.0 >> Self::RANK_SHIFT {
            0 => HandRank::HighCard,
            1 => HandRank::Pair,
            2 => HandRank::TwoPair,
            3 => HandRank::Trips,
            4 => HandRank::Straight,
            5 => HandRank::Flush,
            6 => HandRank::FullHouse,
            7 => HandRank::Quads,
            8 => HandRank::StraightFlush,
            _ => panic!("Invalid hand value 0x{:x}", self.0),
        }
    }

    /// This hand value bits.
    pub fn value(&self) -> u32 {
        self.0
    }

    fn new(rank: HandRank, tiebreak: u32) -> HandValue {
        HandValue(((rank as u32) << Self::RANK_SHIFT) | tiebreak)
    }
}

/// Returns the top rank of a five cards sequence in `mask`, if any.
fn straight_high(mask: u32) -> Option<u32> {
    for hi in (4..=12u32).rev() {
        let window = 0b11111 << (hi - 4);
        if mask & window == window {
            return Some(hi);
        }
    }

    // The ace plays low in the wheel.
    const WHEEL: u32 = (1 << 12) | 0b1111;
    (mask & WHEEL == WHEEL).then_some(3)
}

/// Packs the `count` highest ranks of `mask` into nibbles, highest first.
fn high_cards(mask: u32, count: u32) -> u32 {
    let mut value = 0;
    let mut found = 0;
    for r in (0..13u32).rev() {
        if mask & (1 << r) != 0 {
            value = (value << 4) | r;
            found += 1;
            if found == count {
                break;
            }
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&cards(s))
    }

    #[test]
    fn rank_classes() {
        assert_eq!(eval("2s 5h 7d 9c Jh").rank(), HandRank::HighCard);
        assert_eq!(eval("As Ah 7d 9c Jh").rank(), HandRank::Pair);
        assert_eq!(eval("As Ah 9d 9c Jh").rank(), HandRank::TwoPair);
        assert_eq!(eval("As Ah Ad 9c Jh").rank(), HandRank::Trips);
        assert_eq!(eval("2s 3h 4d 5c 6h").rank(), HandRank::Straight);
        assert_eq!(eval("2h 5h 7h 9h Jh").rank(), HandRank::Flush);
        assert_eq!(eval("As Ah Ad 9c 9h").rank(), HandRank::FullHouse);
        assert_eq!(eval("As Ah Ad Ac 9h").rank(), HandRank::Quads);
        assert_eq!(eval("2h 3h 4h 5h 6h").rank(), HandRank::StraightFlush);
    }

    #[test]
    fn class_ordering() {
        let hands = [
            "2s 5h 7d 9c Jh",
            "2s 2h 7d 9c Jh",
            "2s 2h 7d 7c Jh",
            "2s 2h 2d 9c Jh",
            "2s 3h 4d 5c 6h",
            "2h 5h 7h 9h Jh",
            "2s 2h 2d 9c 9h",
            "2s 2h 2d 2c Jh",
            "2h 3h 4h 5h 6h",
        ];
        for pair in hands.windows(2) {
            assert!(eval(pair[0]) < eval(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn wheel_straight() {
        let wheel = eval("Ah 2d 3s 4c 5h");
        assert_eq!(wheel.rank(), HandRank::Straight);

        // The wheel is the lowest straight.
        assert!(wheel < eval("2h 3d 4s 5c 6h"));
    }

    #[test]
    fn kickers_break_ties() {
        assert!(eval("As Ah Kd 7c 5h") > eval("As Ah Kd 7c 4h"));
        assert!(eval("As Kh Qd Jc 9h") > eval("As Kh Qd Jc 8h"));
        assert!(eval("As Ah 9d 9c Kh") > eval("As Ah 9d 9c Qh"));
        assert!(eval("9c 9d 9h 9s Kc") > eval("9c 9d 9h 9s Qc"));
        assert!(eval("Ah Kh 9h 7h 3h") > eval("Ah Kh 9h 6h 3h"));
    }

    #[test]
    fn seven_cards_pick_best() {
        assert_eq!(eval("2s 3h 7d 9c Jh Js 2d").rank(), HandRank::TwoPair);
        assert_eq!(eval("2h 3d 4s 5c 6h 7d 9s").rank(), HandRank::Straight);

        // The higher sequence wins.
        assert_eq!(
            eval("2h 3d 4s 5c 6h 7d 9s").value(),
            eval("3d 4s 5c 6h 7d Ac As").value()
        );

        // Seven cards flush keeps the five highest.
        assert_eq!(
            eval("Ah Kh 9h 7h 3h 2h Qs"),
            eval("Ah Kh 9h 7h 3h 2s Qs")
        );
    }

    #[test]
    fn double_trips_is_full_house() {
        let value = eval("5h 5d 5s 3c 3d 3h Kd");
        assert_eq!(value.rank(), HandRank::FullHouse);

        // Fives full of treys.
        assert_eq!(value, eval("5h 5d 5s 3c 3d Kd Qh"));
    }

    #[test]
    fn quads_with_trips_kicker() {
        let value = eval("9c 9d 9h 9s Kc Kd Kh");
        assert_eq!(value.rank(), HandRank::Quads);
        assert_eq!(value, eval("9c 9d 9h 9s Kc 2d 3h"));
    }

    #[test]
    fn order_independent() {
        use rand::prelude::*;

        let mut hand = cards("2s 3h 7d 9c Jh Js 2d");
        let value = HandValue::eval(&hand);

        let mut rng = rand::rng();
        for _ in 0..20 {
            hand.shuffle(&mut rng);
            assert_eq!(HandValue::eval(&hand), value);
        }
    }
}
