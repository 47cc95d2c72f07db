// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Primes used to encode a card rank.
const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink]
/// Poker hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// The derived ordering agrees with [Card::index]: rank first, then suit.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Card(u32);

impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[rank as usize] | (rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// This card unique id.
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        let suit_bits = self.suit_bits();
        match suit_bits {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.rank_bits() as usize)
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// This card position in the canonical deck order, in `0..52`.
    ///
    /// The index orders cards by rank and breaks ties by suit, it matches
    /// both the derived `Ord` and the order of [Deck::default].
    #[inline]
    pub fn index(&self) -> usize {
        self.rank_bits() as usize * 4 + self.suit().index()
    }

    /// Returns the card at the given canonical deck position.
    ///
    /// Panics if the index is not in `0..52`.
    pub fn from_index(index: usize) -> Card {
        assert!(index < Deck::SIZE, "card index out of range: {index}");
        Card::new(Rank::from_index(index / 4), Suit::from_index(index % 4))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length(s.to_string()));
        };
        let rank = Rank::from_char(r).ok_or(ParseCardError::Rank(r))?;
        let suit = Suit::from_char(u).ok_or(ParseCardError::Suit(u))?;
        Ok(Card::new(rank, suit))
    }
}

/// Error parsing a card from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    /// The string is not a rank char followed by a suit char.
    #[error("invalid card '{0}': expected a rank and a suit")]
    Length(String),
    /// Unknown rank character.
    #[error("invalid rank '{0}'")]
    Rank(char),
    /// Unknown suit character.
    #[error("invalid suit '{0}'")]
    Suit(char),
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank with the given index.
    ///
    /// Panics if the index is not in `0..13`.
    pub fn from_index(index: usize) -> Rank {
        match index {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("Invalid rank index {index}"),
        }
    }

    /// Parses a rank character, either case.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// This suit position in the canonical deck order, in `0..4`.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    /// Returns the suit with the given index.
    ///
    /// Panics if the index is not in `0..4`.
    pub fn from_index(index: usize) -> Suit {
        match index {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            3 => Suit::Clubs,
            _ => panic!("Invalid suit index {index}"),
        }
    }

    /// Parses a suit character, either case.
    pub fn from_char(c: char) -> Option<Suit> {
        let suit = match c.to_ascii_lowercase() {
            'c' => Suit::Clubs,
            'd' => Suit::Diamonds,
            'h' => Suit::Hearts,
            's' => Suit::Spades,
            _ => return None,
        };
        Some(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck.
///
/// The default deck lists all 52 cards in canonical order, the card at
/// position `i` is `Card::from_index(i)`.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// The number of distinct two cards hands.
    pub const HANDS: usize = Self::SIZE * (Self::SIZE - 1) / 2;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Iterates all two cards hands from this deck, higher card first.
    ///
    /// Hands are listed in canonical order, a full deck yields
    /// [Deck::HANDS] hands.
    pub fn hands(&self) -> impl Iterator<Item = (Card, Card)> + '_ {
        (1..self.cards.len())
            .flat_map(move |hi| (0..hi).map(move |lo| (self.cards[hi], self.cards[lo])))
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().rev().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            let card = deck.deal();
            assert_eq!(card.id() & 0xFF, PRIMES[card.rank() as usize]);
            assert_eq!((card.id() >> 8) & 0xF, card.rank() as u32);
            assert_eq!((card.id() >> 12) & 0xF, card.suit() as u32);
            assert_eq!(card.id() >> 16, 1 << (card.rank() as usize));
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        // From the Cactus Kev's website.
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 0x08004b25);

        let fs = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(fs.id(), 0x00081307);

        let jc = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(jc.id(), 0x0200891d);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "Ah");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            assert_eq!(card.to_string().to_uppercase().parse::<Card>(), Ok(card));
            assert_eq!(card.to_string().to_lowercase().parse::<Card>(), Ok(card));
        }

        assert_eq!(
            "A".parse::<Card>(),
            Err(ParseCardError::Length("A".to_string()))
        );
        assert_eq!(
            "Ahh".parse::<Card>(),
            Err(ParseCardError::Length("Ahh".to_string()))
        );
        assert_eq!("1h".parse::<Card>(), Err(ParseCardError::Rank('1')));
        assert_eq!("Ax".parse::<Card>(), Err(ParseCardError::Suit('x')));
    }

    #[test]
    fn card_canonical_index() {
        for (i, card) in Deck::default().into_iter().enumerate() {
            assert_eq!(card.index(), i);
            assert_eq!(Card::from_index(i), card);
        }

        // The derived ordering agrees with the canonical index.
        let ks = Card::new(Rank::King, Suit::Spades);
        let kc = Card::new(Rank::King, Suit::Clubs);
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert!(ks < kc);
        assert!(kc < ah);
    }

    #[test]
    fn deck_hands() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        for (high, low) in deck.hands() {
            assert!(high > low);
            hands.insert((high, low));
        }
        assert_eq!(hands.len(), Deck::HANDS);
    }

    #[test]
    fn deck_hands_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        // C(50, 2) hands left.
        assert_eq!(deck.hands().count(), 1_225);
    }
}
