// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand type tokens and group expansion.
use std::fmt;

use floptex_cards::{Card, Rank, Suit};

use crate::{error::RangeError, range::Hand};

/// Suitedness of a two ranks token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suitedness {
    /// Both cards share a suit.
    Suited,
    /// The cards have different suits.
    Offsuit,
    /// Both cards share a rank.
    Pair,
    /// Not specified, covers both suited and offsuit.
    Unspecified,
}

/// A two ranks token such as `AKs`, `T9o`, `QQ`, or `87`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankPair {
    hi: Rank,
    lo: Rank,
    suitedness: Suitedness,
}

impl RankPair {
    /// Creates a rank pair, reordering the ranks so that `hi >= lo`.
    ///
    /// Equal ranks always yield a [Suitedness::Pair] token, the caller
    /// must reject an explicit suitedness on a pair beforehand.
    pub fn new(a: Rank, b: Rank, suitedness: Suitedness) -> RankPair {
        if a == b {
            debug_assert!(
                matches!(suitedness, Suitedness::Pair | Suitedness::Unspecified),
                "pairs cannot have suitedness"
            );
            RankPair {
                hi: a,
                lo: b,
                suitedness: Suitedness::Pair,
            }
        } else {
            RankPair {
                hi: a.max(b),
                lo: a.min(b),
                suitedness,
            }
        }
    }

    /// The higher rank.
    pub fn hi(&self) -> Rank {
        self.hi
    }

    /// The lower rank.
    pub fn lo(&self) -> Rank {
        self.lo
    }

    /// This token suitedness.
    pub fn suitedness(&self) -> Suitedness {
        self.suitedness
    }
}

impl fmt::Display for RankPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.hi, self.lo)?;
        match self.suitedness {
            Suitedness::Suited => write!(f, "s"),
            Suitedness::Offsuit => write!(f, "o"),
            Suitedness::Pair | Suitedness::Unspecified => Ok(()),
        }
    }
}

/// A parsed range string group.
///
/// A group denotes one or more hand type tokens: a bare token, an
/// open-ended `+` shorthand, a closed dash range, an explicit two cards
/// hand, or a `#tag#` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupToken {
    /// A bare rank pair token, e.g. `AKs` or `JJ`.
    Single(RankPair),
    /// An open-ended range, e.g. `ATs+` or `88+`.
    Plus(RankPair),
    /// A closed range between two endpoints, e.g. `A7o-ATo`.
    Span(RankPair, RankPair),
    /// An explicit hand, higher card first, e.g. `AsKd`.
    Explicit(Card, Card),
    /// A named tag reference, resolved outside the parser.
    Tag(String),
}

impl GroupToken {
    /// Expands this group into canonical hand type tokens.
    ///
    /// Tags expand to nothing, dash ranges fail if their endpoints
    /// disagree on suitedness or, for non pairs, on the high card.
    pub fn expand(&self) -> Result<Vec<HandType>, RangeError> {
        let mut tokens = Vec::new();
        match self {
            GroupToken::Tag(_) => {}
            GroupToken::Explicit(hi, lo) => tokens.push(HandType::Explicit(*hi, *lo)),
            GroupToken::Single(rp) => push_token(rp.hi, rp.lo, rp.suitedness, &mut tokens),
            GroupToken::Plus(rp) => {
                if rp.suitedness == Suitedness::Pair {
                    for r in rp.hi as usize..=Rank::Ace as usize {
                        let rank = Rank::from_index(r);
                        push_token(rank, rank, Suitedness::Pair, &mut tokens);
                    }
                } else {
                    // The high card stays pinned, only the low rank raises.
                    for r in rp.lo as usize..rp.hi as usize {
                        push_token(rp.hi, Rank::from_index(r), rp.suitedness, &mut tokens);
                    }
                }
            }
            GroupToken::Span(a, b) => {
                if a.suitedness != b.suitedness {
                    return Err(RangeError::SuitednessMismatch {
                        lo: a.to_string(),
                        hi: b.to_string(),
                    });
                }
                if a.suitedness != Suitedness::Pair && a.hi != b.hi {
                    return Err(RangeError::TopCardMismatch {
                        lo: a.to_string(),
                        hi: b.to_string(),
                    });
                }
                let (from, to) = if a.lo <= b.lo { (a.lo, b.lo) } else { (b.lo, a.lo) };
                for r in from as usize..=to as usize {
                    let rank = Rank::from_index(r);
                    if a.suitedness == Suitedness::Pair {
                        push_token(rank, rank, Suitedness::Pair, &mut tokens);
                    } else {
                        push_token(a.hi, rank, a.suitedness, &mut tokens);
                    }
                }
            }
        }
        Ok(tokens)
    }
}

/// Appends the canonical tokens for a single rank pair.
fn push_token(hi: Rank, lo: Rank, suitedness: Suitedness, out: &mut Vec<HandType>) {
    match suitedness {
        Suitedness::Pair => out.push(HandType::Pair(hi)),
        Suitedness::Suited => out.push(HandType::Suited(hi, lo)),
        Suitedness::Offsuit => out.push(HandType::Offsuit(hi, lo)),
        Suitedness::Unspecified => {
            out.push(HandType::Offsuit(hi, lo));
            out.push(HandType::Suited(hi, lo));
        }
    }
}

/// A canonical hand type token denoting one or more concrete hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandType {
    /// A pocket pair, 6 combinations.
    Pair(Rank),
    /// Two suited ranks, higher first, 4 combinations.
    Suited(Rank, Rank),
    /// Two offsuit ranks, higher first, 12 combinations.
    Offsuit(Rank, Rank),
    /// An explicit hand, higher card first, 1 combination.
    Explicit(Card, Card),
}

impl HandType {
    /// All concrete hands this token denotes.
    pub fn hands(&self) -> Vec<Hand> {
        match *self {
            HandType::Pair(r) => {
                let suits = Suit::suits().collect::<Vec<_>>();
                let mut hands = Vec::with_capacity(6);
                for i in 0..suits.len() {
                    for j in i + 1..suits.len() {
                        hands.push(Hand::new(Card::new(r, suits[i]), Card::new(r, suits[j])));
                    }
                }
                hands
            }
            HandType::Suited(hi, lo) => Suit::suits()
                .map(|s| Hand::new(Card::new(hi, s), Card::new(lo, s)))
                .collect(),
            HandType::Offsuit(hi, lo) => {
                let mut hands = Vec::with_capacity(12);
                for s1 in Suit::suits() {
                    for s2 in Suit::suits().filter(|&s2| s2 != s1) {
                        hands.push(Hand::new(Card::new(hi, s1), Card::new(lo, s2)));
                    }
                }
                hands
            }
            HandType::Explicit(hi, lo) => vec![Hand::new(hi, lo)],
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandType::Pair(r) => write!(f, "{r}{r}"),
            HandType::Suited(hi, lo) => write!(f, "{hi}{lo}s"),
            HandType::Offsuit(hi, lo) => write!(f, "{hi}{lo}o"),
            HandType::Explicit(hi, lo) => write!(f, "{hi}{lo}"),
        }
    }
}
