// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Range string parser.
//!
//! The grammar is a comma separated list of groups, each group optionally
//! wrapped in a weighted list:
//!
//! ```text
//! range_string    := [ weighted_group_list ("," weighted_group_list)* ]
//! weighted_group_list := weight "(" group_list ")" | group_list
//! group_list      := group ("," group)*
//! group           := hand_type_range | hand_type_plus | hand_type
//!                  | explicit_hand | tag
//! hand_type       := rank rank [suitedness]
//! hand_type_plus  := hand_type "+"
//! hand_type_range := hand_type "-" hand_type
//! explicit_hand   := rank suit rank suit
//! tag             := "#" identifier "#"
//! weight          := decimal ["%"]
//! ```
//!
//! The parser is a recursive descent over bytes, alternatives are
//! disambiguated with a single character of lookahead: after a rank a
//! second rank starts a shorthand token and a suit an explicit hand,
//! while a leading number is a weight only when followed by `(`.
use floptex_cards::{Card, Rank, Suit};

use crate::{
    error::RangeError,
    range::Hand,
    token::{GroupToken, HandType, RankPair, Suitedness},
};

/// Parses a range string into weighted groups.
pub fn string_to_groups(text: &str) -> Result<Vec<(GroupToken, f64)>, RangeError> {
    Parser::new(text).parse()
}

/// Parses a range string into weighted canonical hand type tokens.
pub fn string_to_tokens(text: &str) -> Result<Vec<(HandType, f64)>, RangeError> {
    let mut tokens = Vec::new();
    for (group, weight) in string_to_groups(text)? {
        for token in group.expand()? {
            tokens.push((token, weight));
        }
    }
    Ok(tokens)
}

/// Parses a range string into weighted concrete hands.
pub fn string_to_hands(text: &str) -> Result<Vec<(Hand, f64)>, RangeError> {
    let mut hands = Vec::new();
    for (token, weight) in string_to_tokens(text)? {
        for hand in token.hands() {
            hands.push((hand, weight));
        }
    }
    Ok(hands)
}

/// Checks if a string is a parseable range string.
pub fn validate(text: &str) -> bool {
    string_to_tokens(text).is_ok()
}

struct Parser<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Parser<'a> {
        Parser {
            text: text.as_bytes(),
            pos: 0,
        }
    }

    fn parse(mut self) -> Result<Vec<(GroupToken, f64)>, RangeError> {
        let mut groups = Vec::new();
        self.skip_spaces();
        if self.at_end() {
            return Ok(groups);
        }
        loop {
            self.parse_item(&mut groups)?;
            self.skip_spaces();
            if self.at_end() {
                return Ok(groups);
            }
            if !self.eat(b',') {
                return Err(self.expected("','"));
            }
        }
    }

    fn parse_item(&mut self, groups: &mut Vec<(GroupToken, f64)>) -> Result<(), RangeError> {
        self.skip_spaces();
        if let Some(weight) = self.try_weight()? {
            loop {
                self.skip_spaces();
                let group = self.parse_group()?;
                groups.push((group, weight));
                self.skip_spaces();
                if self.eat(b')') {
                    return Ok(());
                }
                if !self.eat(b',') {
                    return Err(self.expected("',' or ')'"));
                }
            }
        } else {
            let group = self.parse_group()?;
            groups.push((group, 1.0));
            Ok(())
        }
    }

    /// Recognizes a `weight(` prefix, e.g. `0.6(` or `40%(`.
    ///
    /// Leaves the cursor untouched when the input is not a weighted
    /// list, a leading number may still be a rank pair like `86`.
    fn try_weight(&mut self) -> Result<Option<f64>, RangeError> {
        let start = self.pos;
        let Some(number) = self.scan_decimal() else {
            return Ok(None);
        };
        let percent = self.eat(b'%');
        self.skip_spaces();
        if !self.eat(b'(') {
            self.pos = start;
            return Ok(None);
        }
        let weight = if percent { number / 100.0 } else { number };
        if !(0.0..=1.0).contains(&weight) {
            return Err(RangeError::Grammar {
                pos: start,
                expected: "a weight between 0 and 1",
            });
        }
        Ok(Some(weight))
    }

    fn scan_decimal(&mut self) -> Option<f64> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        let text = &self.text[start..self.pos];
        let number = if text.iter().any(|c| c.is_ascii_digit()) {
            std::str::from_utf8(text).ok().and_then(|t| t.parse().ok())
        } else {
            None
        };
        if number.is_none() {
            self.pos = start;
        }
        number
    }

    fn parse_group(&mut self) -> Result<GroupToken, RangeError> {
        self.skip_spaces();
        match self.peek() {
            Some(b'#') => self.parse_tag(),
            Some(c) if Rank::from_char(c as char).is_some() => {
                // A second rank makes a shorthand token, a suit an
                // explicit hand.
                match self.text.get(self.pos + 1).map(|&c| c as char) {
                    Some(c) if Rank::from_char(c).is_some() => self.parse_shorthand(),
                    Some(c) if Suit::from_char(c).is_some() => self.parse_explicit(),
                    _ => {
                        self.pos += 1;
                        Err(self.expected("a second rank or a suit"))
                    }
                }
            }
            _ => Err(self.expected("a rank, a card, a weight, or a tag")),
        }
    }

    fn parse_tag(&mut self) -> Result<GroupToken, RangeError> {
        self.eat(b'#');
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_')
        {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.expected("a tag name"));
        }
        let name = std::str::from_utf8(&self.text[start..self.pos])
            .expect("tag names are ascii")
            .to_string();
        if !self.eat(b'#') {
            return Err(self.expected("'#'"));
        }
        Ok(GroupToken::Tag(name))
    }

    fn parse_shorthand(&mut self) -> Result<GroupToken, RangeError> {
        let rp = self.parse_rank_pair()?;
        self.skip_spaces();
        if self.eat(b'+') {
            return Ok(GroupToken::Plus(rp));
        }
        if self.eat(b'-') {
            self.skip_spaces();
            let rp2 = self.parse_rank_pair()?;
            return Ok(GroupToken::Span(rp, rp2));
        }
        Ok(GroupToken::Single(rp))
    }

    fn parse_rank_pair(&mut self) -> Result<RankPair, RangeError> {
        let r1 = self.parse_rank()?;
        let r2 = self.parse_rank()?;
        let start = self.pos;
        let suitedness = match self.peek() {
            Some(b's') | Some(b'S') => {
                self.pos += 1;
                Suitedness::Suited
            }
            Some(b'o') | Some(b'O') => {
                self.pos += 1;
                Suitedness::Offsuit
            }
            _ => Suitedness::Unspecified,
        };
        if r1 == r2 && suitedness != Suitedness::Unspecified {
            return Err(RangeError::Grammar {
                pos: start,
                expected: "no suitedness on a pair",
            });
        }
        Ok(RankPair::new(r1, r2, suitedness))
    }

    fn parse_explicit(&mut self) -> Result<GroupToken, RangeError> {
        let c1 = self.parse_card()?;
        let c2 = self.parse_card()?;
        if c1 == c2 {
            return Err(RangeError::DuplicateCard(c1.to_string()));
        }
        let (hi, lo) = if c1 > c2 { (c1, c2) } else { (c2, c1) };
        Ok(GroupToken::Explicit(hi, lo))
    }

    fn parse_card(&mut self) -> Result<Card, RangeError> {
        let rank = self.parse_rank()?;
        let suit = self.parse_suit()?;
        Ok(Card::new(rank, suit))
    }

    fn parse_rank(&mut self) -> Result<Rank, RangeError> {
        match self.peek().and_then(|c| Rank::from_char(c as char)) {
            Some(rank) => {
                self.pos += 1;
                Ok(rank)
            }
            None => Err(self.expected("a rank")),
        }
    }

    fn parse_suit(&mut self) -> Result<Suit, RangeError> {
        match self.peek().and_then(|c| Suit::from_char(c as char)) {
            Some(suit) => {
                self.pos += 1;
                Ok(suit)
            }
            None => Err(self.expected("a suit")),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn eat(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_spaces(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expected(&self, expected: &'static str) -> RangeError {
        RangeError::Grammar {
            pos: self.pos,
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn simple_tokens() {
        let tokens = string_to_tokens("ATo, 86s, JT, 99").unwrap();
        assert_eq!(
            tokens,
            vec![
                (HandType::Offsuit(Ace, Ten), 1.0),
                (HandType::Suited(Eight, Six), 1.0),
                (HandType::Offsuit(Jack, Ten), 1.0),
                (HandType::Suited(Jack, Ten), 1.0),
                (HandType::Pair(Nine), 1.0),
            ]
        );
    }

    #[test]
    fn shorthand_ranges() {
        let tokens = string_to_tokens("88-JJ").unwrap();
        assert_eq!(
            tokens,
            vec![
                (HandType::Pair(Eight), 1.0),
                (HandType::Pair(Nine), 1.0),
                (HandType::Pair(Ten), 1.0),
                (HandType::Pair(Jack), 1.0),
            ]
        );

        let tokens = string_to_tokens("T6s+").unwrap();
        assert_eq!(
            tokens,
            vec![
                (HandType::Suited(Ten, Six), 1.0),
                (HandType::Suited(Ten, Seven), 1.0),
                (HandType::Suited(Ten, Eight), 1.0),
                (HandType::Suited(Ten, Nine), 1.0),
            ]
        );

        // Tokens are normalized, endpoints may come in any order.
        assert_eq!(
            string_to_tokens("A7o-ATo").unwrap(),
            string_to_tokens("ATo-A7o").unwrap()
        );
    }

    #[test]
    fn weighted_groups() {
        let tokens = string_to_tokens("AA, 0.8(AKs)").unwrap();
        assert_eq!(
            tokens,
            vec![
                (HandType::Pair(Ace), 1.0),
                (HandType::Suited(Ace, King), 0.8),
            ]
        );

        let tokens = string_to_tokens("40%(ATs+)").unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().all(|&(_, w)| w == 0.4));

        let tokens = string_to_tokens("TT+, A8o-ATo, 80%(KTs+)").unwrap();
        assert_eq!(tokens.len(), 5 + 3 + 3);
    }

    #[test]
    fn weight_or_rank_pair_lookahead() {
        // A number followed by a parenthesis is a weight.
        let tokens = string_to_tokens("86%(AA)").unwrap();
        assert_eq!(tokens, vec![(HandType::Pair(Ace), 0.86)]);

        // Otherwise it is a rank pair.
        let tokens = string_to_tokens("86").unwrap();
        assert_eq!(
            tokens,
            vec![
                (HandType::Offsuit(Eight, Six), 1.0),
                (HandType::Suited(Eight, Six), 1.0),
            ]
        );
    }

    #[test]
    fn explicit_hands() {
        let tokens = string_to_tokens("As3c, 8c5s").unwrap();
        let as_ = "As".parse::<Card>().unwrap();
        let c3 = "3c".parse::<Card>().unwrap();
        let c8 = "8c".parse::<Card>().unwrap();
        let s5 = "5s".parse::<Card>().unwrap();
        assert_eq!(
            tokens,
            vec![
                (HandType::Explicit(as_, c3), 1.0),
                (HandType::Explicit(c8, s5), 1.0),
            ]
        );

        // The higher card always comes first.
        assert_eq!(
            string_to_tokens("3cAs").unwrap(),
            string_to_tokens("As3c").unwrap()
        );
    }

    #[test]
    fn tags_are_ignored() {
        let tokens = string_to_tokens("#UTG#, AA").unwrap();
        assert_eq!(tokens, vec![(HandType::Pair(Ace), 1.0)]);
        assert!(validate("#My_Tag#"));
    }

    #[test]
    fn case_and_spaces() {
        assert_eq!(
            string_to_tokens(" ako , jts ").unwrap(),
            string_to_tokens("AKo,JTs").unwrap()
        );
        assert_eq!(
            string_to_tokens("88 - JJ").unwrap(),
            string_to_tokens("88-JJ").unwrap()
        );
    }

    #[test]
    fn empty_string() {
        assert_eq!(string_to_tokens("").unwrap(), vec![]);
        assert_eq!(string_to_tokens("  ").unwrap(), vec![]);
    }

    #[test]
    fn grammar_errors() {
        assert_eq!(
            string_to_tokens("AsAs"),
            Err(RangeError::DuplicateCard("As".to_string()))
        );
        assert_eq!(
            string_to_tokens("AAs"),
            Err(RangeError::Grammar {
                pos: 2,
                expected: "no suitedness on a pair",
            })
        );
        assert_eq!(
            string_to_tokens("AKx"),
            Err(RangeError::Grammar {
                pos: 2,
                expected: "','",
            })
        );
        assert_eq!(
            string_to_tokens("2(AA)"),
            Err(RangeError::Grammar {
                pos: 0,
                expected: "a weight between 0 and 1",
            })
        );
        assert_eq!(
            string_to_tokens("0.5(AA"),
            Err(RangeError::Grammar {
                pos: 6,
                expected: "',' or ')'",
            })
        );
        assert!(matches!(
            string_to_tokens("A7o-ATs"),
            Err(RangeError::SuitednessMismatch { .. })
        ));
        assert!(!validate("AK-"));
        assert!(!validate("As"));
        assert!(!validate("AA,"));
    }

    #[test]
    fn hands_from_string() {
        let hands = string_to_hands("AA, AKs").unwrap();
        assert_eq!(hands.len(), 10);
        assert!(hands.iter().all(|&(_, w)| w == 1.0));
    }
}
