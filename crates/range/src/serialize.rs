// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Range string serialization.
//!
//! Compresses weighted hand type tokens back into the shortest range
//! string shorthand: contiguous rank runs collapse into dash ranges, runs
//! reaching the structural top into `+` shorthands, and tokens sharing a
//! weight below one into a `W%(...)` group. Parsing the output expands to
//! the same weighted token set, the text itself may differ from the
//! original input.
use floptex_cards::Rank;

use crate::token::HandType;

/// Serializes weighted hand type tokens into a range string.
pub fn tokens_to_string(tokens: &[(HandType, f64)]) -> String {
    let mut weights: Vec<f64> = Vec::new();
    for &(_, weight) in tokens {
        if !weights.contains(&weight) {
            weights.push(weight);
        }
    }
    // Full weight goes first unprefixed, the others in descending order.
    weights.sort_by(|a, b| b.partial_cmp(a).expect("weights are not NaN"));

    let mut parts = Vec::new();
    for &weight in &weights {
        let bucket = bucket_to_string(tokens, weight);
        if weight == 1.0 {
            parts.push(bucket);
        } else {
            parts.push(format!("{}%({})", format_percent(weight), bucket));
        }
    }
    parts.join(", ")
}

/// Serializes the tokens with the given weight.
fn bucket_to_string(tokens: &[(HandType, f64)], weight: f64) -> String {
    let mut pairs = Vec::new();
    let mut other = Vec::new();
    let mut explicit = Vec::new();
    for &(token, w) in tokens {
        if w != weight {
            continue;
        }
        match token {
            HandType::Pair(r) => pairs.push(r),
            HandType::Suited(hi, lo) => other.push((hi, lo, true)),
            HandType::Offsuit(hi, lo) => other.push((hi, lo, false)),
            HandType::Explicit(hi, lo) => explicit.push((hi, lo)),
        }
    }

    let mut parts = Vec::new();

    pairs.sort_unstable();
    pairs.dedup();
    let mut runs = rank_runs(&pairs)
        .into_iter()
        .map(|(bot, top)| pair_run(bot, top))
        .collect::<Vec<_>>();
    runs.reverse();
    parts.extend(runs);

    for hi in Rank::ranks().rev() {
        for suited in [true, false] {
            let mut los = other
                .iter()
                .filter(|&&(h, _, s)| h == hi && s == suited)
                .map(|&(_, lo, _)| lo)
                .collect::<Vec<_>>();
            los.sort_unstable();
            los.dedup();
            let mut runs = rank_runs(&los)
                .into_iter()
                .map(|(bot, top)| other_run(hi, bot, top, suited))
                .collect::<Vec<_>>();
            runs.reverse();
            parts.extend(runs);
        }
    }

    explicit.sort_unstable_by(|a, b| b.cmp(a));
    explicit.dedup();
    parts.extend(explicit.iter().map(|&(hi, lo)| format!("{hi}{lo}")));

    parts.join(", ")
}

/// Splits sorted ranks into maximal contiguous runs.
fn rank_runs(ranks: &[Rank]) -> Vec<(Rank, Rank)> {
    let mut runs = Vec::new();
    let mut iter = ranks.iter().copied();
    let Some(mut bot) = iter.next() else {
        return runs;
    };
    let mut prev = bot;
    for rank in iter {
        if rank as usize - prev as usize > 1 {
            runs.push((bot, prev));
            bot = rank;
        }
        prev = rank;
    }
    runs.push((bot, prev));
    runs
}

/// Renders a run of pairs, `+` only when the run reaches the aces.
fn pair_run(bot: Rank, top: Rank) -> String {
    if bot == top {
        format!("{bot}{bot}")
    } else if top == Rank::Ace {
        format!("{bot}{bot}+")
    } else {
        format!("{bot}{bot}-{top}{top}")
    }
}

/// Renders a run of suited or offsuit tokens with a fixed high card,
/// `+` only when the run reaches one below the high card.
fn other_run(hi: Rank, bot: Rank, top: Rank, suited: bool) -> String {
    let s = if suited { 's' } else { 'o' };
    if bot == top {
        format!("{hi}{bot}{s}")
    } else if top as usize + 1 == hi as usize {
        format!("{hi}{bot}{s}+")
    } else {
        format!("{hi}{bot}{s}-{hi}{top}{s}")
    }
}

/// Formats a weight as a percentage that parses back to the same value.
fn format_percent(weight: f64) -> String {
    let percent = weight * 100.0;
    for precision in 0..=15 {
        let text = format!("{percent:.precision$}");
        if text.parse::<f64>().is_ok_and(|p| p / 100.0 == weight) {
            return text;
        }
    }
    format!("{percent}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::string_to_tokens;
    use ahash::HashSet;
    use Rank::*;

    fn roundtrip(text: &str) -> String {
        tokens_to_string(&string_to_tokens(text).unwrap())
    }

    #[test]
    fn single_tokens() {
        assert_eq!(
            tokens_to_string(&[
                (HandType::Pair(Ace), 1.0),
                (HandType::Suited(Ace, Queen), 1.0),
                (HandType::Suited(Ace, Jack), 1.0),
            ]),
            "AA, AJs-AQs"
        );
    }

    #[test]
    fn runs_compress() {
        assert_eq!(roundtrip("88, 99, TT, JJ"), "88-JJ");
        assert_eq!(roundtrip("TT, JJ, QQ, KK, AA"), "TT+");
        assert_eq!(roundtrip("ATs, AJs, AQs, AKs"), "ATs+");
        assert_eq!(roundtrip("A2o, A3o, A4o"), "A2o-A4o");

        // A gap splits the run.
        assert_eq!(roundtrip("88, 99, JJ"), "JJ, 88-99");
        assert_eq!(roundtrip("A2s, A3s, A5s"), "A5s, A2s-A3s");
    }

    #[test]
    fn output_ordering() {
        // Pairs first descending, then suited before offsuit by high
        // card, explicit hands last.
        assert_eq!(
            roundtrip("As3c, A2o, KQs, 22, 77, AKo"),
            "77, 22, AKo, A2o, KQs, As3c"
        );
    }

    #[test]
    fn weighted_buckets() {
        assert_eq!(roundtrip("AA, 0.8(AKs)"), "AA, 80%(AKs)");
        assert_eq!(roundtrip("0.5(KK), AA, 80%(AKs)"), "AA, 80%(AKs), 50%(KK)");
        assert_eq!(roundtrip("12.5%(AKo)"), "12.5%(AKo)");
    }

    #[test]
    fn expansion_roundtrip() {
        // Serialization preserves the expanded weighted token set.
        for text in [
            "AA, AKs, ATo-A2o",
            "TT+, A8o-ATo, 80%(KTs+)",
            "0.6(AA, AK), 40%(ATs+), 86",
            "As3c, 8c5s, #UTG#, JT",
        ] {
            let tokens = string_to_tokens(text).unwrap();
            let serialized = tokens_to_string(&tokens);
            let reparsed = string_to_tokens(&serialized).unwrap();

            let lhs: HashSet<_> = tokens
                .iter()
                .map(|&(t, w)| (t, w.to_bits()))
                .collect();
            let rhs: HashSet<_> = reparsed
                .iter()
                .map(|&(t, w)| (t, w.to_bits()))
                .collect();
            assert_eq!(lhs, rhs, "roundtrip failed for '{text}'");
        }
    }
}
