// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Saved ranges storage interface.
//!
//! Range strings may reference named ranges with `#tag#` tokens. The
//! parser treats unresolved tags as empty groups, callers that want them
//! resolved substitute the saved text before parsing with
//! [resolve_tags]. Storage itself is a collaborator injected behind the
//! [RangeStore] trait, the parsing core performs no I/O.
use anyhow::Result;
use std::collections::BTreeMap;

/// Named saved ranges, name to range string.
pub type SavedRanges = BTreeMap<String, String>;

/// Storage collaborator for named ranges.
pub trait RangeStore {
    /// Loads all saved ranges.
    fn load(&self) -> Result<SavedRanges>;

    /// Persists all saved ranges, replacing the previous contents.
    fn save(&self, ranges: &SavedRanges) -> Result<()>;
}

/// Replaces `#name#` references with their saved range string.
///
/// Unknown tags are left in place, the parser expands them to nothing.
pub fn resolve_tags(text: &str, ranges: &SavedRanges) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('#') {
        let Some(len) = rest[start + 1..].find('#') else {
            break;
        };
        let name = &rest[start + 1..start + 1 + len];
        out.push_str(&rest[..start]);
        match ranges.get(name) {
            Some(range) => out.push_str(range),
            None => {
                out.push('#');
                out.push_str(name);
                out.push('#');
            }
        }
        rest = &rest[start + len + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::string_to_tokens;

    fn ranges() -> SavedRanges {
        let mut ranges = SavedRanges::new();
        ranges.insert("UTG".to_string(), "TT+, AQs+".to_string());
        ranges.insert("BTN".to_string(), "22+, A2s+, KTo+".to_string());
        ranges
    }

    #[test]
    fn resolves_saved_tags() {
        let resolved = resolve_tags("#UTG#, 86s", &ranges());
        assert_eq!(resolved, "TT+, AQs+, 86s");
        assert_eq!(
            string_to_tokens(&resolved).unwrap(),
            string_to_tokens("TT+, AQs+, 86s").unwrap()
        );
    }

    #[test]
    fn unknown_tags_stay() {
        let resolved = resolve_tags("#MISSING#, AA", &ranges());
        assert_eq!(resolved, "#MISSING#, AA");

        // The parser drops them during expansion.
        assert_eq!(
            string_to_tokens(&resolved).unwrap(),
            string_to_tokens("AA").unwrap()
        );
    }

    #[test]
    fn unterminated_tag_is_kept() {
        assert_eq!(resolve_tags("#UTG", &ranges()), "#UTG");
    }
}
