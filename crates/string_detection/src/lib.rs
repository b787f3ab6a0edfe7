// crates/string_detection/src/lib.rs

//! Heuristics for deciding whether a position in a line of source code
//! falls inside a string literal. Useful for line-oriented tools that
//! must not mistake marker-like text inside quoted strings for the real
//! thing. These are best-effort lexical checks, not a parser: only
//! single-line literals delimited by the characters in [`QUOTE_CHARS`]
//! are recognized.

/// The characters treated as string delimiters.
pub const QUOTE_CHARS: [char; 3] = ['\'', '"', '`'];

/// Returns `true` if `index` is likely to be within a string, according
/// to the handling of strings in typical programming languages. Index
/// `0` is considered to be outside a string.
///
/// Only the characters of `line` before `index` are scanned. A quote
/// character opens a string; the same quote character closes it again
/// unless it is escaped by a backslash, and runs of backslashes cancel
/// pairwise. A quote character different from the one that opened the
/// string is literal text. `index` is a character count; an index past
/// the end of the line scans the whole line.
pub fn is_likely_in_string(line: &str, index: usize) -> bool {
    let mut current_quote: Option<char> = None;
    let mut escaped = false;

    for ch in line.chars().take(index) {
        if QUOTE_CHARS.contains(&ch) {
            match current_quote {
                None => current_quote = Some(ch),
                Some(open) if ch == open && !escaped => current_quote = None,
                Some(_) => {}
            }
        }
        // The quote check above must see the escape state left by the
        // preceding character, so the flag is recomputed afterwards.
        escaped = current_quote.is_some() && ch == '\\' && !escaped;
    }

    current_quote.is_some()
}

/// Returns a boolean for each character boundary in the concatenation
/// of `segments`, `true` where the boundary is inside a string.
///
/// Segments alternate between outside (even index) and inside (odd
/// index) a string; this encodes a partition supplied by the caller and
/// performs no quote or escape tracking of its own. The first entry,
/// before any character, is always `false`, so the result has one more
/// entry than the total character count. Empty segments contribute no
/// entries but still count towards the alternation.
pub fn string_boundary_map<S: AsRef<str>>(segments: &[S]) -> Vec<bool> {
    let mut boundaries = vec![false];
    for (i, segment) in segments.iter().enumerate() {
        let in_string = i % 2 == 1;
        boundaries.extend(segment.as_ref().chars().map(|_| in_string));
    }
    boundaries
}

/// Renders a boundary map as a string of `0`s and `1`s.
pub fn to_bit_string(values: &[bool]) -> String {
    values.iter().map(|&v| if v { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_is_outside() {
        assert!(!is_likely_in_string("", 0));
        assert!(!is_likely_in_string("'already open", 0));
    }

    #[test]
    fn test_membership_per_index() {
        // Expected membership at every index of a simple assignment.
        let line = "x = 'abc'";
        let expected = "0000011110";
        for (i, want) in expected.chars().enumerate() {
            assert_eq!(
                is_likely_in_string(line, i),
                want == '1',
                "wrong result at index {}",
                i
            );
        }
    }

    #[test]
    fn test_quote_run_parity() {
        // An even run of quotes closes every string it opens.
        assert!(!is_likely_in_string("''''", 4));
        assert!(is_likely_in_string("'''", 3));
    }

    #[test]
    fn test_empty_string_literal_closes() {
        assert!(!is_likely_in_string("x = ''", 6));
    }

    #[test]
    fn test_escaped_quote_keeps_string_open() {
        // The line is `x = '\'`: the backslash escapes the second quote.
        assert!(is_likely_in_string("x = '\\'", 7));
    }

    #[test]
    fn test_double_backslash_cancels_escape() {
        // The line is `x = '\\'`: the backslashes escape each other.
        assert!(!is_likely_in_string("x = '\\\\'", 8));
    }

    #[test]
    fn test_triple_backslash_escapes_quote() {
        // The line is `x = '\\\'`: the third backslash is active again.
        assert!(is_likely_in_string("x = '\\\\\\'", 9));
    }

    #[test]
    fn test_differing_quote_is_literal_text() {
        assert!(is_likely_in_string("'a\"b", 4));
        assert!(!is_likely_in_string("'a\"b'", 5));
        assert!(is_likely_in_string("`a'b\"c", 6));
    }

    #[test]
    fn test_backtick_delimits_strings() {
        assert!(is_likely_in_string("x = `cmd", 8));
        assert!(!is_likely_in_string("x = `cmd`", 9));
    }

    #[test]
    fn test_backslash_outside_string_is_inert() {
        // Escape state only accumulates inside a string, so a backslash
        // before the opening quote doesn't escape it.
        assert!(is_likely_in_string("\\'", 2));
        assert!(!is_likely_in_string("\\\\' '", 5));
    }

    #[test]
    fn test_lone_trailing_backslash() {
        // The flag is left set but scanning stops at the index anyway.
        assert!(is_likely_in_string("'ab\\", 4));
    }

    #[test]
    fn test_reopened_string_after_close() {
        let line = "'a' + 'b";
        assert!(!is_likely_in_string(line, 4));
        assert!(is_likely_in_string(line, 8));
    }

    #[test]
    fn test_boundary_map_alternating_segments() {
        let map = string_boundary_map(&["x = ", "'abc", "'"]);
        assert_eq!(to_bit_string(&map), "0000011110");
    }

    #[test]
    fn test_boundary_map_no_segments() {
        assert_eq!(string_boundary_map::<&str>(&[]), vec![false]);
    }

    #[test]
    fn test_boundary_map_empty_segment_toggles_by_parity() {
        // The empty middle segment emits nothing, but the last segment
        // keeps the membership of its even index.
        let map = string_boundary_map(&["x = '", "", "'"]);
        assert_eq!(map.len(), 7);
        assert_eq!(to_bit_string(&map), "0000000");
    }

    #[test]
    fn test_boundary_map_unterminated_string() {
        let map = string_boundary_map(&["x = ", "'abc"]);
        assert_eq!(to_bit_string(&map), "000001111");
    }

    #[test]
    fn test_boundary_map_counts_chars_not_bytes() {
        let map = string_boundary_map(&["héllo", "wörld"]);
        assert_eq!(map.len(), 11);
        assert_eq!(to_bit_string(&map), "00000011111");
    }

    #[test]
    fn test_to_bit_string() {
        assert_eq!(to_bit_string(&[false, true, false]), "010");
        assert_eq!(to_bit_string(&[]), "");
    }
}
