//! Minimum edit distance between two symbol sequences.
//!
//! Used by the ordering grader: every insertion, deletion, or substitution
//! needed to turn the learner's sequence into a candidate sequence costs one
//! point. The implementation is an iterative two-row dynamic-programming
//! table, so each call is bounded at `O(|s| * |t|)` time and `O(|t|)` space
//! with no recursion and no cross-call cache.

/// Levenshtein distance over the `char`s of `s` and `t`, with unit costs for
/// insertion, deletion, and substitution.
pub fn levenshtein(s: &str, t: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    let t: Vec<char> = t.chars().collect();
    if s.is_empty() {
        return t.len();
    }
    if t.is_empty() {
        return s.len();
    }

    let mut prev: Vec<usize> = (0..=t.len()).collect();
    let mut curr: Vec<usize> = vec![0; t.len() + 1];

    for (i, sc) in s.iter().enumerate() {
        curr[0] = i + 1;
        for (j, tc) in t.iter().enumerate() {
            let cost = if sc == tc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[t.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iff_identical() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_ne!(levenshtein("abc", "abd"), 0);
    }

    #[test]
    fn empty_side_costs_full_length() {
        assert_eq!(levenshtein("", "abcd"), 4);
        assert_eq!(levenshtein("abcd", ""), 4);
    }

    #[test]
    fn kitten_to_sitting_is_three() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn symmetric() {
        let pairs = [("abcdef", "azced"), ("flaw", "lawn"), ("", "x"), ("gumbo", "gambol")];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn long_sequences_stay_cheap() {
        // The recursive formulation would be exponential here.
        let a: String = std::iter::repeat("abcdefghij").take(5).collect();
        let b: String = std::iter::repeat("abcdefghix").take(5).collect();
        assert_eq!(levenshtein(&a, &b), 5);
    }
}
