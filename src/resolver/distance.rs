//! Edit distance between component names and file names
//!
//! Classic Levenshtein distance: the minimum number of single-character
//! insertions, deletions or substitutions turning one string into the other.
//! Characters are Unicode scalar values.
//!
//! The table is filled row by row, each row being one more character of `a`
//! and each column one more character of `b`. Only the previous row is kept.

/// Levenshtein distance between `a` and `b`
///
/// # Example
///
/// ```text
/// distance("kitten", "sitting") == 3
/// distance("jquery", "")        == 6
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // previous[j] is the distance between a[..i] and b[..j]
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_kitten_sitting() {
        assert_eq!(distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_distance_empty() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("jquery", ""), 6);
        assert_eq!(distance("", "jquery"), 6);
    }

    #[test]
    fn test_distance_zero_iff_equal() {
        assert_eq!(distance("jquery", "jquery"), 0);
        assert_ne!(distance("jquery", "jQuery"), 0);
        assert_ne!(distance("a", "aa"), 0);
    }

    #[test]
    fn test_distance_symmetric() {
        let words = [
            "",
            "a",
            "jquery",
            "jquery.min",
            "underscore",
            "underscore-min",
            "backbone",
            "bootstrap",
            "ß∂ƒ",
        ];
        for a in words {
            for b in words {
                assert_eq!(distance(a, b), distance(b, a), "distance({a:?}, {b:?})");
            }
        }
    }

    #[test]
    fn test_distance_main_file_candidates() {
        assert_eq!(distance("jquery", "jquery"), 0);
        assert_eq!(distance("jquery", "jquery.min"), 4);
        assert_eq!(distance("underscore", "underscore-min"), 4);
    }

    #[test]
    fn test_distance_counts_chars_not_bytes() {
        assert_eq!(distance("ä", "a"), 1);
        assert_eq!(distance("日本", "日本語"), 1);
    }

    #[test]
    fn test_distance_substitution_insertion_deletion() {
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("abc", "abxc"), 1);
        assert_eq!(distance("abxc", "abc"), 1);
        assert_eq!(distance("abc", "abd"), 1);
    }
}
