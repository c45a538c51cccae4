//! Partial-ratio string similarity on the 0-100 fuzzy scale.

use strsim::levenshtein;

/// Best-aligned substring similarity between two strings, 0-100.
///
/// The shorter string is slid over every equal-length character window of
/// the longer one; each window is scored by normalized edit distance and
/// the best window wins. This is the classic "partial ratio": `"Acrobat"`
/// scores 100 against `"Adobe Acrobat DC"` because one window matches
/// exactly, even though the full strings differ a lot.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();

    let (shorter, longer) = if chars_a.len() <= chars_b.len() {
        (&chars_a, &chars_b)
    } else {
        (&chars_b, &chars_a)
    };

    if shorter.is_empty() {
        // Two empty strings are identical; an empty string against a
        // non-empty one shares nothing.
        return if longer.is_empty() { 100 } else { 0 };
    }

    let needle: String = shorter.iter().collect();
    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        let candidate: String = window.iter().collect();
        let distance = levenshtein(&needle, &candidate);
        let score = 1.0 - distance as f64 / shorter.len() as f64;
        if score > best {
            best = score;
            if best >= 1.0 {
                break;
            }
        }
    }

    (best * 100.0).round() as u32
}
