//! Text canonicalization applied to every hand line and payload.
//!
//! Rules run in a fixed order:
//!
//! 1. drop presentation selectors (`U+FE0E`, `U+FE0F`) so `♠️` and `♠` match,
//! 2. rewrite a `T`/`t` in rank position (directly before a suit glyph) as `10`,
//! 3. collapse `1`, any run of blanks or dashes, then `0` into `10`,
//! 4. collapse whitespace runs to one space and trim.
//!
//! The result is a fixed point: `normalize(&normalize(s)) == normalize(s)`.

use crate::cards::Suit;

/// Dash characters accepted between the two digits of a spaced-out `1 0`.
const TEN_SEPARATOR_DASHES: [char; 5] = ['-', '\u{2010}', '\u{2011}', '\u{2013}', '\u{2014}'];

/// Zero-width marks that select emoji or text presentation of a glyph.
pub fn is_variation_selector(c: char) -> bool {
    matches!(c, '\u{FE0E}' | '\u{FE0F}')
}

fn is_ten_separator(c: char) -> bool {
    c.is_whitespace() || TEN_SEPARATOR_DASHES.contains(&c)
}

/// Canonicalize glyph variants, ten spellings and spacing.
///
/// Never fails and never allocates more than a couple of copies of the input.
///
/// ```rust
/// use handsort_engine::normalize::normalize;
///
/// assert_eq!(normalize("  #N1.3( T♠\u{FE0F}  1 - 0♦ )  "), "#N1.3( 10♠ 10♦ )");
/// ```
pub fn normalize(text: &str) -> String {
    let chars: Vec<char> = text.chars().filter(|&c| !is_variation_selector(c)).collect();
    let chars = rewrite_letter_ten(&chars);
    let chars = collapse_spaced_ten(&chars);
    collapse_whitespace(&chars)
}

fn rewrite_letter_ten(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        let before_suit = chars
            .get(i + 1)
            .is_some_and(|&next| Suit::from_symbol(next).is_some());
        if matches!(c, 'T' | 't') && before_suit {
            out.extend(['1', '0']);
        } else {
            out.push(c);
        }
    }
    out
}

fn collapse_spaced_ten(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '1' {
            let mut j = i + 1;
            while j < chars.len() && is_ten_separator(chars[j]) {
                j += 1;
            }
            if chars.get(j) == Some(&'0') {
                out.extend(['1', '0']);
                i = j + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn collapse_whitespace(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut pending_space = false;
    for &c in chars {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_presentation_selectors() {
        assert_eq!(normalize("10♠\u{FE0F}"), "10♠");
        assert_eq!(normalize("A♥\u{FE0E}"), "A♥");
    }

    #[test]
    fn letter_ten_only_in_rank_position() {
        assert_eq!(normalize("T♣ t♦"), "10♣ 10♦");
        assert_eq!(normalize("Tour #T3"), "Tour #T3");
        assert_eq!(normalize("T\u{FE0F}♥"), "10♥");
    }

    #[test]
    fn spaced_and_hyphenated_ten_collapse() {
        assert_eq!(normalize("1 0♠"), "10♠");
        assert_eq!(normalize("1-0♠"), "10♠");
        assert_eq!(normalize("1  -  0♠"), "10♠");
        assert_eq!(normalize("1\u{2013}0♦"), "10♦");
    }

    #[test]
    fn other_punctuation_is_not_a_ten_separator() {
        assert_eq!(normalize("#N1.0"), "#N1.0");
        assert_eq!(normalize("1 1 0"), "1 10");
    }

    #[test]
    fn whitespace_is_collapsed_and_trimmed() {
        assert_eq!(normalize("\t a \r\n  b  "), "a b");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn is_idempotent_on_tricky_inputs() {
        for s in [
            "1  0",
            "1 T♠",
            "11 - 0",
            "T T♠ 1\t\t0",
            "— 1 — 0 —",
            "#N1.3(A♠\u{FE0F} 9♦ K♣)",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not a fixed point for {:?}", s);
        }
    }
}
