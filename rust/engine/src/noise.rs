//! Removal of decorative tokens that bots and people sprinkle around hand lines.
//!
//! Each token is replaced by a single space and the line is normalized again,
//! so a token glued to a label or a parenthesis never changes what the
//! locator sees beyond the token itself.

use crate::cards::Suit;
use crate::normalize::{is_variation_selector, normalize};

/// Literal tokens, checked before tag markers so `🔵#R` goes in one piece.
const NOISE_LITERALS: [&str; 2] = ["🔵#R", "✅"];

/// Single-character decorations: dash variants and bullets.
const NOISE_CHARS: [char; 4] = ['-', '\u{2013}', '\u{2014}', '\u{2022}'];

/// Letters that form a tag marker when written after `#`.
const TAG_LETTERS: [char; 2] = ['R', 'T'];

/// Replace status glyphs, tag markers, dashes and bullets with spaces.
///
/// ```rust
/// use handsort_engine::noise::strip;
///
/// assert_eq!(strip("✅ #R #N2.5 — (A♠ K♦) #T12"), "#N2.5 (A♠ K♦)");
/// ```
pub fn strip(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(c) = rest.chars().next() {
        if let Some(len) = noise_len(rest) {
            out.push(' ');
            rest = &rest[len..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    normalize(&out)
}

/// Byte length of the noise token at the start of `text`, if there is one.
fn noise_len(text: &str) -> Option<usize> {
    if let Some(lit) = NOISE_LITERALS.iter().find(|lit| text.starts_with(*lit)) {
        return Some(lit.len());
    }
    let mut chars = text.chars();
    let first = chars.next()?;
    if NOISE_CHARS.contains(&first) {
        return Some(first.len_utf8());
    }
    if first == '#' {
        let letter = chars.next().filter(|c| TAG_LETTERS.contains(c))?;
        let tail = chars.as_str();
        let digits = tail.chars().take_while(|c| c.is_ascii_digit()).count();
        // Digits glued to a suit glyph are a card rank, not part of the tag.
        let rank_follows = tail[digits..]
            .chars()
            .find(|&c| !is_variation_selector(c))
            .and_then(Suit::from_symbol)
            .is_some();
        let digits = if rank_follows { 0 } else { digits };
        return Some(first.len_utf8() + letter.len_utf8() + digits);
    }
    None
}
