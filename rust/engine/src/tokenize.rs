//! Card token scanning inside one normalized payload.

use crate::cards::{Card, Rank, RankUniverse, Suit};
use crate::normalize::is_variation_selector;

/// Scan a payload for `<rank><suit>` tokens, left to right, without overlap.
///
/// `10` is tried before any single-character rank. Ranks outside `universe`
/// are not tokens, so `5♥` is skipped under [`RankUniverse::Restricted`].
/// Repeated cards are all returned.
///
/// ```rust
/// use handsort_engine::cards::RankUniverse;
/// use handsort_engine::tokenize::tokenize;
///
/// let cards = tokenize("A♠ x 10♦ 5♥ A♠", RankUniverse::Restricted);
/// let text: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
/// assert_eq!(text, ["A♠", "10♦", "A♠"]);
/// ```
pub fn tokenize(payload: &str, universe: RankUniverse) -> Vec<Card> {
    let chars: Vec<char> = payload.chars().collect();
    let mut cards = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match card_at(&chars[i..], universe) {
            Some((card, len)) => {
                cards.push(card);
                i += len;
            }
            None => i += 1,
        }
    }
    cards
}

/// Card starting at the head of `chars` and the number of chars it spans.
fn card_at(chars: &[char], universe: RankUniverse) -> Option<(Card, usize)> {
    let (rank, rank_len) = match chars {
        ['1', '0', ..] => (Rank::Ten, 2),
        [c, ..] => (Rank::from_char(*c)?, 1),
        [] => return None,
    };
    if !universe.contains(rank) {
        return None;
    }
    let suit = Suit::from_symbol(*chars.get(rank_len)?)?;
    let mut len = rank_len + 1;
    while chars.get(len).copied().is_some_and(is_variation_selector) {
        len += 1;
    }
    Some((Card { rank, suit }, len))
}
