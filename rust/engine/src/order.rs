use crate::cards::{all_suits, Card, RankUniverse};

/// Fixed report order over every card of a rank universe.
///
/// Suits run spades, diamonds, clubs, hearts; inside a suit ranks run from Ace
/// down to the lowest rank of the universe. A card's position is its sort key.
///
/// ```rust
/// use handsort_engine::cards::RankUniverse;
/// use handsort_engine::order::CanonicalOrderTable;
///
/// let table = CanonicalOrderTable::new(RankUniverse::Restricted);
/// assert_eq!(table.len(), 36);
/// assert_eq!(table.position(&"A♠".parse().unwrap()), Some(0));
/// assert_eq!(table.position(&"6♥".parse().unwrap()), Some(35));
/// assert_eq!(table.position(&"5♥".parse().unwrap()), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalOrderTable {
    universe: RankUniverse,
    cards: Vec<Card>,
}

impl CanonicalOrderTable {
    pub fn new(universe: RankUniverse) -> Self {
        let ranks = universe.ranks();
        let mut cards = Vec::with_capacity(ranks.len() * 4);
        for suit in all_suits() {
            for &rank in ranks.iter().rev() {
                cards.push(Card { rank, suit });
            }
        }
        Self { universe, cards }
    }

    pub fn universe(&self) -> RankUniverse {
        self.universe
    }

    /// Index of `card` in the table, `None` for cards outside the universe.
    pub fn position(&self, card: &Card) -> Option<usize> {
        if !self.universe.contains(card.rank) {
            return None;
        }
        self.cards.binary_search(card).ok()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.position(card).is_some()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
