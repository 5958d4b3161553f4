//! Hands and the hand scorer.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Totals above this value are a bust.
pub const BUST_THRESHOLD: u8 = 21;

/// How much an Ace loses when it drops from 11 to 1.
const ACE_DEMOTION: u8 = 10;

/// Computes the best total of `cards` and whether it is soft.
///
/// Every Ace starts at 11; Aces are demoted to 1 one at a time while the
/// total exceeds 21. The total is soft when an Ace still counts as 11.
/// An empty slice scores `(0, false)`. Busted totals above 255 are reported
/// as 255.
///
/// # Example
///
/// ```
/// use bjround::{Card, Rank, Suit, hand::compute};
///
/// let cards = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::King),
/// ];
/// assert_eq!(compute(&cards), (21, true));
/// ```
#[must_use]
pub fn compute(cards: &[Card]) -> (u8, bool) {
    let mut total: u16 = 0;
    let mut high_aces: usize = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            high_aces += 1;
        }
        total += u16::from(card.value());
    }

    while total > u16::from(BUST_THRESHOLD) && high_aces > 0 {
        total -= u16::from(ACE_DEMOTION);
        high_aces -= 1;
    }

    (u8::try_from(total).unwrap_or(u8::MAX), high_aces > 0)
}

/// Returns whether the best total of `cards` exceeds 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    compute(cards).0 > BUST_THRESHOLD
}

/// An ordered hand of cards. Cards are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        compute(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        compute(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
