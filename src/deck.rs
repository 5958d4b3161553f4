//! The deck supplier: a single shuffled deck consumed from its head.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered sequence of remaining cards.
///
/// The top of the deck is stored at the end of the vector so that drawing is
/// a `pop`.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a standard 52-card deck plus `jokers` jokers, shuffled with a
    /// generator seeded from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::Deck;
    ///
    /// let deck = Deck::shuffled(0, 42);
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn shuffled(jokers: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(DECK_SIZE + jokers as usize);

        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                cards.push(Card::new(suit, rank));
            }
        }
        for i in 0..jokers {
            let suit = if i % 2 == 0 { Suit::Spades } else { Suit::Hearts };
            cards.push(Card::joker(suit));
        }

        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Creates a deck that yields `draws` in order, first element first.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the head card, or `None` once the deck is empty.
    ///
    /// Jokers take no part in play and are discarded on the way.
    pub fn draw_one(&mut self) -> Option<Card> {
        while let Some(card) = self.cards.pop() {
            if card.is_joker() {
                log::debug!("discarding joker from the deck head");
                continue;
            }
            return Some(card);
        }
        None
    }

    /// Returns the number of cards left, jokers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards that can still be dealt.
    #[must_use]
    pub fn playable(&self) -> usize {
        self.cards.iter().filter(|card| !card.is_joker()).count()
    }

    /// Returns whether a draw would come up empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.playable() == 0
    }
}
