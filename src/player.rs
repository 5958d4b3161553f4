//! Round participants.

use crate::card::Card;
use crate::hand::Hand;

/// Where a participant stands in its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// Still deciding.
    Active,
    /// Stood voluntarily (or, for the dealer, reached the stand rule).
    Standing,
    /// Went over 21.
    Busted,
    /// The deck ran dry before the turn was over.
    OutOfCards,
}

impl TurnStatus {
    /// Returns whether the turn is over for this round.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A seated player.
#[derive(Debug, Clone)]
pub struct Player {
    position: usize,
    hand: Hand,
    status: TurnStatus,
}

impl Player {
    /// Creates a player at `position` (0-based) with an empty hand.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self {
            position,
            hand: Hand::new(),
            status: TurnStatus::Active,
        }
    }

    /// Seats a player at `position` holding `hand`, e.g. to replay a
    /// finished round. The player is [`TurnStatus::Busted`] if the hand is
    /// over 21 and [`TurnStatus::Standing`] otherwise.
    #[must_use]
    pub fn with_hand(position: usize, hand: Hand) -> Self {
        let status = if hand.is_bust() {
            TurnStatus::Busted
        } else {
            TurnStatus::Standing
        };
        Self {
            position,
            hand,
            status,
        }
    }

    /// Returns the 0-based seat position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current turn status.
    #[must_use]
    pub const fn status(&self) -> TurnStatus {
        self.status
    }

    /// Returns whether the player has stood, busted or run out of cards.
    #[must_use]
    pub const fn finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Returns whether the player's hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the best total of the player's hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub(crate) const fn set_status(&mut self, status: TurnStatus) {
        self.status = status;
    }
}

/// The dealer: a player whose first card stays face down until its turn.
#[derive(Debug, Clone)]
pub struct Dealer {
    player: Player,
    hole_revealed: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand and the hole card hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player: Player::new(0),
            hole_revealed: false,
        }
    }

    /// Creates a dealer holding `hand` with the hole card revealed.
    #[must_use]
    pub fn with_hand(hand: Hand) -> Self {
        Self {
            player: Player::with_hand(0, hand),
            hole_revealed: true,
        }
    }

    /// Returns the wrapped participant state.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) const fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        self.player.hand()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub(crate) const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the value the table can see: only the up card while the hole
    /// card is hidden.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.player.value()
        } else {
            self.hand().cards().get(1).map_or(0, Card::value)
        }
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}
