//! Turn controller: applies Hit/Stand to a player and auto-plays the dealer.

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{BUST_THRESHOLD, Hand};
use crate::player::{Player, TurnStatus};

/// The dealer keeps drawing while its total is at or below this value.
pub const DEALER_STAND_THRESHOLD: u8 = 16;

/// A player's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// What a single turn step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// A card was drawn and the hand is still live.
    Drew {
        /// The card drawn.
        card: Card,
        /// Hand total after the draw.
        value: u8,
    },
    /// The hand went over 21 with this card.
    Busted {
        /// The card drawn.
        card: Card,
        /// Hand total after the draw.
        value: u8,
    },
    /// The participant stood.
    Stood {
        /// Final hand total.
        value: u8,
    },
    /// A draw was attempted on an empty deck.
    OutOfCards,
}

/// Returns whether the dealer must draw another card.
///
/// The dealer draws at 16 or below, and keeps drawing on any soft total.
#[must_use]
pub fn dealer_should_hit(hand: &Hand) -> bool {
    let value = hand.value();
    let soft = hand.is_soft();
    value <= DEALER_STAND_THRESHOLD || (soft && value <= BUST_THRESHOLD)
}

/// Returns whether the dealer's revealed two-card hand ends its turn.
///
/// Any total above 16 stands, except a soft 17, which goes on to draw.
#[must_use]
pub fn dealer_stands_on_deal(hand: &Hand) -> bool {
    let value = hand.value();
    value > DEALER_STAND_THRESHOLD + 1 || (value == DEALER_STAND_THRESHOLD + 1 && !hand.is_soft())
}

/// Draws one card from `deck` into `player`'s hand and updates its status.
///
/// The player stays active unless the draw busts the hand or the deck is
/// already empty.
pub fn draw(player: &mut Player, deck: &mut Deck) -> TurnEvent {
    let Some(card) = deck.draw_one() else {
        player.set_status(TurnStatus::OutOfCards);
        return TurnEvent::OutOfCards;
    };

    player.add_card(card);
    let value = player.value();
    if value > BUST_THRESHOLD {
        player.set_status(TurnStatus::Busted);
        TurnEvent::Busted { card, value }
    } else {
        TurnEvent::Drew { card, value }
    }
}

/// Applies a player's choice.
pub fn apply_choice(player: &mut Player, choice: Choice, deck: &mut Deck) -> TurnEvent {
    debug_assert!(!player.finished(), "choice applied to a finished player");
    match choice {
        Choice::Hit => draw(player, deck),
        Choice::Stand => {
            player.set_status(TurnStatus::Standing);
            TurnEvent::Stood {
                value: player.value(),
            }
        }
    }
}

/// Runs one step of the dealer's turn.
///
/// Stands without drawing when the hand already satisfies the stand rule.
/// Otherwise draws once; if the new hand satisfies the stand rule the dealer
/// is marked [`TurnStatus::Standing`] and the draw is reported.
pub fn dealer_step(dealer: &mut Player, deck: &mut Deck) -> TurnEvent {
    if !dealer_should_hit(dealer.hand()) {
        dealer.set_status(TurnStatus::Standing);
        return TurnEvent::Stood {
            value: dealer.value(),
        };
    }

    let event = draw(dealer, deck);
    if let TurnEvent::Drew { .. } = event {
        if !dealer_should_hit(dealer.hand()) {
            dealer.set_status(TurnStatus::Standing);
        }
    }
    event
}
