use crate::deck::Deck;
use crate::error::RoundError;
use crate::player::Player;

use super::{CARDS_PER_HAND, Round, RoundPhase};

fn deal_hand(player: &mut Player, deck: &mut Deck) -> bool {
    for _ in 0..CARDS_PER_HAND {
        let Some(card) = deck.draw_one() else {
            return false;
        };
        player.add_card(card);
    }
    true
}

impl Round {
    /// Deals the opening hands: two cards to the dealer (the first one is the
    /// hole card), then two to each player in seat order.
    ///
    /// Dealing stops quietly when the deck runs out; players left short end
    /// their turn without being prompted.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt or has no
    /// players.
    pub fn deal(&mut self, deck: &mut Deck) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::Dealing)?;
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        let mut complete = deal_hand(self.dealer.player_mut(), deck);
        for player in &mut self.players {
            if !complete {
                break;
            }
            complete = deal_hand(player, deck);
        }

        if !complete {
            log::warn!("deck ran out while dealing");
        }

        self.set_phase(RoundPhase::PlayersTurn);
        Ok(())
    }
}
