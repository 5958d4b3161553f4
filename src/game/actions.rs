use crate::deck::Deck;
use crate::error::{GameError, RoundError};
use crate::player::TurnStatus;
use crate::table::{Table, TableEvent};
use crate::turn::{self, Choice, TurnEvent};

use super::{Round, RoundPhase};

impl Round {
    fn ensure_player_turn(&self, position: usize) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::PlayersTurn)?;

        let player = self
            .players
            .get(position)
            .ok_or(RoundError::PlayerNotFound)?;
        if player.finished() {
            return Err(RoundError::PlayerFinished);
        }

        Ok(())
    }

    fn advance_if_all_finished(&mut self) {
        if self.all_players_finished() {
            self.set_phase(RoundPhase::DealerSetup);
        }
    }

    /// Applies a Hit or Stand for the player at `position`.
    ///
    /// Hitting on an empty deck ends the player's turn as
    /// [`TurnStatus::OutOfCards`]. Once every player is finished the round
    /// moves on to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the players' turn, the position is not
    /// seated, or the player has already finished.
    pub fn act(
        &mut self,
        position: usize,
        choice: Choice,
        deck: &mut Deck,
    ) -> Result<TurnEvent, RoundError> {
        self.ensure_player_turn(position)?;

        let player = &mut self.players[position];
        let event = turn::apply_choice(player, choice, deck);
        log::debug!("player {} {:?}: {:?}", position + 1, choice, event);

        self.advance_if_all_finished();
        Ok(event)
    }

    /// Ends the turn of the player at `position` because the deck is empty.
    fn run_out(&mut self, position: usize) {
        log::warn!("no cards left for player {}", position + 1);
        self.players[position].set_status(TurnStatus::OutOfCards);
        self.advance_if_all_finished();
    }

    /// Offers Hit/Stand to each unfinished player in seat order, one choice
    /// per pass, until every player has stood, busted or run out of cards.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Prompt`] if the table fails to produce a choice,
    /// or [`GameError::Round`] if it is not the players' turn.
    pub fn play_players<T: Table>(
        &mut self,
        deck: &mut Deck,
        table: &mut T,
    ) -> Result<(), GameError<T::Error>> {
        self.ensure_phase(RoundPhase::PlayersTurn)?;
        table.notify(TableEvent::PlayersTurn);

        // A round dealt to nobody has no player turns.
        self.advance_if_all_finished();

        while self.phase == RoundPhase::PlayersTurn {
            self.show_hands(table);

            for position in 0..self.players.len() {
                if self.players[position].finished() {
                    continue;
                }

                if deck.is_exhausted() {
                    self.run_out(position);
                    table.notify(TableEvent::PlayerOutOfCards { position });
                    continue;
                }

                let choice = table
                    .request_choice(position, &self.players[position])
                    .map_err(GameError::Prompt)?;

                let event = match self.act(position, choice, deck)? {
                    TurnEvent::Drew { card, value } => TableEvent::PlayerDrew {
                        position,
                        card,
                        value,
                    },
                    TurnEvent::Busted { card, value } => TableEvent::PlayerBusted {
                        position,
                        card,
                        value,
                    },
                    TurnEvent::Stood { value } => TableEvent::PlayerStood { position, value },
                    TurnEvent::OutOfCards => TableEvent::PlayerOutOfCards { position },
                };
                table.notify(event);
            }
        }

        Ok(())
    }
}
