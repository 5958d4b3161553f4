use crate::deck::Deck;
use crate::error::RoundError;
use crate::player::TurnStatus;
use crate::result::{self, RoundResult};
use crate::table::{Table, TableEvent};
use crate::tally::Scoreboard;
use crate::turn::{self, TurnEvent};

use super::{Round, RoundPhase};

impl Round {
    /// Reveals the dealer's hole card.
    ///
    /// The dealer is finished straight away when every player has busted or
    /// when the revealed total is above 16 (a soft 17 still draws);
    /// otherwise the round moves to the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the players have not all finished.
    pub fn setup_dealer<T: Table>(&mut self, table: &mut T) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::DealerSetup)?;

        self.dealer.reveal_hole();
        let value = self.dealer.player().value();
        if let Some(&card) = self.dealer.hand().cards().first() {
            table.notify(TableEvent::HoleRevealed { card, value });
        }

        if self.all_players_bust() {
            log::debug!("every player busted; dealer stands on {value}");
            self.dealer.player_mut().set_status(TurnStatus::Standing);
            self.set_phase(RoundPhase::Settlement);
        } else if turn::dealer_stands_on_deal(self.dealer.hand()) {
            self.dealer.player_mut().set_status(TurnStatus::Standing);
            table.notify(TableEvent::DealerStood { value });
            self.set_phase(RoundPhase::Settlement);
        } else {
            self.set_phase(RoundPhase::DealerTurn);
        }

        Ok(())
    }

    /// Plays the dealer's hand: draws at 16 or below and on any soft total,
    /// pausing between draws.
    ///
    /// An empty deck ends the dealer's turn with the cards it holds.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn play_dealer<T: Table>(
        &mut self,
        deck: &mut Deck,
        table: &mut T,
    ) -> Result<(), RoundError> {
        self.ensure_phase(RoundPhase::DealerTurn)?;
        table.notify(TableEvent::DealerTurn);

        while !self.dealer.player().finished() {
            table.notify(TableEvent::Pause);
            self.show_hands(table);

            let dealer = self.dealer.player_mut();
            match turn::dealer_step(dealer, deck) {
                TurnEvent::Drew { card, value } => {
                    log::debug!("dealer draws {card}, total {value}");
                    table.notify(TableEvent::DealerDrew { card, value });
                    if dealer.status() == TurnStatus::Standing {
                        table.notify(TableEvent::DealerStood { value });
                    }
                }
                TurnEvent::Busted { card, value } => {
                    log::debug!("dealer draws {card} and busts with {value}");
                    table.notify(TableEvent::DealerDrew { card, value });
                    table.notify(TableEvent::DealerBusted { value });
                }
                TurnEvent::Stood { value } => {
                    table.notify(TableEvent::DealerStood { value });
                }
                TurnEvent::OutOfCards => {
                    log::warn!("no cards left for the dealer");
                    table.notify(TableEvent::DealerOutOfCards);
                }
            }
        }

        self.set_phase(RoundPhase::Settlement);
        Ok(())
    }

    /// Determines the outcome and records it on `board`.
    ///
    /// Settlement happens once: a second call fails and leaves `board`
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not ready to settle or has already
    /// been settled.
    pub fn settle(&mut self, board: &mut Scoreboard) -> Result<&RoundResult, RoundError> {
        self.ensure_phase(RoundPhase::Settlement)?;

        let result = result::determine(&self.players, &self.dealer);
        board.record(result.outcome);
        log::info!(
            "round settled: {:?} (dealer {}{})",
            result.outcome,
            result.dealer_value,
            if result.dealer_bust { ", bust" } else { "" }
        );

        self.set_phase(RoundPhase::Done);
        Ok(self.result.insert(result))
    }
}
