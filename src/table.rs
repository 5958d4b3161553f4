//! The table: how the engine asks for choices and reports what happens.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ScriptError;
use crate::player::{Dealer, Player};
use crate::result::RoundResult;
use crate::tally::Scoreboard;
use crate::turn::Choice;

/// Something worth showing at the table.
#[derive(Debug, Clone, Copy)]
pub enum TableEvent<'a> {
    /// A new round starts (1-based round number).
    RoundStarted(u32),
    /// Players are about to act.
    PlayersTurn,
    /// The dealer is about to play.
    DealerTurn,
    /// The current hands. The dealer's hole card is hidden until revealed.
    Hands {
        /// The dealer.
        dealer: &'a Dealer,
        /// The players, by position.
        players: &'a [Player],
    },
    /// A player drew a card.
    PlayerDrew {
        /// The player's position.
        position: usize,
        /// The card drawn.
        card: Card,
        /// Hand total after the draw.
        value: u8,
    },
    /// A player went over 21 and loses the round.
    PlayerBusted {
        /// The player's position.
        position: usize,
        /// The card drawn.
        card: Card,
        /// Hand total after the draw.
        value: u8,
    },
    /// A player stood.
    PlayerStood {
        /// The player's position.
        position: usize,
        /// Final hand total.
        value: u8,
    },
    /// A player's turn ended because the deck is empty.
    PlayerOutOfCards {
        /// The player's position.
        position: usize,
    },
    /// The dealer turned the hole card over.
    HoleRevealed {
        /// The hole card.
        card: Card,
        /// Dealer total with the hole card.
        value: u8,
    },
    /// The dealer drew a card.
    DealerDrew {
        /// The card drawn.
        card: Card,
        /// Hand total after the draw.
        value: u8,
    },
    /// The dealer went over 21.
    DealerBusted {
        /// Final hand total.
        value: u8,
    },
    /// The dealer stopped drawing.
    DealerStood {
        /// Final hand total.
        value: u8,
    },
    /// The dealer's turn ended because the deck is empty.
    DealerOutOfCards,
    /// The round is settled.
    Settled(&'a RoundResult),
    /// The running tally after a round.
    Scores(&'a Scoreboard),
    /// A pacing point between dealer draws and phases.
    Pause,
}

/// The synchronous capability the engine needs from the outside world.
pub trait Table {
    /// Error returned when a choice cannot be obtained.
    type Error;

    /// Asks the player at `position` to hit or stand.
    ///
    /// # Errors
    ///
    /// Any error is fatal for the game.
    fn request_choice(&mut self, position: usize, player: &Player) -> Result<Choice, Self::Error>;

    /// Reports an event. Does nothing by default.
    fn notify(&mut self, event: TableEvent<'_>) {
        let _ = event;
    }
}

/// A headless table that answers from a fixed list of choices.
///
/// Choices are consumed in the order they are requested, whichever player
/// asks.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    choices: VecDeque<Choice>,
    asked: Vec<usize>,
}

impl Scripted {
    /// Creates a table that answers with `choices` in order.
    #[must_use]
    pub fn new(choices: &[Choice]) -> Self {
        Self {
            choices: choices.iter().copied().collect(),
            asked: Vec::new(),
        }
    }

    /// Returns the positions that were prompted, in order.
    #[must_use]
    pub fn asked(&self) -> &[usize] {
        &self.asked
    }

    /// Returns the number of unused choices.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl Table for Scripted {
    type Error = ScriptError;

    fn request_choice(&mut self, position: usize, _player: &Player) -> Result<Choice, ScriptError> {
        self.asked.push(position);
        self.choices
            .pop_front()
            .ok_or(ScriptError::Exhausted(position))
    }
}
