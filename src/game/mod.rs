//! Round orchestration and the multi-round game loop.

use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::{GameError, RoundError};
use crate::options::GameOptions;
use crate::player::{Dealer, Player};
use crate::result::RoundResult;
use crate::table::{Table, TableEvent};
use crate::tally::Scoreboard;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::RoundPhase;

/// Cards each participant is dealt at the start of a round.
pub const CARDS_PER_HAND: usize = 2;

/// One round of blackjack, from the deal to settlement.
///
/// The round is a phase machine; each phase method checks the current
/// [`RoundPhase`] and returns [`RoundError::InvalidPhase`] when called out of
/// order. [`Round::play`] drives every phase in sequence.
#[derive(Debug, Clone)]
pub struct Round {
    players: Vec<Player>,
    dealer: Dealer,
    phase: RoundPhase,
    result: Option<RoundResult>,
}

impl Round {
    /// Creates a round for `players` players, ready to deal.
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            players: (0..players).map(Player::new).collect(),
            dealer: Dealer::new(),
            phase: RoundPhase::Dealing,
            result: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the players, by position.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `position`.
    #[must_use]
    pub fn player(&self, position: usize) -> Option<&Player> {
        self.players.get(position)
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the settled result, once the round is done.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    fn ensure_phase(&self, phase: RoundPhase) -> Result<(), RoundError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(RoundError::InvalidPhase)
        }
    }

    fn set_phase(&mut self, phase: RoundPhase) {
        log::debug!("round phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn all_players_finished(&self) -> bool {
        self.players.iter().all(Player::finished)
    }

    fn all_players_bust(&self) -> bool {
        self.players.iter().all(Player::is_bust)
    }

    fn show_hands<T: Table>(&self, table: &mut T) {
        table.notify(TableEvent::Hands {
            dealer: &self.dealer,
            players: &self.players,
        });
    }

    /// Plays the round through every remaining phase and records the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Prompt`] if the table fails to produce a choice,
    /// or [`GameError::Round`] if the round was already past the players'
    /// turn when called.
    pub fn play<T: Table>(
        &mut self,
        deck: &mut Deck,
        table: &mut T,
        board: &mut Scoreboard,
    ) -> Result<RoundResult, GameError<T::Error>> {
        if self.phase == RoundPhase::Dealing {
            self.deal(deck)?;
        }

        self.play_players(deck, table)?;
        table.notify(TableEvent::Pause);

        self.setup_dealer(table)?;
        if self.phase == RoundPhase::DealerTurn {
            self.play_dealer(deck, table)?;
        }

        table.notify(TableEvent::Pause);
        self.show_hands(table);

        let result = self.settle(board)?.clone();
        table.notify(TableEvent::Settled(&result));
        Ok(result)
    }
}

/// A blackjack session: one deck shared by consecutive rounds.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left in the deck.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Rounds started so far.
    rounds: u32,
}

impl Game {
    /// Creates a new game with a deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_players(2), 42);
    /// assert!(game.can_deal());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let deck = Deck::shuffled(options.jokers, seed);
        Self::with_deck(options, deck)
    }

    /// Creates a new game over a prepared deck.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            rounds: 0,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of rounds started.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds
    }

    /// Creates an empty scoreboard sized for this table.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::new(self.options.players)
    }

    /// Returns whether the deck can still deal a fresh round to everyone.
    ///
    /// A table without players never deals.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        self.options.players > 0
            && self.deck.playable() > CARDS_PER_HAND * (self.options.players + 1)
    }

    /// Deals and plays one round, recording its outcome on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Prompt`] if the table fails to produce a choice.
    pub fn play_round<T: Table>(
        &mut self,
        table: &mut T,
        board: &mut Scoreboard,
    ) -> Result<RoundResult, GameError<T::Error>> {
        self.rounds += 1;
        log::debug!(
            "round {} starts with {} cards left",
            self.rounds,
            self.deck.len()
        );
        table.notify(TableEvent::RoundStarted(self.rounds));

        let mut round = Round::new(self.options.players);
        round.play(&mut self.deck, table, board)
    }

    /// Plays rounds until the deck is too short to deal another one.
    ///
    /// Returns the number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Prompt`] if the table fails to produce a choice;
    /// the round in progress is abandoned.
    pub fn run<T: Table>(
        &mut self,
        table: &mut T,
        board: &mut Scoreboard,
    ) -> Result<u32, GameError<T::Error>> {
        let mut played = 0;
        while self.can_deal() {
            table.notify(TableEvent::Pause);
            self.play_round(table, board)?;
            table.notify(TableEvent::Scores(board));
            played += 1;
        }
        log::info!(
            "game over after {played} rounds, {} cards left",
            self.deck.len()
        );
        Ok(played)
    }
}
