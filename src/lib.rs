//! A multi-round blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] phase machine (deal, players' turns, dealer
//! setup, dealer's turn, settlement), the hand scorer, winner determination
//! and a [`Scoreboard`] that tallies wins across rounds. [`Game`] runs rounds
//! from one shared [`Deck`] until it is too short to deal again.
//!
//! Choices and display go through the [`Table`] trait, so a round can be
//! played headlessly with [`Scripted`].
//!
//! # Example
//!
//! ```
//! use bjround::{Choice, Game, GameOptions, Scripted};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut board = game.scoreboard();
//! let mut table = Scripted::new(&[Choice::Stand]);
//! let result = game.play_round(&mut table, &mut board).unwrap();
//! assert_eq!(board.rounds(), 1);
//! let _ = result.outcome;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod table;
pub mod tally;
pub mod turn;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{GameError, RoundError, ScriptError};
pub use game::{CARDS_PER_HAND, Game, Round, RoundPhase};
pub use hand::{BUST_THRESHOLD, Hand};
pub use options::GameOptions;
pub use player::{Dealer, Player, TurnStatus};
pub use result::{RoundOutcome, RoundResult};
pub use table::{Scripted, Table, TableEvent};
pub use tally::Scoreboard;
pub use turn::{Choice, DEALER_STAND_THRESHOLD, TurnEvent};
