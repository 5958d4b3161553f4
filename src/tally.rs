//! Running win tally across rounds.

use alloc::vec::Vec;

use crate::result::RoundOutcome;

/// Wins per player and for the dealer, kept for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    players: Vec<u32>,
    dealer: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard for `players` players.
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            players: alloc::vec![0; players],
            dealer: 0,
            draws: 0,
        }
    }

    /// Records a round outcome.
    ///
    /// A win for a position outside the table is ignored.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWins(position) => {
                if let Some(wins) = self.players.get_mut(position) {
                    *wins += 1;
                } else {
                    log::warn!("win recorded for unknown seat {position}");
                }
            }
            RoundOutcome::DealerWins => self.dealer += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
    }

    /// Returns the wins of the player at `position`.
    #[must_use]
    pub fn player_wins(&self, position: usize) -> Option<u32> {
        self.players.get(position).copied()
    }

    /// Returns every player's wins, by position.
    #[must_use]
    pub fn players(&self) -> &[u32] {
        &self.players
    }

    /// Returns the dealer's wins.
    #[must_use]
    pub const fn dealer_wins(&self) -> u32 {
        self.dealer
    }

    /// Returns the number of rounds nobody won.
    #[must_use]
    pub const fn draws(&self) -> u32 {
        self.draws
    }

    /// Returns the number of rounds recorded.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.players.iter().sum::<u32>() + self.dealer + self.draws
    }
}
