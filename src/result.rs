//! Round results and winner determination.

use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::hand::Hand;
use crate::player::{Dealer, Player};

/// Who took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player at this 0-based position wins.
    PlayerWins(usize),
    /// The dealer wins.
    DealerWins,
    /// Nobody wins: a push, or everybody busted.
    Draw,
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome recorded on the scoreboard.
    pub outcome: RoundOutcome,
    /// The best non-busted player, if any.
    pub best_player: Option<usize>,
    /// Whether the outcome is a push between the best player and the dealer.
    pub push: bool,
    /// Each player's final hand value, by position.
    pub player_values: Vec<u8>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

/// Compares two hands: a busted hand loses to any live hand, two live hands
/// compare by total, and two busted hands are equal.
#[must_use]
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    match (a.is_bust(), b.is_bust()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.value().cmp(&b.value()),
    }
}

/// Returns the best non-busted player. A later player only replaces the
/// current best with a strictly higher total.
#[must_use]
pub fn best_player(players: &[Player]) -> Option<&Player> {
    players
        .iter()
        .filter(|player| !player.is_bust())
        .fold(None, |best: Option<&Player>, player| match best {
            Some(current) if compare(player.hand(), current.hand()) != Ordering::Greater => {
                Some(current)
            }
            _ => Some(player),
        })
}

/// Determines the round result from the final hands.
#[must_use]
pub fn determine(players: &[Player], dealer: &Dealer) -> RoundResult {
    let best = best_player(players);
    let dealer_bust = dealer.hand().is_bust();

    let (outcome, push) = match best {
        None if dealer_bust => (RoundOutcome::Draw, false),
        None => (RoundOutcome::DealerWins, false),
        Some(player) if dealer_bust => (RoundOutcome::PlayerWins(player.position()), false),
        Some(player) => match compare(player.hand(), dealer.hand()) {
            Ordering::Greater => (RoundOutcome::PlayerWins(player.position()), false),
            Ordering::Less => (RoundOutcome::DealerWins, false),
            Ordering::Equal => (RoundOutcome::Draw, true),
        },
    };

    RoundResult {
        outcome,
        best_player: best.map(Player::position),
        push,
        player_values: players.iter().map(Player::value).collect(),
        dealer_value: dealer.hand().value(),
        dealer_bust,
    }
}

/// Returns only the outcome of [`determine`].
#[must_use]
pub fn determine_outcome(players: &[Player], dealer: &Dealer) -> RoundOutcome {
    determine(players, dealer).outcome
}
