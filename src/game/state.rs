//! Round phase types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Dealing initial cards.
    Dealing,
    /// Waiting for player choices.
    PlayersTurn,
    /// Revealing the dealer's hole card.
    DealerSetup,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are final and the outcome can be recorded.
    Settlement,
    /// The outcome has been recorded.
    Done,
}
