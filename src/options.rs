//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_jokers(2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players at the table, not counting the dealer.
    pub players: usize,
    /// Number of jokers shuffled into the deck. Jokers are never dealt.
    pub jokers: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 1,
            jokers: 0,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// A game needs at least one player: with zero, [`Game::run`] plays no
    /// rounds and [`Round::deal`] fails with [`RoundError::NoPlayers`].
    ///
    /// [`Game::run`]: crate::Game::run
    /// [`Round::deal`]: crate::Round::deal
    /// [`RoundError::NoPlayers`]: crate::RoundError::NoPlayers
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of jokers in the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }
}
