//! Game integration tests.

use bjround::{
    Card, Choice, DECK_SIZE, Dealer, Deck, Game, GameError, GameOptions, Hand, Player, Rank, Round,
    RoundError, RoundOutcome, RoundPhase, Scoreboard, ScriptError, Scripted, Suit, Table,
    TableEvent, TurnEvent, TurnStatus, result,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn draws(ranks: &[Rank]) -> Vec<Card> {
    let suits = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];
    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| card(suits[i % suits.len()], rank))
        .collect()
}

fn deck_from_draws(ranks: &[Rank]) -> Deck {
    Deck::from_draws(&draws(ranks))
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for card in draws(ranks) {
        hand.add_card(card);
    }
    hand
}

/// Plays a single round for `players` players over the scripted deck.
fn play_round(
    players: usize,
    ranks: &[Rank],
    choices: &[Choice],
) -> (Round, Scoreboard, Scripted) {
    let mut deck = deck_from_draws(ranks);
    let mut table = Scripted::new(choices);
    let mut board = Scoreboard::new(players);
    let mut round = Round::new(players);
    round.play(&mut deck, &mut table, &mut board).unwrap();
    (round, board, table)
}

/// Records event kinds while answering from a script.
#[derive(Default)]
struct Recorder {
    script: Scripted,
    events: Vec<&'static str>,
}

impl Table for Recorder {
    type Error = ScriptError;

    fn request_choice(&mut self, position: usize, player: &Player) -> Result<Choice, ScriptError> {
        self.script.request_choice(position, player)
    }

    fn notify(&mut self, event: TableEvent<'_>) {
        let kind = match event {
            TableEvent::RoundStarted(_) => "round",
            TableEvent::PlayersTurn => "players",
            TableEvent::DealerTurn => "dealer",
            TableEvent::Hands { .. } => "hands",
            TableEvent::PlayerDrew { .. } => "player-drew",
            TableEvent::PlayerBusted { .. } => "player-busted",
            TableEvent::PlayerStood { .. } => "player-stood",
            TableEvent::PlayerOutOfCards { .. } => "player-out",
            TableEvent::HoleRevealed { .. } => "hole",
            TableEvent::DealerDrew { .. } => "dealer-drew",
            TableEvent::DealerBusted { .. } => "dealer-busted",
            TableEvent::DealerStood { .. } => "dealer-stood",
            TableEvent::DealerOutOfCards => "dealer-out",
            TableEvent::Settled(_) => "settled",
            TableEvent::Scores(_) => "scores",
            TableEvent::Pause => return,
        };
        self.events.push(kind);
    }
}

#[test]
fn deal_gives_dealer_first_two_cards_then_players() {
    let mut deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Nine),    // dealer hole
        card(Suit::Clubs, Rank::Five),     // dealer up
        card(Suit::Spades, Rank::Two),     // player 1
        card(Suit::Diamonds, Rank::Three), // player 1
        card(Suit::Hearts, Rank::King),    // player 2
        card(Suit::Clubs, Rank::Queen),    // player 2
    ]);
    let mut round = Round::new(2);

    round.deal(&mut deck).unwrap();
    assert_eq!(round.phase(), RoundPhase::PlayersTurn);
    assert!(deck.is_empty());

    let dealer = round.dealer();
    assert_eq!(dealer.hand().cards()[0], card(Suit::Hearts, Rank::Nine));
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 5);

    assert_eq!(round.player(0).unwrap().value(), 5);
    assert_eq!(round.player(1).unwrap().value(), 20);
    assert_eq!(round.deal(&mut deck).unwrap_err(), RoundError::InvalidPhase);
}

#[test]
fn player_wins_when_dealer_busts() {
    let (round, board, _) = play_round(
        1,
        &[Rank::Ten, Rank::Six, Rank::King, Rank::Queen, Rank::Six],
        &[Choice::Stand],
    );

    let result = round.result().unwrap();
    assert_eq!(result.outcome, RoundOutcome::PlayerWins(0));
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 22);
    assert_eq!(board.player_wins(0), Some(1));
    assert_eq!(board.dealer_wins(), 0);
}

#[test]
fn dealer_wins_when_player_busts() {
    let (round, board, _) = play_round(
        1,
        &[Rank::Ten, Rank::Eight, Rank::Ten, Rank::Three, Rank::Ten],
        &[Choice::Hit],
    );

    assert_eq!(round.player(0).unwrap().status(), TurnStatus::Busted);
    // Every player busted, so the dealer never draws.
    assert_eq!(round.dealer().hand().len(), 2);
    assert_eq!(round.result().unwrap().outcome, RoundOutcome::DealerWins);
    assert_eq!(board.dealer_wins(), 1);
}

#[test]
fn equal_totals_are_a_push() {
    let (round, board, _) = play_round(
        1,
        &[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Nine],
        &[Choice::Stand],
    );

    let result = round.result().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Draw);
    assert!(result.push);
    assert_eq!(result.best_player, Some(0));
    assert_eq!(board.draws(), 1);
    assert_eq!(board.player_wins(0), Some(0));
    assert_eq!(board.dealer_wins(), 0);
}

#[test]
fn dealer_wins_with_higher_total() {
    let (round, board, _) = play_round(
        1,
        &[Rank::Ten, Rank::Six, Rank::King, Rank::Queen, Rank::Five],
        &[Choice::Stand],
    );

    let result = round.result().unwrap();
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.player_values, vec![20]);
    assert_eq!(result.outcome, RoundOutcome::DealerWins);
    assert_eq!(board.dealer_wins(), 1);
}

#[test]
fn winner_scenarios_on_final_hands() {
    let cases: [(&[Rank], &[Rank], RoundOutcome); 5] = [
        (
            &[Rank::King, Rank::Queen],
            &[Rank::Ten, Rank::Six, Rank::Six],
            RoundOutcome::PlayerWins(0),
        ),
        (
            &[Rank::Ten, Rank::Three, Rank::Ten],
            &[Rank::Ten, Rank::Eight],
            RoundOutcome::DealerWins,
        ),
        (
            &[Rank::Ten, Rank::Nine],
            &[Rank::Nine, Rank::Ten],
            RoundOutcome::Draw,
        ),
        (
            &[Rank::Ten, Rank::Three, Rank::Ten],
            &[Rank::Ten, Rank::Six, Rank::Seven],
            RoundOutcome::Draw,
        ),
        (
            &[Rank::King, Rank::Queen],
            &[Rank::Ten, Rank::Six, Rank::Five],
            RoundOutcome::DealerWins,
        ),
    ];

    for (player, dealer, expected) in cases {
        let players = [Player::with_hand(0, hand_of(player))];
        let dealer = Dealer::with_hand(hand_of(dealer));
        assert_eq!(
            result::determine_outcome(&players, &dealer),
            expected,
            "player {player:?} vs dealer {dealer:?}"
        );
    }
}

#[test]
fn all_busted_against_busted_dealer_is_not_a_push() {
    let players = [
        Player::with_hand(0, hand_of(&[Rank::Ten, Rank::Nine, Rank::Five])),
        Player::with_hand(1, hand_of(&[Rank::King, Rank::Queen, Rank::Two])),
    ];
    let dealer = Dealer::with_hand(hand_of(&[Rank::Ten, Rank::Six, Rank::Nine]));

    let result = result::determine(&players, &dealer);
    assert_eq!(result.outcome, RoundOutcome::Draw);
    assert!(!result.push);
    assert_eq!(result.best_player, None);
}

#[test]
fn tied_players_favour_the_earlier_seat() {
    let (round, board, table) = play_round(
        2,
        &[
            Rank::Ten,
            Rank::Eight,
            Rank::Ten,
            Rank::Nine,
            Rank::King,
            Rank::Nine,
        ],
        &[Choice::Stand, Choice::Stand],
    );

    assert_eq!(table.asked(), &[0, 1]);
    assert_eq!(round.result().unwrap().outcome, RoundOutcome::PlayerWins(0));
    assert_eq!(board.players(), &[1, 0]);
}

#[test]
fn later_player_with_higher_total_wins() {
    let players = [
        Player::with_hand(0, hand_of(&[Rank::Ten, Rank::Seven])),
        Player::with_hand(1, hand_of(&[Rank::Ten, Rank::Three, Rank::Ten])),
        Player::with_hand(2, hand_of(&[Rank::Ten, Rank::Ace])),
    ];
    let dealer = Dealer::with_hand(hand_of(&[Rank::Ten, Rank::Nine]));

    let result = result::determine(&players, &dealer);
    assert_eq!(result.best_player, Some(2));
    assert_eq!(result.outcome, RoundOutcome::PlayerWins(2));
}

#[test]
fn players_act_one_choice_per_pass_in_seat_order() {
    let (round, _, table) = play_round(
        2,
        &[
            Rank::Ten,
            Rank::Eight,
            Rank::Two,
            Rank::Three,
            Rank::Ten,
            Rank::Nine,
            Rank::Four,
        ],
        &[Choice::Hit, Choice::Stand, Choice::Stand],
    );

    assert_eq!(table.asked(), &[0, 1, 0]);
    assert_eq!(table.remaining(), 0);
    assert_eq!(round.player(0).unwrap().value(), 9);
    assert_eq!(round.result().unwrap().outcome, RoundOutcome::PlayerWins(1));
}

#[test]
fn player_stands_at_18_and_dealer_draws_to_20() {
    let mut deck = deck_from_draws(&[Rank::Ten, Rank::Four, Rank::Ten, Rank::Eight, Rank::Six]);
    let mut table = Recorder {
        script: Scripted::new(&[Choice::Stand]),
        ..Recorder::default()
    };
    let mut board = Scoreboard::new(1);
    let mut round = Round::new(1);

    let result = round.play(&mut deck, &mut table, &mut board).unwrap();

    assert_eq!(result.outcome, RoundOutcome::DealerWins);
    assert_eq!(result.dealer_value, 20);
    assert_eq!(board.dealer_wins(), 1);
    assert_eq!(board.player_wins(0), Some(0));
    assert_eq!(board.draws(), 0);
    assert_eq!(round.phase(), RoundPhase::Done);
    assert!(round.dealer().is_hole_revealed());
    assert_eq!(
        table.events,
        vec![
            "players",
            "hands",
            "player-stood",
            "hole",
            "dealer",
            "hands",
            "dealer-drew",
            "dealer-stood",
            "hands",
            "settled",
        ]
    );
}

#[test]
fn bust_is_reported_differently_from_standing() {
    let mut deck = deck_from_draws(&[Rank::Ten, Rank::Eight, Rank::Ten, Rank::Six, Rank::King]);
    let mut table = Recorder {
        script: Scripted::new(&[Choice::Hit]),
        ..Recorder::default()
    };
    let mut board = Scoreboard::new(1);
    let mut round = Round::new(1);

    round.play(&mut deck, &mut table, &mut board).unwrap();

    assert!(table.events.contains(&"player-busted"));
    assert!(!table.events.contains(&"player-stood"));
    assert!(!table.events.contains(&"dealer"));
}

#[test]
fn dealer_hits_soft_17_and_stands_on_hard_17() {
    let (round, _, _) = play_round(
        1,
        &[Rank::Ace, Rank::Six, Rank::Ten, Rank::Nine, Rank::Ten],
        &[Choice::Stand],
    );

    let dealer = round.dealer();
    assert_eq!(dealer.hand().len(), 3);
    assert_eq!(dealer.player().value(), 17);
    assert!(!dealer.hand().is_soft());
    assert_eq!(dealer.player().status(), TurnStatus::Standing);
    assert_eq!(round.result().unwrap().outcome, RoundOutcome::PlayerWins(0));
}

#[test]
fn dealer_stands_on_dealt_hard_17() {
    let (round, _, _) = play_round(
        1,
        &[Rank::Ten, Rank::Seven, Rank::Ten, Rank::Eight, Rank::Two],
        &[Choice::Stand],
    );

    assert_eq!(round.dealer().hand().len(), 2);
    assert_eq!(round.result().unwrap().outcome, RoundOutcome::PlayerWins(0));
}

#[test]
fn dealer_stands_on_dealt_blackjack() {
    let mut deck = deck_from_draws(&[
        Rank::Ace,
        Rank::King,
        Rank::King,
        Rank::Queen,
        Rank::Five,
        Rank::Ten,
    ]);
    let mut table = Recorder {
        script: Scripted::new(&[Choice::Stand]),
        ..Recorder::default()
    };
    let mut board = Scoreboard::new(1);
    let mut round = Round::new(1);

    let result = round.play(&mut deck, &mut table, &mut board).unwrap();

    assert_eq!(round.dealer().hand().len(), 2);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.outcome, RoundOutcome::DealerWins);
    assert_eq!(deck.len(), 2);
    assert!(table.events.contains(&"dealer-stood"));
    assert!(!table.events.contains(&"dealer"));
}

#[test]
fn dealer_stands_on_dealt_soft_19_but_draws_on_soft_17() {
    let (round, _, _) = play_round(
        1,
        &[Rank::Ace, Rank::Eight, Rank::King, Rank::Queen, Rank::Five],
        &[Choice::Stand],
    );

    assert_eq!(round.dealer().hand().len(), 2);
    assert_eq!(round.result().unwrap().dealer_value, 19);
    assert_eq!(round.result().unwrap().outcome, RoundOutcome::PlayerWins(0));

    let (round, _, _) = play_round(
        1,
        &[Rank::Six, Rank::Ace, Rank::King, Rank::Queen, Rank::Two, Rank::Ten],
        &[Choice::Stand],
    );

    // Soft 17 draws to soft 19, which keeps drawing to hard 19.
    assert_eq!(round.dealer().hand().len(), 4);
    assert_eq!(round.result().unwrap().dealer_value, 19);
    assert!(!round.dealer().hand().is_soft());
}

#[test]
fn dealer_skips_turn_when_every_player_busts() {
    let mut deck = deck_from_draws(&[
        Rank::Ten,
        Rank::Two,
        Rank::Ten,
        Rank::Six,
        Rank::King,
        Rank::Five,
    ]);
    let mut table = Recorder {
        script: Scripted::new(&[Choice::Hit]),
        ..Recorder::default()
    };
    let mut board = Scoreboard::new(1);
    let mut round = Round::new(1);

    let result = round.play(&mut deck, &mut table, &mut board).unwrap();

    assert!(round.player(0).unwrap().is_bust());
    assert_eq!(round.dealer().hand().len(), 2);
    assert_eq!(result.dealer_value, 12);
    assert_eq!(result.outcome, RoundOutcome::DealerWins);
    assert_eq!(deck.len(), 1);
    assert!(!table.events.contains(&"dealer"));
    assert!(!table.events.contains(&"dealer-drew"));
}

#[test]
fn deck_exhausted_mid_deal_finishes_player_without_prompt() {
    let mut deck = deck_from_draws(&[Rank::Ten, Rank::Seven, Rank::Nine]);
    let mut table = Scripted::new(&[]);
    let mut board = Scoreboard::new(1);
    let mut round = Round::new(1);

    let result = round.play(&mut deck, &mut table, &mut board).unwrap();

    let player = round.player(0).unwrap();
    assert!(table.asked().is_empty());
    assert_eq!(player.status(), TurnStatus::OutOfCards);
    assert!(player.finished());
    assert!(!player.is_bust());
    assert_eq!(player.hand().len(), 1);
    assert_eq!(result.best_player, Some(0));
    assert_eq!(result.outcome, RoundOutcome::DealerWins);
}

#[test]
fn hit_on_empty_deck_ends_turn_without_bust() {
    let mut deck = deck_from_draws(&[Rank::Ten, Rank::Six, Rank::Five, Rank::Six]);
    let mut round = Round::new(1);
    round.deal(&mut deck).unwrap();

    let event = round.act(0, Choice::Hit, &mut deck).unwrap();
    assert_eq!(event, TurnEvent::OutOfCards);
    assert_eq!(round.player(0).unwrap().status(), TurnStatus::OutOfCards);
    assert_eq!(round.phase(), RoundPhase::DealerSetup);
}

#[test]
fn dealer_runs_out_of_cards() {
    let (round, board, table) = play_round(1, &[Rank::Ten, Rank::Two, Rank::Ten, Rank::Seven], &[]);

    assert!(table.asked().is_empty());
    assert_eq!(round.player(0).unwrap().status(), TurnStatus::OutOfCards);

    let dealer = round.dealer().player();
    assert_eq!(dealer.status(), TurnStatus::OutOfCards);
    assert_eq!(dealer.value(), 12);
    assert_eq!(round.result().unwrap().outcome, RoundOutcome::PlayerWins(0));
    assert_eq!(board.player_wins(0), Some(1));
}

#[test]
fn settlement_happens_once() {
    let (mut round, mut board, _) = play_round(
        1,
        &[Rank::Ten, Rank::Four, Rank::Ten, Rank::Eight, Rank::Six],
        &[Choice::Stand],
    );
    assert_eq!(board.rounds(), 1);

    assert_eq!(round.settle(&mut board).unwrap_err(), RoundError::InvalidPhase);
    assert_eq!(board.rounds(), 1);
    assert_eq!(board.dealer_wins(), 1);
}

#[test]
fn phases_reject_out_of_order_calls() {
    let mut deck = deck_from_draws(&[Rank::Ten, Rank::Seven, Rank::Nine, Rank::Eight]);
    let mut table = Scripted::new(&[]);
    let mut board = Scoreboard::new(1);
    let mut round = Round::new(1);

    assert_eq!(
        round.act(0, Choice::Hit, &mut deck).unwrap_err(),
        RoundError::InvalidPhase
    );
    assert_eq!(round.settle(&mut board).unwrap_err(), RoundError::InvalidPhase);

    round.deal(&mut deck).unwrap();
    assert_eq!(
        round.setup_dealer(&mut table).unwrap_err(),
        RoundError::InvalidPhase
    );
    assert_eq!(
        round.play_dealer(&mut deck, &mut table).unwrap_err(),
        RoundError::InvalidPhase
    );
    assert_eq!(
        round.act(3, Choice::Stand, &mut deck).unwrap_err(),
        RoundError::PlayerNotFound
    );

    round.act(0, Choice::Stand, &mut deck).unwrap();
    assert_eq!(round.phase(), RoundPhase::DealerSetup);
    assert_eq!(
        round.act(0, Choice::Hit, &mut deck).unwrap_err(),
        RoundError::InvalidPhase
    );
    assert_eq!(board.rounds(), 0);
}

#[test]
fn finished_player_cannot_act_again() {
    let mut deck = deck_from_draws(&[
        Rank::Ten,
        Rank::Seven,
        Rank::Nine,
        Rank::Eight,
        Rank::Two,
        Rank::Three,
    ]);
    let mut round = Round::new(2);
    round.deal(&mut deck).unwrap();

    round.act(0, Choice::Stand, &mut deck).unwrap();
    assert_eq!(round.phase(), RoundPhase::PlayersTurn);
    assert_eq!(
        round.act(0, Choice::Hit, &mut deck).unwrap_err(),
        RoundError::PlayerFinished
    );
}

#[test]
fn prompt_failure_aborts_the_round() {
    let mut deck = deck_from_draws(&[Rank::Ten, Rank::Seven, Rank::Nine, Rank::Eight, Rank::Two]);
    let mut table = Scripted::new(&[]);
    let mut board = Scoreboard::new(1);
    let mut round = Round::new(1);

    let err = round.play(&mut deck, &mut table, &mut board).unwrap_err();
    assert_eq!(err, GameError::Prompt(ScriptError::Exhausted(0)));
    assert_eq!(round.phase(), RoundPhase::PlayersTurn);
    assert_eq!(board.rounds(), 0);
}

#[test]
fn game_runs_until_deck_is_short() {
    let deck = deck_from_draws(&[
        Rank::Ten,
        Rank::Eight,
        Rank::Ten,
        Rank::Nine,
        Rank::Ten,
        Rank::Seven,
        Rank::Ten,
        Rank::Eight,
        Rank::Five,
    ]);
    let mut game = Game::with_deck(GameOptions::default(), deck);
    let mut board = game.scoreboard();
    let mut table = Scripted::new(&[Choice::Stand, Choice::Stand]);

    let played = game.run(&mut table, &mut board).unwrap();

    assert_eq!(played, 2);
    assert_eq!(game.rounds_played(), 2);
    assert_eq!(game.deck().len(), 1);
    assert!(!game.can_deal());
    assert_eq!(board.player_wins(0), Some(2));
    assert_eq!(board.rounds(), 2);
}

#[test]
fn game_needs_more_cards_than_one_deal() {
    let options = GameOptions::default().with_players(2);
    let exact = Game::with_deck(options.clone(), Deck::from_draws(&draws(&[Rank::Two; 6])));
    assert!(!exact.can_deal());

    let enough = Game::with_deck(options, Deck::from_draws(&draws(&[Rank::Two; 7])));
    assert!(enough.can_deal());
}

#[test]
fn seeded_game_plays_to_completion() {
    let mut game = Game::new(GameOptions::default().with_players(3).with_jokers(2), 7);
    let mut board = game.scoreboard();
    let mut table = Scripted::new(&[Choice::Stand; 64]);

    let played = game.run(&mut table, &mut board).unwrap();

    assert!(played > 0);
    assert_eq!(board.rounds(), played);
    assert_eq!(board.players().len(), 3);
    assert!(!game.can_deal());
}

#[test]
fn table_without_players_never_deals() {
    let mut game = Game::new(GameOptions::default().with_players(0), 3);
    let mut board = game.scoreboard();
    let mut table = Scripted::new(&[]);

    assert!(!game.can_deal());
    assert_eq!(game.run(&mut table, &mut board).unwrap(), 0);
    assert_eq!(board.rounds(), 0);
    assert_eq!(game.deck().len(), DECK_SIZE);

    let mut deck = deck_from_draws(&[Rank::Ten, Rank::Nine]);
    let mut round = Round::new(0);
    assert_eq!(round.deal(&mut deck).unwrap_err(), RoundError::NoPlayers);
    assert_eq!(round.phase(), RoundPhase::Dealing);
    assert_eq!(deck.len(), 2);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default().with_players(4).with_jokers(2);

    assert_eq!(options.players, 4);
    assert_eq!(options.jokers, 2);
    assert_eq!(GameOptions::default().players, 1);
    assert_eq!(GameOptions::default().jokers, 0);
}
