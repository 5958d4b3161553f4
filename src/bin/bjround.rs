//! Terminal blackjack: N players against the dealer until the deck runs out.

use core::time::Duration;
use std::process::ExitCode;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{
    Card, Choice, Dealer, Game, GameOptions, Player, RoundOutcome, RoundResult, Scoreboard, Table,
    TableEvent,
};
use clap::Parser;
use colored::Colorize;
use dialoguer::Select;

#[derive(Debug, Parser)]
#[command(name = "bjround", version, about = "Play blackjack against the dealer")]
struct Args {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=7))]
    players: u8,
    /// Seed for the shuffle (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Jokers shuffled into the deck (never dealt)
    #[arg(long, default_value_t = 0)]
    jokers: u8,
    /// Pause between dealer draws and phases, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

const CHOICES: [&str; 2] = ["Hit", "Stand"];

struct Terminal {
    delay: Duration,
}

impl Terminal {
    fn print_hands(dealer: &Dealer, players: &[Player]) {
        if dealer.is_hole_revealed() {
            println!(
                "Dealer ({} points):\n{}",
                dealer.player().value(),
                format_cards(dealer.hand().cards(), false)
            );
        } else {
            println!("Dealer:\n{}", format_cards(dealer.hand().cards(), true));
        }

        for player in players {
            println!(
                "Player {} ({} points):\n{}",
                player.position() + 1,
                player.value(),
                format_cards(player.hand().cards(), false)
            );
        }
    }

    fn print_outcome(result: &RoundResult) {
        let banner = match result.outcome {
            RoundOutcome::PlayerWins(position) => format!(" PLAYER {} WINS! ", position + 1)
                .black()
                .on_bright_blue()
                .bold(),
            RoundOutcome::DealerWins => " DEALER WINS ".black().on_bright_yellow().bold(),
            RoundOutcome::Draw if result.push => " PUSH ".black().on_bright_white().bold(),
            RoundOutcome::Draw => " DRAW ".black().on_bright_white().bold(),
        };
        println!("{banner}");
    }

    fn print_scores(board: &Scoreboard) {
        println!("{}", "SCORE".bold());
        for (position, wins) in board.players().iter().enumerate() {
            println!("  Player {}: {wins}", position + 1);
        }
        println!("  Dealer:   {}", board.dealer_wins());
        println!("  Draws:    {}", board.draws());
    }
}

impl Table for Terminal {
    type Error = dialoguer::Error;

    fn request_choice(&mut self, position: usize, _player: &Player) -> Result<Choice, Self::Error> {
        let selection = Select::new()
            .with_prompt(format!("Player {}: What's your choice?", position + 1))
            .items(&CHOICES[..])
            .default(0)
            .report(false)
            .interact()?;
        Ok(if selection == 0 {
            Choice::Hit
        } else {
            Choice::Stand
        })
    }

    fn notify(&mut self, event: TableEvent<'_>) {
        match event {
            TableEvent::RoundStarted(round) => {
                println!("\n{}", format!("ROUND {round}").bright_blue().bold());
            }
            TableEvent::PlayersTurn => {
                println!("{}", " PLAYERS TURN ".black().on_bright_blue().bold());
            }
            TableEvent::DealerTurn => {
                println!("{}", " DEALER TURN ".black().on_bright_yellow().bold());
            }
            TableEvent::Hands { dealer, players } => Self::print_hands(dealer, players),
            TableEvent::PlayerDrew {
                position,
                card,
                value,
            } => {
                println!(
                    "Player {}, you picked {} which gives you {value} points",
                    position + 1,
                    format_card(&card)
                );
            }
            TableEvent::PlayerBusted {
                position,
                card,
                value,
            } => {
                println!(
                    "Player {}, you picked {} which gives you {value} points",
                    position + 1,
                    format_card(&card)
                );
                println!(
                    "{}",
                    format!(
                        "Player {}, you have exceeded max score! You lose!",
                        position + 1
                    )
                    .bright_red()
                );
            }
            TableEvent::PlayerStood { position, value } => {
                println!("Player {} stands on {value}", position + 1);
            }
            TableEvent::PlayerOutOfCards { position } => {
                println!("No cards left for player {}", position + 1);
            }
            TableEvent::HoleRevealed { card, value } => {
                println!(
                    "Dealer reveals {} ({value} points)",
                    format_card(&card)
                );
            }
            TableEvent::DealerDrew { card, value } => {
                println!(
                    "Dealer has picked {} which gives {value} points",
                    format_card(&card)
                );
            }
            TableEvent::DealerBusted { value } => {
                println!("{}", format!("Dealer busts with {value}!").bright_red());
            }
            TableEvent::DealerStood { value } => println!("Dealer stands on {value}"),
            TableEvent::DealerOutOfCards => println!("No cards left for the dealer"),
            TableEvent::Settled(result) => Self::print_outcome(result),
            TableEvent::Scores(board) => Self::print_scores(board),
            TableEvent::Pause => {
                if !self.delay.is_zero() {
                    thread::sleep(self.delay);
                }
            }
        }
    }
}

fn format_cards(cards: &[Card], hide_first: bool) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if hide_first && index == 0 {
                "??".dimmed().to_string()
            } else {
                format_card(card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let text = card.to_string();
    if card.suit.is_red() {
        text.bright_red().to_string()
    } else {
        text.white().to_string()
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("shuffling with seed {seed}");

    let options = GameOptions::default()
        .with_players(usize::from(args.players))
        .with_jokers(args.jokers);
    let mut game = Game::new(options, seed);
    let mut board = game.scoreboard();
    let mut table = Terminal {
        delay: Duration::from_millis(args.delay_ms),
    };

    match game.run(&mut table, &mut board) {
        Ok(rounds) => {
            println!("Not enough cards left for another round. {rounds} rounds played.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}
