//! CLI Set example.
//!
//! Plays a round of Set against the automatic opponent. Enter three table
//! positions to claim a set; enter `t` to simulate the turn timer running
//! out (the opponent's move).

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use setrs::{Card, ClaimOutcome, Game, GameOptions, GameState, TimerOutcome, Winner};

fn main() {
    println!("Set CLI example (positions like '1 5 9' to claim, 't' for timer expiry, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    loop {
        print_table(&game);
        println!(
            "Score - you: {}  opponent: {}",
            game.player_score(),
            game.opponent_score()
        );

        let line = prompt_line("Your move: ");
        match line.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "t" => match game.on_timer_expired() {
                Ok(TimerOutcome::SetClaimed(cards)) => {
                    println!("Opponent claimed: {}", describe_triple(&cards));
                }
                Ok(TimerOutcome::Rotated) => {
                    println!("No set on the table. Rotated the first three cards.");
                }
                Err(err) => println!("Timer error: {err}"),
            },
            _ => {
                let positions: Vec<usize> =
                    line.split_whitespace().filter_map(|s| s.parse().ok()).collect();
                match game.claim(&positions) {
                    Ok(ClaimOutcome::Claimed(cards)) => {
                        println!("Set! You claimed: {}", describe_triple(&cards));
                    }
                    Ok(ClaimOutcome::Rejected) => {
                        println!("That is not a set.");
                    }
                    Err(err) => println!("Claim error: {err}"),
                }
            }
        }

        if game.state() == GameState::Finished {
            match game.winner() {
                Some(Winner::Player) => println!("You win!"),
                Some(Winner::Opponent) => println!("The opponent wins!"),
                None => {}
            }
            break;
        }
    }
}

fn print_table(game: &Game) {
    println!();
    for (i, card) in game.table.cards.iter().enumerate() {
        println!("{:>2}: {}", i + 1, describe(card));
    }
}

fn describe(card: &Card) -> String {
    format!(
        "{:?} {:?} {:?} x{}",
        card.color, card.shading, card.shape, card.number
    )
}

fn describe_triple(cards: &[Card; 3]) -> String {
    cards
        .iter()
        .map(describe)
        .collect::<Vec<_>>()
        .join(", ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return "q".to_owned();
    }
    line.trim().to_lowercase()
}
