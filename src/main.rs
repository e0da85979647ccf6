#![cfg(feature = "demo")]

use ardri::game::Arbiter;
use ardri::play::Play;
use std::io::stdin;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn input(prompt: &str) -> std::io::Result<String> {
    println!("{prompt}");
    let mut s: String = String::new();
    stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Ask for a play until one parses. Returns `None` at end of input or on "quit".
fn get_play() -> Option<Play> {
    loop {
        match input("Please enter your move (eg, d7-b7):") {
            Ok(s) if s.is_empty() || s == "quit" => return None,
            Ok(s) => match Play::from_str(&s) {
                Ok(play) => return Some(play),
                Err(e) => println!("Invalid move ({e}). Try again.")
            },
            Err(e) => {
                println!("Error reading input ({e}).");
                return None
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    println!("ardri demo");
    let mut arbiter = Arbiter::new();
    loop {
        println!("Board:");
        println!("{}", arbiter.board());
        println!("{} to play ({} legal moves).", arbiter.turn(), arbiter.legal_plays().len());

        let Some(play) = get_play() else {
            return
        };
        match arbiter.play(play) {
            Ok(effects) => {
                for c in &effects.captures {
                    println!("Captured {:?} at {}.", c.kind, c.tile);
                }
                if let Some(outcome) = effects.game_outcome {
                    println!("Game over. {outcome}.");
                    println!("Final board:");
                    println!("{}", arbiter.board());
                    return
                }
            },
            Err(e) => println!("Illegal move ({e}). Try again.")
        }
    }
}
