use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use hangman::game::{GameError, GameStatus, HangmanGame, Letter};

/// A console hangman game.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Letters of the secret word, one per argument, case-insensitive
    #[arg(required = true)]
    letters: Vec<char>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let letters: Vec<Letter> = args
        .letters
        .iter()
        .map(|c| Letter::new(c.to_ascii_lowercase()))
        .collect();
    let mut game = HangmanGame::new(letters);

    println!("Welcome to hangman!");
    println!("Try to guess the word. Good luck.");
    println!("{game}");

    loop {
        println!("Select an option:");
        println!("1 - Guess a letter");
        println!("2 - Show the game status");
        println!("3 - Quit");

        match read_line()?.trim() {
            "1" => {
                if guess_letter(&mut game)? {
                    break;
                }
            }
            "2" => show_status(&game),
            "3" => break,
            _ => println!("{}", "Invalid option!".red()),
        }
    }
    Ok(())
}

/// Read one guess and submit it. Returns `true` once the game is over.
fn guess_letter(game: &mut HangmanGame) -> Result<bool> {
    print!("Enter a letter: ");
    io::stdout().flush()?;

    let line = read_line()?;
    let Some(character) = line.trim().chars().next() else {
        println!("{}", "Please enter a letter.".red());
        return Ok(false);
    };

    match game.guess(character.to_ascii_lowercase()) {
        Ok(()) => {
            println!("{game}");
            match game.status().outcome_message() {
                Some(message) if game.status() == GameStatus::Win => {
                    println!("{}", message.green());
                    Ok(true)
                }
                Some(message) => {
                    println!("{}", message.red());
                    Ok(true)
                }
                None => Ok(false),
            }
        }
        Err(error @ GameError::LetterAlreadyGuessed(_)) => {
            println!("{}", error.to_string().yellow());
            println!("{game}");
            Ok(false)
        }
        Err(GameError::GameFinished(message)) => {
            println!("{message}");
            Ok(true)
        }
    }
}

fn show_status(game: &HangmanGame) {
    println!("{}", game.status());
    println!("{game}");
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading from stdin")?;
    Ok(line)
}
