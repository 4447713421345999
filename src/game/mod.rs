use std::collections::VecDeque;
use std::fmt;

use log::debug;
use thiserror::Error;

pub mod letter;
pub mod scene;

pub use letter::Letter;
pub use scene::{GallowsPart, Scene};

/// Wrong guesses allowed before the gallows is complete and the game is lost.
pub const MAX_FAILED_GUESSES: usize = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Pending,
    Win,
    Lose,
}

impl GameStatus {
    /// The message reported for a finished game, `None` while still pending.
    pub fn outcome_message(self) -> Option<&'static str> {
        match self {
            GameStatus::Pending => None,
            GameStatus::Win => Some("Congratulations, you won!"),
            GameStatus::Lose => Some("You lost! Try again."),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Pending => "PENDING",
            GameStatus::Win => "WIN",
            GameStatus::Lose => "LOSE",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Guessing after the game reached WIN or LOSE. Carries the outcome
    /// message; the session should stop.
    #[error("{0}")]
    GameFinished(String),
    /// Guessing a letter that was already tried, hit or miss. Recoverable,
    /// the game state is unchanged.
    #[error("the letter '{0}' was already guessed")]
    LetterAlreadyGuessed(char),
}

/// The hangman game state: the puzzle letters, the gallows drawing sequence,
/// the failed guesses, and the win/lose/pending status.
///
/// # Example
///
/// ```
/// use hangman::game::{GameStatus, HangmanGame};
///
/// let mut game = HangmanGame::from_word("cat");
/// game.guess('z').unwrap();
/// game.guess('c').unwrap();
/// game.guess('a').unwrap();
/// assert_eq!(game.status(), GameStatus::Pending);
/// game.guess('t').unwrap();
/// assert_eq!(game.status(), GameStatus::Win);
/// ```
#[derive(Debug)]
pub struct HangmanGame {
    letters: Vec<Letter>,
    gallows_path: VecDeque<GallowsPart>,
    failed_guesses: Vec<char>,
    scene: Scene,
    status: GameStatus,
}

impl HangmanGame {
    /// Start a game for the given puzzle letters, in word order.
    ///
    /// The letters are expected to be lower-cased by the caller; matching in
    /// [`guess`](Self::guess) is exact.
    ///
    /// # Panics
    ///
    /// Panics if `letters` is empty.
    pub fn new(mut letters: Vec<Letter>) -> Self {
        assert!(!letters.is_empty(), "the puzzle word needs at least one letter");
        for (slot, letter) in letters.iter_mut().enumerate() {
            letter.set_position(slot);
        }
        HangmanGame {
            scene: Scene::new(letters.len()),
            letters,
            gallows_path: GallowsPart::DRAW_ORDER.into_iter().collect(),
            failed_guesses: Vec::new(),
            status: GameStatus::Pending,
        }
    }

    /// Start a game from a word, lower-casing each letter.
    pub fn from_word(word: &str) -> Self {
        Self::new(
            word.chars()
                .map(|c| Letter::new(c.to_ascii_lowercase()))
                .collect(),
        )
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The wrong guesses so far, in the order they were made.
    pub fn failed_guesses(&self) -> &[char] {
        &self.failed_guesses
    }

    /// Submit a guessed letter.
    ///
    /// A miss appends to the failed guesses and draws the next gallows part;
    /// the sixth miss loses the game. A hit reveals every occurrence of the
    /// letter; revealing the last hidden letter wins the game. Both terminal
    /// states are absorbing: any further guess fails with
    /// [`GameError::GameFinished`], and repeating an earlier guess fails with
    /// [`GameError::LetterAlreadyGuessed`] without touching the state.
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::game::{GameError, HangmanGame};
    ///
    /// let mut game = HangmanGame::from_word("ox");
    /// game.guess('z').unwrap();
    /// assert_eq!(game.guess('z'), Err(GameError::LetterAlreadyGuessed('z')));
    /// assert_eq!(game.failed_guesses(), &['z']);
    /// ```
    pub fn guess(&mut self, character: char) -> Result<(), GameError> {
        if let Some(message) = self.status.outcome_message() {
            return Err(GameError::GameFinished(message.to_string()));
        }
        if self.failed_guesses.contains(&character) {
            return Err(GameError::LetterAlreadyGuessed(character));
        }

        let matches: Vec<usize> = self
            .letters
            .iter()
            .enumerate()
            .filter(|(_, letter)| letter.character() == character)
            .map(|(i, _)| i)
            .collect();

        if matches.is_empty() {
            self.failed_guesses.push(character);
            debug!(
                "miss '{}' ({} of {})",
                character,
                self.failed_guesses.len(),
                MAX_FAILED_GUESSES
            );
            if self.failed_guesses.len() >= MAX_FAILED_GUESSES {
                self.status = GameStatus::Lose;
            }
            if let Some(part) = self.gallows_path.pop_front() {
                self.scene.draw_part(part);
            }
            return Ok(());
        }

        if self.letters[matches[0]].is_revealed() {
            return Err(GameError::LetterAlreadyGuessed(character));
        }

        debug!("hit '{}' at {} position(s)", character, matches.len());
        for &i in &matches {
            self.letters[i].reveal();
            self.scene.reveal_letter(self.letters[i].position(), character);
        }
        if self.letters.iter().all(Letter::is_revealed) {
            self.status = GameStatus::Win;
        }
        Ok(())
    }
}

/// The full render: the scene followed by the failed-attempts summary once at
/// least one wrong guess has been made.
impl fmt::Display for HangmanGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scene)?;
        if !self.failed_guesses.is_empty() {
            let attempts: Vec<String> =
                self.failed_guesses.iter().map(char::to_string).collect();
            write!(f, "Failed attempts: {}", attempts.join(", "))?;
        }
        Ok(())
    }
}
