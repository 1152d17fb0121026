use std::io::BufRead;
use std::path::Path;

use thiserror::Error;

use crate::feedback::{Verdict, score};
use crate::stats::{self, GameRecord, Outcome};
use crate::wordbank::WordBank;
use crate::{MAX_ATTEMPTS, WORD_LENGTH, cli, debug_log};

/// Why a guess was rejected. The `Display` strings are shown to the player
/// verbatim; rejected guesses never consume an attempt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("Your guess must be exactly 5 letters long.")]
    WrongLength,
    #[error("Your guess must only contain letters.")]
    NonAlphabetic,
    #[error("Word not in list. Please enter a valid word.")]
    NotInList,
}

pub fn validate_guess(guess: &str, bank: &WordBank) -> Result<(), GuessError> {
    if guess.len() != WORD_LENGTH {
        return Err(GuessError::WrongLength);
    }
    if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GuessError::NonAlphabetic);
    }
    if !bank.contains(guess) {
        return Err(GuessError::NotInList);
    }
    Ok(())
}

/// Letters confirmed absent from the secret. Grows monotonically within one
/// game; a letter that appears anywhere in the secret is never added, even
/// when a duplicate occurrence of it grades `Absent`.
#[derive(Debug, Default)]
pub struct EliminatedLetters {
    absent: [bool; 26],
}

impl EliminatedLetters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, guess: &str, verdicts: &[Verdict], secret: &str) {
        for (ch, verdict) in guess.chars().zip(verdicts) {
            if *verdict == Verdict::Absent && !secret.contains(ch) {
                self.absent[(ch as u8 - b'a') as usize] = true;
            }
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() && self.absent[(ch.to_ascii_lowercase() as u8 - b'a') as usize]
    }

    /// Uppercase letters not yet ruled out, separated by spaces.
    pub fn remaining(&self) -> String {
        ('A'..='Z')
            .filter(|c| !self.contains(*c))
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a concluded game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    pub attempts_used: u32,
}

/// Runs one game against `secret`, pulling guesses from `reader`.
///
/// Returns `None` when the input stream ends before the game concludes; an
/// interrupted game is not scored.
pub fn game_loop<R: BufRead>(bank: &WordBank, secret: &str, reader: &mut R) -> Option<GameOutcome> {
    println!("Welcome to Wordle! Guess the 5-letter word.");
    let mut attempts_left = MAX_ATTEMPTS;
    let mut eliminated = EliminatedLetters::new();

    while attempts_left > 0 {
        cli::prompt("Enter your guess:  ");
        let guess = cli::read_trimmed_line(reader)?.to_lowercase();

        if let Err(reason) = validate_guess(&guess, bank) {
            debug_log!("rejected guess {:?}: {}", guess, reason);
            println!("{reason}");
            continue;
        }

        attempts_left -= 1;
        let (verdicts, won) = score(&guess, secret);
        debug_log!("scored guess {:?}, {} attempts left", guess, attempts_left);

        if won {
            println!("Congratulations! You've guessed the word correctly.");
            return Some(GameOutcome {
                won: true,
                attempts_used: MAX_ATTEMPTS - attempts_left,
            });
        }

        eliminated.absorb(&guess, &verdicts, secret);
        println!("Feedback: {}", cli::render_feedback(&guess, &verdicts));
        println!("Remaining letters: {}", eliminated.remaining());
        println!("Attempts remaining:  {attempts_left}");
    }

    println!("Game over. The correct word was: {secret}");
    Some(GameOutcome {
        won: false,
        attempts_used: MAX_ATTEMPTS,
    })
}

/// Runs one game and appends exactly one record for it when it concludes.
///
/// Recording is best-effort: a write failure is logged and the outcome is
/// still returned. Nothing is recorded for an empty player name or for a game
/// cut short by end of input.
pub fn play_and_record<R: BufRead>(
    bank: &WordBank,
    secret: &str,
    player: &str,
    stats_path: &Path,
    reader: &mut R,
) -> Option<GameOutcome> {
    let outcome = game_loop(bank, secret, reader)?;

    if !player.is_empty() {
        let record = GameRecord {
            player: player.to_string(),
            secret: secret.to_string(),
            attempts: outcome.attempts_used,
            outcome: if outcome.won { Outcome::Win } else { Outcome::Loss },
        };
        if let Err(e) = stats::append_record(stats_path, &record) {
            log::warn!("failed to record game result: {e}");
        }
    }

    Some(outcome)
}
