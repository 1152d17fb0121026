// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod feedback;
pub mod game;
pub mod logging;
pub mod stats;
pub mod wordbank;

/// Length of every word in the bank and every accepted guess.
pub const WORD_LENGTH: usize = 5;

/// Number of valid guesses allowed per game.
pub const MAX_ATTEMPTS: u32 = 6;

// Re-export commonly used items for easier testing
pub use feedback::{Verdict, score};
pub use game::{GameOutcome, GuessError, game_loop, play_and_record, validate_guess};
pub use stats::{GameRecord, Outcome, PlayerStats, aggregate, append_record, load_stats};
pub use wordbank::{WordBank, load_wordbank_from_file, load_wordbank_from_str};
