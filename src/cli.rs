use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::feedback::Verdict;
use crate::stats::PlayerStats;

/// Terminal Wordle CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Index of the secret word within the word bank
    pub word_index: usize,

    /// Path to a newline-delimited word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Path to the stats log (defaults to a per-user file)
    #[arg(long = "stats-file")]
    pub stats_path: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Prints an inline prompt and flushes so it lands before blocking on input.
pub fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

/// Reads one line and trims it. `None` once the input stream is exhausted;
/// read errors are treated the same way, ending the game unscored.
pub fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Renders a scored guess as uppercase letters: green for Correct, yellow for
/// Present, uncolored for Absent. Scoring stays presentation-free; this is the
/// only place verdicts meet the terminal.
pub fn render_feedback(guess: &str, verdicts: &[Verdict]) -> String {
    guess
        .chars()
        .zip(verdicts)
        .map(|(ch, verdict)| {
            let letter = ch.to_ascii_uppercase().to_string();
            match verdict {
                Verdict::Correct => letter.green().to_string(),
                Verdict::Present => letter.yellow().to_string(),
                Verdict::Absent => letter,
            }
        })
        .collect()
}

pub fn display_stats(player: &str, stats: &PlayerStats) {
    println!("Stats for {player}:");
    println!("Games played: {}", stats.games);
    println!("Games won: {}", stats.wins);
    println!("Average attempts per game: {:.2}", stats.average_attempts);
}
