use std::io;
use std::process::ExitCode;

use wordle_game::cli::{self, parse_cli};
use wordle_game::game::play_and_record;
use wordle_game::stats::{self, default_stats_path};
use wordle_game::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};

fn main() -> ExitCode {
    env_logger::init();
    let cli = parse_cli();

    let bank = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path),
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    let bank = match bank {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("Failed to load word bank: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(secret) = bank.word_at(cli.word_index).map(str::to_string) else {
        eprintln!(
            "Word index {} is out of range; the word bank holds {} words.",
            cli.word_index,
            bank.len()
        );
        return ExitCode::from(2);
    };

    let stats_path = cli.stats_path.clone().unwrap_or_else(default_stats_path);

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    cli::prompt("Enter your username: ");
    let Some(username) = cli::read_trimmed_line(&mut reader) else {
        return ExitCode::SUCCESS;
    };

    // None means the input stream ended mid-game; nothing was recorded.
    let Some(_outcome) = play_and_record(&bank, &secret, &username, &stats_path, &mut reader)
    else {
        return ExitCode::SUCCESS;
    };

    cli::prompt("Do you want to see your stats? (yes/no): ");
    if let Some(answer) = cli::read_trimmed_line(&mut reader) {
        if answer.eq_ignore_ascii_case("yes") {
            if username.is_empty() {
                println!("No username was entered; cannot display specific stats.");
            } else {
                match stats::load_stats(&stats_path, &username) {
                    Ok(player_stats) => cli::display_stats(&username, &player_stats),
                    Err(e) => {
                        println!("Could not retrieve stats.");
                        log::warn!("stats read failed: {e}");
                    }
                }
            }
        }
    }

    ExitCode::SUCCESS
}
