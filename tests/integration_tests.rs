// Integration tests for the wordle-game application
// These tests drive whole games over in-memory input and temp-dir stats logs

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use wordle_game::*;

fn test_bank() -> WordBank {
    load_wordbank_from_str("erase\nspeed\ncrane\nslate\nraise\nstare\nabide\npilot").unwrap()
}

fn temp_stats_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wordle_game_it_{name}.csv"));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn winning_game_appends_exactly_one_win_record() {
    let bank = test_bank();
    let path = temp_stats_path("win");

    // Two wrong guesses, then the secret
    let mut reader = Cursor::new("crane\nslate\nerase\n");
    let outcome = play_and_record(&bank, "erase", "alice", &path, &mut reader).unwrap();
    assert!(outcome.won);
    assert_eq!(outcome.attempts_used, 3);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert_eq!(contents.trim_end(), "alice,erase,3,win");

    let _ = fs::remove_file(&path);
}

#[test]
fn exhausted_budget_appends_one_loss_record_with_full_attempts() {
    let bank = test_bank();
    let path = temp_stats_path("loss");

    let mut reader = Cursor::new("speed\ncrane\nslate\nraise\nstare\nabide\n");
    let outcome = play_and_record(&bank, "erase", "bob", &path, &mut reader).unwrap();
    assert!(!outcome.won);
    assert_eq!(outcome.attempts_used, MAX_ATTEMPTS);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert_eq!(contents.trim_end(), "bob,erase,6,loss");

    let _ = fs::remove_file(&path);
}

#[test]
fn interrupted_game_appends_nothing() {
    let bank = test_bank();
    let path = temp_stats_path("interrupted");

    // Input ends after two guesses, well before a terminal state
    let mut reader = Cursor::new("crane\nslate\n");
    let outcome = play_and_record(&bank, "erase", "carol", &path, &mut reader);
    assert!(outcome.is_none());
    assert!(!path.exists());
}

#[test]
fn empty_player_name_plays_but_records_nothing() {
    let bank = test_bank();
    let path = temp_stats_path("anonymous");

    let mut reader = Cursor::new("erase\n");
    let outcome = play_and_record(&bank, "erase", "", &path, &mut reader).unwrap();
    assert!(outcome.won);
    assert!(!path.exists());
}

#[test]
fn invalid_guesses_do_not_burn_the_budget() {
    let bank = test_bank();
    let path = temp_stats_path("invalid_guesses");

    // Wrong length, non-alphabetic, and out-of-list guesses are all rejected
    // without consuming an attempt, so the win lands on attempt two.
    let mut reader = Cursor::new("era\ncr4ne\nzzzzz\ncrane\nerase\n");
    let outcome = play_and_record(&bank, "erase", "dave", &path, &mut reader).unwrap();
    assert!(outcome.won);
    assert_eq!(outcome.attempts_used, 2);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.trim_end(), "dave,erase,2,win");

    let _ = fs::remove_file(&path);
}

#[test]
fn repeated_games_aggregate_to_exact_stats() {
    let bank = test_bank();
    let path = temp_stats_path("aggregate");

    let scripts = [
        ("erase\n", true, 1),
        ("crane\nerase\n", true, 2),
        ("speed\ncrane\nslate\nraise\nstare\nabide\n", false, 6),
    ];
    for (script, expect_win, expect_attempts) in scripts {
        let mut reader = Cursor::new(script);
        let outcome = play_and_record(&bank, "erase", "erin", &path, &mut reader).unwrap();
        assert_eq!(outcome.won, expect_win);
        assert_eq!(outcome.attempts_used, expect_attempts);
    }

    let stats = load_stats(&path, "erin").unwrap();
    assert_eq!(stats.games, 3);
    assert_eq!(stats.wins, 2);
    assert_eq!(stats.average_attempts, 3.0);

    // Other players see none of these records
    let stats = load_stats(&path, "someone-else").unwrap();
    assert_eq!(stats.games, 0);
    assert_eq!(stats.wins, 0);
    assert_eq!(stats.average_attempts, 0.0);

    let _ = fs::remove_file(&path);
}

#[test]
fn stats_survive_foreign_and_malformed_lines() {
    let bank = test_bank();
    let path = temp_stats_path("malformed");

    // A record from another tool, a truncated row, and a junk line
    fs::write(&path, "frank,pilot,4,win\nfrank,slate\ngarbage\n").unwrap();

    let mut reader = Cursor::new("erase\n");
    play_and_record(&bank, "erase", "frank", &path, &mut reader).unwrap();

    let stats = load_stats(&path, "frank").unwrap();
    assert_eq!(stats.games, 2);
    assert_eq!(stats.wins, 2);
    assert_eq!(stats.average_attempts, 2.5);

    let _ = fs::remove_file(&path);
}

#[test]
fn custom_wordbank_file_feeds_a_full_game() {
    use std::io::Write;

    let bank_path = std::env::temp_dir().join("wordle_game_it_custom_bank.txt");
    {
        let mut file = fs::File::create(&bank_path).unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "grape").unwrap();
        writeln!(file, "lemon").unwrap();
        writeln!(file, "toolong").unwrap();
        writeln!(file, "melon").unwrap();
    }

    let bank = load_wordbank_from_file(&bank_path).unwrap();
    assert_eq!(bank.len(), 4);
    let secret = bank.word_at(1).unwrap().to_string();
    assert_eq!(secret, "grape");

    let mut reader = Cursor::new("APPLE\ngrape\n");
    let outcome = game_loop(&bank, &secret, &mut reader).unwrap();
    assert!(outcome.won);
    assert_eq!(outcome.attempts_used, 2);

    fs::remove_file(&bank_path).unwrap();
}

#[test]
fn duplicate_letters_resolve_through_a_real_game() {
    let bank = test_bank();

    // speed vs erase: both e's are Present (erase holds two), s is Present,
    // p and d are Absent. The game continues and the player wins next turn.
    let (verdicts, win) = score("speed", "erase");
    assert!(!win);
    assert_eq!(
        verdicts,
        vec![
            Verdict::Present,
            Verdict::Absent,
            Verdict::Present,
            Verdict::Present,
            Verdict::Absent,
        ]
    );

    let mut reader = Cursor::new("speed\nerase\n");
    let outcome = game_loop(&bank, "erase", &mut reader).unwrap();
    assert!(outcome.won);
    assert_eq!(outcome.attempts_used, 2);
}
