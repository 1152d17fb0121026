use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::debug_log;

/// Result of a concluded game, serialized as `win` / `loss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "win" => Some(Outcome::Win),
            "loss" => Some(Outcome::Loss),
            _ => None,
        }
    }
}

/// One line of the stats log: `player,secretWord,attemptsUsed,outcome`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub player: String,
    pub secret: String,
    pub attempts: u32,
    pub outcome: Outcome,
}

impl GameRecord {
    fn to_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.player,
            self.secret,
            self.attempts,
            self.outcome.as_str()
        )
    }

    /// Parses one log line; anything short of four well-formed fields is `None`.
    fn parse_line(line: &str) -> Option<GameRecord> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return None;
        }
        Some(GameRecord {
            player: fields[0].to_string(),
            secret: fields[1].to_string(),
            attempts: fields[2].parse().ok()?,
            outcome: Outcome::parse(fields[3])?,
        })
    }
}

/// Aggregated view over a player's records; derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerStats {
    pub games: u32,
    pub wins: u32,
    pub average_attempts: f64,
}

/// Appends one record to the log at `path`, creating the file if needed.
/// The file is opened and closed per record; no lock is held across turns.
pub fn append_record(path: &Path, record: &GameRecord) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{}", record.to_line())?;
    debug_log!("recorded game for {:?} in {}", record.player, path.display());
    Ok(())
}

/// Scans every log line from `reader`, keeping records whose player matches
/// `player` exactly. Malformed lines are skipped, not fatal.
pub fn aggregate<R: BufRead>(reader: R, player: &str) -> PlayerStats {
    let mut games = 0u32;
    let mut wins = 0u32;
    let mut total_attempts = 0u64;

    for line in reader.lines() {
        let Ok(line) = line else { break };
        let Some(record) = GameRecord::parse_line(line.trim_end()) else {
            continue;
        };
        if record.player != player {
            continue;
        }
        games += 1;
        total_attempts += u64::from(record.attempts);
        if record.outcome == Outcome::Win {
            wins += 1;
        }
    }

    let average_attempts = if games == 0 {
        0.0
    } else {
        total_attempts as f64 / f64::from(games)
    };

    PlayerStats {
        games,
        wins,
        average_attempts,
    }
}

/// Reads the log at `path` and aggregates records for `player`.
/// A missing log simply means no games yet.
pub fn load_stats(path: &Path, player: &str) -> io::Result<PlayerStats> {
    match File::open(path) {
        Ok(file) => Ok(aggregate(BufReader::new(file), player)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PlayerStats::default()),
        Err(e) => Err(e),
    }
}

/// Default per-user location for the stats log, falling back to the working
/// directory when no home directory is available.
pub fn default_stats_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".wordle_stats.csv"))
        .unwrap_or_else(|| PathBuf::from("stats.csv"))
}
