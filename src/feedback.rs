/// Per-position outcome of a guess.
///
/// `Present` means the letter occurs in the secret at a different position and
/// there is still an unconsumed occurrence of it after greens are accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

/// Scores `guess` against `secret`, returning one verdict per position and a
/// win flag that is true iff every verdict is `Correct`.
///
/// Both inputs must be lowercase ASCII of equal length; callers validate before
/// scoring. Duplicate letters are handled with a two-pass count: greens consume
/// secret letters first, then yellows consume what remains, so a guess never
/// earns more `Correct` + `Present` marks for a letter than the secret holds.
pub fn score(guess: &str, secret: &str) -> (Vec<Verdict>, bool) {
    let guess_bytes = guess.as_bytes();
    let secret_bytes = secret.as_bytes();

    let mut remaining = [0u8; 26];
    for &b in secret_bytes {
        remaining[usize::from(b - b'a')] += 1;
    }

    let mut verdicts = vec![Verdict::Absent; secret_bytes.len()];

    // Pass 1: exact matches consume their letter before any yellow can.
    for (i, (&g, &s)) in guess_bytes.iter().zip(secret_bytes).enumerate() {
        if g == s {
            verdicts[i] = Verdict::Correct;
            remaining[usize::from(g - b'a')] -= 1;
        }
    }

    // Pass 2: misplaced letters, bounded by what the secret still holds.
    let mut win = true;
    for (i, &g) in guess_bytes.iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        win = false;
        let slot = usize::from(g - b'a');
        if remaining[slot] > 0 {
            verdicts[i] = Verdict::Present;
            remaining[slot] -= 1;
        }
    }

    (verdicts, win)
}
