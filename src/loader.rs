//! Flat-file loading for the word list and the gallows stage art.
//!
//! Word files hold one word per line. Stage files hold blocks of art
//! separated by empty lines; block `i` is shown after `i` misses.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::game::{HangmanError, WordBank};

/// Parse a word list: trimmed, blank lines skipped, upper-cased.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Parse stage art. Every empty line closes the current block, so two empty
/// lines in a row produce an empty stage. A trailing block is kept.
pub fn parse_stages(text: &str) -> Vec<String> {
    let mut stages = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.is_empty() {
            stages.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    if !current.is_empty() {
        stages.push(current);
    }
    stages
}

fn read(path: &Path) -> Result<String, HangmanError> {
    fs::read_to_string(path).map_err(|source| HangmanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, HangmanError> {
    read(path.as_ref()).map(|text| parse_words(&text))
}

pub fn load_stages<P: AsRef<Path>>(path: P) -> Result<Vec<String>, HangmanError> {
    read(path.as_ref()).map(|text| parse_stages(&text))
}

/// Load and validate both files. Any error here is fatal at startup.
pub fn load_word_bank<P, Q>(words_path: P, stages_path: Q) -> Result<WordBank, HangmanError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let words = load_words(&words_path)?;
    let stages = load_stages(&stages_path)?;
    info!(
        words = words.len(),
        stages = stages.len(),
        path = %words_path.as_ref().display(),
        "word bank loaded"
    );
    WordBank::new(words, stages)
}
