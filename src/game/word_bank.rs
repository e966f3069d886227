//! Loaded candidate words and gallows stage art.

use rand::Rng;
use rand::seq::SliceRandom;

use super::state::normalize_word;
use super::types::{HangmanError, MAX_ATTEMPTS};

/// Immutable word list and stage art, validated at construction.
#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<String>,
    stages: Vec<String>,
}

impl WordBank {
    /// Build a bank, rejecting an empty word list, blank words, or too few
    /// stages to cover every attempts-remaining value. Words are normalized
    /// to the game's upper-case convention here.
    pub fn new(words: Vec<String>, stages: Vec<String>) -> Result<Self, HangmanError> {
        if words.is_empty() {
            return Err(HangmanError::EmptyBank);
        }
        let words = words
            .iter()
            .enumerate()
            .map(|(index, word)| {
                let word = normalize_word(word);
                if word.is_empty() {
                    Err(HangmanError::EmptyWord { index })
                } else {
                    Ok(word)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let needed = usize::from(MAX_ATTEMPTS) + 1;
        if stages.len() < needed {
            return Err(HangmanError::InsufficientStages {
                needed,
                found: stages.len(),
            });
        }
        Ok(Self { words, stages })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick one word uniformly at random.
    pub fn pick_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, HangmanError> {
        self.words
            .choose(rng)
            .map(String::as_str)
            .ok_or(HangmanError::EmptyBank)
    }

    /// Stage art for the given attempts remaining; stage 0 is the untouched
    /// gallows, the last stage is the lost game.
    pub fn stage_for(&self, attempts_remaining: u8) -> Result<&str, HangmanError> {
        let out_of_range = HangmanError::IndexOutOfRange {
            attempts: attempts_remaining,
            max: MAX_ATTEMPTS,
        };
        if attempts_remaining > MAX_ATTEMPTS {
            return Err(out_of_range);
        }
        let index = usize::from(MAX_ATTEMPTS - attempts_remaining);
        self.stages
            .get(index)
            .map(String::as_str)
            .ok_or(out_of_range)
    }
}

#[cfg(test)]
pub(crate) fn sample_stages() -> Vec<String> {
    (0..=MAX_ATTEMPTS).map(|i| format!("stage {i}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank(words: &[&str]) -> WordBank {
        WordBank::new(words.iter().map(|w| w.to_string()).collect(), sample_stages()).unwrap()
    }

    #[test]
    fn empty_words_rejected() {
        let err = WordBank::new(Vec::new(), sample_stages()).unwrap_err();
        assert!(matches!(err, HangmanError::EmptyBank));
    }

    #[test]
    fn blank_word_rejected() {
        let err = WordBank::new(vec!["CAT".into(), "".into()], sample_stages()).unwrap_err();
        assert!(matches!(err, HangmanError::EmptyWord { index: 1 }));

        let err = WordBank::new(vec!["   ".into()], sample_stages()).unwrap_err();
        assert!(matches!(err, HangmanError::EmptyWord { index: 0 }));
    }

    #[test]
    fn words_are_normalized() {
        let b = bank(&["cat", " Dog "]);
        assert_eq!(b.words(), ["CAT", "DOG"]);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn short_stage_list_rejected() {
        let err = WordBank::new(vec!["CAT".into()], vec!["only".into(); 4]).unwrap_err();
        assert!(matches!(
            err,
            HangmanError::InsufficientStages {
                needed: 11,
                found: 4
            }
        ));
    }

    #[test]
    fn pick_word_comes_from_bank() {
        let b = bank(&["CAT", "DOG", "BIRD"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let w = b.pick_word(&mut rng).unwrap();
            assert!(b.words().iter().any(|x| x == w));
        }
    }

    #[test]
    fn pick_word_is_reproducible_with_seed() {
        let b = bank(&["CAT", "DOG", "BIRD", "FISH", "HORSE"]);
        let mut a = StdRng::seed_from_u64(42);
        let mut c = StdRng::seed_from_u64(42);
        let first: Vec<_> = (0..10).map(|_| b.pick_word(&mut a).unwrap()).collect();
        let second: Vec<_> = (0..10).map(|_| b.pick_word(&mut c).unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pick_word_reaches_every_entry() {
        let b = bank(&["CAT", "DOG", "BIRD"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(b.pick_word(&mut rng).unwrap().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn stage_for_maps_attempts_to_index() {
        let b = bank(&["CAT"]);
        assert_eq!(b.stage_for(MAX_ATTEMPTS).unwrap(), "stage 0\n");
        assert_eq!(b.stage_for(9).unwrap(), "stage 1\n");
        assert_eq!(b.stage_for(0).unwrap(), "stage 10\n");
    }

    #[test]
    fn stage_for_out_of_range() {
        let b = bank(&["CAT"]);
        let err = b.stage_for(MAX_ATTEMPTS + 1).unwrap_err();
        assert!(matches!(
            err,
            HangmanError::IndexOutOfRange {
                attempts: 11,
                max: 10
            }
        ));
    }
}
