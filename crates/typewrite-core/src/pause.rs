//! Pause strategies: how long the typist rests between words and sentences.
//!
//! A [`PauseStrategy`] turns a just-finished word (or a sentence boundary)
//! into a delay in milliseconds, inserted before the next word begins.

/// Delay provider consulted by the factory at each word boundary.
pub trait PauseStrategy: Send + Sync {
    /// Delay in ms after `word` (trailing space already stripped).
    fn pause_after_word(&self, word: &str, avg_time_per_char: u64) -> u64;

    /// Delay in ms after a sentence boundary (`.` or `,` before the space).
    fn pause_after_sentence(&self, avg_time_per_char: u64) -> u64;
}

/// No inter-word gaps; the default for unconfigured requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPause;

impl PauseStrategy for NoPause {
    fn pause_after_word(&self, _word: &str, _avg_time_per_char: u64) -> u64 {
        0
    }

    fn pause_after_sentence(&self, _avg_time_per_char: u64) -> u64 {
        0
    }
}

const WORD_LEN_DIVISOR: u64 = 4;
const SENTENCE_PAUSE_FACTOR: u64 = 8;

/// Human-plausible rests: longer words earn a longer breath, and sentence
/// boundaries rest longest.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalPause;

impl PauseStrategy for NaturalPause {
    fn pause_after_word(&self, word: &str, avg_time_per_char: u64) -> u64 {
        let len = word.chars().count() as u64;
        avg_time_per_char + avg_time_per_char * len / WORD_LEN_DIVISOR
    }

    fn pause_after_sentence(&self, avg_time_per_char: u64) -> u64 {
        avg_time_per_char * SENTENCE_PAUSE_FACTOR
    }
}
