use tracing::trace;

use super::normalization::{normalize, NormalizedToken};
use crate::concordance::Concordance;

/// Sentence-boundary state, created fresh for every document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmenterState {
    /// 1-based number of the most recent sentence (0 before the first word)
    pub current_sentence: usize,
    /// A sentence is open and the next word continues it
    pub inside_sentence: bool,
    /// No word has been seen since the last line start
    pub saw_blank_line: bool,
}

/// Counters collected while segmenting a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    pub lines_read: u64,
    pub tokens_seen: u64,
    pub tokens_discarded: u64,
    pub words_recorded: u64,
}

/// Stateful tokenizer that assigns every word of a document to a sentence
#[derive(Debug, Default)]
pub struct Segmenter {
    state: SegmenterState,
    stats: SegmentStats,
    concordance: Concordance,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one line of the document (without its line terminator)
    pub fn process_line(&mut self, line: &str) {
        self.stats.lines_read += 1;
        self.on_newline();
        for token in line.split_whitespace() {
            self.stats.tokens_seen += 1;
            self.consume(normalize(token));
        }
    }

    /// A line start closes the open sentence only if the previous line carried no words
    fn on_newline(&mut self) {
        if self.state.inside_sentence && self.state.saw_blank_line {
            self.state.inside_sentence = false;
        }
        self.state.saw_blank_line = true;
    }

    /// Record a normalized token against the current sentence
    pub fn consume(&mut self, token: NormalizedToken) {
        if token.discard {
            self.stats.tokens_discarded += 1;
            return;
        }

        if !token.text.is_empty() {
            if !self.state.inside_sentence {
                self.state.current_sentence += 1;
                self.state.inside_sentence = true;
                trace!(sentence = self.state.current_sentence, "sentence start");
            }
            self.state.saw_blank_line = false;
            self.concordance.add(&token.text, self.state.current_sentence);
            self.stats.words_recorded += 1;
        }

        if token.ends_sentence {
            self.state.inside_sentence = false;
        }
    }

    pub fn state(&self) -> SegmenterState {
        self.state
    }

    pub fn stats(&self) -> SegmentStats {
        self.stats
    }

    pub fn concordance(&self) -> &Concordance {
        &self.concordance
    }

    pub fn into_parts(self) -> (Concordance, SegmentStats, SegmenterState) {
        (self.concordance, self.stats, self.state)
    }
}
