use std::time::Duration;

use crate::concordance::Concordance;
use crate::tokenizer::SegmentStats;

/// Summary of one document parse, logged by the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines_read: u64,
    /// Whitespace-delimited tokens, including discarded ones
    pub tokens_seen: u64,
    /// Tokens with no word content (pure punctuation)
    pub tokens_discarded: u64,
    /// Occurrences added to the concordance
    pub words_recorded: u64,
    pub sentences: usize,
    pub distinct_words: usize,
    pub processing_time_ms: u64,
}

impl ParseStats {
    pub fn from_segmentation(
        segment_stats: &SegmentStats,
        sentences: usize,
        concordance: &Concordance,
        elapsed: Duration,
    ) -> Self {
        Self {
            lines_read: segment_stats.lines_read,
            tokens_seen: segment_stats.tokens_seen,
            tokens_discarded: segment_stats.tokens_discarded,
            words_recorded: segment_stats.words_recorded,
            sentences,
            distinct_words: concordance.len(),
            processing_time_ms: elapsed.as_millis() as u64,
        }
    }
}
