// WHY: line-oriented front end shared by the blocking and async readers
// Both feed the same Segmenter so sentence numbering cannot diverge

use std::borrow::Cow;
use std::io::{self, BufRead};
use std::time::Instant;

use tracing::debug;

pub mod normalization;
pub mod punctuation;
pub mod segmenter;

// Re-export core types
pub use normalization::{normalize, NormalizedToken, END_PUNCTUATION};
pub use punctuation::is_punctuation;
pub use segmenter::{SegmentStats, Segmenter, SegmenterState};

use crate::concordance::Concordance;
use crate::stats::ParseStats;

/// Decode one raw line (without its `\n`), dropping a trailing `\r`
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the parse.
pub fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Build a concordance from a line-oriented document
///
/// Any read error aborts the parse and nothing is returned. Every byte sequence
/// is accepted as text.
pub fn parse_document<R: BufRead>(document: R) -> io::Result<Concordance> {
    parse_document_with_stats(document).map(|(concordance, _)| concordance)
}

/// Same as [`parse_document`], also reporting segmentation statistics
pub fn parse_document_with_stats<R: BufRead>(
    document: R,
) -> io::Result<(Concordance, ParseStats)> {
    let start_time = Instant::now();
    let mut segmenter = Segmenter::new();

    for line in document.split(b'\n') {
        segmenter.process_line(&decode_line(&line?));
    }

    Ok(finish_parse(segmenter, start_time))
}

pub(crate) fn finish_parse(
    segmenter: Segmenter,
    start_time: Instant,
) -> (Concordance, ParseStats) {
    let (concordance, segment_stats, state) = segmenter.into_parts();
    let stats = ParseStats::from_segmentation(
        &segment_stats,
        state.current_sentence,
        &concordance,
        start_time.elapsed(),
    );

    debug!(
        lines = stats.lines_read,
        words = stats.words_recorded,
        sentences = stats.sentences,
        distinct = stats.distinct_words,
        "Parsed document"
    );

    (concordance, stats)
}
