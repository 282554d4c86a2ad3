use std::io::{self, BufRead, Write};

pub mod concordance;
pub mod index_label;
pub mod reader;
pub mod stats;
pub mod tokenizer;

// Re-export main types for convenient access
pub use concordance::{Concordance, Report};
pub use index_label::{format_index, index_label, max_label_width};
pub use reader::{parse_document_async, read_document_file, ReaderConfig};
pub use stats::ParseStats;
pub use tokenizer::{
    normalize, parse_document, parse_document_with_stats, NormalizedToken, Segmenter,
    SegmenterState,
};

/// Build a concordance from `document` and write the report to `output`
///
/// The document is parsed completely before anything is written, so a read
/// failure leaves `output` untouched.
pub fn generate_concordance<R: BufRead, W: Write>(document: R, mut output: W) -> io::Result<()> {
    let concordance = parse_document(document)?;
    concordance.write_to(&mut output)?;
    output.flush()
}
