use std::io;
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::concordance::Concordance;
use crate::stats::ParseStats;
use crate::tokenizer::{decode_line, finish_parse, Segmenter};

/// Configuration for async document reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Stream a document line-by-line into a fresh segmenter
///
/// Lines are split on `\n` as raw bytes and decoded lossily, so any byte content
/// is accepted. The first read error aborts the parse; no partial concordance is
/// returned.
pub async fn parse_document_async<R>(document: R) -> io::Result<(Concordance, ParseStats)>
where
    R: AsyncBufRead + Unpin,
{
    let start_time = Instant::now();
    let mut segmenter = Segmenter::new();
    let mut lines = document.split(b'\n');

    loop {
        match lines.next_segment().await {
            Ok(Some(raw)) => segmenter.process_line(&decode_line(&raw)),
            Ok(None) => break,
            Err(e) => {
                warn!(
                    line = segmenter.stats().lines_read + 1,
                    error = %e,
                    "Read failed, discarding partial concordance"
                );
                return Err(e);
            }
        }
    }

    Ok(finish_parse(segmenter, start_time))
}

/// Open a document file and parse it with buffered async I/O
pub async fn read_document_file<P: AsRef<Path>>(
    file_path: P,
    config: &ReaderConfig,
) -> io::Result<(Concordance, ParseStats)> {
    let path = file_path.as_ref();
    debug!("Starting async read of file: {}", path.display());

    let file = File::open(path).await?;
    let reader = BufReader::with_capacity(config.buffer_size, file);
    let (concordance, stats) = parse_document_async(reader).await?;

    info!(
        "Read {}: {} lines, {} words, {} sentences in {}ms",
        path.display(),
        stats.lines_read,
        stats.words_recorded,
        stats.sentences,
        stats.processing_time_ms
    );
    Ok((concordance, stats))
}
