use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

use crate::index_label::{index_label, max_label_width};

/// Words of a document and the sentences each occurrence was found in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concordance {
    // one element per occurrence, in document order; duplicates allowed
    occurrences: HashMap<String, Vec<usize>>,
}

impl Concordance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word` in `sentence`
    pub fn add(&mut self, word: &str, sentence: usize) {
        match self.occurrences.get_mut(word) {
            Some(sentences) => sentences.push(sentence),
            None => {
                self.occurrences.insert(word.to_owned(), vec![sentence]);
            }
        }
    }

    /// Sentence numbers recorded for `word`, in insertion order
    pub fn occurrences(&self, word: &str) -> Option<&[usize]> {
        self.occurrences.get(word).map(Vec::as_slice)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Number of recorded occurrences across all words
    pub fn total_occurrences(&self) -> usize {
        self.occurrences.values().map(Vec::len).sum()
    }

    /// Distinct words in unspecified order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.occurrences.keys().map(String::as_str)
    }

    /// Sorted, column-measured view used for rendering
    pub fn report(&self) -> Report<'_> {
        let mut entries: Vec<(&str, &[usize])> = self
            .occurrences
            .iter()
            .map(|(word, sentences)| (word.as_str(), sentences.as_slice()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let word_width = entries
            .iter()
            .map(|(word, _)| word.chars().count())
            .max()
            .unwrap_or(0);
        let label_width = max_label_width(entries.len());

        Report {
            entries,
            label_width,
            word_width,
        }
    }

    /// Render the report into `output`
    pub fn write_to<W: Write>(&self, mut output: W) -> io::Result<()> {
        let report = self.report();
        for (index, (word, sentences)) in report.entries.iter().enumerate() {
            output.write_all(report.row(index, word, sentences).as_bytes())?;
        }
        Ok(())
    }
}

impl fmt::Display for Concordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report(), f)
    }
}

/// Alphabetically sorted projection of a [`Concordance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<'a> {
    pub entries: Vec<(&'a str, &'a [usize])>,
    pub label_width: usize,
    pub word_width: usize,
}

impl Report<'_> {
    /// One report line: `label<TAB>word<TAB>{count:s1,s2,...}` plus newline
    pub fn row(&self, index: usize, word: &str, sentences: &[usize]) -> String {
        let list = sentences
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{:<label_width$}\t{:<word_width$}\t{{{}:{}}}\n",
            index_label(index),
            word,
            sentences.len(),
            list,
            label_width = self.label_width,
            word_width = self.word_width,
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (word, sentences)) in self.entries.iter().enumerate() {
            f.write_str(&self.row(index, word, sentences))?;
        }
        Ok(())
    }
}
