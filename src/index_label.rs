// Row labels use repeated letters rather than base-26 digits:
// 0 -> a, 25 -> z, 26 -> aa, 27 -> bb, 52 -> aaa

const ALPHABET_LEN: usize = 26;

/// Letters for a 0-based row index, without the trailing period
pub fn format_index(index: usize) -> String {
    let letter = char::from(b'a' + (index % ALPHABET_LEN) as u8);
    std::iter::repeat(letter)
        .take(index / ALPHABET_LEN + 1)
        .collect()
}

/// Full row label as printed in the report ("a.", "bb.")
pub fn index_label(index: usize) -> String {
    let mut label = format_index(index);
    label.push('.');
    label
}

/// Column width reserved for labels in a report of `word_count` rows
///
/// Counts letters only, so the longest labels (with their period) may overflow
/// the column by one character; the tab separator keeps the report readable.
pub fn max_label_width(word_count: usize) -> usize {
    (word_count + 1) / ALPHABET_LEN + 1
}
