// WHY: standalone token normalization, kept free of segmenter state
// so the heuristic can be tested one token at a time

use super::punctuation::is_punctuation;

/// Characters that close a sentence when they immediately follow a word
pub const END_PUNCTUATION: [char; 3] = ['.', '?', '!'];

/// Result of normalizing one whitespace-delimited token
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedToken {
    /// Lower-cased, punctuation-trimmed word (empty when discarded)
    pub text: String,
    /// Token carried end-of-sentence punctuation
    pub ends_sentence: bool,
    /// Token had no word content and must be skipped entirely
    pub discard: bool,
}

impl NormalizedToken {
    fn word(text: impl Into<String>, ends_sentence: bool) -> Self {
        Self {
            text: text.into(),
            ends_sentence,
            discard: false,
        }
    }

    fn discarded() -> Self {
        Self {
            text: String::new(),
            ends_sentence: false,
            discard: true,
        }
    }
}

/// Normalize a raw token into a likely word
///
/// Lower-cases the token, strips surrounding punctuation and records whether the
/// punctuation right after the word ends a sentence. Tokens with an interior period
/// and a trailing one ("i.e.", "u.s.a.") keep their final period and never end a
/// sentence. Single-period abbreviations such as "mr." or "etc." are not recognized.
/// A trailing apostrophe after an `s` is kept as a possessive ("james'").
pub fn normalize(token: &str) -> NormalizedToken {
    if token.is_empty() {
        return NormalizedToken::discarded();
    }

    let lowered = token.to_lowercase();
    let stripped = lowered.trim_end_matches(is_punctuation);

    if stripped.len() == lowered.len() {
        return NormalizedToken::word(stripped.trim_start_matches(is_punctuation), false);
    }

    // pure punctuation
    if stripped.is_empty() {
        return NormalizedToken::discarded();
    }

    // WHY: assumes simple grammar where the closing mark sits right after the word ("end.\"")
    let punct = lowered[stripped.len()..].chars().next();
    let stripped = stripped.trim_start_matches(is_punctuation);

    if punct == Some('.') && stripped.contains('.') {
        return NormalizedToken::word(format!("{stripped}."), false);
    }

    match punct {
        Some(ch) if END_PUNCTUATION.contains(&ch) => NormalizedToken::word(stripped, true),
        Some('\'') if stripped.ends_with('s') => {
            NormalizedToken::word(format!("{stripped}'"), false)
        }
        _ => NormalizedToken::word(stripped, false),
    }
}
