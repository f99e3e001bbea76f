//! Heuristic token estimation
//!
//! Approximates DeepSeek V3 tokenization without shipping the actual
//! tokenizer model. The estimate is purely lexical: split the text into
//! word and symbol tokens, then adjust for digit runs (the tokenizer
//! emits roughly one token per digit) and for common English affixes
//! that tend to split off as separate tokens.

use once_cell::sync::Lazy;
use regex::Regex;

/// Word runs and single non-space symbols. Alternation order matters:
/// at any position a word match is preferred over a symbol match.
static WORD_OR_SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b|[^\w\s]").expect("valid regex"));

/// A lexical token consisting solely of decimal digits.
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Affixes that frequently surface as standalone tokens. Whole words only:
/// "running" contains "ing" but does not match.
static COMMON_AFFIXES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(un|re|in|dis|able|ment|tion|ing|ed|ly)\b").expect("valid regex")
});

/// Estimate the token count for `text`.
///
/// The base count is one per lexical token (word run or single symbol).
/// Each all-digit token contributes `digits - 1` extra tokens on top of
/// its base token. Each whole-word affix occurrence anywhere in the text
/// adds one more. Whitespace on its own never produces tokens, so empty
/// and blank inputs estimate to zero.
pub fn estimate_tokens(text: &str) -> u64 {
    let mut base: u64 = 0;
    let mut digit_extra: u64 = 0;
    for found in WORD_OR_SYMBOL.find_iter(text) {
        base += 1;
        let lexeme = found.as_str();
        if DIGIT_RUN.is_match(lexeme) {
            digit_extra += lexeme.chars().count() as u64 - 1;
        }
    }
    let affix_extra = COMMON_AFFIXES.find_iter(text).count() as u64;

    let total = base + digit_extra + affix_extra;
    tracing::debug!(base, digit_extra, affix_extra, total, "token estimate");
    total
}
