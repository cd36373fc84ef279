use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static BROKEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

/// Cleans raw PDF page text.
///
/// Ligatures are folded by NFKC, words hyphenated across a line break are
/// rejoined, stray control characters dropped, runs of whitespace inside a
/// line collapsed and any number of blank lines reduced to one paragraph break.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t' | '\u{c}'))
        .collect();
    let rejoined = BROKEN_WORD.replace_all(&normalized, "$head$tail");

    let mut paragraphs = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in rejoined.lines() {
        let words: Vec<&str> = line.split_whitespace().collect();

        if words.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(words.join(" "));
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs.join("\n\n")
}
