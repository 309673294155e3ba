use std::sync::LazyLock;

use regex::Regex;

static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*#]+").unwrap());
static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Fragments at or below this length are stray noise (bullet glyphs,
/// "Ok.", numbering) and never survive normalization.
const MAX_NOISE_CHARS: usize = 3;

/// Remove markdown decoration. Runs of `*` and `#` collapse to nothing;
/// every other character passes through untouched.
pub(crate) fn strip_markup(text: &str) -> String {
    MARKUP_RE.replace_all(text, "").into_owned()
}

/// Split a buffered block into trimmed, capitalized sentences.
///
/// The split point is the whitespace after `.` / `!` / `?`, so terminal
/// punctuation stays attached to its sentence. A block with no terminal
/// punctuation is one sentence.
pub(crate) fn split_sentences(block: &str) -> Vec<String> {
    let block = block.trim();
    if block.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END_RE.find_iter(block) {
        push_sentence(&block[start..m.start() + 1], &mut sentences);
        start = m.end();
    }
    push_sentence(&block[start..], &mut sentences);
    sentences
}

fn push_sentence(fragment: &str, out: &mut Vec<String>) {
    let trimmed = fragment.trim();
    if trimmed.chars().count() > MAX_NOISE_CHARS {
        out.push(capitalize_first(trimmed));
    }
}

/// Uppercase the first character only; the rest of the sentence is left
/// as written.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
