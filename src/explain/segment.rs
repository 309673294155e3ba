use super::sentence::split_sentences;
use super::ParsedExplanation;

/// The three buckets an explanation line can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionLabel {
    WhatHappened,
    WhyItMatters,
    WhatToDo,
}

/// Header vocabulary, matched as case-insensitive substrings so decorated
/// headers ("1. What happened:") still transition. First entry wins, so
/// table order is the tie-break for a line matching several phrases.
const HEADER_RULES: &[(&str, SectionLabel)] = &[
    ("what happened", SectionLabel::WhatHappened),
    ("why it matters", SectionLabel::WhyItMatters),
    ("what to do", SectionLabel::WhatToDo),
    ("what should be done", SectionLabel::WhatToDo),
];

fn match_header(lower: &str) -> Option<SectionLabel> {
    HEADER_RULES
        .iter()
        .find(|(phrase, _)| lower.contains(phrase))
        .map(|&(_, label)| label)
}

/// Partition stripped text into the three sections.
///
/// Lines are read in order; a header line switches the active section and
/// is itself never buffered. Text before the first header has no section
/// to belong to and is discarded. A trailing "what happened" section that
/// never reaches a later header is also discarded at end-of-input —
/// downstream consumers rely on that quirk, so it is kept as-is.
pub(crate) fn segment(text: &str) -> ParsedExplanation {
    let mut parsed = ParsedExplanation::default();
    let mut state: Option<SectionLabel> = None;
    let mut buffer = String::new();

    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines = unified.split('\n').map(str::trim).filter(|l| !l.is_empty());

    for line in lines {
        let lower = line.to_lowercase();
        match match_header(&lower) {
            Some(SectionLabel::WhatHappened) => {
                flush(state, &buffer, &mut parsed);
                state = Some(SectionLabel::WhatHappened);
                buffer.clear();
            }
            Some(SectionLabel::WhyItMatters) => {
                parsed.what_happened = narrative(&buffer);
                state = Some(SectionLabel::WhyItMatters);
                buffer.clear();
            }
            Some(SectionLabel::WhatToDo) => {
                parsed.why_it_matters = narrative(&buffer);
                state = Some(SectionLabel::WhatToDo);
                buffer.clear();
            }
            None => {
                buffer.push_str(line);
                buffer.push(' ');
            }
        }
    }

    match state {
        Some(SectionLabel::WhatToDo) => parsed.what_to_do = split_sentences(&buffer),
        Some(SectionLabel::WhyItMatters) => parsed.why_it_matters = narrative(&buffer),
        Some(SectionLabel::WhatHappened) | None => {}
    }

    parsed
}

/// Commit the in-progress buffer to the field of the section it was read
/// under. With no active section the text is unattributable and dropped.
fn flush(state: Option<SectionLabel>, buffer: &str, parsed: &mut ParsedExplanation) {
    match state {
        Some(SectionLabel::WhatHappened) => parsed.what_happened = narrative(buffer),
        Some(SectionLabel::WhyItMatters) => parsed.why_it_matters = narrative(buffer),
        Some(SectionLabel::WhatToDo) => parsed.what_to_do = split_sentences(buffer),
        None => {}
    }
}

fn narrative(buffer: &str) -> String {
    split_sentences(buffer).join(" ")
}
