use regex_automata::Span;

use crate::engine::RawMatch;

/// One captured span of a successful match: the matched text and its byte
/// position in the subject. The text, start, and length always agree, since
/// the text is a slice of the subject at that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture<'h> {
    text: &'h str,
    start: usize,
}

impl<'h> Capture<'h> {
    fn new(subject: &'h str, span: Span) -> Self {
        Self {
            text: &subject[span.start..span.end],
            start: span.start,
        }
    }

    pub fn as_str(&self) -> &'h str {
        self.text
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }
}

/// The full result of one match: the whole match at index 0, then every
/// capturing subgroup in declaration order. A subgroup that did not
/// participate in the match is `None` — it has neither text nor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord<'h> {
    whole: Capture<'h>,
    subs: Vec<Option<Capture<'h>>>,
}

impl<'h> MatchRecord<'h> {
    pub(crate) fn new(subject: &'h str, raw: RawMatch) -> Self {
        Self {
            whole: Capture::new(subject, raw.whole),
            subs: raw
                .groups
                .into_iter()
                .map(|span| span.map(|s| Capture::new(subject, s)))
                .collect(),
        }
    }

    /// The whole-match capture, group index 0. Always set.
    pub fn whole(&self) -> Capture<'h> {
        self.whole
    }

    /// The capture at `index`, where 0 is the whole match. `None` for an
    /// unset subgroup or an index past the last group.
    pub fn get(&self, index: usize) -> Option<Capture<'h>> {
        if index == 0 {
            Some(self.whole)
        } else {
            self.subs.get(index - 1).copied().flatten()
        }
    }

    /// Total group count, set or not: the whole match plus every capturing
    /// subgroup of the pattern.
    pub fn group_len(&self) -> usize {
        self.subs.len() + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Capture<'h>>> + '_ {
        std::iter::once(Some(self.whole)).chain(self.subs.iter().copied())
    }
}
