use super::Pattern;
use crate::captures::MatchRecord;

/// Lazy iterator over every non-overlapping match of a pattern in one
/// subject, in order of strictly increasing start offset. Each call to
/// [`Pattern::find_iter`] begins a fresh scan; neither the pattern nor the
/// subject is mutated.
#[derive(Debug)]
pub struct Matches<'p, 'h> {
    pattern: &'p Pattern,
    subject: &'h str,
    offset: usize,
    done: bool,
}

impl<'p, 'h> Matches<'p, 'h> {
    pub(super) fn new(pattern: &'p Pattern, subject: &'h str) -> Self {
        Self {
            pattern,
            subject,
            offset: 0,
            done: false,
        }
    }
}

impl<'h> Iterator for Matches<'_, 'h> {
    type Item = MatchRecord<'h>;

    fn next(&mut self) -> Option<MatchRecord<'h>> {
        if self.done || self.offset > self.subject.len() {
            return None;
        }

        let raw = match self.pattern.engine.execute(self.subject, self.offset) {
            Ok(Some(raw)) => raw,
            // no further match, or the engine could not search: either way
            // the sequence ends cleanly
            Ok(None) | Err(_) => {
                self.done = true;
                return None;
            }
        };

        // a zero-length match still advances the cursor, and the advanced
        // position must not land inside a multi-byte character
        let len = raw.whole.end - raw.whole.start;
        let mut next = raw.whole.start + len.max(1);
        while next < self.subject.len() && !self.subject.is_char_boundary(next) {
            next += 1;
        }
        self.offset = next;

        Some(MatchRecord::new(self.subject, raw))
    }
}
