mod matches;
mod replace;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::captures::MatchRecord;
use crate::engine::{Engine, Error, Options};

pub use matches::Matches;

/// A compiled pattern: immutable after construction, reusable across any
/// number of subjects, and safe to share between threads. The named-group
/// table is built once, on first use.
#[derive(Debug)]
pub struct Pattern {
    engine: Engine,
    source: String,
    options: Options,
    named: OnceLock<HashMap<String, usize>>,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Self::with_options(pattern, Options::default())
    }

    pub fn with_options(pattern: &str, options: Options) -> Result<Self, Error> {
        let engine = Engine::compile(pattern, &options)?;
        Ok(Self {
            engine,
            source: pattern.to_string(),
            options,
            named: OnceLock::new(),
        })
    }

    /// The pattern text this instance was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Number of capture groups, counting the implicit whole-match group.
    pub fn group_len(&self) -> usize {
        self.engine.group_len()
    }

    /// True iff [`Pattern::find`] would produce a match.
    pub fn is_match(&self, subject: &str) -> bool {
        self.find(subject).is_some()
    }

    pub fn is_match_at(&self, subject: &str, start: usize) -> Result<bool, Error> {
        Ok(self.find_at(subject, start)?.is_some())
    }

    /// First match in `subject`, if any.
    pub fn find<'h>(&self, subject: &'h str) -> Option<MatchRecord<'h>> {
        // offset 0 is a valid start position for any subject
        self.find_at(subject, 0).ok().flatten()
    }

    /// One match beginning at or after `start`. `Ok(None)` means the engine
    /// searched to the end of the subject without finding one; `Err` means
    /// it could not search at all.
    pub fn find_at<'h>(
        &self,
        subject: &'h str,
        start: usize,
    ) -> Result<Option<MatchRecord<'h>>, Error> {
        Ok(self
            .engine
            .execute(subject, start)?
            .map(|raw| MatchRecord::new(subject, raw)))
    }

    /// Lazily enumerate every non-overlapping match, in order of strictly
    /// increasing start offset.
    pub fn find_iter<'p, 'h>(&'p self, subject: &'h str) -> Matches<'p, 'h> {
        Matches::new(self, subject)
    }

    /// Every match, collected eagerly.
    pub fn find_all<'h>(&self, subject: &'h str) -> Vec<MatchRecord<'h>> {
        self.find_iter(subject).collect()
    }

    /// Name → subgroup index, derived from engine metadata. Empty when the
    /// pattern has no named groups; on duplicate names the last declared
    /// index wins.
    pub fn named_groups(&self) -> &HashMap<String, usize> {
        self.named.get_or_init(|| {
            self.engine
                .group_names()
                .enumerate()
                .filter_map(|(i, name)| name.map(|n| (n.to_string(), i)))
                .collect()
        })
    }

    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.named_groups().get(name).copied()
    }

    /// Replace the first match with `replacement`, taken literally. Returns
    /// the subject unchanged when nothing matches.
    pub fn replace(&self, subject: &str, replacement: &str) -> String {
        replace::first(self, subject, replacement)
    }

    /// Replace every match with `replacement`, taken literally. Each match
    /// is found in the already-rewritten text, and scanning resumes just
    /// past each inserted replacement, so replacement text is never itself
    /// rescanned.
    pub fn replace_all(&self, subject: &str, replacement: &str) -> String {
        replace::all(self, subject, replacement)
    }
}
