//! Compile-once, match-many pattern semantics over a single-shot regex
//! engine: existence tests, structured capture extraction, exhaustive match
//! enumeration, named-group lookup, and single or global replacement.
//!
//! A [`Pattern`] is compiled once and reused across arbitrary subjects. All
//! operations are synchronous and pure: nothing mutates the pattern or the
//! subject, and "no match" is an ordinary result, never an error.

mod captures;
mod engine;
mod pattern;

pub use captures::{Capture, MatchRecord};
pub use engine::{engine_info, EngineInfo, Error, Options};
pub use pattern::{Matches, Pattern};

/// Compile `pattern` and test `subject` in one shot. Compile errors are
/// surfaced, not swallowed.
pub fn is_match(pattern: &str, subject: &str) -> Result<bool, Error> {
    Ok(Pattern::new(pattern)?.is_match(subject))
}

/// Compile `pattern` and return its first match in `subject` in one shot.
pub fn find<'h>(pattern: &str, subject: &'h str) -> Result<Option<MatchRecord<'h>>, Error> {
    Ok(Pattern::new(pattern)?.find(subject))
}

#[cfg(test)]
mod test {
    use super::{find, is_match, Error, Pattern};

    #[test]
    fn readme_high_level() {
        let p = Pattern::new("dogs?").unwrap();
        let spans: Vec<_> = p
            .find_iter("cat dog dogs cats")
            .map(|m| (m.whole().start(), m.whole().end()))
            .collect();
        assert_eq!(spans, vec![(4, 7), (8, 12)]);
    }

    #[test]
    fn readme_captures() {
        let p = Pattern::new(r"(?<area>\d{3})-(?<line>\d{4})").unwrap();
        let rec = p.find("call 555-0199 today").unwrap();
        assert_eq!(rec.whole().as_str(), "555-0199");
        assert_eq!(rec.get(p.group_index("area").unwrap()).unwrap().as_str(), "555");
        assert_eq!(rec.get(p.group_index("line").unwrap()).unwrap().as_str(), "0199");
    }

    #[test]
    fn readme_replace() {
        let p = Pattern::new(r"\s+").unwrap();
        assert_eq!(p.replace_all("too   much    space", " "), "too much space");
    }

    #[test]
    fn one_shot_helpers() {
        assert_eq!(is_match("c.t", "cat"), Ok(true));
        assert_eq!(find("z", "cat").unwrap(), None);
        assert!(matches!(
            is_match("(oops", "cat"),
            Err(Error::Compile { .. })
        ));
    }
}
