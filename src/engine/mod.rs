use std::fmt;

use regex_automata::meta;
use regex_automata::{Anchored, Input, PatternID, Span};
use regex_syntax::ParserBuilder;

/// Compile-time option flags, limited to what the underlying engine can
/// express. `anchored` is applied at execution time rather than baked into
/// the compiled program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Case-insensitive matching.
    pub caseless: bool,
    /// `^`/`$` match at line boundaries, not just subject boundaries.
    pub multi_line: bool,
    /// `.` also matches line terminators.
    pub dot_all: bool,
    /// Ignore literal whitespace and `#` comments in the pattern.
    pub extended: bool,
    /// Quantifiers are lazy by default, greedy with a trailing `?`.
    pub ungreedy: bool,
    /// Every match must begin exactly at the start offset.
    pub anchored: bool,
    /// `\r\n` is treated as a single line terminator.
    pub crlf: bool,
    /// Unicode-aware classes and case folding.
    pub unicode: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            caseless: false,
            multi_line: false,
            dot_all: false,
            extended: false,
            ungreedy: false,
            anchored: false,
            crlf: false,
            unicode: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern is malformed. `offset` is a byte position into the
    /// pattern text at or before the offending construct.
    Compile { message: String, offset: usize },
    /// A start offset past the end of the subject, or one that splits a
    /// multi-byte character. Distinct from "no match": the engine could not
    /// search at all.
    BadOffset { offset: usize, subject_len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Compile { message, offset } => {
                write!(f, "pattern compilation failed at offset {offset}: {message}")
            }
            Error::BadOffset {
                offset,
                subject_len,
            } => {
                write!(
                    f,
                    "start offset {offset} is not a valid position in a {subject_len}-byte subject"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Static facts about the matching backend. Introspection only; nothing in
/// this crate branches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineInfo {
    /// The engine matches Unicode-aware classes and case folding.
    pub unicode: bool,
    /// The engine JIT-compiles patterns. Always false here.
    pub jit: bool,
    /// Version of this matching layer. The engine is linked as a library
    /// and publishes no version string of its own.
    pub version: &'static str,
}

pub fn engine_info() -> EngineInfo {
    EngineInfo {
        unicode: true,
        jit: false,
        version: env!("CARGO_PKG_VERSION"),
    }
}

/// One successful execution: the whole-match span plus one entry per
/// capturing subgroup, `None` where the subgroup did not participate.
#[derive(Debug)]
pub(crate) struct RawMatch {
    pub(crate) whole: Span,
    pub(crate) groups: Vec<Option<Span>>,
}

/// The boundary to the external engine. Everything above this type deals in
/// subjects, offsets, and spans; nothing else touches the engine's API.
#[derive(Debug)]
pub(crate) struct Engine {
    re: meta::Regex,
    anchored: bool,
}

impl Engine {
    pub(crate) fn compile(pattern: &str, options: &Options) -> Result<Self, Error> {
        let hir = ParserBuilder::new()
            .case_insensitive(options.caseless)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_all)
            .ignore_whitespace(options.extended)
            .swap_greed(options.ungreedy)
            .crlf(options.crlf)
            .unicode(options.unicode)
            .build()
            .parse(pattern)
            .map_err(syntax_error)?;

        let re = meta::Regex::builder()
            .build_from_hir(&hir)
            .map_err(|e| Error::Compile {
                message: e.to_string(),
                offset: 0,
            })?;

        Ok(Self {
            re,
            anchored: options.anchored,
        })
    }

    /// Number of capture groups, counting the implicit whole-match group.
    /// Fixed for the lifetime of the compiled pattern.
    pub(crate) fn group_len(&self) -> usize {
        self.re.captures_len()
    }

    /// Group names in positional order, starting at the whole match (which
    /// is never named).
    pub(crate) fn group_names<'a>(&'a self) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.re.group_info().pattern_names(PatternID::ZERO)
    }

    /// One shot of the execution primitive: attempt a single match beginning
    /// at or after `start`.
    pub(crate) fn execute(&self, subject: &str, start: usize) -> Result<Option<RawMatch>, Error> {
        if start > subject.len() || !subject.is_char_boundary(start) {
            return Err(Error::BadOffset {
                offset: start,
                subject_len: subject.len(),
            });
        }

        let anchored = if self.anchored {
            Anchored::Yes
        } else {
            Anchored::No
        };
        let input = Input::new(subject).range(start..).anchored(anchored);

        let mut caps = self.re.create_captures();
        self.re.search_captures(&input, &mut caps);
        if !caps.is_match() {
            return Ok(None);
        }

        let Some(whole) = caps.get_group(0) else {
            return Ok(None);
        };
        let groups = (1..caps.group_len()).map(|i| caps.get_group(i)).collect();
        Ok(Some(RawMatch { whole, groups }))
    }
}

fn syntax_error(err: regex_syntax::Error) -> Error {
    match err {
        regex_syntax::Error::Parse(e) => Error::Compile {
            message: e.kind().to_string(),
            offset: e.span().start.offset,
        },
        regex_syntax::Error::Translate(e) => Error::Compile {
            message: e.kind().to_string(),
            offset: e.span().start.offset,
        },
        e => Error::Compile {
            message: e.to_string(),
            offset: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{Engine, Error, Options};

    #[test]
    fn compile_error_carries_offset() {
        let err = Engine::compile("(unclosed", &Options::default()).unwrap_err();
        match err {
            Error::Compile { offset, .. } => assert!(offset <= "(unclosed".len()),
            other => panic!("expected compile error, got {other:?}"),
        }
    }

    #[test]
    fn execute_past_end_is_a_fault() {
        let e = Engine::compile("a", &Options::default()).unwrap();
        assert!(matches!(
            e.execute("abc", 9),
            Err(Error::BadOffset {
                offset: 9,
                subject_len: 3
            })
        ));
    }

    #[test]
    fn execute_inside_a_character_is_a_fault() {
        let e = Engine::compile("a", &Options::default()).unwrap();
        assert!(matches!(
            e.execute("é", 1),
            Err(Error::BadOffset { offset: 1, .. })
        ));
    }

    #[test]
    fn execute_at_subject_end_is_valid() {
        let e = Engine::compile("x?", &Options::default()).unwrap();
        let raw = e.execute("ab", 2).unwrap().unwrap();
        assert_eq!((raw.whole.start, raw.whole.end), (2, 2));
    }

    #[test]
    fn unset_group_reported_as_none() {
        let e = Engine::compile("(a)|(b)", &Options::default()).unwrap();
        let raw = e.execute("b", 0).unwrap().unwrap();
        assert_eq!(raw.groups.len(), 2);
        assert!(raw.groups[0].is_none());
        let g2 = raw.groups[1].unwrap();
        assert_eq!((g2.start, g2.end), (0, 1));
    }

    #[test]
    fn caseless_option() {
        let opts = Options {
            caseless: true,
            ..Options::default()
        };
        let e = Engine::compile("abc", &opts).unwrap();
        assert!(e.execute("xABCx", 0).unwrap().is_some());
    }

    #[test]
    fn anchored_option() {
        let opts = Options {
            anchored: true,
            ..Options::default()
        };
        let e = Engine::compile("b", &opts).unwrap();
        assert!(e.execute("abc", 0).unwrap().is_none());
        assert!(e.execute("abc", 1).unwrap().is_some());
    }
}
