use super::Pattern;

/// Replace the first match. The output is a fresh buffer; the subject is
/// never mutated.
pub(super) fn first(pattern: &Pattern, subject: &str, replacement: &str) -> String {
    let Ok(Some(raw)) = pattern.engine.execute(subject, 0) else {
        return subject.to_string();
    };

    let mut out = String::with_capacity(subject.len() + replacement.len());
    out.push_str(&subject[..raw.whole.start]);
    out.push_str(replacement);
    out.push_str(&subject[raw.whole.end..]);
    out
}

/// Replace every match. Each extraction runs against the current working
/// text, so context-sensitive assertions at the resume point see the text
/// as already rewritten. The scan resumes just past each inserted
/// replacement, so the inserted text is never itself rescanned. Every
/// splice builds a fresh buffer; the engine's spans always refer to the
/// buffer it searched.
pub(super) fn all(pattern: &Pattern, subject: &str, replacement: &str) -> String {
    let mut text = subject.to_string();
    let mut offset = 0;

    while offset <= text.len() {
        let raw = match pattern.engine.execute(&text, offset) {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(_) => break,
        };

        let mut spliced = String::with_capacity(text.len() + replacement.len());
        spliced.push_str(&text[..raw.whole.start]);
        spliced.push_str(replacement);
        spliced.push_str(&text[raw.whole.end..]);
        text = spliced;

        offset = raw.whole.start + replacement.len();

        if raw.whole.end == raw.whole.start {
            // a zero-length match leaves the resume point where the match
            // was; step over one character so the scan always advances
            match text[offset..].chars().next() {
                Some(c) => offset += c.len_utf8(),
                None => break,
            }
        }
    }

    text
}
