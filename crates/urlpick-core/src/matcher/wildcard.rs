//! Wildcard patterns: `*` matches any run of characters, `\*` is a literal
//! asterisk, everything else is literal.

use regex::{Regex, RegexBuilder};

use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Stands in for `\*` while the remaining `*` are translated. No other step
/// can produce it.
const ESCAPED_ASTERISK: char = '\u{0}';

/// Characters escaped before the pattern is handed to the regex engine.
const REGEX_META: &[char] = &[
    '.', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Upper bound on compiled program size; matches the regex crate default.
const SIZE_LIMIT: usize = 10 * (1 << 20);

/// A wildcard pattern compiled once at config load.
#[derive(Debug, Clone)]
pub struct Wildcard {
    pattern: String,
    regex: Option<Regex>,
}

impl Wildcard {
    /// Compiles `pattern`. A pattern that does not compile is reported to
    /// `sink` and kept as a wildcard that never matches.
    pub fn new(pattern: &str, sink: &dyn DiagnosticSink) -> Self {
        Self::with_size_limit(pattern, SIZE_LIMIT, sink)
    }

    pub(crate) fn with_size_limit(
        pattern: &str,
        size_limit: usize,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        let regex = match compile(pattern, size_limit) {
            Ok(regex) => Some(regex),
            Err(err) => {
                sink.emit(Diagnostic::InvalidWildcard {
                    pattern: pattern.to_string(),
                    reason: err.to_string(),
                });
                None
            }
        };
        Self {
            pattern: pattern.to_string(),
            regex,
        }
    }

    /// The pattern as written in the config.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// False when compilation failed.
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    /// Unanchored search of the compiled pattern in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(haystack))
    }
}

/// Translates a wildcard pattern into regex source.
///
/// `\*` becomes a sentinel first, so the later `*` → `.*` pass cannot touch
/// it; the sentinel is emitted as `\*` at the end.
pub fn translate(pattern: &str) -> String {
    let protected = pattern.replace("\\*", &ESCAPED_ASTERISK.to_string());
    let mut out = String::with_capacity(protected.len() * 2);
    for ch in protected.chars() {
        match ch {
            '*' => out.push_str(".*"),
            ESCAPED_ASTERISK => out.push_str("\\*"),
            c if REGEX_META.contains(&c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

fn compile(pattern: &str, size_limit: usize) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&translate(pattern))
        .size_limit(size_limit)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;

    #[test]
    fn translate_escapes_metacharacters() {
        assert_eq!(translate("*.example.com"), r".*\.example\.com");
        assert_eq!(translate("a+b?(c)"), r"a\+b\?\(c\)");
        assert_eq!(translate("x[1]{2}|^$"), r"x\[1\]\{2\}\|\^\$");
    }

    #[test]
    fn translate_keeps_escaped_asterisk_literal() {
        assert_eq!(translate(r"test\*literal"), r"test\*literal");
        assert_eq!(translate(r"a\**"), r"a\*.*");
    }

    #[test]
    fn translate_escapes_lone_backslash() {
        assert_eq!(translate(r"a\b*"), r"a\\b.*");
    }

    #[test]
    fn escaped_asterisk_only_matches_asterisk() {
        let sink = MemorySink::new();
        let w = Wildcard::new(r"test\*literal", &sink);
        assert!(w.is_valid());
        assert!(w.is_match("example.com/test*literal"));
        assert!(!w.is_match("example.com/testXliteral"));
        assert!(!w.is_match("example.com/test-anything-literal"));
        assert!(sink.is_empty());
    }

    #[test]
    fn search_is_unanchored() {
        let w = Wildcard::new("mail.*.com", &MemorySink::new());
        assert!(w.is_match("mail.google.com/"));
        assert!(w.is_match("x.mail.yahoo.com/inbox"));
        assert!(!w.is_match("mail.google.org/"));
    }

    #[test]
    fn compile_failure_reports_and_never_matches() {
        let sink = MemorySink::new();
        let w = Wildcard::with_size_limit("*.example.com", 16, &sink);
        assert!(!w.is_valid());
        assert!(!w.is_match("sub.example.com/"));
        assert_eq!(w.pattern(), "*.example.com");
        match sink.take().as_slice() {
            [Diagnostic::InvalidWildcard { pattern, .. }] => assert_eq!(pattern, "*.example.com"),
            other => panic!("expected one InvalidWildcard, got {:?}", other),
        }
    }
}
