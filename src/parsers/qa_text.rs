use crate::error::{DialogSetError, Result};
use crate::models::{Dataset, Message, MessageRole, Session};

/// Options controlling how tolerant the parser is of bad lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Abort on the first malformed or empty-content line instead of skipping it
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A `q:`/`a:` marker with nothing after it
    EmptyContent(MessageRole),
    /// A non-blank line without a role marker
    MissingMarker,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::EmptyContent(role) => write!(f, "no content after '{}'", role.marker()),
            SkipReason::MissingMarker => write!(f, "line does not start with 'q:' or 'a:'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// Per-run diagnostics collected alongside the dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub lines_read: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

struct Line<'a> {
    number: usize,
    text: &'a str,
}

enum LineKind<'a> {
    Blank,
    Turn(MessageRole, &'a str),
    Malformed,
}

/// Split on `\r\n`, lone `\r` or `\n`. A terminator at the very end does not start
/// another line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                let line = &rest[..pos];
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Whitespace plus the ASCII file/group/record/unit separators (`\x1c`-`\x1f`)
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

fn strip(text: &str) -> &str {
    text.trim_matches(is_strippable)
}

impl<'a> Line<'a> {
    fn classify(&self) -> LineKind<'a> {
        let text = strip(self.text);
        if text.is_empty() {
            return LineKind::Blank;
        }

        for role in MessageRole::all() {
            if let Some(rest) = text.strip_prefix(role.marker()) {
                return LineKind::Turn(role, strip(rest));
            }
        }

        LineKind::Malformed
    }
}

/// Parser for `q:`/`a:` dialogue text where blank lines separate sessions
#[derive(Debug, Clone, Default)]
pub struct QaTextParser {
    options: ParseOptions,
}

impl QaTextParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Scan `content` line by line and build the dataset.
    ///
    /// Messages keep their input order; sessions are appended in the order they close.
    /// Sessions without messages are never emitted.
    pub fn parse(&self, content: &str) -> Result<(Dataset, ParseReport)> {
        let mut dataset = Dataset::new();
        let mut report = ParseReport::default();
        let mut current = Session::new();

        for (index, text) in split_lines(content).enumerate() {
            let line = Line {
                number: index + 1,
                text,
            };
            report.lines_read += 1;

            match line.classify() {
                LineKind::Blank => {
                    if !current.is_empty() {
                        let closed = std::mem::take(&mut current);
                        tracing::info!(
                            line = line.number,
                            messages = closed.len(),
                            "Session closed at blank line"
                        );
                        dataset.close_session(closed);
                    }
                }
                LineKind::Turn(role, body) if !body.is_empty() => {
                    tracing::info!(line = line.number, role = %role, content = body, "Message");
                    let message = Message::new(role, body);
                    debug_assert!(message.is_valid());
                    current.push(message);
                }
                LineKind::Turn(role, _) => {
                    self.skip(&mut report, &line, SkipReason::EmptyContent(role))?;
                }
                LineKind::Malformed => {
                    self.skip(&mut report, &line, SkipReason::MissingMarker)?;
                }
            }
        }

        if !current.is_empty() {
            tracing::info!(messages = current.len(), "Session closed at end of input");
            dataset.close_session(current);
        }

        tracing::debug!(
            lines = report.lines_read,
            sessions = dataset.len(),
            skipped = report.skipped_count(),
            "Parsed dialogue text"
        );

        Ok((dataset, report))
    }

    fn skip(&self, report: &mut ParseReport, line: &Line<'_>, reason: SkipReason) -> Result<()> {
        let text = strip(line.text);
        if self.options.strict {
            return Err(DialogSetError::malformed_line(
                line.number,
                format!("{reason}: {text}"),
            ));
        }

        tracing::warn!(line = line.number, reason = %reason, text = text, "Skipping line");
        report.skipped.push(SkippedLine {
            line: line.number,
            text: text.to_string(),
            reason,
        });
        Ok(())
    }
}
