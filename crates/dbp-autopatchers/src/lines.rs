//! Per-line rewriting of text files
//!
//! Contents are handled as raw bytes split on `\n`. Nothing is normalized: a
//! trailing newline produces an empty final line, and joining the lines back
//! with `\n` reproduces the input exactly when no line is edited.

use bstr::ByteSlice;

/// What to do with a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit<'a> {
    /// Pass the line through unchanged
    Keep,
    /// Drop the line from the output
    Delete,
    /// Emit this text in place of the line
    Replace(&'a [u8]),
}

/// A substring match paired with the edit to apply on a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRule {
    needle: &'static str,
    edit: LineEdit<'static>,
}

impl LineRule {
    /// Delete every line containing `needle`
    pub const fn delete(needle: &'static str) -> Self {
        Self {
            needle,
            edit: LineEdit::Delete,
        }
    }

    /// Replace every line containing `needle` with `replacement`
    pub const fn replace(needle: &'static str, replacement: &'static str) -> Self {
        Self {
            needle,
            edit: LineEdit::Replace(replacement.as_bytes()),
        }
    }

    pub fn needle(&self) -> &'static str {
        self.needle
    }

    pub fn edit(&self) -> LineEdit<'static> {
        self.edit
    }

    /// Returns the edit for `line` if it contains this rule's needle
    pub fn apply(&self, line: &[u8]) -> Option<LineEdit<'static>> {
        line.contains_str(self.needle).then_some(self.edit)
    }
}

/// Counts of edits made by a rewrite pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub deleted: usize,
    pub replaced: usize,
}

impl RewriteStats {
    pub fn is_unchanged(&self) -> bool {
        self.deleted == 0 && self.replaced == 0
    }
}

/// Split `contents` on `\n` without dropping an empty trailing segment
pub fn split_lines(contents: &[u8]) -> Vec<&[u8]> {
    contents.split(|&b| b == b'\n').collect()
}

/// Join `lines` with `\n` separators
pub fn join_lines(lines: &[&[u8]]) -> Vec<u8> {
    lines.join(&b'\n')
}

/// Classify `line` against `rules` in order; the first matching rule wins
pub fn classify(rules: &[LineRule], line: &[u8]) -> LineEdit<'static> {
    rules
        .iter()
        .find_map(|rule| rule.apply(line))
        .unwrap_or(LineEdit::Keep)
}

/// Rewrite `contents` in a single forward pass
///
/// Each input line is classified exactly once by `edit_for` and the result
/// is collected into a new line sequence, so a deletion never causes the
/// following line to be skipped.
pub fn rewrite_lines<'a, F>(contents: &'a [u8], mut edit_for: F) -> (Vec<u8>, RewriteStats)
where
    F: FnMut(&'a [u8]) -> LineEdit<'a>,
{
    let mut stats = RewriteStats::default();
    let mut output: Vec<&'a [u8]> = Vec::new();

    for line in split_lines(contents) {
        match edit_for(line) {
            LineEdit::Keep => output.push(line),
            LineEdit::Delete => stats.deleted += 1,
            LineEdit::Replace(replacement) => {
                stats.replaced += 1;
                output.push(replacement);
            }
        }
    }

    (join_lines(&output), stats)
}

/// Rewrite `contents` using an ordered rule table
pub fn rewrite_with_rules(contents: &[u8], rules: &[LineRule]) -> (Vec<u8>, RewriteStats) {
    rewrite_lines(contents, |line| classify(rules, line))
}
