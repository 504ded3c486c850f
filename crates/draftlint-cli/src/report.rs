//! Warning formatting: a padded excerpt of the offending line, a caret
//! underline, and the rule's id and brief.

use draftlint_engine::Violation;
use draftlint_rules::Span;
use serde::Serialize;
use std::path::Path;

/// Context kept on each side of the excerpt, in bytes.
const EXCERPT_PADDING: usize = 10;

/// One violation in `--format json` output.
#[derive(Debug, Serialize)]
pub struct Record {
    pub file: String,
    pub line: usize,
    pub span: Span,
    pub rule: u32,
    pub brief: String,
}

impl Record {
    pub fn new(path: &Path, line: usize, violation: &Violation) -> Self {
        Self {
            file: path.display().to_string(),
            line,
            span: violation.span,
            rule: violation.rule.id(),
            brief: violation.rule.brief().to_string(),
        }
    }
}

pub fn print_warning(path: &Path, lineno: usize, line: &str, violation: &Violation) {
    let span = violation.span;
    let prefix = format!("{}:{}:{}:", path.display(), lineno, span.start);

    let (excerpt, caret_start) = pad_excerpt(line, span, EXCERPT_PADDING);
    let excerpt = if violation.rule.show_spaces() {
        excerpt.replace(' ', "_")
    } else {
        excerpt
    };

    println!("{prefix} {excerpt}");
    println!(
        "{}{}",
        " ".repeat(prefix.len() + caret_start + 1),
        "^".repeat(span.len().max(1))
    );
    println!("\t[{:03}] {}", violation.rule.id(), violation.rule.brief());
    println!();
}

/// Cuts an excerpt of up to `size` bytes around `span`, with `...`
/// marking truncation. Returns the excerpt and the index the caret
/// underline starts at within it.
fn pad_excerpt(text: &str, span: Span, size: usize) -> (String, usize) {
    let left_start = boundary_before(text, span.start.saturating_sub(size));
    let right_end = boundary_after(text, (span.end + size).min(text.len()));

    let left = &text[left_start..span.start];
    let right = &text[span.end..right_end];

    let mut excerpt = String::new();
    let mut caret_start = left.len();
    if left.len() >= size {
        excerpt.push_str("...");
        caret_start += 3;
    }
    excerpt.push_str(left);
    excerpt.push_str(&text[span.start..span.end]);
    excerpt.push_str(right);
    if right.len() >= size {
        excerpt.push_str("...");
    }
    (excerpt, caret_start)
}

// The padding arithmetic can land inside a multi-byte character; the
// violation span itself always sits on match boundaries.
fn boundary_before(text: &str, mut idx: usize) -> usize {
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn boundary_after(text: &str, mut idx: usize) -> usize {
    while idx < text.len() && !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}
