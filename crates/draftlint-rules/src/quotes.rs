//! Quote-pair balancing.
//!
//! LaTeX quotations open with `` ` `` or `` `` `` and close with `'` or
//! `''`. A single linear scan over the chunk finds openers (a quote
//! preceded by a space or the start of the chunk) and closers (a quote
//! followed by a space, sentence punctuation, or the end of the chunk)
//! and pairs them with a stack of pending openers:
//!
//! - closer with nothing open: the closer's own span is reported;
//! - closer of the wrong style: the popped opener's span is reported,
//!   since the opener started the pair incorrectly;
//! - openers still pending at the end of the chunk are each reported at
//!   their own span.
//!
//! Violations come out in the order their triggering event occurs, not
//! sorted by position. There is no backtracking and no lookahead past
//! one token.

use crate::ir::Span;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref QUOTE_RE: Regex =
        Regex::new(r"(?: |^)(``|`)|(''|')(?:[ .,;:!?]|$)").expect("quote scanner pattern");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Single,
    Double,
}

fn style_of(mark: &str) -> Style {
    if mark.len() == 2 {
        Style::Double
    } else {
        Style::Single
    }
}

/// Scans one chunk and returns the spans of unbalanced or mismatched
/// quotation marks. Spans cover the whole scanner match, including the
/// adjoining space.
pub fn unbalanced_quote_spans(chunk: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut pending: Vec<(Style, Span)> = Vec::new();

    for caps in QUOTE_RE.captures_iter(chunk) {
        let whole = match caps.get(0) {
            Some(m) => Span::new(m.start(), m.end()),
            None => continue,
        };
        if let Some(opener) = caps.get(1) {
            pending.push((style_of(opener.as_str()), whole));
        } else if let Some(closer) = caps.get(2) {
            match pending.pop() {
                None => spans.push(whole),
                Some((open_style, open_span)) => {
                    if open_style != style_of(closer.as_str()) {
                        spans.push(open_span);
                    }
                }
            }
        }
    }

    // Whatever never got closed, in the order it was opened.
    spans.extend(pending.into_iter().map(|(_, span)| span));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_pairs_are_clean() {
        assert!(unbalanced_quote_spans("He said, `hello'.").is_empty());
        assert!(unbalanced_quote_spans("``Very much indeed,'' Alice said.").is_empty());
    }

    #[test]
    fn unclosed_opener_reported_at_opener() {
        let spans = unbalanced_quote_spans("``Very much indeed, Alice said politely.");
        assert_eq!(spans, vec![Span::new(0, 2)]);
    }

    #[test]
    fn closer_without_opener_reported_at_closer() {
        let spans = unbalanced_quote_spans("indeed,'' Alice said politely.");
        // The span includes the space that follows the closer.
        assert_eq!(spans, vec![Span::new(7, 10)]);
    }

    #[test]
    fn style_mismatch_reported_at_opener() {
        let spans = unbalanced_quote_spans("``Very much indeed,' Alice said politely.");
        assert_eq!(spans, vec![Span::new(0, 2)]);

        let spans = unbalanced_quote_spans("`hello,'' she said.");
        assert_eq!(spans, vec![Span::new(0, 1)]);
    }

    #[test]
    fn violations_in_event_order_not_position_order() {
        // A stray closer early and an unclosed opener later: the closer
        // event fires during the scan, the opener only at end of chunk.
        let spans = unbalanced_quote_spans("oops' then ``left open");
        assert_eq!(spans, vec![Span::new(4, 6), Span::new(10, 13)]);
    }

    #[test]
    fn empty_chunk_is_clean() {
        assert!(unbalanced_quote_spans("").is_empty());
    }
}
