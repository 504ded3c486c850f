use draftlint_rules::Context;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Non-greedy so `$a$ and $b$` yields two spans, not one. Nested
    // math is deliberately unsupported.
    static ref INLINE_MATH_RE: Regex =
        Regex::new(r"(?:\$\$|\$|\\\[).+?(?:\$\$|\$|\\\])").expect("inline math pattern");
}

/// A contiguous slice of one line, tagged with the context it is
/// checked in and its byte offset within the original line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub text: &'a str,
    pub context: Context,
    pub offset: usize,
}

/// Splits one line into alternating outer-context and inline-math
/// chunks.
///
/// The output always starts and ends with a (possibly empty) chunk
/// tagged `outer`, and chunk offsets are contiguous: each chunk's
/// offset plus its length is the next chunk's offset, and the chunks
/// concatenate back to `line` exactly. Downstream span translation
/// depends on both.
///
/// When `outer` is already math the whole line is a single math chunk;
/// there is no math-inside-math detection.
pub fn split_line<'a>(line: &'a str, outer: Context) -> Vec<Chunk<'a>> {
    if outer == Context::Math {
        return vec![Chunk {
            text: line,
            context: Context::Math,
            offset: 0,
        }];
    }

    let mut chunks = Vec::new();
    let mut cursor = 0;
    for m in INLINE_MATH_RE.find_iter(line) {
        chunks.push(Chunk {
            text: &line[cursor..m.start()],
            context: outer,
            offset: cursor,
        });
        chunks.push(Chunk {
            text: m.as_str(),
            context: Context::Math,
            offset: m.start(),
        });
        cursor = m.end();
    }
    chunks.push(Chunk {
        text: &line[cursor..],
        context: outer,
        offset: cursor,
    });
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_reassembles(line: &str, outer: Context) {
        let chunks = split_line(line, outer);
        let mut expected_offset = 0;
        let mut rebuilt = String::new();
        for chunk in &chunks {
            assert_eq!(chunk.offset, expected_offset, "offset gap in {line:?}");
            assert_eq!(&line[chunk.offset..chunk.offset + chunk.text.len()], chunk.text);
            expected_offset += chunk.text.len();
            rebuilt.push_str(chunk.text);
        }
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn plain_prose_is_one_chunk() {
        let chunks = split_line("no math here", Context::Prose);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].context, Context::Prose);
        assert_eq!(chunks[0].offset, 0);
        assert_reassembles("no math here", Context::Prose);
    }

    #[test]
    fn inline_math_alternates_with_prose() {
        let line = r"the value $x+1$ grows";
        let chunks = split_line(line, Context::Prose);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, "the value ");
        assert_eq!(chunks[0].context, Context::Prose);
        assert_eq!(chunks[1].text, "$x+1$");
        assert_eq!(chunks[1].context, Context::Math);
        assert_eq!(chunks[1].offset, 10);
        assert_eq!(chunks[2].text, " grows");
        assert_eq!(chunks[2].offset, 15);
        assert_reassembles(line, Context::Prose);
    }

    #[test]
    fn multiple_spans_stay_separate() {
        let line = r"$a$ and $b$";
        let chunks = split_line(line, Context::Prose);
        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks[0].text, "");
        assert_eq!(chunks[1].text, "$a$");
        assert_eq!(chunks[2].text, " and ");
        assert_eq!(chunks[3].text, "$b$");
        assert_eq!(chunks[4].text, "");
        assert_reassembles(line, Context::Prose);
    }

    #[test]
    fn double_dollar_and_bracket_delimiters() {
        let chunks = split_line("$$ 1 + 1 = 2 $$", Context::Prose);
        assert_eq!(chunks[1].text, "$$ 1 + 1 = 2 $$");
        assert_eq!(chunks[1].context, Context::Math);
        assert_reassembles("$$ 1 + 1 = 2 $$", Context::Prose);

        let chunks = split_line(r"see \[ x \] here", Context::Prose);
        assert_eq!(chunks[1].text, r"\[ x \]");
        assert_reassembles(r"see \[ x \] here", Context::Prose);
    }

    #[test]
    fn math_outer_context_is_never_split() {
        let line = r"x = $y$ + z";
        let chunks = split_line(line, Context::Math);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, line);
        assert_eq!(chunks[0].context, Context::Math);
        assert_eq!(chunks[0].offset, 0);
    }

    #[test]
    fn unrecognized_outer_context_tags_outer_chunks() {
        let chunks = split_line("plain $m$ tail", Context::Unrecognized);
        assert_eq!(chunks[0].context, Context::Unrecognized);
        assert_eq!(chunks[1].context, Context::Math);
        assert_eq!(chunks[2].context, Context::Unrecognized);
    }

    #[test]
    fn empty_line_is_one_empty_chunk() {
        let chunks = split_line("", Context::Prose);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "");
        assert_eq!(chunks[0].offset, 0);
    }
}
