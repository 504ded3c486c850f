use crate::ir::{Context, Scope, Span};
use regex::{Captures, Regex};

/// Whether an example shows correct or incorrect usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleKind {
    Good,
    Bad,
}

/// A before/after usage example attached to a rule.
///
/// Examples are structured metadata, not documentation: the regression
/// suite walks them and asserts the owning rule fires exactly on the
/// `Bad` ones.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub kind: ExampleKind,
    pub text: &'static str,
}

impl Example {
    pub const fn good(text: &'static str) -> Self {
        Self {
            kind: ExampleKind::Good,
            text,
        }
    }

    pub const fn bad(text: &'static str) -> Self {
        Self {
            kind: ExampleKind::Bad,
            text,
        }
    }
}

/// Predicate vetting a single regex match. Receives the whole chunk so
/// it can look at the text around the match.
pub(crate) type MatchFilter = fn(&str, &Captures) -> bool;

pub(crate) enum Check {
    /// Every non-overlapping match is a violation.
    Pattern(Regex),
    /// Matches are vetted by `accept`; rejected matches do not consume
    /// input, so overlapping true positives are still found.
    Filtered { regex: Regex, accept: MatchFilter },
    /// The stateful opener/closer balancer in [`crate::quotes`].
    QuotePairs,
}

/// One registered lint rule.
///
/// Immutable once registered. The id is 1-based and reflects
/// registration order; it is the identity the reporting side shows.
pub struct Rule {
    pub(crate) id: u32,
    pub(crate) brief: String,
    pub(crate) detail: Option<&'static str>,
    pub(crate) examples: &'static [Example],
    pub(crate) show_spaces: bool,
    pub(crate) scope: Scope,
    pub(crate) check: Check,
}

impl Rule {
    pub fn id(&self) -> u32 {
        self.id
    }

    /// One-line explanation shown next to each warning.
    pub fn brief(&self) -> &str {
        &self.brief
    }

    /// Longer explanation, when the rule has one.
    pub fn detail(&self) -> Option<&'static str> {
        self.detail
    }

    pub fn examples(&self) -> &'static [Example] {
        self.examples
    }

    /// Whether reports should render matched whitespace visibly.
    pub fn show_spaces(&self) -> bool {
        self.show_spaces
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Evaluates the rule against one chunk of text.
    ///
    /// Returns violation spans relative to `chunk`, in left-to-right
    /// discovery order. Never fails: a context outside the rule's
    /// scope, an empty chunk, or no match all yield an empty vector.
    pub fn evaluate(&self, chunk: &str, context: Context) -> Vec<Span> {
        if !self.scope.admits(context) {
            return Vec::new();
        }
        match &self.check {
            Check::Pattern(regex) => regex
                .find_iter(chunk)
                .map(|m| Span::new(m.start(), m.end()))
                .collect(),
            Check::Filtered { regex, accept } => filtered_matches(regex, *accept, chunk),
            Check::QuotePairs => crate::quotes::unbalanced_quote_spans(chunk),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("brief", &self.brief)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

fn filtered_matches(regex: &Regex, accept: MatchFilter, chunk: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut at = 0;
    while at <= chunk.len() {
        let Some(caps) = regex.captures_at(chunk, at) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        if accept(chunk, &caps) {
            spans.push(Span::new(whole.start(), whole.end()));
            at = next_boundary(chunk, whole.end().max(whole.start() + 1));
        } else {
            // Resume just past the rejected match's start so a later
            // overlapping match is not swallowed.
            at = next_boundary(chunk, whole.start() + 1);
        }
    }
    spans
}

/// Rounds `idx` up to the next char boundary.
fn next_boundary(chunk: &str, mut idx: usize) -> usize {
    while idx < chunk.len() && !chunk.is_char_boundary(idx) {
        idx += 1;
    }
    idx.min(chunk.len() + 1)
}
