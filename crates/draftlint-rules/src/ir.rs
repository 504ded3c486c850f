use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into one line of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Translates a chunk-relative span into a line-absolute one.
    pub fn shift(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

/// The structural zone a piece of text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Running text, the document-level default.
    Prose,
    /// A math environment or inline math span.
    Math,
    /// An environment the tracker does not know about.
    Unrecognized,
}

/// Which contexts a rule applies to.
///
/// A rule scoped to `Prose` or `Math` deterministically produces no
/// output in any other context; that is a filter, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Any,
    Prose,
    Math,
}

impl Scope {
    pub fn admits(self, context: Context) -> bool {
        match self {
            Scope::Any => true,
            Scope::Prose => context == Context::Prose,
            Scope::Math => context == Context::Math,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_shift_translates_both_ends() {
        let span = Span::new(2, 5).shift(10);
        assert_eq!(span, Span::new(12, 15));
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn scope_admission() {
        assert!(Scope::Any.admits(Context::Unrecognized));
        assert!(Scope::Prose.admits(Context::Prose));
        assert!(!Scope::Prose.admits(Context::Math));
        assert!(!Scope::Math.admits(Context::Prose));
        assert!(!Scope::Math.admits(Context::Unrecognized));
    }
}
