use crate::splitter::split_line;
use crate::tracker::EnvironmentTracker;
use draftlint_rules::{Context, Registry, Rule, Span};

/// One rule violation, with its span translated back into the original
/// line.
#[derive(Debug, Clone, Copy)]
pub struct Violation<'r> {
    pub rule: &'r Rule,
    pub span: Span,
}

/// Per-document orchestrator.
///
/// Owns the environment stack for exactly one document, so lines must
/// be fed in order and two documents must not share a validator. The
/// borrowed registry is read-only and freely shared.
pub struct Validator<'r> {
    registry: &'r Registry,
    tracker: EnvironmentTracker,
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            tracker: EnvironmentTracker::new(),
        }
    }

    /// Checks one line and returns its violations.
    ///
    /// The tracker is updated first, so a line opening a math block is
    /// itself checked in math context. Violations come out in a stable
    /// order: by chunk position, then rule registration order, then
    /// within-rule discovery order.
    pub fn validate(&mut self, line: &str) -> Vec<Violation<'r>> {
        self.tracker.observe(line);

        let mut violations = Vec::new();
        for chunk in split_line(line, self.tracker.current()) {
            for rule in self.registry.iter() {
                for span in rule.evaluate(chunk.text, chunk.context) {
                    violations.push(Violation {
                        rule,
                        span: span.shift(chunk.offset),
                    });
                }
            }
        }
        violations
    }

    /// The context the next line will start in.
    pub fn context(&self) -> Context {
        self.tracker.current()
    }
}
