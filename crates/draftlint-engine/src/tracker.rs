use draftlint_rules::Context;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BEGIN_RE: Regex = Regex::new(r"^\\begin\{(\w+)\}").expect("begin marker pattern");
    static ref END_RE: Regex = Regex::new(r"^\\end\{(\w+)\}").expect("end marker pattern");
}

/// Maps an environment name to the context its body is checked in.
/// Anything outside the known sets opts out of context-specific rules
/// without failing.
fn classify(name: &str) -> Context {
    match name {
        "math" | "array" | "eqnarray" | "equation" | "align" => Context::Math,
        "abstract" | "document" | "titlepage" => Context::Prose,
        _ => Context::Unrecognized,
    }
}

/// Stack machine tracking which environment the current line sits in.
///
/// Markers are only recognized at the start of a line; a `\begin` or
/// `\end` after other content on the same line is invisible. `\end`
/// pops unconditionally, whatever its name — begin/end name matching is
/// the document author's problem, not the tracker's.
///
/// The base `Prose` entry is never popped: an `\end` at document level
/// is tolerated as a no-op, since unbalanced input is the linter's
/// bread and butter, not an error.
pub struct EnvironmentTracker {
    stack: Vec<Context>,
}

impl Default for EnvironmentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentTracker {
    pub fn new() -> Self {
        Self {
            stack: vec![Context::Prose],
        }
    }

    /// Updates the stack from the line's leading structural marker, if
    /// there is one.
    pub fn observe(&mut self, line: &str) {
        if let Some(caps) = BEGIN_RE.captures(line) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            self.stack.push(classify(name));
        }
        if END_RE.is_match(line) {
            if self.stack.len() > 1 {
                self.stack.pop();
            } else {
                log::debug!("\\end marker with no open environment; staying at document level");
            }
        }
    }

    /// The context of the innermost open environment.
    pub fn current(&self) -> Context {
        self.stack.last().copied().unwrap_or(Context::Prose)
    }

    /// Current nesting depth, counting the implicit document level.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
