//! # draftlint engine
//!
//! Line-oriented dispatch pipeline for the draftlint rule catalog.
//!
//! The engine consumes a document one line at a time and yields
//! `(rule, absolute span)` violations. It does not parse LaTeX: block
//! structure is approximated with line-anchored `\begin`/`\end` markers
//! and inline math with regex-delimited `$..$` spans, which is all a
//! linter needs.
//!
//! ```text
//! ┌───────────┐ observe() ┌────────────────────┐ split_line() ┌────────┐
//! │ next line │ ─────────► │ EnvironmentTracker │ ───────────► │ chunks │
//! └───────────┘            └────────────────────┘              └────────┘
//!                                                                  │
//!                                              every rule, in id order
//!                                                                  ▼
//!                                                  Vec<Violation> (chunk
//!                                                  offsets reapplied)
//! ```
//!
//! One [`Validator`] owns one [`EnvironmentTracker`](tracker::EnvironmentTracker)
//! for the lifetime of one document; the
//! [`Registry`](draftlint_rules::Registry) it borrows is read-only and
//! can back any number of validators at once, one per file.
//!
//! ```
//! use draftlint_engine::Validator;
//! use draftlint_rules::Registry;
//!
//! let registry = Registry::with_default_rules()?;
//! let mut validator = Validator::new(&registry);
//! let violations = validator.validate(r"Napoleonic war.\cite{smith08}");
//! assert!(!violations.is_empty());
//! # Ok::<(), draftlint_rules::RegistryError>(())
//! ```

/// Prose/math chunk splitting with offset bookkeeping.
pub mod splitter;
/// The `\begin`/`\end` environment stack.
pub mod tracker;
/// Per-line orchestration.
pub mod validator;

pub use splitter::{Chunk, split_line};
pub use tracker::EnvironmentTracker;
pub use validator::{Validator, Violation};
