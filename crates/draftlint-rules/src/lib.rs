//! # draftlint rule catalog
//!
//! Violation-detecting rules for LaTeX sources, plus the registry that
//! holds them.
//!
//! A [`Rule`] takes a chunk of text and the [`Context`] it sits in
//! (prose, math, or an unrecognized environment) and yields the spans
//! that violate it. Three kinds of rule live behind the one `evaluate`
//! contract:
//!
//! - **Pattern rules** wrap a single regular expression; every
//!   non-overlapping match is a violation.
//! - **Filtered pattern rules** vet each match with a small predicate
//!   (used where the original pattern would need a backreference or
//!   lookahead, which the `regex` crate does not support).
//! - The **quote-pair balancer** in [`quotes`] correlates openers and
//!   closers across the whole chunk with a pending-opener stack.
//!
//! The [`Registry`] is an immutable value built once at startup via
//! [`Registry::with_default_rules`] and shared by reference with every
//! validator; rule ids are assigned in registration order and stay
//! stable for the lifetime of the registry. A malformed pattern fails
//! registration with a [`RegistryError`], never a per-line error.
//!
//! ```
//! use draftlint_rules::{Context, Registry};
//!
//! let registry = Registry::with_default_rules()?;
//! let rule = registry.iter().next().unwrap();
//! assert!(rule.evaluate("", Context::Prose).is_empty());
//! # Ok::<(), draftlint_rules::RegistryError>(())
//! ```

mod catalog;
/// Span and context types shared across the linter.
pub mod ir;
/// Stateful quote-pair balancing.
pub mod quotes;
/// The append-once, read-only rule registry.
pub mod registry;
/// The `Rule` type and its evaluation contract.
pub mod rule;

pub use ir::{Context, Scope, Span};
pub use registry::{Meta, Registry, RegistryBuilder, RegistryError};
pub use rule::{Example, ExampleKind, Rule};
