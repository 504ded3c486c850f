use crate::ir::Scope;
use crate::rule::{Check, Example, MatchFilter, Rule};
use regex::Regex;
use thiserror::Error;

/// A malformed rule definition. Fatal at startup, never per-line.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid pattern `{pattern}` for rule \"{brief}\"")]
    InvalidPattern {
        pattern: String,
        brief: String,
        #[source]
        source: regex::Error,
    },
}

/// The ordered, read-only collection of registered rules.
///
/// Built once at process start and shared by reference with every
/// validator; safe to share across threads since evaluation never
/// mutates it.
pub struct Registry {
    rules: Vec<Rule>,
}

impl Registry {
    /// Builds the full default rule catalog.
    pub fn with_default_rules() -> Result<Self, RegistryError> {
        crate::catalog::default_rules()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks a rule up by its 1-based id.
    pub fn get(&self, id: u32) -> Option<&Rule> {
        self.rules.get((id as usize).checked_sub(1)?)
    }
}

/// Metadata shared by every registration strategy.
///
/// `scope` defaults to prose, matching the overwhelming majority of the
/// catalog; `show_spaces` defaults to off.
pub struct Meta {
    pub brief: &'static str,
    pub detail: Option<&'static str>,
    pub examples: &'static [Example],
    pub show_spaces: bool,
    pub scope: Scope,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            brief: "",
            detail: None,
            examples: &[],
            show_spaces: false,
            scope: Scope::Prose,
        }
    }
}

/// Append-only builder; ids are assigned in push order, starting at 1.
#[derive(Default)]
pub struct RegistryBuilder {
    rules: Vec<Rule>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Registry {
        Registry { rules: self.rules }
    }

    /// Registers a plain pattern rule.
    pub fn pattern(&mut self, pattern: &str, meta: Meta) -> Result<&mut Self, RegistryError> {
        let regex = self.compile(pattern, meta.brief)?;
        self.push(Check::Pattern(regex), meta.brief.to_string(), meta);
        Ok(self)
    }

    /// Registers a pattern rule whose matches are vetted by a predicate.
    pub fn filtered(
        &mut self,
        pattern: &str,
        accept: MatchFilter,
        meta: Meta,
    ) -> Result<&mut Self, RegistryError> {
        let regex = self.compile(pattern, meta.brief)?;
        self.push(Check::Filtered { regex, accept }, meta.brief.to_string(), meta);
        Ok(self)
    }

    /// Registers the stateful quote-pair balancer.
    pub fn quote_pairs(&mut self, meta: Meta) -> &mut Self {
        self.push(Check::QuotePairs, meta.brief.to_string(), meta);
        self
    }

    /// Registers one rule per `(pattern, replacement)` row, with the
    /// brief produced by filling `template`'s `{}` with the row's
    /// replacement text.
    pub fn family<'a, I>(
        &mut self,
        template: &str,
        scope: Scope,
        rows: I,
    ) -> Result<&mut Self, RegistryError>
    where
        I: IntoIterator<Item = (String, &'a str)>,
    {
        for (pattern, replacement) in rows {
            let brief = template.replace("{}", replacement);
            let regex = self.compile(&pattern, &brief)?;
            self.push(
                Check::Pattern(regex),
                brief,
                Meta {
                    scope,
                    ..Meta::default()
                },
            );
        }
        Ok(self)
    }

    fn compile(&self, pattern: &str, brief: &str) -> Result<Regex, RegistryError> {
        Regex::new(pattern).map_err(|source| RegistryError::InvalidPattern {
            pattern: pattern.to_string(),
            brief: brief.to_string(),
            source,
        })
    }

    fn push(&mut self, check: Check, brief: String, meta: Meta) {
        let id = self.rules.len() as u32 + 1;
        self.rules.push(Rule {
            id,
            brief,
            detail: meta.detail,
            examples: meta.examples,
            show_spaces: meta.show_spaces,
            scope: meta.scope,
            check,
        });
    }
}
