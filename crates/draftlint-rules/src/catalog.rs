//! The default rule catalog.
//!
//! Registration order is load-bearing: a rule's id is its position in
//! this file, and report output refers to rules by that id.

use crate::ir::Scope;
use crate::registry::{Meta, Registry, RegistryBuilder, RegistryError};
use crate::rule::Example;
use regex::Captures;

/// Mispunctuated abbreviations and their corrected forms. Rows are
/// regex fragments, wrapped in `\b..\b` at registration.
const ABBREVIATION_FIXES: &[(&str, &str)] = &[
    (r"et\. al\.", "et al."),
    (r"etc[^\.]", "etc."),
    (r"i\.e[^\.]", "i.e."),
    (r"e\.g[^\.]", "e.g."),
    (r"Dr\.", "Dr"),
];

/// Plain-TeX font commands and their LaTeX2e replacements.
const OBSOLETE_COMMANDS: &[(&str, &str)] = &[
    ("rm", "textrm"),
    ("tt", "texttt"),
    ("it", "textit"),
    ("bf", "textbf"),
    ("sc", "textsc"),
    ("sf", "textsf"),
    ("sl", "textsl"),
    ("over", "frac"),
    ("centerline", "centering"),
];

const OBSOLETE_PACKAGES: &[(&str, &str)] = &[
    ("a4", "a4paper"),
    ("a4wide", "a4paper"),
    ("t1enc", r"\usepackage[T1]{fontenc}"),
    ("umlaute", r"\usepackage[latin1]{inputenc}"),
    ("isolatin", r"\usepackage[isolatin]{inputenc}"),
    ("isolatin1", r"\usepackage[latin1]{inputenc}"),
    ("fancyheadings", "fancyhdr"),
    ("mathptm", "mathptmx"),
    ("mathpple", "mathpazo"),
    ("epsf", "graphicx"),
    ("epsfig", "graphicx"),
    ("doublespace", "setspace"),
    ("scrpage", "scrpage2"),
];

const OBSOLETE_ENVIRONMENTS: &[(&str, &str)] = &[
    ("eqnarray", r#""align" environment"#),
    ("appendix", r"\appendix command"),
];

/// Accepts a two-word match only when both words are identical and the
/// pair is not inside a brace group (e.g. a `\cite{foo foo}` key list).
fn words_duplicated(chunk: &str, caps: &Captures) -> bool {
    let (Some(whole), Some(first), Some(second)) = (caps.get(0), caps.get(1), caps.get(2)) else {
        return false;
    };
    if first.as_str() != second.as_str() {
        return false;
    }
    let rest = &chunk[whole.end()..];
    let stop = rest.find('{').unwrap_or(rest.len());
    !rest[..stop].contains('}')
}

/// Accepts an `e.g.`/`i.e.` match only when it is not already followed
/// by a `\ ` inner-word space.
fn lacks_interword_space(chunk: &str, caps: &Captures) -> bool {
    caps.get(0)
        .map(|m| !chunk[m.end()..].starts_with("\\ "))
        .unwrap_or(false)
}

pub(crate) fn default_rules() -> Result<Registry, RegistryError> {
    let mut b = RegistryBuilder::new();

    b.pattern(
        r"\s+\\footnote\{",
        Meta {
            brief: "Do not precede footnotes with spaces.",
            detail: Some("Remove the extraneous spaces before the \\footnote command."),
            examples: const { &[
                Example::bad(
                    r"Napolean's armies were defeated in Waterloo \footnote{In present day Belgium}.",
                ),
                Example::good(
                    r"Napolean's armies were defeated in Waterloo\footnote{In present day Belgium}.",
                ),
            ] },
            show_spaces: true,
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\.\\cite\{",
        Meta {
            brief: "Place citations before periods with a non-breaking space.",
            detail: Some("Move the \\cite command inside the sentence, before the period."),
            examples: const { &[
                Example::bad(r"Johannes Brahms was born in Hamburg.\cite{}"),
                Example::good(r"Johannes Brahms was born in Hamburg~\cite{}."),
            ] },
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\b(:?in|as|on|by)[ ~]\\cite\{",
        Meta {
            brief: "Avoid using citations as nouns.",
            examples: const { &[
                Example::bad(r"The method proposed in~\cite{} shows a decrease in methanol toxicity."),
                Example::good(r"A proposed method shows a decrease in methanol toxicity~\cite{}."),
            ] },
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"[^~]\\cite\{",
        Meta {
            brief: "Place a single, non-breaking space '~' before citations.",
            examples: const { &[
                Example::bad(
                    r#"Apollo 17's "The Blue Marble" \cite{} photo of the Earth became an icon in the environmental movement."#,
                ),
                Example::good(
                    r#"Apollo 17's "The Blue Marble"~\cite{} photo of the Earth became an icon in the environmental movement."#,
                ),
            ] },
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"[^~]\\ref\{",
        Meta {
            brief: "Place a single, non-breaking space '~' before references.",
            examples: const { &[
                Example::bad(r"The performance of the engine is shown in Figure \ref{}."),
                Example::good(r"The performance of the engine is shown in Figure~\ref{}."),
            ] },
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\d+%",
        Meta {
            brief: "Escape percentages with backslash.",
            examples: const { &[
                Example::bad("The company's stocks rose by 15%."),
                Example::good(r"The company's stocks rose by 15\%."),
            ] },
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\s[,;.!?]",
        Meta {
            brief: "Do not precede punctuation characters with spaces.",
            examples: const { &[
                Example::bad(
                    "Nether Stowey, where Coleridge wrote The Rime of the Ancient Mariner , is a few miles from Bridgewater.",
                ),
                Example::good(
                    "Nether Stowey, where Coleridge wrote The Rime of the Ancient Mariner, is a few miles from Bridgewater.",
                ),
            ] },
            show_spaces: true,
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\w+\(|\)\w+",
        Meta {
            brief: "Separate parentheses from text with a space.",
            examples: const { &[
                Example::bad("I went to his house yesterday(my third attempt to see him)."),
                Example::good("I went to his house yesterday (my third attempt to see him)."),
            ] },
            show_spaces: true,
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\d+\s?x\d+",
        Meta {
            brief: r"In the context of 'times', use $\times$ instead of 'x'.",
            examples: const { &[
                Example::bad("We used an 10x10 grid for the image filter."),
                Example::good(r"We used an $10 \times 10$ grid for the image filter."),
            ] },
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"[a-z]+\s-\s[a-z]+",
        Meta {
            brief: "Use an em-dash '---' to denote parenthetical breaks or statements.",
            examples: const { &[
                Example::bad("He only desired one thing - success."),
                Example::good("He only desired one thing --- success."),
            ] },
            ..Meta::default()
        },
    )?;

    b.filtered(
        r"\b(\w+)\s+(\w+)\b",
        words_duplicated,
        Meta {
            brief: "Remove duplicated word.",
            examples: const { &[
                Example::bad(
                    "The famous two masks associated with drama are symbols of the the ancient Muses, Thalia (comedy) and Melpomene (tragedy).",
                ),
                Example::good(
                    "The famous two masks associated with drama are symbols of the ancient Muses, Thalia (comedy) and Melpomene (tragedy).",
                ),
            ] },
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\.\.\.",
        Meta {
            brief: r"Typeset ellipses by \ldots, not '...'.",
            examples: const { &[
                Example::bad("New York, Tokyo, Budapest, ..."),
                Example::good(r"New York, Tokyo, Budapest, \ldots"),
            ] },
            ..Meta::default()
        },
    )?;

    b.pattern(
        "\"",
        Meta {
            brief: "Use left and right quotation marks `` and '' rather than \".",
            examples: const { &[
                Example::bad(r#""Very much indeed," Alice said politely."#),
                Example::good("``Very much indeed,'' Alice said politely."),
            ] },
            ..Meta::default()
        },
    )?;

    b.quote_pairs(Meta {
        brief: "Left quotes must be balanced by a matching right quote.",
        examples: const { &[
            Example::bad("``Very much indeed,' Alice said politely."),
            Example::bad("``Very much indeed, Alice said politely."),
            Example::good("``Very much indeed,'' Alice said politely."),
        ] },
        ..Meta::default()
    });

    b.pattern(
        r"\\begin\{center\}",
        Meta {
            brief: r"Use \centering instead of \begin{center}.",
            examples: const { &[
                Example::bad(r"\begin{figure} \begin{center} \includegraphics \end{center} \end{figure}"),
                Example::good(r"\begin{figure} \centering \includegraphics \end{figure}"),
            ] },
            scope: Scope::Any,
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"^\$\$",
        Meta {
            brief: r"Use \[ or \begin{equation} instead of $$.",
            examples: const { &[
                Example::bad("$$ 1 + 1 = 2 $$"),
                Example::good(r"\[ 1 + 1 = 2 \]"),
                Example::good(r"\begin{equation} 1 + 1 = 2 \end{equation}"),
            ] },
            scope: Scope::Math,
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\d\s?-\s?\d",
        Meta {
            brief: "Use endash '--' for numeric ranges instead of hyphens.",
            examples: const { &[
                Example::bad("A description of medical practices at the time are on pages 17-20."),
                Example::good("A description of medical practices at the time are on pages 17--20."),
            ] },
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\\footnote\{.+?\}[,;.?]",
        Meta {
            brief: "Place footnotes after punctuation marks.",
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\b(<|>)\b",
        Meta {
            brief: r"Use \langle and \rangle instead of '<' and '>' for angle brackets.",
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\\cite\{.+?\}\s?\\cite\{",
        Meta {
            brief: r"Use \cite{..., ...} for multiple citations.",
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\d(m|A|kg|s|K|mol|cd)\b",
        Meta {
            brief: "Place a non-breaking space between a number and its unit.",
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"[^\\](sin|cos|tan|log|max|min)",
        Meta {
            brief: "Precede named mathematical operators with a backslash.",
            scope: Scope::Math,
            ..Meta::default()
        },
    )?;

    b.filtered(
        r"\b(e\.g\.|i\.e\.\s+)",
        lacks_interword_space,
        Meta {
            brief: r"Place a '\ ' (backslash space) after a period if it is not the end of the sentence.",
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\\def\\[a-z]+\{",
        Meta {
            brief: r"Do not use the \def command. Use \newcommand instead.",
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"\\sloppy",
        Meta {
            brief: r"Avoid the \sloppy command.",
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"'''|```",
        Meta {
            brief: r"Use a thin space \, to separate quotes.",
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"1st|2nd|3rd",
        Meta {
            brief: "Spell out ordinal numbers (1st, 2nd, etc.) in words.",
            ..Meta::default()
        },
    )?;

    b.pattern(
        r"[a-z]+ \d [a-z]+",
        Meta {
            brief: "Spell out single digit numbers in words.",
            ..Meta::default()
        },
    )?;

    b.pattern(
        r",\s*\.\.\.\s*,",
        Meta {
            brief: r"Use \cdots to denote ellipsis in maths.",
            scope: Scope::Math,
            ..Meta::default()
        },
    )?;

    b.family(
        r#"Punctuate abbreviations correctly. Should be "{}"."#,
        Scope::Prose,
        ABBREVIATION_FIXES
            .iter()
            .map(|(pattern, fix)| (format!(r"\b{pattern}\b"), *fix)),
    )?;

    b.family(
        r"Use the \{} command instead.",
        Scope::Prose,
        OBSOLETE_COMMANDS
            .iter()
            .map(|(name, fix)| (format!(r"\\{name}\{{"), *fix)),
    )?;

    b.family(
        "Avoid obsolete packages. Use {} instead.",
        Scope::Prose,
        OBSOLETE_PACKAGES
            .iter()
            .map(|(name, fix)| (format!(r"\\{name}\{{"), *fix)),
    )?;

    b.family(
        "Use the {} instead.",
        Scope::Prose,
        OBSOLETE_ENVIRONMENTS
            .iter()
            .map(|(name, fix)| (format!(r"\\begin\{{{name}\}}"), *fix)),
    )?;

    Ok(b.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Context, Span};

    fn registry() -> Registry {
        Registry::with_default_rules().expect("default catalog must build")
    }

    #[test]
    fn catalog_builds_with_expected_size() {
        let registry = registry();
        assert_eq!(registry.len(), 58);
        // Ids are dense and 1-based.
        for (index, rule) in registry.iter().enumerate() {
            assert_eq!(rule.id() as usize, index + 1);
        }
    }

    #[test]
    fn every_rule_is_clean_on_empty_chunks() {
        let registry = registry();
        for rule in registry.iter() {
            for context in [Context::Prose, Context::Math, Context::Unrecognized] {
                assert!(
                    rule.evaluate("", context).is_empty(),
                    "rule {} produced spans for an empty chunk",
                    rule.id()
                );
            }
        }
    }

    #[test]
    fn scoped_rules_ignore_other_contexts() {
        let registry = registry();
        for rule in registry.iter() {
            let sample = match rule.scope() {
                Scope::Prose => continue,
                Scope::Any => continue,
                Scope::Math => "$$ ,..., sin x $$",
            };
            assert!(
                rule.evaluate(sample, Context::Prose).is_empty(),
                "math-scoped rule {} fired in prose",
                rule.id()
            );
        }
    }

    #[test]
    fn citation_after_period_fires() {
        let registry = registry();
        let rule = registry.get(2).expect("rule 2");
        let spans = rule.evaluate(r"Napoleonic war.\cite{smith08}", Context::Prose);
        assert_eq!(spans, vec![Span::new(14, 21)]);
    }

    #[test]
    fn duplicate_word_requires_identical_words() {
        let registry = registry();
        let rule = registry.get(11).expect("rule 11");
        assert_eq!(
            rule.evaluate("it was the the best", Context::Prose),
            vec![Span::new(7, 14)]
        );
        assert!(rule.evaluate("it was the best", Context::Prose).is_empty());
    }

    #[test]
    fn duplicate_word_skips_brace_groups() {
        let registry = registry();
        let rule = registry.get(11).expect("rule 11");
        assert!(
            rule.evaluate(r"see \cite{smith08 smith08} for details", Context::Prose)
                .is_empty()
        );
    }

    #[test]
    fn interword_space_filter_honours_existing_space() {
        let registry = registry();
        let rule = registry.get(23).expect("rule 23");
        assert!(!rule.evaluate("compare e.g. this", Context::Prose).is_empty());
        assert!(
            rule.evaluate(r"compare e.g.\ this", Context::Prose)
                .is_empty()
        );
    }

    #[test]
    fn obsolete_command_family_matches_literally() {
        let registry = registry();
        let spans: Vec<_> = registry
            .iter()
            .filter(|rule| rule.brief() == r"Use the \textrm command instead.")
            .flat_map(|rule| rule.evaluate(r"{\rm roman text}", Context::Prose))
            .collect();
        assert_eq!(spans.len(), 0);

        let spans: Vec<_> = registry
            .iter()
            .filter(|rule| rule.brief() == r"Use the \textrm command instead.")
            .flat_map(|rule| rule.evaluate(r"\rm{roman text}", Context::Prose))
            .collect();
        assert_eq!(spans, vec![Span::new(0, 4)]);
    }

    #[test]
    fn obsolete_environment_family_present() {
        let registry = registry();
        let rule = registry
            .iter()
            .find(|rule| rule.brief().contains("align"))
            .expect("eqnarray rule");
        assert!(
            !rule
                .evaluate(r"\begin{eqnarray} x &=& y \end{eqnarray}", Context::Prose)
                .is_empty()
        );
    }
}
