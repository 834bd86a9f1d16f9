//! Text escaping
//!
//! Freeform text is pushed through an ordered list of [`EscapeRule`]s so that
//! user content is never read back as Markdown syntax. Order matters: each
//! pass only introduces entity forms that later patterns cannot match.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::options::Options;

/// Numeric character reference for U+2063 (INVISIBLE SEPARATOR)
pub const INVISIBLE_MARKER: &str = "&#8291;";

static SPECIAL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*+\-]").unwrap());

/// A `#` run that does not start the line, followed by blanks
static HEADER_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\n])( *)(#+)( +)").unwrap());

/// `<digits>.` followed by blanks
static ORDERED_LIST_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"( *)([0-9]+\.)( +)").unwrap());

static LEFT_ANGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<").unwrap());

static BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[{}\[\]()]").unwrap());

const BRACKET_ENTITIES: &[(&str, &str)] = &[
    ("{", "&#123;"),
    ("}", "&#125;"),
    ("[", "&#91;"),
    ("]", "&#93;"),
    ("(", "&#40;"),
    (")", "&#41;"),
];

/// How a rule rewrites each match
#[derive(Debug, Clone, Copy)]
pub enum Replacement {
    /// A `regex` replacement template (`$1`, `${2}`, ...)
    Template(&'static str),
    /// Look the whole match up in a table of `(match, replacement)` pairs
    Table(&'static [(&'static str, &'static str)]),
}

/// A single escaping pass
#[derive(Debug, Clone, Copy)]
pub struct EscapeRule {
    /// Short name, used in trace output
    pub name: &'static str,
    pattern: &'static Regex,
    replacement: Replacement,
}

impl EscapeRule {
    fn new(name: &'static str, pattern: &'static Lazy<Regex>, replacement: Replacement) -> Self {
        Self {
            name,
            pattern: Lazy::force(pattern),
            replacement,
        }
    }

    /// Apply this rule to every match in `text`
    pub fn apply(&self, text: &str) -> String {
        let replaced = match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::Table(table) => self.pattern.replace_all(text, |caps: &Captures| {
                table
                    .iter()
                    .find(|(from, _)| *from == &caps[0])
                    .map_or_else(|| caps[0].to_string(), |(_, to)| (*to).to_string())
            }),
        };
        replaced.into_owned()
    }
}

/// Build the escaping pipeline for the given options
pub fn escape_rules(options: &Options) -> Vec<EscapeRule> {
    let mut rules = vec![
        special_chars_rule(),
        header_sequence_rule(),
        ordered_list_sequence_rule(),
        angle_bracket_rule(),
    ];
    if options.escape_brackets {
        rules.push(bracket_rule());
    }
    rules
}

fn special_chars_rule() -> EscapeRule {
    EscapeRule::new("special-chars", &SPECIAL_CHARS, Replacement::Template(r"\$0"))
}

fn header_sequence_rule() -> EscapeRule {
    EscapeRule::new(
        "header-sequence",
        &HEADER_SEQUENCE,
        Replacement::Template("${1}${2}&#8291;${3}${4}"),
    )
}

fn ordered_list_sequence_rule() -> EscapeRule {
    EscapeRule::new(
        "ordered-list-sequence",
        &ORDERED_LIST_SEQUENCE,
        Replacement::Template("${1}&#8291;${2}${3}"),
    )
}

fn angle_bracket_rule() -> EscapeRule {
    EscapeRule::new("angle-bracket", &LEFT_ANGLE, Replacement::Template("&lt;"))
}

fn bracket_rule() -> EscapeRule {
    EscapeRule::new("brackets", &BRACKETS, Replacement::Table(BRACKET_ENTITIES))
}

/// Runs the escaping pipeline over freeform text
#[derive(Debug, Clone)]
pub struct TextEscaper {
    rules: Vec<EscapeRule>,
}

impl TextEscaper {
    pub fn new(options: &Options) -> Self {
        Self {
            rules: escape_rules(options),
        }
    }

    pub fn rules(&self) -> &[EscapeRule] {
        &self.rules
    }

    /// Escape `text`. Never fails.
    pub fn escape(&self, text: &str) -> String {
        let mut output = text.to_string();
        for rule in &self.rules {
            output = rule.apply(&output);
            log::trace!("escape pass {}: {:?}", rule.name, output);
        }
        output
    }
}

impl Default for TextEscaper {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

/// Escape `text` with a one-off pipeline built from `options`
pub fn escape_text(text: &str, options: &Options) -> String {
    TextEscaper::new(options).escape(text)
}
