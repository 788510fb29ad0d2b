//! Entry grammar, document grammar and the reusable [`Grammar`].
//!
//! ```text
//! robotstxt = [BOM] entries
//! entries   = *( 1*startgroupline *(groupmemberline | nongroupline | comment)
//!              | nongroupline
//!              | comment )
//! ```
//!
//! The nonstandard dialect adds `crawldelayline | hostline` both to the set of
//! lines allowed inside a group and as a standalone entry.
//!
//! Every rule is a boxed chumsky parser over `char`. Rules are built once per
//! [`Grammar`] and reused for every document it parses.

use std::fmt;

use chumsky::prelude::*;
use tracing::{debug, trace, warn};

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::lexical::byte_order_mark;
use crate::lines::{
    comment_line, group_member_line, non_group_line, nonstandard_line, start_group_line,
};
use crate::model::Directive;

/// A grammar rule: a boxed parser over characters.
pub type Rule<T> = BoxedParser<'static, char, T, Simple<char>>;

/// Character offsets covered by a match.
pub type Span = std::ops::Range<usize>;

/// The value a rule produced and how many characters it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<T> {
    /// Value produced by the rule.
    pub value: T,
    /// Number of characters consumed from the start of the input.
    pub consumed: usize,
}

/// Runs `rule` against the start of `text`.
///
/// The rule does not have to consume the whole input; wrap it in
/// [`complete`] for that.
///
/// # Errors
///
/// Returns [`Error::Parse`] with the position where matching failed.
pub fn run<T: 'static>(rule: &Rule<T>, text: &str) -> Result<Match<T>> {
    rule.clone()
        .then(empty().map_with_span(|(), span: Span| span.start))
        .map(|(value, consumed)| Match { value, consumed })
        .parse(text)
        .map_err(|errors| Error::from_grammar(text, errors))
}

/// Requires `rule` to consume the whole input.
pub fn complete<T: 'static>(rule: Rule<T>) -> Rule<T> {
    rule.then_ignore(end()).boxed()
}

/// One user-agent group: agent lines followed by the lines allowed in a group.
pub fn group(config: ParserConfig) -> Rule<Vec<Directive>> {
    let ws = config.whitespace;
    let mut member = group_member_line(ws)
        .or(non_group_line(ws))
        .or(comment_line(ws))
        .boxed();
    if config.is_nonstandard() {
        member = member.or(nonstandard_line(ws)).boxed();
    }

    start_group_line(ws)
        .repeated()
        .at_least(1)
        .chain::<Directive, _, _>(member.repeated())
        .boxed()
}

/// Zero or more entries, each a group or a standalone line.
///
/// Never fails: when no entry matches, it stops and yields what it has.
pub fn entries(config: ParserConfig) -> Rule<Vec<Vec<Directive>>> {
    let ws = config.whitespace;
    let mut entry = group(config)
        .or(non_group_line(ws).map(|line| vec![line]))
        .or(comment_line(ws).map(|line| vec![line]))
        .boxed();
    if config.is_nonstandard() {
        entry = entry.or(nonstandard_line(ws).map(|line| vec![line])).boxed();
    }

    entry.repeated().boxed()
}

/// `[BOM] entries`.
pub fn robotstxt(config: ParserConfig) -> Rule<Vec<Vec<Directive>>> {
    byte_order_mark().or_not().ignore_then(entries(config)).boxed()
}

/// The whole document: `robotstxt`, trailing whitespace, end of input.
pub fn document(config: ParserConfig) -> Rule<Vec<Directive>> {
    robotstxt(config)
        .then_ignore(filter(|c: &char| c.is_whitespace()).repeated())
        .then_ignore(end())
        .map(|entries| entries.into_iter().flatten().collect())
        .boxed()
}

/// A document grammar built for one [`ParserConfig`].
///
/// Building the rule tree allocates; keep a `Grammar` around to parse many
/// documents with the same settings.
#[derive(Clone)]
pub struct Grammar {
    config: ParserConfig,
    document: Rule<Vec<Directive>>,
}

impl Grammar {
    /// Builds the grammar for `config`.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        trace!(
            "Building {:?} grammar with {:?} whitespace",
            config.dialect,
            config.whitespace
        );
        Self {
            config,
            document: document(config),
        }
    }

    /// Returns the settings this grammar was built with.
    #[must_use]
    pub const fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses a document, reporting where it stopped matching.
    ///
    /// An empty document is `Ok` with no directives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the input is not entirely consumed.
    pub fn try_parse(&self, text: &str) -> Result<Vec<Directive>> {
        let directives = self
            .document
            .parse(text)
            .map_err(|errors| Error::from_grammar(text, errors))?;
        debug!(
            "Parsed {} directives ({:?} dialect)",
            directives.len(),
            self.config.dialect
        );
        Ok(directives)
    }

    /// Parses a document, returning no directives if it does not match.
    pub fn parse(&self, text: &str) -> Vec<Directive> {
        self.try_parse(text).unwrap_or_else(|e| {
            warn!("Failed to parse robots.txt: {}", e);
            Vec::new()
        })
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
