//! Field-name grammars.
//!
//! Keywords are matched case-insensitively and returned lower-cased. A field
//! name is read as a whole word first, so `sitemaps` never matches `sitemap`.

use chumsky::prelude::*;

use crate::grammar::{Rule, Span};

/// Matches one of `words` (lower-case) in any letter case.
pub fn keyword(words: &'static [&'static str]) -> Rule<String> {
    filter(|c: &char| c.is_ascii_alphanumeric() || matches!(*c, '-' | '_'))
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(move |name: String, span: Span| {
            let name = name.to_ascii_lowercase();
            if words.contains(&name.as_str()) {
                Ok(name)
            } else {
                Err(Simple::custom(
                    span,
                    format!("expected {}, found `{name}`", words.join(" or ")),
                ))
            }
        })
        .boxed()
}

/// `allow` or `disallow`.
pub fn path_member_field() -> Rule<String> {
    keyword(&["allow", "disallow"])
}

/// `sitemap`.
pub fn url_non_group_field() -> Rule<String> {
    keyword(&["sitemap"])
}

/// `user-agent`.
pub fn user_agent_field() -> Rule<String> {
    keyword(&["user-agent"])
}

/// `crawl-delay` (nonstandard).
pub fn crawl_delay_field() -> Rule<String> {
    keyword(&["crawl-delay"])
}

/// `host` (nonstandard).
pub fn host_field() -> Rule<String> {
    keyword(&["host"])
}

/// The unrecognized field: matches the empty name without consuming input.
pub fn other_field() -> Rule<String> {
    empty().to(String::new()).boxed()
}

/// Alias kept next to [`other_field`] for the non-group line.
pub use self::other_field as other_non_group_field;

/// Alias kept next to [`other_field`] for the group-member line.
pub use self::other_field as other_member_field;
