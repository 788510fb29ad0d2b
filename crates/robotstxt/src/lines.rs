//! Directive line grammars.
//!
//! ```text
//! startgroupline  = [LWS] "user-agent" [LWS] ":" [LWS] agentvalue [comment] EOL
//! groupmemberline = [LWS] ( pathmemberfield [LWS] ":" [LWS] pathvalue
//!                         | othermemberfield [LWS] ":" [LWS] textvalue ) [comment] EOL
//! nongroupline    = [LWS] ( urlnongroupfield [LWS] ":" [LWS] urlvalue
//!                         | othernongroupfield [LWS] ":" [LWS] textvalue ) [comment] EOL
//! crawldelayline  = [LWS] "crawl-delay" [LWS] ":" [LWS] number [comment] EOL
//! hostline        = [LWS] "host" [LWS] ":" [LWS] netloc [comment] EOL
//! comment         = [LWS] "#" *anychar
//! ```
//!
//! A comment does not consume its line ending. The next line's leading LWS
//! picks it up, or the trailing whitespace at the end of the document does.
//!
//! The `[comment]` after a directive value is a trailing comment: spaces and
//! tabs, then `#`, all on the same line. It never crosses a line ending.

use chumsky::prelude::*;

use crate::config::Whitespace;
use crate::fields::{
    crawl_delay_field, host_field, other_member_field, other_non_group_field,
    path_member_field, url_non_group_field, user_agent_field,
};
use crate::grammar::Rule;
use crate::lexical::{end_of_line, line_char, linear_whitespace};
use crate::model::Directive;
use crate::values::{agent_value, crawl_delay_value, host_value, path_value, text_value, uri_value};

/// Matches `[LWS] "#" *anychar`, yielding the trimmed comment text.
pub fn comment(ws: Whitespace) -> Rule<String> {
    linear_whitespace(ws)
        .or_not()
        .ignore_then(just('#'))
        .ignore_then(line_char().repeated().collect::<String>())
        .map(|text| text.trim().to_string())
        .boxed()
}

/// Matches `*(SP | HT) "#" *anychar` on the current line, yielding the
/// trimmed comment text.
pub fn trailing_comment() -> Rule<String> {
    one_of(" \t")
        .repeated()
        .ignore_then(just('#'))
        .ignore_then(line_char().repeated().collect::<String>())
        .map(|text| text.trim().to_string())
        .boxed()
}

/// A standalone comment line as a [`Directive::Comment`].
pub fn comment_line(ws: Whitespace) -> Rule<Directive> {
    comment(ws).map(Directive::Comment).boxed()
}

/// `user-agent` line, producing [`Directive::UserAgent`].
pub fn start_group_line(ws: Whitespace) -> Rule<Directive> {
    let agent = field(user_agent_field(), ws)
        .ignore_then(agent_value())
        .map(|value| Directive::UserAgent {
            value,
            comment: None,
        });

    line(agent.boxed(), ws)
}

/// `allow`/`disallow` line, or a member line with an unrecognized field.
pub fn group_member_line(ws: Whitespace) -> Rule<Directive> {
    let path = field(path_member_field(), ws)
        .then(path_value())
        .map(|(name, value)| match name.as_str() {
            "allow" => Directive::Allow {
                value,
                comment: None,
            },
            _ => Directive::Disallow {
                value,
                comment: None,
            },
        });

    let other = field(other_member_field(), ws)
        .ignore_then(text_value())
        .map(|value| Directive::OtherMemberField {
            value,
            comment: None,
        });

    line(path.or(other).boxed(), ws)
}

/// `sitemap` line, or a non-group line with an unrecognized field.
pub fn non_group_line(ws: Whitespace) -> Rule<Directive> {
    let sitemap = field(url_non_group_field(), ws)
        .ignore_then(uri_value())
        .map(|value| Directive::Sitemap {
            value,
            comment: None,
        });

    let other = field(other_non_group_field(), ws)
        .ignore_then(text_value())
        .map(|value| Directive::OtherNonGroupField {
            value,
            comment: None,
        });

    line(sitemap.or(other).boxed(), ws)
}

/// `crawl-delay` line (nonstandard).
pub fn crawl_delay_line(ws: Whitespace) -> Rule<Directive> {
    let delay = field(crawl_delay_field(), ws)
        .ignore_then(crawl_delay_value())
        .map(|value| Directive::CrawlDelay {
            value,
            comment: None,
        });

    line(delay.boxed(), ws)
}

/// `host` line (nonstandard).
pub fn host_line(ws: Whitespace) -> Rule<Directive> {
    let host = field(host_field(), ws)
        .ignore_then(host_value())
        .map(|value| Directive::Host {
            value,
            comment: None,
        });

    line(host.boxed(), ws)
}

/// Either nonstandard line.
pub fn nonstandard_line(ws: Whitespace) -> Rule<Directive> {
    crawl_delay_line(ws).or(host_line(ws)).boxed()
}

/// `name [LWS] ":" [LWS]`, yielding the field name.
fn field(name: Rule<String>, ws: Whitespace) -> Rule<String> {
    name.then_ignore(linear_whitespace(ws).or_not())
        .then_ignore(just(':'))
        .then_ignore(linear_whitespace(ws).or_not())
        .boxed()
}

/// `[LWS] body [comment] EOL`.
///
/// Once `body` has matched, a bad comment or missing line ending fails the
/// whole line; the other alternatives inside `body` are not retried.
fn line(body: Rule<Directive>, ws: Whitespace) -> Rule<Directive> {
    linear_whitespace(ws)
        .or_not()
        .ignore_then(body)
        .then(trailing_comment().or_not())
        .then_ignore(end_of_line())
        .map(|(directive, comment)| directive.with_comment(comment))
        .boxed()
}
