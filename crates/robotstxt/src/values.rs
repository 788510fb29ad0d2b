//! Value grammars.
//!
//! ```text
//! textvalue  = *(valuechar | SP)
//! agentvalue = textvalue
//! pathvalue  = "/" path
//! urlvalue   = absoluteURI
//! ```
//!
//! The nonstandard `crawl-delay` and `host` values live here too, along with
//! the URL path, absolute URI and net-location rules they build on.

use chumsky::prelude::*;
use url::Url;

use crate::grammar::{Rule, Span};
use crate::lexical::value_char;

/// Matches a possibly empty run of value characters.
///
/// Space is a value character; tab is a control and ends the value.
pub fn text_value() -> Rule<String> {
    value_char().repeated().collect::<String>().boxed()
}

pub use self::text_value as agent_value;

/// Matches `/` followed by a URL path (and optional query).
pub fn path_value() -> Rule<String> {
    just('/')
        .chain::<char, _, _>(filter(|c: &char| is_path_char(*c)).repeated())
        .collect::<String>()
        .try_map(|path: String, span: Span| {
            if has_valid_escapes(&path) {
                Ok(path)
            } else {
                Err(Simple::custom(
                    span,
                    format!("malformed percent-encoding in `{path}`"),
                ))
            }
        })
        .boxed()
}

/// Matches an absolute URI: a scheme, `:`, and the rest of the URI.
pub fn uri_value() -> Rule<String> {
    let scheme = filter(|c: &char| c.is_ascii_alphabetic()).chain::<char, _, _>(
        filter(|c: &char| c.is_ascii_alphanumeric() || matches!(*c, '+' | '-' | '.')).repeated(),
    );

    scheme
        .chain::<char, _, _>(just(':'))
        .chain::<char, _, _>(filter(|c: &char| is_uri_char(*c)).repeated())
        .collect::<String>()
        .try_map(|uri: String, span: Span| match Url::parse(&uri) {
            Ok(_) => Ok(uri),
            Err(e) => Err(Simple::custom(
                span,
                format!("`{uri}` is not an absolute URI: {e}"),
            )),
        })
        .boxed()
}

/// Matches a non-negative decimal number of seconds.
pub fn crawl_delay_value() -> Rule<f64> {
    let digits = filter(|c: &char| c.is_ascii_digit()).repeated().at_least(1);

    just('-')
        .or_not()
        .chain::<char, _, _>(digits.clone())
        .chain::<char, _, _>(just('.').chain::<char, _, _>(digits).or_not().flatten())
        .collect::<String>()
        .try_map(|number: String, span: Span| {
            let delay: f64 = number.parse().map_err(|_| {
                Simple::custom(span.clone(), format!("invalid number `{number}`"))
            })?;
            if delay < 0.0 {
                return Err(Simple::custom(
                    span,
                    format!("crawl-delay must not be negative, found {number}"),
                ));
            }
            // -0 parses as negative zero
            Ok(delay.abs())
        })
        .boxed()
}

/// Matches a net-location: a host name or IPv4 address with an optional port.
pub fn host_value() -> Rule<String> {
    let label = filter(|c: &char| c.is_ascii_alphanumeric())
        .chain::<char, _, _>(
            filter(|c: &char| c.is_ascii_alphanumeric() || *c == '-').repeated(),
        )
        .collect::<String>();

    let port = just(':')
        .chain::<char, _, _>(filter(|c: &char| c.is_ascii_digit()).repeated().at_least(1))
        .collect::<String>();

    label
        .separated_by(just('.'))
        .at_least(1)
        .try_map(|labels: Vec<String>, span: Span| {
            let host = labels.join(".");
            if is_host_name(&labels) || is_ipv4(&labels) {
                Ok(host)
            } else {
                Err(Simple::custom(span, format!("`{host}` is not a host name")))
            }
        })
        .then(port.or_not())
        .try_map(|(host, port): (String, Option<String>), span: Span| {
            let authority = host + port.as_deref().unwrap_or_default();
            if authority.is_empty() {
                return Err(Simple::custom(span, "host must not be empty"));
            }
            Ok(authority)
        })
        .boxed()
}

/// RFC 3986 `pchar` plus `/` and `?`, or any printable non-ASCII character.
fn is_path_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || "-._~!$&'()*+,;=:@/%?".contains(c)
    } else {
        !c.is_control() && !c.is_whitespace()
    }
}

/// RFC 3986 URI characters except `#`, which starts a comment.
fn is_uri_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || "-._~:/?[]@!$&'()*+,;=%".contains(c)
    } else {
        !c.is_control() && !c.is_whitespace()
    }
}

/// Every `%` must start a two-digit hex escape.
fn has_valid_escapes(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'%')
        .all(|(i, _)| {
            bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
        })
}

/// Labels never end in `-` and the top label starts with a letter.
fn is_host_name(labels: &[String]) -> bool {
    labels.iter().all(|label| !label.ends_with('-'))
        && labels
            .last()
            .and_then(|top| top.chars().next())
            .is_some_and(|c| c.is_ascii_alphabetic())
}

fn is_ipv4(labels: &[String]) -> bool {
    labels.len() == 4 && labels.iter().all(|octet| octet.parse::<u8>().is_ok())
}
