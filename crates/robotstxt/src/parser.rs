//! robots.txt parsing entry points.
//!
//! Parses a robots.txt document into a flat, input-ordered list of
//! [`Directive`]s.
//!
//! # Format
//!
//! ```text
//! # comments run to the end of the line
//! User-agent: Googlebot
//! User-agent: Bingbot
//! Disallow: /private/   # trailing comments are kept
//! Allow: /private/public.html
//!
//! Sitemap: https://www.example.com/sitemap.xml
//! ```
//!
//! [`parse`] and [`parse_ns`] return an empty list when the document does not
//! match. Use [`try_parse`] to tell an empty document from a malformed one.

use crate::config::ParserConfig;
use crate::error::Result;
use crate::grammar::Grammar;
use crate::model::Directive;

/// Parses a document with the standard grammar.
///
/// Returns an empty list if the document does not match.
///
/// # Example
///
/// ```rust
/// use robotstxt::parse;
///
/// let directives = parse("User-agent: *\nDisallow: /tmp/ # scratch\n");
/// assert_eq!(directives.len(), 2);
/// assert_eq!(directives[1].comment(), Some("scratch"));
/// ```
pub fn parse(text: &str) -> Vec<Directive> {
    parse_with(text, ParserConfig::standard())
}

/// Parses a document with the nonstandard grammar (`crawl-delay`, `host`).
///
/// Returns an empty list if the document does not match.
pub fn parse_ns(text: &str) -> Vec<Directive> {
    parse_with(text, ParserConfig::nonstandard())
}

/// Parses a document with the given settings.
///
/// Returns an empty list if the document does not match.
pub fn parse_with(text: &str, config: ParserConfig) -> Vec<Directive> {
    Grammar::new(config).parse(text)
}

/// Parses a document with the given settings, reporting failures.
///
/// # Errors
///
/// Returns [`Error::Parse`](crate::Error::Parse) with the line and column
/// where the document stopped matching.
pub fn try_parse(text: &str, config: ParserConfig) -> Result<Vec<Directive>> {
    Grammar::new(config).try_parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Whitespace;
    use crate::model::groups;
    use crate::Error;

    const ROBOTS: &str = include_str!("../fixtures/robots.txt");
    const ROBOTS_NS: &str = include_str!("../fixtures/robots.ns.txt");
    const EXPECTED: &str = include_str!("../fixtures/expected.json");
    const EXPECTED_NS: &str = include_str!("../fixtures/expected.ns.json");

    fn expected(json: &str) -> Vec<Directive> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parse_sample_document() {
        assert_eq!(parse(ROBOTS), expected(EXPECTED));
        assert_eq!(parse(&format!("\u{FEFF}{ROBOTS}")), expected(EXPECTED));
    }

    #[test]
    fn parse_sample_nonstandard_document() {
        assert_eq!(parse_ns(ROBOTS_NS), expected(EXPECTED_NS));
        assert_eq!(parse_ns(&format!("\u{FEFF}{ROBOTS_NS}")), expected(EXPECTED_NS));
    }

    #[test]
    fn nonstandard_grammar_is_a_superset() {
        assert_eq!(parse_ns(ROBOTS), expected(EXPECTED));
        assert!(parse(ROBOTS_NS).is_empty());
    }

    #[test]
    fn sample_groups() {
        let directives = parse(ROBOTS);
        let groups = groups(&directives);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].user_agents, vec!["*"]);
        assert_eq!(groups[1].user_agents, vec!["Googlebot", "Bingbot "]);
        assert_eq!(
            groups[0].rules().collect::<Vec<_>>(),
            vec![(false, "/cgi-bin/"), (false, "/tmp/"), (true, "/tmp/public/*.html")]
        );
    }

    #[test]
    fn empty_and_malformed_documents() {
        assert!(parse("").is_empty());
        assert!(parse_ns("").is_empty());
        assert!(try_parse("", ParserConfig::standard()).unwrap().is_empty());
        assert!(try_parse("\n\n", ParserConfig::standard()).unwrap().is_empty());

        assert!(parse("sitemap: http://x/y").is_empty());
        let error = try_parse("sitemap: http://x/y", ParserConfig::standard()).unwrap_err();
        assert!(matches!(error, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn malformed_line_position_is_reported() {
        let text = "user-agent: *\ndisallow: /a\nnoise\n";
        let error = try_parse(text, ParserConfig::standard()).unwrap_err();
        assert!(matches!(error, Error::Parse { line: 3, .. }), "{error}");
    }

    #[test]
    fn comment_extraction() {
        let directives = parse("user-agent: *\ndisallow: /a #note\n");
        assert_eq!(
            directives[1],
            Directive::Disallow {
                value: "/a".to_string(),
                comment: Some("note".to_string())
            }
        );
    }

    #[test]
    fn comment_line_after_directive_is_its_own_record() {
        let directives = parse("user-agent: *\ndisallow: /a\n# note\nallow: /b\n");
        assert_eq!(
            directives,
            vec![
                Directive::UserAgent {
                    value: "*".to_string(),
                    comment: None
                },
                Directive::Disallow {
                    value: "/a".to_string(),
                    comment: None
                },
                Directive::Comment("note".to_string()),
                Directive::Allow {
                    value: "/b".to_string(),
                    comment: None
                },
            ]
        );
    }

    #[test]
    fn comment_as_last_line() {
        let unterminated = parse("user-agent: *\n# last line");
        assert_eq!(unterminated.len(), 2);
        assert_eq!(unterminated[1], Directive::Comment("last line".to_string()));

        let padded = parse("user-agent: a\n# done\n\n  \n");
        assert_eq!(padded.len(), 2);
        assert_eq!(padded[0].comment(), None);
        assert_eq!(padded[1].comment(), Some("done"));
    }

    #[test]
    fn trailing_and_standalone_comments_together() {
        let directives = parse_ns("crawl-delay: 1 # slow\n# why\n");
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].comment(), Some("slow"));
        assert_eq!(directives[1], Directive::Comment("why".to_string()));
    }

    #[test]
    fn keywords_ignore_case_values_do_not() {
        assert_eq!(parse("User-Agent: Foo\n"), parse("user-agent: Foo\n"));
        assert_eq!(parse("USER-AGENT: Foo\n"), parse("user-agent: Foo\n"));

        let upper = parse("user-agent: FOO\n");
        let lower = parse("user-agent: foo\n");
        assert_ne!(upper, lower);
        assert_eq!(upper[0].field(), lower[0].field());
        assert_eq!(upper[0].user_agent(), Some("FOO"));
    }

    #[test]
    fn consecutive_agents_share_a_group() {
        let directives = parse("user-agent: a\nuser-agent: b\ndisallow: /x\n");
        let fields: Vec<&str> = directives.iter().map(Directive::field).collect();
        assert_eq!(fields, vec!["useragent", "useragent", "disallow"]);

        let groups = groups(&directives);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].user_agents, vec!["a", "b"]);
        assert_eq!(groups[0].members.len(), 1);
    }

    #[test]
    fn crawl_delay_bounds() {
        assert!(parse_ns("crawl-delay: -1\n").is_empty());
        assert_eq!(
            parse_ns("crawl-delay: 0\n"),
            vec![Directive::CrawlDelay {
                value: 0.0,
                comment: None
            }]
        );
        assert!(parse("crawl-delay: 0\n").is_empty());
    }

    #[test]
    fn unterminated_line_is_rejected() {
        assert!(parse("sitemap: http://x/y").is_empty());
        assert_eq!(parse("sitemap: http://x/y\n").len(), 1);
    }

    #[test]
    fn blank_lines_depend_on_whitespace_mode() {
        let text = "user-agent: a\n\ndisallow: /\n";
        assert_eq!(parse(text).len(), 2);

        let strict = ParserConfig::standard().with_whitespace(Whitespace::Strict);
        assert!(parse_with(text, strict).is_empty());
        assert!(try_parse(text, strict).is_err());
        assert_eq!(parse_with("user-agent: a\n\n disallow: /\n", strict).len(), 2);
    }

    #[test]
    fn windows_and_old_mac_line_endings() {
        let unix = parse("user-agent: a\ndisallow: /x\n");
        assert_eq!(parse("user-agent: a\r\ndisallow: /x\r\n"), unix);
        assert_eq!(parse("user-agent: a\rdisallow: /x\r"), unix);
    }

    #[test]
    fn sample_debug_rendering() {
        let directives = parse("User-agent: *\nDisallow: /tmp/ # scratch\n");
        insta::assert_debug_snapshot!(directives, @r###"
[
    UserAgent {
        value: "*",
        comment: None,
    },
    Disallow {
        value: "/tmp/",
        comment: Some(
            "scratch",
        ),
    },
]
"###);
    }
}
