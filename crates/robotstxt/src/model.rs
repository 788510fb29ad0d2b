//! Typed directive model.
//!
//! A parsed document is a flat, input-ordered list of [`Directive`]s.
//! User-agent groups are not stored; [`groups`] recovers them on demand.

use serde::{Deserialize, Serialize};

/// One directive line of a robots.txt document.
///
/// Every variant except [`Directive::Comment`] carries the line's value and
/// the trimmed text of a trailing `#` comment, if there was one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directive {
    /// A standalone comment line.
    Comment(String),
    /// `user-agent`, which starts a group.
    UserAgent {
        /// Agent name, passed through unchanged.
        value: String,
        /// Trailing comment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// `allow` inside a group.
    Allow {
        /// Path, always starting with `/`.
        value: String,
        /// Trailing comment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// `disallow` inside a group.
    Disallow {
        /// Path, always starting with `/`.
        value: String,
        /// Trailing comment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// A member line with an unrecognized (empty) field name.
    OtherMemberField {
        /// Free text.
        value: String,
        /// Trailing comment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// `sitemap`, valid anywhere.
    Sitemap {
        /// Absolute URI.
        value: String,
        /// Trailing comment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// A non-group line with an unrecognized (empty) field name.
    OtherNonGroupField {
        /// Free text.
        value: String,
        /// Trailing comment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// `crawl-delay` (nonstandard).
    CrawlDelay {
        /// Delay in seconds, never negative.
        value: f64,
        /// Trailing comment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// `host` (nonstandard).
    Host {
        /// Host name or address with an optional port, never empty.
        value: String,
        /// Trailing comment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
}

impl Directive {
    /// Returns the lower-cased tag naming this kind of line.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Comment(_) => "comment",
            Self::UserAgent { .. } => "useragent",
            Self::Allow { .. } => "allow",
            Self::Disallow { .. } => "disallow",
            Self::OtherMemberField { .. } => "othermemberfield",
            Self::Sitemap { .. } => "sitemap",
            Self::OtherNonGroupField { .. } => "othernongroupfield",
            Self::CrawlDelay { .. } => "crawldelay",
            Self::Host { .. } => "host",
        }
    }

    /// Returns the comment text: the body of a comment line, or the trailing
    /// comment of any other line.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        match self {
            Self::Comment(text) => Some(text.as_str()),
            Self::UserAgent { comment, .. }
            | Self::Allow { comment, .. }
            | Self::Disallow { comment, .. }
            | Self::OtherMemberField { comment, .. }
            | Self::Sitemap { comment, .. }
            | Self::OtherNonGroupField { comment, .. }
            | Self::CrawlDelay { comment, .. }
            | Self::Host { comment, .. } => comment.as_deref(),
        }
    }

    /// Returns the textual value, or `None` for comments and crawl-delays.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Comment(_) | Self::CrawlDelay { .. } => None,
            Self::UserAgent { value, .. }
            | Self::Allow { value, .. }
            | Self::Disallow { value, .. }
            | Self::OtherMemberField { value, .. }
            | Self::Sitemap { value, .. }
            | Self::OtherNonGroupField { value, .. }
            | Self::Host { value, .. } => Some(value.as_str()),
        }
    }

    /// Returns true if this line starts (or continues the head of) a group.
    #[must_use]
    pub const fn is_user_agent(&self) -> bool {
        matches!(self, Self::UserAgent { .. })
    }

    /// Returns the agent name of a `user-agent` line.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        match self {
            Self::UserAgent { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Replaces the trailing comment. Comment lines are returned unchanged.
    #[must_use]
    pub fn with_comment(mut self, text: Option<String>) -> Self {
        match &mut self {
            Self::Comment(_) => {}
            Self::UserAgent { comment, .. }
            | Self::Allow { comment, .. }
            | Self::Disallow { comment, .. }
            | Self::OtherMemberField { comment, .. }
            | Self::Sitemap { comment, .. }
            | Self::OtherNonGroupField { comment, .. }
            | Self::CrawlDelay { comment, .. }
            | Self::Host { comment, .. } => *comment = text,
        }
        self
    }
}

/// A user-agent group recovered from a flat directive list.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    /// Agents named by the consecutive `user-agent` lines heading the group.
    pub user_agents: Vec<&'a str>,
    /// Every directive after the agents, up to the next `user-agent` run.
    pub members: &'a [Directive],
}

impl Group<'_> {
    /// Iterates over the `allow`/`disallow` members as `(allowed, path)`.
    pub fn rules(&self) -> impl Iterator<Item = (bool, &str)> + '_ {
        self.members.iter().filter_map(|directive| match directive {
            Directive::Allow { value, .. } => Some((true, value.as_str())),
            Directive::Disallow { value, .. } => Some((false, value.as_str())),
            _ => None,
        })
    }
}

/// Splits a directive list into its user-agent groups.
///
/// A group is a run of `user-agent` lines plus everything that follows until
/// the next such run. Directives before the first `user-agent` line belong to
/// no group and are skipped.
pub fn groups(directives: &[Directive]) -> Vec<Group<'_>> {
    let mut groups = Vec::new();
    let mut rest = directives;

    while let Some(start) = rest.iter().position(Directive::is_user_agent) {
        rest = &rest[start..];
        let agents = rest.iter().take_while(|d| d.is_user_agent()).count();
        let end = rest[agents..]
            .iter()
            .position(Directive::is_user_agent)
            .map_or(rest.len(), |offset| agents + offset);

        groups.push(Group {
            user_agents: rest[..agents]
                .iter()
                .filter_map(Directive::user_agent)
                .collect(),
            members: &rest[agents..end],
        });
        rest = &rest[end..];
    }

    groups
}
