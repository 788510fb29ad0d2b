//! robots.txt grammar and typed directive model.
//!
//! This crate provides:
//! - A grammar for robots.txt documents, in a standard and a nonstandard
//!   (`crawl-delay`, `host`) dialect
//! - Typed [`Directive`] records with their trailing comments
//! - A [`groups`] view over the flat directive list
//!
//! # Example
//!
//! ```rust
//! use robotstxt::{groups, parse};
//!
//! let text = "User-agent: *\nDisallow: /tmp/ # scratch\n";
//! let directives = parse(text);
//! let groups = groups(&directives);
//! assert_eq!(groups[0].user_agents, vec!["*"]);
//! assert_eq!(groups[0].rules().next(), Some((false, "/tmp/")));
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod fields;
pub mod grammar;
pub mod lexical;
pub mod lines;
pub mod model;
pub mod parser;
pub mod values;

pub use config::{Dialect, ParserConfig, Whitespace};
pub use error::{Error, Result};
pub use grammar::Grammar;
pub use model::{groups, Directive, Group};
pub use parser::{parse, parse_ns, parse_with, try_parse};
