/*!
Extract and validate the micro-syntax of short texts: hashtags, @-mentions, mentioned lists, reply targets and URLs (including internationalized domains).

## Features
- [Extraction](extractor) of ordered, non-overlapping entities with code point spans
  - URLs take precedence, a `#` or `@` inside a URL path is not reported on its own.
  - Full-width sigils (`＃`, `＠`) and Latin-1 accented hashtags.
- [Validation](validator) of whole strings: messages, usernames, lists, hashtags and URLs
  - URLs are re-parsed along RFC 3986 and every component is checked on its own, including ports and IPv4 octet ranges.
- A [pattern library](syntax) with a stable capture field contract
  - ASCII-only case insensitivity, no Unicode or locale-dependent case folding.
  - Linear-time matching, no catastrophic backtracking on long URL paths.
*/
//! ## Usage
//! ```
//! use twitter_text::{EntityKind, Extractor, Validator};
//!
//! let extractor = Extractor::new();
//! let text = "@jack see https://example.com/path?q=1. #Rust @rustlang/members";
//!
//! assert_eq!(extractor.extract_hashtags(text), ["Rust"]);
//! assert_eq!(extractor.extract_mentions(text), ["jack", "rustlang"]);
//! assert_eq!(extractor.extract_mentioned_lists(text), ["rustlang/members"]);
//! assert_eq!(extractor.extract_reply_screenname(text).as_deref(), Some("jack"));
//! assert_eq!(extractor.extract_url_strings(text), ["https://example.com/path?q=1"]);
//!
//! for entity in extractor.extract_entities_with_indices(text) {
//!     println!("{} {:?} {}", entity.kind(), entity.span().range(), entity.value());
//! }
//!
//! let validator = Validator::new();
//! assert!(validator.is_valid_tweet(text));
//! assert!(validator.is_valid_username("@jack"));
//! assert!(validator.is_valid(EntityKind::Url, "https://example.com/").unwrap());
//! ```
//!
//! ## Logging
//! Events are emitted with [`tracing`] at `debug` (grammar compilation) and `trace` (extraction counts, rejected URL components) levels. No subscriber is installed.
//!
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod entity;
mod error;
pub mod extractor;
pub mod syntax;
pub mod validator;

pub use entity::{Entity, EntityKind, Span};
pub use error::Error;
pub use extractor::Extractor;
pub use twitter_text_unicode as unicode;
pub use validator::{UrlComponents, Validator};
