/*!
The pattern library: every character class and grammar used by [extraction](crate::extractor) and [validation](crate::validator).

The library is built once per process, see [`library()`], and never changes afterwards.

## Grammars

A [`Grammar`] is a named matcher with an ordered list of capture fields. The names and their order are part of the public contract, callers should access captures by name, or through the typed records ([`HashtagCaptures`], [`UrlCaptures`], ...):

| Grammar | Fields |
|---|---|
| [`hashtag`](Library::hashtag) | `before`, `hash`, `tag` |
| [`mention_or_list`](Library::mention_or_list) | `before`, `at`, `username`, `list` |
| [`mention`](Library::mention) | `before`, `username` |
| [`mentioned_list`](Library::mentioned_list) | `before`, `username_and_list` |
| [`reply`](Library::reply) | `username` |
| [`extract_url`](Library::extract_url) | `all`, `before`, `url`, `protocol`, `domain`, `path`, `query` |
| [`url.unencoded`](UrlValidation::unencoded) | `scheme`, `authority`, `path`, `query`, `fragment` |
| [`url.authority`](UrlValidation::authority) | `userinfo`, `host`, `port` |

The other URL validation grammars have no fields and are only used to check whole strings.

## Case insensitivity
All grammars are case-insensitive for ASCII letters only. See [`case`].

## Matching semantics
Grammars are compiled into [`regex_automata::meta::Regex`], whose search time is linear in the haystack length. Alternations are leftmost-first: the first alternative that leads to a match wins, as it would with a backtracking engine, so grammars with ordered fallbacks (e.g. URL paths) keep their meaning without exponential worst cases.

```
use twitter_text::syntax::library;

let lib = library();
assert_eq!(
    lib.hashtag.fields(),
    ["before", "hash", "tag"],
);
let caps = lib.hashtag.captures("I ❤ #café").unwrap();
assert_eq!(caps.get("tag").unwrap().as_str(), "café");
```
*/
use std::{ops::Range, sync::LazyLock};

use aho_corasick::AhoCorasick;
use regex_automata::{
    meta::Regex,
    util::captures::Captures,
    PatternID,
};
use regex_syntax::{
    hir::{Hir, Look},
    ParserBuilder,
};
use tracing::debug;

use crate::Error;

pub mod case;
pub mod class;
mod hashtag;
mod mention;
mod url;

pub use hashtag::HashtagCaptures;
pub use mention::{
    is_mention_end, MentionCaptures, MentionOrListCaptures, MentionedListCaptures, ReplyCaptures,
};
pub use url::{AuthorityCaptures, UnencodedUrlCaptures, UrlCaptures, UrlValidation};

/// A named, compiled grammar.
#[derive(Clone, Debug)]
pub struct Grammar {
    name: &'static str,
    re: Regex,
}

impl Grammar {
    /// A grammar that finds occurrences anywhere in a haystack.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, Error> {
        Self::build(name, pattern, false)
    }

    /// A grammar that only matches whole haystacks.
    pub fn whole(name: &'static str, pattern: &str) -> Result<Self, Error> {
        Self::build(name, pattern, true)
    }

    fn build(name: &'static str, pattern: &str, whole: bool) -> Result<Self, Error> {
        let hir = ParserBuilder::new()
            .build()
            .parse(pattern)
            .map_err(|source| Error::Syntax {
                name,
                source: Box::new(source),
            })?;
        let mut hir = case::hir_to_ascii_case_insensitive(hir);
        if whole {
            hir = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
        }
        let re = Regex::builder()
            .build_from_hir(&hir)
            .map_err(|source| Error::Build { name, source })?;

        let this = Self { name, re };
        debug!(grammar = name, fields = this.fields().len(), whole, "compiled grammar");
        Ok(this)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Capture field names in ordinal order. The implicit whole-match group is not included.
    pub fn fields(&self) -> Vec<&str> {
        self.re
            .group_info()
            .pattern_names(PatternID::ZERO)
            .skip(1)
            .map(Option::unwrap_or_default)
            .collect()
    }

    /// The ordinal of `field`, starting from 1.
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.re.group_info().to_index(PatternID::ZERO, field)
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.re.is_match(haystack)
    }

    /// The leftmost-first match.
    pub fn captures<'h>(&self, haystack: &'h str) -> Option<GrammarCaptures<'h>> {
        let mut caps = self.re.create_captures();
        self.re.captures(haystack, &mut caps);
        GrammarCaptures::new(haystack, caps)
    }

    /// Successive non-overlapping matches, left to right.
    pub fn captures_iter<'r, 'h: 'r>(
        &'r self,
        haystack: &'h str,
    ) -> impl Iterator<Item = GrammarCaptures<'h>> + 'r {
        self.re
            .captures_iter(haystack)
            .filter_map(move |caps| GrammarCaptures::new(haystack, caps))
    }
}

/// A captured substring with its byte offsets in the haystack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture<'h> {
    pub start: usize,
    pub end: usize,
    text: &'h str,
}

impl<'h> Capture<'h> {
    fn new(haystack: &'h str, range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
            text: &haystack[range],
        }
    }

    pub fn as_str(&self) -> &'h str {
        self.text
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// One match of a [`Grammar`], with captures accessible by field name.
#[derive(Clone, Debug)]
pub struct GrammarCaptures<'h> {
    haystack: &'h str,
    whole: Capture<'h>,
    caps: Captures,
}

impl<'h> GrammarCaptures<'h> {
    fn new(haystack: &'h str, caps: Captures) -> Option<Self> {
        let whole = Capture::new(haystack, caps.get_match()?.range());
        Some(Self {
            haystack,
            whole,
            caps,
        })
    }

    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// The whole match.
    pub fn whole(&self) -> Capture<'h> {
        self.whole
    }

    /// `None` if the field did not participate in the match (or does not exist).
    pub fn get(&self, field: &str) -> Option<Capture<'h>> {
        self.caps
            .get_group_by_name(field)
            .map(|span| Capture::new(self.haystack, span.range()))
    }
}

/// Trigger literals of the grammars, in [`Triggers`] order.
const TRIGGER_LITERALS: [&str; 5] = ["#", "＃", "@", "＠", "://"];

/// Which grammar triggers occur in a text. A grammar whose trigger is absent cannot match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Triggers {
    pub hash: bool,
    pub at: bool,
    pub url: bool,
}

impl Triggers {
    pub const ALL: Triggers = Triggers {
        hash: true,
        at: true,
        url: true,
    };
}

/// Every grammar, compiled.
#[derive(Clone, Debug)]
pub struct Library {
    /// `#`/`＃` + tag body. See [`HashtagCaptures`].
    pub hashtag: Grammar,
    /// `@username` with an optional `/list` slug, as used for linking. See [`MentionOrListCaptures`].
    pub mention_or_list: Grammar,
    /// `@username`. See [`MentionCaptures`].
    pub mention: Grammar,
    /// `@username/list`. See [`MentionedListCaptures`].
    pub mentioned_list: Grammar,
    /// `@username` at the start of a text, after optional spaces. See [`ReplyCaptures`].
    pub reply: Grammar,
    /// URLs in free text. See [`UrlCaptures`].
    pub extract_url: Grammar,
    /// RFC 3986 derived grammars for validating a single URL.
    pub url: UrlValidation,
    triggers: AhoCorasick,
}

impl Library {
    /// Builds every grammar. Most callers want the shared [`library()`] instead.
    pub fn try_build() -> Result<Self, Error> {
        let this = Self {
            hashtag: hashtag::hashtag()?,
            mention_or_list: mention::mention_or_list()?,
            mention: mention::mention()?,
            mentioned_list: mention::mentioned_list()?,
            reply: mention::reply()?,
            extract_url: url::extract_url()?,
            url: UrlValidation::try_build()?,
            triggers: AhoCorasick::new(TRIGGER_LITERALS)
                .map_err(|source| Error::Literal { source })?,
        };
        debug!("pattern library ready");
        Ok(this)
    }

    /// Scans `text` once for the trigger literals of every grammar.
    pub fn triggers(&self, text: &str) -> Triggers {
        let mut triggers = Triggers::default();
        for m in self.triggers.find_iter(text) {
            match m.pattern().as_usize() {
                0 | 1 => triggers.hash = true,
                2 | 3 => triggers.at = true,
                _ => triggers.url = true,
            }
            if triggers == Triggers::ALL {
                break;
            }
        }
        triggers
    }
}

/// The process-wide pattern library.
///
/// Built on first use. A grammar that fails to build is a defect of this crate, not a runtime condition, so this panics instead of returning an error.
pub fn library() -> &'static Library {
    static LIBRARY: LazyLock<Library> = LazyLock::new(|| match Library::try_build() {
        Ok(library) => library,
        Err(e) => panic!("twitter-text pattern library is defective: {e}"),
    });
    &LIBRARY
}
