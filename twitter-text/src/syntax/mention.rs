use super::{
    class::{AT_SIGNS, LATIN_ACCENTS, UNICODE_SPACES},
    Capture, Grammar, GrammarCaptures,
};
use crate::Error;

const USERNAME: &str = "[a-z0-9_]{1,20}";
const LIST_SLUG: &str = r"/[a-z][a-z0-9_\-]{0,24}";
/// Negated classes are not made case-insensitive, so both cases are listed.
const MENTION_BOUNDARY: &str = "[^a-zA-Z0-9_]";

pub(super) fn mention_or_list() -> Result<Grammar, Error> {
    Grammar::new(
        "mention_or_list",
        &format!(
            "(?P<before>{MENTION_BOUNDARY}|^|RT:?)(?P<at>{AT_SIGNS}+)(?P<username>{USERNAME})(?P<list>{LIST_SLUG})?"
        ),
    )
}

pub(super) fn mention() -> Result<Grammar, Error> {
    Grammar::new(
        "mention",
        &format!("(?P<before>^|{MENTION_BOUNDARY}){AT_SIGNS}(?P<username>{USERNAME})"),
    )
}

pub(super) fn mentioned_list() -> Result<Grammar, Error> {
    Grammar::new(
        "mentioned_list",
        &format!(
            "(?P<before>^|{MENTION_BOUNDARY}){AT_SIGNS}(?P<username_and_list>{USERNAME}{LIST_SLUG})"
        ),
    )
}

pub(super) fn reply() -> Result<Grammar, Error> {
    Grammar::new(
        "reply",
        &format!("^{UNICODE_SPACES}*{AT_SIGNS}(?P<username>{USERNAME})"),
    )
}

/// Whether the text right after a username match disqualifies it as a mention.
///
/// `@user@host`, `@useré` and `@user://` are not mentions of `user`.
///
/// ```
/// use twitter_text::syntax::is_mention_end;
///
/// assert!(is_mention_end("＠other"));
/// assert!(is_mention_end("://example.com"));
/// assert!(is_mention_end(" hi") == false);
/// assert!(is_mention_end("") == false);
/// ```
pub fn is_mention_end(after: &str) -> bool {
    match after.chars().next() {
        Some(c) => AT_SIGNS.contains(c) || LATIN_ACCENTS.contains(c) || after.starts_with("://"),
        None => false,
    }
}

/// A match of [`Library::mention`](super::Library::mention).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MentionCaptures<'h> {
    pub before: Capture<'h>,
    pub username: Capture<'h>,
    /// The character following the match, not consumed by it. `None` at the end of the text.
    pub after: Option<char>,
    rest: &'h str,
}

impl<'h> MentionCaptures<'h> {
    pub fn from_captures(caps: &GrammarCaptures<'h>) -> Option<Self> {
        let rest = caps.haystack().get(caps.whole().end..)?;
        Some(Self {
            before: caps.get("before")?,
            username: caps.get("username")?,
            after: rest.chars().next(),
            rest,
        })
    }

    /// Whether the match is followed by something that makes it not a mention. See [`is_mention_end()`].
    pub fn is_rejected_by_end(&self) -> bool {
        is_mention_end(self.rest)
    }
}

/// A match of [`Library::mention_or_list`](super::Library::mention_or_list).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MentionOrListCaptures<'h> {
    /// A boundary character, empty at the start of the text, or `RT`/`RT:`.
    pub before: Capture<'h>,
    /// One or more at signs.
    pub at: Capture<'h>,
    pub username: Capture<'h>,
    /// The list slug including the leading `/`.
    pub list: Option<Capture<'h>>,
}

impl<'h> MentionOrListCaptures<'h> {
    pub fn from_captures(caps: &GrammarCaptures<'h>) -> Option<Self> {
        Some(Self {
            before: caps.get("before")?,
            at: caps.get("at")?,
            username: caps.get("username")?,
            list: caps.get("list"),
        })
    }
}

/// A match of [`Library::mentioned_list`](super::Library::mentioned_list).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MentionedListCaptures<'h> {
    pub before: Capture<'h>,
    /// `username/list`, without the at sign.
    pub username_and_list: Capture<'h>,
}

impl<'h> MentionedListCaptures<'h> {
    pub fn from_captures(caps: &GrammarCaptures<'h>) -> Option<Self> {
        Some(Self {
            before: caps.get("before")?,
            username_and_list: caps.get("username_and_list")?,
        })
    }
}

/// A match of [`Library::reply`](super::Library::reply).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyCaptures<'h> {
    pub username: Capture<'h>,
}

impl<'h> ReplyCaptures<'h> {
    pub fn from_captures(caps: &GrammarCaptures<'h>) -> Option<Self> {
        Some(Self {
            username: caps.get("username")?,
        })
    }
}
