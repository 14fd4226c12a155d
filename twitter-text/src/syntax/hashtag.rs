use super::{
    class::{HASH_SIGNS, LATIN_ACCENTS},
    Capture, Grammar, GrammarCaptures,
};
use crate::Error;

/// A hash sign not preceded by an ASCII alphanumeric, `&` or `/`, and a tag body that is not all digits.
pub(super) fn hashtag() -> Result<Grammar, Error> {
    Grammar::new(
        "hashtag",
        &format!(
            r"(?P<before>^|[^0-9A-Za-z&/]+)(?P<hash>{hash})(?P<tag>[0-9a-z_]*[a-z_]+[a-z0-9_{latin}]*)",
            hash = HASH_SIGNS,
            latin = LATIN_ACCENTS.items(),
        ),
    )
}

/// A match of [`Library::hashtag`](super::Library::hashtag).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashtagCaptures<'h> {
    /// Empty at the start of the text.
    pub before: Capture<'h>,
    pub hash: Capture<'h>,
    pub tag: Capture<'h>,
}

impl<'h> HashtagCaptures<'h> {
    pub fn from_captures(caps: &GrammarCaptures<'h>) -> Option<Self> {
        Some(Self {
            before: caps.get("before")?,
            hash: caps.get("hash")?,
            tag: caps.get("tag")?,
        })
    }
}
