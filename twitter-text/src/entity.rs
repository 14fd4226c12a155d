use std::{fmt, ops::Range, str::FromStr};

use twitter_text_unicode::str::StrCodePoints;

use crate::Error;

/// The kinds of entities that can be extracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Hashtag,
    Mention,
    /// `@username/list`
    MentionedList,
    /// The username a text replies to. Only extracted at the start of a text.
    Reply,
    Url,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Hashtag,
        EntityKind::Mention,
        EntityKind::MentionedList,
        EntityKind::Reply,
        EntityKind::Url,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Hashtag => "hashtag",
            EntityKind::Mention => "mention",
            EntityKind::MentionedList => "mentioned_list",
            EntityKind::Reply => "reply",
            EntityKind::Url => "url",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown entity kind `{s}`")))
    }
}

/// A half-open range of Unicode code point indices, `start..end`.
///
/// Code points, not bytes and not UTF-16 code units: `"😀 #tag"` has the hashtag at `2..6`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Fails if `start > end`.
    ///
    /// ```
    /// use twitter_text::Span;
    ///
    /// assert_eq!(Span::new(1, 5).unwrap().len(), 4);
    /// assert!(Span::new(5, 1).is_err());
    /// ```
    pub fn new(start: usize, end: usize) -> Result<Self, Error> {
        if start > end {
            return Err(Error::invalid_argument(format!(
                "span start {start} is after its end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// `start <= end` must hold.
    pub(crate) fn new_ordered(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The substring of `text` covered by this span.
    ///
    /// ```
    /// use twitter_text::Span;
    ///
    /// let text = "＃tag";
    /// assert_eq!(Span::new(1, 4).unwrap().slice(text).unwrap(), "tag");
    /// assert!(Span::new(1, 5).unwrap().slice(text).is_err());
    /// ```
    pub fn slice<'t>(&self, text: &'t str) -> Result<&'t str, Error> {
        let out_of_range = || {
            Error::invalid_argument(format!(
                "span {self} is out of range for a text of {} code points",
                text.char_len()
            ))
        };
        let start = text.byte_offset(self.start).ok_or_else(out_of_range)?;
        let end = text.byte_offset(self.end).ok_or_else(out_of_range)?;
        Ok(&text[start..end])
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A recognized entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    kind: EntityKind,
    span: Span,
    value: String,
    fields: Vec<(&'static str, String)>,
}

impl Entity {
    pub(crate) fn new(kind: EntityKind, span: Span, value: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            value: value.into(),
            fields: Vec::new(),
        }
    }

    pub(crate) fn with_field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Covers the sigil, e.g. `#` of hashtags, but not the boundary before it.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The primary value, without sigil:
    /// - [`Hashtag`](EntityKind::Hashtag): the tag
    /// - [`Mention`](EntityKind::Mention) and [`Reply`](EntityKind::Reply): the username
    /// - [`MentionedList`](EntityKind::MentionedList): `username/list`
    /// - [`Url`](EntityKind::Url): the URL
    pub fn value(&self) -> &str {
        &self.value
    }

    /// A captured field by name. URLs have `protocol`, `domain`, and, if present, `path` and `query`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn into_value(self) -> String {
        self.value
    }
}
