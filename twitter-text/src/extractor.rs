/*!
Entity extraction.

```
use twitter_text::{EntityKind, Extractor};

let extractor = Extractor::new();
let text = "@alice see https://example.com/#x #Rust ＃ラスト";
assert_eq!(extractor.extract_hashtags(text), ["Rust"]);
assert_eq!(extractor.extract_reply_screenname(text).as_deref(), Some("alice"));

let entities = extractor.extract_entities_with_indices(text);
let kinds: Vec<_> = entities.iter().map(|e| e.kind()).collect();
assert_eq!(kinds, [EntityKind::Mention, EntityKind::Url, EntityKind::Hashtag]);
assert_eq!(entities[2].span().range(), 34..39);
```

## Rules
- Results are ordered left to right and never overlap.
- URLs take precedence: a hashtag or mention inside a URL is not reported on its own.
- Spans are measured in Unicode code points. See [`Span`].
- A username followed by an at sign, a Latin-1 accented letter or `://` is not a mention.
*/
use std::{collections::BTreeMap, ops::Range};

use tracing::trace;
use twitter_text_unicode::str::CharIndexer;

use crate::{
    syntax::{
        is_mention_end, library, HashtagCaptures, Library, MentionCaptures, MentionOrListCaptures,
        MentionedListCaptures, ReplyCaptures, Triggers, UrlCaptures,
    },
    Entity, EntityKind, Span,
};

/// An entity before its byte offsets are converted into code point indices.
#[derive(Clone, Debug)]
struct Found<'h> {
    kind: EntityKind,
    range: Range<usize>,
    value: &'h str,
    fields: Vec<(&'static str, &'h str)>,
}

impl<'h> Found<'h> {
    fn new(kind: EntityKind, range: Range<usize>, value: &'h str) -> Self {
        Self {
            kind,
            range,
            value,
            fields: Vec::new(),
        }
    }

    fn overlaps(&self, range: &Range<usize>) -> bool {
        self.range.start < range.end && range.start < self.range.end
    }

    fn into_entity(self, indexer: &mut CharIndexer) -> Entity {
        let start = indexer.char_index(self.range.start);
        let end = indexer.char_index(self.range.end);
        self.fields.into_iter().fold(
            Entity::new(self.kind, Span::new_ordered(start, end), self.value),
            |entity, (name, value)| entity.with_field(name, value),
        )
    }
}

/// `found` must be sorted by position.
fn into_entities(text: &str, found: Vec<Found>) -> Vec<Entity> {
    let mut indexer = CharIndexer::new(text);
    found
        .into_iter()
        .map(|found| found.into_entity(&mut indexer))
        .collect()
}

fn into_values(found: Vec<Found>) -> Vec<String> {
    found.into_iter().map(|f| f.value.to_owned()).collect()
}

/// Drops the entities overlapping a URL. Both `found` and `urls` must be sorted by position.
fn outside_urls<'h>(found: impl Iterator<Item = Found<'h>>, urls: &[Found<'_>]) -> Vec<Found<'h>> {
    let mut urls = urls.iter().peekable();
    found
        .filter(|found| {
            // URLs ending before this entity cannot overlap any later one either
            while urls
                .next_if(|url| url.range.end <= found.range.start)
                .is_some()
            {}
            urls.peek().map_or(true, |url| !url.overlaps(&found.range))
        })
        .collect()
}

/// Applies the [pattern library](crate::syntax) to texts.
///
/// Stateless and cheap to copy. Every method is a pure function of its input.
#[derive(Clone, Copy, Debug)]
pub struct Extractor {
    library: &'static Library,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Uses the process-wide [`library()`].
    pub fn new() -> Self {
        Self {
            library: library(),
        }
    }

    /// Uses a separately built library, e.g. one from [`Library::try_build()`] that has been leaked.
    pub fn with_library(library: &'static Library) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &'static Library {
        self.library
    }

    fn triggers(&self, text: &str) -> Triggers {
        #[cfg(feature = "perf-literal")]
        return self.library.triggers(text);
        #[cfg(not(feature = "perf-literal"))]
        {
            _ = text;
            Triggers::ALL
        }
    }

    fn find_urls<'h>(&self, text: &'h str, triggers: Triggers) -> Vec<Found<'h>> {
        if !triggers.url {
            return Vec::new();
        }
        self.library
            .extract_url
            .captures_iter(text)
            .filter_map(|caps| UrlCaptures::from_captures(&caps))
            .map(|caps| {
                let mut found = Found::new(EntityKind::Url, caps.url.range(), caps.url.as_str());
                found.fields.push(("protocol", caps.protocol.as_str()));
                found.fields.push(("domain", caps.domain.as_str()));
                if let Some(path) = caps.path {
                    found.fields.push(("path", path.as_str()));
                }
                if let Some(query) = caps.query {
                    found.fields.push(("query", query.as_str()));
                }
                found
            })
            .collect()
    }

    fn find_hashtags<'h>(&self, text: &'h str, urls: &[Found]) -> Vec<Found<'h>> {
        let found = self
            .library
            .hashtag
            .captures_iter(text)
            .filter_map(|caps| HashtagCaptures::from_captures(&caps))
            .map(|caps| {
                Found::new(
                    EntityKind::Hashtag,
                    caps.hash.start..caps.tag.end,
                    caps.tag.as_str(),
                )
            });
        outside_urls(found, urls)
    }

    fn find_mentions<'h>(&self, text: &'h str, urls: &[Found]) -> Vec<Found<'h>> {
        let found = self
            .library
            .mention
            .captures_iter(text)
            .filter_map(|caps| MentionCaptures::from_captures(&caps))
            .filter(|caps| !caps.is_rejected_by_end())
            .map(|caps| {
                Found::new(
                    EntityKind::Mention,
                    caps.before.end..caps.username.end,
                    caps.username.as_str(),
                )
            });
        outside_urls(found, urls)
    }

    fn find_mentioned_lists<'h>(&self, text: &'h str, urls: &[Found]) -> Vec<Found<'h>> {
        let found = self
            .library
            .mentioned_list
            .captures_iter(text)
            .filter_map(|caps| MentionedListCaptures::from_captures(&caps))
            .map(|caps| {
                let value = caps.username_and_list.as_str();
                let mut found = Found::new(
                    EntityKind::MentionedList,
                    caps.before.end..caps.username_and_list.end,
                    value,
                );
                if let Some((username, list)) = value.split_once('/') {
                    found.fields.push(("username", username));
                    found.fields.push(("list", list));
                }
                found
            });
        outside_urls(found, urls)
    }

    fn find_mentions_or_lists<'h>(&self, text: &'h str, urls: &[Found]) -> Vec<Found<'h>> {
        let found = self
            .library
            .mention_or_list
            .captures_iter(text)
            .filter_map(|caps| {
                let rest = &text[caps.whole().end..];
                MentionOrListCaptures::from_captures(&caps).filter(|_| !is_mention_end(rest))
            })
            .map(|caps| match caps.list {
                Some(list) => {
                    let mut found = Found::new(
                        EntityKind::MentionedList,
                        caps.at.start..list.end,
                        &text[caps.username.start..list.end],
                    );
                    found.fields.push(("username", caps.username.as_str()));
                    // Without the leading `/`
                    found.fields.push(("list", &list.as_str()[1..]));
                    found
                }
                None => Found::new(
                    EntityKind::Mention,
                    caps.at.start..caps.username.end,
                    caps.username.as_str(),
                ),
            });
        outside_urls(found, urls)
    }

    fn find_reply<'h>(&self, text: &'h str) -> Option<Found<'h>> {
        let caps = self.library.reply.captures(text)?;
        if is_mention_end(&text[caps.whole().end..]) {
            return None;
        }
        let caps = ReplyCaptures::from_captures(&caps)?;
        // The at sign right before the username
        let (at, _) = text[..caps.username.start].char_indices().next_back()?;
        Some(Found::new(
            EntityKind::Reply,
            at..caps.username.end,
            caps.username.as_str(),
        ))
    }

    /// Hashtags, without the hash sign.
    ///
    /// ```
    /// use twitter_text::Extractor;
    ///
    /// let extractor = Extractor::new();
    /// assert_eq!(extractor.extract_hashtags("#a #1b #123 c#d"), ["a", "1b"]);
    /// ```
    pub fn extract_hashtags(&self, text: &str) -> Vec<String> {
        into_values(self.hashtags(text))
    }

    pub fn extract_hashtags_with_indices(&self, text: &str) -> Vec<Entity> {
        into_entities(text, self.hashtags(text))
    }

    fn hashtags<'h>(&self, text: &'h str) -> Vec<Found<'h>> {
        let triggers = self.triggers(text);
        if !triggers.hash {
            return Vec::new();
        }
        let urls = self.find_urls(text, triggers);
        let found = self.find_hashtags(text, &urls);
        trace!(kind = %EntityKind::Hashtag, count = found.len(), "extracted");
        found
    }

    /// Mentioned usernames, without the at sign. Usernames of mentioned lists are included.
    ///
    /// ```
    /// use twitter_text::Extractor;
    ///
    /// let extractor = Extractor::new();
    /// assert_eq!(
    ///     extractor.extract_mentions("@a, ＠b and @c/list but not d@e.com"),
    ///     ["a", "b", "c"],
    /// );
    /// ```
    pub fn extract_mentions(&self, text: &str) -> Vec<String> {
        into_values(self.mentions(text))
    }

    pub fn extract_mentions_with_indices(&self, text: &str) -> Vec<Entity> {
        into_entities(text, self.mentions(text))
    }

    fn mentions<'h>(&self, text: &'h str) -> Vec<Found<'h>> {
        let triggers = self.triggers(text);
        if !triggers.at {
            return Vec::new();
        }
        let urls = self.find_urls(text, triggers);
        let found = self.find_mentions(text, &urls);
        trace!(kind = %EntityKind::Mention, count = found.len(), "extracted");
        found
    }

    /// Mentioned lists as `username/list`.
    ///
    /// ```
    /// use twitter_text::Extractor;
    ///
    /// let extractor = Extractor::new();
    /// assert_eq!(extractor.extract_mentioned_lists("sample @user/list text"), ["user/list"]);
    /// ```
    pub fn extract_mentioned_lists(&self, text: &str) -> Vec<String> {
        into_values(self.mentioned_lists(text))
    }

    /// Each entity also has `username` and `list` fields.
    pub fn extract_mentioned_lists_with_indices(&self, text: &str) -> Vec<Entity> {
        into_entities(text, self.mentioned_lists(text))
    }

    fn mentioned_lists<'h>(&self, text: &'h str) -> Vec<Found<'h>> {
        let triggers = self.triggers(text);
        if !triggers.at {
            return Vec::new();
        }
        let urls = self.find_urls(text, triggers);
        let found = self.find_mentioned_lists(text, &urls);
        trace!(kind = %EntityKind::MentionedList, count = found.len(), "extracted");
        found
    }

    /// Mentions and mentioned lists in one pass, as they would be linked.
    ///
    /// Unlike [`extract_mentions_with_indices()`](Self::extract_mentions_with_indices), `@user/list` is one [`MentionedList`](EntityKind::MentionedList) entity instead of a mention of `user`, and `RT@user` is a mention. A span starts at the first of consecutive at signs.
    pub fn extract_mentions_or_lists_with_indices(&self, text: &str) -> Vec<Entity> {
        into_entities(text, self.mentions_or_lists(text))
    }

    fn mentions_or_lists<'h>(&self, text: &'h str) -> Vec<Found<'h>> {
        let triggers = self.triggers(text);
        if !triggers.at {
            return Vec::new();
        }
        let urls = self.find_urls(text, triggers);
        let found = self.find_mentions_or_lists(text, &urls);
        trace!(count = found.len(), "extracted mentions or lists");
        found
    }

    /// The username a text replies to: an at sign at the start of the text, after optional spaces.
    ///
    /// ```
    /// use twitter_text::Extractor;
    ///
    /// let extractor = Extractor::new();
    /// assert_eq!(extractor.extract_reply_screenname("\u{3000}@user hi").as_deref(), Some("user"));
    /// assert_eq!(extractor.extract_reply_screenname("hi @user"), None);
    /// ```
    pub fn extract_reply_screenname(&self, text: &str) -> Option<String> {
        self.reply(text).map(|f| f.value.to_owned())
    }

    pub fn extract_reply_with_indices(&self, text: &str) -> Option<Entity> {
        let found = self.reply(text)?;
        into_entities(text, vec![found]).pop()
    }

    fn reply<'h>(&self, text: &'h str) -> Option<Found<'h>> {
        if !self.triggers(text).at {
            return None;
        }
        let found = self.find_reply(text);
        trace!(kind = %EntityKind::Reply, count = found.is_some() as usize, "extracted");
        found
    }

    /// URLs with `protocol`, `domain` and, when present, `path` and `query` fields. The domain field includes the port.
    ///
    /// ```
    /// use twitter_text::Extractor;
    ///
    /// let extractor = Extractor::new();
    /// let urls = extractor.extract_urls("Check out http://example.com/foo?bar=1.");
    /// assert_eq!(urls[0].value(), "http://example.com/foo?bar=1");
    /// assert_eq!(urls[0].field("domain"), Some("example.com"));
    /// assert_eq!(urls[0].field("query"), Some("?bar=1"));
    /// assert_eq!(urls[0].span().range(), 10..38);
    /// ```
    pub fn extract_urls(&self, text: &str) -> Vec<Entity> {
        into_entities(text, self.urls(text))
    }

    pub fn extract_url_strings(&self, text: &str) -> Vec<String> {
        into_values(self.urls(text))
    }

    fn urls<'h>(&self, text: &'h str) -> Vec<Found<'h>> {
        let found = self.find_urls(text, self.triggers(text));
        trace!(kind = %EntityKind::Url, count = found.len(), "extracted");
        found
    }

    /// URLs, hashtags, mentions and mentioned lists, ordered by position.
    ///
    /// Every kind is found by the same rules as its own `_with_indices` method. Overlaps are then resolved by kind, in the order [`Url`](EntityKind::Url), [`MentionedList`](EntityKind::MentionedList), [`Mention`](EntityKind::Mention), [`Hashtag`](EntityKind::Hashtag), so the username of a mentioned list is not also a mention. Replies are not included, the reply target is also a mention.
    ///
    /// ```
    /// use twitter_text::{EntityKind, Extractor};
    ///
    /// let extractor = Extractor::new();
    /// let entities = extractor.extract_entities_with_indices("@user/list @user");
    /// let kinds: Vec<_> = entities.iter().map(|e| e.kind()).collect();
    /// assert_eq!(kinds, [EntityKind::MentionedList, EntityKind::Mention]);
    /// ```
    pub fn extract_entities_with_indices(&self, text: &str) -> Vec<Entity> {
        let triggers = self.triggers(text);
        let urls = self.find_urls(text, triggers);
        let mut candidates = Vec::new();
        if triggers.at {
            candidates.extend(self.find_mentioned_lists(text, &urls));
            candidates.extend(self.find_mentions(text, &urls));
        }
        if triggers.hash {
            candidates.extend(self.find_hashtags(text, &urls));
        }
        candidates.extend(urls);

        candidates.sort_by_key(|found| (priority(found.kind), found.range.start));
        // Kept entities are disjoint, so only the last one starting before the end of a candidate can overlap it
        let mut kept: BTreeMap<usize, Found> = BTreeMap::new();
        for found in candidates {
            let overlaps = kept
                .range(..found.range.end)
                .next_back()
                .is_some_and(|(_, k)| k.overlaps(&found.range));
            if !overlaps {
                kept.insert(found.range.start, found);
            }
        }

        trace!(count = kept.len(), "extracted entities");
        into_entities(text, kept.into_values().collect())
    }
}

fn priority(kind: EntityKind) -> u8 {
    match kind {
        EntityKind::Url => 0,
        EntityKind::MentionedList => 1,
        EntityKind::Mention | EntityKind::Reply => 2,
        EntityKind::Hashtag => 3,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn spans(entities: &[Entity]) -> Vec<(EntityKind, &str, Range<usize>)> {
        entities
            .iter()
            .map(|e| (e.kind(), e.value(), e.span().range()))
            .collect()
    }

    #[test]
    fn hashtags() {
        let x = Extractor::new();
        assert_eq!(x.extract_hashtags("#hashtag"), ["hashtag"]);
        assert_eq!(x.extract_hashtags("#123"), Vec::<String>::new());
        assert_eq!(x.extract_hashtags("#1a"), ["1a"]);
        assert_eq!(x.extract_hashtags("#café ＃tag"), ["café", "tag"]);
        assert!(x.extract_hashtags("no tags here").is_empty());
        assert!(x.extract_hashtags("").is_empty());

        let entities = x.extract_hashtags_with_indices("日本 #tag ＃二 ＃b");
        assert_eq!(
            spans(&entities),
            [
                (EntityKind::Hashtag, "tag", 3..7),
                (EntityKind::Hashtag, "b", 11..13),
            ]
        );
    }

    #[test]
    fn hashtags_in_urls() {
        let x = Extractor::new();
        assert!(x.extract_hashtags("http://example.com/a,#tag").is_empty());
        assert_eq!(
            x.extract_hashtags("http://example.com/a #tag"),
            ["tag"]
        );
    }

    #[test]
    fn mentions() {
        let x = Extractor::new();
        assert_eq!(x.extract_mentions("sample @user mention"), ["user"]);
        assert_eq!(x.extract_mentions("@a @b"), ["a", "b"]);
        assert!(x.extract_mentions("foo@bar.com").is_empty());
        assert!(x.extract_mentions("@user@host").is_empty());
        assert!(x.extract_mentions("@useré").is_empty());
        assert!(x.extract_mentions("@user://x").is_empty());
        assert!(x.extract_mentions("http://example.com/@user/").is_empty());

        let entities = x.extract_mentions_with_indices("😀 ＠user!");
        assert_eq!(spans(&entities), [(EntityKind::Mention, "user", 2..7)]);
    }

    #[test]
    fn mentioned_lists() {
        let x = Extractor::new();
        assert_eq!(
            x.extract_mentioned_lists("sample @user/list text"),
            ["user/list"]
        );
        assert!(x.extract_mentioned_lists("@user").is_empty());

        let entities = x.extract_mentioned_lists_with_indices("hi @user/my_list");
        assert_eq!(
            spans(&entities),
            [(EntityKind::MentionedList, "user/my_list", 3..16)]
        );
        assert_eq!(entities[0].field("username"), Some("user"));
        assert_eq!(entities[0].field("list"), Some("my_list"));
    }

    #[test]
    fn mentions_or_lists() {
        let x = Extractor::new();
        let entities = x.extract_mentions_or_lists_with_indices("RT@a: @b/c @@d e@f");
        assert_eq!(
            spans(&entities),
            [
                (EntityKind::Mention, "a", 2..4),
                (EntityKind::MentionedList, "b/c", 6..10),
                (EntityKind::Mention, "d", 11..14),
            ]
        );
        assert_eq!(entities[1].field("list"), Some("c"));
        assert!(x.extract_mentions_or_lists_with_indices("@a@b").is_empty());
    }

    #[test]
    fn reply() {
        let x = Extractor::new();
        assert_eq!(x.extract_reply_screenname("@user reply").as_deref(), Some("user"));
        assert_eq!(x.extract_reply_screenname(" @user reply").as_deref(), Some("user"));
        assert_eq!(
            x.extract_reply_screenname("\u{3000}@user reply").as_deref(),
            Some("user")
        );
        assert_eq!(x.extract_reply_screenname("reply @user"), None);
        assert_eq!(x.extract_reply_screenname("@user@host"), None);
        assert_eq!(x.extract_reply_screenname(""), None);

        let entity = x.extract_reply_with_indices("\u{3000}＠user hi").unwrap();
        assert_eq!(entity.kind(), EntityKind::Reply);
        assert_eq!(entity.span().range(), 1..6);
    }

    #[test]
    fn urls() {
        let x = Extractor::new();
        assert_eq!(
            x.extract_url_strings("a http://a.co, https://b.co/x?y=z."),
            ["http://a.co", "https://b.co/x?y=z"]
        );

        let urls = x.extract_urls("日本 http://example.com:8080/p");
        assert_eq!(
            spans(&urls),
            [(EntityKind::Url, "http://example.com:8080/p", 3..28)]
        );
        let url = &urls[0];
        assert_eq!(url.field("protocol"), Some("http://"));
        assert_eq!(url.field("domain"), Some("example.com:8080"));
        assert_eq!(url.field("path"), Some("/p"));
        assert_eq!(url.field("query"), None);

        assert!(x.extract_urls("ftp://example.com").is_empty());
        assert!(x.extract_urls("example.com").is_empty());
    }

    #[test]
    fn long_path() {
        let x = Extractor::new();
        let text = format!("Check out http://example.com/{}", "a".repeat(10_000));
        let urls = x.extract_url_strings(&text);
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].len(), text.len() - "Check out ".len());
    }

    #[test]
    fn entities() {
        let x = Extractor::new();
        let entities = x.extract_entities_with_indices(
            "@a check http://example.com/a,#b?c=1 #tag @b/list ＃c",
        );
        assert_eq!(
            spans(&entities),
            [
                (EntityKind::Mention, "a", 0..2),
                (EntityKind::Url, "http://example.com/a,#b?c=1", 9..36),
                (EntityKind::Hashtag, "tag", 37..41),
                (EntityKind::MentionedList, "b/list", 42..49),
                (EntityKind::Hashtag, "c", 50..52),
            ]
        );
        assert!(x.extract_entities_with_indices("nothing").is_empty());
    }

    #[test]
    fn entities_follow_kind_rules() {
        let x = Extractor::new();
        assert!(x.extract_mentions("RT@jack hi").is_empty());
        assert!(x.extract_entities_with_indices("RT@jack hi").is_empty());

        for text in ["@user/list@x", "@user/listé"] {
            assert_eq!(x.extract_mentions(text), ["user"]);
            assert_eq!(x.extract_mentioned_lists(text), ["user/list"]);
            assert_eq!(
                spans(&x.extract_entities_with_indices(text)),
                [(EntityKind::MentionedList, "user/list", 0..10)]
            );
        }
    }

    #[test]
    fn many_entities() {
        let x = Extractor::new();
        let text = "#a @b http://c.co/d ".repeat(5_000);
        let entities = x.extract_entities_with_indices(&text);
        assert_eq!(entities.len(), 15_000);
        assert_eq!(
            entities.iter().filter(|e| e.kind() == EntityKind::Hashtag).count(),
            x.extract_hashtags(&text).len()
        );
    }

    #[test]
    fn with_library() {
        let library: &'static Library = Box::leak(Box::new(Library::try_build().unwrap()));
        let x = Extractor::with_library(library);
        assert_eq!(x.extract_hashtags("#a"), ["a"]);
    }

    proptest! {
        #[test]
        fn hashtag_values(text in "[a-z0-9_#＃@é /:.,]{0,40}") {
            let x = Extractor::new();
            for tag in x.extract_hashtags(&text) {
                prop_assert!(!tag.starts_with('#'));
                prop_assert_eq!(x.extract_hashtags(&format!("#{tag}")), vec![tag.clone()]);
            }
        }

        #[test]
        fn mention_values(text in "[a-zA-Z0-9_@＠é /:.]{0,40}") {
            let x = Extractor::new();
            for username in x.extract_mentions(&text) {
                prop_assert_eq!(x.extract_mentions(&format!("@{username}")), vec![username.clone()]);
            }
        }

        #[test]
        fn idempotent(text in "\\PC{0,60}") {
            let x = Extractor::new();
            prop_assert_eq!(
                x.extract_entities_with_indices(&text),
                x.extract_entities_with_indices(&text)
            );
        }

        #[test]
        fn combined_agrees_with_kinds(
            text in "[a-zA-Z0-9_#@é /:.,-]{0,40}|RT:?@[a-z]{1,5}(/[a-z]{1,5})?[@é ]?|http://[a-z]{1,5}\\.com/[a-z#@,/]{0,20} [a-z#@/ ]{0,10}"
        ) {
            let x = Extractor::new();
            let combined = x.extract_entities_with_indices(&text);
            let of_kind = |kind| {
                combined
                    .iter()
                    .filter(|e| e.kind() == kind)
                    .cloned()
                    .collect::<Vec<_>>()
            };
            let lists = x.extract_mentioned_lists_with_indices(&text);
            let mentions: Vec<_> = x
                .extract_mentions_with_indices(&text)
                .into_iter()
                .filter(|m| !lists.iter().any(|l| l.span().overlaps(&m.span())))
                .collect();
            prop_assert_eq!(of_kind(EntityKind::Url), x.extract_urls(&text));
            prop_assert_eq!(of_kind(EntityKind::Hashtag), x.extract_hashtags_with_indices(&text));
            prop_assert_eq!(of_kind(EntityKind::MentionedList), lists);
            prop_assert_eq!(of_kind(EntityKind::Mention), mentions);
        }

        #[test]
        fn ordered_disjoint(text in "[a-z#@/:. ]{0,60}|http://[a-z]{1,5}\\.com/[a-z#@,]{0,20}") {
            let x = Extractor::new();
            let entities = x.extract_entities_with_indices(&text);
            for pair in entities.windows(2) {
                prop_assert!(pair[0].span().end() <= pair[1].span().start());
            }
        }
    }
}
