/*!
Code point offsets.

Matchers report UTF-8 byte offsets, while entity spans are measured in Unicode code points so that they stay the same whatever encoding the caller uses internally. ASCII-only haystacks take a fast path where both coincide.
*/
use crate::{ascii::ascii_prefix_len, Sealed};

pub trait StrCodePoints: Sealed {
    /// The number of Unicode code points (not bytes, not UTF-16 units).
    ///
    /// ```
    /// use twitter_text_unicode::str::StrCodePoints;
    ///
    /// assert_eq!("#hashtag".char_len(), 8);
    /// assert_eq!("＃タグ".char_len(), 3);
    /// ```
    fn char_len(&self) -> usize;

    /// The byte offset of the code point at `char_index`, or `None` if out of range.
    ///
    /// `char_index == self.char_len()` is valid and returns `self.len()`.
    ///
    /// ```
    /// use twitter_text_unicode::str::StrCodePoints;
    ///
    /// assert_eq!("é@user".byte_offset(1), Some(2));
    /// assert_eq!("é@user".byte_offset(6), Some(7));
    /// assert_eq!("é@user".byte_offset(7), None);
    /// ```
    fn byte_offset(&self, char_index: usize) -> Option<usize>;
}

impl StrCodePoints for str {
    fn char_len(&self) -> usize {
        let ascii = ascii_prefix_len(self);
        ascii + self[ascii..].chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> Option<usize> {
        let ascii = ascii_prefix_len(self);
        if char_index <= ascii {
            return Some(char_index);
        }
        self[ascii..]
            .char_indices()
            .map(|(i, _)| ascii + i)
            .chain([self.len()])
            .nth(char_index - ascii)
    }
}

/// Converts byte offsets of a haystack into code point indices.
///
/// Offsets are expected to be queried mostly in ascending order, as matches are reported. Each query then only scans the bytes since the previous one. Querying a smaller offset restarts from the beginning.
///
/// ```
/// use twitter_text_unicode::str::CharIndexer;
///
/// let text = "café #tag";
/// let mut indexer = CharIndexer::new(text);
/// assert_eq!(indexer.char_index(6), 5);
/// assert_eq!(indexer.char_index(text.len()), 9);
/// assert_eq!(indexer.char_index(0), 0);
/// ```
#[derive(Clone, Debug)]
pub struct CharIndexer<'h> {
    haystack: &'h str,
    /// Below this byte offset the haystack is ASCII-only.
    ascii_len: usize,
    byte: usize,
    chars: usize,
}

impl<'h> CharIndexer<'h> {
    pub fn new(haystack: &'h str) -> Self {
        Self {
            haystack,
            ascii_len: ascii_prefix_len(haystack),
            byte: 0,
            chars: 0,
        }
    }

    /// `byte` must be on a char boundary and not greater than the haystack length.
    pub fn char_index(&mut self, byte: usize) -> usize {
        debug_assert!(self.haystack.is_char_boundary(byte));
        if byte <= self.ascii_len {
            return byte;
        }
        if byte < self.byte || self.byte < self.ascii_len {
            self.byte = self.ascii_len;
            self.chars = self.ascii_len;
        }
        self.chars += self.haystack[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
