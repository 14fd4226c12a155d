//! Named character classes shared by grammars and by the checks grammars cannot express.
use std::fmt::{self, Write};

/// A named, immutable set of code point ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharClass {
    name: &'static str,
    /// Inclusive, sorted and non-overlapping.
    ranges: &'static [(char, char)],
}

impl CharClass {
    pub const fn new(name: &'static str, ranges: &'static [(char, char)]) -> Self {
        Self { name, ranges }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ranges(&self) -> &'static [(char, char)] {
        self.ranges
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges
            .binary_search_by(|&(start, end)| {
                if end < c {
                    std::cmp::Ordering::Less
                } else if start > c {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// The class items without brackets, e.g. `\x{40}\x{FF20}`, for embedding into a larger class.
    pub fn items(&self) -> String {
        let mut s = String::new();
        for &(start, end) in self.ranges {
            // Infallible for `String`
            let _ = if start == end {
                write!(s, r"\x{{{:X}}}", start as u32)
            } else {
                write!(s, r"\x{{{:X}}}-\x{{{:X}}}", start as u32, end as u32)
            };
        }
        s
    }
}

/// Renders as a bracketed class, e.g. `[\x{23}\x{FF03}]`.
impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items())
    }
}

/// Unicode space characters. Not the same as `\p{White_Space}`: U+180E MONGOLIAN VOWEL SEPARATOR is included.
pub const UNICODE_SPACES: CharClass = CharClass::new(
    "unicode_spaces",
    &[
        ('\u{09}', '\u{0D}'),
        ('\u{20}', '\u{20}'),
        ('\u{85}', '\u{85}'),
        ('\u{A0}', '\u{A0}'),
        ('\u{1680}', '\u{1680}'),
        ('\u{180E}', '\u{180E}'),
        ('\u{2000}', '\u{200A}'),
        ('\u{2028}', '\u{2029}'),
        ('\u{202F}', '\u{202F}'),
        ('\u{205F}', '\u{205F}'),
        ('\u{3000}', '\u{3000}'),
    ],
);

/// Latin-1 Supplement letters, without `×` and `÷`.
pub const LATIN_ACCENTS: CharClass = CharClass::new(
    "latin_accents",
    &[
        ('\u{C0}', '\u{D6}'),
        ('\u{D8}', '\u{F6}'),
        ('\u{F8}', '\u{FF}'),
    ],
);

pub const AT_SIGNS: CharClass = CharClass::new("at_signs", &[('@', '@'), ('＠', '＠')]);

pub const HASH_SIGNS: CharClass = CharClass::new("hash_signs", &[('#', '#'), ('＃', '＃')]);

/// BOM, noncharacters and bidirectional embedding/override controls.
pub const INVALID_CHARS: CharClass = CharClass::new(
    "invalid_chars",
    &[
        ('\u{202A}', '\u{202E}'),
        ('\u{FEFF}', '\u{FEFF}'),
        ('\u{FFFE}', '\u{FFFF}'),
    ],
);
