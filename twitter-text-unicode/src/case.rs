/*!
## ASCII-only case mapping
Case insensitivity in this workspace is restricted to the 52 ASCII letters. Unicode simple case folding is deliberately not used: it would make `k` match `K` (U+212A KELVIN SIGN) and `s` match `ſ` (U+017F LATIN SMALL LETTER LONG S), and locale-dependent folding (e.g. Turkish dotless `ı`) would make results differ across runtimes.

- Compared to [`char::to_lowercase()`]/[`str::to_lowercase()`] in `std`: only ASCII letters are mapped, everything else is returned unchanged.
- Compared to the `(?i)` flag of the [`regex`](https://docs.rs/regex/) crate: the same for ASCII, but no non-ASCII code point ever becomes equivalent to an ASCII one.
*/
use std::ops::RangeInclusive;

/// Returns the other-case ASCII letter of `c`, or `None` if `c` is not an ASCII letter.
///
/// ```
/// use twitter_text_unicode::case::ascii_counterpart;
///
/// assert_eq!(ascii_counterpart('a'), Some('A'));
/// assert_eq!(ascii_counterpart('Z'), Some('z'));
/// assert_eq!(ascii_counterpart('_'), None);
/// assert_eq!(ascii_counterpart('é'), None);
/// ```
#[inline]
pub fn ascii_counterpart(c: char) -> Option<char> {
    if c.is_ascii_lowercase() {
        Some(c.to_ascii_uppercase())
    } else if c.is_ascii_uppercase() {
        Some(c.to_ascii_lowercase())
    } else {
        None
    }
}

/// Returns the other-case counterparts of the ASCII letters in `range`, as at most two ranges.
///
/// Code points outside of `A-Z` and `a-z` contribute nothing.
///
/// ```
/// use twitter_text_unicode::case::ascii_counterpart_ranges;
///
/// let ranges: Vec<_> = ascii_counterpart_ranges('0'..='c').collect();
/// assert_eq!(ranges, vec!['a'..='z', 'A'..='C']);
/// ```
pub fn ascii_counterpart_ranges(
    range: RangeInclusive<char>,
) -> impl Iterator<Item = RangeInclusive<char>> {
    let (start, end) = range.into_inner();
    let clamp = move |lo: char, hi: char| {
        let (s, e) = (start.max(lo), end.min(hi));
        (s <= e).then(|| {
            // Both ends are ASCII letters here
            ascii_counterpart(s).unwrap_or(s)..=ascii_counterpart(e).unwrap_or(e)
        })
    };
    clamp('A', 'Z').into_iter().chain(clamp('a', 'z'))
}

/// ASCII case-insensitive equality. Non-ASCII code points must be identical.
///
/// ```
/// use twitter_text_unicode::case::eq_ignore_case;
///
/// assert!(eq_ignore_case("HTTPS", "https"));
/// assert!(eq_ignore_case("\u{212A}", "k") == false);
/// ```
#[inline]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
