//! ASCII-only case insensitivity on [`Hir`].
//!
//! Grammars are written in lowercase and made case-insensitive here, instead of with the `(?i)` flag, so that only the 52 ASCII letters are folded. See [`twitter_text_unicode::case`].
//!
//! Negated classes are not folded before negation: `[^a-z]` keeps matching `A`. They have to spell out both cases, e.g. `[^a-zA-Z]`.
use itertools::Itertools;
use regex_syntax::hir::{Class, ClassUnicode, ClassUnicodeRange, Hir, HirKind};
use twitter_text_unicode::case::ascii_counterpart_ranges;

pub fn literal_to_ascii_case_insensitive(s: &[u8]) -> Hir {
    let mut hirs = Vec::with_capacity(s.len());
    for (is_ascii_alphabetic, group) in &s.iter().copied().chunk_by(u8::is_ascii_alphabetic) {
        if is_ascii_alphabetic {
            for b in group {
                let c = char::from(b);
                let class = ClassUnicode::new([ClassUnicodeRange::new(c, c)]);
                hirs.push(Hir::class(Class::Unicode(class_to_ascii_case_insensitive(
                    class,
                ))))
            }
        } else {
            // Multi-byte chars are never split: their bytes are all >= 0x80.
            hirs.push(Hir::literal(group.collect_vec().into_boxed_slice()))
        }
    }
    Hir::concat(hirs)
}

pub fn class_to_ascii_case_insensitive(mut class: ClassUnicode) -> ClassUnicode {
    let counterparts = ClassUnicode::new(
        class
            .iter()
            .flat_map(|r| ascii_counterpart_ranges(r.start()..=r.end()))
            .map(|r| ClassUnicodeRange::new(*r.start(), *r.end())),
    );
    class.union(&counterparts);
    class
}

pub fn hir_to_ascii_case_insensitive(hir: Hir) -> Hir {
    match hir.kind() {
        HirKind::Empty | HirKind::Look(_) => hir,
        HirKind::Literal(_) => {
            let literal = match hir.into_kind() {
                HirKind::Literal(literal) => literal,
                _ => unreachable!(),
            };
            literal_to_ascii_case_insensitive(&literal.0)
        }
        HirKind::Class(_) => {
            let class = match hir.into_kind() {
                HirKind::Class(class) => class,
                _ => unreachable!(),
            };
            Hir::class(match class {
                Class::Unicode(class) => Class::Unicode(class_to_ascii_case_insensitive(class)),
                Class::Bytes(mut class) => {
                    // Already ASCII-only for bytes
                    class.case_fold_simple();
                    Class::Bytes(class)
                }
            })
        }
        HirKind::Repetition(_) => {
            let mut repetition = match hir.into_kind() {
                HirKind::Repetition(repetition) => repetition,
                _ => unreachable!(),
            };
            repetition.sub = hir_to_ascii_case_insensitive(*repetition.sub).into();
            Hir::repetition(repetition)
        }
        HirKind::Capture(_) => {
            let mut capture = match hir.into_kind() {
                HirKind::Capture(capture) => capture,
                _ => unreachable!(),
            };
            capture.sub = hir_to_ascii_case_insensitive(*capture.sub).into();
            Hir::capture(capture)
        }
        HirKind::Concat(_) => {
            let subs = match hir.into_kind() {
                HirKind::Concat(subs) => subs,
                _ => unreachable!(),
            }
            .into_iter()
            .map(hir_to_ascii_case_insensitive)
            .collect();
            Hir::concat(subs)
        }
        HirKind::Alternation(_) => {
            let subs = match hir.into_kind() {
                HirKind::Alternation(subs) => subs,
                _ => unreachable!(),
            }
            .into_iter()
            .map(hir_to_ascii_case_insensitive)
            .collect();
            Hir::alternation(subs)
        }
    }
}

#[cfg(test)]
mod tests {
    use regex_automata::meta::Regex;
    use regex_syntax::parse;

    use super::*;

    fn build(pattern: &str) -> Regex {
        let hir = hir_to_ascii_case_insensitive(parse(pattern).unwrap());
        Regex::builder().build_from_hir(&hir).unwrap()
    }

    #[test]
    fn literal() {
        let re = build(r"\Ahttps?://\z");
        assert!(re.is_match("http://"));
        assert!(re.is_match("HTTPS://"));
        assert!(re.is_match("hTtP://"));
        assert!(re.is_match("ftp://") == false);

        let re = build(r"\ART:?＠\z");
        assert!(re.is_match("rt:＠"));
        assert!(re.is_match("Rt＠"));
    }

    #[test]
    fn class() {
        let re = build(r"\A[a-z0-9_]+\z");
        assert!(re.is_match("User_01"));
        // No Unicode simple case folding
        assert!(re.is_match("\u{212A}") == false);
        assert!(re.is_match("\u{17F}") == false);

        let re = build(r"\A[^a-zA-Z0-9]\z");
        assert!(re.is_match("A") == false);
        assert!(re.is_match("a") == false);
        assert!(re.is_match("-"));

        let re = build(r"\A[a-z\x{C0}-\x{D6}]+\z");
        assert!(re.is_match("CafÀ"));
        assert!(re.is_match("Caf\u{E0}") == false);
    }

    #[test]
    fn captures_survive() {
        let re = build(r"(?P<tag>[a-z]+)");
        let mut caps = re.create_captures();
        re.captures("#TAG", &mut caps);
        assert_eq!(caps.get_group_by_name("tag").map(|s| s.range()), Some(1..4));
    }
}
