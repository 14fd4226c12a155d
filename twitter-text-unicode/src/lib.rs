//! Unicode utils for [twitter-text](https://docs.rs/twitter-text/).
/*!
## Features
- Fast [ASCII](ascii) checks, used as the fast path of every code point count
- [ASCII-only case mapping](case), for case-insensitive grammars that must not depend on Unicode or locale case folding
- [Code point offsets](str): converting UTF-8 byte offsets into code point indices and back

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
pub mod ascii;
pub mod case;
pub mod str;

mod private {
    pub trait Sealed {}
}
use private::Sealed;

impl Sealed for str {}
