use std::borrow::Cow;

use thiserror::Error;

/// Errors of this crate.
///
/// Not finding an entity, or finding a string invalid, is never an error: those are empty results, `None` or `false`.
#[derive(Debug, Error)]
pub enum Error {
    /// A malformed argument at the API boundary.
    ///
    /// ```
    /// use twitter_text::{EntityKind, Error};
    ///
    /// let e = "emoji".parse::<EntityKind>().unwrap_err();
    /// assert!(matches!(e, Error::InvalidArgument(_)));
    /// assert_eq!(e.to_string(), "invalid argument: unknown entity kind `emoji`");
    /// ```
    #[error("invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),

    /// A grammar failed to parse.
    #[error("grammar `{name}` is malformed")]
    Syntax {
        name: &'static str,
        #[source]
        source: Box<regex_syntax::Error>,
    },

    /// A grammar failed to compile.
    #[error("grammar `{name}` failed to build")]
    Build {
        name: &'static str,
        #[source]
        source: regex_automata::meta::BuildError,
    },

    /// The trigger literal automaton failed to build.
    #[error("trigger literals failed to build")]
    Literal {
        #[source]
        source: aho_corasick::BuildError,
    },
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
