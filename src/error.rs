//! Error types for lenient URL parsing.

use std::fmt;

/// Which post-parse validation check rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidUrlKind {
    /// The input parsed, but resolved to no host at all.
    EmptyHost,
    /// The host ends in a port delimiter with no digits after it.
    InvalidPort,
}

impl fmt::Display for InvalidUrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidUrlKind::EmptyHost => f.write_str("empty host field"),
            InvalidUrlKind::InvalidPort => f.write_str("invalid port specified"),
        }
    }
}

/// Error returned by [`parse`](crate::parse).
///
/// Syntax errors from the underlying grammar parser pass through unchanged;
/// only the host validation performed by this crate produces the
/// [`InvalidUrl`](Error::InvalidUrl) family, testable via
/// [`is_invalid_url`](Error::is_invalid_url).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The RFC 3986 parser rejected the rewritten input.
    #[error(transparent)]
    Syntax(#[from] fluent_uri::error::ParseError),

    /// The input parsed, but failed host validation.
    #[error("parse {raw:?}: {kind}")]
    InvalidUrl {
        /// The original raw input, echoed verbatim.
        raw: String,
        /// Which check failed.
        kind: InvalidUrlKind,
    },
}

impl Error {
    /// Whether this error came from this crate's own host validation rather
    /// than the underlying grammar parser.
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, Error::InvalidUrl { .. })
    }

    pub(crate) fn invalid(raw: &str, kind: InvalidUrlKind) -> Self {
        Error::InvalidUrl {
            raw: raw.to_owned(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_echoes_raw_input() {
        let err = Error::invalid("localhost:", InvalidUrlKind::InvalidPort);
        assert_eq!(err.to_string(), "parse \"localhost:\": invalid port specified");

        let err = Error::invalid("", InvalidUrlKind::EmptyHost);
        assert_eq!(err.to_string(), "parse \"\": empty host field");
    }

    #[test]
    fn family_membership() {
        assert!(Error::invalid("x", InvalidUrlKind::EmptyHost).is_invalid_url());
        assert!(Error::invalid("x", InvalidUrlKind::InvalidPort).is_invalid_url());

        let syntax = fluent_uri::UriRef::parse("a b").unwrap_err();
        assert!(!Error::Syntax(syntax).is_invalid_url());
    }
}
