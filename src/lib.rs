//! Lenient URL parsing with a guaranteed host component.
//!
//! A normalization layer in front of an RFC 3986 parser for URL-like strings
//! that arrive loosely formatted: CLI arguments, config values, user input.
//! A direct grammar parse misreads several common shapes:
//!
//! - `localhost:8080` parses as scheme `localhost` with an opaque path
//! - `10.10.10.10/url/` puts the address in the path instead of the host
//! - `localhost:` keeps the dangling port delimiter in the host
//!
//! [`parse`] rewrites such inputs so the authority is recognized, delegates
//! all grammar work to [`fluent_uri`], and rejects results whose host is
//! empty or ends in a bare `:`. On success the returned URI always carries a
//! non-empty host that does not end in a colon. Rejections from the host
//! validation are distinguishable from the delegate's own syntax errors via
//! [`Error::is_invalid_url`].

mod error;
mod rewrite;

pub use error::{Error, InvalidUrlKind};
pub use fluent_uri::UriRef;

/// Parses `raw` into a [`UriRef`], fixing authority detection first.
///
/// `raw` may be an absolute URL (`http://host/path`), a network-path
/// reference (`//host/path`), a bare host with optional port and path
/// (`host:8080/path`), or a single-slash form (`/host/path`, whose first
/// segment becomes the host). The input itself is never modified; rewriting
/// builds a new string, and error messages echo the original verbatim.
///
/// The host view checked here is the authority's `host[:port]` text, with
/// any userinfo stripped.
///
/// # Errors
///
/// [`Error::Syntax`] if the delegate parser rejects the rewritten input;
/// [`Error::InvalidUrl`] if the result has an empty host or a port delimiter
/// with no digits after it.
pub fn parse(raw: &str) -> Result<UriRef<String>, Error> {
    let rewritten = rewrite::apply(raw);
    tracing::trace!(raw, rewritten = %rewritten, "rewrote input for authority detection");

    let uri = UriRef::parse(rewritten.as_ref())?.to_owned();

    let host_port = match uri.authority() {
        Some(auth) => auth.as_str(),
        None => return Err(Error::invalid(raw, InvalidUrlKind::EmptyHost)),
    };
    // `@` cannot occur in the host or port, so this splits off the userinfo.
    let host_port = match host_port.find('@') {
        Some(at) => &host_port[at + 1..],
        None => host_port,
    };

    if host_port.is_empty() {
        return Err(Error::invalid(raw, InvalidUrlKind::EmptyHost));
    }
    if host_port.ends_with(':') {
        return Err(Error::invalid(raw, InvalidUrlKind::InvalidPort));
    }

    Ok(uri)
}
