use crate::error::Result;
use crate::shortcode::ShortCode;

/// A bidirectional store mapping URLs to short codes.
///
/// Implementations must deduplicate URLs (the same URL always yields the same
/// code), issue codes from a monotonically increasing sequence starting at 1,
/// and never expose a half-recorded mapping to concurrent callers.
///
/// Methods are synchronous: a store never performs I/O while holding its
/// lock, so callers on an async runtime may invoke them directly.
pub trait KeyStore: Send + Sync + 'static {
    /// Returns the short code for `url`, allocating a new one on first sight.
    ///
    /// Any string is accepted, including the empty string.
    fn shorten(&self, url: &str) -> ShortCode;

    /// Returns the URL stored under `code`.
    ///
    /// Fails with [`CoreError::NotFound`](crate::CoreError::NotFound) if the
    /// code was never issued.
    fn resolve(&self, code: &str) -> Result<String>;

    /// Checks whether `code` has been issued.
    fn exists(&self, code: &str) -> bool;

    /// Returns the number of distinct URLs shortened so far.
    fn allocated(&self) -> u64;
}
