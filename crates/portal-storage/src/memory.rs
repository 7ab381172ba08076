use parking_lot::Mutex;
use portal_core::{CoreError, KeyStore, Result, Sequence, ShortCode};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Everything the store knows, guarded as one unit.
///
/// The sequence and both indices change together under the store's lock.
/// A URL is in `reverse` iff its code is in `forward`.
#[derive(Debug, Default)]
struct State {
    sequence: Sequence,
    /// short code -> URL
    forward: HashMap<ShortCode, String>,
    /// URL -> short code
    reverse: HashMap<String, ShortCode>,
}

/// In-memory implementation of the [`KeyStore`] trait.
///
/// All state sits behind a single mutex, held only for map operations.
/// Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryKeyStore {
    state: Mutex<State>,
}

impl InMemoryKeyStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStore for InMemoryKeyStore {
    fn shorten(&self, url: &str) -> ShortCode {
        let mut state = self.state.lock();

        if let Some(code) = state.reverse.get(url) {
            debug!(code = %code, url = %url, "reused existing short code");
            return code.clone();
        }

        let code = state.sequence.next_code();
        state.forward.insert(code.clone(), url.to_owned());
        state.reverse.insert(url.to_owned(), code.clone());

        debug!(
            code = %code,
            url = %url,
            allocated = state.sequence.current(),
            "allocated new short code"
        );
        code
    }

    fn resolve(&self, code: &str) -> Result<String> {
        trace!(code = %code, "resolving short code");

        let state = self.state.lock();
        state
            .forward
            .get(code)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(code.to_owned()))
    }

    fn exists(&self, code: &str) -> bool {
        self.state.lock().forward.contains_key(code)
    }

    fn allocated(&self) -> u64 {
        self.state.lock().sequence.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn first_code_is_one() {
        let store = InMemoryKeyStore::new();

        let code = store.shorten("https://example.com");
        assert_eq!(code.as_str(), "1");
        assert_eq!(store.allocated(), 1);
    }

    #[test]
    fn same_url_yields_same_code() {
        let store = InMemoryKeyStore::new();

        let first = store.shorten("https://example.com");
        let second = store.shorten("https://example.com");

        assert_eq!(first, second);
        assert_eq!(store.allocated(), 1);
    }

    #[test]
    fn distinct_urls_get_sequential_codes() {
        let store = InMemoryKeyStore::new();

        for n in 1..=200_u64 {
            let code = store.shorten(&format!("https://example{}.com", n));
            assert_eq!(code, ShortCode::from_sequence(n));
        }
        assert_eq!(store.allocated(), 200);
    }

    #[test]
    fn resolve_existing_code() {
        let store = InMemoryKeyStore::new();
        let code = store.shorten("https://example.com");

        assert_eq!(store.resolve(code.as_str()).unwrap(), "https://example.com");
    }

    #[test]
    fn resolve_unknown_code_is_not_found() {
        let store = InMemoryKeyStore::new();
        store.shorten("https://example.com");

        let err = store.resolve("99").unwrap_err();
        assert_eq!(err, CoreError::NotFound("99".to_string()));
    }

    #[test]
    fn resolve_accepts_arbitrary_strings() {
        let store = InMemoryKeyStore::new();

        assert!(matches!(
            store.resolve("nonexistent-key"),
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(store.resolve(""), Err(CoreError::NotFound(_))));
    }

    #[test]
    fn zero_is_never_issued() {
        let store = InMemoryKeyStore::new();
        for n in 0..100 {
            store.shorten(&format!("https://example.com/{}", n));
        }

        assert!(!store.exists("0"));
    }

    #[test]
    fn empty_url_is_a_valid_distinct_url() {
        let store = InMemoryKeyStore::new();

        let empty = store.shorten("");
        let other = store.shorten("https://example.com");

        assert_ne!(empty, other);
        assert_eq!(store.shorten(""), empty);
        assert_eq!(store.resolve(empty.as_str()).unwrap(), "");
    }

    #[test]
    fn urls_are_not_normalized() {
        let store = InMemoryKeyStore::new();

        let plain = store.shorten("https://example.com");
        let slash = store.shorten("https://example.com/");
        let upper = store.shorten("HTTPS://EXAMPLE.COM");

        assert_ne!(plain, slash);
        assert_ne!(plain, upper);
        assert_eq!(store.allocated(), 3);
    }

    #[test]
    fn exists_checks() {
        let store = InMemoryKeyStore::new();

        assert!(!store.exists("1"));
        let code = store.shorten("https://example.com");
        assert!(store.exists(code.as_str()));
        assert!(!store.exists("2"));
    }

    #[test]
    fn shortening_a_url_that_looks_like_a_code() {
        let store = InMemoryKeyStore::new();

        let code = store.shorten("2");
        assert_eq!(code.as_str(), "1");
        assert!(!store.exists("2"));
    }

    #[test]
    fn end_to_end_scenario() {
        let store = InMemoryKeyStore::new();

        assert_eq!(store.shorten("https://example.com").as_str(), "1");
        assert_eq!(store.shorten("https://example.com").as_str(), "1");
        assert_eq!(store.shorten("https://other.com").as_str(), "2");
        assert_eq!(store.resolve("1").unwrap(), "https://example.com");
        assert!(matches!(store.resolve("99"), Err(CoreError::NotFound(_))));
    }

    #[test]
    fn store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryKeyStore>();
    }

    #[tokio::test]
    async fn concurrent_access() {
        let store = Arc::new(InMemoryKeyStore::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.shorten(&format!("https://example{}.com", i))
            }));
        }

        let mut codes = vec![];
        for handle in handles {
            codes.push(handle.await.unwrap());
        }

        codes.sort_by_key(|code| code.sequence().unwrap());
        let expected: Vec<_> = (1..=10).map(ShortCode::from_sequence).collect();
        assert_eq!(codes, expected);

        for i in 0..10u64 {
            let url = format!("https://example{}.com", i);
            let code = store.shorten(&url);
            assert_eq!(store.resolve(code.as_str()).unwrap(), url);
        }
    }
}
