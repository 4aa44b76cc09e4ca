//! Keyed cache for compiled templates.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Process-lifetime cache of compiled templates, keyed by template name.
///
/// Populated lazily on first access per key and owned by the orchestrating
/// service — an explicit cache object, not a hidden global. Values are
/// shared via `Arc` so callers keep using an entry while others hit the
/// cache.
#[derive(Debug, Default)]
pub struct TemplateCache<T> {
    entries: Mutex<HashMap<String, Arc<T>>>,
}

impl<T> TemplateCache<T> {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Get the entry for `key`, building and storing it on first access.
    pub fn get_or_insert_with<F>(&self, key: &str, build: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get(key) {
            return Arc::clone(entry);
        }
        let entry = Arc::new(build());
        entries.insert(key.to_owned(), Arc::clone(&entry));
        entry
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
