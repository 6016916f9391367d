use std::collections::HashMap;

/// Key holding the sidebar open/closed flag.
pub const SIDEBAR_OPEN_KEY: &str = "sidebarOpen";

/// String key-value store scoped to one browsing session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Session store kept in memory for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl<T: SessionStore + ?Sized> SessionStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::{MemorySessionStore, SessionStore};

    #[test]
    fn given_empty_store_when_reading_then_returns_none() {
        let store = MemorySessionStore::new();

        assert_eq!(store.get("sidebarOpen"), None);
    }

    #[test]
    fn given_value_written_twice_when_reading_then_last_value_wins() {
        let mut store = MemorySessionStore::new();

        store.set("sidebarOpen", "true");
        store.set("sidebarOpen", "false");

        assert_eq!(store.get("sidebarOpen").as_deref(), Some("false"));
    }
}
