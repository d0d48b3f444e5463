use std::sync::RwLock;

/// Source of the bearer token attached to mutating requests.
///
/// Where the token comes from (login flow, browser storage, CLI flag) is
/// outside this crate; the API layer only reads it.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Token held in memory for the lifetime of the app.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        let store = Self::default();
        if let Some(token) = token {
            store.set(token);
        }
        store
    }

    /// Store `token`; blank input clears the store instead.
    pub fn set(&self, token: impl Into<String>) {
        let token = token.into();
        let token = token.trim();
        let value = (!token.is_empty()).then(|| token.to_string());
        if let Ok(mut guard) = self.token.write() {
            *guard = value;
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.bearer_token().is_some()
    }
}

impl TokenProvider for MemoryTokenStore {
    fn bearer_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_sign_out() {
        let store = MemoryTokenStore::new(Some("abc".into()));
        assert_eq!(store.bearer_token().as_deref(), Some("abc"));

        store.set("   ");
        assert!(!store.is_signed_in());

        store.set(" xyz ");
        assert_eq!(store.bearer_token().as_deref(), Some("xyz"));
        store.clear();
        assert_eq!(store.bearer_token(), None);
    }
}
