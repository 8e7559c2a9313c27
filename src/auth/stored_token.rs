use super::provider::{AuthProvider, DynamicAuthProvider};
use crate::error::Result;
use crate::storage::{keys, KeyValueStore};

/// Reads the access token from durable storage before every request.
///
/// A missing token yields an anonymous request rather than an error; the
/// server decides whether the endpoint needs authentication.
#[derive(Debug, Clone)]
pub struct StoredTokenAuth<S> {
    store: S,
}

impl<S> StoredTokenAuth<S>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl<S> DynamicAuthProvider for StoredTokenAuth<S>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    async fn get_auth(&self) -> Result<AuthProvider> {
        Ok(match self.store.get_item(keys::ACCESS_TOKEN)? {
            Some(token) if !token.is_empty() => AuthProvider::bearer_token(token),
            _ => AuthProvider::none(),
        })
    }
}
