//! Authentication for CRM API requests.
//!
//! [`AuthProvider`] attaches a bearer token to outgoing requests.
//! [`StoredTokenAuth`] is the dynamic provider used by the session: it reads
//! the access token from durable storage on every request, so a login or
//! logout takes effect for the next call without rebuilding the client.

mod provider;
mod stored_token;

pub use provider::{ArcDynAuthProvider, AuthProvider, DynamicAuthProvider, ResolvedAuth};
pub use stored_token::StoredTokenAuth;
