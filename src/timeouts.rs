//! Timeout configuration for CRM API requests.
//!
//! There is no retry layer: a request that times out fails, and the user
//! repeats the action.

use std::time::Duration;

/// Timeout configuration for the HTTP client.
///
/// # Examples
///
/// ```rust
/// use jewel_link::ClientTimeouts;
/// use std::time::Duration;
///
/// let timeouts = ClientTimeouts::default();
///
/// let timeouts = ClientTimeouts::default()
///     .with_request_timeout(Duration::from_secs(60));
///
/// let timeouts = ClientTimeouts::fast();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTimeouts {
    /// Timeout for establishing connections (TCP + TLS handshake).
    /// Default: 10 seconds
    pub connection_timeout: Duration,

    /// Timeout for a whole request, from send to fully read body.
    /// Default: 30 seconds
    pub request_timeout: Duration,
}

impl Default for ClientTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientTimeouts {
    /// Short timeouts for a backend on localhost.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(5),
        }
    }

    /// Long timeouts for slow store connections.
    pub fn relaxed() -> Self {
        Self {
            connection_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let timeouts = ClientTimeouts::default();
        assert_eq!(timeouts.connection_timeout, Duration::from_secs(10));
        assert_eq!(timeouts.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_presets_are_ordered() {
        assert!(ClientTimeouts::fast().request_timeout < ClientTimeouts::default().request_timeout);
        assert!(ClientTimeouts::relaxed().request_timeout > ClientTimeouts::default().request_timeout);
    }
}
