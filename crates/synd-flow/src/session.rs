//! # Session Context
//!
//! Typed holder for the bearer credential pair. This replaces the shared
//! untyped key-value bag the ecosystem tends to grow: credentials live
//! here and nowhere else, are redacted from `Debug` output, zeroized on
//! drop, and cleared in one place on logout.
//!
//! A missing credential is a fatal, user-visible condition — [`bearer`]
//! returns [`FlowError::AuthRequired`] and the caller redirects to
//! re-authentication instead of issuing a silently unauthenticated
//! request.
//!
//! [`bearer`]: SessionContext::bearer

use parking_lot::Mutex;
use url::Url;
use zeroize::Zeroizing;

use synd_client::types::TokenPair;
use synd_client::PlatformConfig;

use crate::error::FlowError;

struct StoredTokens {
    access: Zeroizing<String>,
    refresh: Zeroizing<String>,
}

/// The authenticated session, shared by every flow in the process.
#[derive(Default)]
pub struct SessionContext {
    tokens: Mutex<Option<StoredTokens>>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionContext {
    /// An unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the credential pair returned by login or sign-up.
    pub fn store(&self, pair: TokenPair) {
        *self.tokens.lock() = Some(StoredTokens {
            access: Zeroizing::new(pair.access),
            refresh: Zeroizing::new(pair.refresh),
        });
    }

    /// Whether a credential is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.lock().is_some()
    }

    /// The access token for request authorization.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::AuthRequired`] when no credential is held —
    /// the caller redirects to re-authentication.
    pub fn bearer(&self) -> Result<Zeroizing<String>, FlowError> {
        self.tokens
            .lock()
            .as_ref()
            .map(|t| t.access.clone())
            .ok_or(FlowError::AuthRequired)
    }

    /// The refresh token, for the token-renewal exchange.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::AuthRequired`] when no credential is held.
    pub fn refresh_token(&self) -> Result<Zeroizing<String>, FlowError> {
        self.tokens
            .lock()
            .as_ref()
            .map(|t| t.refresh.clone())
            .ok_or(FlowError::AuthRequired)
    }

    /// Build an authenticated client configuration for the given host.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::AuthRequired`] when no credential is held.
    pub fn authorized_config(&self, base_url: Url) -> Result<PlatformConfig, FlowError> {
        let token = self.bearer()?;
        Ok(PlatformConfig::anonymous(base_url).with_token(token.as_str()))
    }

    /// Drop the credential pair (logout). Zeroizes the stored tokens.
    pub fn clear(&self) {
        *self.tokens.lock() = None;
    }
}
