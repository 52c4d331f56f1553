//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::HostingdeProvider;
use crate::traits::ChallengeProvider;
use crate::types::{ClientOptions, HostingdeCredentials};

/// Creates a [`ChallengeProvider`] from the given credentials.
///
/// The provider is wrapped in `Arc<dyn ChallengeProvider>` so it can be shared
/// across async tasks; concurrent calls share one connection pool.
///
/// # Examples
///
/// ```rust,no_run
/// use dns01_hostingde::{create_provider, HostingdeCredentials};
///
/// let credentials = HostingdeCredentials::new("your-api-key", "example.com").unwrap();
/// let provider = create_provider(credentials).unwrap();
/// ```
pub fn create_provider(credentials: HostingdeCredentials) -> Result<Arc<dyn ChallengeProvider>> {
    create_provider_with_options(credentials, &ClientOptions::default())
}

/// Like [`create_provider`], with explicit transport options.
pub fn create_provider_with_options(
    credentials: HostingdeCredentials,
    options: &ClientOptions,
) -> Result<Arc<dyn ChallengeProvider>> {
    Ok(Arc::new(HostingdeProvider::with_options(
        credentials,
        options,
    )?))
}

/// Creates a provider from `HOSTINGDE_API_KEY` and `HOSTINGDE_ZONE_NAME`.
pub fn create_provider_from_env() -> Result<Arc<dyn ChallengeProvider>> {
    create_provider(HostingdeCredentials::from_env()?)
}
