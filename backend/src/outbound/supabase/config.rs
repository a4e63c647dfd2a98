//! Project settings shared by the Supabase adapters.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use tracing::info;
use zeroize::Zeroizing;

/// URL written into unconfigured deployments.
pub const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";
/// Anon key written into unconfigured deployments.
pub const PLACEHOLDER_ANON_KEY: &str = "placeholder-key";

/// Errors raised while building a [`SupabaseProject`].
#[derive(Debug, thiserror::Error)]
pub enum SupabaseConfigError {
    #[error("invalid Supabase project URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Supabase project URL must use http or https, got '{scheme}'")]
    UnsupportedScheme { scheme: String },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// A configured Supabase project.
#[derive(Clone)]
pub struct SupabaseProject {
    client: Client,
    base_url: Url,
    anon_key: Zeroizing<String>,
}

impl SupabaseProject {
    /// Build a project from optional settings.
    ///
    /// Returns `Ok(None)` when either value is missing, blank, or still the
    /// placeholder.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    ///
    /// use community_backend::outbound::supabase::{PLACEHOLDER_URL, SupabaseProject};
    ///
    /// let project = SupabaseProject::from_settings(
    ///     Some(PLACEHOLDER_URL),
    ///     Some("anon"),
    ///     Duration::from_secs(5),
    /// )
    /// .expect("placeholder settings are not an error");
    /// assert!(project.is_none());
    /// ```
    ///
    /// # Errors
    /// Returns [`SupabaseConfigError`] when a non-placeholder URL cannot be
    /// parsed or the HTTP client cannot be built.
    pub fn from_settings(
        url: Option<&str>,
        anon_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Option<Self>, SupabaseConfigError> {
        let (Some(url), Some(anon_key)) = (
            configured(url, PLACEHOLDER_URL),
            configured(anon_key, PLACEHOLDER_ANON_KEY),
        ) else {
            info!("Supabase credentials not configured; running without a provider");
            return Ok(None);
        };

        let mut base_url = Url::parse(url).map_err(|source| SupabaseConfigError::InvalidUrl {
            url: url.to_owned(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SupabaseConfigError::UnsupportedScheme {
                scheme: base_url.scheme().to_owned(),
            });
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;
        info!(host = base_url.host_str().unwrap_or_default(), "Supabase project configured");
        Ok(Some(Self {
            client,
            base_url,
            anon_key: Zeroizing::new(anon_key.to_owned()),
        }))
    }

    /// Resolve `path` (without a leading slash) against the project URL.
    pub(super) fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }

    pub(super) fn get(&self, url: Url) -> RequestBuilder {
        self.authorised(self.client.get(url))
    }

    pub(super) fn post(&self, url: Url) -> RequestBuilder {
        self.authorised(self.client.post(url))
    }

    fn authorised(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", self.anon_key.as_str())
            .bearer_auth(self.anon_key.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

impl std::fmt::Debug for SupabaseProject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseProject")
            .field("base_url", &self.base_url.as_str())
            .field("anon_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn configured<'a>(value: Option<&'a str>, placeholder: &str) -> Option<&'a str> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != placeholder)
}
