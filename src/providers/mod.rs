use crate::core::error::ProbeError;
use async_trait::async_trait;
use reqwest::Url;

pub mod base_client;
pub mod direct;
pub mod huggingface;
pub mod interceptors;
pub mod types;

use types::GenerationRequest;

#[async_trait]
pub trait TextGenerationApi {
    /// Generate text for `request` and return the first candidate of the first prompt.
    ///
    /// `target` is either a model identifier, resolved against the client's base URL,
    /// or an absolute URL used as-is.
    async fn text_generation(
        &self,
        target: &str,
        request: &GenerationRequest,
    ) -> Result<String, ProbeError>;
}

/// Resolve a call target into the URL the request goes to.
///
/// Absolute `http`/`https` URLs are taken verbatim. Anything else is a model
/// identifier appended to `base_url`, with exactly one `/` between them.
pub fn resolve_target(base_url: &str, target: &str) -> Result<Url, ProbeError> {
    let target = target.trim();
    if target.is_empty() {
        return Err(ProbeError::InvalidUrl("empty target".to_string()));
    }

    if let Ok(url) = Url::parse(target) {
        if matches!(url.scheme(), "http" | "https") {
            return Ok(url);
        }
    }

    let base = Url::parse(base_url)
        .map_err(|e| ProbeError::InvalidUrl(format!("base URL '{}': {}", base_url, e)))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(ProbeError::InvalidUrl(format!(
            "base URL '{}' is not http(s)",
            base_url
        )));
    }

    let mut joined = base.to_string();
    if !joined.ends_with('/') {
        joined.push('/');
    }
    joined.push_str(target.trim_start_matches('/'));

    Url::parse(&joined).map_err(|e| ProbeError::InvalidUrl(format!("'{}': {}", joined, e)))
}
