use crate::core::error::ProbeError;
use crate::display;
use crate::providers::base_client::{HttpClient, check_status};
use crate::providers::interceptors::{AuthHeaders, RequestLogger, RequestStage};
use crate::providers::types::{GenerationRequest, GenerationResponse, first_generated_text};
use crate::providers::{TextGenerationApi, resolve_target};
use async_trait::async_trait;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models/";

/// Typed text-generation client over a pooled [`HttpClient`]
#[derive(Clone)]
pub struct HuggingFaceClient {
    base_url: String,
    client: HttpClient,
}

impl HuggingFaceClient {
    pub fn with_base_url(base_url: impl Into<String>, api_key: &str) -> Result<Self, ProbeError> {
        // Auth must run first so the logger sees the final headers.
        let stages: Vec<Box<dyn RequestStage>> =
            vec![Box::new(AuthHeaders::new(api_key)?), Box::new(RequestLogger)];

        let client = HttpClient::new(stages)?;
        tracing::debug!(stages = ?client.stage_names(), "typed client ready");

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    async fn generate(
        &self,
        target: &str,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ProbeError> {
        let url = resolve_target(&self.base_url, target)?;
        tracing::info!(%url, model_or_url = target, "typed client call");

        let response = self.client.post(url, request).await?;
        let response = check_status(response).await?;

        let response_body: String = response.text().await?;
        let parsed: GenerationResponse = serde_json::from_str(&response_body)?;
        Ok(parsed)
    }
}

#[async_trait]
impl TextGenerationApi for HuggingFaceClient {
    async fn text_generation(
        &self,
        target: &str,
        request: &GenerationRequest,
    ) -> Result<String, ProbeError> {
        self.generate(target, request)
            .await
            .and_then(first_generated_text)
            .inspect_err(|e| display::report_error(e))
    }
}
