use crate::config::ProbeConfig;
use crate::core::error::ProbeError;
use crate::display;
use crate::providers::TextGenerationApi;
use crate::providers::direct::call_direct;
use crate::providers::huggingface::HuggingFaceClient;
use crate::providers::types::GenerationRequest;
use serde_json::Value;

/// What one full run produced, in path order
#[derive(Debug)]
pub struct ProbeReport {
    pub direct: Value,
    pub generated_text: String,
}

pub struct Application {
    pub config: ProbeConfig,
}

impl Application {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Run the direct call, then the typed client. The first failure stops the run.
    pub async fn run(&self) -> Result<ProbeReport, ProbeError> {
        let direct = self
            .run_direct()
            .await
            .inspect_err(|e| display::report_error(e))?;
        let generated_text = self.run_typed().await?;

        Ok(ProbeReport {
            direct,
            generated_text,
        })
    }

    async fn run_direct(&self) -> Result<Value, ProbeError> {
        display::display_section(&format!("Direct HTTP client with URL: {}", self.config.endpoint));
        tracing::info!(endpoint = %self.config.endpoint, "starting direct call");

        let request = GenerationRequest::single(self.config.prompt.as_str());
        call_direct(&self.config.endpoint, &self.config.api_key, &request).await
    }

    async fn run_typed(&self) -> Result<String, ProbeError> {
        let target = self.config.target();
        display::display_section(&format!("Typed client with URL: {}", target));
        tracing::info!(target_url = target, base_url = %self.config.base_url, "starting typed client call");

        let client = HuggingFaceClient::with_base_url(&self.config.base_url, &self.config.api_key)
            .inspect_err(|e| display::report_error(e))?;

        let request = GenerationRequest::single(self.config.prompt.as_str());
        let text = client.text_generation(target, &request).await?;

        display::display_generated(&text);
        display::display_separator();
        Ok(text)
    }
}
