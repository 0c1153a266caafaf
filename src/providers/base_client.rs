use crate::core::error::ProbeError;
use crate::providers::interceptors::RequestStage;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

pub const POOL_MAX_IDLE_PER_HOST: usize = 5;
pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(5 * 60);
pub const READ_TIMEOUT: Duration = Duration::from_secs(6 * 60);

/// Reusable pooled client that runs every request through its stages before sending.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    stages: Arc<Vec<Box<dyn RequestStage>>>,
}

impl HttpClient {
    pub fn new(stages: Vec<Box<dyn RequestStage>>) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            stages: Arc::new(stages),
        })
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        url: Url,
        payload: &T,
    ) -> Result<Response, ProbeError> {
        let body = serde_json::to_vec(payload)?;
        let mut request = self.client.post(url).body(body).build()?;

        for stage in self.stages.iter() {
            request = stage.apply(request)?;
        }

        let response = self.client.execute(request).await?;
        tracing::debug!(status = %response.status(), url = %response.url(), "response received");
        Ok(response)
    }
}

/// Turn a non-2xx response into a status error carrying the body text
pub async fn check_status(response: Response) -> Result<Response, ProbeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(%status, "endpoint returned error status");
    Err(ProbeError::Status { status, body })
}
