use crate::core::error::ProbeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub inputs: Vec<String>,
}

impl GenerationRequest {
    pub fn single(prompt: impl Into<String>) -> Self {
        Self {
            inputs: vec![prompt.into()],
        }
    }
}

/// One generated candidate. Fields other than `generated_text` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_text: Option<String>,
}

/// Outer entry per prompt, inner entry per candidate.
pub type GenerationResponse = Vec<Vec<GenerationResult>>;

/// Take the text of the first candidate generated for the first prompt.
pub fn first_generated_text(response: GenerationResponse) -> Result<String, ProbeError> {
    let candidates = response
        .into_iter()
        .next()
        .ok_or_else(|| ProbeError::MalformedResponse("no result sets in response".to_string()))?;

    let first = candidates.into_iter().next().ok_or_else(|| {
        ProbeError::MalformedResponse("first result set has no candidates".to_string())
    })?;

    first.generated_text.ok_or_else(|| {
        ProbeError::MalformedResponse("first candidate has no generated_text".to_string())
    })
}
