use crate::cli::Args;
use crate::core::error::ProbeError;
use crate::providers::huggingface::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Public endpoint, usable without a key
pub const DEFAULT_ENDPOINT: &str = "https://by62y2zqbeqalfay.eu-west-1.aws.endpoints.huggingface.cloud";
pub const DEFAULT_API_KEY: &str = "public-endpoint-no-key-needed";
pub const DEFAULT_PROMPT: &str = "Alan Turing was";

/// Values read from the YAML config file; everything is optional
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub target: Option<String>,
    pub prompt: Option<String>,
}

impl FileConfig {
    fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".inference-probe").join("config.yaml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, ProbeError> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str::<FileConfig>(&contents)
            .map_err(|e| ProbeError::Config(format!("Parse {}: {}", path.display(), e)))
    }

    /// An explicit path must exist; the default path is only read when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ProbeError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::load_from(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Everything the probe needs, fixed before the first request
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    pub endpoint: String,
    pub api_key: String,
    pub base_url: String,
    pub target: Option<String>,
    pub prompt: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            target: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ProbeConfig {
    /// Command line and environment win over the file, the file over defaults.
    pub fn merge(file: FileConfig, args: &Args) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: args
                .endpoint
                .clone()
                .or(file.endpoint)
                .unwrap_or(defaults.endpoint),
            api_key: args
                .api_key
                .clone()
                .or(file.api_key)
                .unwrap_or(defaults.api_key),
            base_url: args
                .base_url
                .clone()
                .or(file.base_url)
                .unwrap_or(defaults.base_url),
            target: args.target.clone().or(file.target),
            prompt: args.prompt.clone().or(file.prompt).unwrap_or(defaults.prompt),
        }
    }

    pub fn load(args: &Args) -> Result<Self, ProbeError> {
        let file = FileConfig::load(args.config.as_deref())?;
        Ok(Self::merge(file, args))
    }

    /// Typed-client target; the endpoint itself unless one was configured
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or(&self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_public_endpoint() {
        let config = ProbeConfig::merge(FileConfig::default(), &Args::default());
        assert_eq!(config, ProbeConfig::default());
        assert_eq!(config.target(), DEFAULT_ENDPOINT);
        assert_eq!(config.base_url, "https://api-inference.huggingface.co/models/");
    }

    #[test]
    fn args_override_file_and_file_overrides_defaults() {
        let file = FileConfig {
            endpoint: Some("https://file.example".to_string()),
            api_key: Some("file-key".to_string()),
            target: Some("gpt2".to_string()),
            ..FileConfig::default()
        };
        let args = Args {
            api_key: Some("cli-key".to_string()),
            prompt: Some("Hello".to_string()),
            ..Args::default()
        };

        let config = ProbeConfig::merge(file, &args);
        assert_eq!(config.endpoint, "https://file.example");
        assert_eq!(config.api_key, "cli-key");
        assert_eq!(config.prompt, "Hello");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.target(), "gpt2");
    }

    #[test]
    fn reads_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: https://yaml.example\nprompt: Grace Hopper was").unwrap();

        let config = FileConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("https://yaml.example"));
        assert_eq!(config.prompt.as_deref(), Some("Grace Hopper was"));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn empty_file_means_no_overrides() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(FileConfig::load_from(file.path()).unwrap(), FileConfig::default());
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: [unclosed").unwrap();
        assert!(matches!(
            FileConfig::load_from(file.path()),
            Err(ProbeError::Config(_))
        ));
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            FileConfig::load(Some(&missing)),
            Err(ProbeError::Io { .. })
        ));
    }
}
