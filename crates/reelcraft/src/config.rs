//! Layered configuration and start-up credentials.
//!
//! Configuration sources, later ones winning:
//! 1. Bundled defaults (include_str! from reelcraft.toml)
//! 2. `~/.config/reelcraft/reelcraft.toml`
//! 3. `./reelcraft.toml`, or the file given with `--config`
//! 4. `REELCRAFT__SECTION__KEY` environment variables

use config::{Config, Environment, File, FileFormat};
use reelcraft_error::{ConfigError, ReelcraftResult};
use reelcraft_models::{GEMINI_API_KEY_VAR, OPENAI_API_KEY_VAR};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../reelcraft.toml");
const ENV_PREFIX: &str = "REELCRAFT";

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

/// Analysis stage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Gemini model identifier
    pub model: String,
    /// Per-call deadline in seconds
    pub timeout_secs: u64,
}

/// Generation stage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Chat model identifier
    pub model: String,
    /// Chat-completions URL (any OpenAI-compatible endpoint)
    pub endpoint: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Cap on generated tokens
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Per-call deadline in seconds
    pub timeout_secs: u64,
    /// System persona; the built-in one when unset
    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// Prompt template overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// File replacing the built-in analysis template
    #[serde(default)]
    pub analysis_template: Option<PathBuf>,
    /// File replacing the built-in generation template
    #[serde(default)]
    pub generation_template: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

/// Complete Reelcraft configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelcraftConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Analysis stage
    pub analysis: AnalysisConfig,
    /// Generation stage
    pub generation: GenerationConfig,
    /// Template overrides
    #[serde(default)]
    pub prompts: PromptsConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl ReelcraftConfig {
    /// Load configuration from every source.
    ///
    /// `path` replaces `./reelcraft.toml` and, unlike it, must exist.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a source cannot be read or parsed,
    /// or if a value is out of range.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use reelcraft::ReelcraftConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ReelcraftConfig::load(None)?;
    /// println!("listening on {}:{}", config.server.host, config.server.port);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load(path: Option<&Path>) -> ReelcraftResult<Self> {
        Self::load_with_env(path, None)
    }

    /// [`load`](Self::load) with the environment layer taken from `env`
    /// instead of the process environment.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> ReelcraftResult<Self> {
        debug!("Loading configuration with precedence: env > local file > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/reelcraft/reelcraft.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("reelcraft").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bundled file is invalid.
    pub fn defaults() -> ReelcraftResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize::<Self>)
            .map_err(|e| ConfigError::new(format!("Invalid bundled configuration: {}", e)).into())
    }

    /// Reject values no stage can work with.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending key.
    pub fn validate(&self) -> ReelcraftResult<()> {
        if self.analysis.timeout_secs == 0 {
            return Err(ConfigError::new("analysis.timeout_secs must be greater than 0").into());
        }
        if self.generation.timeout_secs == 0 {
            return Err(ConfigError::new("generation.timeout_secs must be greater than 0").into());
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::new(format!(
                "generation.temperature must be between 0 and 2, got {}",
                self.generation.temperature
            ))
            .into());
        }
        if let Some(max_tokens) = self.generation.max_tokens.filter(|&n| {
            n == 0 || i32::try_from(n).is_err()
        }) {
            return Err(ConfigError::new(format!(
                "generation.max_tokens must be between 1 and {}, got {}",
                i32::MAX,
                max_tokens
            ))
            .into());
        }
        if self.generation.endpoint.trim().is_empty() {
            return Err(ConfigError::new("generation.endpoint must not be empty").into());
        }
        Ok(())
    }
}

/// Provider API keys, read once at start-up.
///
/// Keys are optional here: a missing key surfaces as a configuration error on
/// each request rather than preventing start-up.
#[derive(Clone, Default)]
pub struct Credentials {
    /// `GEMINI_API_KEY`
    pub gemini_api_key: Option<String>,
    /// `OPENAI_API_KEY`
    pub openai_api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Credentials {
    /// Read keys from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read keys through `lookup`. Blank values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let credentials = Self {
            gemini_api_key: read(GEMINI_API_KEY_VAR),
            openai_api_key: read(OPENAI_API_KEY_VAR),
        };
        debug!(
            gemini = credentials.gemini_api_key.is_some(),
            openai = credentials.openai_api_key.is_some(),
            "Credentials loaded"
        );
        credentials
    }

    /// Names of the variables that are not set.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gemini_api_key.is_none() {
            missing.push(GEMINI_API_KEY_VAR);
        }
        if self.openai_api_key.is_none() {
            missing.push(OPENAI_API_KEY_VAR);
        }
        missing
    }
}
