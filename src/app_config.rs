use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Path of the JSON dictionary
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Output document config
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// How the full-sentence translation of each line is produced
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    // @mode: Join dictionary glosses
    #[default]
    Dictionary,
    // @mode: Ask the remote translation endpoint
    Remote,
}

impl TranslationMode {
    // @returns: Capitalized mode name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Dictionary => "Dictionary",
            Self::Remote => "Remote",
        }
    }

    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Dictionary => "dictionary".to_string(),
            Self::Remote => "remote".to_string(),
        }
    }
}

impl std::fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

/// Translation settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Sentence translation mode
    #[serde(default)]
    pub mode: TranslationMode,

    /// Lookahead window in characters; derived from the dictionary when unset
    #[serde(default)]
    pub max_token_length: Option<usize>,

    /// Separator between the parts of the dictionary sentence
    #[serde(default = "default_sentence_separator")]
    pub sentence_separator: String,

    /// Remote endpoint settings
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            mode: TranslationMode::default(),
            max_token_length: None,
            sentence_separator: default_sentence_separator(),
            remote: RemoteConfig::default(),
        }
    }
}

/// Remote translation endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RemoteConfig {
    // @field: Service URL
    #[serde(default = "default_remote_endpoint")]
    pub endpoint: String,

    // @field: Client identifier query parameter
    #[serde(default = "default_remote_client")]
    pub client: String,

    // @field: Source language code as the service expects it
    #[serde(default = "default_remote_source_language")]
    pub source_language: String,

    // @field: Target language code as the service expects it
    #[serde(default = "default_remote_target_language")]
    pub target_language: String,

    // @field: Timeout seconds; transport default when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_remote_endpoint(),
            client: default_remote_client(),
            source_language: default_remote_source_language(),
            target_language: default_remote_target_language(),
            timeout_secs: None,
        }
    }
}

/// Labels and naming for the generated Word document
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// File name of the generated document
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Text shown for segments missing from the dictionary
    #[serde(default = "default_unknown_marker")]
    pub unknown_marker: String,

    /// Separator between a segment and its meaning in the gloss paragraph
    #[serde(default = "default_gloss_separator")]
    pub gloss_separator: String,

    /// Prefix of the dictionary sentence paragraph
    #[serde(default = "default_dictionary_prefix")]
    pub dictionary_prefix: String,

    /// Prefix of the remote sentence paragraph
    #[serde(default = "default_remote_prefix")]
    pub remote_prefix: String,

    /// Text shown when the remote translation failed
    #[serde(default = "default_remote_failure_text")]
    pub remote_failure_text: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            unknown_marker: default_unknown_marker(),
            gloss_separator: default_gloss_separator(),
            dictionary_prefix: default_dictionary_prefix(),
            remote_prefix: default_remote_prefix(),
            remote_failure_text: default_remote_failure_text(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "zh".to_string()
}

fn default_target_language() -> String {
    "vi".to_string()
}

fn default_dictionary_path() -> String {
    "dictionary_full.json".to_string()
}

fn default_sentence_separator() -> String {
    " ".to_string()
}

fn default_remote_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_remote_client() -> String {
    "gtx".to_string()
}

fn default_remote_source_language() -> String {
    "zh-CN".to_string()
}

fn default_remote_target_language() -> String {
    "vi".to_string()
}

fn default_file_name() -> String {
    "trung_viet_final.docx".to_string()
}

fn default_unknown_marker() -> String {
    "Không rõ nghĩa".to_string()
}

fn default_gloss_separator() -> String {
    ": ".to_string()
}

fn default_dictionary_prefix() -> String {
    "→ Dịch toàn câu (từ điển): ".to_string()
}

fn default_remote_prefix() -> String {
    "→ Google dịch: ".to_string()
}

fn default_remote_failure_text() -> String {
    "[Google dịch thất bại]".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        if self.dictionary_path.trim().is_empty() {
            return Err(anyhow!("Dictionary path must not be empty"));
        }

        if self.translation.max_token_length == Some(0) {
            return Err(anyhow!("max_token_length must be at least 1"));
        }

        let file_name = self.output.file_name.trim();
        if file_name.is_empty() || file_name.contains('/') || file_name.contains('\\') {
            return Err(anyhow!("Invalid output file name: {:?}", self.output.file_name));
        }
        if !file_name.to_lowercase().ends_with(".docx") {
            return Err(anyhow!("Output file name must end with .docx: {}", file_name));
        }

        // The endpoint is only contacted in remote mode
        if self.translation.mode == TranslationMode::Remote {
            let url = Url::parse(&self.translation.remote.endpoint)
                .map_err(|e| anyhow!("Invalid remote endpoint {}: {}", self.translation.remote.endpoint, e))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(anyhow!("Remote endpoint must use http or https: {}", url));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            dictionary_path: default_dictionary_path(),
            translation: TranslationConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
