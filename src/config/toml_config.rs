use crate::core::ranking::DEFAULT_TOP_N;
use crate::utils::error::{WatcherError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    pub directory: DirectoryConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub province: String,
    #[serde(default)]
    pub regions: Vec<RegionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub stores: Vec<StoreConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub number: String,
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: String,
    pub top_n: Option<usize>,
    pub summary_examples: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: ".".to_string(),
            top_n: None,
            summary_examples: None,
        }
    }
}

impl WatcherConfig {
    /// The directory bundled with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WatcherError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WatcherError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WatcherError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("directory.province", &self.directory.province)?;
        validation::validate_unique_keys(
            "directory.regions.key",
            self.directory.regions.iter().map(|r| r.key.as_str()),
        )?;

        for region in &self.directory.regions {
            validation::validate_identifier("directory.regions.key", &region.key)?;
            validation::validate_non_empty_string("directory.regions.name", &region.name)?;

            let field = format!("directory.regions[{}].stores.number", region.key);
            validation::validate_unique_keys(&field, region.stores.iter().map(|s| s.number.as_str()))?;

            for store in &region.stores {
                validation::validate_non_empty_string(&field, &store.number)?;
                validation::validate_non_empty_string("directory.regions.stores.name", &store.name)?;
                validation::validate_identifier("directory.regions.stores.id", &store.id)?;
            }
        }

        if self.source.r#type != "mock" {
            return Err(WatcherError::InvalidConfigValueError {
                field: "source.type".to_string(),
                value: self.source.r#type.clone(),
                reason: "Only the 'mock' source is available".to_string(),
            });
        }
        validation::validate_url("source.endpoint", &self.source.endpoint)?;

        validation::validate_path("report.output_path", &self.report.output_path)?;
        if let Some(top_n) = self.report.top_n {
            // Reports list at most five deals.
            validation::validate_range("report.top_n", top_n, 1, DEFAULT_TOP_N)?;
        }

        Ok(())
    }

    pub fn output_path(&self) -> &str {
        &self.report.output_path
    }

    pub fn top_n(&self) -> usize {
        self.report.top_n.unwrap_or(DEFAULT_TOP_N)
    }

    pub fn summary_examples(&self) -> usize {
        self.report.summary_examples.unwrap_or(10)
    }

    pub fn store_count(&self) -> usize {
        self.directory.regions.iter().map(|r| r.stores.len()).sum()
    }
}

impl Validate for WatcherConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
