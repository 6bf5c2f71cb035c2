use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::{TemplateError, TemplateResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub template: TemplateConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Path of the resource metadata workbook to read.
    pub input_file: String,
    /// Base URL of the catalog the records are published under.
    pub catalog_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> TemplateResult<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let defaults = AppConfig::default();
        let config = Config::builder()
            .set_default("template.input_file", defaults.template.input_file)?
            .set_default("template.catalog_url", defaults.template.catalog_url)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with VP prefix, e.g. VP__TEMPLATE__INPUT_FILE
            .add_source(Environment::with_prefix("VP").separator("__"));

        let config: AppConfig = config.build()?.try_deserialize()?;
        config.template.validate()?;
        Ok(config)
    }
}

impl TemplateConfig {
    pub fn validate(&self) -> TemplateResult<()> {
        if self.input_file.trim().is_empty() {
            return Err(TemplateError::configuration("template.input_file must not be empty"));
        }
        if self.catalog_url.trim().is_empty() {
            return Err(TemplateError::configuration("template.catalog_url must not be empty"));
        }
        Ok(())
    }

    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(&self.input_file)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            template: TemplateConfig {
                input_file: "input/resource_metadata_template.xlsx".to_string(),
                catalog_url: "http://localhost:8080".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
                file_path: None,
            },
        }
    }
}
