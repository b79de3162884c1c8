//! User settings for EduEasy
//!
//! Display currency, advisor language, the rate and term applied to every
//! tracked loan, and how to reach the text generation service.

use serde::{Deserialize, Serialize};

use super::paths::EduEasyPaths;
use crate::error::EduEasyError;
use crate::models::{Currency, Language};
use crate::services::amortization::LoanTerms;

/// Settings for the generative text service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorSettings {
    /// Model name sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generative language API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AdvisorSettings {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// User settings for EduEasy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub language: Language,

    /// Nominal annual interest rate in percent applied to every loan
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,

    /// Repayment term in years applied to every loan
    #[serde(default = "default_loan_term_years")]
    pub loan_term_years: f64,

    #[serde(default)]
    pub advisor: AdvisorSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_interest_rate() -> f64 {
    5.5
}

fn default_loan_term_years() -> f64 {
    10.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            language: Language::default(),
            interest_rate: default_interest_rate(),
            loan_term_years: default_loan_term_years(),
            advisor: AdvisorSettings::default(),
        }
    }
}

impl Settings {
    pub fn loan_terms(&self) -> LoanTerms {
        LoanTerms::new(self.interest_rate, self.loan_term_years)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &EduEasyPaths) -> Result<Self, EduEasyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                EduEasyError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                EduEasyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EduEasyPaths) -> Result<(), EduEasyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            EduEasyError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            EduEasyError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, Currency::Usd);
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.interest_rate, 5.5);
        assert_eq!(settings.loan_term_years, 10.0);
        assert_eq!(settings.advisor.model, "gemini-2.5-flash");
        assert_eq!(settings.advisor.api_key_env, "API_KEY");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EduEasyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency = Currency::Azn;
        settings.language = Language::Turkish;
        settings.interest_rate = 4.0;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, Currency::Azn);
        assert_eq!(loaded.language, Language::Turkish);
        assert_eq!(loaded.loan_terms(), LoanTerms::new(4.0, 10.0));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency": "AZN"}"#).unwrap();
        assert_eq!(settings.currency, Currency::Azn);
        assert_eq!(settings.interest_rate, 5.5);
        assert_eq!(settings.advisor, AdvisorSettings::default());
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EduEasyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, EduEasyError::Config(_)));
    }
}
