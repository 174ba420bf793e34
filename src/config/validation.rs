use crate::config::types::{Config, ScannerConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scanner_config(&config.scanner)?;
    Ok(())
}

/// Validates scanner configuration
fn validate_scanner_config(config: &ScannerConfig) -> Result<(), ConfigError> {
    if config.source_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "source_name cannot be empty".to_string(),
        ));
    }

    if config.source_name.chars().any(char::is_control) {
        return Err(ConfigError::Validation(format!(
            "source_name must not contain control characters, got {:?}",
            config.source_name
        )));
    }

    Ok(())
}
