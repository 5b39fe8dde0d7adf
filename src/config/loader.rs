//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::FilteredExportConfig;
use crate::domain::errors::FilteredExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

/// Configuration file looked up when none is given explicitly
pub const DEFAULT_CONFIG_PATH: &str = "filtered-export.toml";

/// Prefix of configuration override environment variables
pub const ENV_PREFIX: &str = "FILTERED_EXPORT_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into FilteredExportConfig
/// 4. Applies environment variable overrides (FILTERED_EXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use filtered_export::config::loader::load_config;
///
/// let config = load_config("filtered-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<FilteredExportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FilteredExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        FilteredExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads the configuration the CLI runs with
///
/// An explicit path must exist. Without one, the default file is used when
/// present and the built-in defaults otherwise; environment overrides apply
/// in both cases.
///
/// # Errors
///
/// Returns an error if the explicit file is missing or any file is invalid.
pub fn load_config_or_default(path: Option<&Path>) -> Result<FilteredExportConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_config(default_path)
            } else {
                tracing::debug!(path = DEFAULT_CONFIG_PATH, "No configuration file, using defaults");
                finish(FilteredExportConfig::default())
            }
        }
    }
}

/// Parses configuration text
///
/// # Errors
///
/// Returns an error if substitution, parsing or validation fails.
pub fn parse_config(contents: &str) -> Result<FilteredExportConfig> {
    let contents = substitute_env_vars(contents)?;

    let config: FilteredExportConfig = toml::from_str(&contents).map_err(|e| {
        FilteredExportError::Configuration(format!("Failed to parse TOML: {e}"))
    })?;

    finish(config)
}

fn finish(mut config: FilteredExportConfig) -> Result<FilteredExportConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        FilteredExportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = placeholder_pattern();
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(FilteredExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

fn parse_override<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| {
        FilteredExportError::Configuration(format!("Invalid {ENV_PREFIX}{key} '{value}': {e}"))
    })
}

/// Applies environment variable overrides using the FILTERED_EXPORT_* prefix
///
/// Environment variables follow the pattern: FILTERED_EXPORT_<SECTION>_<KEY>
/// For example: FILTERED_EXPORT_STL_REFINEMENT, FILTERED_EXPORT_STEP_MODE
fn apply_env_overrides(config: &mut FilteredExportConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env_override("APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_override("APPLICATION_DRY_RUN", &val)?;
    }

    // Export overrides
    if let Some(val) = env_override("EXPORT_DESIGN") {
        config.export.design = Some(PathBuf::from(val));
    }
    if let Some(val) = env_override("EXPORT_OUTPUT_DIR") {
        config.export.output_dir = Some(PathBuf::from(val));
    }

    // STL overrides
    if let Some(val) = env_override("STL_FORMAT") {
        config.stl.format = parse_override("STL_FORMAT", &val)?;
    }
    if let Some(val) = env_override("STL_REFINEMENT") {
        config.stl.refinement = parse_override("STL_REFINEMENT", &val)?;
    }
    if let Some(val) = env_override("STL_FILTER_LINKED_COMPONENTS") {
        config.stl.filter_linked_components =
            parse_override("STL_FILTER_LINKED_COMPONENTS", &val)?;
    }

    // STEP overrides
    if let Some(val) = env_override("STEP_MODE") {
        config.step.mode = parse_override("STEP_MODE", &val)?;
    }

    // Naming overrides
    if let Some(val) = env_override("NAMING_ADD_ROOT_NAME") {
        config.naming.add_root_name = parse_override("NAMING_ADD_ROOT_NAME", &val)?;
    }
    if let Some(val) = env_override("NAMING_ADD_COMPONENT_NAME") {
        config.naming.add_component_name = parse_override("NAMING_ADD_COMPONENT_NAME", &val)?;
    }
    if let Some(val) = env_override("NAMING_STRIP_VERSION_TAG") {
        config.naming.strip_version_tag = parse_override("NAMING_STRIP_VERSION_TAG", &val)?;
    }
    if let Some(val) = env_override("NAMING_NORMALIZE_SPACING") {
        config.naming.normalize_spacing = parse_override("NAMING_NORMALIZE_SPACING", &val)?;
    }
    if let Some(val) = env_override("NAMING_ADD_REFINEMENT_NAME") {
        config.naming.add_refinement_name = parse_override("NAMING_ADD_REFINEMENT_NAME", &val)?;
    }

    // Logging overrides
    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
