use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AllocationGrid, Config, DataFiles, OutputFiles};

/// Loads the pipeline configuration from the `config.toml` file.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Loads the pipeline configuration from an explicit file path.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        // Optionally, one could add environment variables here as well.
        // .add_source(config::Environment::with_prefix("APP"));
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Rejects configurations the engine cannot run with before any file I/O.
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.window.end_date < config.window.start_date {
        return Err(ConfigError::ValidationError(format!(
            "window end date {} precedes start date {}",
            config.window.end_date, config.window.start_date
        )));
    }
    let grid = &config.grid;
    if grid.step == 0 {
        return Err(ConfigError::ValidationError(
            "allocation grid step must be positive".to_string(),
        ));
    }
    if 100 % grid.step != 0 {
        return Err(ConfigError::ValidationError(format!(
            "allocation grid step {} must divide 100",
            grid.step
        )));
    }
    if grid.target % grid.step != 0 {
        return Err(ConfigError::ValidationError(format!(
            "allocation target {} must be a multiple of the step {}",
            grid.target, grid.step
        )));
    }
    Ok(())
}
