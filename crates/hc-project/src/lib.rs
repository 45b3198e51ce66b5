//! hc-project: persisted run configuration and its validation.
//!
//! Configurations are flat `"Section_Field" -> value` maps stored as JSON
//! (the GUI format) or YAML with the same schema. [`RunConfig::from_flat`]
//! turns one into typed, validated run inputs.

pub mod flat;
pub mod keys;
pub mod run;
pub mod validate;

pub use flat::{ConfigValue, FlatConfig};
pub use run::{ChemistryOverrides, RunConfig};
pub use validate::ValidationError;

use hc_combustion::CombustionError;
use hc_components::ComponentError;
use hc_solver::SolverError;
use hc_sweep::SweepError;
use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    #[error("Propellant error: {0}")]
    Combustion(#[from] CombustionError),

    #[error("Operating conditions error: {0}")]
    Solver(#[from] SolverError),

    #[error("Sweep range error: {0}")]
    Sweep(#[from] SweepError),

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_json(path: &Path) -> ProjectResult<FlatConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_json(path: &Path, config: &FlatConfig) -> ProjectResult<()> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_yaml(path: &Path) -> ProjectResult<FlatConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

pub fn save_yaml(path: &Path, config: &FlatConfig) -> ProjectResult<()> {
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> ProjectResult<Format> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => Ok(Format::Json),
        Some("yaml" | "yml") => Ok(Format::Yaml),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Load a flat config, picking the format from the file extension.
pub fn load(path: &Path) -> ProjectResult<FlatConfig> {
    match format_of(path)? {
        Format::Json => load_json(path),
        Format::Yaml => load_yaml(path),
    }
}

pub fn save(path: &Path, config: &FlatConfig) -> ProjectResult<()> {
    match format_of(path)? {
        Format::Json => save_json(path, config),
        Format::Yaml => save_yaml(path, config),
    }
}

/// Load and validate a run configuration.
pub fn load_run_config(path: &Path) -> ProjectResult<RunConfig> {
    let flat = load(path)?;
    tracing::debug!(path = %path.display(), entries = flat.len(), "loaded configuration");
    RunConfig::from_flat(&flat)
}
