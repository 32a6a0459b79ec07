use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::DEFAULT_LOG_LEVEL;
use crate::view::pagination::DEFAULT_PAGE_SIZE;
use crate::view::rendered::NO_DATA_PLACEHOLDER;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table: TableConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Defaults applied to every table the CLI builds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page
    pub page_size: usize,

    pub searchable: bool,
    pub filterable: bool,
    pub paginate: bool,
    pub exportable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colour status badges and summary lines
    pub use_color: bool,

    /// Text of the row shown when nothing matches
    pub placeholder: String,

    /// Print "Page p of n, k items" under the table
    pub show_summary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing filter directive, overridden by RUST_LOG
    pub level: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            searchable: true,
            filterable: true,
            paginate: true,
            exportable: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            placeholder: NO_DATA_PLACEHOLDER.to_string(),
            show_summary: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults when
    /// no file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// Save config to the given path, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("admin-table").join("config.toml"))
    }

    /// Write the commented default config to `path`
    pub fn generate_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        fs::write(path, Self::create_default_with_comments())
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# admin-table configuration file
# Location: ~/.config/admin-table/config.toml (Linux)
#           ~/Library/Application Support/admin-table/config.toml (macOS)
#           %APPDATA%\admin-table\config.toml (Windows)

[table]
# Rows shown per page
page_size = 10

# Enable free-text search across all columns
searchable = true

# Enable per-field filters
filterable = true

# Split results into pages (false shows every matching row)
paginate = true

# Offer exporting the filtered rows
exportable = true

[display]
# Colour status badges and summary lines
use_color = true

# Row shown when nothing matches
placeholder = "No data available"

# Print "Page p of n, k items" under the table
show_summary = true

[logging]
# tracing filter directive; RUST_LOG takes precedence
level = "warn"
"#
        .to_string()
    }
}
