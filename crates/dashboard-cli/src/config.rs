//! Configuration for the sales dashboard CLI

use anyhow::{Context, Result};
use dashboard_core::{BoundsPolicy, Measure, Theme, ThemeName, ThemeToken};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants;
use crate::dataset::PeriodRef;

// =============================================================================
// File-based Configuration (config.toml)
// =============================================================================

/// Configuration loaded from config.toml. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub dataset: DatasetConfig,
    pub range: RangeConfig,
    pub display: DisplayConfig,
    pub theme: ThemeConfig,
}

/// Where period data comes from
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    /// CSV file with label,revenue,expenses,profit columns
    pub path: Option<PathBuf>,
}

/// Default range selection
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeConfig {
    /// First period (index or label)
    pub start: Option<PeriodRef>,
    /// Last period, inclusive (index or label)
    pub end: Option<PeriodRef>,
    /// Reject inverted or out-of-range selections instead of clamping
    pub strict: bool,
}

/// Chart and table options
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Measures drawn in the chart
    pub series: Vec<Measure>,
    /// Width of the longest text bar, in characters
    pub chart_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            series: vec![Measure::Revenue, Measure::Expenses],
            chart_width: constants::DEFAULT_CHART_WIDTH,
        }
    }
}

/// Theme preset and per-token overrides
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: ThemeName,
    pub overrides: BTreeMap<ThemeToken, String>,
}

impl FileConfig {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| {
            "Failed to parse config.toml. Check for:\n\
             - Unknown sections or keys (only dataset, range, display, theme)\n\
             - Unknown measures (revenue, expenses, profit) or theme tokens\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)"
        })
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Load an explicitly requested file, else `config.toml` if present, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::load(path);
        }

        let default_path = Path::new(constants::CONFIG_FILENAME);
        if default_path.exists() {
            debug!("Loading config from {}", default_path.display());
            Self::load(default_path)
        } else {
            debug!("No {} found, using defaults", constants::CONFIG_FILENAME);
            Ok(Self::default())
        }
    }
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Config file values merged with command-line overrides
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub start: Option<PeriodRef>,
    pub end: Option<PeriodRef>,
    pub policy: BoundsPolicy,
    pub series: Vec<Measure>,
    pub chart_width: usize,
    pub theme: Theme,
}

impl Config {
    /// Create config from file config and an optional dataset override
    pub fn from_file(file_config: FileConfig, data_path: Option<PathBuf>) -> Self {
        let FileConfig {
            dataset,
            range,
            display,
            theme,
        } = file_config;

        Self {
            data_path: data_path.or(dataset.path),
            start: range.start,
            end: range.end,
            policy: if range.strict {
                BoundsPolicy::Strict
            } else {
                BoundsPolicy::Lenient
            },
            series: display.series,
            chart_width: display.chart_width,
            theme: Theme::new(theme.name).with_overrides(theme.overrides),
        }
    }
}
