//! Centralized constants for the sales dashboard CLI

// =============================================================================
// File Names
// =============================================================================

/// Config file looked up in the working directory when `--config` is not given
pub const CONFIG_FILENAME: &str = "config.toml";

// =============================================================================
// Text Chart
// =============================================================================

/// Default width of the longest bar, in characters
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Bar glyphs, one per series slot
pub const BAR_GLYPHS: [char; 3] = ['█', '▓', '░'];

/// Width of the summary banner rules
pub const BANNER_WIDTH: usize = 60;
