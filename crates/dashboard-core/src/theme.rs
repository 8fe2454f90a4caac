//! Design tokens for the dashboard
//!
//! A `Theme` is a plain value handed to whatever renders the dashboard. Every
//! recognized token resolves to a value: overrides win, the named preset fills
//! in the rest.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Recognized style keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeToken {
    ColorBgPrimary,
    ColorBgSecondary,
    ColorTextPrimary,
    ColorTextSecondary,
    ColorBorder,
    ColorInfoBg,
    ColorInfoBorder,
    ChartColor1,
    ChartColor2,
    ChartColor3,
    ChartGridColor,
    ChartAxisColor,
    ChartTooltipBg,
    ChartFontFamily,
    InputBg,
    InputBorderColor,
    InputTextColor,
    InputHeight,
    InputPaddingInline,
    SpacingXs,
    SpacingSm,
    SpacingMd,
    SpacingLg,
    SpacingXl,
    RadiusSm,
    RadiusMd,
    RadiusLg,
    ShadowSm,
    ShadowMd,
    FontSizeSm,
    FontSizeBase,
    FontSize2xl,
    FontSize3xl,
    FontSize4xl,
    FontWeightMedium,
    FontWeightSemibold,
    FontWeightBold,
}

impl ThemeToken {
    pub const ALL: [ThemeToken; 37] = [
        ThemeToken::ColorBgPrimary,
        ThemeToken::ColorBgSecondary,
        ThemeToken::ColorTextPrimary,
        ThemeToken::ColorTextSecondary,
        ThemeToken::ColorBorder,
        ThemeToken::ColorInfoBg,
        ThemeToken::ColorInfoBorder,
        ThemeToken::ChartColor1,
        ThemeToken::ChartColor2,
        ThemeToken::ChartColor3,
        ThemeToken::ChartGridColor,
        ThemeToken::ChartAxisColor,
        ThemeToken::ChartTooltipBg,
        ThemeToken::ChartFontFamily,
        ThemeToken::InputBg,
        ThemeToken::InputBorderColor,
        ThemeToken::InputTextColor,
        ThemeToken::InputHeight,
        ThemeToken::InputPaddingInline,
        ThemeToken::SpacingXs,
        ThemeToken::SpacingSm,
        ThemeToken::SpacingMd,
        ThemeToken::SpacingLg,
        ThemeToken::SpacingXl,
        ThemeToken::RadiusSm,
        ThemeToken::RadiusMd,
        ThemeToken::RadiusLg,
        ThemeToken::ShadowSm,
        ThemeToken::ShadowMd,
        ThemeToken::FontSizeSm,
        ThemeToken::FontSizeBase,
        ThemeToken::FontSize2xl,
        ThemeToken::FontSize3xl,
        ThemeToken::FontSize4xl,
        ThemeToken::FontWeightMedium,
        ThemeToken::FontWeightSemibold,
        ThemeToken::FontWeightBold,
    ];

    /// Kebab-case key used in config files
    pub fn key(self) -> &'static str {
        match self {
            ThemeToken::ColorBgPrimary => "color-bg-primary",
            ThemeToken::ColorBgSecondary => "color-bg-secondary",
            ThemeToken::ColorTextPrimary => "color-text-primary",
            ThemeToken::ColorTextSecondary => "color-text-secondary",
            ThemeToken::ColorBorder => "color-border",
            ThemeToken::ColorInfoBg => "color-info-bg",
            ThemeToken::ColorInfoBorder => "color-info-border",
            ThemeToken::ChartColor1 => "chart-color-1",
            ThemeToken::ChartColor2 => "chart-color-2",
            ThemeToken::ChartColor3 => "chart-color-3",
            ThemeToken::ChartGridColor => "chart-grid-color",
            ThemeToken::ChartAxisColor => "chart-axis-color",
            ThemeToken::ChartTooltipBg => "chart-tooltip-bg",
            ThemeToken::ChartFontFamily => "chart-font-family",
            ThemeToken::InputBg => "input-bg",
            ThemeToken::InputBorderColor => "input-border-color",
            ThemeToken::InputTextColor => "input-text-color",
            ThemeToken::InputHeight => "input-height",
            ThemeToken::InputPaddingInline => "input-padding-inline",
            ThemeToken::SpacingXs => "spacing-xs",
            ThemeToken::SpacingSm => "spacing-sm",
            ThemeToken::SpacingMd => "spacing-md",
            ThemeToken::SpacingLg => "spacing-lg",
            ThemeToken::SpacingXl => "spacing-xl",
            ThemeToken::RadiusSm => "radius-sm",
            ThemeToken::RadiusMd => "radius-md",
            ThemeToken::RadiusLg => "radius-lg",
            ThemeToken::ShadowSm => "shadow-sm",
            ThemeToken::ShadowMd => "shadow-md",
            ThemeToken::FontSizeSm => "font-size-sm",
            ThemeToken::FontSizeBase => "font-size-base",
            ThemeToken::FontSize2xl => "font-size-2xl",
            ThemeToken::FontSize3xl => "font-size-3xl",
            ThemeToken::FontSize4xl => "font-size-4xl",
            ThemeToken::FontWeightMedium => "font-weight-medium",
            ThemeToken::FontWeightSemibold => "font-weight-semibold",
            ThemeToken::FontWeightBold => "font-weight-bold",
        }
    }

    /// CSS custom property name, e.g. `--chart-color-1`
    pub fn css_var(self) -> String {
        format!("--{}", self.key())
    }

    /// Value shared by every preset (layout and typography tokens)
    fn common_value(self) -> Option<&'static str> {
        let value = match self {
            ThemeToken::ChartFontFamily => "ui-monospace, SFMono-Regular, Menlo, monospace",
            ThemeToken::InputHeight => "2.5rem",
            ThemeToken::InputPaddingInline => "0.75rem",
            ThemeToken::SpacingXs => "0.25rem",
            ThemeToken::SpacingSm => "0.5rem",
            ThemeToken::SpacingMd => "1rem",
            ThemeToken::SpacingLg => "1.5rem",
            ThemeToken::SpacingXl => "2rem",
            ThemeToken::RadiusSm => "0.25rem",
            ThemeToken::RadiusMd => "0.375rem",
            ThemeToken::RadiusLg => "0.5rem",
            ThemeToken::FontSizeSm => "0.875rem",
            ThemeToken::FontSizeBase => "1rem",
            ThemeToken::FontSize2xl => "1.5rem",
            ThemeToken::FontSize3xl => "1.875rem",
            ThemeToken::FontSize4xl => "2.25rem",
            ThemeToken::FontWeightMedium => "500",
            ThemeToken::FontWeightSemibold => "600",
            ThemeToken::FontWeightBold => "700",
            _ => return None,
        };
        Some(value)
    }
}

impl fmt::Display for ThemeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseThemeError {
    #[error("unknown theme token '{0}'")]
    UnknownToken(String),
    #[error("unknown theme '{0}' (expected light, dark or brand)")]
    UnknownTheme(String),
}

impl FromStr for ThemeToken {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches("--");
        ThemeToken::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| ParseThemeError::UnknownToken(s.to_string()))
    }
}

impl Serialize for ThemeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for ThemeToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Built-in presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    Brand,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Light, ThemeName::Dark, ThemeName::Brand];

    pub fn key(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::Brand => "brand",
        }
    }

    /// Palette value for color and shadow tokens
    fn palette_value(self, token: ThemeToken) -> &'static str {
        use ThemeToken::*;
        match (self, token) {
            (ThemeName::Light, ColorBgPrimary) => "#ffffff",
            (ThemeName::Light, ColorBgSecondary) => "#f5f6f8",
            (ThemeName::Light, ColorTextPrimary) => "#111827",
            (ThemeName::Light, ColorTextSecondary) => "#4b5563",
            (ThemeName::Light, ColorBorder) => "#e5e7eb",
            (ThemeName::Light, ColorInfoBg) => "#eff6ff",
            (ThemeName::Light, ColorInfoBorder) => "#bfdbfe",
            (ThemeName::Light, ChartColor1) => "#2563eb",
            (ThemeName::Light, ChartColor2) => "#f97316",
            (ThemeName::Light, ChartColor3) => "#16a34a",
            (ThemeName::Light, ChartGridColor) => "#e5e7eb",
            (ThemeName::Light, ChartAxisColor) => "#6b7280",
            (ThemeName::Light, ChartTooltipBg) => "#ffffff",
            (ThemeName::Light, InputBg) => "#ffffff",
            (ThemeName::Light, InputBorderColor) => "#d1d5db",
            (ThemeName::Light, InputTextColor) => "#111827",
            (ThemeName::Light, ShadowSm) => "0 1px 2px rgba(0, 0, 0, 0.05)",
            (ThemeName::Light, ShadowMd) => "0 4px 6px rgba(0, 0, 0, 0.1)",

            (ThemeName::Dark, ColorBgPrimary) => "#0f172a",
            (ThemeName::Dark, ColorBgSecondary) => "#1e293b",
            (ThemeName::Dark, ColorTextPrimary) => "#f1f5f9",
            (ThemeName::Dark, ColorTextSecondary) => "#94a3b8",
            (ThemeName::Dark, ColorBorder) => "#334155",
            (ThemeName::Dark, ColorInfoBg) => "#172554",
            (ThemeName::Dark, ColorInfoBorder) => "#1e40af",
            (ThemeName::Dark, ChartColor1) => "#60a5fa",
            (ThemeName::Dark, ChartColor2) => "#fb923c",
            (ThemeName::Dark, ChartColor3) => "#4ade80",
            (ThemeName::Dark, ChartGridColor) => "#334155",
            (ThemeName::Dark, ChartAxisColor) => "#94a3b8",
            (ThemeName::Dark, ChartTooltipBg) => "#1e293b",
            (ThemeName::Dark, InputBg) => "#1e293b",
            (ThemeName::Dark, InputBorderColor) => "#475569",
            (ThemeName::Dark, InputTextColor) => "#f1f5f9",
            (ThemeName::Dark, ShadowSm) => "0 1px 2px rgba(0, 0, 0, 0.4)",
            (ThemeName::Dark, ShadowMd) => "0 4px 6px rgba(0, 0, 0, 0.5)",

            (ThemeName::Brand, ColorBgPrimary) => "#fffbf5",
            (ThemeName::Brand, ColorBgSecondary) => "#f3ece2",
            (ThemeName::Brand, ColorTextPrimary) => "#2b1d0e",
            (ThemeName::Brand, ColorTextSecondary) => "#6b5644",
            (ThemeName::Brand, ColorBorder) => "#e0d3c1",
            (ThemeName::Brand, ColorInfoBg) => "#f6efff",
            (ThemeName::Brand, ColorInfoBorder) => "#c9b3f5",
            (ThemeName::Brand, ChartColor1) => "#7c3aed",
            (ThemeName::Brand, ChartColor2) => "#db2777",
            (ThemeName::Brand, ChartColor3) => "#0d9488",
            (ThemeName::Brand, ChartGridColor) => "#e0d3c1",
            (ThemeName::Brand, ChartAxisColor) => "#6b5644",
            (ThemeName::Brand, ChartTooltipBg) => "#fffbf5",
            (ThemeName::Brand, InputBg) => "#fffbf5",
            (ThemeName::Brand, InputBorderColor) => "#cbb89f",
            (ThemeName::Brand, InputTextColor) => "#2b1d0e",
            (ThemeName::Brand, ShadowSm) => "0 1px 2px rgba(43, 29, 14, 0.08)",
            (ThemeName::Brand, ShadowMd) => "0 4px 8px rgba(43, 29, 14, 0.12)",

            // Layout and typography tokens never reach here
            _ => "",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeName {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ThemeName::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseThemeError::UnknownTheme(wanted.to_string()))
    }
}

/// A preset plus per-token overrides
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Theme {
    name: ThemeName,
    overrides: BTreeMap<ThemeToken, String>,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        Self {
            name,
            overrides: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }

    /// Same overrides on top of a different preset
    pub fn with_name(mut self, name: ThemeName) -> Self {
        self.name = name;
        self
    }

    pub fn with_override(mut self, token: ThemeToken, value: impl Into<String>) -> Self {
        self.overrides.insert(token, value.into());
        self
    }

    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (ThemeToken, String)>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Resolved value of a token
    pub fn get(&self, token: ThemeToken) -> &str {
        if let Some(value) = self.overrides.get(&token) {
            return value;
        }
        token
            .common_value()
            .unwrap_or_else(|| self.name.palette_value(token))
    }

    /// All tokens as `--key: value;` declarations, in token order
    pub fn css_variables(&self) -> String {
        ThemeToken::ALL
            .into_iter()
            .map(|t| format!("{}: {};", t.css_var(), self.get(t)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_resolves_in_every_preset() {
        for name in ThemeName::ALL {
            let theme = Theme::new(name);
            for token in ThemeToken::ALL {
                assert!(!theme.get(token).is_empty(), "{name}/{token} has no value");
            }
        }
    }

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        for token in ThemeToken::ALL {
            assert_eq!(token.key().parse::<ThemeToken>(), Ok(token));
            assert_eq!(token.css_var().parse::<ThemeToken>(), Ok(token));
        }
        let mut keys: Vec<_> = ThemeToken::ALL.iter().map(|t| t.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ThemeToken::ALL.len());
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        assert_eq!(
            "chart-color-9".parse::<ThemeToken>(),
            Err(ParseThemeError::UnknownToken("chart-color-9".to_string()))
        );
    }

    #[test]
    fn test_presets_differ_in_palette_only() {
        let light = Theme::new(ThemeName::Light);
        let dark = Theme::new(ThemeName::Dark);
        assert_ne!(light.get(ThemeToken::ColorBgPrimary), dark.get(ThemeToken::ColorBgPrimary));
        assert_eq!(light.get(ThemeToken::SpacingMd), dark.get(ThemeToken::SpacingMd));
    }

    #[test]
    fn test_override_wins_and_survives_preset_switch() {
        let theme = Theme::new(ThemeName::Light).with_override(ThemeToken::ChartColor1, "#000000");
        assert_eq!(theme.get(ThemeToken::ChartColor1), "#000000");

        let dark = theme.with_name(ThemeName::Dark);
        assert_eq!(dark.get(ThemeToken::ChartColor1), "#000000");
        assert_eq!(dark.get(ThemeToken::ChartColor2), "#fb923c");
    }

    #[test]
    fn test_theme_name_from_str() {
        assert_eq!("Dark".parse::<ThemeName>(), Ok(ThemeName::Dark));
        assert!("neon".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_css_variables() {
        let css = Theme::new(ThemeName::Light).css_variables();
        assert!(css.starts_with("--color-bg-primary: #ffffff;"));
        assert!(css.contains("--chart-color-1: #2563eb;"));
        assert!(css.contains("--font-size-2xl: 1.5rem;"));
    }
}
