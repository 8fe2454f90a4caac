//! Inline style strings resolved from an explicit theme

use dashboard_core::{Theme, ThemeToken};

/// `property: value;` declarations for each (CSS property, token) pair
pub fn themed(theme: &Theme, decls: &[(&str, ThemeToken)]) -> String {
    decls
        .iter()
        .map(|(property, token)| format!("{}: {};", property, theme.get(*token)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::ThemeName;

    #[test]
    fn test_themed_resolves_tokens_in_order() {
        let theme = Theme::new(ThemeName::Light).with_override(ThemeToken::SpacingMd, "12px");
        let style = themed(
            &theme,
            &[("padding", ThemeToken::SpacingMd), ("color", ThemeToken::ColorTextPrimary)],
        );
        assert_eq!(style, "padding: 12px; color: #111827;");
    }

    #[test]
    fn test_themed_empty() {
        assert_eq!(themed(&Theme::default(), &[]), "");
    }
}
