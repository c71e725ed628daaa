//! Theme system
//!
//! Themes are authored as TOML documents (see the bundled palettes below)
//! and resolved into ratatui colors at startup. Selection comes from the
//! config file or RESERVA_THEME; unknown names fall back to the default.

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use serde::Deserialize;

// ─────────────────────────────────────────────────────────────────────────────
// Bundled palettes
// ─────────────────────────────────────────────────────────────────────────────

/// Default theme: deep greens on near-black
const VERDE_DARK: &str = r##"
[meta]
name = "Verde Dark"
version = "1.0"

[ui]
background = "#0f140f"
foreground = "#d8e2d8"
border = "#38483a"
border_focused = "#7fbf7f"
title = "#a3d9a3"
muted = "#6d7d6d"
border_type = "rounded"

[form]
label = "#c5d6c5"
error = "#e07a7a"
success = "#8fd98f"
accent = "#e5c07b"
"##;

/// Light variant for bright terminals
const VERDE_LIGHT: &str = r##"
[meta]
name = "Verde Light"
version = "1.0"

[ui]
background = "#f4f7f2"
foreground = "#26312a"
border = "#a8b8a8"
border_focused = "#2e7d32"
title = "#1b5e20"
muted = "#7b887b"
border_type = "rounded"

[form]
label = "#33402f"
error = "#b3261e"
success = "#2e7d32"
accent = "#8a6d1a"
"##;

/// ANSI-only palette that inherits the terminal's own colors
const TERMINAL: &str = r##"
[meta]
name = "Terminal"
version = "1.0"

[ui]
background = "default"
foreground = "default"
border = "ansi:8"
border_focused = "ansi:10"
title = "ansi:10"
muted = "ansi:8"
border_type = "plain"

[form]
label = "ansi:7"
error = "ansi:9"
success = "ansi:10"
accent = "ansi:11"
"##;

const BUNDLED: [&str; 3] = [VERDE_DARK, VERDE_LIGHT, TERMINAL];

// ─────────────────────────────────────────────────────────────────────────────
// TOML format
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TomlTheme {
    meta: TomlMeta,
    ui: TomlUi,
    form: TomlForm,
}

#[derive(Debug, Deserialize)]
struct TomlMeta {
    name: String,
    #[allow(dead_code)]
    version: String,
}

#[derive(Debug, Deserialize)]
struct TomlUi {
    background: String,
    foreground: String,
    border: String,
    border_focused: String,
    title: String,
    muted: String,
    border_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlForm {
    label: String,
    error: String,
    success: String,
    accent: String,
}

/// Parse a color string: "#RRGGBB", "ansi:N" (0-255), a basic color
/// name, or "default" for the terminal's own color.
fn parse_color(s: &str) -> Result<Color, String> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("default") {
        return Ok(Color::Reset);
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid hex color '{}': expected #RRGGBB", s));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| format!("invalid hex color '{}'", s))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| format!("invalid hex color '{}'", s))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| format!("invalid hex color '{}'", s))?;
        return Ok(Color::Rgb(r, g, b));
    }

    if let Some(idx) = s.strip_prefix("ansi:") {
        let n: u8 = idx
            .parse()
            .map_err(|_| format!("invalid ansi color '{}': expected ansi:0-255", s))?;
        return Ok(Color::Indexed(n));
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        _ => Err(format!("unknown color '{}'", s)),
    }
}

fn parse_border_type(s: Option<&str>) -> BorderType {
    match s.map(str::to_lowercase).as_deref() {
        Some("plain") => BorderType::Plain,
        Some("double") => BorderType::Double,
        Some("thick") => BorderType::Thick,
        // Rounded is the house style
        _ => BorderType::Rounded,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolved theme
// ─────────────────────────────────────────────────────────────────────────────

/// Fully resolved theme, ready for styling
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
    pub muted: Color,
    pub label: Color,
    pub error: Color,
    pub success: Color,
    pub accent: Color,
    pub border_type: BorderType,
}

impl Theme {
    fn from_toml_str(source: &str) -> Result<Self, String> {
        let toml_theme: TomlTheme =
            toml::from_str(source).map_err(|e| format!("theme parse error: {}", e))?;

        Ok(Self {
            name: toml_theme.meta.name,
            background: parse_color(&toml_theme.ui.background)?,
            foreground: parse_color(&toml_theme.ui.foreground)?,
            border: parse_color(&toml_theme.ui.border)?,
            border_focused: parse_color(&toml_theme.ui.border_focused)?,
            title: parse_color(&toml_theme.ui.title)?,
            muted: parse_color(&toml_theme.ui.muted)?,
            label: parse_color(&toml_theme.form.label)?,
            error: parse_color(&toml_theme.form.error)?,
            success: parse_color(&toml_theme.form.success)?,
            accent: parse_color(&toml_theme.form.accent)?,
            border_type: parse_border_type(toml_theme.ui.border_type.as_deref()),
        })
    }

    /// Look up a bundled theme by name (case-insensitive).
    /// Unknown names fall back to the default palette.
    pub fn by_name(name: &str) -> Self {
        for source in BUNDLED {
            if let Ok(theme) = Self::from_toml_str(source) {
                if theme.name.eq_ignore_ascii_case(name.trim()) {
                    return theme;
                }
            }
        }
        Self::default()
    }

    /// Names of all bundled themes, for the help view
    pub fn available() -> Vec<String> {
        BUNDLED
            .iter()
            .filter_map(|source| Self::from_toml_str(source).ok())
            .map(|theme| theme.name)
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        // The bundled default is validated by tests; the hardcoded
        // fallback only exists so a bad edit here can't panic at runtime.
        Self::from_toml_str(VERDE_DARK).unwrap_or(Self {
            name: "Verde Dark".to_string(),
            background: Color::Rgb(15, 20, 15),
            foreground: Color::Rgb(216, 226, 216),
            border: Color::Rgb(56, 72, 58),
            border_focused: Color::Rgb(127, 191, 127),
            title: Color::Rgb(163, 217, 163),
            muted: Color::Rgb(109, 125, 109),
            label: Color::Rgb(197, 214, 197),
            error: Color::Rgb(224, 122, 122),
            success: Color::Rgb(143, 217, 143),
            accent: Color::Rgb(229, 192, 123),
            border_type: BorderType::Rounded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bundled_themes_parse() {
        for source in BUNDLED {
            let theme = Theme::from_toml_str(source).expect("bundled theme should parse");
            assert!(!theme.name.is_empty());
        }
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("verde light").name, "Verde Light");
        assert_eq!(Theme::by_name("TERMINAL").name, "Terminal");
        assert_eq!(Theme::by_name("  Verde Dark  ").name, "Verde Dark");
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert_eq!(Theme::by_name("solarized").name, "Verde Dark");
        assert_eq!(Theme::by_name("").name, "Verde Dark");
    }

    #[test]
    fn test_parse_color_formats() {
        assert_eq!(parse_color("#ff8000"), Ok(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_color("ansi:10"), Ok(Color::Indexed(10)));
        assert_eq!(parse_color("default"), Ok(Color::Reset));
        assert_eq!(parse_color("red"), Ok(Color::Red));
        assert!(parse_color("#ff80").is_err());
        // Six bytes but not hex digits
        assert!(parse_color("#€€").is_err());
        assert!(parse_color("ansi:300").is_err());
        assert!(parse_color("chartreuse-ish").is_err());
    }

    #[test]
    fn test_terminal_theme_uses_ansi_colors() {
        let theme = Theme::by_name("Terminal");
        assert_eq!(theme.background, Color::Reset);
        assert_eq!(theme.border_focused, Color::Indexed(10));
        assert_eq!(theme.border_type, BorderType::Plain);
    }

    #[test]
    fn test_available_lists_all_bundled() {
        let names = Theme::available();
        assert_eq!(names, ["Verde Dark", "Verde Light", "Terminal"]);
    }
}
