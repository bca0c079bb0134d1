//! Rendering configuration: stroke styling and page geometry
//!
//! Parameters are gathered by the caller (CLI flags or a TOML settings
//! file) and handed to the renderers wholesale; the core never talks to
//! an interactive widget.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors from hex color parsing
#[derive(Error, Debug)]
pub enum ColorError {
    #[error("'{0}' is not a hex color (expected #rgb or #rrggbb)")]
    Malformed(String),
}

/// An RGB color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Parse a `#rrggbb` or shorthand `#rgb` hex string
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(ColorError::Malformed(hex.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::Malformed(hex.to_string()))
        };
        let (r, g, b) = match digits.len() {
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ),
            3 => (
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            ),
            _ => return Err(ColorError::Malformed(hex.to_string())),
        };

        Ok(Self::rgb(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
        ))
    }
}

/// Named page-size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[serde(alias = "A4")]
    A4,
    #[serde(alias = "Letter")]
    Letter,
}

impl PageSize {
    /// Physical (width, height) in inches
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (8.268, 11.693),
            PageSize::Letter => (8.5, 11.0),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            other => Err(format!(
                "unknown page size '{}' (expected 'a4' or 'letter')",
                other
            )),
        }
    }
}

/// Parameters for one render call. Immutable once handed to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParameters {
    /// Stroke color for every segment
    pub stroke_color: Color,
    /// Stroke width in points
    pub stroke_width: f64,
    /// Page width in inches
    pub page_width: f64,
    /// Page height in inches
    pub page_height: f64,
}

impl Default for RenderParameters {
    fn default() -> Self {
        let (page_width, page_height) = PageSize::A4.dimensions();
        Self {
            // #010b13, the plotter tool's near-black default ink
            stroke_color: Color::rgb(1.0 / 255.0, 11.0 / 255.0, 19.0 / 255.0),
            stroke_width: 2.0,
            page_width,
            page_height,
        }
    }
}

impl RenderParameters {
    /// Create parameters with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke color
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set page dimensions from a named preset
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        let (width, height) = size.dimensions();
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set custom page dimensions in inches
    pub fn with_page_dimensions(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Load parameters from a TOML settings file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse parameters from TOML text, filling gaps with defaults
    ///
    /// ```toml
    /// [stroke]
    /// color = "#c43d3e"
    /// width = 3
    ///
    /// [page]
    /// size = "letter"        # or explicit width/height in inches
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let mut params = Self::default();

        if let Some(stroke) = parsed.stroke {
            if let Some(color) = stroke.color {
                params.stroke_color = Color::from_hex(&color)?;
            }
            if let Some(width) = stroke.width {
                ensure_positive("stroke width", width)?;
                params.stroke_width = width;
            }
        }
        if let Some(page) = parsed.page {
            if let Some(size) = page.size {
                params = params.with_page_size(size);
            }
            if let Some(width) = page.width {
                ensure_positive("page width", width)?;
                params.page_width = width;
            }
            if let Some(height) = page.height {
                ensure_positive("page height", height)?;
                params.page_height = height;
            }
        }

        Ok(params)
    }
}

/// Errors when loading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

/// TOML structure for deserializing settings files
#[derive(Deserialize)]
struct TomlSettings {
    stroke: Option<TomlStroke>,
    page: Option<TomlPage>,
}

#[derive(Deserialize)]
struct TomlStroke {
    color: Option<String>,
    width: Option<f64>,
}

#[derive(Deserialize)]
struct TomlPage {
    size: Option<PageSize>,
    width: Option<f64>,
    height: Option<f64>,
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = RenderParameters::default();
        assert_eq!(params.stroke_width, 2.0);
        assert_eq!(params.page_width, 8.268);
        assert_eq!(params.page_height, 11.693);
        assert_eq!(params.stroke_color, Color::from_hex("#010b13").unwrap());
    }

    #[test]
    fn test_builder_pattern() {
        let params = RenderParameters::new()
            .with_stroke_color(Color::black())
            .with_stroke_width(5.0)
            .with_page_size(PageSize::Letter);

        assert_eq!(params.stroke_color, Color::black());
        assert_eq!(params.stroke_width, 5.0);
        assert_eq!(params.page_width, 8.5);
        assert_eq!(params.page_height, 11.0);
    }

    #[test]
    fn test_custom_page_dimensions() {
        let params = RenderParameters::new().with_page_dimensions(4.0, 6.0);
        assert_eq!(params.page_width, 4.0);
        assert_eq!(params.page_height, 6.0);
    }

    #[test]
    fn test_hex_color_full() {
        let color = Color::from_hex("#ff8000").unwrap();
        assert!((color.r - 1.0).abs() < 1e-9);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-9);
        assert!((color.b - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_hex_color_shorthand() {
        // #f00 expands to #ff0000
        assert_eq!(Color::from_hex("#f00").unwrap(), Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_hex_color_without_hash() {
        assert_eq!(
            Color::from_hex("000000").unwrap(),
            Color::black()
        );
    }

    #[test]
    fn test_hex_color_malformed() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("red").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_page_size_from_str() {
        assert_eq!("a4".parse::<PageSize>().unwrap(), PageSize::A4);
        assert_eq!("Letter".parse::<PageSize>().unwrap(), PageSize::Letter);
        assert!("tabloid".parse::<PageSize>().is_err());
    }

    #[test]
    fn test_settings_from_toml() {
        let params = RenderParameters::from_toml_str(
            r##"
            [stroke]
            color = "#c43d3e"
            width = 3.0

            [page]
            size = "letter"
            "##,
        )
        .unwrap();

        assert_eq!(params.stroke_color, Color::from_hex("#c43d3e").unwrap());
        assert_eq!(params.stroke_width, 3.0);
        assert_eq!(params.page_width, 8.5);
    }

    #[test]
    fn test_settings_custom_page_overrides_preset() {
        let params = RenderParameters::from_toml_str(
            r#"
            [page]
            size = "a4"
            width = 5.0
            height = 7.0
            "#,
        )
        .unwrap();

        assert_eq!(params.page_width, 5.0);
        assert_eq!(params.page_height, 7.0);
    }

    #[test]
    fn test_settings_empty_toml_is_defaults() {
        let params = RenderParameters::from_toml_str("").unwrap();
        assert_eq!(params, RenderParameters::default());
    }

    #[test]
    fn test_settings_bad_color_rejected() {
        let err = RenderParameters::from_toml_str(
            r#"
            [stroke]
            color = "not-a-color"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SettingsError::Color(_)));
    }

    #[test]
    fn test_settings_non_positive_width_rejected() {
        let err = RenderParameters::from_toml_str(
            r#"
            [page]
            width = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SettingsError::NonPositive { .. }));
    }
}
