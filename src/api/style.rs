use serde::{Deserialize, Serialize};

use crate::core::ColorClass;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartTheme {
    #[default]
    Light,
    Dark,
}

/// Palette and font sizes for one theme.
///
/// The style is plain configuration handed to the frame builder; nothing
/// reads a process-wide theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub critical_fill: Color,
    pub warning_fill: Color,
    pub normal_fill: Color,
    pub background: Color,
    pub grid_line_color: Color,
    pub axis_line_color: Color,
    pub label_color: Color,
    pub title_color: Color,
    pub tooltip_fill: Color,
    pub tooltip_border: Color,
    pub tooltip_text_color: Color,
    pub title_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub tick_font_size_px: f64,
    pub tooltip_font_size_px: f64,
}

impl ChartStyle {
    #[must_use]
    pub fn for_theme(theme: ChartTheme) -> Self {
        let critical_fill = Color::from_hex(0xf44336);
        let warning_fill = Color::from_hex(0xff9800);
        let normal_fill = Color::from_hex(0x4caf50);
        match theme {
            ChartTheme::Light => Self {
                critical_fill,
                warning_fill,
                normal_fill,
                background: Color::rgb(1.0, 1.0, 1.0),
                grid_line_color: Color::from_hex(0xb0b0b0).with_alpha(0.7),
                axis_line_color: Color::from_hex(0x333333),
                label_color: Color::from_hex(0x333333),
                title_color: Color::from_hex(0x212121),
                tooltip_fill: Color::rgb(1.0, 1.0, 1.0).with_alpha(0.7),
                tooltip_border: Color::rgb(0.0, 0.0, 0.0),
                tooltip_text_color: Color::rgb(0.0, 0.0, 0.0),
                title_font_size_px: 14.0,
                axis_title_font_size_px: 12.0,
                tick_font_size_px: 10.0,
                tooltip_font_size_px: 10.0,
            },
            ChartTheme::Dark => Self {
                critical_fill,
                warning_fill,
                normal_fill,
                background: Color::from_hex(0x2d2d2d),
                grid_line_color: Color::from_hex(0x555555).with_alpha(0.7),
                axis_line_color: Color::from_hex(0xf5f5f5),
                label_color: Color::from_hex(0xf5f5f5),
                title_color: Color::from_hex(0xf5f5f5),
                tooltip_fill: Color::from_hex(0x3d3d3d).with_alpha(0.7),
                tooltip_border: Color::from_hex(0xf5f5f5),
                tooltip_text_color: Color::from_hex(0xf5f5f5),
                title_font_size_px: 14.0,
                axis_title_font_size_px: 12.0,
                tick_font_size_px: 10.0,
                tooltip_font_size_px: 10.0,
            },
        }
    }

    #[must_use]
    pub fn bar_fill(&self, class: ColorClass) -> Color {
        match class {
            ColorClass::Critical => self.critical_fill,
            ColorClass::Warning => self.warning_fill,
            ColorClass::Normal => self.normal_fill,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.critical_fill,
            self.warning_fill,
            self.normal_fill,
            self.background,
            self.grid_line_color,
            self.axis_line_color,
            self.label_color,
            self.title_color,
            self.tooltip_fill,
            self.tooltip_border,
            self.tooltip_text_color,
        ] {
            color.validate()?;
        }
        for (name, size) in [
            ("title", self.title_font_size_px),
            ("axis title", self.axis_title_font_size_px),
            ("tick", self.tick_font_size_px),
            ("tooltip", self.tooltip_font_size_px),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} font size must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::for_theme(ChartTheme::default())
    }
}
