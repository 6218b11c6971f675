use serde::{Deserialize, Serialize};

use crate::core::Margins;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Space reserved for the legend, depending on which side it sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendStyle {
    /// Reserved width when the legend is on the left or right.
    #[serde(default = "default_legend_vertical_width")]
    pub vertical_width: f64,
    /// Reserved height when the legend is on the top or bottom.
    #[serde(default = "default_legend_horizontal_height")]
    pub horizontal_height: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            vertical_width: default_legend_vertical_width(),
            horizontal_height: default_legend_horizontal_height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTitleStyle {
    #[serde(default = "default_axis_title_font_size")]
    pub font_size: f64,
    #[serde(default = "default_axis_title_padding")]
    pub padding: f64,
}

impl AxisTitleStyle {
    /// Extra space an axis reserves when it carries a title.
    #[must_use]
    pub fn reserved_height(self) -> f64 {
        self.font_size + self.padding
    }
}

impl Default for AxisTitleStyle {
    fn default() -> Self {
        Self {
            font_size: default_axis_title_font_size(),
            padding: default_axis_title_padding(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxesTheme {
    #[serde(default)]
    pub axis_title_style: AxisTitleStyle,
}

/// Stroke used for annotation lines and their markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLineStyle {
    #[serde(default = "default_annotation_stroke")]
    pub stroke: Color,
    #[serde(default = "default_annotation_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_annotation_opacity")]
    pub opacity: f64,
}

impl AnnotationLineStyle {
    pub fn validate(self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "annotation stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "annotation opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

impl Default for AnnotationLineStyle {
    fn default() -> Self {
        Self {
            stroke: default_annotation_stroke(),
            stroke_width: default_annotation_stroke_width(),
            opacity: default_annotation_opacity(),
        }
    }
}

/// Theme values the geometry engine reads.
///
/// Built once per render pass and passed by reference; nothing here is
/// mutated by the geometry functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    #[serde(default = "default_chart_margins")]
    pub chart_margins: Margins,
    #[serde(default)]
    pub chart_paddings: Margins,
    #[serde(default)]
    pub legend: LegendStyle,
    #[serde(default)]
    pub axes: AxesTheme,
    #[serde(default)]
    pub line_annotation: AnnotationLineStyle,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            chart_margins: default_chart_margins(),
            chart_paddings: Margins::default(),
            legend: LegendStyle::default(),
            axes: AxesTheme::default(),
            line_annotation: AnnotationLineStyle::default(),
        }
    }
}

impl ChartTheme {
    #[must_use]
    pub fn with_chart_margins(mut self, chart_margins: Margins) -> Self {
        self.chart_margins = chart_margins;
        self
    }

    #[must_use]
    pub fn with_chart_paddings(mut self, chart_paddings: Margins) -> Self {
        self.chart_paddings = chart_paddings;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendStyle) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_axis_title_style(mut self, axis_title_style: AxisTitleStyle) -> Self {
        self.axes.axis_title_style = axis_title_style;
        self
    }

    #[must_use]
    pub fn with_line_annotation_style(mut self, line_annotation: AnnotationLineStyle) -> Self {
        self.line_annotation = line_annotation;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (name, margins) in [
            ("chart_margins", self.chart_margins),
            ("chart_paddings", self.chart_paddings),
        ] {
            let sides = [margins.top, margins.bottom, margins.left, margins.right];
            if sides.iter().any(|side| !side.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must contain finite values"
                )));
            }
        }
        let sizes = [
            self.legend.vertical_width,
            self.legend.horizontal_height,
            self.axes.axis_title_style.font_size,
            self.axes.axis_title_style.padding,
        ];
        if sizes.iter().any(|size| !size.is_finite() || *size < 0.0) {
            return Err(ChartError::InvalidData(
                "legend and axis title sizes must be finite and >= 0".to_owned(),
            ));
        }
        self.line_annotation.validate()
    }

    /// Serializes the theme to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize theme: {e}")))
    }

    /// Deserializes and validates a theme from JSON. Missing fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let theme: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse theme: {e}")))?;
        theme.validate()?;
        Ok(theme)
    }
}

fn default_chart_margins() -> Margins {
    Margins::uniform(10.0)
}

fn default_legend_vertical_width() -> f64 {
    150.0
}

fn default_legend_horizontal_height() -> f64 {
    50.0
}

fn default_axis_title_font_size() -> f64 {
    12.0
}

fn default_axis_title_padding() -> f64 {
    5.0
}

fn default_annotation_stroke() -> Color {
    Color::rgb(0.467, 0.467, 0.467)
}

fn default_annotation_stroke_width() -> f64 {
    1.0
}

fn default_annotation_opacity() -> f64 {
    1.0
}
