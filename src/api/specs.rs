use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AnnotationId, AxisId, DomainValue, GroupId, Position, Scale, Size};

use super::theme::{AnnotationLineStyle, ChartTheme};

pub type AxisSpecs = IndexMap<AxisId, AxisSpec>;
pub type AxisTicksDimensionsMap = IndexMap<AxisId, AxisTicksDimensions>;
pub type AnnotationSpecs = IndexMap<AnnotationId, LineAnnotationSpec>;
pub type YScales = IndexMap<GroupId, Box<dyn Scale>>;

pub const DEFAULT_TICK_SIZE: f64 = 10.0;
pub const DEFAULT_TICK_PADDING: f64 = 10.0;
pub const DEFAULT_LINE_OVERFLOW: f64 = 0.0;

fn default_tick_size() -> f64 {
    DEFAULT_TICK_SIZE
}

fn default_tick_padding() -> f64 {
    DEFAULT_TICK_PADDING
}

fn default_line_overflow() -> f64 {
    DEFAULT_LINE_OVERFLOW
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub id: AxisId,
    pub group_id: GroupId,
    pub position: Position,
    #[serde(default = "default_tick_size")]
    pub tick_size: f64,
    #[serde(default = "default_tick_padding")]
    pub tick_padding: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub hide: bool,
}

impl AxisSpec {
    #[must_use]
    pub fn new(id: impl Into<AxisId>, group_id: impl Into<GroupId>, position: Position) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            position,
            tick_size: DEFAULT_TICK_SIZE,
            tick_padding: DEFAULT_TICK_PADDING,
            title: None,
            hide: false,
        }
    }

    #[must_use]
    pub fn with_ticks(mut self, tick_size: f64, tick_padding: f64) -> Self {
        self.tick_size = tick_size;
        self.tick_padding = tick_padding;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_hide(mut self, hide: bool) -> Self {
        self.hide = hide;
        self
    }
}

/// Measured label sizes of one axis, produced by the host's text measuring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisTicksDimensions {
    pub max_label_bbox_width: f64,
    pub max_label_bbox_height: f64,
    pub max_label_text_width: f64,
    pub max_label_text_height: f64,
}

impl AxisTicksDimensions {
    /// Unrotated labels: bbox and text sizes coincide.
    #[must_use]
    pub const fn from_label_size(width: f64, height: f64) -> Self {
        Self {
            max_label_bbox_width: width,
            max_label_bbox_height: height,
            max_label_text_width: width,
            max_label_text_height: height,
        }
    }
}

/// X and y axis of one group, when the group has them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupAxes<'a> {
    pub x_axis: Option<&'a AxisSpec>,
    pub y_axis: Option<&'a AxisSpec>,
}

/// Left/right axes are y axes, top/bottom axes are x axes. When a group has
/// several axes of one kind the last one wins.
#[must_use]
pub fn get_axes_for_group<'a>(axis_specs: &'a AxisSpecs, group_id: &GroupId) -> GroupAxes<'a> {
    axis_specs
        .values()
        .filter(|spec| &spec.group_id == group_id)
        .fold(GroupAxes::default(), |mut axes, spec| {
            if spec.position.is_vertical() {
                axes.y_axis = Some(spec);
            } else {
                axes.x_axis = Some(spec);
            }
            axes
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationDomainType {
    XDomain,
    YDomain,
}

impl AnnotationDomainType {
    #[must_use]
    pub const fn is_x_domain(self) -> bool {
        matches!(self, AnnotationDomainType::XDomain)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDatum {
    pub data_value: DomainValue,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
}

impl AnnotationDatum {
    #[must_use]
    pub fn new(data_value: impl Into<DomainValue>) -> Self {
        Self {
            data_value: data_value.into(),
            details: None,
            header: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

/// Host-rendered marker drawn at the axis end of an annotation line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    /// Opaque reference to the icon the host renders.
    pub icon: String,
    /// Measured pixel size of the rendered icon.
    pub dimensions: Size,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAnnotationSpec {
    pub id: AnnotationId,
    pub group_id: GroupId,
    pub domain_type: AnnotationDomainType,
    pub data_values: Vec<AnnotationDatum>,
    #[serde(default)]
    pub style: Option<AnnotationLineStyle>,
    #[serde(default)]
    pub marker: Option<MarkerSpec>,
    #[serde(default = "default_line_overflow")]
    pub line_overflow: f64,
    #[serde(default)]
    pub hide_lines: bool,
    #[serde(default)]
    pub hide_tooltips: bool,
}

impl LineAnnotationSpec {
    #[must_use]
    pub fn new(
        id: impl Into<AnnotationId>,
        group_id: impl Into<GroupId>,
        domain_type: AnnotationDomainType,
        data_values: Vec<AnnotationDatum>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            domain_type,
            data_values,
            style: None,
            marker: None,
            line_overflow: DEFAULT_LINE_OVERFLOW,
            hide_lines: false,
            hide_tooltips: false,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: AnnotationLineStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, icon: impl Into<String>, dimensions: Size) -> Self {
        self.marker = Some(MarkerSpec {
            icon: icon.into(),
            dimensions,
        });
        self
    }

    #[must_use]
    pub fn with_line_overflow(mut self, line_overflow: f64) -> Self {
        self.line_overflow = line_overflow;
        self
    }

    #[must_use]
    pub fn with_hide_lines(mut self, hide_lines: bool) -> Self {
        self.hide_lines = hide_lines;
        self
    }

    #[must_use]
    pub fn with_hide_tooltips(mut self, hide_tooltips: bool) -> Self {
        self.hide_tooltips = hide_tooltips;
        self
    }

    /// The spec's own style, falling back to the theme's annotation line.
    #[must_use]
    pub fn resolved_style(&self, theme: &ChartTheme) -> AnnotationLineStyle {
        self.style.unwrap_or(theme.line_annotation)
    }
}
