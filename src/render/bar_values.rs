use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Dimensions, Rotation, Size};

use super::primitives::{TextAlign, VerticalAlign};

/// Styling of the value label drawn on bars.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayValueStyle {
    #[serde(default)]
    pub padding: f64,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    /// Fit the label inside the bar instead of next to it.
    #[serde(default)]
    pub is_value_contained_in_element: bool,
    /// Hide labels that would cross the plotting area edges.
    #[serde(default)]
    pub hide_clipped_value: bool,
}

/// Formatted value with its measured text size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayValue {
    pub text: String,
    pub width: f64,
    pub height: f64,
}

impl DisplayValue {
    #[must_use]
    pub fn new(text: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            width,
            height,
        }
    }
}

/// Clip window applied to the label, relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BarValueClip {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarValueProps {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub clip: BarValueClip,
    /// Set when the label overflowed and `hide_clipped_value` is on; the
    /// size is zeroed too so renderers ignoring the flag draw nothing.
    pub hidden: bool,
}

/// One bar and its value, in the unrotated layout of the bar series.
#[derive(Debug, Clone, Copy)]
pub struct BarValueInput<'a> {
    pub x: f64,
    pub y: f64,
    pub bar_height: f64,
    pub bar_width: f64,
    pub style: &'a DisplayValueStyle,
    pub value: &'a DisplayValue,
    pub rotation: Rotation,
    pub chart_dimensions: Dimensions,
}

/// Moves an unrotated label to where the rotated chart draws it.
///
/// `bar` is the bar rectangle in the unrotated layout and `label` the padded
/// text size.
#[must_use]
pub fn rotate_bar_value_props(
    rotation: Rotation,
    chart_dimensions: Dimensions,
    bar: Dimensions,
    label: Size,
    style: &DisplayValueStyle,
    props: BarValueProps,
) -> BarValueProps {
    let Dimensions {
        width: chart_width,
        height: chart_height,
        ..
    } = chart_dimensions;
    let contained = style.is_value_contained_in_element;
    let bar_center = bar.left + bar.width / 2.0;

    match rotation {
        Rotation::R0 => props,
        Rotation::R180 => BarValueProps {
            x: chart_width - props.x - label.width,
            y: chart_height - props.y - label.height,
            vertical_align: VerticalAlign::Bottom,
            ..props
        },
        Rotation::R90 => {
            let bar_start = chart_width - bar.top - bar.height;
            let bar_end = chart_width - bar.top;
            let y = bar_center - label.height / 2.0;
            if contained {
                BarValueProps {
                    x: bar_start,
                    y,
                    width: bar.height,
                    height: label.height,
                    align: TextAlign::Right,
                    vertical_align: VerticalAlign::Middle,
                    ..props
                }
            } else {
                let x = if bar.height >= label.width {
                    bar_end - label.width
                } else {
                    bar_end
                };
                BarValueProps {
                    x,
                    y,
                    width: label.width,
                    height: label.height,
                    vertical_align: VerticalAlign::Middle,
                    ..props
                }
            }
        }
        Rotation::RMinus90 => {
            let bar_end = bar.top;
            let y = chart_height - bar_center - label.height / 2.0;
            if contained {
                BarValueProps {
                    x: bar_end,
                    y,
                    width: bar.height,
                    height: label.height,
                    align: TextAlign::Left,
                    vertical_align: VerticalAlign::Middle,
                    ..props
                }
            } else {
                let x = if bar.height >= label.width {
                    bar_end
                } else {
                    bar_end - label.width
                };
                BarValueProps {
                    x,
                    y,
                    width: label.width,
                    height: label.height,
                    vertical_align: VerticalAlign::Middle,
                    ..props
                }
            }
        }
    }
}

/// Clip window of a placed label. Labels drawn from the far end of the bar
/// (180° and 90°) shift the window back onto the bar.
#[must_use]
pub fn get_bar_value_clip_dimensions(
    rotation: Rotation,
    props: &BarValueProps,
    bar_height: f64,
    label: Size,
) -> BarValueClip {
    BarValueClip {
        width: props.width,
        height: props.height,
        offset_x: match rotation {
            Rotation::R90 => bar_height - label.width,
            Rotation::R0 | Rotation::R180 | Rotation::RMinus90 => 0.0,
        },
        offset_y: match rotation {
            Rotation::R180 => bar_height - label.height,
            Rotation::R0 | Rotation::R90 | Rotation::RMinus90 => 0.0,
        },
    }
}

/// Whether the clipped label crosses the plotting area on either axis.
#[must_use]
pub fn is_bar_value_overflow(
    chart_dimensions: Dimensions,
    x: f64,
    y: f64,
    clip: BarValueClip,
) -> bool {
    let overflows_x = x < 0.0 || x + clip.width > chart_dimensions.width;
    let overflows_y = y < 0.0 || y + clip.height > chart_dimensions.height;
    overflows_x || overflows_y
}

#[must_use]
pub fn build_bar_value_props(input: BarValueInput<'_>) -> BarValueProps {
    let BarValueInput {
        x,
        y,
        bar_height,
        bar_width,
        style,
        value,
        rotation,
        chart_dimensions,
    } = input;

    let label_height = if style.is_value_contained_in_element {
        bar_height
    } else {
        value.height
    };
    let box_height = label_height + style.padding;
    let box_width = value.width + style.padding;

    let base_y = if bar_height >= label_height {
        y
    } else {
        y - box_height
    };
    // Centred on the bar; wider labels spill evenly on both sides.
    let base_x = x + (bar_width - box_width) / 2.0;

    let props = BarValueProps {
        text: value.text.clone(),
        x: base_x + style.offset_x,
        y: base_y + style.offset_y,
        width: box_width,
        height: box_height,
        align: TextAlign::Center,
        vertical_align: VerticalAlign::Top,
        clip: BarValueClip::default(),
        hidden: false,
    };

    let bar = Dimensions::new(y, x, bar_width, bar_height);
    let label = Size::new(box_width, value.height + style.padding);
    let mut props = rotate_bar_value_props(rotation, chart_dimensions, bar, label, style, props);
    props.clip = get_bar_value_clip_dimensions(rotation, &props, bar_height, label);

    if style.hide_clipped_value
        && is_bar_value_overflow(chart_dimensions, props.x, props.y, props.clip)
    {
        trace!(
            text = %props.text,
            x = props.x,
            y = props.y,
            "hiding clipped bar value"
        );
        props.width = 0.0;
        props.height = 0.0;
        props.hidden = true;
    }

    props
}
