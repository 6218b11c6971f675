use tracing::debug;

use crate::core::{Dimensions, Margins, Position};

use super::specs::{AxisSpecs, AxisTicksDimensionsMap};
use super::theme::ChartTheme;

/// Space taken by the axes on each side of the plotting area.
///
/// Only axes present in both maps and not hidden take space. Every axis
/// adds its labels, ticks, the theme margin of its side and, if titled,
/// the title height; several axes on one side stack.
#[must_use]
pub fn compute_axes_reserved_space(
    theme: &ChartTheme,
    axis_ticks_dimensions: &AxisTicksDimensionsMap,
    axis_specs: &AxisSpecs,
) -> Margins {
    let margins = theme.chart_margins;
    let title_height = theme.axes.axis_title_style.reserved_height();

    axis_ticks_dimensions
        .iter()
        .filter_map(|(axis_id, ticks)| {
            let spec = axis_specs.get(axis_id)?;
            (!spec.hide).then_some((spec, ticks))
        })
        .fold(Margins::default(), |mut reserved, (spec, ticks)| {
            let title = if spec.title.is_some() {
                title_height
            } else {
                0.0
            };
            let ticks_size = spec.tick_size + spec.tick_padding + title;
            match spec.position {
                Position::Top => {
                    reserved.top += ticks.max_label_bbox_height + ticks_size + margins.top;
                }
                Position::Bottom => {
                    reserved.bottom += ticks.max_label_bbox_height + ticks_size + margins.bottom;
                }
                Position::Left => {
                    reserved.left += ticks.max_label_bbox_width + ticks_size + margins.left;
                }
                Position::Right => {
                    reserved.right += ticks.max_label_bbox_width + ticks_size + margins.right;
                }
            }
            reserved
        })
}

/// Computes the plotting area inside `parent`, relative to the parent's origin.
///
/// Negative sizes are returned as computed when the parent is too small.
#[must_use]
pub fn compute_chart_dimensions(
    parent: Dimensions,
    theme: &ChartTheme,
    axis_ticks_dimensions: &AxisTicksDimensionsMap,
    axis_specs: &AxisSpecs,
    show_legend: bool,
    legend_position: Option<Position>,
) -> Dimensions {
    let margins = theme.chart_margins;
    let paddings = theme.chart_paddings;
    let legend = theme.legend;
    let reserved = compute_axes_reserved_space(theme, axis_ticks_dimensions, axis_specs);

    let chart_width = parent.width - reserved.left - reserved.right;
    let chart_height = parent.height - reserved.top - reserved.bottom;

    // A side's margin is already part of any axis placed on it.
    let side_margin = |axes: f64, margin: f64| if axes == 0.0 { margin } else { 0.0 };
    let mut horizontal_margin =
        side_margin(reserved.left, margins.left) + side_margin(reserved.right, margins.right);
    let mut vertical_margin =
        side_margin(reserved.top, margins.top) + side_margin(reserved.bottom, margins.bottom);

    let mut legend_top = 0.0;
    let mut legend_left = 0.0;
    if show_legend {
        match legend_position {
            Some(Position::Left) => {
                horizontal_margin += legend.vertical_width;
                legend_left = legend.vertical_width;
            }
            Some(Position::Right) => horizontal_margin += legend.vertical_width,
            Some(Position::Top) => {
                vertical_margin += legend.horizontal_height;
                legend_top = legend.horizontal_height;
            }
            Some(Position::Bottom) => vertical_margin += legend.horizontal_height,
            None => {}
        }
    }

    let top = if reserved.top == 0.0 {
        margins.top
    } else {
        reserved.top
    };
    let left = if reserved.left == 0.0 {
        margins.left
    } else {
        reserved.left
    };

    let dimensions = Dimensions {
        top: top + paddings.top + legend_top,
        left: left + paddings.left + legend_left,
        width: chart_width - horizontal_margin - paddings.left - paddings.right,
        height: chart_height - vertical_margin - paddings.top - paddings.bottom,
    };

    if dimensions.is_degenerate() {
        debug!(
            parent_width = parent.width,
            parent_height = parent.height,
            width = dimensions.width,
            height = dimensions.height,
            "plotting area is degenerate"
        );
    }

    dimensions
}
