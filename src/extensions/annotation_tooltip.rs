use serde::{Deserialize, Serialize};

use crate::api::{AnnotationDomainType, AnnotationSpecs, AxisSpecs, ChartTheme, LineAnnotationSpec};
use crate::core::{Point, Position, Rotation, Size};

use super::annotations::{
    AnnotationDimensions, AnnotationLinePosition, AnnotationLineProps, AnnotationMarker,
    get_annotation_axis,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationTooltipState {
    pub is_visible: bool,
    pub header: Option<String>,
    pub details: Option<String>,
    pub transform: String,
}

/// Formats a pixel anchor and a percentage self-offset as a CSS transform.
#[must_use]
pub fn to_transform_string(position: Point, offset: Point) -> String {
    format!(
        "translate(calc({}px - {}%),calc({}px - {}%))",
        position.x, offset.x, position.y, offset.y
    )
}

/// X-domain lines are vertical on horizontal charts, y-domain lines on
/// vertical charts.
#[must_use]
pub const fn is_vertical_annotation_line(is_x_domain: bool, is_horizontal_rotation: bool) -> bool {
    is_x_domain == is_horizontal_rotation
}

/// Horizontal self-offset (percent of the tooltip width).
#[must_use]
pub fn get_annotation_line_tooltip_x_offset(rotation: Rotation, axis_position: Position) -> f64 {
    let is_horizontal_rotation = rotation.is_horizontal();
    if axis_position.is_horizontal() {
        if is_horizontal_rotation { 50.0 } else { 0.0 }
    } else if is_horizontal_rotation {
        if axis_position == Position::Right {
            100.0
        } else {
            0.0
        }
    } else {
        50.0
    }
}

/// Vertical self-offset (percent of the tooltip height).
#[must_use]
pub fn get_annotation_line_tooltip_y_offset(rotation: Rotation, axis_position: Position) -> f64 {
    let is_horizontal_rotation = rotation.is_horizontal();
    if axis_position.is_horizontal() {
        if !is_horizontal_rotation {
            50.0
        } else if axis_position == Position::Top {
            0.0
        } else {
            100.0
        }
    } else if is_horizontal_rotation {
        50.0
    } else {
        100.0
    }
}

/// End of the line closest to the axis.
#[must_use]
pub fn get_annotation_line_tooltip_position(
    axis_position: Position,
    line: AnnotationLinePosition,
) -> Point {
    let [start_x, start_y, end_x, end_y] = line;
    let x = if axis_position == Position::Right {
        end_x
    } else {
        start_x
    };
    let y = if axis_position == Position::Top {
        start_y
    } else {
        end_y
    };
    Point::new(x, y)
}

#[must_use]
pub fn get_annotation_line_tooltip_transform(
    rotation: Rotation,
    line: AnnotationLinePosition,
    axis_position: Position,
) -> String {
    let position = get_annotation_line_tooltip_position(axis_position, line);
    let offset = Point::new(
        get_annotation_line_tooltip_x_offset(rotation, axis_position),
        get_annotation_line_tooltip_y_offset(rotation, axis_position),
    );
    to_transform_string(position, offset)
}

fn within(value: f64, start: f64, end: f64) -> bool {
    value >= start && value <= end
}

fn is_within_marker_bounds(
    axis_position: Position,
    line: AnnotationLinePosition,
    cursor: Point,
    offset: f64,
    rotation: Rotation,
    is_x_domain: bool,
    marker: Size,
) -> bool {
    let [start_x, start_y, end_x, end_y] = line;
    let Size {
        width: marker_width,
        height: marker_height,
    } = marker;
    let half_width = marker_width / 2.0;
    let half_height = marker_height / 2.0;

    match (is_x_domain, rotation.is_horizontal()) {
        (true, true) => {
            let within_x = within(
                cursor.x,
                start_x - offset - half_width,
                end_x + offset + half_width,
            );
            let within_y = if axis_position == Position::Top {
                within(cursor.y, start_y - marker_height, start_y)
            } else {
                within(cursor.y, end_y, end_y + marker_height)
            };
            within_x && within_y
        }
        (true, false) => {
            within(cursor.x, start_x - marker_width, start_x)
                && within(
                    cursor.y,
                    start_y - offset - half_height,
                    end_y + offset + half_height,
                )
        }
        (false, true) => {
            let within_x = if axis_position == Position::Right {
                within(cursor.x, end_x, end_x + marker_width)
            } else {
                within(cursor.x, start_x - marker_width, start_x)
            };
            within_x
                && within(
                    cursor.y,
                    start_y - offset - half_height,
                    end_y + offset + half_height,
                )
        }
        (false, false) => {
            within(
                cursor.x,
                start_x - offset - half_width,
                end_x + offset + half_width,
            ) && within(cursor.y, end_y, end_y + marker_height)
        }
    }
}

/// Hit-tests `cursor` against a line, then against its marker.
///
/// `offset` widens the line across its length only.
#[must_use]
pub fn is_within_line_bounds(
    axis_position: Position,
    line: AnnotationLinePosition,
    cursor: Point,
    offset: f64,
    rotation: Rotation,
    domain_type: AnnotationDomainType,
    marker: Option<&AnnotationMarker>,
) -> bool {
    let [start_x, start_y, end_x, end_y] = line;
    let is_x_domain = domain_type.is_x_domain();

    let (x_tolerance, y_tolerance) =
        if is_vertical_annotation_line(is_x_domain, rotation.is_horizontal()) {
            (offset, 0.0)
        } else {
            (0.0, offset)
        };
    let within_line = within(cursor.x, start_x - x_tolerance, end_x + x_tolerance)
        && within(cursor.y, start_y - y_tolerance, end_y + y_tolerance);
    if within_line {
        return true;
    }

    marker.is_some_and(|marker| {
        is_within_marker_bounds(
            axis_position,
            line,
            cursor,
            offset,
            rotation,
            is_x_domain,
            marker.dimensions,
        )
    })
}

/// Tooltip of one annotation; the last line under the cursor wins.
#[must_use]
pub fn compute_line_annotation_tooltip_state(
    cursor: Point,
    annotation_lines: &[AnnotationLineProps],
    spec: &LineAnnotationSpec,
    rotation: Rotation,
    axis_specs: &AxisSpecs,
    theme: &ChartTheme,
) -> AnnotationTooltipState {
    let hidden = AnnotationTooltipState::default();
    if spec.hide_tooltips || spec.hide_lines {
        return hidden;
    }
    let Some(axis_position) = get_annotation_axis(axis_specs, &spec.group_id, spec.domain_type)
    else {
        return hidden;
    };
    let offset = spec.resolved_style(theme).stroke_width / 2.0;

    annotation_lines
        .iter()
        .rev()
        .find(|line| {
            is_within_line_bounds(
                axis_position,
                line.position,
                cursor,
                offset,
                rotation,
                spec.domain_type,
                line.marker.as_ref(),
            )
        })
        .map_or(hidden, |line| AnnotationTooltipState {
            is_visible: true,
            header: line.details.header_text.clone(),
            details: line.details.details_text.clone(),
            transform: get_annotation_line_tooltip_transform(
                rotation,
                line.tooltip_line_position,
                axis_position,
            ),
        })
}

/// First visible annotation tooltip, in annotation order.
#[must_use]
pub fn compute_annotation_tooltip_state(
    cursor: Point,
    annotation_dimensions: &AnnotationDimensions,
    annotation_specs: &AnnotationSpecs,
    rotation: Rotation,
    axis_specs: &AxisSpecs,
    theme: &ChartTheme,
) -> Option<AnnotationTooltipState> {
    annotation_dimensions.iter().find_map(|(id, lines)| {
        let spec = annotation_specs.get(id)?;
        let state =
            compute_line_annotation_tooltip_state(cursor, lines, spec, rotation, axis_specs, theme);
        state.is_visible.then_some(state)
    })
}
