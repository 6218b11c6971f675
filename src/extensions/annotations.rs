use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::api::{
    AnnotationDatum, AnnotationDomainType, AnnotationSpecs, AxisSpecs, ChartTheme,
    LineAnnotationSpec, MarkerSpec, YScales, get_axes_for_group,
};
use crate::core::{AnnotationId, Dimensions, GroupId, Position, Rotation, Scale, Size};
use crate::render::Color;

use super::annotation_tooltip::get_annotation_line_tooltip_transform;

/// One line segment `[x1, y1, x2, y2]` in plotting-area pixels.
pub type AnnotationLinePosition = [f64; 4];

pub type AnnotationDimensions = IndexMap<AnnotationId, Vec<AnnotationLineProps>>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationDetails {
    pub header_text: Option<String>,
    pub details_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMarker {
    pub icon: String,
    /// CSS transform anchoring the marker at the line end near the axis.
    pub transform: String,
    pub dimensions: Size,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLineProps {
    pub position: AnnotationLinePosition,
    /// Same line without the overflow, used to anchor tooltips.
    pub tooltip_line_position: AnnotationLinePosition,
    pub details: AnnotationDetails,
    pub marker: Option<AnnotationMarker>,
}

/// Position of the axis an annotation of `domain_type` is drawn against.
#[must_use]
pub fn get_annotation_axis(
    axis_specs: &AxisSpecs,
    group_id: &GroupId,
    domain_type: AnnotationDomainType,
) -> Option<Position> {
    let axes = get_axes_for_group(axis_specs, group_id);
    let axis = match domain_type {
        AnnotationDomainType::XDomain => axes.x_axis,
        AnnotationDomainType::YDomain => axes.y_axis,
    };
    axis.map(|spec| spec.position)
}

struct LineGeometry {
    position: AnnotationLinePosition,
    tooltip_line_position: AnnotationLinePosition,
    marker_position: AnnotationLinePosition,
}

fn build_line_props(
    geometry: LineGeometry,
    datum: &AnnotationDatum,
    marker: Option<&MarkerSpec>,
    marker_color: Color,
    rotation: Rotation,
    axis_position: Position,
) -> AnnotationLineProps {
    let marker = marker.map(|marker| AnnotationMarker {
        icon: marker.icon.clone(),
        transform: get_annotation_line_tooltip_transform(
            rotation,
            geometry.marker_position,
            axis_position,
        ),
        dimensions: marker.dimensions,
        color: marker_color,
    });

    AnnotationLineProps {
        position: geometry.position,
        tooltip_line_position: geometry.tooltip_line_position,
        details: AnnotationDetails {
            header_text: Some(
                datum
                    .header
                    .clone()
                    .unwrap_or_else(|| datum.data_value.to_string()),
            ),
            details_text: datum.details.clone(),
        },
        marker,
    }
}

fn marker_size(marker: Option<&MarkerSpec>) -> Size {
    marker.map(|marker| marker.dimensions).unwrap_or_default()
}

/// Lines of a y-domain annotation: one per datum, across the plotting area.
#[must_use]
pub fn compute_y_domain_line_annotation_dimensions(
    spec: &LineAnnotationSpec,
    y_scale: &dyn Scale,
    chart_dimensions: Dimensions,
    rotation: Rotation,
    axis_position: Position,
    marker_color: Color,
) -> Vec<AnnotationLineProps> {
    let Dimensions { width, height, .. } = chart_dimensions;
    let overflow = spec.line_overflow;
    let marker = spec.marker.as_ref();
    let Size {
        width: marker_width,
        height: marker_height,
    } = marker_size(marker);

    spec.data_values
        .iter()
        .filter_map(|datum| {
            let value = &datum.data_value;
            if value.is_empty_text() {
                trace!(annotation = %spec.id, "skipping empty annotation value");
                return None;
            }
            let Some(y) = y_scale.scale(value).filter(|y| y.is_finite()) else {
                trace!(annotation = %spec.id, %value, "annotation value does not scale");
                return None;
            };
            if !y_scale.is_within_domain(value) {
                trace!(annotation = %spec.id, %value, "annotation value outside y domain");
                return None;
            }

            let geometry = match rotation {
                Rotation::R0 | Rotation::R180 => {
                    let tooltip_line_position = [0.0, y, width, y];
                    if axis_position == Position::Left {
                        LineGeometry {
                            position: [-overflow, y, width, y],
                            tooltip_line_position,
                            marker_position: [-overflow - marker_width, y, width, y],
                        }
                    } else {
                        LineGeometry {
                            position: [0.0, y, width + overflow, y],
                            tooltip_line_position,
                            marker_position: [0.0, y, width + overflow + marker_width, y],
                        }
                    }
                }
                Rotation::R90 | Rotation::RMinus90 => LineGeometry {
                    position: [y, 0.0, y, height + overflow],
                    tooltip_line_position: [y, 0.0, y, height],
                    marker_position: [y, 0.0, y, height + overflow + marker_height],
                },
            };

            Some(build_line_props(
                geometry,
                datum,
                marker,
                marker_color,
                rotation,
                axis_position,
            ))
        })
        .collect()
}

/// Lines of an x-domain annotation, centred on the band of each datum.
#[must_use]
pub fn compute_x_domain_line_annotation_dimensions(
    spec: &LineAnnotationSpec,
    x_scale: &dyn Scale,
    chart_dimensions: Dimensions,
    rotation: Rotation,
    axis_position: Position,
    marker_color: Color,
) -> Vec<AnnotationLineProps> {
    let Dimensions { width, height, .. } = chart_dimensions;
    let overflow = spec.line_overflow;
    let marker = spec.marker.as_ref();
    let Size {
        width: marker_width,
        height: marker_height,
    } = marker_size(marker);
    let is_continuous = x_scale.is_continuous();
    let half_bandwidth = x_scale.bandwidth() / 2.0;

    let vertical_line = |x: f64| {
        let tooltip_line_position = [x, 0.0, x, height];
        if axis_position == Position::Bottom {
            LineGeometry {
                position: [x, 0.0, x, height + overflow],
                tooltip_line_position,
                marker_position: [x, 0.0, x, height + overflow + marker_height],
            }
        } else {
            LineGeometry {
                position: [x, -overflow, x, height],
                tooltip_line_position,
                marker_position: [x, -overflow - marker_height, x, height],
            }
        }
    };
    let horizontal_line = |y: f64| LineGeometry {
        position: [-overflow, y, width, y],
        tooltip_line_position: [0.0, y, width, y],
        marker_position: [-overflow - marker_width, y, width, y],
    };

    spec.data_values
        .iter()
        .filter_map(|datum| {
            let value = &datum.data_value;
            if is_continuous && value.is_empty_text() {
                trace!(annotation = %spec.id, "skipping empty annotation value");
                return None;
            }
            let Some(scaled) = x_scale.scale(value).filter(|x| x.is_finite()) else {
                trace!(annotation = %spec.id, %value, "annotation value does not scale");
                return None;
            };
            if !x_scale.is_within_domain(value) {
                trace!(annotation = %spec.id, %value, "annotation value outside x domain");
                return None;
            }

            let x = scaled + half_bandwidth;
            let geometry = match rotation {
                Rotation::R0 => vertical_line(x),
                Rotation::R180 => vertical_line(width - x),
                Rotation::R90 => horizontal_line(x),
                Rotation::RMinus90 => horizontal_line(height - x),
            };

            Some(build_line_props(
                geometry,
                datum,
                marker,
                marker_color,
                rotation,
                axis_position,
            ))
        })
        .collect()
}

/// Lines of one annotation, or `None` when it has nothing to draw against.
#[must_use]
pub fn compute_line_annotation_dimensions(
    spec: &LineAnnotationSpec,
    chart_dimensions: Dimensions,
    rotation: Rotation,
    y_scales: &YScales,
    x_scale: &dyn Scale,
    axis_position: Position,
    theme: &ChartTheme,
) -> Option<Vec<AnnotationLineProps>> {
    if spec.hide_lines {
        debug!(annotation = %spec.id, "annotation lines hidden");
        return None;
    }
    let style = spec.resolved_style(theme);
    let marker_color = style.stroke.with_opacity(style.opacity);

    match spec.domain_type {
        AnnotationDomainType::XDomain => Some(compute_x_domain_line_annotation_dimensions(
            spec,
            x_scale,
            chart_dimensions,
            rotation,
            axis_position,
            marker_color,
        )),
        AnnotationDomainType::YDomain => {
            let Some(y_scale) = y_scales.get(&spec.group_id) else {
                debug!(
                    annotation = %spec.id,
                    group = %spec.group_id,
                    "no y scale for annotation group"
                );
                return None;
            };
            Some(compute_y_domain_line_annotation_dimensions(
                spec,
                y_scale.as_ref(),
                chart_dimensions,
                rotation,
                axis_position,
                marker_color,
            ))
        }
    }
}

/// Geometry of every drawable annotation, keyed by annotation id in spec order.
#[must_use]
pub fn compute_annotation_dimensions(
    annotations: &AnnotationSpecs,
    chart_dimensions: Dimensions,
    rotation: Rotation,
    y_scales: &YScales,
    x_scale: &dyn Scale,
    axis_specs: &AxisSpecs,
    theme: &ChartTheme,
) -> AnnotationDimensions {
    annotations
        .iter()
        .filter_map(|(id, spec)| {
            let Some(axis_position) =
                get_annotation_axis(axis_specs, &spec.group_id, spec.domain_type)
            else {
                debug!(annotation = %id, group = %spec.group_id, "no axis for annotation");
                return None;
            };
            let lines = compute_line_annotation_dimensions(
                spec,
                chart_dimensions,
                rotation,
                y_scales,
                x_scale,
                axis_position,
                theme,
            )?;
            Some((id.clone(), lines))
        })
        .collect()
}
