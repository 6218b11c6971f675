//! Annotation geometry layered on top of the chart layout.

pub mod annotation_tooltip;
pub mod annotations;

pub use annotation_tooltip::{
    AnnotationTooltipState, compute_annotation_tooltip_state,
    compute_line_annotation_tooltip_state, get_annotation_line_tooltip_position,
    get_annotation_line_tooltip_transform, get_annotation_line_tooltip_x_offset,
    get_annotation_line_tooltip_y_offset, is_vertical_annotation_line, is_within_line_bounds,
    to_transform_string,
};
pub use annotations::{
    AnnotationDetails, AnnotationDimensions, AnnotationLinePosition, AnnotationLineProps,
    AnnotationMarker, compute_annotation_dimensions, compute_line_annotation_dimensions,
    compute_x_domain_line_annotation_dimensions, compute_y_domain_line_annotation_dimensions,
    get_annotation_axis,
};
