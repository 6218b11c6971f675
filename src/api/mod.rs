mod chart_dimensions;
mod specs;
mod theme;

pub use chart_dimensions::{compute_axes_reserved_space, compute_chart_dimensions};
pub use specs::{
    AnnotationDatum, AnnotationDomainType, AnnotationSpecs, AxisSpec, AxisSpecs,
    AxisTicksDimensions, AxisTicksDimensionsMap, DEFAULT_LINE_OVERFLOW, DEFAULT_TICK_PADDING,
    DEFAULT_TICK_SIZE, GroupAxes, LineAnnotationSpec, MarkerSpec, YScales, get_axes_for_group,
};
pub use theme::{AnnotationLineStyle, AxesTheme, AxisTitleStyle, ChartTheme, LegendStyle};
