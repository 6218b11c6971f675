//! Label geometry handed to the host's rendering layer.

mod bar_values;
mod primitives;

pub use bar_values::{
    BarValueClip, BarValueInput, BarValueProps, DisplayValue, DisplayValueStyle,
    build_bar_value_props, get_bar_value_clip_dimensions, is_bar_value_overflow,
    rotate_bar_value_props,
};
pub use primitives::{Color, TextAlign, VerticalAlign};
