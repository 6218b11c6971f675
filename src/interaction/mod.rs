//! Crosshair geometry: snapped cursor bands, cursor lines and tooltip anchors.
//!
//! Cursor coordinates are plotting-area pixels. The cursor band works in the
//! rotated chart frame (`x` along the x axis), the crosshair line and the
//! tooltip anchors in screen orientation. Nothing here allocates except the
//! tooltip transform string.

use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, DomainValue, Point, Rotation, Scale};
use crate::extensions::to_transform_string;

pub const DEFAULT_TOOLTIP_PADDING: f64 = 20.0;

/// Start and size of the band highlighted under a snapped cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnappedPosition {
    pub position: f64,
    pub band: f64,
}

/// One axis of a tooltip anchor: pixel position plus percentage self-offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipSubPosition {
    pub position: f64,
    pub offset: f64,
}

fn cluster_size(total_bars_in_cluster: usize) -> f64 {
    total_bars_in_cluster.max(1) as f64
}

/// Width of the snapped band: a whole step of every clustered bar on band
/// scales, a one pixel line on continuous ones.
#[must_use]
pub fn snap_band(scale: &dyn Scale, total_bars_in_cluster: usize) -> f64 {
    let bandwidth = scale.bandwidth();
    if bandwidth > 0.0 {
        bandwidth / (1.0 - scale.bars_padding()) * cluster_size(total_bars_in_cluster)
    } else {
        1.0
    }
}

#[must_use]
pub fn get_snap_position(
    value: &DomainValue,
    scale: &dyn Scale,
    total_bars_in_cluster: usize,
) -> Option<SnappedPosition> {
    let position = scale.scale(value).filter(|position| position.is_finite())?;
    let bandwidth = scale.bandwidth();

    if bandwidth > 0.0 {
        let cluster = cluster_size(total_bars_in_cluster);
        let band = bandwidth / (1.0 - scale.bars_padding());
        let half_padding = (band - bandwidth) / 2.0;
        Some(SnappedPosition {
            position: position - half_padding * cluster,
            band: band * cluster,
        })
    } else {
        Some(SnappedPosition {
            position,
            band: 1.0,
        })
    }
}

/// Extents of the x axis and of the cross axis for a rotation.
fn rotated_extents(rotation: Rotation, chart_dimensions: Dimensions) -> (f64, f64) {
    if rotation.is_horizontal() {
        (chart_dimensions.width, chart_dimensions.height)
    } else {
        (chart_dimensions.height, chart_dimensions.width)
    }
}

/// Band highlighted under the cursor, in the parent's pixel space.
///
/// `cursor` is expressed in the rotated chart frame: `x` runs along the x
/// axis from the start of its range, `y` across it. Returns `None` for
/// cursors outside the plotting area and for positions that do not invert
/// to a value the scale can place.
#[must_use]
pub fn get_cursor_band_position(
    rotation: Rotation,
    chart_dimensions: Dimensions,
    cursor: Point,
    snap_enabled: bool,
    x_scale: &dyn Scale,
    data: &[DomainValue],
    total_bars_in_cluster: usize,
) -> Option<Dimensions> {
    let (extent, cross_extent) = rotated_extents(rotation, chart_dimensions);
    if cursor.x < 0.0 || cursor.x > extent || cursor.y < 0.0 || cursor.y > cross_extent {
        return None;
    }

    let value = x_scale.invert_with_step(cursor.x, data)?;
    let snapped = get_snap_position(&value, x_scale, total_bars_in_cluster)?;

    let position = if snap_enabled {
        snapped.position
    } else {
        cursor.x
    };
    let start = match rotation {
        Rotation::R0 | Rotation::R90 => position,
        Rotation::R180 | Rotation::RMinus90 => {
            if x_scale.bandwidth() > 0.0 {
                extent - position - snapped.band
            } else {
                extent - position
            }
        }
    };

    let Dimensions {
        top,
        left,
        width,
        height,
    } = chart_dimensions;
    Some(if rotation.is_horizontal() {
        Dimensions {
            top,
            left: left + start,
            width: snapped.band,
            height,
        }
    } else {
        Dimensions {
            top: top + start,
            left,
            width,
            height: snapped.band,
        }
    })
}

/// Thin crosshair line through the cursor, perpendicular to the x axis.
#[must_use]
pub fn get_cursor_line_position(
    rotation: Rotation,
    chart_dimensions: Dimensions,
    cursor: Point,
) -> Dimensions {
    let Dimensions {
        top,
        left,
        width,
        height,
    } = chart_dimensions;

    if rotation.is_horizontal() {
        Dimensions {
            top: top + cursor.y,
            left,
            width,
            height: 0.0,
        }
    } else {
        Dimensions {
            top,
            left: left + cursor.x,
            width: 0.0,
            height,
        }
    }
}

fn half_offset(coordinate: f64, extent: f64) -> f64 {
    if coordinate <= extent / 2.0 {
        0.0
    } else {
        100.0
    }
}

/// Horizontal anchor: beside the band on horizontal charts, at the cursor
/// on vertical ones.
#[must_use]
pub fn get_horizontal_tooltip_position(
    cursor_x: f64,
    band: Dimensions,
    chart_dimensions: Dimensions,
    rotation: Rotation,
    padding: f64,
) -> TooltipSubPosition {
    let offset = half_offset(cursor_x, chart_dimensions.width);
    let position = if rotation.is_vertical() {
        chart_dimensions.left + cursor_x
    } else if offset == 0.0 {
        band.left + band.width + padding
    } else {
        band.left - padding
    };
    TooltipSubPosition { position, offset }
}

/// Vertical anchor: at the cursor on horizontal charts, beside the band on
/// vertical ones.
#[must_use]
pub fn get_vertical_tooltip_position(
    cursor_y: f64,
    band: Dimensions,
    chart_dimensions: Dimensions,
    rotation: Rotation,
    padding: f64,
) -> TooltipSubPosition {
    let offset = half_offset(cursor_y, chart_dimensions.height);
    let position = if rotation.is_horizontal() {
        chart_dimensions.top + cursor_y
    } else if offset == 0.0 {
        band.top + band.height + padding
    } else {
        band.top - padding
    };
    TooltipSubPosition { position, offset }
}

#[must_use]
pub fn get_tooltip_position_with_padding(
    chart_dimensions: Dimensions,
    rotation: Rotation,
    band: Dimensions,
    cursor: Point,
    padding: f64,
) -> String {
    let horizontal =
        get_horizontal_tooltip_position(cursor.x, band, chart_dimensions, rotation, padding);
    let vertical =
        get_vertical_tooltip_position(cursor.y, band, chart_dimensions, rotation, padding);
    to_transform_string(
        Point::new(horizontal.position, vertical.position),
        Point::new(horizontal.offset, vertical.offset),
    )
}

/// CSS transform placing the tooltip next to the cursor band.
#[must_use]
pub fn get_tooltip_position(
    chart_dimensions: Dimensions,
    rotation: Rotation,
    band: Dimensions,
    cursor: Point,
) -> String {
    get_tooltip_position_with_padding(
        chart_dimensions,
        rotation,
        band,
        cursor,
        DEFAULT_TOOLTIP_PADDING,
    )
}
