//! chart-geom: pure geometry for 2D charts drawn in any of four rotations.
//!
//! Every function takes its inputs by reference and returns fresh plain
//! records (rectangles, line segments, CSS transforms) for a rendering layer
//! to consume. Nothing here draws, measures text or keeps state.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartTheme, compute_chart_dimensions};
pub use core::{Dimensions, DomainValue, Position, Rotation, Scale};
pub use error::{ChartError, ChartResult};
