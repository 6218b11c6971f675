pub mod ids;
pub mod primitives;
pub mod rotation;
pub mod scale;
pub mod types;

pub use ids::{AnnotationId, AxisId, GroupId};
pub use primitives::{DomainValue, datetime_to_unix_millis, decimal_to_f64};
pub use rotation::{Position, Rotation};
pub use scale::{BandScale, LinearScale, Scale, ScaleType};
pub use types::{Dimensions, Margins, Point, Size};
