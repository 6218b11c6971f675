use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Chart rotation in degrees.
///
/// Only the four axis-aligned orientations exist; every geometry function
/// matches on all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    R0,
    R90,
    RMinus90,
    R180,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::R0,
        Rotation::R90,
        Rotation::RMinus90,
        Rotation::R180,
    ];

    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::RMinus90 => -90,
            Rotation::R180 => 180,
        }
    }

    /// 0° and 180°: the x axis runs horizontally.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        match self {
            Rotation::R0 | Rotation::R180 => true,
            Rotation::R90 | Rotation::RMinus90 => false,
        }
    }

    /// 90° and -90°: the x axis runs vertically.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}

impl TryFrom<i32> for Rotation {
    type Error = ChartError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            -90 => Ok(Rotation::RMinus90),
            180 => Ok(Rotation::R180),
            other => Err(ChartError::InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Side of the plotting area an axis (or legend) is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
}

impl Position {
    /// Top and Bottom axes.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        match self {
            Position::Top | Position::Bottom => true,
            Position::Left | Position::Right => false,
        }
    }

    /// Left and Right axes.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}
