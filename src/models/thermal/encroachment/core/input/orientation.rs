use serde::{Deserialize, Serialize};
use uom::si::f64::{Angle, Length};

/// Relative orientation of the gas line and the heat source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Orientation {
    /// The gas line crosses the heat source at a right angle.
    Perpendicular {
        /// Horizontal offset between centerlines at the crossing point.
        lateral_offset: Length,
    },

    /// The lines run side by side.
    Parallel {
        /// Horizontal centerline-to-centerline separation.
        separation: Length,
    },

    /// The gas line crosses the heat source at an oblique angle.
    ///
    /// An angle of 90° or more is treated as perpendicular and an angle of
    /// 0° or less as parallel.
    Angled {
        /// Horizontal offset between centerlines at the crossing point.
        lateral_offset: Length,
        /// Crossing angle, 90° being perpendicular.
        angle: Angle,
    },
}

impl Orientation {
    /// The horizontal offset used by the image-source formulas.
    #[must_use]
    pub fn offset(&self) -> Length {
        match *self {
            Self::Perpendicular { lateral_offset } | Self::Angled { lateral_offset, .. } => {
                lateral_offset
            }
            Self::Parallel { separation } => separation,
        }
    }

    /// Returns the same orientation with a different horizontal offset.
    #[must_use]
    pub fn with_offset(&self, offset: Length) -> Self {
        match *self {
            Self::Perpendicular { .. } => Self::Perpendicular {
                lateral_offset: offset,
            },
            Self::Parallel { .. } => Self::Parallel { separation: offset },
            Self::Angled { angle, .. } => Self::Angled {
                lateral_offset: offset,
                angle,
            },
        }
    }
}
