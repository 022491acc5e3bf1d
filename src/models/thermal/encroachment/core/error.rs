use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::f64::{Angle, Length};

use crate::support::{constraint::ConstraintError, units::LinearThermalResistance};

use super::{HeatSourceKind, PipeSize};

/// Errors that can occur while screening an encroachment.
///
/// A request either produces a complete set of scenario results or fails with
/// one of these before any result is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Pipe, insulation, or bedding dimensions are invalid or physically impossible.
    #[error("invalid geometry")]
    Geometry(#[from] GeometryError),

    /// A conductivity is missing, non-positive, or used outside its rating.
    #[error("invalid material")]
    Material(#[from] MaterialError),

    /// The series resistance total was not strictly positive.
    ///
    /// Valid geometry always yields a positive total, so this indicates an
    /// internal invariant violation.
    #[error("total thermal resistance must be positive: total={total:?}")]
    Division {
        /// The offending resistance total.
        total: LinearThermalResistance,
    },
}

/// Invalid or physically impossible geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A derived diameter is zero, negative, or not a number.
    #[error("{layer} diameter must be positive: {diameter:?}")]
    NonPositiveDiameter { layer: Layer, diameter: Length },

    /// The wall thickness is zero, negative, or not a number.
    #[error("wall thickness must be positive: {wall:?}")]
    NonPositiveWall { wall: Length },

    /// The wall thickness leaves no bore (inner diameter ≤ 0).
    #[error("wall thickness {wall:?} leaves no bore in a pipe with outer diameter {outer:?}")]
    WallTooThick { outer: Length, wall: Length },

    /// A layer thickness is negative or not a number.
    #[error("{layer} thickness must not be negative: {thickness:?}")]
    InvalidThickness { layer: Layer, thickness: Length },

    /// A standard wall thickness was requested that is not tabulated for the pipe size.
    #[error("wall thickness {wall:?} is not a standard thickness for {size:?}")]
    NonStandardWallThickness { size: PipeSize, wall: Length },

    /// A side measurement of heat-source bedding was not provided.
    #[error("heat source bedding is missing its {side} thickness")]
    MissingBeddingSide { side: BeddingSide },

    /// A burial depth is zero, negative, or not a number.
    #[error("{line} depth must be positive: {depth:?}")]
    NonPositiveDepth { line: Line, depth: Length },

    /// The heat source is too shallow for its own radius.
    ///
    /// Requires more than one outer radius of cover. The image-source soil
    /// resistance `ln((2Z − r) / r)` turns negative once `Z < r`, so a
    /// shallower source has no physical soil resistance.
    #[error("heat source at depth {depth:?} is too shallow for its outer radius {radius:?}")]
    SourceTooShallow { depth: Length, radius: Length },

    /// The heat source is shallower than the near-surface probe depth.
    #[error("heat source at depth {depth:?} is shallower than the surface probe at {probe:?}")]
    SurfaceProbeTooDeep { depth: Length, probe: Length },

    /// The gas line and heat source centerlines coincide.
    #[error("gas line and heat source centerlines coincide")]
    CoincidentLines,

    /// The crossing angle is not a number.
    #[error("crossing angle is not a number: {angle:?}")]
    InvalidCrossingAngle { angle: Angle },

    /// A concentric layer's outer diameter is smaller than its inner diameter.
    #[error("{layer} outer diameter {outer:?} is smaller than its inner diameter {inner:?}")]
    InvertedLayer {
        layer: Layer,
        outer: Length,
        inner: Length,
    },
}

/// Invalid material selection or conductivity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    /// A conductivity failed the strictly-positive check.
    #[error("{layer} conductivity is invalid")]
    Conductivity {
        layer: Layer,
        #[source]
        source: ConstraintError,
    },

    /// A catalog material was selected for a service it isn't rated for.
    #[error("{material} is not rated for {service} service")]
    NotRatedFor {
        material: &'static str,
        service: HeatSourceKind,
    },
}

/// A concentric layer or medium in the thermal network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    HeatSourcePipe,
    Insulation,
    HeatSourceBedding,
    Soil,
    GasPipe,
    GasLineBedding,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HeatSourcePipe => "heat source pipe",
            Self::Insulation => "insulation",
            Self::HeatSourceBedding => "heat source bedding",
            Self::Soil => "native soil",
            Self::GasPipe => "gas pipe",
            Self::GasLineBedding => "gas line bedding",
        })
    }
}

/// One of the two buried lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    HeatSource,
    GasLine,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HeatSource => "heat source",
            Self::GasLine => "gas line",
        })
    }
}

/// A side of a bedding envelope, as measured in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeddingSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for BeddingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}
