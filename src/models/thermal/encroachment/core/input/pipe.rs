use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::models::thermal::encroachment::core::{MaterialChoice, PipeMaterial};

/// How a pipe's outer diameter is specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PipeSize {
    /// Iron pipe size, by nominal pipe size (NPS) in inches.
    ///
    /// Standard sizes map to their tabulated outer diameter; a size missing
    /// from the table is taken at face value.
    Ips(f64),

    /// Copper tube size, by nominal size in inches.
    ///
    /// The outer diameter is the nominal size plus 1/8 in.
    Cts(f64),

    /// An explicit outer diameter.
    OuterDiameter(Length),
}

/// How a pipe's wall thickness is specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WallThickness {
    /// A thickness from the standard table for the pipe's nominal size.
    Standard(Length),

    /// A field-measured or otherwise non-tabulated thickness.
    Custom(Length),
}

/// The heat source carrier pipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeSpec {
    pub size: PipeSize,
    pub wall: WallThickness,
    pub material: MaterialChoice<PipeMaterial>,
}
