mod bedding;
mod gas_line;
mod heat_source;
mod orientation;
mod pipe;
mod soil;

pub use bedding::{BeddingSides, BeddingSpec};
pub use gas_line::{GasLine, GasPipeMaterial};
pub use heat_source::{HeatSourceKind, HeatSourceLine, InsulationSpec};
pub use orientation::Orientation;
pub use pipe::{PipeSize, PipeSpec, WallThickness};
pub use soil::SoilSpec;

use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// A fully-resolved screening request.
///
/// Every "other / custom" choice has already been turned into a concrete
/// value; optional layers are expressed with `Option`, never with sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The buried high-temperature line.
    pub heat_source: HeatSourceLine,

    /// The nearby gas line being screened.
    pub gas_line: GasLine,

    /// Native soil surrounding both lines.
    pub soil: SoilSpec,

    /// Relative orientation of the two lines.
    pub orientation: Orientation,
}

impl CalculationInput {
    /// Returns a copy with the heat source insulation removed.
    ///
    /// This is the worst-case (insulation failure) variant; every other input
    /// is reused unchanged.
    #[must_use]
    pub fn without_insulation(&self) -> Self {
        let mut input = self.clone();
        input.heat_source.insulation = None;
        input
    }

    /// Returns a copy with the lateral offset (or parallel separation) replaced.
    #[must_use]
    pub fn with_offset(&self, offset: Length) -> Self {
        let mut input = self.clone();
        input.orientation = self.orientation.with_offset(offset);
        input
    }
}
