//! Steady-state screening of a buried heat source near a gas line.
//!
//! The heat source is a series network of concentric annuli (pipe wall,
//! insulation, bedding) and a soil image resistance to grade. The heat loss
//! through that network drives a line source whose image solution gives the
//! gas line and near-surface temperatures.

mod clearance;
mod error;
mod gas_line;
mod geometry;
mod heat_loss;
mod input;
mod materials;
mod resistance;
mod results;
mod scenario;
mod surface;
mod threshold;

#[cfg(test)]
pub(crate) mod test_support;

pub use clearance::{Clearance, ClearanceConfig, ClearanceError, minimum_clearance};
pub use error::{BeddingSide, EngineError, GeometryError, Layer, Line, MaterialError};
pub use gas_line::{GasLineTemperature, ImageSource, OrientationFormula, gas_line_temperature};
pub use geometry::{GasLineGeometry, HeatSourceGeometry, resolve_gas_line, resolve_heat_source};
pub use heat_loss::heat_loss;
pub use input::{
    BeddingSides, BeddingSpec, CalculationInput, GasLine, GasPipeMaterial, HeatSourceKind,
    HeatSourceLine, InsulationSpec, Orientation, PipeSize, PipeSpec, SoilSpec, WallThickness,
};
pub use materials::{
    BeddingMaterial, Catalog, Conductivities, Conductivity, InsulationMaterial, MaterialChoice,
    PipeMaterial,
};
pub use resistance::{Resistances, resistance_network};
pub use results::{ResolvedInputs, ScenarioKind, ScenarioOutputs, ScenarioResult};
pub use scenario::{run, run_scenario};
pub use surface::{SURFACE_PROBE_DEPTH, ground_surface_temperature};
pub use threshold::{MaterialClass, ThresholdPolicy, ThresholdStatus};
