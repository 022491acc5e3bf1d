//! Result types for encroachment screening.

use std::fmt;

use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, ThermalConductivity, ThermodynamicTemperature};

use crate::support::units::LinearHeatRate;

use super::{GasLineTemperature, Orientation, Resistances, ThresholdStatus};

/// Which set of inputs a scenario was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Insulation as declared.
    AsIs,
    /// Insulation assumed failed or absent.
    WorstCase,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AsIs => "as-is",
            Self::WorstCase => "worst-case (insulation failure)",
        })
    }
}

/// The resolved geometry and properties a scenario was computed from.
///
/// Mirrors the step-by-step walkthrough in a screening report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInputs {
    pub source_temperature: ThermodynamicTemperature,
    pub surface_temperature: ThermodynamicTemperature,

    pub pipe_outer: Length,
    pub pipe_inner: Length,
    pub insulation_outer: Length,
    pub bedding_outer: Length,

    /// Radius seen by the soil image formula.
    pub soil_radius: Length,
    pub source_depth: Length,

    pub pipe_conductivity: ThermalConductivity,
    pub insulation_conductivity: Option<ThermalConductivity>,
    pub bedding_conductivity: Option<ThermalConductivity>,
    pub soil_conductivity: ThermalConductivity,

    pub gas_pipe_radius: Length,
    pub gas_bedding_radius: Option<Length>,
    pub gas_bedding_conductivity: Option<ThermalConductivity>,
    pub gas_depth: Length,

    pub orientation: Orientation,
}

/// Complete results of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub kind: ScenarioKind,
    pub resistances: Resistances,

    /// Heat lost per unit length of heat source.
    pub heat_loss: LinearHeatRate,

    pub gas_line: GasLineTemperature,

    /// Ground temperature one inch below grade above the heat source.
    pub ground_surface: ThermodynamicTemperature,

    pub threshold: ThresholdStatus,
    pub inputs: ResolvedInputs,
}

impl ScenarioResult {
    /// The gas line temperature compared against the limit.
    #[must_use]
    pub fn final_gas_line_temperature(&self) -> ThermodynamicTemperature {
        self.gas_line.final_temperature()
    }
}

/// Results of a screening request.
///
/// The worst-case scenario is present only when the heat source is insulated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutputs {
    pub as_is: ScenarioResult,
    pub worst_case: Option<ScenarioResult>,
}

impl ScenarioOutputs {
    /// Iterates the computed scenarios, as-is first.
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioResult> {
        std::iter::once(&self.as_is).chain(self.worst_case.as_ref())
    }

    /// The scenario with the hottest gas line; as-is wins ties.
    #[must_use]
    pub fn governing(&self) -> &ScenarioResult {
        self.scenarios()
            .reduce(|hottest, next| {
                if next.final_gas_line_temperature() > hottest.final_gas_line_temperature() {
                    next
                } else {
                    hottest
                }
            })
            .unwrap_or(&self.as_is)
    }

    /// Whether any scenario exceeds its limit.
    #[must_use]
    pub fn any_exceeded(&self) -> bool {
        self.scenarios().any(|scenario| scenario.threshold.is_exceeded())
    }
}
