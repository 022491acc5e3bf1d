use serde::{Deserialize, Serialize};
use uom::si::f64::{ThermalConductivity, ThermodynamicTemperature};

/// Native soil surrounding both lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilSpec {
    /// Thermal conductivity of the undisturbed soil.
    pub conductivity: ThermalConductivity,

    /// Average ground temperature, treated as the constant far-field and
    /// surface boundary condition.
    pub temperature: ThermodynamicTemperature,
}
