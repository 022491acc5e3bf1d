use uom::si::f64::ThermodynamicTemperature;

use crate::support::{
    constraint::StrictlyPositive,
    units::{LinearHeatRate, LinearThermalResistance, TemperatureDifference},
};

use super::EngineError;

/// Heat lost per unit length of heat source, `Q = (T_source − T_surface) / R_total`.
///
/// # Errors
///
/// Returns [`EngineError::Division`] if `total` is not strictly positive.
pub fn heat_loss(
    source: ThermodynamicTemperature,
    surface: ThermodynamicTemperature,
    total: LinearThermalResistance,
) -> Result<LinearHeatRate, EngineError> {
    let total = StrictlyPositive::new(total)
        .map_err(|_| EngineError::Division { total })?
        .into_inner();

    Ok(source.minus(surface) / total)
}
