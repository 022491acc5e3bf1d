use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

use super::{LinearHeatRate, LinearThermalResistance};

/// One international-table BTU per hour, in watts.
const BTU_PER_HOUR: f64 = 1_055.055_852_62 / 3_600.0;

/// One foot, in meters.
const FOOT: f64 = 0.3048;

/// One Fahrenheit degree of temperature interval, in kelvin.
const FAHRENHEIT_DEGREE: f64 = 5.0 / 9.0;

/// One BTU/hr·ft·°F, in W/m·K.
const BTU_PER_HOUR_FOOT_FAHRENHEIT: f64 = BTU_PER_HOUR / (FOOT * FAHRENHEIT_DEGREE);

/// Creates a thermal conductivity from a value in BTU/hr·ft·°F.
///
/// Field data and material catalogs for buried piping are usually quoted in
/// US customary units.
#[must_use]
pub fn btu_per_hour_foot_fahrenheit(value: f64) -> ThermalConductivity {
    ThermalConductivity::new::<watt_per_meter_kelvin>(value * BTU_PER_HOUR_FOOT_FAHRENHEIT)
}

/// Extension trait for reading quantities in the US customary units used by
/// buried-line screening reports.
///
/// | Quantity                      | Unit           |
/// |-------------------------------|----------------|
/// | [`ThermalConductivity`]       | BTU/hr·ft·°F   |
/// | [`LinearThermalResistance`]   | hr·ft·°F/BTU   |
/// | [`LinearHeatRate`]            | BTU/hr·ft      |
pub trait UsCustomary {
    /// Returns the value expressed in the quantity's US customary unit.
    fn us_customary(&self) -> f64;
}

impl UsCustomary for ThermalConductivity {
    fn us_customary(&self) -> f64 {
        self.get::<watt_per_meter_kelvin>() / BTU_PER_HOUR_FOOT_FAHRENHEIT
    }
}

impl UsCustomary for LinearThermalResistance {
    fn us_customary(&self) -> f64 {
        self.value * BTU_PER_HOUR_FOOT_FAHRENHEIT
    }
}

impl UsCustomary for LinearHeatRate {
    fn us_customary(&self) -> f64 {
        self.value * FOOT / BTU_PER_HOUR
    }
}
