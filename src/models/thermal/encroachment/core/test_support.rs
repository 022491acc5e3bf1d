//! Shared fixtures for unit tests.

use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::{foot, inch},
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::support::units::btu_per_hour_foot_fahrenheit;

use super::{
    CalculationInput, GasLine, GasPipeMaterial, HeatSourceKind, HeatSourceLine,
    InsulationMaterial, InsulationSpec, MaterialChoice, Orientation, PipeMaterial, PipeSize,
    PipeSpec, SoilSpec, WallThickness,
};

/// A 6 in steam line with 2 in of calcium silicate, 5 ft deep, running 8 ft
/// from a 2 in HDPE gas main at 4 ft.
pub(crate) fn example_input() -> CalculationInput {
    CalculationInput {
        heat_source: HeatSourceLine {
            kind: HeatSourceKind::Steam,
            temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(225.0),
            pipe: PipeSpec {
                size: PipeSize::Ips(6.0),
                wall: WallThickness::Standard(Length::new::<inch>(0.280)),
                material: MaterialChoice::Standard(PipeMaterial::CarbonSteel),
            },
            insulation: Some(InsulationSpec {
                thickness: Length::new::<inch>(2.0),
                material: MaterialChoice::Standard(InsulationMaterial::CalciumSilicate),
            }),
            bedding: None,
            depth: Length::new::<foot>(5.0),
        },
        gas_line: GasLine {
            material: GasPipeMaterial::Hdpe,
            size: PipeSize::Ips(2.0),
            bedding: None,
            depth: Length::new::<foot>(4.0),
        },
        soil: SoilSpec {
            conductivity: btu_per_hour_foot_fahrenheit(0.8),
            temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(55.0),
        },
        orientation: Orientation::Parallel {
            separation: Length::new::<foot>(8.0),
        },
    }
}
