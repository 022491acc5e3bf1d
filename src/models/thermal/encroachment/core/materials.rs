//! Thermal conductivity catalog for pipe, insulation, and bedding materials.
//!
//! Catalog values are in BTU/hr·ft·°F, as published for field use.
//! Every selection can be overridden with a custom conductivity through
//! [`MaterialChoice::Custom`], resolved once when a calculation starts.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use uom::si::f64::ThermalConductivity;

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::btu_per_hour_foot_fahrenheit,
};

use super::{CalculationInput, HeatSourceKind, Layer, MaterialError};

/// Default conductivity of sand bedding, BTU/hr·ft·°F.
const SAND_CONDUCTIVITY: f64 = 0.20;

/// A catalog entry with a tabulated conductivity.
pub trait Catalog: Copy {
    /// Display name of the material.
    fn name(self) -> &'static str;

    /// Tabulated thermal conductivity.
    fn conductivity(self) -> ThermalConductivity;

    /// Whether the material is rated for the given heat source service.
    fn is_rated_for(self, _service: HeatSourceKind) -> bool {
        true
    }
}

/// A catalog selection or an explicit conductivity override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MaterialChoice<M> {
    /// A catalog material with its tabulated conductivity.
    Standard(M),
    /// A custom conductivity, used as given.
    Custom(ThermalConductivity),
}

impl<M: Catalog> MaterialChoice<M> {
    /// Resolves the selection to a validated conductivity for `layer`.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::NotRatedFor`] if a catalog material is not rated
    /// for `service`, or [`MaterialError::Conductivity`] if the conductivity
    /// is not strictly positive.
    pub fn resolve(
        self,
        layer: Layer,
        service: HeatSourceKind,
    ) -> Result<Conductivity, MaterialError> {
        let k = match self {
            Self::Standard(material) => {
                if !material.is_rated_for(service) {
                    return Err(MaterialError::NotRatedFor {
                        material: material.name(),
                        service,
                    });
                }
                material.conductivity()
            }
            Self::Custom(k) => k,
        };
        Conductivity::new(k, layer)
    }
}

impl<M> From<M> for MaterialChoice<M> {
    fn from(material: M) -> Self {
        Self::Standard(material)
    }
}

/// A thermal conductivity known to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conductivity(Constrained<ThermalConductivity, StrictlyPositive>);

impl Conductivity {
    /// Validates a conductivity for the given layer.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Conductivity`] if `k` is not strictly positive.
    pub fn new(k: ThermalConductivity, layer: Layer) -> Result<Self, MaterialError> {
        StrictlyPositive::new(k)
            .map(Self)
            .map_err(|source| MaterialError::Conductivity { layer, source })
    }
}

impl Deref for Conductivity {
    type Target = ThermalConductivity;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Validated conductivities of every layer taking part in a calculation.
///
/// Optional layers are `None` when the input does not declare them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conductivities {
    pub pipe: Conductivity,
    pub insulation: Option<Conductivity>,
    pub heat_source_bedding: Option<Conductivity>,
    pub soil: Conductivity,
    pub gas_line_bedding: Option<Conductivity>,
}

impl Conductivities {
    /// Resolves every material choice in `input` to a validated conductivity.
    ///
    /// Insulation with zero thickness or a custom conductivity of zero is no
    /// layer at all, so its material is not resolved.
    ///
    /// # Errors
    ///
    /// Returns a [`MaterialError`] naming the first layer whose material is
    /// not rated for the service or whose conductivity is not strictly positive.
    pub fn resolve(input: &CalculationInput) -> Result<Self, MaterialError> {
        let source = &input.heat_source;
        let service = source.kind;

        let insulation = source
            .insulation
            .filter(|_| source.is_insulated())
            .map(|insulation| insulation.material.resolve(Layer::Insulation, service))
            .transpose()?;

        let heat_source_bedding = source
            .bedding
            .map(|bedding| bedding.material.resolve(Layer::HeatSourceBedding, service))
            .transpose()?;

        let gas_line_bedding = input
            .gas_line
            .bedding
            .map(|bedding| bedding.material.resolve(Layer::GasLineBedding, service))
            .transpose()?;

        Ok(Self {
            pipe: source.pipe.material.resolve(Layer::HeatSourcePipe, service)?,
            insulation,
            heat_source_bedding,
            soil: Conductivity::new(input.soil.conductivity, Layer::Soil)?,
            gas_line_bedding,
        })
    }
}

/// Heat-source carrier pipe materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeMaterial {
    CarbonSteel,
    StainlessSteel,
    DuctileIron,
    CastIron,
    Copper,
    /// Cross-linked polyethylene, hot water only.
    Pex,
    /// PP-R / PP-RCT, hot water only.
    PpR,
    /// Fiberglass reinforced pipe.
    Frp,
}

impl PipeMaterial {
    /// All catalog entries, in display order.
    pub const ALL: [Self; 8] = [
        Self::CarbonSteel,
        Self::StainlessSteel,
        Self::DuctileIron,
        Self::CastIron,
        Self::Copper,
        Self::Pex,
        Self::PpR,
        Self::Frp,
    ];
}

impl Catalog for PipeMaterial {
    fn name(self) -> &'static str {
        match self {
            Self::CarbonSteel => "Carbon Steel",
            Self::StainlessSteel => "Stainless Steel",
            Self::DuctileIron => "Ductile Iron",
            Self::CastIron => "Cast Iron (Legacy)",
            Self::Copper => "Copper",
            Self::Pex => "PEX",
            Self::PpR => "PP-R / PP-RCT",
            Self::Frp => "Fiberglass Reinforced Pipe (FRP)",
        }
    }

    fn conductivity(self) -> ThermalConductivity {
        btu_per_hour_foot_fahrenheit(match self {
            Self::CarbonSteel => 26.0,
            Self::StainlessSteel => 9.0,
            Self::DuctileIron => 32.0,
            Self::CastIron => 27.0,
            Self::Copper => 223.0,
            Self::Pex => 0.26,
            Self::PpR => 0.22,
            Self::Frp => 0.30,
        })
    }

    fn is_rated_for(self, service: HeatSourceKind) -> bool {
        match self {
            Self::Pex | Self::PpR => service == HeatSourceKind::HotWater,
            _ => true,
        }
    }
}

/// Pipe insulation materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsulationMaterial {
    CalciumSilicate,
    MineralWool,
    Fiberglass,
    CellularGlass,
    PolyurethaneFoam,
    PolyisocyanurateFoam,
    PhenolicFoam,
}

impl InsulationMaterial {
    /// Insulation offered for steam and superheated hot water lines.
    pub const STEAM_SERVICE: [Self; 4] = [
        Self::CalciumSilicate,
        Self::MineralWool,
        Self::Fiberglass,
        Self::CellularGlass,
    ];

    /// Insulation offered for hot water lines.
    pub const HOT_WATER_SERVICE: [Self; 5] = [
        Self::PolyurethaneFoam,
        Self::PolyisocyanurateFoam,
        Self::PhenolicFoam,
        Self::CellularGlass,
        Self::Fiberglass,
    ];

    /// Returns the insulation catalog for a heat source service.
    #[must_use]
    pub fn catalog_for(service: HeatSourceKind) -> &'static [Self] {
        match service {
            HeatSourceKind::Steam | HeatSourceKind::SuperheatedHotWater => &Self::STEAM_SERVICE,
            HeatSourceKind::HotWater => &Self::HOT_WATER_SERVICE,
        }
    }
}

impl Catalog for InsulationMaterial {
    fn name(self) -> &'static str {
        match self {
            Self::CalciumSilicate => "Calcium Silicate",
            Self::MineralWool => "Mineral Wool (Rock/Slag)",
            Self::Fiberglass => "Fiberglass (Pipe Sections)",
            Self::CellularGlass => "Cellular Glass",
            Self::PolyurethaneFoam => "Polyurethane Foam (PUR)",
            Self::PolyisocyanurateFoam => "Polyisocyanurate Foam (PIR)",
            Self::PhenolicFoam => "Phenolic Foam",
        }
    }

    fn conductivity(self) -> ThermalConductivity {
        btu_per_hour_foot_fahrenheit(match self {
            Self::CalciumSilicate => 0.034,
            Self::MineralWool => 0.023,
            Self::Fiberglass => 0.021,
            Self::CellularGlass => 0.032,
            Self::PolyurethaneFoam => 0.015,
            Self::PolyisocyanurateFoam => 0.016,
            Self::PhenolicFoam => 0.012,
        })
    }

    fn is_rated_for(self, service: HeatSourceKind) -> bool {
        Self::catalog_for(service).contains(&self)
    }
}

/// Engineered bedding placed around a buried pipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeddingMaterial {
    #[default]
    Sand,
}

impl Catalog for BeddingMaterial {
    fn name(self) -> &'static str {
        match self {
            Self::Sand => "Sand",
        }
    }

    fn conductivity(self) -> ThermalConductivity {
        match self {
            Self::Sand => btu_per_hour_foot_fahrenheit(SAND_CONDUCTIVITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{constraint::ConstraintError, units::UsCustomary};

    use crate::models::thermal::encroachment::core::test_support::example_input;

    #[test]
    fn catalog_values_read_back_in_customary_units() {
        assert_relative_eq!(
            PipeMaterial::CarbonSteel.conductivity().us_customary(),
            26.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            InsulationMaterial::CalciumSilicate
                .conductivity()
                .us_customary(),
            0.034,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            BeddingMaterial::default().conductivity().us_customary(),
            0.20,
            epsilon = 1e-12
        );
    }

    #[test]
    fn every_pipe_material_resolves_for_hot_water() {
        for material in PipeMaterial::ALL {
            let k = MaterialChoice::from(material)
                .resolve(Layer::HeatSourcePipe, HeatSourceKind::HotWater)
                .unwrap();
            assert!(k.us_customary() > 0.0, "{}", material.name());
        }
    }

    #[test]
    fn plastic_carriers_are_hot_water_only() {
        let err = MaterialChoice::Standard(PipeMaterial::Pex)
            .resolve(Layer::HeatSourcePipe, HeatSourceKind::Steam)
            .unwrap_err();
        assert_eq!(
            err,
            MaterialError::NotRatedFor {
                material: "PEX",
                service: HeatSourceKind::Steam,
            }
        );

        assert!(
            MaterialChoice::Standard(PipeMaterial::PpR)
                .resolve(Layer::HeatSourcePipe, HeatSourceKind::SuperheatedHotWater)
                .is_err()
        );
    }

    #[test]
    fn insulation_catalog_depends_on_service() {
        assert!(InsulationMaterial::CalciumSilicate.is_rated_for(HeatSourceKind::Steam));
        assert!(
            InsulationMaterial::CalciumSilicate.is_rated_for(HeatSourceKind::SuperheatedHotWater)
        );
        assert!(!InsulationMaterial::CalciumSilicate.is_rated_for(HeatSourceKind::HotWater));
        assert!(InsulationMaterial::PhenolicFoam.is_rated_for(HeatSourceKind::HotWater));
        assert!(InsulationMaterial::CellularGlass.is_rated_for(HeatSourceKind::HotWater));
        assert!(InsulationMaterial::CellularGlass.is_rated_for(HeatSourceKind::Steam));
    }

    #[test]
    fn custom_override_bypasses_catalog() {
        let k = MaterialChoice::<PipeMaterial>::Custom(btu_per_hour_foot_fahrenheit(12.5))
            .resolve(Layer::HeatSourcePipe, HeatSourceKind::Steam)
            .unwrap();
        assert_relative_eq!(k.us_customary(), 12.5, epsilon = 1e-12);
    }

    #[test]
    fn example_conductivities() {
        let k = Conductivities::resolve(&example_input()).unwrap();
        assert_relative_eq!(k.pipe.us_customary(), 26.0, epsilon = 1e-9);
        assert_relative_eq!(
            k.insulation.map(|k| k.us_customary()).unwrap(),
            0.034,
            epsilon = 1e-12
        );
        assert_relative_eq!(k.soil.us_customary(), 0.8, epsilon = 1e-12);
        assert!(k.heat_source_bedding.is_none());
        assert!(k.gas_line_bedding.is_none());

        let bare = Conductivities::resolve(&example_input().without_insulation()).unwrap();
        assert!(bare.insulation.is_none());
    }

    #[test]
    fn soil_must_conduct() {
        let mut input = example_input();
        input.soil.conductivity = btu_per_hour_foot_fahrenheit(-0.5);
        assert_eq!(
            Conductivities::resolve(&input),
            Err(MaterialError::Conductivity {
                layer: Layer::Soil,
                source: ConstraintError::Negative,
            })
        );
    }

    #[test]
    fn zero_insulation_conductivity_is_no_layer() {
        let mut input = example_input();
        if let Some(insulation) = input.heat_source.insulation.as_mut() {
            insulation.material = MaterialChoice::Custom(btu_per_hour_foot_fahrenheit(0.0));
        }
        assert!(!input.heat_source.is_insulated());
        assert!(Conductivities::resolve(&input).unwrap().insulation.is_none());

        if let Some(insulation) = input.heat_source.insulation.as_mut() {
            insulation.material = MaterialChoice::Custom(btu_per_hour_foot_fahrenheit(-0.03));
        }
        assert_eq!(
            Conductivities::resolve(&input),
            Err(MaterialError::Conductivity {
                layer: Layer::Insulation,
                source: ConstraintError::Negative,
            })
        );
    }

    #[test]
    fn non_positive_custom_conductivity_is_rejected() {
        let err = MaterialChoice::<BeddingMaterial>::Custom(btu_per_hour_foot_fahrenheit(0.0))
            .resolve(Layer::GasLineBedding, HeatSourceKind::Steam)
            .unwrap_err();
        assert_eq!(
            err,
            MaterialError::Conductivity {
                layer: Layer::GasLineBedding,
                source: ConstraintError::Zero,
            }
        );
    }
}
