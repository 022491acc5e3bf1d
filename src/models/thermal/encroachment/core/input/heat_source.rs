use std::fmt;

use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::f64::{Length, ThermalConductivity, ThermodynamicTemperature},
};

use crate::models::thermal::encroachment::core::{
    BeddingSpec, InsulationMaterial, MaterialChoice, PipeSpec,
};

/// The kind of fluid carried by the heat source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatSourceKind {
    Steam,
    HotWater,
    SuperheatedHotWater,
}

impl fmt::Display for HeatSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Steam => "steam",
            Self::HotWater => "hot water",
            Self::SuperheatedHotWater => "superheated hot water",
        })
    }
}

/// Insulation jacket around the heat source pipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsulationSpec {
    /// Radial thickness of the jacket.
    ///
    /// A zero thickness contributes no resistance.
    pub thickness: Length,

    /// Jacket material or custom conductivity.
    ///
    /// A custom conductivity of exactly zero means there is no insulation
    /// layer.
    pub material: MaterialChoice<InsulationMaterial>,
}

impl InsulationSpec {
    /// Whether the jacket forms a layer: nonzero thickness and conductivity.
    #[must_use]
    pub fn is_layer(&self) -> bool {
        let absent = matches!(
            self.material,
            MaterialChoice::Custom(k) if k == ThermalConductivity::ZERO
        );
        self.thickness > Length::ZERO && !absent
    }
}

/// The buried high-temperature line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatSourceLine {
    /// Service carried by the line.
    pub kind: HeatSourceKind,

    /// Fluid temperature inside the pipe.
    pub temperature: ThermodynamicTemperature,

    /// Carrier pipe.
    pub pipe: PipeSpec,

    /// Insulation jacket, if any.
    pub insulation: Option<InsulationSpec>,

    /// Engineered bedding around the pipe, if distinct from native soil.
    pub bedding: Option<BeddingSpec>,

    /// Depth from grade to the pipe centerline.
    pub depth: Length,
}

impl HeatSourceLine {
    /// Whether the line has an insulation layer whose failure is worth modeling.
    #[must_use]
    pub fn is_insulated(&self) -> bool {
        self.insulation.is_some_and(|insulation| insulation.is_layer())
    }
}
