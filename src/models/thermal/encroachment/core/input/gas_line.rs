use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::models::thermal::encroachment::core::{BeddingSpec, MaterialClass, PipeSize};

/// Gas pipe materials in distribution service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasPipeMaterial {
    Hdpe,
    Mdpe,
    /// Legacy Aldyl-A polyethylene.
    Aldyl,
    CoatedSteelProtected,
    CoatedSteelUnprotected,
    BareSteel,
}

impl GasPipeMaterial {
    /// The material family that sets the operating temperature limit.
    #[must_use]
    pub fn class(self) -> MaterialClass {
        match self {
            Self::Hdpe | Self::Mdpe | Self::Aldyl => MaterialClass::Plastic,
            Self::CoatedSteelProtected | Self::CoatedSteelUnprotected | Self::BareSteel => {
                MaterialClass::Steel
            }
        }
    }
}

/// The gas line being screened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasLine {
    pub material: GasPipeMaterial,

    /// Pipe size; only the outer diameter enters the calculation.
    pub size: PipeSize,

    /// Engineered bedding around the gas pipe, if distinct from native soil.
    ///
    /// Unmeasured sides default to 6 in.
    pub bedding: Option<BeddingSpec>,

    /// Depth from grade to the pipe centerline.
    pub depth: Length,
}
