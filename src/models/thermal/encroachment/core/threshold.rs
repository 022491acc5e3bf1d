//! Material-keyed operating limits for the gas line.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

/// Gas pipe material family for threshold purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialClass {
    /// HDPE, MDPE, and Aldyl-type polyethylene.
    Plastic,
    /// Coated or bare steel.
    Steel,
}

impl fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plastic => "plastic",
            Self::Steel => "steel",
        })
    }
}

/// Operating temperature limits per material class.
///
/// The plastic limit is an operational cap set well below the continuous
/// rating of modern polyethylene. The steel limit protects coating adhesion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    /// Limit for plastic gas pipe.
    pub plastic_limit: ThermodynamicTemperature,

    /// Limit for coated or bare steel gas pipe.
    pub steel_limit: ThermodynamicTemperature,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            plastic_limit: ThermodynamicTemperature::new::<degree_fahrenheit>(70.0),
            steel_limit: ThermodynamicTemperature::new::<degree_fahrenheit>(150.0),
        }
    }
}

impl ThresholdPolicy {
    /// Returns the limit for a material class.
    #[must_use]
    pub fn limit_for(&self, class: MaterialClass) -> ThermodynamicTemperature {
        match class {
            MaterialClass::Plastic => self.plastic_limit,
            MaterialClass::Steel => self.steel_limit,
        }
    }

    /// Classifies a final gas line temperature.
    ///
    /// A temperature that meets the limit exceeds it.
    #[must_use]
    pub fn evaluate(&self, class: MaterialClass, actual: ThermodynamicTemperature) -> ThresholdStatus {
        let limit = self.limit_for(class);
        if actual >= limit {
            warn!(
                %class,
                actual_f = actual.get::<degree_fahrenheit>(),
                limit_f = limit.get::<degree_fahrenheit>(),
                "gas line temperature limit exceeded",
            );
            ThresholdStatus::LimitExceeded {
                class,
                limit,
                actual,
            }
        } else {
            ThresholdStatus::WithinLimit
        }
    }
}

/// Outcome of comparing a gas line temperature against its limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThresholdStatus {
    WithinLimit,
    LimitExceeded {
        class: MaterialClass,
        limit: ThermodynamicTemperature,
        actual: ThermodynamicTemperature,
    },
}

impl ThresholdStatus {
    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::LimitExceeded { .. })
    }
}
