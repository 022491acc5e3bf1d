use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::models::thermal::encroachment::core::{BeddingMaterial, BeddingSide, MaterialChoice};

/// Bedding thickness measured on each side of a pipe.
///
/// Unmeasured sides are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BeddingSides {
    pub top: Option<Length>,
    pub bottom: Option<Length>,
    pub left: Option<Length>,
    pub right: Option<Length>,
}

impl BeddingSides {
    /// The same thickness on all four sides.
    #[must_use]
    pub fn uniform(thickness: Length) -> Self {
        Self {
            top: Some(thickness),
            bottom: Some(thickness),
            left: Some(thickness),
            right: Some(thickness),
        }
    }

    /// Iterates the sides in top, bottom, left, right order.
    pub fn iter(&self) -> impl Iterator<Item = (BeddingSide, Option<Length>)> {
        [
            (BeddingSide::Top, self.top),
            (BeddingSide::Bottom, self.bottom),
            (BeddingSide::Left, self.left),
            (BeddingSide::Right, self.right),
        ]
        .into_iter()
    }
}

/// Engineered bedding placed around a pipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeddingSpec {
    pub sides: BeddingSides,
    pub material: MaterialChoice<BeddingMaterial>,
}

impl BeddingSpec {
    /// Sand bedding of uniform thickness with the default conductivity.
    #[must_use]
    pub fn sand(thickness: Length) -> Self {
        Self {
            sides: BeddingSides::uniform(thickness),
            material: MaterialChoice::Standard(BeddingMaterial::Sand),
        }
    }
}
