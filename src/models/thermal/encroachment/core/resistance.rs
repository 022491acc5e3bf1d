//! Series thermal resistance from the heat source fluid to grade.
//!
//! Each concentric layer is a cylindrical annulus with resistance
//! `ln(D_out / D_in) / (2π·k)`. The surrounding soil is a line source below an
//! isothermal surface, handled by the method of images:
//! `ln((2·Z − r) / r) / (2π·k_soil)`, where `r` is the radius of the outermost
//! annulus.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::trace;
use uom::si::{f64::Length, ratio::ratio};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::{LinearThermalResistance, UsCustomary},
};

use super::{Conductivities, Conductivity, GeometryError, HeatSourceGeometry, Layer};

/// Per-unit-length resistances of the heat source network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resistances {
    /// Carrier pipe wall.
    pub pipe_wall: LinearThermalResistance,

    /// Insulation annulus; zero without insulation.
    pub insulation: LinearThermalResistance,

    /// Heat source bedding annulus; zero without bedding.
    pub bedding: LinearThermalResistance,

    /// Native soil between the outermost annulus and grade.
    pub soil: LinearThermalResistance,

    /// Exact sum of the four layers.
    pub total: LinearThermalResistance,
}

/// Computes the series resistance network for a resolved heat source.
///
/// # Errors
///
/// Returns [`GeometryError::SourceTooShallow`] if the outermost annulus
/// reaches within its own radius of grade, or [`GeometryError::InvertedLayer`]
/// if a layer's outer diameter is smaller than its inner diameter.
pub fn resistance_network(
    geometry: &HeatSourceGeometry,
    k: &Conductivities,
) -> Result<Resistances, GeometryError> {
    let pipe_wall = annulus(
        Layer::HeatSourcePipe,
        geometry.outer,
        geometry.inner,
        &k.pipe,
    )?;

    let insulation = optional_annulus(
        Layer::Insulation,
        geometry.insulation_outer,
        geometry.outer,
        k.insulation.as_ref(),
    )?;

    let bedding = optional_annulus(
        Layer::HeatSourceBedding,
        geometry.bedding_outer,
        geometry.insulation_outer,
        k.heat_source_bedding.as_ref(),
    )?;

    let soil = soil(geometry.depth, geometry.outermost_radius(), &k.soil)?;

    let total: Constrained<LinearThermalResistance, NonNegative> =
        [pipe_wall, insulation, bedding, soil].into_iter().sum();

    Ok(Resistances {
        pipe_wall: pipe_wall.into_inner(),
        insulation: insulation.into_inner(),
        bedding: bedding.into_inner(),
        soil: soil.into_inner(),
        total: total.into_inner(),
    })
}

fn annulus(
    layer: Layer,
    outer: Length,
    inner: Length,
    k: &Conductivity,
) -> Result<Constrained<LinearThermalResistance, NonNegative>, GeometryError> {
    let inverted = GeometryError::InvertedLayer {
        layer,
        outer,
        inner,
    };
    let ln_ratio = (outer / inner).get::<ratio>().ln();
    let resistance: LinearThermalResistance = ln_ratio / (TAU * **k);
    let resistance = NonNegative::new(resistance).map_err(|_| inverted)?;

    trace!(
        %layer,
        resistance = resistance.as_ref().us_customary(),
        "annulus resistance [hr·ft·°F/BTU]",
    );
    Ok(resistance)
}

/// An undeclared layer has no thickness and contributes nothing.
fn optional_annulus(
    layer: Layer,
    outer: Length,
    inner: Length,
    k: Option<&Conductivity>,
) -> Result<Constrained<LinearThermalResistance, NonNegative>, GeometryError> {
    match k {
        Some(k) => annulus(layer, outer, inner, k),
        None => Ok(NonNegative::zero()),
    }
}

fn soil(
    depth: Length,
    radius: Length,
    k: &Conductivity,
) -> Result<Constrained<LinearThermalResistance, NonNegative>, GeometryError> {
    // Below one radius of cover the image formula turns negative.
    if depth <= radius {
        return Err(GeometryError::SourceTooShallow { depth, radius });
    }

    let ln_ratio = ((2.0 * depth - radius) / radius).get::<ratio>().ln();
    let resistance: LinearThermalResistance = ln_ratio / (TAU * **k);
    let resistance = NonNegative::new(resistance)
        .map_err(|_| GeometryError::SourceTooShallow { depth, radius })?;

    trace!(
        layer = %Layer::Soil,
        resistance = resistance.as_ref().us_customary(),
        "image resistance [hr·ft·°F/BTU]",
    );
    Ok(resistance)
}
