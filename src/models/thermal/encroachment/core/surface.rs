use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::inch,
    ratio::ratio,
};

use super::{GeometryError, ImageSource};

/// Depth below grade at which the ground surface temperature is reported, in inches.
pub const SURFACE_PROBE_DEPTH: f64 = 1.0;

/// Ground temperature just below grade, directly above the heat source.
///
/// Evaluates the image solution at depth `y`:
/// `T = T_surface + Q / (2π·k_soil) · ln((y + Z_hs) / (Z_hs − y))`.
///
/// # Errors
///
/// Returns [`GeometryError::SurfaceProbeTooDeep`] if the heat source is not
/// deeper than the probe.
pub fn ground_surface_temperature(
    source: &ImageSource<'_>,
) -> Result<ThermodynamicTemperature, GeometryError> {
    let probe = Length::new::<inch>(SURFACE_PROBE_DEPTH);
    if source.depth <= probe {
        return Err(GeometryError::SurfaceProbeTooDeep {
            depth: source.depth,
            probe,
        });
    }

    let ln_ratio = ((probe + source.depth) / (source.depth - probe))
        .get::<ratio>()
        .ln();
    Ok(source.surface + source.rise(ln_ratio))
}
