//! Gas line temperature by the method of images.
//!
//! The heat source is a line sink of strength `Q` at depth `Z_hs` below an
//! isothermal surface. Superposing it with its image above grade gives the
//! steady temperature rise anywhere in homogeneous soil. Two limiting cases
//! are exact:
//!
//! - **Perpendicular crossing**: `ΔT = Q / (2π·k) · ln((Z_hs + Z_gas) / D)`,
//!   with `D` the true centerline separation at the crossing.
//! - **Parallel run**: `ΔT = Q / (2π·k) · ln(d_image / d_source)`.
//!
//! # Angled crossings
//!
//! Between 0° and 90° the two limits are blended with weight `w = sin θ`:
//! `ΔT = w·ΔT_perp + (1 − w)·ΔT_para`. This is a heuristic interpolation
//! between the exact limits, not a closed-form solution for an oblique line
//! source, and is kept as-is so results stay comparable with prior screenings.

use std::{f64::consts::TAU, fmt};

use serde::{Deserialize, Serialize};
use tracing::trace;
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length, Ratio, TemperatureInterval, ThermodynamicTemperature},
    length::foot,
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitInterval},
    units::LinearHeatRate,
};

use super::{Conductivity, GasLineGeometry, GeometryError, Orientation};

/// The formula branch used for the homogeneous-soil estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OrientationFormula {
    Perpendicular,
    Parallel,
    /// Angled crossing, blended between the perpendicular and parallel limits.
    Blended {
        angle: Angle,
    },
}

impl fmt::Display for OrientationFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perpendicular => f.write_str("Perpendicular"),
            Self::Parallel => f.write_str("Parallel"),
            Self::Blended { angle } => {
                // Trims conversion noise so 45° prints as "45".
                let degrees = (angle.get::<degree>() * 1e6).round() / 1e6;
                write!(f, "Blended (Angle: {degrees}°)")
            }
        }
    }
}

/// Predicted gas line temperature with the values behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasLineTemperature {
    /// Estimate assuming native soil all the way to the gas pipe.
    pub homogeneous: ThermodynamicTemperature,

    /// Estimate including the gas line bedding shell, when one is modeled.
    pub layered: Option<ThermodynamicTemperature>,

    /// Shift applied by the bedding shell, when one is modeled.
    pub bedding_correction: Option<TemperatureInterval>,

    /// Centerline separation `√((Z_hs − Z_gas)² + C²)`.
    pub separation: Length,

    /// Formula branch taken.
    pub formula: OrientationFormula,
}

impl GasLineTemperature {
    /// The reported temperature: layered when available, else homogeneous.
    #[must_use]
    pub fn final_temperature(&self) -> ThermodynamicTemperature {
        self.layered.unwrap_or(self.homogeneous)
    }
}

/// Boundary conditions shared by the gas line and surface models.
#[derive(Debug, Clone, Copy)]
pub struct ImageSource<'a> {
    /// Heat loss per unit length.
    pub heat_loss: LinearHeatRate,

    /// Depth to the heat source centerline.
    pub depth: Length,

    /// Native soil conductivity.
    pub soil: &'a Conductivity,

    /// Ground surface temperature.
    pub surface: ThermodynamicTemperature,
}

impl ImageSource<'_> {
    /// Temperature rise for a given log ratio of image to source distance.
    pub fn rise(&self, ln_ratio: f64) -> TemperatureInterval {
        self.heat_loss / (TAU * **self.soil) * ln_ratio
    }
}

/// Computes the gas line temperature for one orientation.
///
/// # Errors
///
/// Returns [`GeometryError::CoincidentLines`] if the two centerlines coincide,
/// or [`GeometryError::InvalidCrossingAngle`] if the crossing angle is not a
/// number.
pub fn gas_line_temperature(
    source: &ImageSource<'_>,
    gas: &GasLineGeometry,
    orientation: &Orientation,
    bedding: Option<&Conductivity>,
) -> Result<GasLineTemperature, GeometryError> {
    let offset = orientation.offset();
    let vertical = source.depth - gas.depth;
    let separation = StrictlyPositive::new(distance(vertical, offset))
        .map_err(|_| GeometryError::CoincidentLines)?
        .into_inner();

    let perpendicular = || {
        let ln_ratio = ((source.depth + gas.depth) / separation).get::<ratio>().ln();
        source.rise(ln_ratio)
    };
    let parallel = || {
        let image = distance(source.depth + gas.depth, offset);
        source.rise((image / separation).get::<ratio>().ln())
    };

    let (rise, formula) = match *orientation {
        Orientation::Perpendicular { .. } => (perpendicular(), OrientationFormula::Perpendicular),
        Orientation::Parallel { .. } => (parallel(), OrientationFormula::Parallel),
        Orientation::Angled { angle, .. } => {
            let degrees = angle.get::<degree>();
            if degrees.is_nan() {
                return Err(GeometryError::InvalidCrossingAngle { angle });
            }
            if degrees >= 90.0 {
                (perpendicular(), OrientationFormula::Perpendicular)
            } else if degrees <= 0.0 {
                (parallel(), OrientationFormula::Parallel)
            } else {
                let w = blend_weight(angle)?.into_inner().get::<ratio>();
                (
                    perpendicular() * w + parallel() * (1.0 - w),
                    OrientationFormula::Blended { angle },
                )
            }
        }
    };

    let homogeneous = source.surface + rise;

    let bedding_correction = match (gas.bedding_radius, bedding) {
        (Some(outer), Some(k_bed)) if outer > gas.pipe_radius => {
            let ln_ratio = (outer / gas.pipe_radius).get::<ratio>().ln();
            let per_k = |k: &Conductivity| -> TemperatureInterval {
                source.heat_loss / (TAU * **k) * ln_ratio
            };
            Some(per_k(k_bed) - per_k(source.soil))
        }
        _ => None,
    };

    trace!(
        %formula,
        separation_ft = separation.get::<foot>(),
        bedding_corrected = bedding_correction.is_some(),
        "gas line temperature",
    );

    Ok(GasLineTemperature {
        homogeneous,
        layered: bedding_correction.map(|correction| homogeneous + correction),
        bedding_correction,
        separation,
        formula,
    })
}

fn distance(a: Length, b: Length) -> Length {
    Length::new::<foot>(a.get::<foot>().hypot(b.get::<foot>()))
}

/// Weight of the perpendicular limit for an angled crossing.
fn blend_weight(angle: Angle) -> Result<Constrained<Ratio, UnitInterval>, GeometryError> {
    UnitInterval::new(Ratio::new::<ratio>(angle.get::<radian>().sin()))
        .map_err(|_| GeometryError::InvalidCrossingAngle { angle })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::inch, temperature_interval::degree_fahrenheit as delta_fahrenheit,
        thermodynamic_temperature::degree_fahrenheit,
    };

    use crate::{
        models::thermal::encroachment::core::Layer,
        support::units::btu_per_hour_foot_fahrenheit,
    };

    /// 60 BTU/hr·ft, in W/m.
    fn heat_loss() -> LinearHeatRate {
        let k = btu_per_hour_foot_fahrenheit(1.0);
        TemperatureInterval::new::<delta_fahrenheit>(60.0) * k
    }

    fn soil() -> Conductivity {
        Conductivity::new(btu_per_hour_foot_fahrenheit(0.8), Layer::Soil).unwrap()
    }

    fn gas(depth_ft: f64) -> GasLineGeometry {
        GasLineGeometry {
            pipe_radius: Length::new::<inch>(2.375 / 2.0),
            bedding_radius: None,
            depth: Length::new::<foot>(depth_ft),
        }
    }

    fn solve(soil: &Conductivity, orientation: Orientation) -> GasLineTemperature {
        let source = ImageSource {
            heat_loss: heat_loss(),
            depth: Length::new::<foot>(5.0),
            soil,
            surface: ThermodynamicTemperature::new::<degree_fahrenheit>(55.0),
        };
        gas_line_temperature(&source, &gas(4.0), &orientation, None).unwrap()
    }

    fn parallel(separation_ft: f64) -> Orientation {
        Orientation::Parallel {
            separation: Length::new::<foot>(separation_ft),
        }
    }

    fn angled(offset_ft: f64, degrees: f64) -> Orientation {
        Orientation::Angled {
            lateral_offset: Length::new::<foot>(offset_ft),
            angle: Angle::new::<degree>(degrees),
        }
    }

    fn fahrenheit(t: ThermodynamicTemperature) -> f64 {
        t.get::<degree_fahrenheit>()
    }

    #[test]
    fn parallel_image_formula() {
        let k = soil();
        let result = solve(&k, parallel(8.0));

        // 55 + 60 / (2π · 0.8) · ln(√145 / √65)
        let expected = 55.0 + 60.0 / (TAU * 0.8) * (145.0_f64.sqrt() / 65.0_f64.sqrt()).ln();
        assert_relative_eq!(fahrenheit(result.homogeneous), expected, epsilon = 1e-9);
        assert_relative_eq!(result.separation.get::<foot>(), 65.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(result.formula, OrientationFormula::Parallel);
        assert!(result.layered.is_none());
        assert_eq!(result.final_temperature(), result.homogeneous);
    }

    #[test]
    fn perpendicular_image_formula() {
        let k = soil();
        let result = solve(
            &k,
            Orientation::Perpendicular {
                lateral_offset: Length::new::<foot>(3.0),
            },
        );

        let expected = 55.0 + 60.0 / (TAU * 0.8) * (9.0 / 10.0_f64.sqrt()).ln();
        assert_relative_eq!(fahrenheit(result.homogeneous), expected, epsilon = 1e-9);
        assert_eq!(result.formula, OrientationFormula::Perpendicular);
    }

    #[test]
    fn angles_at_or_beyond_the_limits_use_exact_formulas() {
        let k = soil();
        assert_eq!(
            solve(&k, angled(3.0, 90.0)).formula,
            OrientationFormula::Perpendicular
        );
        assert_eq!(
            solve(&k, angled(3.0, 120.0)).formula,
            OrientationFormula::Perpendicular
        );
        assert_eq!(solve(&k, angled(3.0, 0.0)).formula, OrientationFormula::Parallel);
        assert_eq!(solve(&k, angled(3.0, -5.0)).formula, OrientationFormula::Parallel);
    }

    #[test]
    fn blend_is_continuous_at_both_limits() {
        let k = soil();

        let perpendicular = solve(&k, angled(3.0, 90.0)).homogeneous;
        let nearly = solve(&k, angled(3.0, 89.999));
        assert!(matches!(nearly.formula, OrientationFormula::Blended { .. }));
        assert_relative_eq!(
            fahrenheit(nearly.homogeneous),
            fahrenheit(perpendicular),
            epsilon = 1e-6
        );

        let parallel = solve(&k, angled(3.0, 0.0)).homogeneous;
        let nearly = solve(&k, angled(3.0, 1e-7));
        assert_relative_eq!(
            fahrenheit(nearly.homogeneous),
            fahrenheit(parallel),
            epsilon = 1e-6
        );
    }

    #[test]
    fn blend_weight_is_sine_of_angle() {
        let k = soil();
        let perpendicular = fahrenheit(solve(&k, angled(3.0, 90.0)).homogeneous);
        let parallel = fahrenheit(solve(&k, angled(3.0, 0.0)).homogeneous);
        let blended = fahrenheit(solve(&k, angled(3.0, 30.0)).homogeneous);

        assert_relative_eq!(
            blended,
            0.5 * perpendicular + 0.5 * parallel,
            epsilon = 1e-9
        );
    }

    #[test]
    fn temperature_falls_with_offset() {
        let k = soil();
        let orientations: [fn(f64) -> Orientation; 3] = [
            parallel,
            |c| Orientation::Perpendicular {
                lateral_offset: Length::new::<foot>(c),
            },
            |c| angled(c, 45.0),
        ];
        for orientation in orientations {
            let temperatures: Vec<f64> = [0.5, 1.0, 2.0, 4.0, 8.0, 16.0]
                .into_iter()
                .map(|c| fahrenheit(solve(&k, orientation(c)).homogeneous))
                .collect();
            assert!(temperatures.windows(2).all(|pair| pair[1] < pair[0]));
        }
    }

    #[test]
    fn bedding_correction() {
        let k = soil();
        let sand = Conductivity::new(btu_per_hour_foot_fahrenheit(0.2), Layer::GasLineBedding)
            .unwrap();
        let mut bedded = gas(4.0);
        bedded.bedding_radius = Some(bedded.pipe_radius + Length::new::<inch>(6.0));

        let source = ImageSource {
            heat_loss: heat_loss(),
            depth: Length::new::<foot>(5.0),
            soil: &k,
            surface: ThermodynamicTemperature::new::<degree_fahrenheit>(55.0),
        };
        let result = gas_line_temperature(&source, &bedded, &parallel(8.0), Some(&sand)).unwrap();

        let r_g: f64 = 2.375 / 2.0;
        let expected = 60.0 / TAU * ((r_g + 6.0) / r_g).ln() * (1.0 / 0.2 - 1.0 / 0.8);
        let correction = result.bedding_correction.unwrap();
        assert_relative_eq!(correction.get::<delta_fahrenheit>(), expected, epsilon = 1e-9);
        assert_relative_eq!(
            fahrenheit(result.final_temperature()),
            fahrenheit(result.homogeneous) + expected,
            epsilon = 1e-9
        );

        // A shell no thicker than the pipe is ignored.
        bedded.bedding_radius = Some(bedded.pipe_radius);
        let result = gas_line_temperature(&source, &bedded, &parallel(8.0), Some(&sand)).unwrap();
        assert!(result.layered.is_none());
    }

    #[test]
    fn formula_labels() {
        assert_eq!(OrientationFormula::Parallel.to_string(), "Parallel");
        assert_eq!(OrientationFormula::Perpendicular.to_string(), "Perpendicular");
        assert_eq!(
            OrientationFormula::Blended {
                angle: Angle::new::<degree>(45.0)
            }
            .to_string(),
            "Blended (Angle: 45°)"
        );
    }

    #[test]
    fn degenerate_inputs() {
        let k = soil();
        let source = ImageSource {
            heat_loss: heat_loss(),
            depth: Length::new::<foot>(4.0),
            soil: &k,
            surface: ThermodynamicTemperature::new::<degree_fahrenheit>(55.0),
        };
        assert_eq!(
            gas_line_temperature(&source, &gas(4.0), &parallel(0.0), None),
            Err(GeometryError::CoincidentLines)
        );

        let source = ImageSource {
            depth: Length::new::<foot>(5.0),
            ..source
        };
        assert!(matches!(
            gas_line_temperature(&source, &gas(4.0), &angled(3.0, f64::NAN), None),
            Err(GeometryError::InvalidCrossingAngle { .. })
        ));
    }
}
