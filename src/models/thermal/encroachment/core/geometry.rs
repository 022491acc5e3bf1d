//! Pipe size tables and resolution of both lines into concentric diameters.

use uom::{ConstZero, si::f64::Length, si::length::inch};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{
    BeddingSides, GasLine, GeometryError, HeatSourceLine, Layer, Line, PipeSize, WallThickness,
};

/// Tabulated outer diameters of iron pipe sizes, `(NPS, OD)` in inches.
const IPS_OUTER_DIAMETERS: [(f64, f64); 20] = [
    (1.0, 1.315),
    (1.25, 1.660),
    (1.5, 1.900),
    (2.0, 2.375),
    (3.0, 3.500),
    (4.0, 4.500),
    (5.0, 5.563),
    (6.0, 6.625),
    (8.0, 8.625),
    (10.0, 10.750),
    (12.0, 12.750),
    (14.0, 14.0),
    (16.0, 16.0),
    (18.0, 18.0),
    (20.0, 20.0),
    (22.0, 22.0),
    (24.0, 24.0),
    (26.0, 26.0),
    (30.0, 30.0),
    (36.0, 36.0),
];

/// Tabulated wall thicknesses of iron pipe sizes, in inches.
const STANDARD_WALLS: [(f64, &[f64]); 20] = [
    (1.0, &[0.109, 0.133, 0.179]),
    (1.25, &[0.109, 0.140, 0.191]),
    (1.5, &[0.109, 0.145, 0.200]),
    (2.0, &[0.109, 0.154, 0.218]),
    (3.0, &[0.120, 0.216, 0.300]),
    (4.0, &[0.120, 0.237, 0.337]),
    (5.0, &[0.258, 0.375]),
    (6.0, &[0.280, 0.432]),
    (8.0, &[0.250, 0.277, 0.322, 0.406, 0.500]),
    (10.0, &[0.250, 0.307, 0.365, 0.500, 0.594]),
    (12.0, &[0.250, 0.330, 0.375, 0.406, 0.500, 0.688]),
    (14.0, &[0.250, 0.312, 0.375, 0.438, 0.500]),
    (16.0, &[0.250, 0.312, 0.375, 0.500, 0.656]),
    (18.0, &[0.250, 0.312, 0.375, 0.500, 0.750]),
    (20.0, &[0.250, 0.375, 0.500, 0.594]),
    (22.0, &[0.250, 0.375, 0.500]),
    (24.0, &[0.250, 0.375, 0.500, 0.688]),
    (26.0, &[0.312, 0.500]),
    (30.0, &[0.312, 0.375, 0.500]),
    (36.0, &[0.312, 0.375, 0.500]),
];

/// Copper tube outer diameters exceed the nominal size by 1/8 in.
const CTS_ALLOWANCE: f64 = 0.125;

/// Unmeasured sides of gas line bedding are taken at this thickness, in inches.
const GAS_BEDDING_DEFAULT_SIDE: f64 = 6.0;

/// Tolerance for matching a wall thickness against the table, in inches.
const WALL_MATCH_TOL: f64 = 5e-4;

fn lookup<T: Copy>(table: &[(f64, T)], nps: f64) -> Option<T> {
    table
        .iter()
        .find(|(size, _)| (size - nps).abs() < 1e-9)
        .map(|&(_, value)| value)
}

impl PipeSize {
    /// Returns the pipe's outer diameter.
    ///
    /// An IPS size missing from the table is taken at face value.
    #[must_use]
    pub fn outer_diameter(self) -> Length {
        match self {
            Self::Ips(nps) => Length::new::<inch>(lookup(&IPS_OUTER_DIAMETERS, nps).unwrap_or(nps)),
            Self::Cts(nominal) => Length::new::<inch>(nominal + CTS_ALLOWANCE),
            Self::OuterDiameter(diameter) => diameter,
        }
    }

    /// Returns the tabulated wall thicknesses for this size.
    ///
    /// Only iron pipe sizes are tabulated; other sizes yield an empty list.
    #[must_use]
    pub fn standard_walls(self) -> Vec<Length> {
        match self {
            Self::Ips(nps) => lookup(&STANDARD_WALLS, nps)
                .unwrap_or_default()
                .iter()
                .map(|&wall| Length::new::<inch>(wall))
                .collect(),
            Self::Cts(_) | Self::OuterDiameter(_) => Vec::new(),
        }
    }

    fn is_standard_wall(self, wall: Length) -> bool {
        self.standard_walls()
            .iter()
            .any(|standard| (standard.get::<inch>() - wall.get::<inch>()).abs() < WALL_MATCH_TOL)
    }
}

/// Resolved concentric diameters of the heat source.
///
/// Absent layers collapse onto the layer inside them, so
/// `inner < outer ≤ insulation_outer ≤ bedding_outer` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSourceGeometry {
    /// Carrier pipe outer diameter.
    pub outer: Length,

    /// Carrier pipe inner diameter.
    pub inner: Length,

    /// Outer diameter of the insulation annulus.
    pub insulation_outer: Length,

    /// Outer diameter of the bedding annulus.
    pub bedding_outer: Length,

    /// Depth to centerline.
    pub depth: Length,
}

impl HeatSourceGeometry {
    /// Radius of the outermost annulus, the radius seen by the soil.
    #[must_use]
    pub fn outermost_radius(&self) -> Length {
        self.bedding_outer / 2.0
    }
}

/// Resolved radii of the gas line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasLineGeometry {
    /// Gas pipe outer radius.
    pub pipe_radius: Length,

    /// Outer radius of the bedding shell, if bedding is declared.
    pub bedding_radius: Option<Length>,

    /// Depth to centerline.
    pub depth: Length,
}

/// Resolves the heat source into concentric diameters.
///
/// # Errors
///
/// Returns a [`GeometryError`] if a diameter, thickness, or depth is invalid,
/// if a standard wall thickness is not tabulated for the pipe size, or if a
/// side of the heat source bedding was not measured.
pub fn resolve_heat_source(line: &HeatSourceLine) -> Result<HeatSourceGeometry, GeometryError> {
    let outer = positive_diameter(line.pipe.size.outer_diameter(), Layer::HeatSourcePipe)?;

    let wall = match line.pipe.wall {
        WallThickness::Standard(wall) => {
            if !line.pipe.size.is_standard_wall(wall) {
                return Err(GeometryError::NonStandardWallThickness {
                    size: line.pipe.size,
                    wall,
                });
            }
            wall
        }
        WallThickness::Custom(wall) => wall,
    };
    let wall = StrictlyPositive::new(wall)
        .map_err(|_| GeometryError::NonPositiveWall { wall })?
        .into_inner();

    let inner = outer - 2.0 * wall;
    if inner <= Length::ZERO {
        return Err(GeometryError::WallTooThick { outer, wall });
    }

    let insulation = line
        .insulation
        .map_or(Length::ZERO, |insulation| insulation.thickness);
    let insulation = thickness(insulation, Layer::Insulation)?;
    let insulation_outer = outer + 2.0 * insulation;

    let bedding_outer = match &line.bedding {
        Some(bedding) => {
            let average = average_thickness(&bedding.sides, None, Layer::HeatSourceBedding)?;
            insulation_outer + 2.0 * average
        }
        None => insulation_outer,
    };

    let depth = positive_depth(line.depth, Line::HeatSource)?;

    Ok(HeatSourceGeometry {
        outer,
        inner,
        insulation_outer,
        bedding_outer,
        depth,
    })
}

/// Resolves the gas line into radii.
///
/// # Errors
///
/// Returns a [`GeometryError`] if the diameter, a bedding thickness, or the
/// depth is invalid.
pub fn resolve_gas_line(line: &GasLine) -> Result<GasLineGeometry, GeometryError> {
    let pipe_radius = positive_diameter(line.size.outer_diameter(), Layer::GasPipe)? / 2.0;

    let bedding_radius = line
        .bedding
        .map(|bedding| {
            let default = Length::new::<inch>(GAS_BEDDING_DEFAULT_SIDE);
            average_thickness(&bedding.sides, Some(default), Layer::GasLineBedding)
                .map(|average| pipe_radius + average)
        })
        .transpose()?;

    let depth = positive_depth(line.depth, Line::GasLine)?;

    Ok(GasLineGeometry {
        pipe_radius,
        bedding_radius,
        depth,
    })
}

/// Averages four side measurements into an equivalent annular thickness.
///
/// Missing sides take `default`, or fail when there is no default.
fn average_thickness(
    sides: &BeddingSides,
    default: Option<Length>,
    layer: Layer,
) -> Result<Length, GeometryError> {
    let mut total = NonNegative::zero::<Length>();
    for (side, measured) in sides.iter() {
        let measured = measured
            .or(default)
            .ok_or(GeometryError::MissingBeddingSide { side })?;
        total = total
            + NonNegative::new(measured).map_err(|_| GeometryError::InvalidThickness {
                layer,
                thickness: measured,
            })?;
    }
    Ok(total.into_inner() / 4.0)
}

fn thickness(value: Length, layer: Layer) -> Result<Length, GeometryError> {
    NonNegative::new(value)
        .map(|t| t.into_inner())
        .map_err(|_| GeometryError::InvalidThickness {
            layer,
            thickness: value,
        })
}

fn positive_diameter(diameter: Length, layer: Layer) -> Result<Length, GeometryError> {
    StrictlyPositive::new(diameter)
        .map(|d| d.into_inner())
        .map_err(|_| GeometryError::NonPositiveDiameter { layer, diameter })
}

fn positive_depth(depth: Length, line: Line) -> Result<Length, GeometryError> {
    StrictlyPositive::new(depth)
        .map(|d| d.into_inner())
        .map_err(|_| GeometryError::NonPositiveDepth { line, depth })
}
