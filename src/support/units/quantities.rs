use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N3, P1, P3, Z0},
};

/// Thermal resistance per unit length of pipe run, m·K/W in SI.
///
/// Concentric layers around a line source add in series.
pub type LinearThermalResistance = Quantity<ISQ<N1, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Heat rate per unit length of pipe run, W/m in SI.
pub type LinearHeatRate = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
