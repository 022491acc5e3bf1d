use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, TemperatureInterval},
    length::foot,
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
};

/// Solver configuration for the minimum-clearance search.
#[derive(Debug, Clone, Copy)]
pub struct ClearanceConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the offset.
    pub offset_tol: Length,

    /// Absolute tolerance on the temperature residual (final - limit).
    pub temperature_tol: TemperatureInterval,

    /// Largest offset searched before giving up.
    pub search_limit: Length,
}

impl Default for ClearanceConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            offset_tol: Length::new::<foot>(1e-6),
            temperature_tol: TemperatureInterval::new::<delta_fahrenheit>(1e-9),
            search_limit: Length::new::<foot>(500.0),
        }
    }
}

impl ClearanceConfig {
    /// Converts this configuration into a bisection solver configuration.
    ///
    /// The search variable is in feet and the residual in °F.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.offset_tol.get::<foot>(),
            x_rel_tol: 0.0,
            residual_tol: self.temperature_tol.get::<delta_fahrenheit>(),
        }
    }
}
