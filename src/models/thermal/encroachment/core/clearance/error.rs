use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Length, TemperatureInterval, ThermodynamicTemperature};

use crate::models::thermal::encroachment::core::EngineError;

/// Errors that can occur while searching for a minimum clearance.
#[derive(Debug, Error)]
pub enum ClearanceError {
    /// A scenario evaluation failed for a reason other than coincident lines.
    #[error("scenario evaluation failed")]
    Engine(#[from] EngineError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The limit is still exceeded at the largest offset searched.
    #[error("limit still exceeded at {search_limit:?}: gas line at {temperature:?}")]
    Unreachable {
        search_limit: Length,
        temperature: ThermodynamicTemperature,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best temperature residual achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
