//! Minimum horizontal clearance for a gas line to stay below its limit.
//!
//! The gas line temperature falls monotonically with the lateral offset (or
//! parallel separation), so the smallest acceptable offset is the root of
//! `T_gas(offset) − limit`, found by bisection.

mod config;
mod error;
mod problem;

pub use config::ClearanceConfig;
pub use error::ClearanceError;

use serde::{Deserialize, Serialize};
use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Length, TemperatureInterval},
        length::foot,
        temperature_interval::degree_fahrenheit as delta_fahrenheit,
    },
};

use super::{
    CalculationInput, EngineError, GeometryError, ScenarioKind, ScenarioResult, ThresholdPolicy,
};

use problem::{OffsetModel, OffsetProblem};

/// Outcome of a minimum-clearance search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Clearance {
    /// The gas line stays below its limit even with no horizontal offset.
    NotRequired,

    /// The smallest offset at which the gas line reaches its limit, to within
    /// the configured tolerance. Any larger offset keeps it below the limit.
    Required(Length),
}

/// Finds the smallest horizontal offset that keeps the gas line below its limit.
///
/// Only the offset of `input.orientation` varies; the orientation kind and
/// crossing angle are kept. For [`ScenarioKind::WorstCase`] the search runs
/// with the insulation removed.
///
/// # Errors
///
/// Returns [`ClearanceError::Unreachable`] if the limit is still exceeded at
/// `config.search_limit`, [`ClearanceError::Engine`] if a scenario fails for
/// any reason other than coincident centerlines, or a solver error if the
/// bisection does not converge.
pub fn minimum_clearance(
    input: &CalculationInput,
    kind: ScenarioKind,
    policy: &ThresholdPolicy,
    config: ClearanceConfig,
) -> Result<Clearance, ClearanceError> {
    let base = match kind {
        ScenarioKind::AsIs => input.clone(),
        ScenarioKind::WorstCase => input.without_insulation(),
    };
    let limit = policy.limit_for(input.gas_line.material.class());
    let model = OffsetModel::new(&base, kind, policy);

    if let Some(result) = evaluate(&model, Length::ZERO)?
        && !result.threshold.is_exceeded()
    {
        return Ok(Clearance::NotRequired);
    }

    if let Some(result) = evaluate(&model, config.search_limit)?
        && result.threshold.is_exceeded()
    {
        return Err(ClearanceError::Unreachable {
            search_limit: config.search_limit,
            temperature: result.final_gas_line_temperature(),
        });
    }

    let problem = OffsetProblem::new(limit);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, config.search_limit.get::<foot>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Coincident centerlines are infinitely hot: treat as exceeded.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(ClearanceError::MaxIters {
            residual: TemperatureInterval::new::<delta_fahrenheit>(solution.residual),
            iters: solution.iters,
        });
    }

    let offset = solution.snapshot.output.inputs.orientation.offset();
    debug!(%kind, offset_ft = offset.get::<foot>(), iters = solution.iters, "clearance found");
    Ok(Clearance::Required(offset))
}

/// Evaluates a scenario at `offset`; `None` means the centerlines coincide.
fn evaluate(
    model: &OffsetModel<'_>,
    offset: Length,
) -> Result<Option<ScenarioResult>, EngineError> {
    match model.call(&offset) {
        Ok(result) => Ok(Some(result)),
        Err(EngineError::Geometry(GeometryError::CoincidentLines)) => Ok(None),
        Err(error) => Err(error),
    }
}
