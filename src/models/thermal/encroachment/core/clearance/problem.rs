//! Problem formulation for the minimum-clearance search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::foot,
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::models::thermal::encroachment::core::{
    CalculationInput, EngineError, ScenarioKind, ScenarioResult, ThresholdPolicy, run_scenario,
};

/// Model adapter exposing the horizontal offset as the sole input.
pub(super) struct OffsetModel<'a> {
    input: &'a CalculationInput,
    kind: ScenarioKind,
    policy: &'a ThresholdPolicy,
}

impl<'a> OffsetModel<'a> {
    pub(super) fn new(
        input: &'a CalculationInput,
        kind: ScenarioKind,
        policy: &'a ThresholdPolicy,
    ) -> Self {
        Self {
            input,
            kind,
            policy,
        }
    }
}

impl Model for OffsetModel<'_> {
    type Input = Length;
    type Output = ScenarioResult;
    type Error = EngineError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        run_scenario(&self.input.with_offset(*input), self.kind, self.policy)
    }
}

/// Equation problem for the offset at which the gas line meets its limit.
///
/// Computes the residual as `final_temperature - limit` in °F.
pub(super) struct OffsetProblem {
    limit: ThermodynamicTemperature,
}

impl OffsetProblem {
    pub(super) fn new(limit: ThermodynamicTemperature) -> Self {
        Self { limit }
    }
}

impl EquationProblem<1> for OffsetProblem {
    type Input = Length;
    type Output = ScenarioResult;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<foot>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let actual = output.final_gas_line_temperature().get::<degree_fahrenheit>();
        let limit = self.limit.get::<degree_fahrenheit>();
        Ok([actual - limit])
    }
}
