//! Thermal encroachment screening for buried gas lines.
//!
//! Predicts how much a buried steam, hot water, or superheated hot water line
//! warms a nearby gas line, and flags the result against the gas pipe
//! material's operating limit.
//!
//! Each request runs an **as-is** scenario with the insulation as declared
//! and, for an insulated heat source, a **worst-case** scenario with the
//! insulation removed. Both scenarios report every resistance, the heat loss,
//! the gas line and near-surface temperatures, and the resolved inputs behind
//! them.
//!
//! The model is steady-state and two-dimensional: transient behavior, more
//! than one heat source, and soil layering beyond a single bedding shell are
//! not modeled. Angled crossings blend the exact perpendicular and parallel
//! solutions with weight `sin θ`, a heuristic interpolation rather than an
//! exact result.
//!
//! # Example
//!
//! ```
//! use thermal_encroachment::{
//!     models::thermal::encroachment::{
//!         CalculationInput, GasLine, GasPipeMaterial, HeatSourceKind, HeatSourceLine,
//!         InsulationMaterial, InsulationSpec, MaterialChoice, Orientation, PipeMaterial,
//!         PipeSize, PipeSpec, SoilSpec, ThresholdStatus, WallThickness, run,
//!     },
//!     support::units::btu_per_hour_foot_fahrenheit,
//! };
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature},
//!     length::{foot, inch},
//!     thermodynamic_temperature::degree_fahrenheit,
//! };
//!
//! let input = CalculationInput {
//!     heat_source: HeatSourceLine {
//!         kind: HeatSourceKind::Steam,
//!         temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(225.0),
//!         pipe: PipeSpec {
//!             size: PipeSize::Ips(6.0),
//!             wall: WallThickness::Standard(Length::new::<inch>(0.280)),
//!             material: MaterialChoice::Standard(PipeMaterial::CarbonSteel),
//!         },
//!         insulation: Some(InsulationSpec {
//!             thickness: Length::new::<inch>(2.0),
//!             material: MaterialChoice::Standard(InsulationMaterial::CalciumSilicate),
//!         }),
//!         bedding: None,
//!         depth: Length::new::<foot>(5.0),
//!     },
//!     gas_line: GasLine {
//!         material: GasPipeMaterial::Hdpe,
//!         size: PipeSize::Ips(2.0),
//!         bedding: None,
//!         depth: Length::new::<foot>(4.0),
//!     },
//!     soil: SoilSpec {
//!         conductivity: btu_per_hour_foot_fahrenheit(0.8),
//!         temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(55.0),
//!     },
//!     orientation: Orientation::Parallel {
//!         separation: Length::new::<foot>(8.0),
//!     },
//! };
//!
//! let outputs = run(&input)?;
//! assert_eq!(outputs.as_is.threshold, ThresholdStatus::WithinLimit);
//! assert!(outputs.worst_case.is_some());
//! # Ok::<(), thermal_encroachment::models::thermal::encroachment::EngineError>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    BeddingMaterial, BeddingSide, BeddingSides, BeddingSpec, CalculationInput, Catalog, Clearance,
    ClearanceConfig, ClearanceError, EngineError, GasLine, GasLineTemperature, GasPipeMaterial,
    GeometryError, HeatSourceKind, HeatSourceLine, InsulationMaterial, InsulationSpec, Layer, Line,
    MaterialChoice, MaterialClass, MaterialError, Orientation, OrientationFormula, PipeMaterial,
    PipeSize, PipeSpec, ResolvedInputs, Resistances, SURFACE_PROBE_DEPTH, ScenarioKind,
    ScenarioOutputs, ScenarioResult, SoilSpec, ThresholdPolicy, ThresholdStatus, WallThickness,
};

use twine_core::Model;

/// Encroachment screening as a Twine [`Model`].
///
/// Holds only the threshold policy; every call is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EncroachmentScreen {
    pub policy: ThresholdPolicy,
}

impl EncroachmentScreen {
    #[must_use]
    pub fn new(policy: ThresholdPolicy) -> Self {
        Self { policy }
    }

    /// Finds the smallest horizontal offset that keeps the gas line below its
    /// limit in the given scenario.
    ///
    /// # Errors
    ///
    /// See [`ClearanceError`].
    pub fn minimum_clearance(
        &self,
        input: &CalculationInput,
        kind: ScenarioKind,
        config: ClearanceConfig,
    ) -> Result<Clearance, ClearanceError> {
        core::minimum_clearance(input, kind, &self.policy, config)
    }
}

impl Model for EncroachmentScreen {
    type Input = CalculationInput;
    type Output = ScenarioOutputs;
    type Error = EngineError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::run(input, &self.policy)
    }
}

/// Screens a request against the default 70 °F plastic and 150 °F steel limits.
///
/// # Errors
///
/// Returns an [`EngineError`] on invalid geometry or materials.
pub fn run(input: &CalculationInput) -> Result<ScenarioOutputs, EngineError> {
    core::run(input, &ThresholdPolicy::default())
}

/// Screens a request against a custom threshold policy.
///
/// # Errors
///
/// Returns an [`EngineError`] on invalid geometry or materials.
pub fn run_with_policy(
    input: &CalculationInput,
    policy: &ThresholdPolicy,
) -> Result<ScenarioOutputs, EngineError> {
    core::run(input, policy)
}
