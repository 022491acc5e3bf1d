use tracing::debug;
use uom::si::thermodynamic_temperature::degree_fahrenheit;

use crate::support::units::UsCustomary;

use super::{
    CalculationInput, Conductivities, EngineError, ImageSource, ResolvedInputs, ScenarioKind,
    ScenarioOutputs, ScenarioResult, ThresholdPolicy, gas_line_temperature,
    ground_surface_temperature, heat_loss, resistance_network, resolve_gas_line,
    resolve_heat_source,
};

/// Runs the as-is scenario and, for an insulated heat source, the worst case.
///
/// # Errors
///
/// Returns an [`EngineError`] if either scenario fails; no partial results
/// are returned.
pub fn run(input: &CalculationInput, policy: &ThresholdPolicy) -> Result<ScenarioOutputs, EngineError> {
    let as_is = run_scenario(input, ScenarioKind::AsIs, policy)?;

    let worst_case = if input.heat_source.is_insulated() {
        Some(run_scenario(
            &input.without_insulation(),
            ScenarioKind::WorstCase,
            policy,
        )?)
    } else {
        None
    };

    Ok(ScenarioOutputs { as_is, worst_case })
}

/// Runs the full calculation for a single set of inputs.
///
/// # Errors
///
/// Returns an [`EngineError`] on invalid geometry or materials.
pub fn run_scenario(
    input: &CalculationInput,
    kind: ScenarioKind,
    policy: &ThresholdPolicy,
) -> Result<ScenarioResult, EngineError> {
    let source_geometry = resolve_heat_source(&input.heat_source)?;
    let gas_geometry = resolve_gas_line(&input.gas_line)?;
    let k = Conductivities::resolve(input)?;

    let resistances = resistance_network(&source_geometry, &k)?;
    let q = heat_loss(
        input.heat_source.temperature,
        input.soil.temperature,
        resistances.total,
    )?;

    let source = ImageSource {
        heat_loss: q,
        depth: source_geometry.depth,
        soil: &k.soil,
        surface: input.soil.temperature,
    };
    let gas_line = gas_line_temperature(
        &source,
        &gas_geometry,
        &input.orientation,
        k.gas_line_bedding.as_ref(),
    )?;
    let ground_surface = ground_surface_temperature(&source)?;

    let threshold = policy.evaluate(input.gas_line.material.class(), gas_line.final_temperature());

    debug!(
        %kind,
        total_resistance = resistances.total.us_customary(),
        heat_loss = q.us_customary(),
        gas_line_f = gas_line.final_temperature().get::<degree_fahrenheit>(),
        formula = %gas_line.formula,
        "scenario complete",
    );

    Ok(ScenarioResult {
        kind,
        resistances,
        heat_loss: q,
        gas_line,
        ground_surface,
        threshold,
        inputs: ResolvedInputs {
            source_temperature: input.heat_source.temperature,
            surface_temperature: input.soil.temperature,
            pipe_outer: source_geometry.outer,
            pipe_inner: source_geometry.inner,
            insulation_outer: source_geometry.insulation_outer,
            bedding_outer: source_geometry.bedding_outer,
            soil_radius: source_geometry.outermost_radius(),
            source_depth: source_geometry.depth,
            pipe_conductivity: *k.pipe,
            insulation_conductivity: k.insulation.map(|k| *k),
            bedding_conductivity: k.heat_source_bedding.map(|k| *k),
            soil_conductivity: *k.soil,
            gas_pipe_radius: gas_geometry.pipe_radius,
            gas_bedding_radius: gas_geometry.bedding_radius,
            gas_bedding_conductivity: k.gas_line_bedding.map(|k| *k),
            gas_depth: gas_geometry.depth,
            orientation: input.orientation,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Angle, Length, ThermodynamicTemperature},
        angle::degree,
        length::{foot, inch},
    };

    use crate::support::units::btu_per_hour_foot_fahrenheit;

    use crate::models::thermal::encroachment::core::{
        BeddingSpec, GasPipeMaterial, GeometryError, InsulationMaterial, InsulationSpec, MaterialChoice,
        MaterialClass, MaterialError, Orientation, OrientationFormula, PipeMaterial,
        ThresholdStatus, test_support::example_input,
    };

    fn fahrenheit(t: ThermodynamicTemperature) -> f64 {
        t.get::<degree_fahrenheit>()
    }

    fn parallel(separation_ft: f64) -> Orientation {
        Orientation::Parallel {
            separation: Length::new::<foot>(separation_ft),
        }
    }

    #[test]
    fn example_is_within_the_plastic_limit() {
        let outputs = run(&example_input(), &ThresholdPolicy::default()).unwrap();
        let as_is = &outputs.as_is;

        assert_eq!(as_is.kind, ScenarioKind::AsIs);
        assert!((30.0..=65.0).contains(&as_is.heat_loss.us_customary()));
        assert_relative_eq!(as_is.heat_loss.us_customary(), 60.22, epsilon = 0.05);

        let t = fahrenheit(as_is.final_gas_line_temperature());
        assert!(t > 55.0 && t < 70.0, "gas line at {t} °F");
        assert_relative_eq!(t, 59.81, epsilon = 0.02);
        assert_eq!(as_is.threshold, ThresholdStatus::WithinLimit);
        assert_eq!(as_is.gas_line.formula, OrientationFormula::Parallel);
    }

    #[test]
    fn close_parallel_run_exceeds_the_plastic_limit() {
        let mut input = example_input();
        input.orientation = parallel(1.5);

        let outputs = run(&input, &ThresholdPolicy::default()).unwrap();
        let t = fahrenheit(outputs.as_is.final_gas_line_temperature());
        assert!(t >= 70.0, "gas line at {t} °F");
        assert!(matches!(
            outputs.as_is.threshold,
            ThresholdStatus::LimitExceeded {
                class: MaterialClass::Plastic,
                ..
            }
        ));
    }

    #[test]
    fn insulation_failure_is_hotter() {
        let outputs = run(&example_input(), &ThresholdPolicy::default()).unwrap();
        let worst = outputs.worst_case.expect("insulated source has a worst case");

        assert_eq!(worst.kind, ScenarioKind::WorstCase);
        assert!(worst.heat_loss > outputs.as_is.heat_loss);
        assert!(worst.final_gas_line_temperature() >= outputs.as_is.final_gas_line_temperature());
        assert_eq!(worst.resistances.insulation.value, 0.0);
        assert_eq!(worst.inputs.insulation_outer, worst.inputs.pipe_outer);
        assert!(worst.inputs.insulation_conductivity.is_none());
        assert_relative_eq!(worst.heat_loss.us_customary(), 239.7, epsilon = 0.1);

        // Everything but the insulation is reused.
        assert_eq!(worst.inputs.soil_conductivity, outputs.as_is.inputs.soil_conductivity);
        assert_eq!(worst.inputs.gas_depth, outputs.as_is.inputs.gas_depth);
        assert_eq!(worst.gas_line.separation, outputs.as_is.gas_line.separation);

        assert_eq!(outputs.governing().kind, ScenarioKind::WorstCase);
        assert_eq!(outputs.scenarios().count(), 2);
    }

    #[test]
    fn uninsulated_source_has_no_worst_case() {
        let input = example_input().without_insulation();
        let outputs = run(&input, &ThresholdPolicy::default()).unwrap();
        assert!(outputs.worst_case.is_none());
        assert_eq!(outputs.scenarios().count(), 1);
        assert_eq!(outputs.governing(), &outputs.as_is);

        let mut input = example_input();
        input.heat_source.insulation = Some(InsulationSpec {
            thickness: Length::new::<inch>(0.0),
            material: MaterialChoice::Standard(InsulationMaterial::CalciumSilicate),
        });
        let outputs = run(&input, &ThresholdPolicy::default()).unwrap();
        assert!(outputs.worst_case.is_none());
    }

    #[test]
    fn zero_conductivity_insulation_has_no_worst_case() {
        let mut input = example_input();
        input.heat_source.insulation = Some(InsulationSpec {
            thickness: Length::new::<inch>(2.0),
            material: MaterialChoice::Custom(btu_per_hour_foot_fahrenheit(0.0)),
        });

        let outputs = run(&input, &ThresholdPolicy::default()).unwrap();
        let as_is = &outputs.as_is;
        assert!(outputs.worst_case.is_none());
        assert_eq!(as_is.resistances.insulation.value, 0.0);
        assert!(as_is.inputs.insulation_conductivity.is_none());

        // The jacket still sets the soil boundary.
        assert_relative_eq!(as_is.inputs.soil_radius.get::<inch>(), 5.3125, epsilon = 1e-9);

        let insulated = run(&example_input(), &ThresholdPolicy::default()).unwrap();
        assert!(as_is.heat_loss > insulated.as_is.heat_loss);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let input = example_input();
        let policy = ThresholdPolicy::default();
        assert_eq!(run(&input, &policy).unwrap(), run(&input, &policy).unwrap());
    }

    #[test]
    fn gas_bedding_is_reported_as_layered() {
        let mut input = example_input();
        input.gas_line.bedding = Some(BeddingSpec::sand(Length::new::<inch>(6.0)));

        let outputs = run(&input, &ThresholdPolicy::default()).unwrap();
        let gas_line = &outputs.as_is.gas_line;
        let layered = gas_line.layered.expect("bedding declared");

        // Sand conducts worse than this soil, so the correction is positive.
        assert!(layered > gas_line.homogeneous);
        assert_eq!(outputs.as_is.final_gas_line_temperature(), layered);
        assert!(outputs.as_is.inputs.gas_bedding_radius.is_some());
    }

    #[test]
    fn steel_uses_the_steel_limit() {
        let mut input = example_input();
        input.orientation = parallel(1.5);
        input.gas_line.material = GasPipeMaterial::CoatedSteelProtected;

        let outputs = run(&input, &ThresholdPolicy::default()).unwrap();
        assert_eq!(outputs.as_is.threshold, ThresholdStatus::WithinLimit);
    }

    #[test]
    fn angled_crossing_is_labelled() {
        let mut input = example_input();
        input.orientation = Orientation::Angled {
            lateral_offset: Length::new::<foot>(3.0),
            angle: Angle::new::<degree>(45.0),
        };
        let outputs = run(&input, &ThresholdPolicy::default()).unwrap();
        assert!(matches!(
            outputs.as_is.gas_line.formula,
            OrientationFormula::Blended { .. }
        ));
    }

    #[test]
    fn failures_are_atomic() {
        let mut input = example_input();
        input.heat_source.pipe.material = MaterialChoice::Standard(PipeMaterial::Pex);
        assert!(matches!(
            run(&input, &ThresholdPolicy::default()),
            Err(EngineError::Material(MaterialError::NotRatedFor { .. }))
        ));

        let mut input = example_input();
        input.heat_source.depth = Length::new::<inch>(4.0);
        assert!(matches!(
            run(&input, &ThresholdPolicy::default()),
            Err(EngineError::Geometry(GeometryError::SourceTooShallow { .. }))
        ));
    }

    #[test]
    fn outputs_round_trip_through_json() {
        let outputs = run(&example_input(), &ThresholdPolicy::default()).unwrap();
        let json = serde_json::to_string(&outputs).unwrap();
        let back: ScenarioOutputs = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(
            fahrenheit(back.as_is.final_gas_line_temperature()),
            fahrenheit(outputs.as_is.final_gas_line_temperature()),
            epsilon = 1e-9
        );
        assert_eq!(back.as_is.threshold, outputs.as_is.threshold);
        assert_eq!(back.as_is.gas_line.formula, outputs.as_is.gas_line.formula);
    }
}
