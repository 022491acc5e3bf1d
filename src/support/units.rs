//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities crossing its API.
//! This module provides the pieces that buried-line heat transfer needs but
//! [`uom`] doesn't ship.
//!
//! ## Per-unit-length quantities
//!
//! A long buried pipe is modeled as a line source, so resistances and heat
//! rates are expressed per unit length of run:
//! [`LinearThermalResistance`] and [`LinearHeatRate`].
//! They compose with the stock quantities, so `ΔT / R` is checked by the
//! type system to be a heat rate per length.
//!
//! ## US customary units
//!
//! Field data and reports use BTU/hr·ft·°F, hr·ft·°F/BTU, and BTU/hr·ft.
//! [`btu_per_hour_foot_fahrenheit`] builds a conductivity from a catalog
//! value and [`UsCustomary`] reads results back out:
//!
//! ```
//! use thermal_encroachment::support::units::{UsCustomary, btu_per_hour_foot_fahrenheit};
//!
//! let soil = btu_per_hour_foot_fahrenheit(0.8);
//! assert!((soil.us_customary() - 0.8).abs() < 1e-12);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_fahrenheit;
//! use thermal_encroachment::support::units::TemperatureDifference;
//!
//! let fluid = ThermodynamicTemperature::new::<degree_fahrenheit>(225.0);
//! let ground = ThermodynamicTemperature::new::<degree_fahrenheit>(55.0);
//! let driving_delta = fluid.minus(ground);
//! // driving_delta is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod customary;
mod quantities;
mod temperature_difference;

pub use customary::{UsCustomary, btu_per_hour_foot_fahrenheit};
pub use quantities::{LinearHeatRate, LinearThermalResistance};
pub use temperature_difference::TemperatureDifference;
