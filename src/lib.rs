//! # Thermal Encroachment
//!
//! Steady-state screening of buried steam and hot water lines that run near
//! or cross gas pipelines, built as a [Twine](https://github.com/isentropic-dev/twine)
//! model.
//!
//! Given pipe, insulation, bedding, and soil properties, the crate computes
//! the thermal resistance network around the heat source, its heat loss per
//! unit length, and the resulting gas line and near-surface temperatures by
//! the method of images. Results are checked against material-keyed limits,
//! and a bisection search finds the smallest horizontal clearance that keeps
//! the gas line below its limit.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]: `debug` per scenario, `trace`
//! per resistance layer and formula branch, and `warn` when a gas line limit
//! is exceeded. The crate never installs a subscriber.
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific utility code remains private.

pub mod models;
pub mod support;
