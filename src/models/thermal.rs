//! Thermal systems models.
//!
//! This module contains models for heat transfer between buried utilities.

pub mod encroachment;
