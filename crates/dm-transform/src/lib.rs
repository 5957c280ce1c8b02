//! SDTM Demographics (DM) transformation.
//!
//! This crate is the merge engine behind the DM builder:
//!
//! - **normalization**: date parsing, age derivation, sex and arm terminology
//! - **exposure**: first/last exposure event per subject
//! - **demographics**: joins demographics with exposure and assembles DM records
//!
//! Everything here works on in-memory records and returns data-quality
//! findings as [`dm_model::Diagnostic`] values instead of logging them.

pub mod demographics;
pub mod exposure;
pub mod normalization;

pub use demographics::{TransformOutput, transform};
pub use exposure::{ExposureAggregation, aggregate_exposures};
pub use normalization::{
    AgeResult, DateNormalization, TreatmentMapping, compute_age, map_sex, map_treatment,
    normalize_date, parse_date,
};
