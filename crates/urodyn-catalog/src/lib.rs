//! urodyn-catalog
//!
//! Ready-made data for the engine: exam templates that pre-fill part of a
//! record, and a library of complete teaching cases.

pub mod cases;
pub mod error;
pub mod templates;
