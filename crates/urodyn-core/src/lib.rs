//! urodyn-core
//!
//! Pure domain types for urodynamic interpretation: the measurement record,
//! the controlled tag vocabularies, diagnosis labels, and the shape of an
//! analysis result. No logging and no I/O; the engine, the catalog and the
//! command-line harness all build on these types.

pub mod error;
pub mod models;
pub mod reference;
