//! urodyn-cli library root.
//!
//! Exposes the config layer so integration tests can load and save configs
//! in a temporary directory instead of the user's config dir.

pub mod config;
pub mod report;
