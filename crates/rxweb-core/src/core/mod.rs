//! # Core Module
//!
//! The data model and derived-quantity engine of the library, plus the small
//! collaborators every consumer needs to feed it and present it.
//!
//! ## Architecture
//!
//! - **Reaction Network Representation** ([`models`]) - Molecules, reactions,
//!   paths, webs and axis-labelled enumerations of paths
//! - **Tabular I/O** ([`io`]) - CSV energy tables and TOML table schemas
//! - **Energy Units** ([`units`]) - Conversion factors between common energy units
//! - **Formula Typesetting** ([`translate`]) - Chemical formulae to LaTeX or Unicode
//! - **Utilities** ([`utils`]) - Natural ordering and label formatting
//!
//! Every model is immutable after construction and free of interior
//! mutability, so all of them can be shared between threads as plain
//! references.

pub mod io;
pub mod models;
pub mod translate;
pub mod units;
pub mod utils;
