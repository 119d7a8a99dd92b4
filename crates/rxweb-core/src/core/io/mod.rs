//! Reading reaction data from disk.
//!
//! Energies arrive as CSV tables with one row per species; a [`schema::TableSchema`]
//! names the columns to use and is itself loadable from TOML. [`table`] turns the
//! rows into molecules or into labelled paths ready to be arranged into an
//! enumeration.

pub mod schema;
pub mod table;
