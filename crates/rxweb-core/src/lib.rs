//! # Reaction Web Core Library
//!
//! Models chemical reaction networks as sequences of energy-labelled
//! transformations and derives the quantities needed to compare reaction
//! pathways by relative free energy: cumulative energies, extrema, and the
//! data behind energy diagrams and heatmaps.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Molecule`, `Reaction`,
//!   `Path`, `Web`, `Enumeration`), tabular I/O, energy units and formula
//!   translation.
//!
//! - **[`render`]: Plotting Data.** Turns paths, webs and enumerations into the
//!   polylines and grids an external plotting tool draws. No image is produced here.
//!
//! - **[`workflows`]: The Public Entry Points.** File-level helpers that read a CSV
//!   of energies and hand back ready-to-use models.
//!
//! ```ignore
//! use reaction_web::core::io::schema::TableSchema;
//! use reaction_web::workflows;
//! use std::path::Path;
//!
//! let enm = workflows::ingest::enumeration_from_csv(Path::new("sweep.csv"), &TableSchema::default())?;
//! let path = enm.get("H")?.get("B")?;
//! println!("{}", path.as_path().unwrap());
//! ```

pub mod core;
pub mod render;
pub mod workflows;
