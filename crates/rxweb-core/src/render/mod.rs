//! # Render Module
//!
//! Prepares the numbers an external plotting tool needs to draw energy diagrams
//! and heatmaps. Nothing here draws; every function returns plain data that can
//! be inspected, tested, or written out as CSV.
//!
//! ## Key Components
//!
//! - [`diagram`] - Energy-diagram polylines for paths and webs, honouring each
//!   path's step offsets (negative steps are drawn backward)
//! - [`heatmap`] - Labelled grids of energies or per-path metrics for webs and
//!   enumerations, with a shared colour range across panels
//! - [`error`] - Inconsistent inputs and output failures

pub mod diagram;
pub mod error;
pub mod heatmap;
