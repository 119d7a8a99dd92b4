//! # Core Models Module
//!
//! Data structures representing a reaction network, from single species up to
//! combinatorial sweeps of whole mechanisms.
//!
//! ## Overview
//!
//! Data flows bottom-up: molecules compose into reactions, reactions into paths,
//! and paths into either a flat [`web::Web`] or the cells of an N-dimensional
//! [`enumeration::Enumeration`]. Analytics flow the other way: each level derives
//! its energies and extrema from the level below.
//!
//! ## Key Components
//!
//! - [`molecule`] - A named species with a scalar energy
//! - [`reaction`] - A transformation between two lists of molecules, optionally
//!   carrying an electrochemical correction
//! - [`path`] - An ordered chain of reactions with cumulative energies and extrema
//! - [`web`] - A collection of alternative paths
//! - [`enumeration`] - An axis-labelled grid of paths, indexed one axis at a time
//! - [`error`] - Construction and lookup failures
//!
//! ## Usage
//!
//! ```ignore
//! use reaction_web::core::models::{molecule::Molecule, path::Path, reaction::Reaction};
//!
//! let a = Molecule::new("a", -1.0);
//! let b = Molecule::new("b", -2.0);
//! let path = Path::new(vec![Reaction::new([a], [b])?], "a to b");
//! assert_eq!(path.min(), (1, -1.0));
//! ```

pub mod enumeration;
pub mod error;
pub mod molecule;
pub mod path;
pub mod reaction;
pub mod web;
