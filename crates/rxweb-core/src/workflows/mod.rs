//! File-level entry points.
//!
//! Each workflow reads one CSV table with a [`TableSchema`](crate::core::io::schema::TableSchema)
//! and returns a ready-to-use model, so callers never handle raw rows.

pub mod ingest;
