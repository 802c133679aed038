//! Procedural geometry for two browser scenes: a lattice of repeated
//! capsules or cylinders, and a forest of L-system trees drawn with a
//! turtle. Everything here is host independent; the wasm crate wraps it.

pub mod app;
pub mod config;
pub mod error;
pub mod forest;
pub mod lattice;
pub mod lsystem;
pub mod math;
pub mod mesh;
pub mod placement;
pub mod turtle;

pub use error::{ProcgenError, Result};
