//! Opening-to-host binding and face visibility for floor-plan geometry.
//!
//! [`operations::HostResolver`] keeps doors, windows and wall openings
//! attached to the right wall as walls are edited.
//! [`operations::FaceGeometryResolver`] derives the world-space outline of
//! an opening's faces, culling slab-hole sides nobody can see.

pub mod config;
pub mod error;
pub mod math;
pub mod model;
pub mod operations;

pub use config::ResolverConfig;
pub use error::{FenestraError, Result};
